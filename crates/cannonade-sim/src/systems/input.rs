//! Input system: applies queued input events and the pointer to the
//! player's cannon.

use std::collections::VecDeque;

use hecs::World;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use cannonade_core::cannon::Cannon;
use cannonade_core::commands::{InputEvent, PointerState};
use cannonade_core::config::FieldConfig;
use cannonade_core::constants::PLAYER_STEP;
use cannonade_core::enums::{Key, MouseButton, Shooter};
use cannonade_core::events::SimEvent;
use cannonade_core::score::ScoreTracker;

use crate::world_setup;

/// Drain the queue, then re-aim at the pointer if it is over the field.
/// Returns true when a quit event was seen.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    queue: &mut VecDeque<InputEvent>,
    pointer: &PointerState,
    player: &mut Cannon,
    field: &FieldConfig,
    rng: &mut ChaCha8Rng,
    score: &mut ScoreTracker,
    events: &mut Vec<SimEvent>,
) -> bool {
    let mut quit = false;

    while let Some(event) = queue.pop_front() {
        match event {
            InputEvent::Quit => {
                info!("quit requested");
                quit = true;
            }
            InputEvent::KeyDown { key: Key::Left } => player.move_by(-PLAYER_STEP, field),
            InputEvent::KeyDown { key: Key::Right } => player.move_by(PLAYER_STEP, field),
            InputEvent::MouseButtonDown {
                button: MouseButton::Left,
            } => player.activate(),
            InputEvent::MouseButtonUp {
                button: MouseButton::Left,
            } => {
                let mut shell = player.fire();
                shell.color = world_setup::random_color(rng);
                let speed = shell.speed();
                world_setup::spawn_projectile(world, shell, Shooter::Player);
                score.shots_used += 1;
                events.push(SimEvent::ShotFired {
                    shooter: Shooter::Player,
                    speed,
                });
                debug!(speed, shots_used = score.shots_used, "player fired");
            }
            InputEvent::MouseButtonDown { .. } | InputEvent::MouseButtonUp { .. } => {}
        }
    }

    if pointer.focused {
        player.set_angle(pointer.position);
    }

    quit
}
