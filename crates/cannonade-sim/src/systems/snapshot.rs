//! Snapshot system: turns the world into draw requests for the render sink.
//!
//! This system is read-only: it never modifies the world.

use hecs::World;

use cannonade_core::cannon::Cannon;
use cannonade_core::constants::*;
use cannonade_core::events::SimEvent;
use cannonade_core::projectile::Projectile;
use cannonade_core::score::ScoreTracker;
use cannonade_core::state::{DrawCommand, FrameSnapshot, ScoreView};
use cannonade_core::target::Target;
use cannonade_core::types::{direction, truncate, Color, SimTime, Vec2};

/// Build a complete FrameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    wave: u32,
    quit: bool,
    cannons: &[&Cannon],
    score: &ScoreTracker,
    events: Vec<SimEvent>,
) -> FrameSnapshot {
    let mut draw = Vec::new();
    draw_projectiles(world, &mut draw);
    draw_targets(world, &mut draw);
    for cannon in cannons {
        draw_cannon(cannon, &mut draw);
    }
    draw_score(score, &mut draw);

    FrameSnapshot {
        time: *time,
        wave,
        quit,
        draw,
        score: ScoreView {
            destroyed: score.destroyed,
            shots_used: score.shots_used,
            total: score.score(),
        },
        events,
    }
}

fn circle(projectile: &Projectile) -> DrawCommand {
    DrawCommand::Circle {
        center: projectile.position,
        radius: projectile.radius,
        color: projectile.color,
    }
}

fn draw_projectiles(world: &World, draw: &mut Vec<DrawCommand>) {
    let mut query = world.query::<&Projectile>();
    draw.extend(query.iter().map(|(_, p)| circle(p)));
}

/// Each target, followed by the bombs it owns.
fn draw_targets(world: &World, draw: &mut Vec<DrawCommand>) {
    for (_, target) in world.query::<&Target>().iter() {
        draw.push(DrawCommand::Circle {
            center: target.position,
            radius: target.radius,
            color: target.color,
        });
        draw.extend(target.bombs().iter().map(circle));
    }
}

/// Body, two wheels, and a barrel whose length shows the charge.
fn draw_cannon(cannon: &Cannon, draw: &mut Vec<DrawCommand>) {
    let pos = cannon.position;
    let color = cannon.color;

    draw.push(DrawCommand::Rect {
        origin: Vec2::new(pos.x - CANNON_BODY_WIDTH / 2.0, pos.y),
        size: Vec2::new(CANNON_BODY_WIDTH, CANNON_BODY_HEIGHT),
        color,
    });
    for side in [-1.0, 1.0] {
        draw.push(DrawCommand::Circle {
            center: pos + Vec2::new(side * CANNON_WHEEL_OFFSET_X, CANNON_WHEEL_OFFSET_Y),
            radius: CANNON_WHEEL_RADIUS,
            color,
        });
    }

    let half_width = truncate(
        CANNON_BARREL_HALF_WIDTH * direction(cannon.angle - std::f64::consts::FRAC_PI_2),
    );
    let length = truncate(cannon.power * direction(cannon.angle));
    draw.push(DrawCommand::Polygon {
        points: vec![
            pos + half_width,
            pos + half_width + length,
            pos + length - half_width,
            pos - half_width,
        ],
        color,
    });
}

fn draw_score(score: &ScoreTracker, draw: &mut Vec<DrawCommand>) {
    let lines = [
        (format!("Destroyed: {}", score.destroyed), Color::WHITE),
        (format!("Shots used: {}", score.shots_used), Color::WHITE),
        (format!("Total: {}", score.score()), Color::RED),
    ];
    for (i, (text, color)) in lines.into_iter().enumerate() {
        draw.push(DrawCommand::Text {
            position: Vec2::new(SCORE_TEXT_X, SCORE_TEXT_Y + SCORE_LINE_SPACING * i as f64),
            text,
            color,
        });
    }
}
