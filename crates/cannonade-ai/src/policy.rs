//! Per-tick gunner policy.
//!
//! Given the cannon's state and the tracked target, decide how to move,
//! where to aim and whether to charge or fire. No entity store involved.

use rand::Rng;

use cannonade_core::cannon::Cannon;
use cannonade_core::constants::*;
use cannonade_core::types::{TargetSighting, Vec2};

/// Input to the policy for one tick.
pub struct GunnerContext<'a> {
    pub cannon: &'a Cannon,
    /// The live target being tracked, if any.
    pub target: Option<&'a TargetSighting>,
}

/// What the gunner will do this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GunnerOrders {
    /// Point to aim the barrel at.
    pub aim_at: Option<Vec2>,
    /// Horizontal step (`-AI_STEP`, 0 or `AI_STEP`).
    pub step: f64,
    /// Start charging.
    pub activate: bool,
    /// Power to add while charging.
    pub gain: f64,
    /// Release the shell after gaining.
    pub fire: bool,
}

/// Evaluate the policy. Without a target the gunner holds still.
pub fn evaluate<R: Rng>(ctx: &GunnerContext<'_>, rng: &mut R) -> GunnerOrders {
    let Some(target) = ctx.target else {
        return GunnerOrders::default();
    };
    let cannon = ctx.cannon;

    let dx = target.position.x - cannon.position.x;
    let step = if dx < 0.0 {
        -AI_STEP
    } else if dx > 0.0 {
        AI_STEP
    } else {
        0.0
    };

    let activate = cannon.is_idle() && rng.gen_bool(AI_ACTIVATE_CHANCE);
    let charging = cannon.charging || activate;

    let (gain, fire) = if charging {
        let gain = rng.gen_range(AI_GAIN_MIN..=AI_GAIN_MAX) as f64;
        let projected = (cannon.power + gain).min(cannon.max_power);
        (gain, projected >= cannon.max_power)
    } else {
        (0.0, false)
    };

    GunnerOrders {
        aim_at: Some(target.position),
        step,
        activate,
        gain,
        fire,
    }
}
