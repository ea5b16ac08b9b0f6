#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use cannonade_core::cannon::Cannon;
    use cannonade_core::config::FieldConfig;
    use cannonade_core::constants::*;
    use cannonade_core::enums::ShotKind;
    use cannonade_core::types::{TargetId, TargetSighting, Vec2};

    use crate::controller::AiController;
    use crate::policy::{evaluate, GunnerContext};
    use crate::selection::{resolve, select_target};

    fn sighting(id: u64, x: f64, y: f64) -> TargetSighting {
        TargetSighting {
            id: TargetId(id),
            position: Vec2::new(x, y),
            radius: 20.0,
        }
    }

    fn gunner() -> AiController {
        AiController::opponent(&FieldConfig::default(), ShotKind::Standard)
    }

    // ---- Selection ----

    #[test]
    fn test_select_from_empty_is_none() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(select_target(&[], &mut rng), None);
    }

    #[test]
    fn test_select_returns_a_live_target() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let sightings = [sighting(1, 10.0, 10.0), sighting(2, 20.0, 20.0)];
        for _ in 0..50 {
            let id = select_target(&sightings, &mut rng).unwrap();
            assert!(sightings.iter().any(|s| s.id == id));
        }
    }

    #[test]
    fn test_select_covers_all_targets() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let sightings = [
            sighting(1, 0.0, 0.0),
            sighting(2, 0.0, 0.0),
            sighting(3, 0.0, 0.0),
        ];
        let mut seen = [false; 3];
        for _ in 0..200 {
            let id = select_target(&sightings, &mut rng).unwrap();
            seen[(id.0 - 1) as usize] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_resolve_misses_stale_handle() {
        let sightings = [sighting(4, 10.0, 10.0)];
        assert!(resolve(Some(TargetId(4)), &sightings).is_some());
        assert!(resolve(Some(TargetId(5)), &sightings).is_none());
        assert!(resolve(None, &sightings).is_none());
    }

    // ---- Policy ----

    #[test]
    fn test_no_target_means_no_orders() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let cannon = Cannon::opponent(&FieldConfig::default(), ShotKind::Standard);
        let orders = evaluate(
            &GunnerContext {
                cannon: &cannon,
                target: None,
            },
            &mut rng,
        );
        assert_eq!(orders.aim_at, None);
        assert_eq!(orders.step, 0.0);
        assert!(!orders.activate && !orders.fire);
    }

    #[test]
    fn test_step_toward_target_x() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let cannon = Cannon::opponent(&FieldConfig::default(), ShotKind::Standard);

        let left = sighting(1, 100.0, 100.0);
        let right = sighting(2, 790.0, 100.0);
        let above = sighting(3, cannon.position.x, 100.0);

        let step_for = |t: &TargetSighting, rng: &mut ChaCha8Rng| {
            evaluate(
                &GunnerContext {
                    cannon: &cannon,
                    target: Some(t),
                },
                rng,
            )
            .step
        };
        assert_eq!(step_for(&left, &mut rng), -AI_STEP);
        assert_eq!(step_for(&right, &mut rng), AI_STEP);
        assert_eq!(step_for(&above, &mut rng), 0.0);
    }

    #[test]
    fn test_charging_gain_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut cannon = Cannon::opponent(&FieldConfig::default(), ShotKind::Standard);
        cannon.activate();
        let target = sighting(1, 100.0, 100.0);
        for _ in 0..100 {
            let orders = evaluate(
                &GunnerContext {
                    cannon: &cannon,
                    target: Some(&target),
                },
                &mut rng,
            );
            assert!(!orders.activate, "already charging");
            assert!((1.0..=3.0).contains(&orders.gain));
            assert_eq!(orders.gain.fract(), 0.0);
            assert!(!orders.fire);
        }
    }

    #[test]
    fn test_fire_when_power_would_reach_max() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut cannon = Cannon::opponent(&FieldConfig::default(), ShotKind::Standard);
        cannon.activate();
        cannon.gain(CANNON_MAX_POWER - 1.0);
        let target = sighting(1, 100.0, 100.0);
        let orders = evaluate(
            &GunnerContext {
                cannon: &cannon,
                target: Some(&target),
            },
            &mut rng,
        );
        assert!(orders.fire);
    }

    #[test]
    fn test_idle_gunner_eventually_activates() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let cannon = Cannon::opponent(&FieldConfig::default(), ShotKind::Standard);
        let target = sighting(1, 100.0, 100.0);
        let activations = (0..200)
            .filter(|_| {
                evaluate(
                    &GunnerContext {
                        cannon: &cannon,
                        target: Some(&target),
                    },
                    &mut rng,
                )
                .activate
            })
            .count();
        // Roughly 30% of 200.
        assert!(activations > 30 && activations < 100, "got {activations}");
    }

    // ---- Controller ----

    #[test]
    fn test_controller_idle_without_targets() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut ai = gunner();
        let before = ai.cannon.clone();
        for _ in 0..20 {
            let outcome = ai.update(&[], &FieldConfig::default(), &mut rng);
            assert!(outcome.shell.is_none());
            assert!(outcome.acquired.is_none());
        }
        assert_eq!(ai.cannon, before);
        assert_eq!(ai.tracked(), None);
    }

    #[test]
    fn test_controller_keeps_live_target() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut ai = gunner();
        let sightings = [sighting(1, 100.0, 100.0), sighting(2, 600.0, 50.0)];

        let first = ai.update(&sightings, &FieldConfig::default(), &mut rng);
        let tracked = first.acquired.unwrap();
        for _ in 0..30 {
            let outcome = ai.update(&sightings, &FieldConfig::default(), &mut rng);
            assert!(outcome.acquired.is_none());
            assert_eq!(ai.tracked(), Some(tracked));
        }
    }

    #[test]
    fn test_controller_reacquires_after_target_loss() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut ai = gunner();
        let field = FieldConfig::default();

        ai.update(&[sighting(1, 100.0, 100.0)], &field, &mut rng);
        assert_eq!(ai.tracked(), Some(TargetId(1)));

        let outcome = ai.update(&[sighting(2, 200.0, 100.0)], &field, &mut rng);
        assert_eq!(outcome.acquired, Some(TargetId(2)));
        assert_eq!(ai.tracked(), Some(TargetId(2)));

        ai.update(&[], &field, &mut rng);
        assert_eq!(ai.tracked(), None);
    }

    #[test]
    fn test_controller_walks_and_aims() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut ai = gunner();
        let field = FieldConfig::default();
        let start_x = ai.cannon.position.x;
        let target = sighting(1, 100.0, 100.0);

        ai.update(&[target], &field, &mut rng);
        assert_eq!(ai.cannon.position.x, start_x - AI_STEP);
        // Aim is taken before the step.
        let offset = target.position - Vec2::new(start_x, ai.cannon.position.y);
        assert!((ai.cannon.angle - offset.y.atan2(offset.x)).abs() < 1e-12);
    }

    #[test]
    fn test_controller_eventually_fires_and_resets() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut ai = gunner();
        let field = FieldConfig::default();
        let target = sighting(1, 300.0, 200.0);

        let mut fired = None;
        for _ in 0..500 {
            if let Some(shell) = ai.update(&[target], &field, &mut rng).shell {
                fired = Some(shell);
                break;
            }
            assert!(ai.cannon.power <= ai.cannon.max_power);
        }
        let shell = fired.expect("gunner should fire within 500 ticks");
        assert!((shell.speed() - CANNON_MAX_POWER).abs() < 1e-9);
        assert_eq!(ai.cannon.power, ai.cannon.min_power);
        assert!(ai.cannon.is_idle());
    }
}
