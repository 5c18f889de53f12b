//! Lead-prediction aiming for a target seen through a propagation delay.
//!
//! The turret only knows where the ship was `delay` seconds ago. Its shot then
//! needs `delay / projectile_speed` more seconds to arrive, so the aim point is
//! the delayed state extrapolated over both legs, plus random scatter that
//! grows with the delay.

use glam::DVec2;
use rand::Rng;

use lagshot_core::config::SimConfig;
use lagshot_core::types::Kinematics;

/// Where a single shot lands and when its outcome is decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimSolution {
    pub aim_point: DVec2,
    pub arrival_tick: u64,
}

/// Constant-acceleration extrapolation of a delayed snapshot.
///
/// `p + v*t + 0.5*a*t²` with `t = total_delay_secs`. Assumes the target keeps
/// its thrust vector fixed for the whole window.
pub fn predict_intercept(delayed: &Kinematics, total_delay_secs: f64) -> DVec2 {
    let t = total_delay_secs;
    delayed.position + delayed.velocity * t + 0.5 * delayed.acceleration * t * t
}

/// Aim error with a triangular distribution on
/// `[-delay * max_scatter, +delay * max_scatter]`, independent per axis.
pub fn sample_scatter<R: Rng + ?Sized>(
    rng: &mut R,
    propagation_delay_secs: f64,
    max_scatter_distance: f64,
) -> DVec2 {
    let mut axis = || {
        let a = rng.gen_range(0.0..=propagation_delay_secs);
        let b = rng.gen_range(0.0..=propagation_delay_secs);
        (a + b - propagation_delay_secs) * max_scatter_distance
    };
    let x = axis();
    let y = axis();
    DVec2::new(x, y)
}

/// Compute one shot's aim point and arrival tick.
///
/// The only stochastic step in the engine; every draw comes from `rng`.
pub fn aim<R: Rng + ?Sized>(
    config: &SimConfig,
    current_tick: u64,
    delayed: &Kinematics,
    rng: &mut R,
) -> AimSolution {
    let predicted = predict_intercept(delayed, config.total_delay_secs());
    let scatter = sample_scatter(
        rng,
        config.propagation_delay_secs,
        config.max_scatter_distance,
    );
    AimSolution {
        aim_point: predicted + scatter,
        arrival_tick: current_tick.saturating_add(config.travel_ticks()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_stationary_target_needs_no_lead() {
        let delayed = Kinematics::default();
        assert_eq!(predict_intercept(&delayed, 2.0), DVec2::ZERO);
    }

    #[test]
    fn test_constant_velocity_lead() {
        let delayed = Kinematics::new(DVec2::ZERO, DVec2::new(100.0, 0.0), DVec2::ZERO);
        assert_eq!(predict_intercept(&delayed, 2.0), DVec2::new(200.0, 0.0));
    }

    #[test]
    fn test_acceleration_term() {
        let delayed = Kinematics::new(
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 5.0),
            DVec2::new(4.0, 0.0),
        );
        // p + v*3 + 0.5*a*9
        let predicted = predict_intercept(&delayed, 3.0);
        assert_abs_diff_eq!(predicted.x, 10.0 + 18.0);
        assert_abs_diff_eq!(predicted.y, 10.0 + 15.0);
    }

    #[test]
    fn test_scatter_stays_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let bound = 2.0 * 25.0;
        let mut max_seen: f64 = 0.0;
        for _ in 0..5_000 {
            let s = sample_scatter(&mut rng, 2.0, 25.0);
            assert!(s.x.abs() <= bound && s.y.abs() <= bound, "scatter {s} out of bounds");
            max_seen = max_seen.max(s.x.abs()).max(s.y.abs());
        }
        // The distribution actually spreads, it is not stuck at zero.
        assert!(max_seen > 10.0);
    }

    #[test]
    fn test_scatter_is_centered() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let n = 20_000;
        let mut sum = DVec2::ZERO;
        for _ in 0..n {
            sum += sample_scatter(&mut rng, 1.0, 25.0);
        }
        let mean = sum / n as f64;
        assert!(mean.x.abs() < 0.5 && mean.y.abs() < 0.5, "mean {mean}");
    }

    #[test]
    fn test_zero_scatter_aims_at_prediction_exactly() {
        let config = SimConfig {
            max_scatter_distance: 0.0,
            ..Default::default()
        };
        let delayed = Kinematics::new(
            DVec2::new(3.5, -7.25),
            DVec2::new(101.3, 12.7),
            DVec2::new(-40.0, 91.65),
        );
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let solution = aim(&config, 60, &delayed, &mut rng);
        assert_eq!(
            solution.aim_point,
            predict_intercept(&delayed, config.total_delay_secs())
        );
        assert_eq!(solution.arrival_tick, 120);
    }

    #[test]
    fn test_zero_delay_has_no_scatter() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let s = sample_scatter(&mut rng, 0.0, 25.0);
        assert_eq!(s.length(), 0.0);
    }

    #[test]
    fn test_arrival_tick_uses_projectile_speed() {
        let config = SimConfig {
            projectile_speed_fraction: 0.25,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let solution = aim(&config, 75, &Kinematics::default(), &mut rng);
        assert_eq!(solution.arrival_tick, 75 + 240);
    }
}
