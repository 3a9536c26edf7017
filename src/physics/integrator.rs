//! Numerical integration of body motion.
//!
//! Uses semi-implicit (symplectic) Euler: the velocity is kicked by the
//! current acceleration first and the *new* velocity drifts the position.
//! Unlike explicit Euler it does not pump energy into closed orbits, so
//! gravity-bound trajectories stay bounded over long runs at any step size
//! the time-scale multiplier produces.

use crate::math::Vector;

/// One semi-implicit Euler step.
///
/// Returns the new `(position, velocity)`:
/// - `v' = v + a·dt`
/// - `x' = x + v'·dt`
#[inline]
pub fn semi_implicit_euler(
    position: Vector,
    velocity: Vector,
    acceleration: Vector,
    dt: f64,
) -> (Vector, Vector) {
    let velocity = velocity + acceleration * dt;
    let position = position + velocity * dt;
    (position, velocity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    const GM: f64 = 1.0e6;

    fn central_acc(pos: Vector) -> Vector {
        let r_sq = pos.length_squared();
        let r = r_sq.sqrt();
        -pos * (GM / (r_sq * r))
    }

    fn specific_energy(pos: Vector, vel: Vector) -> f64 {
        0.5 * vel.length_squared() - GM / pos.length()
    }

    #[test]
    fn test_single_step_ordering() {
        let (pos, vel) = semi_implicit_euler(
            Vector::ZERO,
            Vector::new(1.0, 0.0),
            Vector::new(0.0, 2.0),
            1.0,
        );
        assert_eq!(vel, Vector::new(1.0, 2.0));
        assert_eq!(pos, Vector::new(1.0, 2.0));
    }

    #[test]
    fn test_zero_dt_is_identity() {
        let pos = Vector::new(3.0, -4.0);
        let vel = Vector::new(0.5, 0.5);
        assert_eq!(
            semi_implicit_euler(pos, vel, Vector::new(9.0, 9.0), 0.0),
            (pos, vel)
        );
    }

    #[test]
    fn test_circular_orbit_stays_bounded() {
        let r = 400.0;
        let mut pos = Vector::new(r, 0.0);
        let mut vel = Vector::new(0.0, (GM / r).sqrt());
        let e0 = specific_energy(pos, vel);

        let period = TAU * (r * r * r / GM).sqrt();
        let steps = 2_000;
        let dt = period / steps as f64;

        for _ in 0..steps * 10 {
            let (p, v) = semi_implicit_euler(pos, vel, central_acc(pos), dt);
            pos = p;
            vel = v;
        }

        let radius_error = (pos.length() - r).abs() / r;
        assert!(radius_error < 0.01, "radius drifted {radius_error:.4}");

        let drift = ((specific_energy(pos, vel) - e0) / e0).abs();
        assert!(drift < 0.01, "energy drifted {drift:.4}");
    }

    #[test]
    fn test_explicit_euler_spirals_out_where_symplectic_does_not() {
        let r = 400.0;
        let start_pos = Vector::new(r, 0.0);
        let start_vel = Vector::new(0.0, (GM / r).sqrt());
        let period = TAU * (r * r * r / GM).sqrt();
        let dt = period / 200.0;

        let (mut ep, mut ev) = (start_pos, start_vel);
        let (mut sp, mut sv) = (start_pos, start_vel);
        for _ in 0..6_000 {
            let acc = central_acc(ep);
            ep += ev * dt;
            ev += acc * dt;

            let (p, v) = semi_implicit_euler(sp, sv, central_acc(sp), dt);
            sp = p;
            sv = v;
        }

        assert!(ep.length() > 1.5 * r, "explicit Euler should spiral outward");
        assert!((sp.length() - r).abs() < 0.1 * r);
    }
}
