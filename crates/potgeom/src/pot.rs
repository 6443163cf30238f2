//! Volume of a tapered pot via two virtual cones.
//!
//! Extending the slant walls of a pot which widens upwards gives a "big
//! cone" with its apex below the base. Cutting that cone at the base
//! leaves the pot plus a "small cone" underneath, so the pot volume is
//! the difference of the two cone volumes.
//!
//! ```text
//!      diameter_top
//!     ______________
//!     \ beta | beta/
//!      \     |    /   height
//!       \____|___/
//!        \   |  /     diameter_base
//!         \  | /      height of small cone
//!          \ |/
//!          alpha
//! ```

use crate::{VolumeModel, cone_volume};
use std::f64::consts::FRAC_PI_2;

/// Angles of the virtual cone construction in radians.
///
/// `beta` is the base angle of the orthogonal triangle spanned by the
/// pot height and half the diameter difference. `alpha` is derived from
/// it as `FRAC_PI_2 - 2 * beta` and drives the cone height derivation
/// below. Requires `diameter_top != diameter_base`, otherwise the
/// triangle degenerates and `beta` saturates at a right angle.
pub fn compute_angles(diameter_top: f64, diameter_base: f64, height: f64) -> (f64, f64) {
    let width = (diameter_top - diameter_base) / 2.;
    let beta = (height / width).atan();
    let alpha = FRAC_PI_2 - 2. * beta;
    (alpha, beta)
}

/// Heights of the small and big virtual cone.
///
/// The small cone sits below the pot base; the big cone reaches from
/// the apex to the top rim, so `h_big = height + h_small` by
/// construction.
fn virtual_cone_heights(diameter_base: f64, diameter_top: f64, height: f64) -> (f64, f64) {
    let (alpha, _) = compute_angles(diameter_top, diameter_base, height);
    let h_small_cone = (diameter_base / 2.) / alpha.tan();
    let h_big_cone = height + h_small_cone;
    (h_small_cone, h_big_cone)
}

/// Volume of a pot tapering from `diameter_base` up to `diameter_top`.
///
/// Pure kernel without input checks. Callers must ensure positive
/// measurements and `diameter_top > diameter_base`; [`Pot`] is the
/// checked entry point. Degenerate inputs propagate through IEEE
/// arithmetic instead of raising an error.
pub fn frustum_volume(diameter_base: f64, diameter_top: f64, height: f64) -> f64 {
    let (h_small_cone, h_big_cone) = virtual_cone_heights(diameter_base, diameter_top, height);
    let v_small_cone = cone_volume(diameter_base / 2., h_small_cone);
    let v_big_cone = cone_volume(diameter_top / 2., h_big_cone);
    v_big_cone - v_small_cone
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum PotShapeError {
    #[error(
        "pot measurements must be strictly positive, got base {diameter_base}, top {diameter_top}, height {height}"
    )]
    NonPositiveMeasurement {
        diameter_base: f64,
        diameter_top: f64,
        height: f64,
    },

    #[error("top diameter {diameter_top} must exceed base diameter {diameter_base}")]
    NotWideningUpwards {
        diameter_base: f64,
        diameter_top: f64,
    },
}

/// A pot with circular cross section widening from base to top.
///
/// Construction validates the measurements, so every `Pot` has strictly
/// positive dimensions and a top diameter exceeding the base diameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Pot {
    diameter_base: f64,
    diameter_top: f64,
    height: f64,
}

impl Pot {
    pub fn new(diameter_base: f64, diameter_top: f64, height: f64) -> Result<Self, PotShapeError> {
        if !(diameter_base > 0. && diameter_top > 0. && height > 0.) {
            return Err(PotShapeError::NonPositiveMeasurement {
                diameter_base,
                diameter_top,
                height,
            });
        }
        if diameter_top <= diameter_base {
            return Err(PotShapeError::NotWideningUpwards {
                diameter_base,
                diameter_top,
            });
        }
        Ok(Self {
            diameter_base,
            diameter_top,
            height,
        })
    }

    pub fn diameter_base(&self) -> f64 {
        self.diameter_base
    }

    pub fn diameter_top(&self) -> f64 {
        self.diameter_top
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// `(alpha, beta)` of the virtual cone construction
    pub fn angles(&self) -> (f64, f64) {
        compute_angles(self.diameter_top, self.diameter_base, self.height)
    }

    /// `(h_small_cone, h_big_cone)` of the virtual cone construction
    pub fn cone_heights(&self) -> (f64, f64) {
        virtual_cone_heights(self.diameter_base, self.diameter_top, self.height)
    }
}

impl VolumeModel for Pot {
    fn volume(&self) -> f64 {
        frustum_volume(self.diameter_base, self.diameter_top, self.height)
    }
}

/// Absolute volume difference between two pots, e.g. when repotting
pub fn volume_difference(a: &Pot, b: &Pot) -> f64 {
    (a.volume() - b.volume()).abs()
}

#[cfg(test)]
mod test {
    use crate::{Pot, PotShapeError, compute_angles};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_angles() {
        let (alpha, beta) = compute_angles(19., 11., 18.);
        approx::assert_abs_diff_eq!(beta, (18f64 / 4.).atan());
        approx::assert_abs_diff_eq!(alpha, FRAC_PI_2 - 2. * beta);
        assert!(beta > 0. && beta < FRAC_PI_2);
    }

    #[test]
    fn test_angles_degenerate_without_taper() {
        // Equal diameters collapse the triangle, beta saturates at 90 deg.
        let (alpha, beta) = compute_angles(10., 10., 18.);
        approx::assert_abs_diff_eq!(beta, FRAC_PI_2);
        approx::assert_abs_diff_eq!(alpha, -FRAC_PI_2);
    }

    #[test]
    fn test_pot_validation() {
        assert!(Pot::new(11., 19., 18.).is_ok());
        assert_eq!(
            Pot::new(11., 11., 18.),
            Err(PotShapeError::NotWideningUpwards {
                diameter_base: 11.,
                diameter_top: 11.,
            })
        );
        assert_eq!(
            Pot::new(19., 11., 18.),
            Err(PotShapeError::NotWideningUpwards {
                diameter_base: 19.,
                diameter_top: 11.,
            })
        );
        assert_eq!(
            Pot::new(11., 19., 0.),
            Err(PotShapeError::NonPositiveMeasurement {
                diameter_base: 11.,
                diameter_top: 19.,
                height: 0.,
            })
        );
        assert!(Pot::new(-11., 19., 18.).is_err());
    }

    #[test]
    fn test_pot_accessors() {
        let pot = Pot::new(11., 19., 18.).unwrap();
        approx::assert_abs_diff_eq!(pot.diameter_base(), 11.);
        approx::assert_abs_diff_eq!(pot.diameter_top(), 19.);
        approx::assert_abs_diff_eq!(pot.height(), 18.);
        let (alpha, beta) = pot.angles();
        let (alpha_f, beta_f) = compute_angles(19., 11., 18.);
        approx::assert_abs_diff_eq!(alpha, alpha_f);
        approx::assert_abs_diff_eq!(beta, beta_f);
    }
}
