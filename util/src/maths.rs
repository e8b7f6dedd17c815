//! Utility maths functions
//!
//! All angles are in radians unless the function name says otherwise. The
//! planar convention is that a heading of `0` faces the positive X axis and
//! headings increase counter-clockwise.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::Float;

// ---------------------------------------------------------------------------
// ANGLES
// ---------------------------------------------------------------------------

/// Convert an angle in degrees into radians.
///
/// The conversion is linear, the output is not wrapped into any range.
pub fn deg_to_rad<T>(deg: T) -> T
where
    T: Float,
{
    deg.to_radians()
}

/// Convert an angle in radians into degrees.
///
/// The conversion is linear, the output is not wrapped into any range.
pub fn rad_to_deg<T>(rad: T) -> T
where
    T: Float,
{
    rad.to_degrees()
}

/// Normalise an angle into the range `[0, 2pi)`.
///
/// Negative angles are wrapped from `2pi` downwards, positive angles are
/// taken modulo `2pi`. Normalising an already normalised angle returns it
/// unchanged.
pub fn normalise_angle<T>(angle: T) -> T
where
    T: Float,
{
    let tau_t: T = T::from(std::f64::consts::TAU).unwrap();

    let wrapped = rem_euclid(angle, tau_t);

    // rem_euclid may round up to exactly tau for tiny negative inputs, which
    // is outside the half-open range.
    if wrapped >= tau_t {
        T::zero()
    } else {
        wrapped
    }
}

/// Get the signed angular distance between two angles in the range of [0, 2pi].
///
/// This function will return the shortest signed distance between a and b accounting for wrapping
/// between 0 and 2pi.
pub fn get_ang_dist_2pi<T>(a: T, b: T) -> T
where
    T: Float,
{
    let tau_t: T = T::from(std::f64::consts::TAU).unwrap();

    let c = rem_euclid(a - b, tau_t);
    let d = rem_euclid(b - a, tau_t);

    if c < d {
        -c
    } else {
        d
    }
}

/// Calculates the least nonnegative remainder of `lhs (mod rhs)`.
///
/// This function is taken from the std library as num is missing it.
///
/// In particular, the return value `r` satisfies `0.0 <= r < rhs.abs()` in
/// most cases. However, due to a floating point round-off error it can
/// result in `r == rhs.abs()`, violating the mathematical definition, if
/// `self` is much smaller than `rhs.abs()` in magnitude and `self < 0.0`.
/// This result is not an element of the function's codomain, but it is the
/// closest floating point number in the real numbers and thus fulfills the
/// property `self == self.div_euclid(rhs) * rhs + self.rem_euclid(rhs)`
/// approximatively.
pub fn rem_euclid<T>(lhs: T, rhs: T) -> T
where
    T: Float,
{
    let r = lhs % rhs;
    if r < T::zero() {
        r + rhs.abs()
    } else {
        r
    }
}
