//! Pure angular helpers shared by the drag pipeline, the stepper and the
//! result resolver. Everything works in degrees.

/// Normalizes an angle to the half-open range (-180, 180].
///
/// Non-finite input collapses to 0 so downstream arithmetic never sees NaN.
pub fn normalize(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let mut a = angle % 360.0;
    if a > 180.0 {
        a -= 360.0;
    } else if a <= -180.0 {
        a += 360.0;
    }
    a
}

/// Signed shortest angular path from `from` to `to`, in (-180, 180].
pub fn difference(from: f64, to: f64) -> f64 {
    normalize(to - from)
}

/// Bearing of a screen point relative to the wheel center, in degrees.
///
/// A zero-length vector (pointer exactly on the center) yields 0 rather than
/// an error; a drag passing through the center just contributes no delta.
pub fn from_coords(x: f64, y: f64, center_x: f64, center_y: f64) -> f64 {
    let dx = x - center_x;
    let dy = y - center_y;
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }
    normalize(dy.atan2(dx).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn normalize_lands_in_half_open_range() {
        for raw in [-1080.0, -540.5, -180.0, -0.0, 0.0, 179.9, 180.0, 359.0, 720.25] {
            let n = normalize(raw);
            assert!(n > -180.0 && n <= 180.0, "normalize({raw}) = {n}");
        }
        assert!((normalize(540.0) - 180.0).abs() < EPS);
        assert!((normalize(-180.0) - 180.0).abs() < EPS);
        assert!((normalize(-270.0) - 90.0).abs() < EPS);
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in [-725.3, -180.0, 0.0, 45.0, 180.0, 1234.5] {
            let once = normalize(raw);
            assert!((normalize(once) - once).abs() < EPS);
        }
    }

    #[test]
    fn normalize_swallows_non_finite_input() {
        assert_eq!(normalize(f64::NAN), 0.0);
        assert_eq!(normalize(f64::INFINITY), 0.0);
        assert_eq!(normalize(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn difference_takes_the_short_way_around() {
        assert!((difference(170.0, -170.0) - 20.0).abs() < EPS);
        assert!((difference(-170.0, 170.0) + 20.0).abs() < EPS);
        assert!((difference(10.0, 30.0) - 20.0).abs() < EPS);
    }

    #[test]
    fn difference_is_antisymmetric_off_the_boundary() {
        for (a, b) in [(10.0, 75.0), (-40.0, 120.0), (170.0, -165.0)] {
            assert!((difference(a, b) + difference(b, a)).abs() < EPS);
        }
    }

    #[test]
    fn from_coords_maps_the_cardinal_directions() {
        let (cx, cy) = (100.0, 100.0);
        assert!((from_coords(200.0, 100.0, cx, cy)).abs() < EPS);
        assert!((from_coords(100.0, 200.0, cx, cy) - 90.0).abs() < EPS);
        assert!((from_coords(0.0, 100.0, cx, cy) - 180.0).abs() < EPS);
        assert!((from_coords(100.0, 0.0, cx, cy) + 90.0).abs() < EPS);
    }

    #[test]
    fn from_coords_handles_a_zero_length_vector() {
        assert_eq!(from_coords(42.0, 7.0, 42.0, 7.0), 0.0);
    }
}
