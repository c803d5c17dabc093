//! Stepped falloff profile

use super::params::BrushParams;

/// Band index for a normalized distance in [0, 1].
///
/// Bands are `step_size` wide, counted from the rim inward, so the profile
/// comes out terraced rather than smooth.
pub fn step_index(normalized_distance: f32, step_size: f32) -> f32 {
    ((1.0 - normalized_distance) / step_size).floor()
}

/// Unsigned height change for a vertex `distance` from the brush centre,
/// or None when it lies outside the radius. The rim itself is inside.
pub fn height_delta(distance: f32, params: &BrushParams) -> Option<f32> {
    if distance > params.radius() {
        return None;
    }
    let normalized = distance / params.radius();
    let index = step_index(normalized, params.step_size());
    Some(params.max_falloff() - index * params.step_size())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock() -> BrushParams {
        BrushParams::new(10.0, 0.5, 5.0)
    }

    #[test]
    fn test_centre() {
        assert_eq!(step_index(0.0, 5.0), 0.0);
        assert_eq!(height_delta(0.0, &stock()), Some(0.5));
    }

    #[test]
    fn test_same_band_inside_radius() {
        assert_eq!(height_delta(6.0, &stock()), Some(0.5));
    }

    #[test]
    fn test_rim_is_inclusive() {
        assert_eq!(height_delta(10.0, &stock()), Some(0.5));
        assert_eq!(height_delta(10.0001, &stock()), None);
    }

    #[test]
    fn test_terraces() {
        // Bands a quarter of the radius wide
        let params = BrushParams::new(8.0, 1.0, 0.25);
        assert_eq!(height_delta(8.0, &params), Some(1.0));
        assert_eq!(height_delta(7.0, &params), Some(1.0));
        assert_eq!(height_delta(5.0, &params), Some(0.75));
        assert_eq!(height_delta(3.0, &params), Some(0.5));
        assert_eq!(height_delta(1.0, &params), Some(0.25));
        assert_eq!(height_delta(0.0, &params), Some(0.0));
    }

    #[test]
    fn test_zero_step_size_is_finite() {
        let params = BrushParams::new(10.0, 0.5, 0.0);
        for distance in [0.0, 0.5, 5.0, 9.99, 10.0] {
            let delta = height_delta(distance, &params).expect("inside radius");
            assert!(delta.is_finite(), "distance {} gave {}", distance, delta);
        }
    }

    #[test]
    fn test_zero_radius_is_finite() {
        let params = BrushParams::new(0.0, 0.5, 5.0);
        let delta = height_delta(0.0, &params).expect("centre is inside");
        assert!(delta.is_finite());
        assert_eq!(height_delta(1.0, &params), None);
    }
}
