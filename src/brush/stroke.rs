//! Applying a brush stroke to the terrain

use glam::Vec3;
use winit::event::MouseButton;

use crate::terrain::TerrainMesh;
use super::falloff::height_delta;
use super::params::BrushParams;

/// Button mask value meaning "only the primary button is held"
const PRIMARY_ONLY_MASK: u8 = 1;

/// Whether a stroke adds or removes height
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeDirection {
    Raise,
    Lower,
}

impl StrokeDirection {
    /// Direction for a freshly pressed button: primary raises, anything else lowers
    pub fn from_button(button: MouseButton) -> Self {
        if button == MouseButton::Left {
            StrokeDirection::Raise
        } else {
            StrokeDirection::Lower
        }
    }

    /// Direction while dragging, from the live held-buttons mask.
    ///
    /// Only a mask of exactly the primary button raises; holding primary
    /// together with another button lowers.
    pub fn from_buttons(mask: u8) -> Self {
        if mask == PRIMARY_ONLY_MASK {
            StrokeDirection::Raise
        } else {
            StrokeDirection::Lower
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            StrokeDirection::Raise => 1.0,
            StrokeDirection::Lower => -1.0,
        }
    }
}

/// What a single stroke did
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeOutcome {
    pub direction: StrokeDirection,
    /// Vertices within the radius
    pub affected: usize,
    /// Largest signed height change applied, 0 when nothing was affected
    pub peak_delta: f32,
}

/// Apply one stroke centred on a world-space pick point.
///
/// Every vertex within `params.radius()` of `pick_point` (measured between
/// world positions, rim included) moves by the stepped falloff delta, up for
/// [`StrokeDirection::Raise`] and down for [`StrokeDirection::Lower`].
/// Colors are recomputed afterwards and both buffers are flagged dirty.
pub fn apply_brush(
    mesh: &mut TerrainMesh,
    pick_point: Vec3,
    params: &BrushParams,
    direction: StrokeDirection,
) -> StrokeOutcome {
    let model = mesh.model_matrix();
    let sign = direction.sign();
    let mut affected = 0;
    let mut peak_delta = 0.0_f32;

    for position in mesh.positions_mut() {
        let distance = pick_point.distance(model.transform_point3(*position));
        if let Some(delta) = height_delta(distance, params) {
            let signed = sign * delta;
            position.z += signed;
            if affected == 0 || signed.abs() > peak_delta.abs() {
                peak_delta = signed;
            }
            affected += 1;
        }
    }

    mesh.recompute_colors();

    log::debug!(
        "{:?} stroke at ({:.2}, {:.2}, {:.2}): {} vertices, peak {:+.3}",
        direction, pick_point.x, pick_point.y, pick_point.z, affected, peak_delta
    );

    StrokeOutcome {
        direction,
        affected,
        peak_delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::height_to_color;

    /// 21 x 21 vertices one unit apart, x and z in [-10, 10]
    fn unit_grid() -> TerrainMesh {
        let mut mesh = TerrainMesh::plane(20.0, 20.0, 20, 20);
        mesh.take_dirty();
        mesh
    }

    fn index_at(mesh: &TerrainMesh, world_x: f32, world_z: f32) -> usize {
        (0..mesh.vertex_count())
            .find(|&i| {
                let p = mesh.world_position(i);
                p.x == world_x && p.z == world_z
            })
            .expect("grid vertex")
    }

    #[test]
    fn test_direction_from_button() {
        assert_eq!(StrokeDirection::from_button(MouseButton::Left), StrokeDirection::Raise);
        assert_eq!(StrokeDirection::from_button(MouseButton::Right), StrokeDirection::Lower);
        assert_eq!(StrokeDirection::from_button(MouseButton::Middle), StrokeDirection::Lower);
    }

    #[test]
    fn test_direction_from_buttons_mask() {
        assert_eq!(StrokeDirection::from_buttons(1), StrokeDirection::Raise);
        assert_eq!(StrokeDirection::from_buttons(2), StrokeDirection::Lower);
        // Primary plus secondary is not "primary only"
        assert_eq!(StrokeDirection::from_buttons(3), StrokeDirection::Lower);
        assert_eq!(StrokeDirection::from_buttons(0), StrokeDirection::Lower);
    }

    #[test]
    fn test_stock_brush_scenarios() {
        let mut mesh = unit_grid();
        let params = BrushParams::new(10.0, 0.5, 5.0);
        let centre = index_at(&mesh, 0.0, 0.0);
        let six = index_at(&mesh, 6.0, 0.0);
        let rim = index_at(&mesh, 10.0, 0.0);

        apply_brush(&mut mesh, Vec3::ZERO, &params, StrokeDirection::Raise);

        assert_eq!(mesh.height(centre), 0.5);
        assert_eq!(mesh.height(six), 0.5);
        assert_eq!(mesh.height(rim), 0.5);
    }

    #[test]
    fn test_just_outside_rim_is_untouched() {
        let mut mesh = unit_grid();
        let params = BrushParams::new(10.0, 0.5, 5.0);
        let rim = index_at(&mesh, 10.0, 0.0);

        apply_brush(&mut mesh, Vec3::new(-0.0001, 0.0, 0.0), &params, StrokeDirection::Raise);
        assert_eq!(mesh.height(rim), 0.0);
    }

    #[test]
    fn test_outside_radius_unchanged() {
        let mut mesh = unit_grid();
        let params = BrushParams::new(3.0, 0.75, 0.2);
        let pick = Vec3::new(2.0, 0.0, -1.0);
        let before = mesh.clone();

        apply_brush(&mut mesh, pick, &params, StrokeDirection::Lower);

        for i in 0..mesh.vertex_count() {
            if before.world_position(i).distance(pick) > params.radius() {
                assert_eq!(mesh.height(i), before.height(i));
                assert_eq!(mesh.colors()[i], before.colors()[i]);
            }
        }
    }

    #[test]
    fn test_delta_matches_stepped_formula() {
        let params = BrushParams::new(7.5, 1.0, 0.3);
        let pick = Vec3::new(0.5, 0.0, 0.25);
        let before = unit_grid();

        for (direction, sign) in [(StrokeDirection::Raise, 1.0), (StrokeDirection::Lower, -1.0)] {
            let mut mesh = before.clone();
            apply_brush(&mut mesh, pick, &params, direction);

            for i in 0..mesh.vertex_count() {
                let distance = before.world_position(i).distance(pick);
                if distance <= params.radius() {
                    let index = ((1.0 - distance / params.radius()) / params.step_size()).floor();
                    let expected = params.max_falloff() - index * params.step_size();
                    assert_eq!(mesh.height(i) - before.height(i), sign * expected);
                }
            }
        }
    }

    #[test]
    fn test_colors_follow_heights() {
        let mut mesh = unit_grid();
        let params = BrushParams::new(5.0, 4.0, 0.5);
        apply_brush(&mut mesh, Vec3::ZERO, &params, StrokeDirection::Raise);

        for (i, color) in mesh.colors().iter().enumerate() {
            assert_eq!(*color, height_to_color(mesh.height(i)));
        }

        // Recomputing without a height change is a no-op
        let colors = mesh.colors().to_vec();
        mesh.recompute_colors();
        assert_eq!(mesh.colors(), &colors[..]);
    }

    #[test]
    fn test_marks_buffers_dirty() {
        let mut mesh = unit_grid();
        assert!(!mesh.dirty().any());

        apply_brush(&mut mesh, Vec3::ZERO, &BrushParams::default(), StrokeDirection::Raise);
        let dirty = mesh.dirty();
        assert!(dirty.positions && dirty.colors);
    }

    #[test]
    fn test_raise_then_lower_round_trip() {
        let mut mesh = unit_grid();
        let params = BrushParams::new(2.5, 0.5, 5.0);
        let before: Vec<f32> = (0..mesh.vertex_count()).map(|i| mesh.height(i)).collect();

        let up = apply_brush(&mut mesh, Vec3::ZERO, &params, StrokeDirection::Raise);
        let down = apply_brush(&mut mesh, Vec3::ZERO, &params, StrokeDirection::Lower);

        assert_eq!(up.affected, down.affected);
        assert_eq!(up.peak_delta, -down.peak_delta);
        for (i, height) in before.iter().enumerate() {
            assert_eq!(mesh.height(i), *height);
        }
    }

    #[test]
    fn test_zero_step_size_keeps_heights_finite() {
        let mut mesh = unit_grid();
        let params = BrushParams::new(4.0, 0.5, 0.0);

        let outcome = apply_brush(&mut mesh, Vec3::ZERO, &params, StrokeDirection::Raise);
        assert!(outcome.affected > 0);
        assert!(mesh.positions().iter().all(|p| p.is_finite()));
        assert!(mesh.colors().iter().flatten().all(|c| c.is_finite()));
    }

    #[test]
    fn test_heights_are_unbounded() {
        let mut mesh = unit_grid();
        let params = BrushParams::new(1.0, 5.0, 5.0);
        let centre = index_at(&mesh, 0.0, 0.0);

        // Follow the surface down, as repeated picks would
        for _ in 0..10 {
            let pick = mesh.world_position(centre);
            apply_brush(&mut mesh, pick, &params, StrokeDirection::Lower);
        }
        assert_eq!(mesh.height(centre), -50.0);
        assert!(mesh.colors()[centre].iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_outcome_reports_peak() {
        let mut mesh = unit_grid();
        let params = BrushParams::new(1.5, 2.0, 0.5);

        // Centre: index 2 -> 1.0; ring at 1: index 0 -> 2.0; diagonals at 1.41: index 0 -> 2.0
        let outcome = apply_brush(&mut mesh, Vec3::ZERO, &params, StrokeDirection::Lower);
        assert_eq!(outcome.affected, 9);
        assert_eq!(outcome.peak_delta, -2.0);
    }
}
