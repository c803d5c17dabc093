//! Drag session: one press-drag-release gesture of strokes

use glam::Vec3;

use crate::terrain::TerrainMesh;
use super::params::BrushParams;
use super::stroke::{apply_brush, StrokeDirection, StrokeOutcome};

/// Totals for a finished drag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub strokes: usize,
    pub raise_strokes: usize,
    pub lower_strokes: usize,
}

/// An in-progress drag that stamps a stroke at every pointer update.
///
/// The session is created by the stroke that starts it and consumed by
/// [`DragSession::end`]. Parameters and direction are read per update, so
/// slider or button changes mid-drag apply to the next stroke.
#[derive(Debug)]
pub struct DragSession {
    summary: SessionSummary,
    last_point: Vec3,
}

impl DragSession {
    /// Start a drag at `point`, applying the first stroke immediately
    pub fn begin(
        mesh: &mut TerrainMesh,
        point: Vec3,
        params: &BrushParams,
        direction: StrokeDirection,
    ) -> (Self, StrokeOutcome) {
        let mut session = Self {
            summary: SessionSummary::default(),
            last_point: point,
        };
        let outcome = session.stroke(mesh, point, params, direction);
        (session, outcome)
    }

    /// Continue the drag. A pointer that left the terrain (`None`) applies nothing.
    pub fn update(
        &mut self,
        mesh: &mut TerrainMesh,
        point: Option<Vec3>,
        params: &BrushParams,
        direction: StrokeDirection,
    ) -> Option<StrokeOutcome> {
        point.map(|point| self.stroke(mesh, point, params, direction))
    }

    /// Finish the drag
    pub fn end(self) -> SessionSummary {
        self.summary
    }

    fn stroke(
        &mut self,
        mesh: &mut TerrainMesh,
        point: Vec3,
        params: &BrushParams,
        direction: StrokeDirection,
    ) -> StrokeOutcome {
        let outcome = apply_brush(mesh, point, params, direction);
        self.last_point = point;
        self.summary.strokes += 1;
        match direction {
            StrokeDirection::Raise => self.summary.raise_strokes += 1,
            StrokeDirection::Lower => self.summary.lower_strokes += 1,
        }
        outcome
    }

    pub fn stroke_count(&self) -> usize {
        self.summary.strokes
    }

    /// Where the most recent stroke landed
    pub fn last_point(&self) -> Vec3 {
        self.last_point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh() -> TerrainMesh {
        TerrainMesh::plane(10.0, 10.0, 10, 10)
    }

    fn centre_height(mesh: &TerrainMesh) -> f32 {
        // 11 x 11 grid, middle vertex
        mesh.height(60)
    }

    #[test]
    fn test_begin_applies_first_stroke() {
        let mut mesh = mesh();
        let params = BrushParams::new(2.0, 1.0, 5.0);

        let (session, outcome) = DragSession::begin(&mut mesh, Vec3::ZERO, &params, StrokeDirection::Raise);
        assert_eq!(session.stroke_count(), 1);
        assert!(outcome.affected > 0);
        assert_eq!(centre_height(&mesh), 1.0);
    }

    #[test]
    fn test_update_strokes_on_hit_only() {
        let mut mesh = mesh();
        let params = BrushParams::new(2.0, 1.0, 5.0);
        let (mut session, _) = DragSession::begin(&mut mesh, Vec3::ZERO, &params, StrokeDirection::Raise);

        assert!(session.update(&mut mesh, None, &params, StrokeDirection::Raise).is_none());
        assert_eq!(session.stroke_count(), 1);

        let target = Vec3::new(3.0, 0.0, 0.0);
        let outcome = session.update(&mut mesh, Some(target), &params, StrokeDirection::Raise);
        assert!(outcome.is_some());
        assert_eq!(session.last_point(), target);
        assert_eq!(session.stroke_count(), 2);
    }

    #[test]
    fn test_direction_and_params_are_live() {
        let mut mesh = mesh();
        let mut params = BrushParams::new(0.5, 1.0, 5.0);
        let (mut session, _) = DragSession::begin(&mut mesh, Vec3::ZERO, &params, StrokeDirection::Raise);
        assert_eq!(centre_height(&mesh), 1.0);

        params.set_max_falloff(0.25);
        let centre = Vec3::new(0.0, 1.0, 0.0);
        session.update(&mut mesh, Some(centre), &params, StrokeDirection::Lower);
        assert_eq!(centre_height(&mesh), 0.75);

        let summary = session.end();
        assert_eq!(summary, SessionSummary { strokes: 2, raise_strokes: 1, lower_strokes: 1 });
    }
}
