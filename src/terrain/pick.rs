//! Ray picking against the terrain surface

use glam::Vec3;

use crate::math::Ray;
use super::mesh::TerrainMesh;

/// Slack added around the mesh bounds so a flat plane still has volume
const BOUNDS_MARGIN: f32 = 1e-3;

/// Where a ray struck the terrain
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickResult {
    /// Hit point in world space
    pub point: Vec3,
    /// World-space distance from the ray origin
    pub distance: f32,
    /// Index of the struck triangle
    pub triangle: usize,
}

/// Nearest intersection of a world-space ray with the mesh surface
pub fn pick(mesh: &TerrainMesh, ray: &Ray) -> Option<PickResult> {
    let model = mesh.model_matrix();
    let local_ray = ray.transform(&model.inverse());

    local_ray.intersects_aabb(&mesh.local_bounds().padded(BOUNDS_MARGIN))?;

    let mut nearest: Option<(usize, f32)> = None;
    for triangle in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle(triangle);
        if let Some(t) = local_ray.intersects_triangle(a, b, c) {
            if nearest.is_none_or(|(_, best)| t < best) {
                nearest = Some((triangle, t));
            }
        }
    }

    nearest.map(|(triangle, t)| {
        let point = model.transform_point3(local_ray.at(t));
        PickResult {
            point,
            distance: ray.origin.distance(point),
            triangle,
        }
    })
}
