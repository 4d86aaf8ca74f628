//! Strided-sample surface point search.

use chart_types::{Aabb, MeshGeometry, Point3, SurfaceDirection, SurfacePoint, Transform3D};
use tracing::debug;

use crate::config::LocatorConfig;

/// Locate a surface point with the default configuration.
///
/// See [`locate_with`] for the full contract.
#[must_use]
pub fn locate(
    geometry: &MeshGeometry,
    transform: &Transform3D,
    direction: SurfaceDirection,
) -> SurfacePoint {
    locate_with(geometry, transform, direction, &LocatorConfig::default())
}

/// Locate the best point on a mesh for an anatomical surface direction.
///
/// Never fails: a degenerate mesh (no vertices) yields the deterministic
/// fallback `center + direction * (0.4 * max_extent)` with the canonical
/// direction as the normal. Identical inputs always yield bit-identical
/// results; ties keep the earliest sample.
///
/// Vertices without a stored normal score as if their normal were the
/// canonical direction itself, so a normal-less buffer degrades to a
/// purely directional search.
#[must_use]
pub fn locate_with(
    geometry: &MeshGeometry,
    transform: &Transform3D,
    direction: SurfaceDirection,
    config: &LocatorConfig,
) -> SurfacePoint {
    let d = direction.unit_vector();

    if geometry.is_empty() {
        // Zero extent: the 0.4 * max_extent offset collapses onto the
        // mesh origin in world space.
        let center = transform.transform_point(Point3::origin());
        return SurfacePoint::new(center, d);
    }

    let world_corners = geometry
        .bounds()
        .corners()
        .map(|corner| transform.transform_point(corner));
    let world_box = Aabb::from_points(world_corners.iter());
    let center = world_box.center();

    let vertex_count = geometry.vertex_count();
    let budget = config.sample_budget.max(1);
    let stride = (vertex_count / budget).max(1);

    let mut best_score = f64::NEG_INFINITY;
    let mut best = SurfacePoint::new(center + d * (0.4 * world_box.max_extent()), d);

    for index in (0..vertex_count).step_by(stride).take(budget) {
        let world_pos = transform.transform_point(geometry.positions[index]);
        let world_normal = geometry
            .normal(index)
            .map_or(d, |n| transform.transform_normal(n));

        let dir_score = (world_pos - center)
            .try_normalize(f64::EPSILON)
            .map_or(0.0, |v| v.dot(&d));
        let normal_score = world_normal.dot(&d);
        let score = config
            .direction_weight
            .mul_add(dir_score, config.normal_weight * normal_score);

        if score > best_score {
            best_score = score;
            best = SurfacePoint::new(world_pos, world_normal);
        }
    }

    debug!(
        direction = %direction,
        vertices = vertex_count,
        stride,
        score = best_score,
        "located surface point"
    );

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chart_types::{Point3, Vector3};

    fn symmetric_cloud() -> MeshGeometry {
        // Eight corners of a 2-unit cube centered at the origin, each
        // with an outward corner normal.
        let mut positions = Vec::new();
        let mut normals = Vec::new();
        for &x in &[-1.0, 1.0] {
            for &y in &[-1.0, 1.0] {
                for &z in &[-1.0, 1.0] {
                    positions.push(Point3::new(x, y, z));
                    normals.push(Vector3::new(x, y, z).normalize());
                }
            }
        }
        MeshGeometry::from_parts(positions, normals)
    }

    #[test]
    fn occlusal_picks_a_top_vertex() {
        let geometry = symmetric_cloud();
        let point = locate(
            &geometry,
            &Transform3D::identity(),
            SurfaceDirection::Occlusal,
        );
        assert_relative_eq!(point.position.z, 1.0, epsilon = 1e-12);
        assert!(point.normal.z > 0.0);
    }

    #[test]
    fn buccal_and_lingual_pick_opposite_sides() {
        let geometry = symmetric_cloud();
        let identity = Transform3D::identity();
        let buccal = locate(&geometry, &identity, SurfaceDirection::Buccal);
        let lingual = locate(&geometry, &identity, SurfaceDirection::Lingual);
        assert!(buccal.position.x > 0.0);
        assert!(lingual.position.x < 0.0);
    }

    #[test]
    fn deterministic_across_calls() {
        let geometry = symmetric_cloud();
        let transform = Transform3D::translation(3.0, -2.0, 0.5);
        let a = locate(&geometry, &transform, SurfaceDirection::Mesial);
        let b = locate(&geometry, &transform, SurfaceDirection::Mesial);
        assert_eq!(a, b);
    }

    #[test]
    fn fallback_for_empty_mesh() {
        let geometry = MeshGeometry::new();
        let transform = Transform3D::translation(1.0, 2.0, 3.0);
        let point = locate(&geometry, &transform, SurfaceDirection::Occlusal);
        // Zero extent: the fallback collapses onto the mesh center.
        assert_relative_eq!(point.position.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(point.position.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(point.position.z, 3.0, epsilon = 1e-12);
        assert_eq!(point.normal, SurfaceDirection::Occlusal.unit_vector());
    }

    #[test]
    fn world_transform_moves_the_result() {
        let geometry = symmetric_cloud();
        let transform = Transform3D::translation(10.0, 0.0, 0.0);
        let point = locate(&geometry, &transform, SurfaceDirection::Occlusal);
        // Top corners tie on score; the earliest sample (x = -1) wins.
        assert_relative_eq!(point.position.x, 9.0, epsilon = 1e-12);
        assert_relative_eq!(point.position.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn normal_agreement_outweighs_small_height_gap() {
        // P1 sits highest but faces sideways; P2 sits a little lower
        // with a perfectly occlusal normal. The 0.7/0.3 blend prefers
        // P2 (0.7 * 1.0 + 0.3 * 1.0 over 0.7 * 1.0 + 0.3 * 0.0).
        let geometry = MeshGeometry::from_parts(
            vec![
                Point3::new(0.0, 0.0, -1.0),
                Point3::new(0.0, 0.0, 1.0),
                Point3::new(0.0, 0.0, 0.8),
            ],
            vec![
                Vector3::new(0.0, 0.0, -1.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 0.0, 1.0),
            ],
        );
        let point = locate(
            &geometry,
            &Transform3D::identity(),
            SurfaceDirection::Occlusal,
        );
        assert_relative_eq!(point.position.z, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn normal_less_buffer_returns_direction_as_normal() {
        let geometry = MeshGeometry::from_raw(&[0.0, 0.0, 0.0, 0.0, 0.0, 2.0], &[]);
        let point = locate(
            &geometry,
            &Transform3D::identity(),
            SurfaceDirection::Occlusal,
        );
        assert_eq!(point.normal, SurfaceDirection::Occlusal.unit_vector());
        assert_relative_eq!(point.position.z, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn sample_budget_bounds_the_scan() {
        // 1000 vertices along +Y with the best occlusal vertex placed
        // on a stride boundary so a budget-limited scan still finds it.
        let mut positions = Vec::new();
        for i in 0..1000 {
            positions.push(Point3::new(0.0, f64::from(i) * 0.01, 0.0));
        }
        positions[500] = Point3::new(0.0, 5.0, 1.0);
        let geometry = MeshGeometry::from_parts(positions, Vec::new());

        let config = LocatorConfig::new().with_sample_budget(100);
        let point = locate_with(
            &geometry,
            &Transform3D::identity(),
            SurfaceDirection::Occlusal,
            &config,
        );
        assert_relative_eq!(point.position.z, 1.0, epsilon = 1e-12);
    }
}
