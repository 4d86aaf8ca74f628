//! World transform of a mesh object.

use nalgebra::{Matrix4, Point3, Vector3, Vector4};

/// A 3D transformation represented as a 4x4 matrix.
///
/// The mesh source supplies one of these per mesh object; the locator
/// uses it to carry local vertex data into world space.
///
/// # Example
///
/// ```
/// use chart_types::Transform3D;
///
/// let lift = Transform3D::translation(0.0, 0.0, 5.0);
/// let open = Transform3D::rotation_x(0.1);
/// let jaw_pose = lift.then(&open);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Transform3D {
    /// The 4x4 transformation matrix in column-major order.
    matrix: Matrix4<f64>,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// Create a transformation from a 4x4 matrix.
    #[must_use]
    pub const fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    /// Create the identity transformation.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create a translation transformation.
    #[must_use]
    pub fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        Self {
            matrix: Matrix4::new_translation(&Vector3::new(tx, ty, tz)),
        }
    }

    /// Create a uniform scaling transformation.
    #[must_use]
    pub fn uniform_scale(factor: f64) -> Self {
        Self {
            matrix: Matrix4::new_scaling(factor),
        }
    }

    /// Create a rotation around the X axis.
    ///
    /// # Arguments
    ///
    /// * `angle` - Rotation angle in radians
    #[must_use]
    pub fn rotation_x(angle: f64) -> Self {
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        #[rustfmt::skip]
        let matrix = Matrix4::new(
            1.0,   0.0,    0.0, 0.0,
            0.0, cos_a, -sin_a, 0.0,
            0.0, sin_a,  cos_a, 0.0,
            0.0,   0.0,    0.0, 1.0,
        );
        Self { matrix }
    }

    /// Create a rotation around the Z axis.
    ///
    /// # Arguments
    ///
    /// * `angle` - Rotation angle in radians
    #[must_use]
    pub fn rotation_z(angle: f64) -> Self {
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        #[rustfmt::skip]
        let matrix = Matrix4::new(
            cos_a, -sin_a, 0.0, 0.0,
            sin_a,  cos_a, 0.0, 0.0,
              0.0,    0.0, 1.0, 0.0,
              0.0,    0.0, 0.0, 1.0,
        );
        Self { matrix }
    }

    /// Get the underlying 4x4 matrix.
    #[must_use]
    pub const fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// Compose this transformation with another (self then other).
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }

    /// Transform a point (applies translation).
    #[must_use]
    pub fn transform_point(&self, point: Point3<f64>) -> Point3<f64> {
        let p = Vector4::new(point.x, point.y, point.z, 1.0);
        let result = self.matrix * p;
        Point3::new(result.x, result.y, result.z)
    }

    /// Transform a direction vector (ignores translation).
    #[must_use]
    pub fn transform_vector(&self, vector: Vector3<f64>) -> Vector3<f64> {
        let v = Vector4::new(vector.x, vector.y, vector.z, 0.0);
        let result = self.matrix * v;
        Vector3::new(result.x, result.y, result.z)
    }

    /// Transform a normal vector (uses inverse transpose).
    ///
    /// The result is re-normalized. Returns the original normal if the
    /// upper 3x3 is not invertible or the result collapses to zero.
    #[must_use]
    pub fn transform_normal(&self, normal: Vector3<f64>) -> Vector3<f64> {
        let m = self.matrix.fixed_view::<3, 3>(0, 0);
        let Some(inv) = m.try_inverse() else {
            return normal;
        };
        let transformed = inv.transpose() * normal;
        transformed.try_normalize(f64::EPSILON).unwrap_or(normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn identity_leaves_points_alone() {
        let t = Transform3D::identity();
        let p = t.transform_point(Point3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn translation_moves_points_not_vectors() {
        let t = Transform3D::translation(10.0, 0.0, -1.0);
        let p = t.transform_point(Point3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(p.x, 11.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);

        let v = t.transform_vector(Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(v.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rotation_z_quarter_turn() {
        let t = Transform3D::rotation_z(PI / 2.0);
        let p = t.transform_point(Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn normal_stays_unit_under_scale() {
        let t = Transform3D::uniform_scale(3.0);
        let n = t.transform_normal(Vector3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn composition_order() {
        let translate = Transform3D::translation(1.0, 0.0, 0.0);
        let scale = Transform3D::uniform_scale(2.0);
        let combined = translate.then(&scale);
        let p = combined.transform_point(Point3::origin());
        // translated to (1,0,0), then scaled to (2,0,0)
        assert_relative_eq!(p.x, 2.0, epsilon = 1e-12);
    }
}
