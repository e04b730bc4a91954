// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the `Mat4` type and associated operations.

use super::{Vec3, Vec4, EPSILON};
use std::ops::{Index, IndexMut, Mul};

/// A 4x4 column-major matrix, used for affine transformations and projections.
///
/// Multiplication follows the usual column-vector convention: `m * v`
/// transforms `v`, and `a * b` applies `b` first.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Mat4 {
    /// The columns of the matrix. `cols[3]` holds the translation.
    pub cols: [Vec4; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };

    /// A 4x4 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        cols: [Vec4::ZERO; 4],
    };

    /// Creates a new matrix from four column vectors.
    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Returns a row of the matrix as a `Vec4`.
    #[inline]
    pub fn row(&self, index: usize) -> Vec4 {
        Vec4::new(
            self.cols[0][index],
            self.cols[1][index],
            self.cols[2][index],
            self.cols[3][index],
        )
    }

    /// Creates a translation matrix.
    #[inline]
    pub fn from_translation(v: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = v.extend(1.0);
        m
    }

    /// Creates a non-uniform scaling matrix.
    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self::from_cols(
            Vec4::X * scale.x,
            Vec4::Y * scale.y,
            Vec4::Z * scale.z,
            Vec4::W,
        )
    }

    /// Creates a matrix for a right-handed rotation around the Y-axis.
    #[inline]
    pub fn from_rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols(
            Vec4::new(c, 0.0, -s, 0.0),
            Vec4::Y,
            Vec4::new(s, 0.0, c, 0.0),
            Vec4::W,
        )
    }

    /// Creates a rotation matrix from an axis (normalized internally) and an angle.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let a = axis.normalize();
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;

        Self::from_cols(
            Vec4::new(t * a.x * a.x + c, t * a.x * a.y + s * a.z, t * a.x * a.z - s * a.y, 0.0),
            Vec4::new(t * a.x * a.y - s * a.z, t * a.y * a.y + c, t * a.y * a.z + s * a.x, 0.0),
            Vec4::new(t * a.x * a.z + s * a.y, t * a.y * a.z - s * a.x, t * a.z * a.z + c, 0.0),
            Vec4::W,
        )
    }

    /// Creates a right-handed perspective projection with an OpenGL-style
    /// `[-1, 1]` depth range (NO).
    ///
    /// Points on the near plane map to `z = -w`, points on the far plane to
    /// `z = w`; this is the convention the near-plane clipper expects.
    ///
    /// # Arguments
    ///
    /// * `fov_y_radians`: Vertical field of view in radians.
    /// * `aspect_ratio`: Width divided by height of the viewport.
    /// * `z_near`: Distance to the near clipping plane (must be positive).
    /// * `z_far`: Distance to the far clipping plane (must be > `z_near`).
    pub fn perspective_rh_no(fov_y_radians: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        assert!(z_near > 0.0 && z_far > z_near);
        let f = 1.0 / (fov_y_radians / 2.0).tan();
        let range = z_near - z_far;

        Self::from_cols(
            Vec4::new(f / aspect_ratio, 0.0, 0.0, 0.0),
            Vec4::new(0.0, f, 0.0, 0.0),
            Vec4::new(0.0, 0.0, (z_far + z_near) / range, -1.0),
            Vec4::new(0.0, 0.0, 2.0 * z_far * z_near / range, 0.0),
        )
    }

    /// Creates a right-handed view matrix for a camera at `eye` looking at `target`.
    ///
    /// Returns `None` if `eye` and `target` coincide or `up` is parallel to
    /// the view direction.
    pub fn look_at_rh(eye: Vec3, target: Vec3, up: Vec3) -> Option<Self> {
        let forward = target - eye;
        if forward.length_squared() < EPSILON * EPSILON {
            return None;
        }
        let f = forward.normalize();
        let s = f.cross(up);
        if s.length_squared() < EPSILON * EPSILON {
            return None;
        }
        let s = s.normalize();
        let u = s.cross(f);

        Some(Self::from_cols(
            Vec4::new(s.x, u.x, -f.x, 0.0),
            Vec4::new(s.y, u.y, -f.y, 0.0),
            Vec4::new(s.z, u.z, -f.z, 0.0),
            Vec4::new(-eye.dot(s), -eye.dot(u), eye.dot(f), 1.0),
        ))
    }

    /// Returns the transpose of the matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2), self.row(3))
    }

    /// Computes the inverse of the matrix, or `None` if it is singular.
    ///
    /// Uses the 2x2 sub-determinant expansion: six minors from the top two
    /// rows and six from the bottom two are enough to build every cofactor.
    pub fn inverse(&self) -> Option<Self> {
        let [a, b, c, d] = self.cols;

        let s0 = a.x * b.y - b.x * a.y;
        let s1 = a.x * c.y - c.x * a.y;
        let s2 = a.x * d.y - d.x * a.y;
        let s3 = b.x * c.y - c.x * b.y;
        let s4 = b.x * d.y - d.x * b.y;
        let s5 = c.x * d.y - d.x * c.y;

        let c5 = c.z * d.w - d.z * c.w;
        let c4 = b.z * d.w - d.z * b.w;
        let c3 = b.z * c.w - c.z * b.w;
        let c2 = a.z * d.w - d.z * a.w;
        let c1 = a.z * c.w - c.z * a.w;
        let c0 = a.z * b.w - b.z * a.w;

        let det = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;
        if det.abs() < EPSILON {
            return None;
        }
        let inv = 1.0 / det;

        // Rows of the adjugate are written as columns of the result.
        Some(Self::from_cols(
            Vec4::new(
                (b.y * c5 - c.y * c4 + d.y * c3) * inv,
                (-a.y * c5 + c.y * c2 - d.y * c1) * inv,
                (a.y * c4 - b.y * c2 + d.y * c0) * inv,
                (-a.y * c3 + b.y * c1 - c.y * c0) * inv,
            ),
            Vec4::new(
                (-b.x * c5 + c.x * c4 - d.x * c3) * inv,
                (a.x * c5 - c.x * c2 + d.x * c1) * inv,
                (-a.x * c4 + b.x * c2 - d.x * c0) * inv,
                (a.x * c3 - b.x * c1 + c.x * c0) * inv,
            ),
            Vec4::new(
                (b.w * s5 - c.w * s4 + d.w * s3) * inv,
                (-a.w * s5 + c.w * s2 - d.w * s1) * inv,
                (a.w * s4 - b.w * s2 + d.w * s0) * inv,
                (-a.w * s3 + b.w * s1 - c.w * s0) * inv,
            ),
            Vec4::new(
                (-b.z * s5 + c.z * s4 - d.z * s3) * inv,
                (a.z * s5 - c.z * s2 + d.z * s1) * inv,
                (-a.z * s4 + b.z * s2 - d.z * s0) * inv,
                (a.z * s3 - b.z * s1 + c.z * s0) * inv,
            ),
        ))
    }

    /// The matrix used to transform normals: `transpose(inverse(self))`.
    ///
    /// Falls back to the identity for singular matrices.
    #[inline]
    pub fn inverse_transpose(&self) -> Self {
        self.inverse()
            .map(|m| m.transpose())
            .unwrap_or(Self::IDENTITY)
    }

    /// Transforms a point (`w = 1`), returning the `xyz` part.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        (*self * p.extend(1.0)).truncate()
    }

    /// Transforms a direction (`w = 0`), returning the `xyz` part.
    #[inline]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        (*self * v.extend(0.0)).truncate()
    }
}

impl Default for Mat4 {
    /// Returns the 4x4 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Mat4) -> Self {
        Self {
            cols: rhs.cols.map(|col| self * col),
        }
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.cols[0] * rhs.x + self.cols[1] * rhs.y + self.cols[2] * rhs.z + self.cols[3] * rhs.w
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;
    /// Returns the column at `index`.
    #[inline]
    fn index(&self, index: usize) -> &Vec4 {
        &self.cols[index]
    }
}

impl IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vec4 {
        &mut self.cols[index]
    }
}
