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

//! Provides the linear algebra used by the pipeline and by shaders.
//!
//! Vectors and matrices are `#[repr(C)]` and [`bytemuck::Pod`], so vertex
//! buffers can be assembled from typed arrays with `bytemuck::cast_slice` and
//! read back by the vertex puller without copies through intermediate types.
//!
//! Angles are in **radians** unless a function name says otherwise.

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

pub use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f32 = PI / 180.0;

pub mod dimension;
pub mod matrix;
pub mod vector;

pub use self::dimension::Extent2D;
pub use self::matrix::Mat4;
pub use self::vector::{Vec2, Vec3, Vec4};

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// use softgpu_core::math::{degrees_to_radians, PI};
/// assert_eq!(degrees_to_radians(180.0), PI);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Clamps a floating-point value to the `[0.0, 1.0]` range.
///
/// # Examples
///
/// ```
/// use softgpu_core::math::saturate;
/// assert_eq!(saturate(1.5), 1.0);
/// assert_eq!(saturate(-0.5), 0.0);
/// ```
#[inline]
pub fn saturate(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Returns the fractional part of `value` in `[0, 1)`, GLSL style.
///
/// Unlike [`f32::fract`], negative inputs wrap upwards: `fract(-0.25) == 0.75`.
///
/// # Examples
///
/// ```
/// use softgpu_core::math::fract;
/// assert_eq!(fract(1.25), 0.25);
/// assert_eq!(fract(-0.25), 0.75);
/// ```
#[inline]
pub fn fract(value: f32) -> f32 {
    value - value.floor()
}

/// Performs an approximate equality comparison using [`EPSILON`].
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}
