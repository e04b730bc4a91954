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

//! Perspective division and the viewport transform.

use super::Triangle;

/// Divides `x`, `y` and `z` of every vertex position by its `w`.
///
/// `w` itself is kept, the rasterizer needs it for perspective-correct
/// interpolation.
pub fn perspective_divide(triangle: &mut Triangle) {
    for v in &mut triangle.vertices {
        let w = v.position.w;
        v.position.x /= w;
        v.position.y /= w;
        v.position.z /= w;
    }
}

/// Maps NDC `x`/`y` in `[-1, 1]` to window pixel coordinates.
///
/// `(-1, -1)` lands on the bottom-left corner of pixel `(0, 0)`. Depth is
/// left in NDC.
pub fn viewport_transform(triangle: &mut Triangle, width: u32, height: u32) {
    for v in &mut triangle.vertices {
        v.position.x = (v.position.x * 0.5 + 0.5) * width as f32;
        v.position.y = (v.position.y * 0.5 + 0.5) * height as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use softgpu_core::math::Vec4;
    use softgpu_core::OutVertex;

    #[test]
    fn test_divide_then_viewport() {
        let mut t = Triangle::default();
        t.vertices[0].position = Vec4::new(-2.0, -2.0, 1.0, 2.0);
        t.vertices[1].position = Vec4::new(0.5, 0.5, 0.25, 0.5);
        t.vertices[2] = OutVertex::default();

        perspective_divide(&mut t);
        assert_eq!(t.vertices[0].position, Vec4::new(-1.0, -1.0, 0.5, 2.0));
        assert_eq!(t.vertices[1].position, Vec4::new(1.0, 1.0, 0.5, 0.5));

        viewport_transform(&mut t, 200, 100);
        assert_eq!(t.vertices[0].position, Vec4::new(0.0, 0.0, 0.5, 2.0));
        assert_eq!(t.vertices[1].position, Vec4::new(200.0, 100.0, 0.5, 0.5));
        assert_eq!(t.vertices[2].position, Vec4::new(100.0, 50.0, 0.0, 1.0));
    }
}
