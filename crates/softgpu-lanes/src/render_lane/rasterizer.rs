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

//! Edge-function scan conversion.
//!
//! A [`Rasterizer`] walks the pixel bounding box of a window-space triangle
//! and yields one [`InFragment`] per covered pixel center. Depth is
//! interpolated linearly in screen space, attributes with perspective
//! correction.

use super::Triangle;
use softgpu_core::math::{Vec2, Vec4};
use softgpu_core::{Attribute, AttributeType, InFragment, MAX_ATTRIBUTES};

/// Lazily produces the fragments covered by one window-space triangle.
///
/// Pixels are visited row by row, bottom row first. Both windings are
/// accepted; zero-area triangles produce nothing.
#[derive(Debug, Clone)]
pub struct Rasterizer {
    triangle: Triangle,
    vs2fs: [AttributeType; MAX_ATTRIBUTES],
    corners: [Vec2; 3],
    /// Twice the signed area, the normaliser of every edge function.
    area: f64,
    min_x: u32,
    max_x: u32,
    max_y: u32,
    x: u32,
    y: u32,
}

impl Rasterizer {
    /// Prepares scan conversion of `triangle` into a `width` x `height` frame.
    ///
    /// `vs2fs` selects which attribute slots are interpolated and with what shape.
    pub fn new(
        triangle: Triangle,
        width: u32,
        height: u32,
        vs2fs: &[AttributeType; MAX_ATTRIBUTES],
    ) -> Self {
        let corners = triangle.vertices.map(|v| v.position.xy());
        let area = edge(corners[0], corners[1], corners[2]);

        let xs = corners.map(|c| c.x);
        let ys = corners.map(|c| c.y);
        let (min_x, max_x) = pixel_span(&xs, width);
        let (min_y, mut max_y) = pixel_span(&ys, height);

        if area == 0.0 || !area.is_finite() {
            log::trace!("Skipping degenerate triangle {corners:?}");
            max_y = min_y;
        }

        Self {
            triangle,
            vs2fs: *vs2fs,
            corners,
            area,
            min_x,
            max_x,
            max_y,
            x: min_x,
            y: min_y,
        }
    }

    /// Returns the barycentric weights of `p`, or `None` if `p` is outside.
    ///
    /// Weight `i` belongs to vertex `i`. Points on an edge count as inside.
    pub fn barycentrics(&self, p: Vec2) -> Option<[f32; 3]> {
        let [a, b, c] = self.corners;
        let l0 = (edge(b, c, p) / self.area) as f32;
        let l1 = (edge(c, a, p) / self.area) as f32;
        let l2 = (edge(a, b, p) / self.area) as f32;
        (l0 >= 0.0 && l1 >= 0.0 && l2 >= 0.0).then_some([l0, l1, l2])
    }

    fn shade(&self, x: u32, y: u32, l: [f32; 3]) -> InFragment {
        let v = &self.triangle.vertices;
        let depth = l[0] * v[0].position.z + l[1] * v[1].position.z + l[2] * v[2].position.z;

        let mut fragment = InFragment {
            frag_coord: Vec4::new(x as f32 + 0.5, y as f32 + 0.5, depth, 1.0),
            ..InFragment::default()
        };

        let h = [
            l[0] / v[0].position.w,
            l[1] / v[1].position.w,
            l[2] / v[2].position.w,
        ];
        let s = h[0] + h[1] + h[2];
        let weights = if s != 0.0 && s.is_finite() {
            h.map(|hi| hi / s)
        } else {
            l
        };

        for (i, ty) in self.vs2fs.iter().enumerate() {
            if ty.is_enabled() {
                let slots = [&v[0].attributes[i], &v[1].attributes[i], &v[2].attributes[i]];
                fragment.attributes[i] = Attribute::weighted(*ty, slots, weights);
            }
        }
        fragment
    }
}

impl Iterator for Rasterizer {
    type Item = InFragment;

    fn next(&mut self) -> Option<InFragment> {
        while self.y < self.max_y {
            while self.x < self.max_x {
                let (x, y) = (self.x, self.y);
                self.x += 1;
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if let Some(l) = self.barycentrics(center) {
                    return Some(self.shade(x, y, l));
                }
            }
            self.x = self.min_x;
            self.y += 1;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.y >= self.max_y {
            return (0, Some(0));
        }
        let row = (self.max_x - self.min_x) as usize;
        let rows_left = (self.max_y - self.y - 1) as usize;
        (0, Some(rows_left * row + (self.max_x - self.x) as usize))
    }
}

/// Signed edge function: twice the signed area of `(a, b, p)`.
///
/// Evaluated in `f64`: window coordinates of far off-screen vertices would
/// overflow the products in `f32`.
#[inline]
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f64 {
    let (ax, ay) = (f64::from(a.x), f64::from(a.y));
    (f64::from(b.x) - ax) * (f64::from(p.y) - ay) - (f64::from(b.y) - ay) * (f64::from(p.x) - ax)
}

/// Integer pixel range `[min, max)` whose centers may fall inside the span,
/// clamped to `[0, size)`.
fn pixel_span(values: &[f32; 3], size: u32) -> (u32, u32) {
    let lo = values.iter().copied().fold(f32::INFINITY, f32::min);
    let hi = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let min = (lo.floor().max(0.0) as u32).min(size);
    let max = (hi.ceil().max(0.0) as u32).min(size);
    (min, max.max(min))
}
