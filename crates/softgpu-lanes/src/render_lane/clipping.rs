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

//! Near-plane clipping in homogeneous clip space.
//!
//! The near plane is `z = -w`. A vertex with `z < -w` lies in front of it
//! (towards the viewer) and is clipped away; `z >= -w` is kept.

use super::Triangle;
use softgpu_core::math::Vec4;
use softgpu_core::OutVertex;
use std::iter::Flatten;

/// The result of clipping one triangle against the near plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Clipped {
    /// Every vertex was clipped away.
    Culled,
    /// The triangle survived whole, or as a single smaller triangle.
    One(Triangle),
    /// One vertex was clipped; the remaining quad is split in two.
    Two(Triangle, Triangle),
}

impl Clipped {
    /// Number of triangles produced.
    pub fn len(&self) -> usize {
        match self {
            Clipped::Culled => 0,
            Clipped::One(_) => 1,
            Clipped::Two(..) => 2,
        }
    }

    /// Returns `true` if nothing survived.
    pub fn is_empty(&self) -> bool {
        matches!(self, Clipped::Culled)
    }
}

impl IntoIterator for Clipped {
    type Item = Triangle;
    type IntoIter = Flatten<std::array::IntoIter<Option<Triangle>, 2>>;

    fn into_iter(self) -> Self::IntoIter {
        let pair = match self {
            Clipped::Culled => [None, None],
            Clipped::One(a) => [Some(a), None],
            Clipped::Two(a, b) => [Some(a), Some(b)],
        };
        pair.into_iter().flatten()
    }
}

#[inline]
fn is_clipped(position: Vec4) -> bool {
    position.z < -position.w
}

/// Returns the vertex where the edge from `behind` to `kept` meets `z = -w`.
fn intersect(behind: &OutVertex, kept: &OutVertex) -> OutVertex {
    let p = behind.position;
    let q = kept.position;
    let t = (-p.w - p.z) / ((q.w - p.w) + (q.z - p.z));
    OutVertex::lerp(behind, kept, t)
}

/// Clips a clip-space triangle against the near plane.
///
/// Winding order is preserved in every output triangle, and clipped vertices
/// carry every attribute slot interpolated along the cut edge.
pub fn clip_near_plane(triangle: &Triangle) -> Clipped {
    let v = &triangle.vertices;
    let clipped = v.map(|vertex| is_clipped(vertex.position));

    match clipped.iter().filter(|c| **c).count() {
        0 => Clipped::One(*triangle),
        3 => {
            log::trace!("Triangle culled by the near plane");
            Clipped::Culled
        }
        1 => {
            let a = clipped.iter().position(|c| *c).unwrap_or(0);
            let (b, c) = ((a + 1) % 3, (a + 2) % 3);
            let x1 = intersect(&v[a], &v[b]);
            let x2 = intersect(&v[a], &v[c]);
            log::trace!("Near plane cut vertex {a}, emitting a quad");
            Clipped::Two(
                Triangle::new(x1, v[b], v[c]),
                Triangle::new(v[c], x2, x1),
            )
        }
        _ => {
            let c = clipped.iter().position(|c| !*c).unwrap_or(0);
            let (a, b) = ((c + 1) % 3, (c + 2) % 3);
            let x1 = intersect(&v[a], &v[c]);
            let x2 = intersect(&v[b], &v[c]);
            log::trace!("Near plane kept only vertex {c}");
            Clipped::One(Triangle::new(x1, x2, v[c]))
        }
    }
}
