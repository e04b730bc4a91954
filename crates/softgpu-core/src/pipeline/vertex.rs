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

//! Per-vertex and per-fragment records exchanged with shaders.

use super::{Attribute, MAX_ATTRIBUTES};
use crate::math::Vec4;

/// The input of a vertex shader invocation, filled by the vertex puller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InVertex {
    /// Attributes fetched from the bound vertex buffer lanes.
    pub attributes: [Attribute; MAX_ATTRIBUTES],
    /// The vertex identity (`gl_VertexID`): the invocation index, or the
    /// index buffer element at that position when indexing is enabled.
    pub vertex_id: u32,
}

/// The output of a vertex shader invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutVertex {
    /// Attributes to be clipped and interpolated towards fragments.
    pub attributes: [Attribute; MAX_ATTRIBUTES],
    /// The clip-space position (`gl_Position`).
    pub position: Vec4,
}

impl Default for OutVertex {
    fn default() -> Self {
        Self {
            attributes: [Attribute::Empty; MAX_ATTRIBUTES],
            position: Vec4::W,
        }
    }
}

impl OutVertex {
    /// Linearly interpolates position and every attribute slot between two vertices.
    pub fn lerp(a: &OutVertex, b: &OutVertex, t: f32) -> OutVertex {
        let mut out = OutVertex {
            position: Vec4::lerp(a.position, b.position, t),
            ..OutVertex::default()
        };
        for (i, slot) in out.attributes.iter_mut().enumerate() {
            *slot = Attribute::lerp(&a.attributes[i], &b.attributes[i], t);
        }
        out
    }
}

/// The input of a fragment shader invocation, produced by the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InFragment {
    /// Interpolated attributes; only slots enabled in the program's
    /// forwarding table are filled.
    pub attributes: [Attribute; MAX_ATTRIBUTES],
    /// Window-space pixel center in `xy` and the interpolated NDC depth in `z`
    /// (`gl_FragCoord`).
    pub frag_coord: Vec4,
}

impl Default for InFragment {
    fn default() -> Self {
        Self {
            attributes: [Attribute::Empty; MAX_ATTRIBUTES],
            frag_coord: Vec4::ONE,
        }
    }
}

/// The output of a fragment shader invocation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OutFragment {
    /// The RGBA fragment color in `[0, 1]` (`gl_FragColor`).
    pub color: Vec4,
}
