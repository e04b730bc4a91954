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

//! Primitive assembly.

use super::fetch_vertex;
use softgpu_core::{GpuContext, OutVertex};

/// Three shaded vertices in input winding order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle {
    /// The vertices of the triangle.
    pub vertices: [OutVertex; 3],
}

impl Triangle {
    /// Creates a triangle from its vertices.
    pub fn new(a: OutVertex, b: OutVertex, c: OutVertex) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }
}

/// Fetches and shades the three vertices starting at `first_invocation`.
///
/// The vertex shader runs once per vertex, in increasing invocation order.
pub fn assemble_triangle(ctx: &GpuContext<'_>, first_invocation: u32) -> Triangle {
    let mut triangle = Triangle::default();
    for (i, out) in triangle.vertices.iter_mut().enumerate() {
        let input = fetch_vertex(&ctx.vao, first_invocation + i as u32);
        ctx.prg.vertex_shader.run(out, &input, &ctx.prg.uniforms);
    }
    triangle
}
