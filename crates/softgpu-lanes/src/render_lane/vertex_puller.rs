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

//! Vertex fetch: resolves vertex identity and gathers attribute lanes.

use softgpu_core::{InVertex, VertexArray};

/// Returns the vertex identity of shader invocation `invocation`.
///
/// Without an index buffer the identity is the invocation index itself;
/// otherwise it is the index buffer element at that position.
#[inline]
pub fn vertex_id(vao: &VertexArray<'_>, invocation: u32) -> u32 {
    match &vao.indices {
        Some(indices) => indices.get(invocation as usize),
        None => invocation,
    }
}

/// Builds the vertex shader input for invocation `invocation`.
///
/// Disabled lanes leave their attribute slot empty.
pub fn fetch_vertex(vao: &VertexArray<'_>, invocation: u32) -> InVertex {
    let mut vertex = InVertex {
        vertex_id: vertex_id(vao, invocation),
        ..InVertex::default()
    };
    for (slot, lane) in vertex.attributes.iter_mut().zip(vao.attributes.iter()) {
        if lane.is_enabled() {
            *slot = lane.read(vertex.vertex_id);
        }
    }
    vertex
}

#[cfg(test)]
mod tests {
    use super::*;
    use softgpu_core::math::Vec2;
    use softgpu_core::{Attribute, AttributeType, VertexAttrib};

    #[test]
    fn test_identity_without_indices() {
        let vao = VertexArray::default();
        for i in 0..5 {
            assert_eq!(vertex_id(&vao, i), i);
        }
    }

    #[test]
    fn test_identity_from_each_index_width() {
        let small = [7u8, 3, 1];
        let medium = [7u16, 3, 1];
        let wide = [7u32, 3, 1];
        for vao in [
            VertexArray::default().with_indices(&small[..]),
            VertexArray::default().with_indices(&medium[..]),
            VertexArray::default().with_indices(&wide[..]),
        ] {
            assert_eq!(vertex_id(&vao, 0), 7);
            assert_eq!(vertex_id(&vao, 2), 1);
        }
    }

    #[test]
    fn test_fetch_reads_enabled_lanes_only() {
        let data: Vec<f32> = (0..8).map(|v| v as f32).collect();
        let indices = [3u16, 0];
        let vao = VertexArray::default()
            .with_attribute(1, VertexAttrib::from_slice(&data, 8, 0, AttributeType::Vec2))
            .with_indices(&indices[..]);

        let v = fetch_vertex(&vao, 0);
        assert_eq!(v.vertex_id, 3);
        assert_eq!(v.attributes[1], Attribute::Vec2(Vec2::new(6.0, 7.0)));
        assert_eq!(v.attributes[0], Attribute::Empty);
    }
}
