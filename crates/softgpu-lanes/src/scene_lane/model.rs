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

//! Scene-graph data: meshes, nodes and models.

use softgpu_core::math::{Mat4, Vec2, Vec3, Vec4};
use softgpu_core::{AttributeType, IndexBuffer, TextureData, VertexAttrib};

/// Where one attribute lane lives inside a mesh's vertex bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttribLayout {
    /// Distance in bytes between consecutive vertices.
    pub stride: usize,
    /// Offset in bytes of the first element.
    pub offset: usize,
    /// Element shape; `Empty` when the mesh has no such lane.
    pub ty: AttributeType,
}

impl AttribLayout {
    /// Creates a layout description.
    pub const fn new(stride: usize, offset: usize, ty: AttributeType) -> Self {
        Self { stride, offset, ty }
    }

    /// Describes this lane over `data`.
    pub fn bind<'a>(&self, data: &'a [u8]) -> VertexAttrib<'a> {
        if self.ty.is_enabled() {
            VertexAttrib::new(data, self.stride, self.offset, self.ty)
        } else {
            VertexAttrib::default()
        }
    }
}

/// Owned index storage of a mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshIndices {
    /// 8-bit indices.
    U8(Vec<u8>),
    /// 16-bit indices.
    U16(Vec<u16>),
    /// 32-bit indices.
    U32(Vec<u32>),
}

impl MeshIndices {
    /// Borrows the indices as an [`IndexBuffer`].
    pub fn as_buffer(&self) -> IndexBuffer<'_> {
        match self {
            MeshIndices::U8(i) => IndexBuffer::U8(i),
            MeshIndices::U16(i) => IndexBuffer::U16(i),
            MeshIndices::U32(i) => IndexBuffer::U32(i),
        }
    }

    /// Number of indices.
    pub fn len(&self) -> usize {
        self.as_buffer().len()
    }

    /// Returns `true` if there are no indices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The interleaved vertex format produced by the mesh builders.
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct MeshVertex {
    /// Object-space position.
    pub position: Vec3,
    /// Object-space normal.
    pub normal: Vec3,
    /// Texture coordinate.
    pub uv: Vec2,
}

impl MeshVertex {
    /// Size in bytes of one vertex.
    pub const STRIDE: usize = std::mem::size_of::<MeshVertex>();

    /// Creates a vertex.
    pub const fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}

/// A drawable piece of geometry with its material inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex bytes addressed by the three lane layouts.
    pub vertex_data: Vec<u8>,
    /// Position lane (slot 0).
    pub position: AttribLayout,
    /// Normal lane (slot 1).
    pub normal: AttribLayout,
    /// Texture coordinate lane (slot 2).
    pub tex_coord: AttribLayout,
    /// Optional index buffer.
    pub indices: Option<MeshIndices>,
    /// Number of indices, or of vertices when the mesh is not indexed.
    pub index_count: u32,
    /// Color used when there is no diffuse texture.
    pub diffuse_color: Vec4,
    /// Index into [`Model::textures`], if textured.
    pub diffuse_texture: Option<usize>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self {
            vertex_data: Vec::new(),
            position: AttribLayout::default(),
            normal: AttribLayout::default(),
            tex_coord: AttribLayout::default(),
            indices: None,
            index_count: 0,
            diffuse_color: Vec4::ONE,
            diffuse_texture: None,
        }
    }
}

impl Mesh {
    /// Builds an interleaved mesh from vertices and optional 32-bit indices.
    pub fn from_vertices(vertices: &[MeshVertex], indices: Option<Vec<u32>>) -> Self {
        let index_count = match &indices {
            Some(i) => i.len() as u32,
            None => vertices.len() as u32,
        };
        Self {
            vertex_data: bytemuck::cast_slice(vertices).to_vec(),
            position: AttribLayout::new(MeshVertex::STRIDE, 0, AttributeType::Vec3),
            normal: AttribLayout::new(MeshVertex::STRIDE, 12, AttributeType::Vec3),
            tex_coord: AttribLayout::new(MeshVertex::STRIDE, 24, AttributeType::Vec2),
            indices: indices.map(MeshIndices::U32),
            index_count,
            ..Self::default()
        }
    }

    /// Sets the diffuse color and returns `self`.
    pub fn with_diffuse_color(mut self, color: Vec4) -> Self {
        self.diffuse_color = color;
        self
    }

    /// Sets the diffuse texture index and returns `self`.
    pub fn with_diffuse_texture(mut self, texture: usize) -> Self {
        self.diffuse_texture = Some(texture);
        self
    }

    /// The position lane over this mesh's bytes.
    pub fn position_attrib(&self) -> VertexAttrib<'_> {
        self.position.bind(&self.vertex_data)
    }

    /// The normal lane over this mesh's bytes.
    pub fn normal_attrib(&self) -> VertexAttrib<'_> {
        self.normal.bind(&self.vertex_data)
    }

    /// The texture coordinate lane over this mesh's bytes.
    pub fn tex_coord_attrib(&self) -> VertexAttrib<'_> {
        self.tex_coord.bind(&self.vertex_data)
    }

    /// An axis-aligned cube centered on the origin with per-face normals and uvs.
    pub fn cube(half_extent: f32) -> Self {
        const FACES: [(Vec3, Vec3, Vec3); 6] = [
            // normal, u axis, v axis
            (Vec3::X, Vec3::new(0.0, 0.0, -1.0), Vec3::Y),
            (Vec3::new(-1.0, 0.0, 0.0), Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::X, Vec3::new(0.0, 0.0, -1.0)),
            (Vec3::new(0.0, -1.0, 0.0), Vec3::X, Vec3::Z),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::new(0.0, 0.0, -1.0), Vec3::new(-1.0, 0.0, 0.0), Vec3::Y),
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for (normal, u, v) in FACES {
            let base = vertices.len() as u32;
            for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                let position = (normal + u * su + v * sv) * half_extent;
                let uv = Vec2::new(su * 0.5 + 0.5, sv * 0.5 + 0.5);
                vertices.push(MeshVertex::new(position, normal, uv));
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
        }
        Self::from_vertices(&vertices, Some(indices))
    }
}

/// A node of the scene tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    /// Transform relative to the parent node.
    pub model_matrix: Mat4,
    /// Index into [`Model::meshes`], if this node draws something.
    pub mesh: Option<usize>,
    /// Child nodes, drawn after this one.
    pub children: Vec<Node>,
}

impl Node {
    /// Creates a node with the given local transform.
    pub fn new(model_matrix: Mat4) -> Self {
        Self {
            model_matrix,
            ..Self::default()
        }
    }

    /// Attaches a mesh and returns `self`.
    pub fn with_mesh(mut self, mesh: usize) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Appends a child and returns `self`.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }
}

/// A complete model: meshes, textures and the node trees that place them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    /// Every mesh of the model.
    pub meshes: Vec<Mesh>,
    /// Roots of the node trees.
    pub roots: Vec<Node>,
    /// Every texture of the model.
    pub textures: Vec<TextureData>,
}
