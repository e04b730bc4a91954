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

//! Vertex buffer lane descriptors and index buffers.

use super::{Attribute, AttributeType, MAX_ATTRIBUTES};

/// Describes how one attribute lane is read from a borrowed byte buffer.
///
/// Element `n` of the lane starts at `offset + stride * n` bytes and holds
/// `ty.components()` packed native-endian `f32` values. The buffer is not
/// required to be aligned.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VertexAttrib<'a> {
    /// The backing bytes. Must be large enough for every vertex drawn.
    pub data: &'a [u8],
    /// Distance in bytes between consecutive elements.
    pub stride: usize,
    /// Offset in bytes of element 0.
    pub offset: usize,
    /// The element shape; [`AttributeType::Empty`] disables the lane.
    pub ty: AttributeType,
}

impl<'a> VertexAttrib<'a> {
    /// Creates a lane over raw bytes.
    pub fn new(data: &'a [u8], stride: usize, offset: usize, ty: AttributeType) -> Self {
        Self {
            data,
            stride,
            offset,
            ty,
        }
    }

    /// Creates a lane over any slice of plain-old-data, e.g. `&[f32]` or `&[Vec3]`.
    ///
    /// `stride` and `offset` are still expressed in bytes.
    pub fn from_slice<T: bytemuck::Pod>(
        data: &'a [T],
        stride: usize,
        offset: usize,
        ty: AttributeType,
    ) -> Self {
        Self::new(bytemuck::cast_slice(data), stride, offset, ty)
    }

    /// Returns `true` unless the lane is disabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.ty.is_enabled()
    }

    /// Reads the element belonging to `vertex_id`.
    ///
    /// # Panics
    ///
    /// Panics if the element lies outside of `data`.
    pub fn read(&self, vertex_id: u32) -> Attribute {
        let start = self.offset + self.stride * vertex_id as usize;
        let mut c = [0.0f32; 4];
        for (i, value) in c.iter_mut().enumerate().take(self.ty.components()) {
            let at = start + i * std::mem::size_of::<f32>();
            *value = bytemuck::pod_read_unaligned(&self.data[at..at + std::mem::size_of::<f32>()]);
        }
        Attribute::from_components(self.ty, c)
    }
}

/// The width of the elements of an index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum IndexType {
    /// 8-bit unsigned indices.
    U8 = 1,
    /// 16-bit unsigned indices.
    U16 = 2,
    /// 32-bit unsigned indices.
    #[default]
    U32 = 4,
}

impl IndexType {
    /// Size of one index in bytes.
    pub const fn byte_size(self) -> usize {
        self as usize
    }
}

/// A borrowed index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexBuffer<'a> {
    /// 8-bit indices.
    U8(&'a [u8]),
    /// 16-bit indices.
    U16(&'a [u16]),
    /// 32-bit indices.
    U32(&'a [u32]),
}

impl<'a> IndexBuffer<'a> {
    /// Reinterprets raw bytes as indices of the given width.
    ///
    /// Returns `None` if the bytes are misaligned or not a whole number of indices.
    pub fn from_bytes(bytes: &'a [u8], ty: IndexType) -> Option<Self> {
        Some(match ty {
            IndexType::U8 => IndexBuffer::U8(bytes),
            IndexType::U16 => IndexBuffer::U16(bytemuck::try_cast_slice(bytes).ok()?),
            IndexType::U32 => IndexBuffer::U32(bytemuck::try_cast_slice(bytes).ok()?),
        })
    }

    /// Returns the element width of this buffer.
    pub fn index_type(&self) -> IndexType {
        match self {
            IndexBuffer::U8(_) => IndexType::U8,
            IndexBuffer::U16(_) => IndexType::U16,
            IndexBuffer::U32(_) => IndexType::U32,
        }
    }

    /// Returns the number of indices.
    pub fn len(&self) -> usize {
        match self {
            IndexBuffer::U8(i) => i.len(),
            IndexBuffer::U16(i) => i.len(),
            IndexBuffer::U32(i) => i.len(),
        }
    }

    /// Returns `true` if the buffer holds no indices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the index at `position`, widened to `u32`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    #[inline]
    pub fn get(&self, position: usize) -> u32 {
        match self {
            IndexBuffer::U8(i) => u32::from(i[position]),
            IndexBuffer::U16(i) => u32::from(i[position]),
            IndexBuffer::U32(i) => i[position],
        }
    }
}

impl<'a> From<&'a [u8]> for IndexBuffer<'a> {
    fn from(i: &'a [u8]) -> Self {
        IndexBuffer::U8(i)
    }
}

impl<'a> From<&'a [u16]> for IndexBuffer<'a> {
    fn from(i: &'a [u16]) -> Self {
        IndexBuffer::U16(i)
    }
}

impl<'a> From<&'a [u32]> for IndexBuffer<'a> {
    fn from(i: &'a [u32]) -> Self {
        IndexBuffer::U32(i)
    }
}

/// The vertex input state of a draw call: attribute lanes and optional indexing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VertexArray<'a> {
    /// One descriptor per attribute slot.
    pub attributes: [VertexAttrib<'a>; MAX_ATTRIBUTES],
    /// When `None`, vertex identity equals the invocation index.
    pub indices: Option<IndexBuffer<'a>>,
}

impl<'a> VertexArray<'a> {
    /// Sets lane `slot` and returns `self` for chaining.
    pub fn with_attribute(mut self, slot: usize, attrib: VertexAttrib<'a>) -> Self {
        self.attributes[slot] = attrib;
        self
    }

    /// Binds an index buffer and returns `self` for chaining.
    pub fn with_indices(mut self, indices: impl Into<IndexBuffer<'a>>) -> Self {
        self.indices = Some(indices.into());
        self
    }
}
