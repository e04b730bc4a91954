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

//! # SoftGPU Core
//!
//! Foundational crate containing the math primitives and the data model of the
//! software rasterization pipeline: attribute/uniform registers, textures,
//! vertex arrays, shader programs, frames and the context that ties them
//! together for a draw call.

#![warn(missing_docs)]

pub mod math;
pub mod pipeline;

pub use pipeline::{
    Attribute, AttributeType, FragmentShader, Frame, FrameBuffer, FrameError, GpuContext,
    InFragment, InVertex, IndexBuffer, IndexType, OutFragment, OutVertex, Program, Texture,
    TextureData, Uniform, Uniforms, VertexArray, VertexAttrib, VertexShader, FAR_DEPTH,
    MAX_ATTRIBUTES, MAX_TEXTURES, MAX_UNIFORMS,
};
