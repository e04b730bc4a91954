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

//! The data model of the rasterization pipeline.
//!
//! Everything here is plain state: registers, buffer descriptors, shader
//! bindings and render targets. The stages that consume it live in the
//! `softgpu-lanes` crate.

mod context;
mod error;
mod frame;
mod program;
mod register;
mod texture;
mod vertex;
mod vertex_array;

pub use self::context::*;
pub use self::error::*;
pub use self::frame::*;
pub use self::program::*;
pub use self::register::*;
pub use self::texture::*;
pub use self::vertex::*;
pub use self::vertex_array::*;

/// Number of attribute slots per vertex and fragment.
pub const MAX_ATTRIBUTES: usize = 16;
/// Number of uniform registers per program.
pub const MAX_UNIFORMS: usize = 16;
/// Number of texture bindings per program.
pub const MAX_TEXTURES: usize = 8;
