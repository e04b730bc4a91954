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

//! Programmable stages: shader traits, uniforms and the program object.

use super::{
    AttributeType, InFragment, InVertex, OutFragment, OutVertex, Texture, Uniform, MAX_ATTRIBUTES,
    MAX_TEXTURES, MAX_UNIFORMS,
};
use std::fmt;

/// A vertex shader: maps one fetched vertex to a clip-space vertex.
///
/// Implementations must write `out.position` and every attribute slot the
/// program forwards to the fragment stage. Any
/// `Fn(&mut OutVertex, &InVertex, &Uniforms)` is a vertex shader.
pub trait VertexShader {
    /// Runs the shader for a single vertex.
    fn run(&self, out: &mut OutVertex, input: &InVertex, uniforms: &Uniforms<'_>);
}

impl<F> VertexShader for F
where
    F: Fn(&mut OutVertex, &InVertex, &Uniforms<'_>),
{
    #[inline]
    fn run(&self, out: &mut OutVertex, input: &InVertex, uniforms: &Uniforms<'_>) {
        self(out, input, uniforms)
    }
}

/// A fragment shader: computes the color of one rasterized fragment.
///
/// Any `Fn(&mut OutFragment, &InFragment, &Uniforms)` is a fragment shader.
pub trait FragmentShader {
    /// Runs the shader for a single fragment.
    fn run(&self, out: &mut OutFragment, input: &InFragment, uniforms: &Uniforms<'_>);
}

impl<F> FragmentShader for F
where
    F: Fn(&mut OutFragment, &InFragment, &Uniforms<'_>),
{
    #[inline]
    fn run(&self, out: &mut OutFragment, input: &InFragment, uniforms: &Uniforms<'_>) {
        self(out, input, uniforms)
    }
}

/// A shader that leaves its output at the default value.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopShader;

impl VertexShader for NoopShader {
    fn run(&self, _out: &mut OutVertex, _input: &InVertex, _uniforms: &Uniforms<'_>) {}
}

impl FragmentShader for NoopShader {
    fn run(&self, _out: &mut OutFragment, _input: &InFragment, _uniforms: &Uniforms<'_>) {}
}

/// Uniform registers and texture bindings shared by all invocations of a draw.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Uniforms<'a> {
    /// Uniform registers.
    pub values: [Uniform; MAX_UNIFORMS],
    /// Texture bindings.
    pub textures: [Texture<'a>; MAX_TEXTURES],
}

/// The shader program of a draw call.
#[derive(Clone, Copy)]
pub struct Program<'a> {
    /// Runs once per vertex.
    pub vertex_shader: &'a dyn VertexShader,
    /// Runs once per covered pixel.
    pub fragment_shader: &'a dyn FragmentShader,
    /// Uniforms and textures visible to both shaders.
    pub uniforms: Uniforms<'a>,
    /// Forwarding table: slot `i` of the vertex output is interpolated into
    /// slot `i` of the fragment input with shape `vs2fs[i]`. Empty slots are
    /// not interpolated.
    pub vs2fs: [AttributeType; MAX_ATTRIBUTES],
}

impl Default for Program<'_> {
    fn default() -> Self {
        Self {
            vertex_shader: &NoopShader,
            fragment_shader: &NoopShader,
            uniforms: Uniforms::default(),
            vs2fs: [AttributeType::Empty; MAX_ATTRIBUTES],
        }
    }
}

impl<'a> Program<'a> {
    /// Creates a program from two shaders with empty uniforms and no forwarded attributes.
    pub fn new(vertex_shader: &'a dyn VertexShader, fragment_shader: &'a dyn FragmentShader) -> Self {
        Self {
            vertex_shader,
            fragment_shader,
            ..Self::default()
        }
    }

    /// Declares slot `slot` as forwarded with shape `ty` and returns `self`.
    pub fn with_forwarded(mut self, slot: usize, ty: AttributeType) -> Self {
        self.vs2fs[slot] = ty;
        self
    }
}

impl fmt::Debug for Program<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Program")
            .field("uniforms", &self.uniforms)
            .field("vs2fs", &self.vs2fs)
            .finish_non_exhaustive()
    }
}
