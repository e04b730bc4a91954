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

use super::{Frame, Program, VertexArray};

/// The complete state consumed by a draw call.
///
/// A context borrows every buffer it refers to; it can be reconfigured
/// freely between draws.
#[derive(Debug, Default)]
pub struct GpuContext<'a> {
    /// The active vertex input state.
    pub vao: VertexArray<'a>,
    /// The active shaders, uniforms and forwarding table.
    pub prg: Program<'a>,
    /// The render target.
    pub frame: Frame<'a>,
}

impl<'a> GpuContext<'a> {
    /// Creates a context rendering into `frame` with default vertex and program state.
    pub fn new(frame: Frame<'a>) -> Self {
        Self {
            vao: VertexArray::default(),
            prg: Program::default(),
            frame,
        }
    }
}
