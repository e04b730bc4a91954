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

//! Counters collected while drawing.

use std::fmt;
use std::ops::AddAssign;

/// Work done by one or more draw calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RasterStats {
    /// Number of `draw_triangles` calls accounted for.
    pub draw_calls: u32,
    /// Vertex shader invocations.
    pub vertices_shaded: u64,
    /// Triangles built by primitive assembly.
    pub triangles_assembled: u64,
    /// Triangles discarded entirely by the near plane.
    pub triangles_culled: u64,
    /// Triangles handed to the rasterizer after clipping.
    pub triangles_rasterized: u64,
    /// Fragment shader invocations.
    pub fragments_shaded: u64,
    /// Fragments that passed the depth test.
    pub fragments_passed: u64,
    /// Fragments that also updated the depth buffer.
    pub depth_writes: u64,
}

impl AddAssign for RasterStats {
    fn add_assign(&mut self, rhs: Self) {
        self.draw_calls += rhs.draw_calls;
        self.vertices_shaded += rhs.vertices_shaded;
        self.triangles_assembled += rhs.triangles_assembled;
        self.triangles_culled += rhs.triangles_culled;
        self.triangles_rasterized += rhs.triangles_rasterized;
        self.fragments_shaded += rhs.fragments_shaded;
        self.fragments_passed += rhs.fragments_passed;
        self.depth_writes += rhs.depth_writes;
    }
}

impl fmt::Display for RasterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} draws, {} vertices, {} triangles ({} culled, {} rasterized), {} fragments ({} passed, {} depth writes)",
            self.draw_calls,
            self.vertices_shaded,
            self.triangles_assembled,
            self.triangles_culled,
            self.triangles_rasterized,
            self.fragments_shaded,
            self.fragments_passed,
            self.depth_writes
        )
    }
}
