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

//! The draw entry point.

use super::{
    assemble_triangle, clip_near_plane, per_fragment, perspective_divide, viewport_transform,
    Clipped, FragmentOutcome, RasterStats, Rasterizer,
};
use softgpu_core::{GpuContext, OutFragment};

/// Something that executes triangle draw calls.
///
/// Consumers that issue draws (such as the scene traversal) take this trait
/// instead of calling the pipeline directly, so tests can substitute a
/// recording double.
pub trait DrawTriangles {
    /// Draws `vertex_count / 3` triangles with the state bound in `ctx`.
    fn draw_triangles(&mut self, ctx: &mut GpuContext<'_>, vertex_count: u32);
}

/// The software rasterization pipeline.
///
/// Runs every stage synchronously on the calling thread: fetch, vertex
/// shading, assembly, near-plane clipping, perspective divide, viewport,
/// rasterization, fragment shading and the per-fragment operations.
#[derive(Debug, Default, Clone)]
pub struct RasterPipeline {
    last: RasterStats,
    total: RasterStats,
}

impl RasterPipeline {
    /// Creates a pipeline with zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the most recent draw call.
    pub fn last_stats(&self) -> RasterStats {
        self.last
    }

    /// Statistics accumulated over every draw call of this pipeline.
    pub fn total_stats(&self) -> RasterStats {
        self.total
    }

    /// Resets the accumulated statistics.
    pub fn reset_stats(&mut self) {
        self.last = RasterStats::default();
        self.total = RasterStats::default();
    }
}

impl DrawTriangles for RasterPipeline {
    fn draw_triangles(&mut self, ctx: &mut GpuContext<'_>, vertex_count: u32) {
        let mut stats = RasterStats {
            draw_calls: 1,
            ..RasterStats::default()
        };
        let (width, height) = (ctx.frame.width(), ctx.frame.height());

        for first in (0..vertex_count / 3).map(|t| t * 3) {
            let triangle = assemble_triangle(ctx, first);
            stats.vertices_shaded += 3;
            stats.triangles_assembled += 1;

            let clipped = clip_near_plane(&triangle);
            if let Clipped::Culled = clipped {
                stats.triangles_culled += 1;
            }

            for mut triangle in clipped {
                perspective_divide(&mut triangle);
                viewport_transform(&mut triangle, width, height);
                stats.triangles_rasterized += 1;

                let GpuContext { prg, frame, .. } = &mut *ctx;
                for fragment in Rasterizer::new(triangle, width, height, &prg.vs2fs) {
                    let mut out = OutFragment::default();
                    prg.fragment_shader.run(&mut out, &fragment, &prg.uniforms);
                    stats.fragments_shaded += 1;

                    match per_fragment(frame, fragment.frag_coord, out.color) {
                        FragmentOutcome::Written => {
                            stats.fragments_passed += 1;
                            stats.depth_writes += 1;
                        }
                        FragmentOutcome::ColorOnly => stats.fragments_passed += 1,
                        FragmentOutcome::DepthFailed | FragmentOutcome::OutOfBounds => {}
                    }
                }
            }
        }

        log::debug!("draw_triangles({vertex_count}): {stats}");
        self.last = stats;
        self.total += stats;
    }
}

/// Draws `vertex_count / 3` triangles with a throw-away [`RasterPipeline`].
pub fn draw_triangles(ctx: &mut GpuContext<'_>, vertex_count: u32) {
    RasterPipeline::new().draw_triangles(ctx, vertex_count);
}
