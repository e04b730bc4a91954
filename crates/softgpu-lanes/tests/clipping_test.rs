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

//! Near-plane clipping observed through full draw calls.

use softgpu_core::math::Vec4;
use softgpu_core::{
    FragmentShader, FrameBuffer, GpuContext, InFragment, InVertex, OutFragment, OutVertex,
    Program, Uniforms, VertexShader,
};
use softgpu_lanes::render_lane::{
    clip_near_plane, draw_triangles, Clipped, DrawTriangles, RasterPipeline, Triangle,
};
use std::cell::RefCell;

struct InjectVertices(Vec<OutVertex>);

impl VertexShader for InjectVertices {
    fn run(&self, out: &mut OutVertex, input: &InVertex, _: &Uniforms<'_>) {
        *out = self.0[input.vertex_id as usize];
    }
}

#[derive(Default)]
struct DumpDepths(RefCell<Vec<f32>>);

impl FragmentShader for DumpDepths {
    fn run(&self, out: &mut OutFragment, input: &InFragment, _: &Uniforms<'_>) {
        self.0.borrow_mut().push(input.frag_coord.z);
        out.color = Vec4::ONE;
    }
}

fn clip(x: f32, y: f32, z: f32, w: f32) -> OutVertex {
    OutVertex {
        position: Vec4::new(x, y, z, w),
        ..OutVertex::default()
    }
}

/// Draws `vertices` into a 100x100 frame and returns the depth of every shaded fragment.
fn draw(vertices: Vec<OutVertex>) -> Vec<f32> {
    let count = vertices.len() as u32;
    let vs = InjectVertices(vertices);
    let fs = DumpDepths::default();
    let mut fb = FrameBuffer::new(100, 100);
    {
        let mut ctx = GpuContext::new(fb.frame());
        ctx.prg = Program::new(&vs, &fs);
        draw_triangles(&mut ctx, count);
    }
    fs.0.into_inner()
}

/// Every rotation of the vertex order, in both windings.
fn orderings(v: [OutVertex; 3]) -> Vec<Vec<OutVertex>> {
    let mut out = Vec::new();
    for r in 0..3 {
        let rotated = vec![v[r], v[(r + 1) % 3], v[(r + 2) % 3]];
        let mut reversed = rotated.clone();
        reversed.reverse();
        out.push(rotated);
        out.push(reversed);
    }
    out
}

fn assert_count_near(fragments: &[f32], expected: usize, tolerance: usize) {
    assert!(
        fragments.len().abs_diff(expected) <= tolerance,
        "expected {expected} +/- {tolerance} fragments, got {}",
        fragments.len()
    );
}

fn assert_depths_in_front_of_near_plane(fragments: &[f32]) {
    for z in fragments {
        assert!(*z >= -1.0 - 1e-4, "fragment depth {z} is in front of the near plane");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Classification
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_triangle_fully_behind_produces_nothing() {
    let behind = [
        clip(-1.0, -1.0, -7.0, -1.0),
        clip(1.0, -1.0, -7.0, -1.0),
        clip(-1.0, 1.0, -7.0, -1.0),
    ];
    assert!(clip_near_plane(&Triangle::new(behind[0], behind[1], behind[2])).is_empty());

    for vertices in orderings(behind) {
        assert!(draw(vertices).is_empty());
    }
}

#[test]
fn test_triangle_fully_in_front_is_untouched() {
    let tri = Triangle::new(
        clip(-1.0, -1.0, 0.0, 1.0),
        clip(1.0, -1.0, 0.5, 1.0),
        clip(-1.0, 1.0, -1.0, 1.0),
    );
    match clip_near_plane(&tri) {
        Clipped::One(kept) => assert_eq!(kept, tri),
        other => panic!("expected the triangle to pass through, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Partial clipping
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_one_vertex_behind_covers_three_quarters() {
    let vertices = [
        clip(-2.0, -2.0, 2.0, 2.0),
        clip(2.0, -2.0, 2.0, 2.0),
        clip(-2.0 / 3.0, 2.0 / 3.0, -2.0, 2.0 / 3.0),
    ];
    let split = clip_near_plane(&Triangle::new(vertices[0], vertices[1], vertices[2]));
    assert_eq!(split.len(), 2);
    for triangle in split {
        for v in triangle.vertices {
            assert!(v.position.z >= -v.position.w - 1e-5, "vertex {v:?} still behind");
        }
    }

    for ordered in orderings(vertices) {
        let fragments = draw(ordered);
        assert_count_near(&fragments, 3750, 200);
        assert_depths_in_front_of_near_plane(&fragments);
    }
}

#[test]
fn test_two_vertices_behind_cover_one_eighth() {
    let vertices = [
        clip(-2.0 / 3.0, -2.0 / 3.0, -2.0, 2.0 / 3.0),
        clip(2.0 / 3.0, -2.0 / 3.0, -2.0, 2.0 / 3.0),
        clip(-2.0, 2.0, 2.0, 2.0),
    ];
    assert_eq!(
        clip_near_plane(&Triangle::new(vertices[0], vertices[1], vertices[2])).len(),
        1
    );

    for ordered in orderings(vertices) {
        let fragments = draw(ordered);
        assert_count_near(&fragments, 1250, 200);
        assert_depths_in_front_of_near_plane(&fragments);
    }
}

#[test]
fn test_pipeline_counts_culled_and_split_triangles() {
    let mut vertices = vec![
        clip(-1.0, -1.0, -7.0, -1.0),
        clip(1.0, -1.0, -7.0, -1.0),
        clip(-1.0, 1.0, -7.0, -1.0),
    ];
    vertices.extend([
        clip(-2.0, -2.0, 2.0, 2.0),
        clip(2.0, -2.0, 2.0, 2.0),
        clip(-2.0 / 3.0, 2.0 / 3.0, -2.0, 2.0 / 3.0),
    ]);

    let vs = InjectVertices(vertices);
    let fs = DumpDepths::default();
    let mut fb = FrameBuffer::new(100, 100);
    let mut pipeline = RasterPipeline::new();
    {
        let mut ctx = GpuContext::new(fb.frame());
        ctx.prg = Program::new(&vs, &fs);
        pipeline.draw_triangles(&mut ctx, 6);
    }

    let stats = pipeline.last_stats();
    assert_eq!(stats.triangles_assembled, 2);
    assert_eq!(stats.triangles_culled, 1);
    assert_eq!(stats.triangles_rasterized, 2);
    assert_eq!(stats.fragments_shaded, fs.0.borrow().len() as u64);
}
