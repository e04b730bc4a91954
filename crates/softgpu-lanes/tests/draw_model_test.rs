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

//! Tests for the model traversal: draw order, accumulated transforms and
//! the state bound for each mesh, plus one complete render.

use approx::assert_abs_diff_eq;
use softgpu_core::math::{degrees_to_radians, Mat4, Vec2, Vec3, Vec4};
use softgpu_core::{AttributeType, FrameBuffer, GpuContext, IndexType, TextureData};
use softgpu_lanes::render_lane::{clear, DrawTriangles, RasterPipeline};
use softgpu_lanes::scene_lane::shaders::*;
use softgpu_lanes::scene_lane::{draw_model, Mesh, MeshVertex, Model, Node};

/// State observed by the drawer at one draw call.
#[derive(Debug, Clone, PartialEq)]
struct RecordedDraw {
    vertex_count: u32,
    model: Mat4,
    normal_matrix: Mat4,
    diffuse_color: Vec4,
    has_texture: f32,
    texture_bound: bool,
    lanes: [AttributeType; 3],
    index_type: Option<IndexType>,
}

#[derive(Default)]
struct RecordingDrawer {
    draws: Vec<RecordedDraw>,
    view_projection: Vec<Mat4>,
    light: Vec<Vec3>,
    vs2fs: Vec<[AttributeType; 3]>,
}

impl DrawTriangles for RecordingDrawer {
    fn draw_triangles(&mut self, ctx: &mut GpuContext<'_>, vertex_count: u32) {
        let values = &ctx.prg.uniforms.values;
        self.draws.push(RecordedDraw {
            vertex_count,
            model: values[UNIFORM_MODEL].as_mat4(),
            normal_matrix: values[UNIFORM_NORMAL_MATRIX].as_mat4(),
            diffuse_color: values[UNIFORM_DIFFUSE_COLOR].as_vec4(),
            has_texture: values[UNIFORM_HAS_TEXTURE].as_float(),
            texture_bound: ctx.prg.uniforms.textures[0].is_bound(),
            lanes: [SLOT_POSITION, SLOT_NORMAL, SLOT_TEX_COORD].map(|s| ctx.vao.attributes[s].ty),
            index_type: ctx.vao.indices.map(|i| i.index_type()),
        });
        self.view_projection.push(values[UNIFORM_VIEW_PROJECTION].as_mat4());
        self.light.push(values[UNIFORM_LIGHT].as_vec3());
        self.vs2fs.push([SLOT_POSITION, SLOT_NORMAL, SLOT_TEX_COORD].map(|s| ctx.prg.vs2fs[s]));
    }
}

fn single_triangle() -> Mesh {
    let normal = Vec3::Z;
    let vertices = [
        MeshVertex::new(Vec3::new(0.0, 0.0, 0.0), normal, Vec2::new(0.0, 0.0)),
        MeshVertex::new(Vec3::new(1.0, 0.0, 0.0), normal, Vec2::new(1.0, 0.0)),
        MeshVertex::new(Vec3::new(0.0, 1.0, 0.0), normal, Vec2::new(0.0, 1.0)),
    ];
    Mesh::from_vertices(&vertices, None).with_diffuse_color(Vec4::new(0.0, 1.0, 0.0, 1.0))
}

fn record(model: &Model) -> RecordingDrawer {
    let mut fb = FrameBuffer::new(8, 8);
    let mut ctx = GpuContext::new(fb.frame());
    let mut drawer = RecordingDrawer::default();
    let proj = Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0));
    let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0));
    draw_model(&mut ctx, model, &proj, &view, Vec3::new(1.0, 2.0, 3.0), &mut drawer);
    drawer
}

// ─────────────────────────────────────────────────────────────────────────────
// Traversal
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_draws_follow_pre_order_with_accumulated_transforms() {
    let t1 = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));
    let s2 = Mat4::from_scale(Vec3::splat(2.0));
    let t3 = Mat4::from_translation(Vec3::new(0.0, 3.0, 0.0));
    let t4 = Mat4::from_translation(Vec3::new(0.0, 0.0, -4.0));
    let r5 = Mat4::from_rotation_y(degrees_to_radians(90.0));

    let model = Model {
        meshes: vec![single_triangle(), Mesh::cube(1.0).with_diffuse_texture(0)],
        roots: vec![
            Node::new(t1).with_mesh(0).with_child(
                Node::new(s2)
                    .with_mesh(1)
                    .with_child(Node::new(t3).with_child(Node::new(t4).with_mesh(0))),
            ),
            Node::new(r5).with_mesh(1),
        ],
        textures: vec![TextureData::checkerboard(4, 2, [255; 4], [0, 0, 0, 255])],
    };

    let drawer = record(&model);
    let draws = &drawer.draws;
    assert_eq!(draws.len(), 4, "the mesh-less node must not be drawn");

    assert_eq!(
        draws.iter().map(|d| d.vertex_count).collect::<Vec<_>>(),
        vec![3, 36, 3, 36]
    );
    assert_eq!(draws[0].model, t1);
    assert_eq!(draws[1].model, t1 * s2);
    assert_eq!(draws[2].model, t1 * s2 * t3 * t4);
    assert_eq!(draws[3].model, r5);

    assert_eq!(draws[0].index_type, None);
    assert_eq!(draws[1].index_type, Some(IndexType::U32));
    let lanes = [AttributeType::Vec3, AttributeType::Vec3, AttributeType::Vec2];
    assert!(draws.iter().all(|d| d.lanes == lanes));
}

#[test]
fn test_normal_matrix_is_inverse_transpose_of_model() {
    let model = Model {
        meshes: vec![single_triangle()],
        roots: vec![Node::new(Mat4::from_scale(Vec3::new(2.0, 4.0, 1.0))).with_mesh(0)],
        ..Model::default()
    };
    let drawer = record(&model);
    let normal = drawer.draws[0].normal_matrix;

    let n = normal * Vec4::new(1.0, 1.0, 1.0, 0.0);
    assert_abs_diff_eq!(n.x, 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(n.y, 0.25, epsilon = 1e-6);
    assert_abs_diff_eq!(n.z, 1.0, epsilon = 1e-6);
}

#[test]
fn test_shared_state_is_bound_once_for_every_draw() {
    let model = Model {
        meshes: vec![single_triangle()],
        roots: vec![
            Node::new(Mat4::IDENTITY).with_mesh(0),
            Node::new(Mat4::IDENTITY).with_mesh(0),
        ],
        ..Model::default()
    };
    let drawer = record(&model);

    let proj = Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0));
    let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0));
    assert_eq!(drawer.view_projection, vec![proj * view; 2]);
    assert_eq!(drawer.light, vec![Vec3::new(1.0, 2.0, 3.0); 2]);
    assert_eq!(
        drawer.vs2fs,
        vec![[AttributeType::Vec3, AttributeType::Vec3, AttributeType::Vec2]; 2]
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Materials
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_texture_flag_follows_each_mesh() {
    let model = Model {
        meshes: vec![
            Mesh::cube(1.0).with_diffuse_texture(0),
            single_triangle(),
            single_triangle().with_diffuse_texture(7),
        ],
        roots: vec![
            Node::new(Mat4::IDENTITY).with_mesh(0),
            Node::new(Mat4::IDENTITY).with_mesh(1),
            Node::new(Mat4::IDENTITY).with_mesh(2),
        ],
        textures: vec![TextureData::checkerboard(4, 2, [255; 4], [0, 0, 0, 255])],
    };
    let drawer = record(&model);
    let flags: Vec<(f32, bool)> = drawer
        .draws
        .iter()
        .map(|d| (d.has_texture, d.texture_bound))
        .collect();

    assert_eq!(flags, vec![(1.0, true), (0.0, false), (0.0, false)]);
    assert_eq!(drawer.draws[1].diffuse_color, Vec4::new(0.0, 1.0, 0.0, 1.0));
}

#[test]
fn test_missing_mesh_is_skipped_but_children_are_drawn() {
    let model = Model {
        meshes: vec![single_triangle()],
        roots: vec![Node::new(Mat4::IDENTITY)
            .with_mesh(3)
            .with_child(Node::new(Mat4::from_scale(Vec3::splat(2.0))).with_mesh(0))],
        ..Model::default()
    };
    let drawer = record(&model);

    assert_eq!(drawer.draws.len(), 1);
    assert_eq!(drawer.draws[0].model, Mat4::from_scale(Vec3::splat(2.0)));
}

#[test]
fn test_empty_model_issues_no_draws() {
    assert!(record(&Model::default()).draws.is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendering
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_renders_lit_cube() {
    let model = Model {
        meshes: vec![Mesh::cube(1.0).with_diffuse_color(Vec4::new(1.0, 0.0, 0.0, 1.0))],
        roots: vec![Node::new(Mat4::IDENTITY).with_mesh(0)],
        ..Model::default()
    };
    let eye = Vec3::new(0.0, 0.0, 5.0);
    let proj = Mat4::perspective_rh_no(degrees_to_radians(60.0), 1.0, 0.1, 100.0);
    let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y).expect("valid camera");

    let mut fb = FrameBuffer::new(100, 100);
    let mut pipeline = RasterPipeline::new();
    {
        let mut ctx = GpuContext::new(fb.frame());
        clear(&mut ctx.frame, 0.0, 0.0, 0.2, 1.0);
        draw_model(&mut ctx, &model, &proj, &view, eye, &mut pipeline);
    }

    assert_eq!(fb.color_at(50, 50), [255, 0, 0, 255]);
    for (x, y) in [(0, 0), (99, 0), (0, 99), (99, 99)] {
        assert_eq!(fb.color_at(x, y), [0, 0, 51, 255], "corner ({x}, {y})");
    }

    let front_depth = fb.depth_at(50, 50);
    assert!(front_depth > -1.0 && front_depth < 1.0, "depth {front_depth}");

    let stats = pipeline.total_stats();
    assert_eq!(stats.draw_calls, 1);
    assert_eq!(stats.triangles_assembled, 12);
    assert_eq!(stats.triangles_culled, 0);
}
