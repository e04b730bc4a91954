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

//! Demo rendering methods.
//!
//! Each method configures a [`GpuContext`] with its own shaders and buffers,
//! clears the frame and issues its draws.

use anyhow::{ensure, Result};
use clap::ValueEnum;
use softgpu_core::math::{degrees_to_radians, Mat4, Vec2, Vec3, Vec4};
use softgpu_core::{
    AttributeType, FrameBuffer, GpuContext, InFragment, InVertex, OutFragment, OutVertex, Program,
    TextureData, Uniforms, VertexArray, VertexAttrib,
};
use softgpu_lanes::render_lane::{clear, DrawTriangles, RasterPipeline, RasterStats};
use softgpu_lanes::scene_lane::{draw_model, Mesh, Model, Node};

mod shaded;

/// The methods the sandbox can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// A white triangle covering half of the frame.
    Triangle,
    /// A triangle with one vertex behind the near plane.
    #[value(name = "triangle-clip1")]
    TriangleClip1,
    /// A triangle with two vertices behind the near plane.
    #[value(name = "triangle-clip2")]
    TriangleClip2,
    /// A color-interpolated triangle seen through the orbit camera.
    #[value(name = "triangle-3d")]
    Triangle3d,
    /// Four triangles pulled from a vertex buffer.
    #[value(name = "triangle-buffer")]
    TriangleBuffer,
    /// A full-screen quad sampling the texture.
    #[value(name = "textured-quad")]
    TexturedQuad,
    /// A small lit and textured scene drawn through the model traversal.
    Model,
    /// A striped sphere with per-fragment Phong lighting.
    Phong,
    /// A waving Czech flag built from an indexed grid.
    #[value(name = "cz-flag")]
    CzFlag,
    /// The South Korean flag evaluated per fragment on a full-screen quad.
    #[value(name = "sk-flag")]
    SkFlag,
}

/// Camera and light shared by every method.
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    pub proj: Mat4,
    pub view: Mat4,
    pub light: Vec3,
    pub camera: Vec3,
    /// Seconds elapsed, for animated methods.
    pub time: f32,
}

impl Scene {
    /// An orbit camera `distance` units from the origin, tilted 20 degrees.
    pub fn orbit(distance: f32, aspect: f32) -> Option<Self> {
        let angle = degrees_to_radians(-20.0);
        let camera = Vec3::new(0.0, -angle.sin(), angle.cos()) * distance;
        let view = Mat4::look_at_rh(camera, Vec3::ZERO, Vec3::Y)?;
        let proj = Mat4::perspective_rh_no(degrees_to_radians(60.0), aspect, 0.1, 1000.0);
        Some(Self {
            proj,
            view,
            light: Vec3::splat(100.0),
            camera,
            time: 0.0,
        })
    }
}

/// Renders `method` into `fb` and returns the pipeline statistics.
pub fn render(
    method: Method,
    fb: &mut FrameBuffer,
    scene: &Scene,
    texture: &TextureData,
) -> Result<RasterStats> {
    ensure!(fb.width() > 0 && fb.height() > 0, "Cannot render into an empty frame");

    let model: Model;
    let sphere: shaded::SphereMesh;
    let flag: shaded::FlagGrid;
    let mut pipeline = RasterPipeline::new();
    let mut ctx = GpuContext::new(fb.frame());
    match method {
        Method::Triangle => triangle(&mut ctx, &mut pipeline),
        Method::TriangleClip1 => triangle_clip(&mut ctx, &mut pipeline, &CLIP1_VERTICES),
        Method::TriangleClip2 => triangle_clip(&mut ctx, &mut pipeline, &CLIP2_VERTICES),
        Method::Triangle3d => triangle_3d(&mut ctx, &mut pipeline, scene),
        Method::TriangleBuffer => triangle_buffer(&mut ctx, &mut pipeline),
        Method::TexturedQuad => textured_quad(&mut ctx, &mut pipeline, texture),
        Method::Model => {
            model = demo_model(texture);
            model_scene(&mut ctx, &mut pipeline, scene, &model);
        }
        Method::Phong => {
            sphere = shaded::SphereMesh::new(1.0, 32, 48);
            shaded::phong(&mut ctx, &mut pipeline, scene, &sphere);
        }
        Method::CzFlag => {
            flag = shaded::FlagGrid::new();
            shaded::cz_flag(&mut ctx, &mut pipeline, scene, &flag);
        }
        Method::SkFlag => shaded::sk_flag(&mut ctx, &mut pipeline),
    }
    Ok(pipeline.total_stats())
}

fn white(out: &mut OutFragment, _: &InFragment, _: &Uniforms<'_>) {
    out.color = Vec4::ONE;
}

// ─────────────────────────────────────────────────────────────────────────────
// Triangles
// ─────────────────────────────────────────────────────────────────────────────

const HALF_FRAME: [Vec4; 3] = [
    Vec4::new(-1.0, -1.0, 0.0, 1.0),
    Vec4::new(1.0, -1.0, 0.0, 1.0),
    Vec4::new(-1.0, 1.0, 0.0, 1.0),
];

fn half_frame_vs(out: &mut OutVertex, input: &InVertex, _: &Uniforms<'_>) {
    out.position = HALF_FRAME[input.vertex_id as usize % 3];
}

fn triangle(ctx: &mut GpuContext<'_>, pipeline: &mut RasterPipeline) {
    ctx.prg = Program::new(&half_frame_vs, &white);
    clear(&mut ctx.frame, 0.0, 0.0, 0.0, 1.0);
    pipeline.draw_triangles(ctx, 3);
}

// Vertex 2 sits at view depth 2/3 of a projection with near 1 and far 2,
// i.e. in front of the near plane.
const CLIP1_VERTICES: [Vec4; 3] = [
    Vec4::new(-2.0, -2.0, 2.0, 2.0),
    Vec4::new(2.0, -2.0, 2.0, 2.0),
    Vec4::new(-2.0 / 3.0, 2.0 / 3.0, -2.0, 2.0 / 3.0),
];

const CLIP2_VERTICES: [Vec4; 3] = [
    Vec4::new(-2.0 / 3.0, -2.0 / 3.0, -2.0, 2.0 / 3.0),
    Vec4::new(2.0 / 3.0, -2.0 / 3.0, -2.0, 2.0 / 3.0),
    Vec4::new(-2.0, 2.0, 2.0, 2.0),
];

/// Positions handed to the clipping demos through uniforms 0..3.
fn uniform_position_vs(out: &mut OutVertex, input: &InVertex, uniforms: &Uniforms<'_>) {
    out.position = uniforms.values[input.vertex_id as usize % 3].as_vec4();
}

fn triangle_clip(ctx: &mut GpuContext<'_>, pipeline: &mut RasterPipeline, vertices: &[Vec4; 3]) {
    ctx.prg = Program::new(&uniform_position_vs, &white);
    for (slot, v) in vertices.iter().enumerate() {
        ctx.prg.uniforms.values[slot] = (*v).into();
    }
    clear(&mut ctx.frame, 0.0, 0.0, 0.0, 0.0);
    pipeline.draw_triangles(ctx, 3);
}

const UNIFORM_PROJECTION: usize = 2;
const UNIFORM_VIEW: usize = 3;
const SLOT_COLOR: usize = 3;

fn colored_triangle_vs(out: &mut OutVertex, input: &InVertex, uniforms: &Uniforms<'_>) {
    const CORNERS: [(Vec2, Vec4); 3] = [
        (Vec2::new(-1.0, -1.0), Vec4::new(1.0, 0.0, 0.0, 1.0)),
        (Vec2::new(1.0, -1.0), Vec4::new(0.0, 1.0, 0.0, 1.0)),
        (Vec2::new(-1.0, 1.0), Vec4::new(0.0, 0.0, 1.0, 1.0)),
    ];
    let mvp = uniforms.values[UNIFORM_PROJECTION].as_mat4() * uniforms.values[UNIFORM_VIEW].as_mat4();
    let (corner, color) = CORNERS[input.vertex_id as usize % 3];
    out.position = mvp * Vec4::new(corner.x, corner.y, 0.0, 1.0);
    out.attributes[SLOT_COLOR] = color.into();
}

fn interpolated_color_fs(out: &mut OutFragment, input: &InFragment, _: &Uniforms<'_>) {
    out.color = input.attributes[SLOT_COLOR].as_vec4();
}

fn triangle_3d(ctx: &mut GpuContext<'_>, pipeline: &mut RasterPipeline, scene: &Scene) {
    ctx.prg = Program::new(&colored_triangle_vs, &interpolated_color_fs)
        .with_forwarded(SLOT_COLOR, AttributeType::Vec4);
    ctx.prg.uniforms.values[UNIFORM_PROJECTION] = scene.proj.into();
    ctx.prg.uniforms.values[UNIFORM_VIEW] = scene.view.into();
    clear(&mut ctx.frame, 0.0, 0.0, 0.0, 1.0);
    pipeline.draw_triangles(ctx, 3);
}

#[rustfmt::skip]
const TRIANGLE_BUFFER: [f32; 24] = [
    -0.5, -0.5,   -0.1, -0.5,   -0.5, -0.1,
     0.1, -0.5,    0.5, -0.5,    0.5, -0.1,
    -0.5,  0.1,   -0.1,  0.5,   -0.5,  0.5,
     0.1,  0.5,    0.5,  0.1,    0.5,  0.5,
];

fn buffer_position_vs(out: &mut OutVertex, input: &InVertex, _: &Uniforms<'_>) {
    let p = input.attributes[0].as_vec2();
    out.position = Vec4::new(p.x, p.y, 0.0, 1.0);
}

fn green(out: &mut OutFragment, _: &InFragment, _: &Uniforms<'_>) {
    out.color = Vec4::new(0.0, 1.0, 0.0, 1.0);
}

fn triangle_buffer(ctx: &mut GpuContext<'_>, pipeline: &mut RasterPipeline) {
    ctx.vao = VertexArray::default().with_attribute(
        0,
        VertexAttrib::from_slice(&TRIANGLE_BUFFER, 2 * std::mem::size_of::<f32>(), 0, AttributeType::Vec2),
    );
    ctx.prg = Program::new(&buffer_position_vs, &green);
    clear(&mut ctx.frame, 0.0, 0.0, 0.0, 0.0);
    pipeline.draw_triangles(ctx, 3 * 4);
}

// ─────────────────────────────────────────────────────────────────────────────
// Textures and models
// ─────────────────────────────────────────────────────────────────────────────

fn full_screen_quad_vs(out: &mut OutVertex, input: &InVertex, _: &Uniforms<'_>) {
    const CORNERS: [Vec2; 6] = [
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(-1.0, 1.0),
        Vec2::new(-1.0, 1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(1.0, 1.0),
    ];
    let corner = CORNERS[input.vertex_id as usize % 6];
    out.position = Vec4::new(corner.x, corner.y, 0.0, 1.0);
    out.attributes[0] = ((corner + Vec2::ONE) * 0.5).into();
}

fn textured_fs(out: &mut OutFragment, input: &InFragment, uniforms: &Uniforms<'_>) {
    out.color = uniforms.textures[0].sample(input.attributes[0].as_vec2());
}

fn textured_quad<'a>(
    ctx: &mut GpuContext<'a>,
    pipeline: &mut RasterPipeline,
    texture: &'a TextureData,
) {
    ctx.prg = Program::new(&full_screen_quad_vs, &textured_fs).with_forwarded(0, AttributeType::Vec2);
    ctx.prg.uniforms.textures[0] = texture.view();
    clear(&mut ctx.frame, 0.0, 0.0, 0.0, 0.0);
    pipeline.draw_triangles(ctx, 6);
}

/// A textured cube resting on a wide slab, with a small cube orbiting it.
fn demo_model(texture: &TextureData) -> Model {
    let slab = Mat4::from_translation(Vec3::new(0.0, -1.2, 0.0))
        * Mat4::from_scale(Vec3::new(3.0, 0.1, 3.0));
    let spin = Mat4::from_rotation_y(degrees_to_radians(30.0));
    let satellite = Mat4::from_translation(Vec3::new(1.6, 0.4, 0.0))
        * Mat4::from_scale(Vec3::splat(0.35));

    Model {
        meshes: vec![
            Mesh::cube(1.0).with_diffuse_texture(0),
            Mesh::cube(1.0).with_diffuse_color(Vec4::new(0.8, 0.3, 0.2, 1.0)),
        ],
        roots: vec![
            Node::new(slab).with_mesh(1),
            Node::new(spin)
                .with_mesh(0)
                .with_child(Node::new(satellite).with_mesh(1)),
        ],
        textures: vec![texture.clone()],
    }
}

fn model_scene<'a>(
    ctx: &mut GpuContext<'a>,
    pipeline: &mut RasterPipeline,
    scene: &Scene,
    model: &'a Model,
) {
    clear(&mut ctx.frame, 0.1, 0.15, 0.2, 1.0);
    log::debug!("Camera at {:?}", scene.camera);
    draw_model(ctx, model, &scene.proj, &scene.view, scene.light, pipeline);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_small(method: Method) -> (FrameBuffer, RasterStats) {
        let mut fb = FrameBuffer::new(100, 100);
        let scene = Scene::orbit(4.0, 1.0).expect("orbit camera is valid");
        let texture = TextureData::checkerboard(8, 2, [255; 4], [0, 0, 0, 255]);
        let stats = render(method, &mut fb, &scene, &texture).unwrap();
        (fb, stats)
    }

    #[test]
    fn test_every_method_draws_something() {
        for method in Method::value_variants() {
            let (_, stats) = render_small(*method);
            assert!(stats.fragments_shaded > 0, "{method:?} shaded nothing");
        }
    }

    #[test]
    fn test_triangle_method_covers_lower_left_half() {
        let (fb, _) = render_small(Method::Triangle);
        assert_eq!(fb.color_at(0, 0), [255; 4]);
        assert_eq!(fb.color_at(99, 99), [0, 0, 0, 255]);
    }

    #[test]
    fn test_triangle_buffer_reads_vertex_lane() {
        let (fb, stats) = render_small(Method::TriangleBuffer);
        assert_eq!(stats.triangles_assembled, 4);
        assert_eq!(fb.color_at(26, 26), [0, 255, 0, 255]);
        assert_eq!(fb.color_at(50, 50), [0; 4]);
    }

    #[test]
    fn test_phong_sphere_covers_frame_center() {
        let (fb, stats) = render_small(Method::Phong);
        assert_ne!(fb.color_at(50, 50), [127, 127, 127, 255]);
        assert_eq!(fb.color_at(0, 0), [127, 127, 127, 255]);
        assert_eq!(stats.triangles_culled, 0);
    }

    #[test]
    fn test_clip_methods_split_and_trim() {
        let (_, one) = render_small(Method::TriangleClip1);
        let (_, two) = render_small(Method::TriangleClip2);
        assert_eq!(one.triangles_rasterized, 2);
        assert_eq!(two.triangles_rasterized, 1);
    }
}
