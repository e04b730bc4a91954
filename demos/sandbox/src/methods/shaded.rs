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

//! Methods whose look comes from their fragment shaders: Phong lighting and
//! two procedural flags.

use super::{full_screen_quad_vs, Scene};
use softgpu_core::math::{Vec2, Vec3, Vec4, PI, TAU};
use softgpu_core::{
    AttributeType, GpuContext, InFragment, InVertex, OutFragment, OutVertex, Program, Uniform,
    Uniforms, VertexArray, VertexAttrib,
};
use softgpu_lanes::render_lane::{clear, DrawTriangles, RasterPipeline};
use softgpu_lanes::scene_lane::MeshVertex;

// ─────────────────────────────────────────────────────────────────────────────
// Phong
// ─────────────────────────────────────────────────────────────────────────────

const PHONG_VIEW: usize = 0;
const PHONG_PROJECTION: usize = 1;
const PHONG_LIGHT: usize = 2;
const PHONG_CAMERA: usize = 3;
const SHININESS: f32 = 40.0;
const STRIPES: f32 = 10.0;

/// An indexed UV sphere centered on the origin.
pub(super) struct SphereMesh {
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
}

impl SphereMesh {
    pub(super) fn new(radius: f32, stacks: u32, slices: u32) -> Self {
        let mut vertices = Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);
        for i in 0..=stacks {
            let theta = PI * i as f32 / stacks as f32;
            for j in 0..=slices {
                let phi = TAU * j as f32 / slices as f32;
                let normal = Vec3::new(theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin());
                let uv = Vec2::new(j as f32 / slices as f32, i as f32 / stacks as f32);
                vertices.push(MeshVertex::new(normal * radius, normal, uv));
            }
        }

        let mut indices = Vec::with_capacity((stacks * slices * 6) as usize);
        for i in 0..stacks {
            for j in 0..slices {
                let a = i * (slices + 1) + j;
                let b = a + slices + 1;
                indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
            }
        }
        Self { vertices, indices }
    }
}

fn phong_vs(out: &mut OutVertex, input: &InVertex, uniforms: &Uniforms<'_>) {
    let position = input.attributes[0].as_vec3();
    let mvp = uniforms.values[PHONG_PROJECTION].as_mat4() * uniforms.values[PHONG_VIEW].as_mat4();
    out.position = mvp * position.extend(1.0);
    out.attributes[0] = position.into();
    out.attributes[1] = input.attributes[1].as_vec3().into();
}

/// `-reflect(v, n)`, the mirror of `v` about `n`.
fn mirror(v: Vec3, n: Vec3) -> Vec3 {
    n * (2.0 * n.dot(v)) - v
}

fn phong_fs(out: &mut OutFragment, input: &InFragment, uniforms: &Uniforms<'_>) {
    let light = uniforms.values[PHONG_LIGHT].as_vec3();
    let camera = uniforms.values[PHONG_CAMERA].as_vec3();
    let position = input.attributes[0].as_vec3();
    let normal = input.attributes[1].as_vec3().normalize();

    let l = (light - position).normalize();
    let diffuse = l.dot(normal).max(0.0);
    let v = (camera - position).normalize();
    let specular = mirror(v, normal).dot(l).max(0.0).powf(SHININESS);

    // Snow on upward-facing parts, wavy green and yellow stripes elsewhere.
    let snow = normal.y.max(0.0).powi(2);
    let period = 2.0 / STRIPES;
    let x = position.x + (position.y * 10.0).sin() * 0.1;
    let stripe = if x.rem_euclid(period) / period > 0.5 { 1.0 } else { 0.0 };
    let ground = Vec3::lerp(Vec3::new(0.0, 0.5, 0.0), Vec3::new(1.0, 1.0, 0.0), stripe);
    let material = Vec3::lerp(ground, Vec3::ONE, snow);

    let color = (material * diffuse + Vec3::splat(specular)).map(|c| c.min(1.0));
    out.color = color.extend(1.0);
}

pub(super) fn phong<'a>(
    ctx: &mut GpuContext<'a>,
    pipeline: &mut RasterPipeline,
    scene: &Scene,
    sphere: &'a SphereMesh,
) {
    ctx.vao = VertexArray::default()
        .with_attribute(
            0,
            VertexAttrib::from_slice(&sphere.vertices, MeshVertex::STRIDE, 0, AttributeType::Vec3),
        )
        .with_attribute(
            1,
            VertexAttrib::from_slice(&sphere.vertices, MeshVertex::STRIDE, 12, AttributeType::Vec3),
        )
        .with_indices(&sphere.indices[..]);
    ctx.prg = Program::new(&phong_vs, &phong_fs)
        .with_forwarded(0, AttributeType::Vec3)
        .with_forwarded(1, AttributeType::Vec3);

    let values = &mut ctx.prg.uniforms.values;
    values[PHONG_VIEW] = scene.view.into();
    values[PHONG_PROJECTION] = scene.proj.into();
    values[PHONG_LIGHT] = scene.light.into();
    values[PHONG_CAMERA] = scene.camera.into();

    clear(&mut ctx.frame, 0.5, 0.5, 0.5, 1.0);
    pipeline.draw_triangles(ctx, sphere.indices.len() as u32);
}

// ─────────────────────────────────────────────────────────────────────────────
// Czech flag
// ─────────────────────────────────────────────────────────────────────────────

const FLAG_COLUMNS: u32 = 100;
const FLAG_ROWS: u32 = 10;
const FLAG_MVP: usize = 0;
const FLAG_TIME: usize = 1;

/// A 3x2 grid in the `z = 0` plane. Each vertex packs `(x, y, u, v)`.
pub(super) struct FlagGrid {
    vertices: Vec<Vec4>,
    indices: Vec<u32>,
}

impl FlagGrid {
    pub(super) fn new() -> Self {
        let start = Vec2::new(-1.5, -1.0);
        let size = Vec2::new(3.0, 2.0);

        let mut vertices = Vec::with_capacity((FLAG_COLUMNS * FLAG_ROWS) as usize);
        for y in 0..FLAG_ROWS {
            for x in 0..FLAG_COLUMNS {
                let coord = Vec2::new(
                    x as f32 / (FLAG_COLUMNS - 1) as f32,
                    y as f32 / (FLAG_ROWS - 1) as f32,
                );
                let position = start + coord * size;
                vertices.push(Vec4::new(position.x, position.y, coord.x, coord.y));
            }
        }

        let mut indices = Vec::with_capacity(((FLAG_COLUMNS - 1) * (FLAG_ROWS - 1) * 6) as usize);
        for y in 0..FLAG_ROWS - 1 {
            for x in 0..FLAG_COLUMNS - 1 {
                let corner = |dx, dy| (y + dy) * FLAG_COLUMNS + x + dx;
                indices.extend_from_slice(&[
                    corner(0, 0),
                    corner(1, 0),
                    corner(0, 1),
                    corner(0, 1),
                    corner(1, 0),
                    corner(1, 1),
                ]);
            }
        }
        Self { vertices, indices }
    }
}

fn cz_flag_vs(out: &mut OutVertex, input: &InVertex, uniforms: &Uniforms<'_>) {
    let position = input.attributes[0].as_vec2();
    let coord = input.attributes[1].as_vec2();
    let time = uniforms.values[FLAG_TIME].as_float();

    let z = coord.x * 0.5 * (coord.x * 10.0 + time).sin();
    out.position = uniforms.values[FLAG_MVP].as_mat4() * Vec4::new(position.x, position.y, z, 1.0);
    out.attributes[0] = coord.into();
}

fn cz_flag_fs(out: &mut OutFragment, input: &InFragment, _: &Uniforms<'_>) {
    let coord = input.attributes[0].as_vec2();
    out.color = if coord.y > coord.x && 1.0 - coord.y > coord.x {
        Vec4::new(0.0, 0.0, 1.0, 1.0)
    } else if coord.y < 0.5 {
        Vec4::new(1.0, 0.0, 0.0, 1.0)
    } else {
        Vec4::ONE
    };
}

pub(super) fn cz_flag<'a>(
    ctx: &mut GpuContext<'a>,
    pipeline: &mut RasterPipeline,
    scene: &Scene,
    flag: &'a FlagGrid,
) {
    let stride = std::mem::size_of::<Vec4>();
    ctx.vao = VertexArray::default()
        .with_attribute(0, VertexAttrib::from_slice(&flag.vertices, stride, 0, AttributeType::Vec2))
        .with_attribute(1, VertexAttrib::from_slice(&flag.vertices, stride, 8, AttributeType::Vec2))
        .with_indices(&flag.indices[..]);
    ctx.prg = Program::new(&cz_flag_vs, &cz_flag_fs).with_forwarded(0, AttributeType::Vec2);
    ctx.prg.uniforms.values[FLAG_MVP] = (scene.proj * scene.view).into();
    ctx.prg.uniforms.values[FLAG_TIME] = Uniform::Float(scene.time);

    clear(&mut ctx.frame, 0.0, 0.0, 0.0, 1.0);
    pipeline.draw_triangles(ctx, flag.indices.len() as u32);
}

// ─────────────────────────────────────────────────────────────────────────────
// South Korean flag
// ─────────────────────────────────────────────────────────────────────────────

const FLAG_RESOLUTION: usize = 0;
const TAEGUK_RED: Vec3 = Vec3::new(205.0 / 255.0, 46.0 / 255.0, 58.0 / 255.0);
const TAEGUK_BLUE: Vec3 = Vec3::new(0.0, 71.0 / 255.0, 160.0 / 255.0);

fn step(condition: bool) -> f32 {
    if condition {
        1.0
    } else {
        0.0
    }
}

/// Color of the 3:2 flag at `frag_coord`, scaled to the frame width.
///
/// Returns `None` below the flag when the frame is taller than 3:2.
fn south_korean_flag(frag_coord: Vec2, resolution: Vec2) -> Option<Vec4> {
    let size = Vec2::new(3.0, 2.0);
    let aspect = resolution.x / resolution.y;
    let uv = Vec2::new(
        frag_coord.x / resolution.x * size.x,
        frag_coord.y / resolution.y * size.x / aspect,
    );
    if uv.x > size.x || uv.y > size.y {
        return None;
    }

    let c = size * 0.5;
    let len = c.length();
    let diag = [
        Vec3::new(-c.y, -c.x, c.x * c.y + c.y * c.x) / len,
        Vec3::new(-c.y, c.x, c.x * c.y - c.y * c.x) / len,
        Vec3::new(c.x, -c.y, -c.x * c.x + c.y * c.y) / len,
        Vec3::new(c.x, c.y, -c.x * c.x - c.y * c.y) / len,
    ];
    let p = Vec3::new(uv.x, uv.y, 1.0);
    let dist = diag.map(|d| d.dot(p) * 48.0);

    let offset = (uv - c) * 48.0;
    let axis = Vec2::new(diag[2].x, diag[2].y) * 12.0;
    let top_right = step(dist[0] < 0.0);
    let circle = step(offset.length() < 24.0);
    let small = step((offset - axis).length() < 12.0);
    let small2 = step((offset + axis).length() < 12.0);

    let red = (top_right - small + small2).clamp(0.0, 1.0);
    let mut color = (TAEGUK_BLUE * (1.0 - red) + TAEGUK_RED * red) * circle + Vec3::splat(1.0 - circle);

    // Trigram bars: solid or broken stripes along both diagonals.
    let mut bars = 0.0;
    for i in 0..2 {
        let strip = step((dist[2 + i].abs() - 44.0).abs() < 8.0 && dist[i].abs() < 12.0);
        let solid = step(((dist[2 + i].abs() / 2.0).floor() as u32 + 1) % 3 > 0);
        bars += strip * solid;
    }
    color = color * (1.0 - bars.clamp(0.0, 1.0));

    // Gaps that break the bars.
    let gaps = [
        dist[0].abs() > 1.0 || dist[2] < 36.0,
        dist[1].abs() > 1.0 || (dist[3] + 44.0).abs() > 2.0,
        dist[1].abs() > 1.0 || ((dist[3] - 44.0).abs() - 6.0).abs() > 2.0,
    ];
    for outside in gaps {
        color += Vec3::splat(1.0 - step(outside));
    }

    Some(color.extend(1.0))
}

fn sk_flag_fs(out: &mut OutFragment, input: &InFragment, uniforms: &Uniforms<'_>) {
    out.color = uniforms.textures[0].sample(input.attributes[0].as_vec2());
    let resolution = uniforms.values[FLAG_RESOLUTION].as_vec2();
    if let Some(color) = south_korean_flag(input.frag_coord.xy(), resolution) {
        out.color = color;
    }
}

pub(super) fn sk_flag(ctx: &mut GpuContext<'_>, pipeline: &mut RasterPipeline) {
    ctx.prg = Program::new(&full_screen_quad_vs, &sk_flag_fs).with_forwarded(0, AttributeType::Vec2);
    let resolution = Vec2::new(ctx.frame.width() as f32, ctx.frame.height() as f32);
    ctx.prg.uniforms.values[FLAG_RESOLUTION] = resolution.into();

    clear(&mut ctx.frame, 0.0, 0.0, 0.0, 0.0);
    pipeline.draw_triangles(ctx, 6);
}
