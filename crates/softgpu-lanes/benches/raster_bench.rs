use criterion::{criterion_group, criterion_main, Criterion};
use softgpu_core::math::{degrees_to_radians, Mat4, Vec3, Vec4};
use softgpu_core::{FrameBuffer, GpuContext, InVertex, OutVertex, Program, Uniforms};
use softgpu_lanes::render_lane::{clear, DrawTriangles, RasterPipeline};
use softgpu_lanes::scene_lane::{draw_model, Mesh, Model, Node};
use std::hint::black_box;

const FULL_SCREEN: [Vec4; 3] = [
    Vec4::new(-1.0, -1.0, 0.0, 1.0),
    Vec4::new(3.0, -1.0, 0.0, 1.0),
    Vec4::new(-1.0, 3.0, 0.0, 1.0),
];

fn full_screen_vs(out: &mut OutVertex, input: &InVertex, _: &Uniforms<'_>) {
    out.position = FULL_SCREEN[input.vertex_id as usize % 3];
}

fn white_fs(out: &mut softgpu_core::OutFragment, _: &softgpu_core::InFragment, _: &Uniforms<'_>) {
    out.color = Vec4::ONE;
}

fn bench_raster(c: &mut Criterion) {
    let mut fb = FrameBuffer::new(512, 512);
    let mut pipeline = RasterPipeline::new();

    let mut group = c.benchmark_group("Rasterization");

    group.bench_function("Clear 512x512", |b| {
        b.iter(|| clear(&mut fb.frame(), 0.1, 0.2, 0.3, 1.0));
    });

    group.bench_function("Full-screen triangle 512x512", |b| {
        b.iter(|| {
            let mut ctx = GpuContext::new(fb.frame());
            ctx.prg = Program::new(&full_screen_vs, &white_fs);
            clear(&mut ctx.frame, 0.0, 0.0, 0.0, 1.0);
            pipeline.draw_triangles(&mut ctx, black_box(3));
        });
    });

    // 4x4x4 cubes, 768 triangles per frame.
    let mut model = Model {
        meshes: vec![Mesh::cube(0.3).with_diffuse_color(Vec4::new(0.8, 0.3, 0.2, 1.0))],
        ..Model::default()
    };
    for i in 0..64 {
        let offset = Vec3::new((i % 4) as f32, ((i / 4) % 4) as f32, (i / 16) as f32) - Vec3::splat(1.5);
        model
            .roots
            .push(Node::new(Mat4::from_translation(offset)).with_mesh(0));
    }
    let eye = Vec3::new(4.0, 3.0, 6.0);
    let proj = Mat4::perspective_rh_no(degrees_to_radians(60.0), 1.0, 0.1, 100.0);
    let Some(view) = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y) else {
        return;
    };

    group.bench_function("Cube grid 512x512", |b| {
        b.iter(|| {
            let mut ctx = GpuContext::new(fb.frame());
            clear(&mut ctx.frame, 0.0, 0.0, 0.0, 1.0);
            draw_model(&mut ctx, &model, &proj, &view, eye, &mut pipeline);
            black_box(pipeline.last_stats());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_raster);
criterion_main!(benches);
