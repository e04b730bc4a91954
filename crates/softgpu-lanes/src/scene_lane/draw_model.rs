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

//! Draws a [`Model`] by walking its node trees.

use super::shaders::*;
use super::{Model, Node};
use crate::render_lane::DrawTriangles;
use softgpu_core::math::{Mat4, Vec3};
use softgpu_core::{AttributeType, GpuContext, Texture, Uniform};

/// Binds the model shaders and issues one draw per mesh-bearing node.
///
/// Trees are visited depth-first in pre-order. A root node is placed by its
/// own matrix, every other node by `parent * node.model_matrix`. For each mesh
/// the position, normal and uv lanes, the index buffer, the model and normal
/// matrices, the diffuse color and the diffuse texture (or the flag saying
/// there is none) are bound before `drawer` is invoked with the mesh's
/// index count.
///
/// Frame contents are left untouched apart from what `drawer` renders.
pub fn draw_model<'a>(
    ctx: &mut GpuContext<'a>,
    model: &'a Model,
    proj: &Mat4,
    view: &Mat4,
    light: Vec3,
    drawer: &mut dyn DrawTriangles,
) {
    ctx.prg.vertex_shader = &ModelVertexShader;
    ctx.prg.fragment_shader = &ModelFragmentShader;
    ctx.prg.vs2fs[SLOT_POSITION] = AttributeType::Vec3;
    ctx.prg.vs2fs[SLOT_NORMAL] = AttributeType::Vec3;
    ctx.prg.vs2fs[SLOT_TEX_COORD] = AttributeType::Vec2;
    ctx.prg.uniforms.values[UNIFORM_VIEW_PROJECTION] = Uniform::Mat4(*proj * *view);
    ctx.prg.uniforms.values[UNIFORM_LIGHT] = Uniform::Vec3(light);

    for root in &model.roots {
        draw_node(ctx, model, root, root.model_matrix, drawer);
    }
}

fn draw_node<'a>(
    ctx: &mut GpuContext<'a>,
    model: &'a Model,
    node: &'a Node,
    transform: Mat4,
    drawer: &mut dyn DrawTriangles,
) {
    if let Some(index) = node.mesh {
        match model.meshes.get(index) {
            Some(mesh) => {
                ctx.vao.attributes[SLOT_POSITION] = mesh.position_attrib();
                ctx.vao.attributes[SLOT_NORMAL] = mesh.normal_attrib();
                ctx.vao.attributes[SLOT_TEX_COORD] = mesh.tex_coord_attrib();
                ctx.vao.indices = mesh.indices.as_ref().map(|i| i.as_buffer());

                let uniforms = &mut ctx.prg.uniforms;
                uniforms.values[UNIFORM_MODEL] = Uniform::Mat4(transform);
                uniforms.values[UNIFORM_NORMAL_MATRIX] = Uniform::Mat4(transform.inverse_transpose());
                uniforms.values[UNIFORM_DIFFUSE_COLOR] = Uniform::Vec4(mesh.diffuse_color);

                let texture = mesh.diffuse_texture.and_then(|t| {
                    let texture = model.textures.get(t);
                    if texture.is_none() {
                        log::warn!("Mesh {index} refers to missing texture {t}");
                    }
                    texture
                });
                match texture {
                    Some(texture) => {
                        uniforms.textures[0] = texture.view();
                        uniforms.values[UNIFORM_HAS_TEXTURE] = Uniform::Float(1.0);
                    }
                    None => {
                        uniforms.textures[0] = Texture::default();
                        uniforms.values[UNIFORM_HAS_TEXTURE] = Uniform::Float(0.0);
                    }
                }

                drawer.draw_triangles(ctx, mesh.index_count);
            }
            None => log::warn!("Node refers to missing mesh {index}"),
        }
    }

    for child in &node.children {
        draw_node(ctx, model, child, transform * child.model_matrix, drawer);
    }
}
