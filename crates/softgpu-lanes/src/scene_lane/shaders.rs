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

//! Shaders used to draw models: world-space transform and Lambert lighting.

use softgpu_core::math::{Vec3, Vec4};
use softgpu_core::{
    Attribute, FragmentShader, InFragment, InVertex, OutFragment, OutVertex, Uniforms,
    VertexShader,
};

/// Uniform slot of the combined `projection * view` matrix.
pub const UNIFORM_VIEW_PROJECTION: usize = 0;
/// Uniform slot of the accumulated model matrix.
pub const UNIFORM_MODEL: usize = 1;
/// Uniform slot of the inverse-transpose of the model matrix.
pub const UNIFORM_NORMAL_MATRIX: usize = 2;
/// Uniform slot of the world-space light position.
pub const UNIFORM_LIGHT: usize = 3;
/// Uniform slot of the diffuse color used without a texture.
pub const UNIFORM_DIFFUSE_COLOR: usize = 5;
/// Uniform slot of the texture flag: `1.0` samples texture 0, `0.0` does not.
pub const UNIFORM_HAS_TEXTURE: usize = 6;

/// Attribute slot of positions (vertex input) and world positions (vertex output).
pub const SLOT_POSITION: usize = 0;
/// Attribute slot of normals.
pub const SLOT_NORMAL: usize = 1;
/// Attribute slot of texture coordinates.
pub const SLOT_TEX_COORD: usize = 2;

/// Fraction of the diffuse color that is always visible.
const AMBIENT: f32 = 0.2;

/// Transforms a model vertex to clip space and forwards its world-space
/// position, world-space normal and texture coordinate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelVertexShader;

impl VertexShader for ModelVertexShader {
    fn run(&self, out: &mut OutVertex, input: &InVertex, uniforms: &Uniforms<'_>) {
        let view_projection = uniforms.values[UNIFORM_VIEW_PROJECTION].as_mat4();
        let model = uniforms.values[UNIFORM_MODEL].as_mat4();
        let normal_matrix = uniforms.values[UNIFORM_NORMAL_MATRIX].as_mat4();

        let position = input.attributes[SLOT_POSITION].as_vec3();
        let normal = input.attributes[SLOT_NORMAL].as_vec3();
        let world = model * position.extend(1.0);

        out.position = view_projection * world;
        out.attributes[SLOT_POSITION] = Attribute::Vec3(world.truncate());
        out.attributes[SLOT_NORMAL] = Attribute::Vec3((normal_matrix * normal.extend(0.0)).truncate());
        out.attributes[SLOT_TEX_COORD] = Attribute::Vec2(input.attributes[SLOT_TEX_COORD].as_vec2());
    }
}

/// Lambert shading with a constant ambient term.
///
/// The diffuse color comes from texture 0 when the texture flag is set and
/// from the diffuse color uniform otherwise; alpha is passed through.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelFragmentShader;

impl FragmentShader for ModelFragmentShader {
    fn run(&self, out: &mut OutFragment, input: &InFragment, uniforms: &Uniforms<'_>) {
        let position = input.attributes[SLOT_POSITION].as_vec3();
        let normal = input.attributes[SLOT_NORMAL].as_vec3().normalize();
        let light = uniforms.values[UNIFORM_LIGHT].as_vec3();

        let diffuse = if uniforms.values[UNIFORM_HAS_TEXTURE].as_float() > 0.0 {
            uniforms.textures[0].sample(input.attributes[SLOT_TEX_COORD].as_vec2())
        } else {
            uniforms.values[UNIFORM_DIFFUSE_COLOR].as_vec4()
        };

        let to_light = (light - position).normalize();
        let lambert = to_light.dot(normal).max(0.0);
        let rgb: Vec3 = diffuse.truncate() * AMBIENT + diffuse.truncate() * lambert;
        out.color = Vec4::new(rgb.x, rgb.y, rgb.z, diffuse.w);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use softgpu_core::math::{Mat4, Vec2};
    use softgpu_core::{Texture, Uniform};

    #[test]
    fn test_vertex_shader_outputs_world_space() {
        let mut uniforms = Uniforms::default();
        let model = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0)) * Mat4::from_scale(Vec3::splat(2.0));
        uniforms.values[UNIFORM_VIEW_PROJECTION] = Uniform::Mat4(Mat4::from_scale(Vec3::splat(0.5)));
        uniforms.values[UNIFORM_MODEL] = Uniform::Mat4(model);
        uniforms.values[UNIFORM_NORMAL_MATRIX] = Uniform::Mat4(model.inverse_transpose());

        let mut input = InVertex::default();
        input.attributes[SLOT_POSITION] = Attribute::Vec3(Vec3::new(1.0, 1.0, 1.0));
        input.attributes[SLOT_NORMAL] = Attribute::Vec3(Vec3::Y);
        input.attributes[SLOT_TEX_COORD] = Attribute::Vec2(Vec2::new(0.25, 0.75));

        let mut out = OutVertex::default();
        ModelVertexShader.run(&mut out, &input, &uniforms);

        assert_eq!(out.attributes[SLOT_POSITION].as_vec3(), Vec3::new(3.0, 2.0, 2.0));
        assert_eq!(out.position, Vec4::new(1.5, 1.0, 1.0, 1.0));
        let n = out.attributes[SLOT_NORMAL].as_vec3();
        assert_relative_eq!(n.y, 0.5, epsilon = 1e-6);
        assert_relative_eq!(n.x, 0.0, epsilon = 1e-6);
        assert_eq!(out.attributes[SLOT_TEX_COORD], Attribute::Vec2(Vec2::new(0.25, 0.75)));
    }

    fn lit_fragment<'a>(light: Vec3) -> (InFragment, Uniforms<'a>) {
        let mut input = InFragment::default();
        input.attributes[SLOT_POSITION] = Attribute::Vec3(Vec3::ZERO);
        input.attributes[SLOT_NORMAL] = Attribute::Vec3(Vec3::new(0.0, 0.0, 3.0));
        let mut uniforms = Uniforms::default();
        uniforms.values[UNIFORM_LIGHT] = Uniform::Vec3(light);
        uniforms.values[UNIFORM_DIFFUSE_COLOR] = Uniform::Vec4(Vec4::new(1.0, 0.5, 0.0, 0.75));
        uniforms.values[UNIFORM_HAS_TEXTURE] = Uniform::Float(0.0);
        (input, uniforms)
    }

    #[test]
    fn test_fragment_shader_lambert() {
        let (input, uniforms) = lit_fragment(Vec3::new(0.0, 0.0, 10.0));
        let mut out = OutFragment::default();
        ModelFragmentShader.run(&mut out, &input, &uniforms);
        assert_relative_eq!(out.color.x, 1.2);
        assert_relative_eq!(out.color.y, 0.6);
        assert_relative_eq!(out.color.z, 0.0);
        assert_relative_eq!(out.color.w, 0.75);
    }

    #[test]
    fn test_fragment_shader_light_behind_is_ambient_only() {
        let (input, uniforms) = lit_fragment(Vec3::new(0.0, 0.0, -10.0));
        let mut out = OutFragment::default();
        ModelFragmentShader.run(&mut out, &input, &uniforms);
        assert_relative_eq!(out.color.x, 0.2);
        assert_relative_eq!(out.color.y, 0.1);
    }

    #[test]
    fn test_fragment_shader_samples_texture_when_flagged() {
        let texels = [0u8, 255, 0, 255];
        let (input, mut uniforms) = lit_fragment(Vec3::new(0.0, 0.0, 10.0));
        uniforms.values[UNIFORM_HAS_TEXTURE] = Uniform::Float(1.0);
        uniforms.textures[0] = Texture::new(&texels, 1, 1, 4);

        let mut out = OutFragment::default();
        ModelFragmentShader.run(&mut out, &input, &uniforms);
        assert_relative_eq!(out.color.x, 0.0);
        assert_relative_eq!(out.color.y, 1.2);
        assert_relative_eq!(out.color.w, 1.0);
    }
}
