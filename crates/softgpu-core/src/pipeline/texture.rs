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

//! Borrowed texture views and nearest-texel sampling.

use crate::math::{fract, Vec2, Vec4};

/// A non-owning view over 8-bit texel data.
///
/// Texels are stored row-major, top row first, with `channels` bytes per
/// texel. A texture without data is "unbound" and samples as transparent black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Texture<'a> {
    /// Texel bytes, or `None` for an unbound texture slot.
    pub data: Option<&'a [u8]>,
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
    /// Bytes per texel, 1 to 4.
    pub channels: u32,
}

impl Default for Texture<'_> {
    fn default() -> Self {
        Self {
            data: None,
            width: 0,
            height: 0,
            channels: 3,
        }
    }
}

impl<'a> Texture<'a> {
    /// Creates a bound texture view.
    pub fn new(data: &'a [u8], width: u32, height: u32, channels: u32) -> Self {
        Self {
            data: Some(data),
            width,
            height,
            channels,
        }
    }

    /// Returns `true` if the slot has texel data.
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.data.is_some()
    }

    /// Samples the nearest texel with repeat addressing.
    ///
    /// `uv` wraps through its fractional part and maps onto
    /// `floor(fract(uv) * (size - 1) + 0.5)`. Channels the texture does not
    /// store read as `(0, 0, 0, 1)`. An unbound texture returns `(0, 0, 0, 0)`.
    pub fn sample(&self, uv: Vec2) -> Vec4 {
        let Some(data) = self.data else {
            return Vec4::ZERO;
        };
        if self.width == 0 || self.height == 0 {
            return Vec4::ZERO;
        }

        let px = texel_coord(uv.x, self.width);
        let py = texel_coord(uv.y, self.height);
        let channels = self.channels.min(4) as usize;
        let base = (py as usize * self.width as usize + px as usize) * self.channels as usize;

        let mut color = Vec4::W;
        for c in 0..channels {
            if let Some(&byte) = data.get(base + c) {
                color[c] = f32::from(byte) / 255.0;
            }
        }
        color
    }
}

fn texel_coord(t: f32, size: u32) -> u32 {
    let max = (size - 1) as f32;
    ((fract(t) * max + 0.5) as u32).min(size - 1)
}

/// Owned texel storage that lends [`Texture`] views.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextureData {
    /// Row-major texel bytes.
    pub data: Vec<u8>,
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
    /// Bytes per texel.
    pub channels: u32,
}

impl TextureData {
    /// Wraps existing texel bytes.
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u32) -> Self {
        Self {
            data,
            width,
            height,
            channels,
        }
    }

    /// Builds an RGBA checkerboard of `size`x`size` texels with `cells` squares per side.
    pub fn checkerboard(size: u32, cells: u32, even: [u8; 4], odd: [u8; 4]) -> Self {
        let cell = (size / cells.max(1)).max(1);
        let mut data = Vec::with_capacity(size as usize * size as usize * 4);
        for y in 0..size {
            for x in 0..size {
                let texel = if (x / cell + y / cell) % 2 == 0 { even } else { odd };
                data.extend_from_slice(&texel);
            }
        }
        Self::new(data, size, size, 4)
    }

    /// Borrows the texel data as a bound [`Texture`].
    pub fn view(&self) -> Texture<'_> {
        Texture::new(&self.data, self.width, self.height, self.channels)
    }
}
