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

//! Render targets: the borrowed [`Frame`] and the owning [`FrameBuffer`].

use super::FrameError;
use crate::math::Extent2D;

/// The depth value written by a clear; farther than any NDC depth.
pub const FAR_DEPTH: f32 = 10e10;

/// Bytes per pixel of the color buffer (RGBA8).
pub const BYTES_PER_PIXEL: usize = 4;

/// A borrowed color + depth render target.
///
/// Pixel `(x, y)` lives at index `y * width + x`; row 0 is the bottom row of
/// window space.
#[derive(Debug, Default)]
pub struct Frame<'a> {
    color: &'a mut [u8],
    depth: &'a mut [f32],
    width: u32,
    height: u32,
}

impl<'a> Frame<'a> {
    /// Wraps caller-owned buffers, checking that their lengths match the size.
    pub fn new(
        color: &'a mut [u8],
        depth: &'a mut [f32],
        width: u32,
        height: u32,
    ) -> Result<Self, FrameError> {
        let pixels = width as usize * height as usize;
        if color.len() != pixels * BYTES_PER_PIXEL {
            return Err(FrameError::ColorBufferSize {
                expected: pixels * BYTES_PER_PIXEL,
                actual: color.len(),
            });
        }
        if depth.len() != pixels {
            return Err(FrameError::DepthBufferSize {
                expected: pixels,
                actual: depth.len(),
            });
        }
        Ok(Self {
            color,
            depth,
            width,
            height,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the frame size.
    #[inline]
    pub fn extent(&self) -> Extent2D {
        Extent2D::new(self.width, self.height)
    }

    /// Returns the linear pixel index of `(x, y)`.
    #[inline]
    pub fn pixel_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// The packed RGBA8 color buffer.
    pub fn color(&self) -> &[u8] {
        &*self.color
    }

    /// The packed RGBA8 color buffer, mutably.
    pub fn color_mut(&mut self) -> &mut [u8] {
        &mut *self.color
    }

    /// The depth buffer.
    pub fn depth(&self) -> &[f32] {
        &*self.depth
    }

    /// The depth buffer, mutably.
    pub fn depth_mut(&mut self) -> &mut [f32] {
        &mut *self.depth
    }

    /// Returns the color of pixel `(x, y)`.
    pub fn color_at(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.pixel_index(x, y) * BYTES_PER_PIXEL;
        let mut out = [0; 4];
        out.copy_from_slice(&self.color[i..i + BYTES_PER_PIXEL]);
        out
    }

    /// Returns the depth of pixel `(x, y)`.
    pub fn depth_at(&self, x: u32, y: u32) -> f32 {
        self.depth[self.pixel_index(x, y)]
    }

    /// Borrows the color bytes and depth value of pixel `(x, y)` together.
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> (&mut [u8], &mut f32) {
        let i = self.pixel_index(x, y);
        (
            &mut self.color[i * BYTES_PER_PIXEL..(i + 1) * BYTES_PER_PIXEL],
            &mut self.depth[i],
        )
    }

    /// Reborrows the frame for a shorter lifetime.
    pub fn reborrow(&mut self) -> Frame<'_> {
        Frame {
            color: &mut *self.color,
            depth: &mut *self.depth,
            width: self.width,
            height: self.height,
        }
    }
}

/// Owned render target storage.
///
/// A new framebuffer is opaque black with every depth at `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    color: Vec<u8>,
    depth: Vec<f32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Allocates a `width` x `height` framebuffer.
    pub fn new(width: u32, height: u32) -> Self {
        let mut fb = Self {
            color: Vec::new(),
            depth: Vec::new(),
            width: 0,
            height: 0,
        };
        fb.resize(width, height);
        fb
    }

    /// Reallocates the storage for a new size and resets its contents.
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("Resizing framebuffer to {width}x{height}");
        let pixels = width as usize * height as usize;
        self.width = width;
        self.height = height;
        self.color.clear();
        self.color.resize(pixels * BYTES_PER_PIXEL, 0);
        for px in self.color.chunks_exact_mut(BYTES_PER_PIXEL) {
            px[3] = 255;
        }
        self.depth.clear();
        self.depth.resize(pixels, 1.0);
    }

    /// Lends the storage as a [`Frame`].
    pub fn frame(&mut self) -> Frame<'_> {
        Frame {
            color: &mut self.color,
            depth: &mut self.depth,
            width: self.width,
            height: self.height,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The packed RGBA8 color buffer, bottom row first.
    pub fn color(&self) -> &[u8] {
        &self.color
    }

    /// The depth buffer, bottom row first.
    pub fn depth(&self) -> &[f32] {
        &self.depth
    }

    /// Returns the color of pixel `(x, y)`.
    pub fn color_at(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        [
            self.color[i],
            self.color[i + 1],
            self.color[i + 2],
            self.color[i + 3],
        ]
    }

    /// Returns the depth of pixel `(x, y)`.
    pub fn depth_at(&self, x: u32, y: u32) -> f32 {
        self.depth[y as usize * self.width as usize + x as usize]
    }

    /// Returns the color buffer with rows reordered top row first, as image
    /// encoders expect.
    pub fn to_rgba_top_down(&self) -> Vec<u8> {
        let row = self.width as usize * BYTES_PER_PIXEL;
        if row == 0 {
            return Vec::new();
        }
        self.color
            .chunks_exact(row)
            .rev()
            .flatten()
            .copied()
            .collect()
    }
}
