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

//! Depth test and blending.

use softgpu_core::math::{saturate, Vec4};
use softgpu_core::Frame;

/// What [`per_fragment`] did with a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentOutcome {
    /// Passed the depth test; color blended and depth written.
    Written,
    /// Passed the depth test; color blended, depth kept because alpha <= 0.5.
    ColorOnly,
    /// Failed the depth test; nothing was written.
    DepthFailed,
    /// The fragment lies outside of the frame.
    OutOfBounds,
}

impl FragmentOutcome {
    /// Returns `true` if the fragment passed the depth test.
    pub fn passed(self) -> bool {
        matches!(self, FragmentOutcome::Written | FragmentOutcome::ColorOnly)
    }
}

/// Applies the depth test and "over" blending for one shaded fragment.
///
/// The fragment passes if its depth (`frag_coord.z`) is strictly less than
/// the stored depth. On pass the stored color becomes
/// `clamp(color * a + stored * (1 - a), 0, 1)` per RGB channel, with alpha
/// accumulating as `a + stored_a * (1 - a)`. The stored depth is replaced
/// only when `a > 0.5`.
pub fn per_fragment(frame: &mut Frame<'_>, frag_coord: Vec4, color: Vec4) -> FragmentOutcome {
    if frag_coord.x < 0.0 || frag_coord.y < 0.0 {
        return FragmentOutcome::OutOfBounds;
    }
    let (x, y) = (frag_coord.x as u32, frag_coord.y as u32);
    if x >= frame.width() || y >= frame.height() {
        return FragmentOutcome::OutOfBounds;
    }

    let (stored_color, stored_depth) = frame.pixel_mut(x, y);
    let passed = frag_coord.z < *stored_depth;
    if !passed {
        return FragmentOutcome::DepthFailed;
    }

    let a = color.w;
    for (c, stored) in stored_color.iter_mut().take(3).enumerate() {
        let dst = f32::from(*stored) / 255.0;
        *stored = (saturate(color[c] * a + dst * (1.0 - a)) * 255.0) as u8;
    }
    let dst_a = f32::from(stored_color[3]) / 255.0;
    stored_color[3] = (saturate(a + dst_a * (1.0 - a)) * 255.0) as u8;

    if a > 0.5 {
        *stored_depth = frag_coord.z;
        FragmentOutcome::Written
    } else {
        FragmentOutcome::ColorOnly
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use softgpu_core::FrameBuffer;

    fn at(x: f32, y: f32, depth: f32) -> Vec4 {
        Vec4::new(x + 0.5, y + 0.5, depth, 1.0)
    }

    #[test]
    fn test_opaque_fragment_writes_color_and_depth() {
        let mut fb = FrameBuffer::new(4, 4);
        let mut frame = fb.frame();
        let outcome = per_fragment(&mut frame, at(1.0, 2.0, 0.25), Vec4::new(1.0, 0.5, 0.0, 1.0));
        assert_eq!(outcome, FragmentOutcome::Written);
        assert_eq!(fb.color_at(1, 2), [255, 127, 0, 255]);
        assert_eq!(fb.depth_at(1, 2), 0.25);
    }

    #[test]
    fn test_depth_test_is_strict() {
        let mut fb = FrameBuffer::new(2, 2);
        let mut frame = fb.frame();
        let white = Vec4::ONE;
        assert!(per_fragment(&mut frame, at(0.0, 0.0, 0.5), white).passed());
        assert_eq!(
            per_fragment(&mut frame, at(0.0, 0.0, 0.5), Vec4::new(0.0, 0.0, 0.0, 1.0)),
            FragmentOutcome::DepthFailed
        );
        assert_eq!(fb.color_at(0, 0), [255, 255, 255, 255]);
    }

    #[test]
    fn test_translucent_fragment_blends_without_depth() {
        let mut fb = FrameBuffer::new(2, 2);
        let mut frame = fb.frame();
        let outcome = per_fragment(&mut frame, at(1.0, 1.0, 0.0), Vec4::new(1.0, 1.0, 1.0, 0.5));
        assert_eq!(outcome, FragmentOutcome::ColorOnly);
        assert_eq!(fb.depth_at(1, 1), 1.0);
        assert_eq!(fb.color_at(1, 1), [127, 127, 127, 255]);
    }

    #[test]
    fn test_blend_is_clamped() {
        let mut fb = FrameBuffer::new(1, 1);
        let mut frame = fb.frame();
        per_fragment(&mut frame, at(0.0, 0.0, 0.0), Vec4::new(4.0, -1.0, 0.5, 1.0));
        assert_eq!(fb.color_at(0, 0), [255, 0, 127, 255]);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut fb = FrameBuffer::new(2, 2);
        let mut frame = fb.frame();
        assert_eq!(
            per_fragment(&mut frame, at(2.0, 0.0, 0.0), Vec4::ONE),
            FragmentOutcome::OutOfBounds
        );
        assert_eq!(
            per_fragment(&mut frame, Vec4::new(-0.5, 0.5, 0.0, 1.0), Vec4::ONE),
            FragmentOutcome::OutOfBounds
        );
    }
}
