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

use softgpu_core::math::saturate;
use softgpu_core::pipeline::BYTES_PER_PIXEL;
use softgpu_core::{Frame, FAR_DEPTH};

/// Fills every pixel with `(r, g, b, a)` and resets depth to [`FAR_DEPTH`].
///
/// Channels are clamped to `[0, 1]` and scaled to bytes.
pub fn clear(frame: &mut Frame<'_>, r: f32, g: f32, b: f32, a: f32) {
    let texel = [r, g, b, a].map(|c| (saturate(c) * 255.0) as u8);
    for px in frame.color_mut().chunks_exact_mut(BYTES_PER_PIXEL) {
        px.copy_from_slice(&texel);
    }
    frame.depth_mut().fill(FAR_DEPTH);
}

#[cfg(test)]
mod tests {
    use super::*;
    use softgpu_core::FrameBuffer;

    #[test]
    fn test_clear_each_channel() {
        let mut fb = FrameBuffer::new(10, 10);
        for i in 0..4 {
            let mut c = [0.0; 4];
            c[i] = 1.0;
            let mut frame = fb.frame();
            frame.depth_mut().fill(-1337.0);
            clear(&mut frame, c[0], c[1], c[2], c[3]);

            let mut expected = [0u8; 4];
            expected[i] = 255;
            assert!(fb.color().chunks_exact(4).all(|px| px == expected));
            assert!(fb.depth().iter().all(|d| *d == FAR_DEPTH));
        }
    }

    #[test]
    fn test_clear_clamps_channels() {
        let mut fb = FrameBuffer::new(2, 1);
        clear(&mut fb.frame(), 2.0, -1.0, 0.5, 1.0);
        assert_eq!(fb.color_at(1, 0), [255, 0, 127, 255]);
    }
}
