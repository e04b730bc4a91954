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

//! Texture loading.

use super::super::{AssetError, AssetLoaderLane};
use softgpu_core::TextureData;

/// A lane dedicated to decoding image files into RGBA8 [`TextureData`].
///
/// Any format enabled on the `image` dependency is accepted. Rows are kept
/// top row first, matching the texture sampling convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextureLoaderLane;

impl AssetLoaderLane<TextureData> for TextureLoaderLane {
    fn load(&self, bytes: &[u8]) -> Result<TextureData, AssetError> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(AssetError::EmptyImage { width, height });
        }
        log::debug!("Decoded {width}x{height} texture ({} bytes)", bytes.len());
        Ok(TextureData::new(rgba.into_raw(), width, height, 4))
    }
}
