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

use thiserror::Error;

/// Errors raised while decoding an asset.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The bytes could not be decoded as an image.
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    /// The decoded image has no texels.
    #[error("Image has zero size ({width}x{height})")]
    EmptyImage {
        /// Decoded width.
        width: u32,
        /// Decoded height.
        height: u32,
    },
}

/// A trait for types that can load a specific kind of asset from a byte slice.
///
/// Implementors do the CPU-side parsing and decoding work; reading the bytes
/// from disk or elsewhere is left to the caller.
pub trait AssetLoaderLane<A> {
    /// Parses a byte slice and converts it into an instance of the asset `A`.
    fn load(&self, bytes: &[u8]) -> Result<A, AssetError>;
}
