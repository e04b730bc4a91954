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

//! Errors raised when wrapping caller-provided buffers.

use std::fmt;

/// An error returned by [`Frame::new`](super::Frame::new) when the provided
/// buffers do not match the requested dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// The color buffer does not hold exactly `width * height * 4` bytes.
    ColorBufferSize {
        /// The required length in bytes.
        expected: usize,
        /// The length that was provided.
        actual: usize,
    },
    /// The depth buffer does not hold exactly `width * height` values.
    DepthBufferSize {
        /// The required number of depth values.
        expected: usize,
        /// The number of values that was provided.
        actual: usize,
    },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::ColorBufferSize { expected, actual } => {
                write!(
                    f,
                    "Color buffer holds {actual} bytes, but the frame requires {expected}"
                )
            }
            FrameError::DepthBufferSize { expected, actual } => {
                write!(
                    f,
                    "Depth buffer holds {actual} values, but the frame requires {expected}"
                )
            }
        }
    }
}

impl std::error::Error for FrameError {}
