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

//! Rendering lane - the hot path of a draw call.
//!
//! Each stage is a free function or iterator that can be driven on its own;
//! [`RasterPipeline`] chains them into the complete draw call.

mod clear;
mod clipping;
mod draw;
mod per_fragment;
mod primitive;
mod rasterizer;
mod stats;
mod vertex_puller;
mod viewport;

pub use clear::*;
pub use clipping::*;
pub use draw::*;
pub use per_fragment::*;
pub use primitive::*;
pub use rasterizer::*;
pub use stats::*;
pub use vertex_puller::*;
pub use viewport::*;
