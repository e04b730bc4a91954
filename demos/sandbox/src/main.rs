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

//! Headless sandbox: renders one demo method into a frame buffer and saves
//! it as an image.

mod methods;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use methods::{Method, Scene};
use softgpu_core::{FrameBuffer, TextureData};
use softgpu_lanes::asset_lane::{AssetLoaderLane, TextureLoaderLane};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "sandbox", about = "Render a demo scene with the software rasterizer")]
struct Args {
    /// Rendering method to run.
    #[arg(short, long, value_enum, default_value_t = Method::Triangle)]
    method: Method,

    /// Frame width in pixels.
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Frame height in pixels.
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Where to write the rendered frame. The format follows the extension.
    #[arg(short, long, default_value = "frame.png")]
    output: PathBuf,

    /// Image used by the textured methods; a checkerboard when omitted.
    #[arg(short, long)]
    texture: Option<PathBuf>,

    /// Distance of the orbit camera from the origin.
    #[arg(long, default_value_t = 4.0)]
    distance: f32,

    /// Animation time in seconds, for animated methods.
    #[arg(long, default_value_t = 0.0)]
    time: f32,

    /// Print the available methods and exit.
    #[arg(long)]
    list: bool,
}

fn load_texture(path: Option<&Path>) -> Result<TextureData> {
    let Some(path) = path else {
        return Ok(TextureData::checkerboard(256, 8, [230, 230, 230, 255], [40, 90, 160, 255]));
    };
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read texture {}", path.display()))?;
    TextureLoaderLane
        .load(&bytes)
        .with_context(|| format!("Failed to decode texture {}", path.display()))
}

fn print_methods() {
    println!("Available methods:");
    for method in Method::value_variants() {
        if let Some(value) = method.to_possible_value() {
            match value.get_help() {
                Some(help) => println!("  {:<16} {help}", value.get_name()),
                None => println!("  {}", value.get_name()),
            }
        }
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.list {
        print_methods();
        return Ok(());
    }

    let texture = load_texture(args.texture.as_deref())?;
    let aspect = args.width as f32 / args.height as f32;
    let mut scene = Scene::orbit(args.distance, aspect).context("Invalid camera setup")?;
    scene.time = args.time;

    let mut fb = FrameBuffer::new(args.width, args.height);
    log::info!(
        "Rendering '{:?}' at {}x{}",
        args.method,
        args.width,
        args.height
    );
    let stats = methods::render(args.method, &mut fb, &scene, &texture)?;
    log::info!("{stats}");

    let image = image::RgbaImage::from_raw(fb.width(), fb.height(), fb.to_rgba_top_down())
        .context("Frame buffer does not match its dimensions")?;
    image
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Saved frame to {}", args.output.display());

    Ok(())
}
