use std::{fs::File, io::BufWriter, path::PathBuf};

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use raycaster::{
    render::{
        animation::AnimationRendererBuilder, canvas::ImageFormat, renderer::RendererBuilder,
    },
    scene::presets::{self, Preset},
};

const DEFAULT_WIDTH: usize = 400;
const DEFAULT_HEIGHT: usize = 200;
const DEFAULT_FOV: f64 = std::f64::consts::FRAC_PI_3;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Phong ray caster
/// Renders one of the built-in scenes to ppm, png or gif
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// The scene to render
    #[clap(value_enum, default_value_t = Preset::ThreeSpheres)]
    scene: Preset,

    /// The format of the output image
    #[clap(short = 'f', long, default_value = "png")]
    image_format: ImageFormat,

    /// The output path of the rendered image.
    /// By default it's `./<scene>.<image_format>`
    #[clap(short, long)]
    output_path: Option<PathBuf>,

    /// Width (in pixels) of the output image
    #[clap(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Height (in pixels) of the output image
    #[clap(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Field of view of the camera in radians, defaults to π/3
    #[clap(long, default_value_t = DEFAULT_FOV)]
    fov: f64,

    /// Number of frames. More than one renders an animated gif
    /// with the lights orbiting the scene
    #[clap(long, default_value_t = 1)]
    frames: u32,

    /// Rotation of the lights between frames, as a fraction of π
    #[clap(long, default_value_t = 1. / 12.)]
    rotation_step: f64,

    /// Show a progress bar while rendering
    #[clap(long)]
    progress: bool,

    #[clap(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    if args.frames > 1 && args.image_format != ImageFormat::Gif {
        return Err(format!(
            "Animations can only be saved as gif, got {}",
            args.image_format
        ));
    }

    let world = args
        .scene
        .world()
        .map_err(|e| format!("Failed to build scene: {}", e))?;
    let camera = presets::default_camera(args.width, args.height, args.fov)
        .map_err(|e| format!("Failed to set up camera: {}", e))?;
    let renderer = RendererBuilder::default()
        .camera(camera)
        .world(world)
        .use_progress_bar(args.progress)
        .build()
        .map_err(|e| format!("Failed to set up renderer: {}", e))?;

    let output_path = args
        .output_path
        .unwrap_or_else(|| PathBuf::from(format!("{}.{}", args.scene, args.image_format)));
    let file = File::create(&output_path)
        .map_err(|e| format!("Failed to create {:?}: {}", output_path, e))?;
    let writer = BufWriter::new(file);

    if args.frames > 1 {
        AnimationRendererBuilder::default()
            .renderer(renderer)
            .frame_count(args.frames)
            .rotation_step(args.rotation_step)
            .build()
            .map_err(|e| format!("Failed to set up animation: {}", e))?
            .render_gif(writer)
            .map_err(|e| format!("Failed to save animation: {}", e))?;
    } else {
        renderer
            .render()
            .save_to_file(writer, args.image_format)
            .map_err(|e| format!("Failed to save image: {}", e))?;
    }
    log::info!("Image saved to {:?}", output_path);
    Ok(())
}
