use chrono::{Datelike, Timelike};
use clap::{Parser, ValueEnum};
use glint::{
    accel::{AcceleratorType, DEFAULT_DENSITY},
    camera::Camera,
    expect, glint_info,
    integrators::Whitted,
    renderer::{RenderResult, Renderer},
    scene::Scene,
    settings::RenderSettings,
};

use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum AcceleratorArg {
    Linear,
    VoxelGrid,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum LevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LevelArg> for log::LevelFilter {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Off => log::LevelFilter::Off,
            LevelArg::Error => log::LevelFilter::Error,
            LevelArg::Warn => log::LevelFilter::Warn,
            LevelArg::Info => log::LevelFilter::Info,
            LevelArg::Debug => log::LevelFilter::Debug,
            LevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Whitted-style ray tracer
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Scene xml file
    scene: PathBuf,

    /// Render settings yaml file
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Output png, defaults to a timestamped file in the working directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LevelArg::Info)]
    log_level: LevelArg,

    /// Overrides the accelerator of the settings file
    #[arg(long, value_enum)]
    accelerator: Option<AcceleratorArg>,
}

fn setup_logger(level: log::LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("glint.log")?)
        .apply()?;
    Ok(())
}

fn png_path(scene: &Scene) -> PathBuf {
    let now = chrono::Local::now();
    let timestamp = format!(
        "{:04}{:02}{:02}_{:02}{:02}{:02}",
        now.year(),
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    );
    PathBuf::from(format!("{}_{}.png", scene.name, timestamp))
}

fn main() {
    let args = Args::parse();

    if let Err(why) = setup_logger(args.log_level.into()) {
        panic!("{}", why);
    };

    let mut settings = match &args.settings {
        Some(path) => expect!(RenderSettings::load(path), "Loading settings failed"),
        None => RenderSettings::default(),
    };
    match args.accelerator {
        Some(AcceleratorArg::Linear) => settings.accelerator = AcceleratorType::Linear,
        Some(AcceleratorArg::VoxelGrid) => {
            if !matches!(settings.accelerator, AcceleratorType::VoxelGrid { .. }) {
                settings.accelerator = AcceleratorType::VoxelGrid {
                    density: DEFAULT_DENSITY,
                };
            }
        }
        None => (),
    }

    let (scene, _) = expect!(
        Scene::load(&args.scene, settings.accelerator),
        "Scene loading failed"
    );
    glint_info!(
        "Scene '{}': {} geometries, {} lights",
        scene.name,
        scene.geometries().len(),
        scene.lights.len()
    );

    let camera = expect!(
        Camera::new(settings.camera, settings.resolution),
        "Invalid camera"
    );
    let renderer = Renderer::new(Whitted::new(settings.max_level), settings.thread_count());
    let RenderResult { film, .. } =
        expect!(renderer.render(&scene, &camera), "Render failed");

    let output = args.output.unwrap_or_else(|| png_path(&scene));
    expect!(film.write_png(&output), "Writing output failed");
}
