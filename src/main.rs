use std::path::PathBuf;

use clap::Parser;
use mandelbrot_explorer::{
    ExplorerConfig, FrameOutcome, InteractiveExplorer, PpmFilePresenter, ViewportGeometry,
    load_config_or_default, save_config,
};
use tracing::{info, warn};

/// Renders a single Mandelbrot frame to a binary PPM file.
#[derive(Debug, Parser)]
#[command(name = "mandelbrot_explorer", version, about)]
struct Args {
    /// JSON config file; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,

    /// Image width, overriding the configured window width
    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    #[arg(long, allow_negative_numbers = true)]
    center_x: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    center_y: Option<f64>,

    #[arg(long)]
    scale: Option<f64>,

    #[arg(long)]
    max_iterations: Option<i32>,

    #[arg(long)]
    hue_cycle: Option<i32>,

    #[arg(long)]
    hue_shift_percent: Option<f64>,

    #[arg(long)]
    supersampling: Option<u32>,

    /// Writes the effective config here after rendering
    #[arg(long)]
    write_config: Option<PathBuf>,
}

impl Args {
    fn apply_overrides(&self, config: &mut ExplorerConfig) {
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        if let Some(x) = self.center_x {
            config.view.center[0] = x;
        }
        if let Some(y) = self.center_y {
            config.view.center[1] = y;
        }
        if let Some(scale) = self.scale {
            config.view.scale = scale;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.colour.set_max_iterations(max_iterations);
        }
        if let Some(hue_cycle) = self.hue_cycle {
            config.colour.set_hue_cycle(hue_cycle);
        }
        if let Some(hue_shift_percent) = self.hue_shift_percent {
            config.colour.set_hue_shift_percent(hue_shift_percent);
        }
        if let Some(supersampling) = self.supersampling {
            config.render.supersampling = supersampling;
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config_or_default(args.config.as_deref())?;
    args.apply_overrides(&mut config);
    config.validate()?;

    let viewport = ViewportGeometry::new(
        f64::from(config.window.width),
        f64::from(config.window.height),
    );
    let mut explorer = InteractiveExplorer::new(&config, viewport);
    let mut presenter = PpmFilePresenter::new(&args.output);

    match explorer.step(&mut presenter)? {
        FrameOutcome::Presented { .. } => info!(
            path = %args.output.display(),
            cost_ms = explorer.last_frame_cost_ms(),
            "render complete"
        ),
        outcome => warn!(?outcome, "no frame was rendered"),
    }

    if let Some(path) = &args.write_config {
        save_config(&config, path)?;
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    run(&Args::parse())
}
