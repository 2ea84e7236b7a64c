use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "gui", about = "Interactive Mandelbrot explorer")]
struct Args {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = mandelbrot_explorer::load_config_or_default(args.config.as_deref())?;
    let command =
        mandelbrot_explorer::RunGuiCommand::new(mandelbrot_explorer::PixelsPresenterFactory::new(), config);

    command.execute()?;
    Ok(())
}
