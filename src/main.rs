use mandelbrot_explorer::{ExplorerConfig, render_snapshot};

const SNAPSHOT_PATH: &str = "output/mandelbrot.pgm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    render_snapshot(ExplorerConfig::default(), SNAPSHOT_PATH)?;

    Ok(())
}
