use tracing::error;

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt::init();

    match mandelbrot_explorer::run_gui(mandelbrot_explorer::ExplorerConfig::default()) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "explorer exited with an error");
            std::process::ExitCode::FAILURE
        }
    }
}
