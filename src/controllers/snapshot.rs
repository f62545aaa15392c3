use std::path::Path;

use tracing::info;

use crate::controllers::interactive::{ExplorerConfig, ExplorerSession, SessionError};
use crate::presenters::file::pgm::PgmFilePresenter;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders the configured initial view once and writes it as a PGM file.
pub fn render_snapshot(
    config: ExplorerConfig,
    filepath: impl AsRef<Path>,
) -> Result<(), SnapshotError> {
    let (width, height) = (config.window_width, config.window_height);
    let mut session = ExplorerSession::new(config)?;
    let frame = session.frame(width, height)?;

    PgmFilePresenter::new().present_to_file(frame.raster, &filepath)?;

    info!(
        path = %filepath.as_ref().display(),
        width,
        height,
        "snapshot written"
    );

    Ok(())
}
