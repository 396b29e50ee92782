//! `docpad export` command implementation.

use std::path::PathBuf;

use clap::Args;
use docpad_viewer::ViewerError;

use super::{CommonArgs, open_controller};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Output file (default: ./documentation.json).
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) common: CommonArgs,
}

impl ExportArgs {
    /// Write the stored documentation to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is stored or the file cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.common.load_config(None, None)?;
        let mut controller = open_controller(&config);

        let export = match controller.export() {
            Ok(export) => export,
            Err(ViewerError::NotLoaded) => {
                output.warning("No documentation stored. Run `docpad fetch <url>` first.");
                return Err(ViewerError::NotLoaded.into());
            }
            Err(e) => return Err(e.into()),
        };

        let path = self
            .output
            .unwrap_or_else(|| PathBuf::from(export.file_name));
        std::fs::write(&path, &export.contents)?;

        tracing::info!(path = %path.display(), bytes = export.contents.len(), "Export written");
        output.success(&format!("Exported to {}", path.display()));
        Ok(())
    }
}
