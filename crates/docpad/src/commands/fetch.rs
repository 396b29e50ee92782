//! `docpad fetch` command implementation.

use clap::Args;
use docpad_storage::Documentation;

use super::{CommonArgs, ensure_storage_dir, open_controller};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the fetch command.
#[derive(Args, Debug)]
pub(crate) struct FetchArgs {
    /// URL of a documentation JSON document.
    url: String,

    #[command(flatten)]
    pub(crate) common: CommonArgs,
}

impl FetchArgs {
    /// Fetch the document and store it, replacing what was stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the fetch fails, or the
    /// document cannot be stored.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.common.load_config(None, None)?;
        ensure_storage_dir(&config.storage_resolved.dir)?;

        let mut controller = open_controller(&config);
        controller.set_url_input(self.url);
        output.info(&format!("Fetching {}...", controller.url_input()));

        controller.fetch_document()?;

        let pages = controller.documentation().map_or(0, Documentation::len);
        output.success(&format!(
            "Stored {pages} page(s) in {}",
            config.storage_resolved.dir.display()
        ));
        Ok(())
    }
}
