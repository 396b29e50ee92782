//! `docpad pages` command implementation.

use clap::Args;
use docpad_viewer::{page_path, truncate_title};

use super::{CommonArgs, open_controller};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the pages command.
#[derive(Args, Debug)]
pub(crate) struct PagesArgs {
    #[command(flatten)]
    pub(crate) common: CommonArgs,
}

impl PagesArgs {
    /// List stored pages in order with their paths.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.common.load_config(None, None)?;
        let controller = open_controller(&config);

        let Some(documentation) = controller.documentation() else {
            output.warning("No documentation stored. Run `docpad fetch <url>` first.");
            return Ok(());
        };
        if documentation.is_empty() {
            output.warning("This documentation has no pages");
            return Ok(());
        }

        output.highlight(&format!("{} page(s)", documentation.len()));
        for (index, page) in documentation.pages.iter().enumerate() {
            output.entry(
                &format!("{:>3}. {}", index + 1, truncate_title(&page.title)),
                &page_path(&page.title),
            );
        }
        Ok(())
    }
}
