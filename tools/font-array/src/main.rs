//! Converts a binary font into a source array literal so its raw bytes can be embedded into a
//! compiled program.

use anyhow::{Context, Result};
use font_array::cli::{self, Action};

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli::DEFAULT_LOG_FILTER),
    )
    .init();

    match cli::get_action() {
        Action::Nothing => log::debug!("no font provided, nothing to do"),
        Action::Transcode(config) => {
            let input = config.input_path();
            let output = config.output_path()?;
            log::debug!("transcoding \"{}\" to \"{}\"", input.display(), output.display());

            let length = font_array::transcode(input, &output)
                .with_context(|| format!("failed to transcode \"{}\"", input.display()))?;
            log::info!("wrote {length} bytes to \"{}\"", output.display());
        }
    }

    Ok(())
}
