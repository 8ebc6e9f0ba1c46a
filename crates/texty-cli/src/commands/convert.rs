use crate::commands::Context;
use crate::notify::Status;
use crate::select::{ensure_csv_path, FileSelector, GivenFile, PromptedFile};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use texty_config::AppConfig;
use texty_csv::{convert_file, default_output_path, ConversionReport};
use tracing::debug;

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Contact export to convert; read from stdin when omitted
    pub input: Option<PathBuf>,
    /// Where to write the result instead of beside the input
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn convert(ctx: &Context<'_>, args: ConvertArgs) -> Result<()> {
    let mut selector: Box<dyn FileSelector> = match args.input {
        Some(path) => Box::new(GivenFile::new(path)),
        None => Box::new(PromptedFile::stdin()),
    };

    let report = process_file(selector.as_mut(), ctx.config, args.out)?;
    let status = Status::success(format!("Output saved to: {}", report.output), &report)?;
    ctx.notifier.notify(&status)
}

/// Picks the input through `selector` and converts it. The output goes
/// beside the input under the configured file name unless `out` is given.
pub fn process_file(
    selector: &mut dyn FileSelector,
    config: &AppConfig,
    out: Option<PathBuf>,
) -> Result<ConversionReport> {
    let input = selector.select_file()?;
    ensure_csv_path(&input)?;
    let output = out.unwrap_or_else(|| default_output_path(&input, &config.output_file_name));
    debug!(input = %input.display(), output = %output.display(), "converting");

    Ok(convert_file(&input, &output, config.column_map())?)
}
