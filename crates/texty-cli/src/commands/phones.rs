use crate::commands::Context;
use crate::notify::Status;
use crate::select::ensure_csv_path;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use texty_csv::{default_output_path, extract_phone_list_file, DEFAULT_PHONE_LIST_FILE_NAME};

#[derive(Debug, Args)]
pub struct PhonesArgs {
    pub input: PathBuf,
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn phones(ctx: &Context<'_>, args: PhonesArgs) -> Result<()> {
    ensure_csv_path(&args.input)?;
    let output = args
        .out
        .unwrap_or_else(|| default_output_path(&args.input, DEFAULT_PHONE_LIST_FILE_NAME));

    let report = extract_phone_list_file(&args.input, &output)?;
    let message = format!(
        "Wrote {} phone numbers to {} (skipped {} without a valid number, {} duplicates)",
        report.written,
        output.display(),
        report.invalid,
        report.duplicates
    );
    ctx.notifier.notify(&Status::success(message, &report)?)
}
