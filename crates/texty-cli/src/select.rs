use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Supplies the file the user picked.
pub trait FileSelector {
    fn select_file(&mut self) -> Result<PathBuf>;
}

/// A path given up front on the command line.
pub struct GivenFile {
    path: Option<PathBuf>,
}

impl GivenFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }
}

impl FileSelector for GivenFile {
    fn select_file(&mut self) -> Result<PathBuf> {
        self.path
            .take()
            .ok_or_else(|| invalid_input("no file selected"))
    }
}

/// Reads one path per line, the way a terminal drop or paste delivers it.
pub struct PromptedFile<R> {
    reader: R,
    prompt: bool,
}

impl PromptedFile<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self {
            prompt: true,
            ..Self::from_reader(io::stdin().lock())
        }
    }
}

impl<R: BufRead> PromptedFile<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            prompt: false,
        }
    }
}

impl<R: BufRead> FileSelector for PromptedFile<R> {
    fn select_file(&mut self) -> Result<PathBuf> {
        if self.prompt {
            let mut stderr = io::stderr().lock();
            write!(stderr, "CSV file to convert: ")?;
            stderr.flush()?;
        }

        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .with_context(|| "read file path")?;
        let path = clean_dropped_path(&line);
        if path.is_empty() {
            return Err(invalid_input("no file selected"));
        }
        Ok(PathBuf::from(path))
    }
}

// Terminals wrap dropped paths containing spaces in quotes.
fn clean_dropped_path(raw: &str) -> &str {
    let trimmed = raw.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    trimmed
}

pub fn ensure_csv_path(path: &Path) -> Result<()> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(invalid_input(format!(
            "please provide a CSV file: {}",
            path.display()
        )));
    }
    Ok(())
}
