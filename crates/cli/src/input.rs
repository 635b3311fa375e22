//! Where a command's key or payload text comes from.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use global_address_key::{SAMPLES, sample};

/// Key source shared by every decoding command.
///
/// Priority: `--sample`, then `--file`, then the positional key. A missing
/// key or `-` reads stdin. Surrounding whitespace is trimmed so pasted keys
/// with a trailing newline still decode.
#[derive(Args, Debug)]
pub(crate) struct KeySource {
    /// The global address key. Reads stdin when omitted or `-`.
    key: Option<String>,

    /// Read the key from a file.
    #[arg(long, conflicts_with_all = ["key", "sample"])]
    file: Option<PathBuf>,

    /// Use a built-in sample key (1-based; see `gak samples`).
    #[arg(long, conflicts_with = "key")]
    sample: Option<usize>,
}

impl KeySource {
    /// Resolve the key text.
    pub(crate) fn resolve(&self) -> Result<String> {
        if let Some(n) = self.sample {
            let s = sample(n).with_context(|| {
                format!("no sample {n} (there are {} samples)", SAMPLES.len())
            })?;
            tracing::debug!(sample = n, label = s.label, "using sample key");
            return Ok(s.token.to_string());
        }

        if let Some(path) = &self.file {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read key file '{}'", path.display()))?;
            return Ok(text.trim().to_string());
        }

        match self.key.as_deref() {
            None | Some("-") => Ok(read_stdin("key")?.trim().to_string()),
            Some(key) => Ok(key.trim().to_string()),
        }
    }
}

/// Read payload text from the argument or stdin, dropping one trailing
/// line ending.
pub(crate) fn resolve_text(text: Option<&str>) -> Result<String> {
    let raw = match text {
        None | Some("-") => read_stdin("payload text")?,
        Some(t) => return Ok(t.to_string()),
    };
    let trimmed = raw
        .strip_suffix("\r\n")
        .or_else(|| raw.strip_suffix('\n'))
        .unwrap_or(&raw);
    Ok(trimmed.to_string())
}

fn read_stdin(what: &str) -> Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("no {what} given; pass it as an argument or pipe it on stdin");
    }
    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .with_context(|| format!("failed to read {what} from stdin"))?;
    Ok(buf)
}
