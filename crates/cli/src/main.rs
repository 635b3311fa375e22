mod input;
mod logging;
mod render;

use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use global_address_key::{ALT_KEY, GlobalAddressKey, SAMPLES, encode};

use crate::input::{KeySource, resolve_text};
use crate::render::{
    Format, render_command_failure, render_decode_failure, render_encoded, render_fields,
    render_lookup, render_payload, render_samples,
};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "gak",
    version,
    about = "Decode Experian QAS global address keys into their named fields"
)]
struct Cli {
    /// Output mode: "pretty" for aligned terminal output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, env = "GAK_OUTPUT", value_parser = ["pretty", "json"])]
    output: Option<String>,

    /// Log more to stderr (repeat for more detail). `GAK_LOG` overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Decode a key and list its fields in order.
    Decode {
        #[command(flatten)]
        source: KeySource,
        /// Print the decoded payload text instead of the field list.
        #[arg(long)]
        raw: bool,
    },

    /// Print the value of the first field with the given name.
    ///
    /// Exits with status 1 when the field is missing or empty.
    Get {
        /// Field name, matched exactly.
        name: String,
        #[command(flatten)]
        source: KeySource,
    },

    /// Print the alt key (alternate external identifier).
    AltKey {
        #[command(flatten)]
        source: KeySource,
    },

    /// Encode payload text (`name=value~name=value`) as a key.
    Encode {
        /// Payload text. Reads stdin when omitted or `-`.
        text: Option<String>,
    },

    /// List the built-in sample keys.
    Samples,
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let format = Format::resolve_or_detect(cli.output.as_deref());

    match run(cli.cmd, format) {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            render_command_failure(&err, format);
            ExitCode::FAILURE
        }
    }
}

fn run(cmd: Cmd, format: Format) -> Result<ExitCode> {
    match cmd {
        Cmd::Decode { source, raw } => cmd_decode(&source, raw, format),
        Cmd::Get { name, source } => cmd_get(&name, &source, format),
        Cmd::AltKey { source } => cmd_get(ALT_KEY, &source, format),
        Cmd::Encode { text } => cmd_encode(text.as_deref(), format),
        Cmd::Samples => {
            render_samples(SAMPLES, format)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_decode(source: &KeySource, raw: bool, format: Format) -> Result<ExitCode> {
    let token = source.resolve()?;
    let Some(key) = decode_or_report(&token, format) else {
        return Ok(ExitCode::FAILURE);
    };

    if raw {
        render_payload(key.payload(), format)?;
    } else {
        render_fields(&key.to_fields(), format)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_get(name: &str, source: &KeySource, format: Format) -> Result<ExitCode> {
    let token = source.resolve()?;
    let Some(key) = decode_or_report(&token, format) else {
        return Ok(ExitCode::FAILURE);
    };

    let value = key.get(name);
    render_lookup(name, value, format)?;
    Ok(if value.is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn cmd_encode(text: Option<&str>, format: Format) -> Result<ExitCode> {
    let payload = resolve_text(text)?;
    let token = encode(&payload)?;
    render_encoded(&token, format)?;
    Ok(ExitCode::SUCCESS)
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Decode `token`, rendering the failure in `format` when it does not decode.
fn decode_or_report(token: &str, format: Format) -> Option<GlobalAddressKey> {
    match GlobalAddressKey::decode(token) {
        Ok(key) => Some(key),
        Err(err) => {
            render_decode_failure(token, &err, format);
            None
        }
    }
}
