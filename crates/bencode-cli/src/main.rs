//! `bencode` CLI: encode, decode, and canonicalize bencode from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Encode JSON to bencode (stdin → stdout)
//! echo '{"cow":"moo","spam":["a","b"]}' | bencode encode
//!
//! # Decode a torrent file to pretty-printed JSON
//! bencode decode -i ubuntu.torrent
//!
//! # Reject files with bytes after the first element
//! bencode decode --strict -i ubuntu.torrent
//!
//! # Rewrite a file in canonical form (sorted dictionary keys)
//! bencode canonicalize -i in.torrent -o out.torrent
//! ```

use anyhow::{Context, Result};
use bencode_core::{decode, encode, encode_json, to_json, SliceCursor};
use clap::{Parser, Subcommand};
use log::{debug, warn, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::io::{self, Read, Write};

#[derive(Parser)]
#[command(name = "bencode", version, about = "Bencode encoder/decoder CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug detail to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode JSON to bencode
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Decode bencode to pretty-printed JSON
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Fail if bytes remain after the first element
        #[arg(long)]
        strict: bool,
    },
    /// Decode bencode and re-encode it with sorted dictionary keys
    Canonicalize {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Fail if bytes remain after the first element
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };
    init_logging(level)?;

    match cli.command {
        Commands::Encode { input, output } => {
            let data = read_input(input.as_deref())?;
            let json = String::from_utf8(data).context("JSON input is not valid UTF-8")?;
            let encoded = encode_json(&json).context("Failed to encode JSON to bencode")?;
            write_output(output.as_deref(), &encoded)?;
        }
        Commands::Decode {
            input,
            output,
            strict,
        } => {
            let data = read_input(input.as_deref())?;
            let value = decode_single(&data, strict)?;
            let pretty = serde_json::to_string_pretty(&to_json(&value))?;
            write_output(output.as_deref(), pretty.as_bytes())?;
        }
        Commands::Canonicalize {
            input,
            output,
            strict,
        } => {
            let data = read_input(input.as_deref())?;
            let value = decode_single(&data, strict)?;
            let encoded = encode(&value).context("Failed to re-encode bencode")?;
            if encoded != data {
                debug!("canonical form differs from input");
            }
            write_output(output.as_deref(), &encoded)?;
        }
    }

    Ok(())
}

/// Decode the first element of `data` and deal with anything after it.
///
/// The decoder itself never looks past the element it was asked for, so
/// trailing bytes are checked here: an error under `--strict`, a warning otherwise.
fn decode_single(data: &[u8], strict: bool) -> Result<bencode_core::Value> {
    let mut cursor = SliceCursor::new(data);
    let value = decode(&mut cursor).context("Failed to decode bencode input")?;

    let trailing = cursor.remaining().len();
    if trailing > 0 {
        if strict {
            anyhow::bail!(
                "{} trailing bytes after the first element (offset {})",
                trailing,
                cursor.position()
            );
        }
        warn!(
            "ignoring {} trailing bytes after the first element (offset {})",
            trailing,
            cursor.position()
        );
    }
    Ok(value)
}

/// Route log output to stderr so it never mixes with encoded data on stdout.
fn init_logging(level: LevelFilter) -> Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l}: {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .context("Invalid logging configuration")?;

    log4rs::init_config(config).context("Failed to install logger")?;
    Ok(())
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    let data = match path {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Failed to read file: {}", path))?
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    debug!(
        "read {} bytes from {}",
        data.len(),
        path.unwrap_or("stdin")
    );
    Ok(data)
}

fn write_output(path: Option<&str>, content: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content)
                .and_then(|()| stdout.flush())
                .context("Failed to write to stdout")?;
        }
    }
    debug!(
        "wrote {} bytes to {}",
        content.len(),
        path.unwrap_or("stdout")
    );
    Ok(())
}
