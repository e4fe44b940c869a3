//! Argument handling shared by the `locale_lister` and `literal_embedder`
//! binaries.
//!
//! The `run_*` functions take the full argument list (program name first)
//! and the stream that receives the primary output, so they can be driven
//! from tests without touching process state.

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::config::{
    EmbedConfig, ListerConfig, DEFAULT_DECLARATION_TYPE, DEFAULT_EXTENSION, DEFAULT_SYMBOL_PREFIX,
};
use crate::embed::embed_as_literal_with;
use crate::io_utils::fs_error;
use crate::locales::{list_locales_with, write_locale_list};
use crate::{BuildToolError, Result};

/// Print the sorted locales of all annotation files in a directory.
#[derive(Parser, Debug)]
#[command(
    name = "locale_lister",
    version,
    override_usage = "locale_lister [OPTIONS] <DIRECTORY>",
    after_help = "Put `--` before a directory whose name starts with `-`."
)]
pub struct ListerArgs {
    /// Directory holding one annotation file per locale
    #[arg(value_name = "DIRECTORY")]
    pub paths: Vec<PathBuf>,
    /// Extension of the annotation files
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,
    /// Print a JSON array instead of one locale per line
    #[arg(long)]
    pub json: bool,
}

/// Print a text file as a C string constant declaration.
#[derive(Parser, Debug)]
#[command(
    name = "literal_embedder",
    version,
    override_usage = "literal_embedder [OPTIONS] <FILE>",
    after_help = "Put `--` before a file whose name starts with `-`."
)]
pub struct EmbedderArgs {
    /// Text file to embed
    #[arg(value_name = "FILE")]
    pub paths: Vec<PathBuf>,
    /// Write the declaration to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    /// Symbol name to declare instead of the one derived from the file name
    #[arg(long)]
    pub name: Option<String>,
    /// Character put in front of the derived symbol name
    #[arg(long, default_value_t = DEFAULT_SYMBOL_PREFIX)]
    pub symbol_prefix: char,
    /// C type written before the symbol, including any trailing `*`
    #[arg(long, default_value = DEFAULT_DECLARATION_TYPE)]
    pub declaration_type: String,
}

/// Where a binary reports a wrong argument count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageStream {
    Stdout,
    Stderr,
}

fn single_path<C: CommandFactory>(paths: Vec<PathBuf>) -> Result<PathBuf> {
    let got = paths.len();
    let mut paths = paths.into_iter();
    match (paths.next(), paths.next()) {
        (Some(path), None) => Ok(path),
        _ => Err(BuildToolError::Usage {
            expected: 1,
            got,
            usage: C::command().render_usage().to_string(),
        }),
    }
}

/// Entry point of `locale_lister`.
pub fn run_locale_lister<I, T, W>(args: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let args = ListerArgs::try_parse_from(args)?;
    let dir = single_path::<ListerArgs>(args.paths)?;
    let config = ListerConfig::with_extension(&args.extension);

    let langs = list_locales_with(&dir, &config)?;
    if args.json {
        serde_json::to_writer(&mut *out, &langs)?;
    } else {
        write_locale_list(out, &langs)?;
    }
    out.flush()?;
    Ok(())
}

/// Entry point of `literal_embedder`.
pub fn run_literal_embedder<I, T, W>(args: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let args = EmbedderArgs::try_parse_from(args)?;
    let input = single_path::<EmbedderArgs>(args.paths)?;
    let config = EmbedConfig {
        symbol_prefix: args.symbol_prefix,
        declaration_type: args.declaration_type,
    };
    let name = args.name.as_deref();

    match args.output {
        Some(output) => {
            let file =
                File::create(&output).map_err(|e| fs_error("creating output file", &output, e))?;
            let mut writer = BufWriter::new(file);
            embed_as_literal_with(&input, name, &config, &mut writer)?;
            writer
                .flush()
                .map_err(|e| fs_error("writing output file", &output, e))?;
        }
        None => {
            embed_as_literal_with(&input, name, &config, out)?;
            out.flush()?;
        }
    }
    Ok(())
}

/// Print `err` for the user and return the process exit status.
///
/// `--help` and `--version` are reported through the error path by clap and
/// map to status 0; everything else is status 1.
pub fn report_error(err: &BuildToolError, usage_stream: UsageStream) -> i32 {
    match err {
        BuildToolError::Cli(e) => {
            let _ = e.print();
            if e.use_stderr() {
                1
            } else {
                0
            }
        }
        BuildToolError::Usage { .. } => {
            match usage_stream {
                UsageStream::Stdout => println!("{err}"),
                UsageStream::Stderr => eprintln!("{err}"),
            }
            1
        }
        _ => {
            eprintln!("{err}");
            1
        }
    }
}

/// Route `log` output to stderr, `warn` and above unless `RUST_LOG` says
/// otherwise.
pub fn init_logger() {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(log::LevelFilter::Warn);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    let _ = builder.try_init();
}
