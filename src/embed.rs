//! Embedding of a text file as a C string constant.
//!
//! The output is a declaration of the form
//!
//! ```text
//! const char *_name =
//! "first line\n"
//! "second line\n"
//! ;
//! ```
//!
//! Only double quotes are escaped. Backslashes and control characters in
//! the input pass through untouched, and generated sources depend on that
//! exact format.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use log::debug;

use crate::config::EmbedConfig;
use crate::io_utils::fs_error;
use crate::{BuildToolError, Result};

/// Symbol name for `path`: the file stem with `-` replaced by `_`, behind
/// `prefix`.
pub fn symbol_name(path: &Path, prefix: char) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let mut name = String::with_capacity(stem.len() + 1);
    name.push(prefix);
    name.push_str(&stem.replace('-', "_"));
    name
}

/// Prefix every `"` with a backslash.
pub fn escape_line(line: &str) -> String {
    line.replace('"', "\\\"")
}

/// Render one input line as a quoted literal segment ending in `\n`.
pub fn quote_line(line: &str) -> String {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    format!("\"{}\\n\"", escape_line(line))
}

/// Lines of UTF-8 text ending in `\n`, `\r\n` or a lone `\r`.
///
/// Terminators are not part of the yielded lines, and a final line without
/// a terminator is yielded like any other.
pub struct TextLines<R> {
    reader: R,
}

/// Split `reader` into lines the way text-mode file reading does.
pub fn text_lines<R: BufRead>(reader: R) -> TextLines<R> {
    TextLines { reader }
}

impl<R: BufRead> TextLines<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = Vec::new();
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                if line.is_empty() {
                    return Ok(None);
                }
                return into_text(line).map(Some);
            }
            match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(i) => {
                    let cr = buf[i] == b'\r';
                    line.extend_from_slice(&buf[..i]);
                    self.reader.consume(i + 1);
                    if cr && self.reader.fill_buf()?.first() == Some(&b'\n') {
                        self.reader.consume(1);
                    }
                    return into_text(line).map(Some);
                }
                None => {
                    let n = buf.len();
                    line.extend_from_slice(buf);
                    self.reader.consume(n);
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for TextLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

fn into_text(bytes: Vec<u8>) -> io::Result<String> {
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Write the declaration of `symbol` with the text read from `reader`.
///
/// Returns the number of lines embedded.
pub fn write_literal<R: BufRead, W: Write>(
    symbol: &str,
    reader: R,
    config: &EmbedConfig,
    out: &mut W,
) -> Result<usize> {
    emit(
        symbol,
        text_lines(reader).map(|l| l.map_err(BuildToolError::from)),
        config,
        out,
    )
}

// Lines are streamed; anything written before a read error stays written.
fn emit<I, W>(symbol: &str, lines: I, config: &EmbedConfig, out: &mut W) -> Result<usize>
where
    I: Iterator<Item = Result<String>>,
    W: Write,
{
    writeln!(out, "{}{} =", config.declaration_type, symbol)?;
    let mut count = 0;
    for line in lines {
        writeln!(out, "{}", quote_line(&line?))?;
        count += 1;
    }
    writeln!(out, ";")?;
    Ok(count)
}

/// Embed the file at `path` with the default declaration settings.
pub fn embed_as_literal<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    embed_as_literal_with(path, None, &EmbedConfig::default(), out)
}

/// Embed the file at `path`, optionally under an explicit symbol name.
pub fn embed_as_literal_with<W: Write>(
    path: &Path,
    symbol: Option<&str>,
    config: &EmbedConfig,
    out: &mut W,
) -> Result<()> {
    let symbol = match symbol {
        Some(s) => s.to_string(),
        None => symbol_name(path, config.symbol_prefix),
    };
    let file = File::open(path).map_err(|e| fs_error("reading input file", path, e))?;
    let lines = text_lines(BufReader::new(file))
        .map(|l| l.map_err(|e| fs_error("reading input file", path, e)));
    let count = emit(&symbol, lines, config, out)?;
    debug!("embedded {} lines of {} as {}", count, path.display(), symbol);
    Ok(())
}
