//! Discovery of the locales that have an installed annotation file.
//!
//! A directory scan behaves like the shell glob `<dir>/*.<ext>`: only direct
//! children are considered, names starting with a dot never match, and a
//! missing directory simply yields no locales.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use log::{debug, warn};

use crate::config::ListerConfig;
use crate::io_utils::fs_error;
use crate::Result;

/// Identifier for a directory entry named `file_name`, or `None` when the
/// name does not carry `extension`.
///
/// Only the final extension is removed, so `en.backup.xml` maps to
/// `en.backup`.
pub fn locale_id(file_name: &str, extension: &str) -> Option<String> {
    if file_name.starts_with('.') {
        return None;
    }
    let stem = file_name.strip_suffix(extension)?.strip_suffix('.')?;
    Some(stem.to_string())
}

/// List the locales of every `.xml` annotation file in `directory`, sorted.
pub fn list_locales(directory: &Path) -> Result<Vec<String>> {
    list_locales_with(directory, &ListerConfig::default())
}

/// Like [`list_locales`] with an explicit configuration.
pub fn list_locales_with(directory: &Path, config: &ListerConfig) -> Result<Vec<String>> {
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("{} does not exist, no locales", directory.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(fs_error("scanning directory", directory, e)),
    };

    let mut langs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| fs_error("scanning directory", directory, e))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            warn!("skipping non UTF-8 entry {:?}", entry.path());
            continue;
        };
        if let Some(id) = locale_id(name, &config.extension) {
            langs.push(id);
        }
    }
    langs.sort();
    debug!("found {} locales in {}", langs.len(), directory.display());
    Ok(langs)
}

/// Write `langs` newline separated, without a trailing newline.
pub fn write_locale_list<W: Write>(out: &mut W, langs: &[String]) -> io::Result<()> {
    out.write_all(langs.join("\n").as_bytes())
}
