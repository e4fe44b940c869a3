//! Build-time helpers: list the locales of installed annotation files and
//! embed text files as C string constants.

pub mod cli;
pub mod config;
pub mod embed;
pub mod error;
pub mod io_utils;
pub mod locales;

pub use config::{EmbedConfig, ListerConfig};
pub use embed::{
    embed_as_literal, embed_as_literal_with, escape_line, quote_line, symbol_name, text_lines,
    write_literal, TextLines,
};
pub use error::{BuildToolError, Result};
pub use locales::{list_locales, list_locales_with, locale_id, write_locale_list};
