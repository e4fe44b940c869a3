/// Suffix of the per-locale annotation files.
pub const DEFAULT_EXTENSION: &str = "xml";
/// Character prepended to a derived symbol so it is a valid C identifier.
pub const DEFAULT_SYMBOL_PREFIX: char = '_';
/// C type of the generated string constant.
pub const DEFAULT_DECLARATION_TYPE: &str = "const char *";

/// Settings for scanning an annotation directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListerConfig {
    /// File extension without the leading dot.
    pub extension: String,
}

impl ListerConfig {
    /// Build a config for `extension`, accepting it with or without a leading dot.
    pub fn with_extension(extension: &str) -> Self {
        Self {
            extension: extension.trim_start_matches('.').to_string(),
        }
    }
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// Settings for the generated declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedConfig {
    pub symbol_prefix: char,
    pub declaration_type: String,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            symbol_prefix: DEFAULT_SYMBOL_PREFIX,
            declaration_type: DEFAULT_DECLARATION_TYPE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_leading_dot_is_optional() {
        assert_eq!(ListerConfig::with_extension(".xml"), ListerConfig::default());
        assert_eq!(ListerConfig::with_extension("txt").extension, "txt");
    }
}
