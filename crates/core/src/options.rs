//! Rendering options shared by the library entry points and the CLI.

use serde::Deserialize;

/// How the generated TypeScript file is wrapped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateOptions {
    /// Emit `export default <expr>;` instead of the bare expression.
    pub default_export: bool,
    /// Comment placed above the expression, one `//` line per text line.
    pub banner: Option<String>,
}

impl GenerateOptions {
    /// Banner text split at every JavaScript line terminator, so no line can
    /// escape its `//` comment.
    pub(crate) fn banner_lines(&self) -> Vec<String> {
        let Some(banner) = self.banner.as_deref().filter(|banner| !banner.is_empty()) else {
            return Vec::new();
        };
        let banner = banner.replace("\r\n", "\n");
        let banner = banner.strip_suffix(is_line_terminator).unwrap_or(&banner);
        banner
            .split(is_line_terminator)
            .map(|line| line.trim_end().to_string())
            .collect()
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
