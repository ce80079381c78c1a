use derive_setters::Setters;
use glob::Pattern;
use std::path::{Path, PathBuf};

/// The fixed locations used by the font generator.
///
/// The defaults are relative to the firmware project directory, which is where the build runs
/// the generator from.
#[derive(Clone, Debug, Setters)]
#[setters(into)]
pub struct FontGenConfig {
    /// Directory searched for font files.
    pub font_dir: PathBuf,
    /// File name pattern of font files within `font_dir`.
    pub font_pattern: String,
    /// The generated C source containing the glyph tables.
    pub source_path: PathBuf,
    /// The generated header enumerating the fonts.
    pub header_path: PathBuf,
    /// Tool name printed in the "do not edit" comment of both outputs.
    pub generator: String,
}
impl Default for FontGenConfig {
    fn default() -> Self {
        FontGenConfig::rooted_at(".")
    }
}
impl FontGenConfig {
    /// Uses the default layout below the given project directory.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let font_dir = root.as_ref().join("fonts");
        FontGenConfig {
            font_pattern: "*.fnt".to_string(),
            source_path: font_dir.join("fonts.c"),
            header_path: font_dir.join("_fonts.h"),
            font_dir,
            generator: "maintenance_scripts".to_string(),
        }
    }

    pub fn font_glob(&self) -> String {
        let dir = Pattern::escape(&self.font_dir.to_string_lossy());
        format!("{dir}/{}", self.font_pattern)
    }
}
