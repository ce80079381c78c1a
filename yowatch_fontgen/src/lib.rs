//! Compiles the bitmap fonts of the YoWatch firmware into C tables.
//!
//! Each `.fnt` file in the font directory holds the 128 ASCII glyphs of one font, drawn as
//! ASCII art (see [`GridParser`]). The generator writes two files:
//!
//! * `fonts.c`, with one pixel array per distinct glyph, a 128 entry `FONT_CHAR` table per font
//!   and the `fonts` array listing every font table.
//! * `_fonts.h`, with an enum naming each font by its index into `fonts`, followed by
//!   `MAX_FONTS`.
//!
//! Glyph arrays are named by the codename of their font (`a` for the first font, `b` for the
//! second, and so on) followed by the glyph index in hex. Identical glyphs within a font share
//! the array of their first occurrence.

mod config;
mod dedup;
mod emit;
mod error;
mod glyph;
mod parse;

pub use config::FontGenConfig;
pub use dedup::{dedup_index, DedupIndex};
pub use emit::{
    codename, glyph_symbol, render_font, render_font_list, render_header, FontEmitter,
    GeneratedArtifacts, MAX_CODENAMES,
};
pub use error::FormatError;
pub use glyph::{FontDescription, Glyph};
pub use parse::GridParser;

use anyhow::*;
use log::{info, warn};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// The number of glyphs in every font.
pub const MAX_CHARS: usize = 128;

/// Lists the font files, sorted by path so codenames do not depend on the filesystem.
pub fn discover_fonts(config: &FontGenConfig) -> Result<Vec<PathBuf>> {
    let pattern = config.font_glob();
    let mut paths = Vec::new();
    for path in glob::glob(&pattern).with_context(|| format!("Bad font pattern '{pattern}'"))? {
        paths.push(path?);
    }
    paths.sort();
    Ok(paths)
}

/// The name of a font is its file name without the extension.
pub fn font_name(path: &Path) -> Result<String> {
    match path.file_stem() {
        Some(stem) => Ok(stem.to_string_lossy().to_string()),
        None => bail!("Font file '{}' has no name", path.display()),
    }
}

/// Compiles one font file into a [`FontDescription`] and its [`DedupIndex`].
pub fn load_font(parser: &GridParser, path: &Path) -> Result<(FontDescription, DedupIndex)> {
    let name = font_name(path)?;
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read font file '{}'", path.display()))?;
    let font = parser
        .parse(&name, &text)
        .with_context(|| format!("Invalid font file '{}'", path.display()))?;
    let index = dedup_index(&font.glyphs);
    Ok((font, index))
}

/// Regenerates the font tables.
///
/// Outputs from earlier runs are removed first. Each font's tables are appended to the source as
/// soon as that font is compiled, so a failure leaves the tables of the fonts before it behind.
pub fn generate_fonts(config: &FontGenConfig) -> Result<GeneratedArtifacts> {
    let parser = GridParser::new()?;
    let mut emitter = FontEmitter::new(config)?;

    let font_files = discover_fonts(config)?;
    if font_files.is_empty() {
        warn!("No font files match '{}'.", config.font_glob());
    }
    ensure!(
        font_files.len() <= MAX_CODENAMES,
        FormatError::TooManyFonts { max: MAX_CODENAMES }
    );

    for path in &font_files {
        let (font, index) = load_font(&parser, path)?;
        let codename = emitter
            .emit_font(&font, &index)
            .with_context(|| format!("Could not generate tables for '{}'", path.display()))?;
        info!(
            "Generated font {} ({codename}): {} pixels tall, up to {} wide, {} unique glyphs",
            font.name,
            font.height(),
            font.max_width(),
            index.unique_count(),
        );
    }

    let artifacts = emitter.finish()?;
    info!(
        "Wrote {} fonts to '{}' and '{}', {} bytes of glyph data",
        artifacts.font_names.len(),
        config.source_path.display(),
        config.header_path.display(),
        artifacts.pixel_bytes,
    );
    Ok(artifacts)
}
