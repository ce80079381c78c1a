use crate::{
    error::FormatError,
    glyph::{FontDescription, Glyph},
    MAX_CHARS,
};
use anyhow::Result;
use log::debug;
use regex_lite::Regex;
use std::iter;

/// Parser for the ASCII-art `.fnt` format.
///
/// A font file is a stack of rows separated by blank lines. Every line of a row is one pixel
/// slice across all glyphs of that row, with glyphs separated by `" | "`:
///
/// ```text
///  OOO  |   O   | OOOO  | OOOO  | O  O  | OOOOO |  OO
/// O   O |  OO   |     O |     O | O  O  | O     | O
/// O   O |   O   |  OOO  |  OOOO | OOOOO | OOOO  | OOO
/// O   O |   O   | O     |     O |    O  |     O | O
///  OOO  |  OOO  | OOOOO | OOOO  |    O  | OOOO  |  OO
/// ```
///
/// An `O` is a lit pixel and a space is an unlit one. Glyphs of a font share their height, but
/// each glyph may have its own width.
///
/// Every line of a row must split into the same number of glyphs. A row with a short line is
/// rejected with [`FormatError::RaggedRow`] rather than truncated to its shortest line.
#[derive(Clone, Debug)]
pub struct GridParser {
    separator: Regex,
}
impl GridParser {
    pub fn new() -> Result<Self> {
        Ok(GridParser { separator: Regex::new(r" \|+ ")? })
    }

    /// Parses and validates the full text of one font file.
    pub fn parse(&self, name: &str, text: &str) -> Result<FontDescription, FormatError> {
        let raw = self.split_glyphs(text)?;
        validate(&raw)?;
        let glyphs = raw.iter().map(|x| Glyph::from_slices(x)).collect();
        Ok(FontDescription { name: name.to_string(), glyphs })
    }

    fn split_glyphs(&self, text: &str) -> Result<Vec<Vec<String>>, FormatError> {
        let mut glyphs = Vec::new();
        let mut row: Vec<Vec<&str>> = Vec::new();

        // the trailing blank line flushes a final row with no separator after it
        for (line_no, line) in text.lines().chain(iter::once("")).enumerate() {
            if line.trim().is_empty() {
                if !row.is_empty() {
                    debug!("Row ending at line {line_no}: {} glyphs", row[0].len());
                    glyphs.extend(transpose(&row));
                    row.clear();
                }
            } else {
                let segments: Vec<&str> = self.separator.split(line).collect();
                if let Some(first) = row.first() {
                    if first.len() != segments.len() {
                        return Err(FormatError::RaggedRow {
                            line: line_no + 1,
                            expected: first.len(),
                            found: segments.len(),
                        });
                    }
                }
                row.push(segments);
            }
        }

        Ok(glyphs)
    }
}

/// Regroups a row of lines into one list of lines per glyph.
fn transpose(row: &[Vec<&str>]) -> Vec<Vec<String>> {
    let count = row.first().map_or(0, Vec::len);
    (0..count)
        .map(|i| row.iter().map(|line| line[i].to_string()).collect())
        .collect()
}

fn validate(glyphs: &[Vec<String>]) -> Result<(), FormatError> {
    if glyphs.len() != MAX_CHARS {
        return Err(FormatError::WrongGlyphCount { expected: MAX_CHARS, found: glyphs.len() });
    }

    for (i, glyph) in glyphs.iter().enumerate() {
        let mut widths = glyph.iter().map(|x| x.chars().count());
        let first = widths.next();
        if !widths.all(|x| Some(x) == first) {
            return Err(FormatError::InconsistentWidth { glyph: i });
        }
    }

    let expected = glyphs[0].len();
    if let Some((i, glyph)) = glyphs.iter().enumerate().find(|(_, x)| x.len() != expected) {
        return Err(FormatError::InconsistentHeight { glyph: i, expected, found: glyph.len() });
    }

    for (i, glyph) in glyphs.iter().enumerate() {
        let mut pixels = glyph.iter().flat_map(|x| x.chars()).peekable();
        if pixels.peek().is_none() {
            return Err(FormatError::EmptyGlyph { glyph: i });
        }
        if let Some(found) = pixels.find(|ch| *ch != 'O' && *ch != ' ') {
            return Err(FormatError::InvalidPixel { glyph: i, found });
        }
    }

    Ok(())
}
