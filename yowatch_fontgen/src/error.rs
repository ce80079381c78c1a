use thiserror::Error;

/// A font file, or the set of font files, cannot be turned into valid tables.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("expected {expected} glyphs, found {found}")]
    WrongGlyphCount { expected: usize, found: usize },
    #[error("line {line} has {found} glyphs, but its row started with {expected}")]
    RaggedRow { line: usize, expected: usize, found: usize },
    #[error("glyph {glyph} does not have the same width on every line")]
    InconsistentWidth { glyph: usize },
    #[error("glyph {glyph} is {found} lines tall, but glyph 0 is {expected} lines tall")]
    InconsistentHeight { glyph: usize, expected: usize, found: usize },
    #[error("glyph {glyph} contains {found:?}, only 'O' and ' ' are allowed")]
    InvalidPixel { glyph: usize, found: char },
    #[error("glyph {glyph} contains no pixels")]
    EmptyGlyph { glyph: usize },
    #[error("font name {name:?} is not a valid C identifier")]
    InvalidFontName { name: String },
    #[error("at most {max} fonts can be assigned a codename")]
    TooManyFonts { max: usize },
}
