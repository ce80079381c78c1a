/// A single character bitmap. Pixels are stored row by row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}
impl Glyph {
    /// Returns `None` if `pixels` does not hold exactly `width * height` pixels.
    pub fn new(width: usize, height: usize, pixels: Vec<bool>) -> Option<Self> {
        if pixels.len() != width * height {
            return None;
        }
        Some(Glyph { width, height, pixels })
    }

    /// Builds a glyph from pixel slices already checked to contain only `'O'` and `' '`.
    pub(crate) fn from_slices(slices: &[String]) -> Self {
        let height = slices.len();
        let width = slices.first().map_or(0, |x| x.chars().count());
        let pixels = slices.iter().flat_map(|x| x.chars().map(|ch| ch == 'O')).collect();
        Glyph { width, height, pixels }
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, col: usize, row: usize) -> Option<bool> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.pixels[row * self.width + col])
    }

    /// Iterates over the pixels one column at a time, top to bottom within each column.
    pub fn column_major(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.width).flat_map(move |col| {
            (0..self.height).map(move |row| self.pixels[row * self.width + col])
        })
    }
}

/// The 128 glyphs of one font file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontDescription {
    pub name: String,
    pub glyphs: Vec<Glyph>,
}
impl FontDescription {
    /// Glyphs may differ in width, only their height is shared.
    pub fn max_width(&self) -> usize {
        self.glyphs.iter().map(Glyph::width).max().unwrap_or(0)
    }
    pub fn height(&self) -> usize {
        self.glyphs.first().map_or(0, Glyph::height)
    }
}
