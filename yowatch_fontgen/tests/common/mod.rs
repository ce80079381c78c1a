use std::{fs, path::Path};
use yowatch_fontgen::MAX_CHARS;

/// Draws a glyph whose pixels are the bits of `bits`, row by row from the top left.
pub fn glyph(bits: usize, width: usize, height: usize) -> Vec<String> {
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| if (bits >> (y * width + x)) & 1 != 0 { 'O' } else { ' ' })
                .collect()
        })
        .collect()
}

/// 128 pairwise distinct glyphs.
pub fn distinct_glyphs(width: usize, height: usize) -> Vec<Vec<String>> {
    (0..MAX_CHARS).map(|i| glyph(i, width, height)).collect()
}

/// Lays glyphs out the way font files are drawn, 16 to a row.
pub fn font_text(glyphs: &[Vec<String>]) -> String {
    let mut text = String::new();
    for row in glyphs.chunks(16) {
        for y in 0..row[0].len() {
            let line: Vec<&str> = row.iter().map(|x| x[y].as_str()).collect();
            text.push_str(&line.join(" | "));
            text.push('\n');
        }
        text.push('\n');
    }
    text
}

pub fn write_font(root: &Path, name: &str, glyphs: &[Vec<String>]) {
    let dir = root.join("fonts");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{name}.fnt")), font_text(glyphs)).unwrap();
}

/// The entries of the `FONT_CHAR` table of a font in a generated source.
pub fn descriptor_entries<'a>(source: &'a str, font: &str) -> Vec<&'a str> {
    let start = format!("const struct FONT_CHAR {font}[MAX_CHARS] = {{\n");
    let begin = source.find(&start).unwrap() + start.len();
    let end = begin + source[begin..].find("\n};").unwrap();
    source[begin..end].split(",\n").collect()
}
