use crate::{
    config::FontGenConfig,
    dedup::DedupIndex,
    error::FormatError,
    glyph::{FontDescription, Glyph},
};
use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use std::{
    collections::BTreeSet,
    fs,
    fs::OpenOptions,
    io,
    io::Write,
    path::Path,
};

const PIXEL_ON: &str = "0xFFFF";
const PIXEL_OFF: &str = "0x0000";

/// Every font gets a single lowercase letter as the prefix of its glyph symbols.
pub const MAX_CODENAMES: usize = 26;

/// What has been written so far.
#[derive(Clone, Debug, Default)]
pub struct GeneratedArtifacts {
    /// Font names in the order their tables were written.
    pub font_names: Vec<String>,
    /// Glyph pixel arrays already written, by symbol name.
    pub symbols: BTreeSet<String>,
    /// Size of all pixel arrays in the firmware image.
    pub pixel_bytes: usize,
}

pub fn codename(font_index: usize) -> Result<char, FormatError> {
    if font_index >= MAX_CODENAMES {
        return Err(FormatError::TooManyFonts { max: MAX_CODENAMES });
    }
    Ok((b'a' + font_index as u8) as char)
}

pub fn glyph_symbol(codename: char, glyph: usize) -> String {
    format!("{codename}{glyph:02X}")
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => {
            chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        }
        _ => false,
    }
}

fn warning_comment(generator: &str) -> String {
    format!("/*\n * Generated file (by '{generator}') - DO NOT EDIT\n */\n")
}

fn pixel_data(glyph: &Glyph) -> String {
    let pixels: Vec<_> =
        glyph.column_major().map(|x| if x { PIXEL_ON } else { PIXEL_OFF }).collect();
    pixels.join(",")
}

/// Size of the pixel arrays of a font, two bytes per pixel of every distinct glyph.
pub fn pixel_bytes(font: &FontDescription, index: &DedupIndex) -> usize {
    index.unique().map(|i| font.glyphs[i].width() * font.glyphs[i].height() * 2).sum()
}

/// Renders the tables of one font. Glyph arrays whose symbol is already in `symbols` are
/// skipped, newly written ones are added to it.
pub fn render_font(
    generator: &str,
    codename: char,
    font: &FontDescription,
    index: &DedupIndex,
    symbols: &mut BTreeSet<String>,
) -> String {
    let mut accum = warning_comment(generator);
    accum.push('\n');
    accum.push_str("#include \"fonts.h\"\n");

    // pixel data, once per distinct glyph
    for i in index.unique() {
        let symbol = glyph_symbol(codename, i);
        if !symbols.insert(symbol.clone()) {
            warn!("Glyph array {symbol} was already written, skipping.");
            continue;
        }
        debug!("Writing glyph array {symbol}");
        let data = pixel_data(&font.glyphs[i]);
        accum.push_str(&format!("static const uint16 {symbol}[] = {{{data}}};\n"));
    }

    // the descriptor table, one entry per character
    let entries: Vec<_> = index
        .references()
        .iter()
        .map(|r| {
            let glyph = &font.glyphs[*r];
            let symbol = glyph_symbol(codename, *r);
            format!("{{{symbol},{},{}}}", glyph.width(), glyph.height())
        })
        .collect();
    accum.push_str(&format!("const struct FONT_CHAR {}[MAX_CHARS] = {{\n", font.name));
    accum.push_str(&entries.join(",\n"));
    accum.push_str("\n};\n");

    accum
}

pub fn render_font_list(font_names: &[String]) -> String {
    format!("const struct FONT_CHAR *fonts[MAX_FONTS] = {{\n{}\n}};\n", font_names.join(",\n"))
}

pub fn render_header(generator: &str, font_names: &[String]) -> String {
    let mut constants: Vec<_> = font_names.iter().map(|x| x.to_ascii_uppercase()).collect();
    constants.push("MAX_FONTS".to_string());
    format!(
        "\
            {}\
            \n\
            #ifndef __FONTS_H_\n\
            #define __FONTS_H_\n\
            \n\
            enum {{\n\
            {}\n\
            }};\n\
            \n\
            #endif\n\
        ",
        warning_comment(generator),
        constants.join(",\n"),
    )
}

fn remove_stale(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!("Removed stale output '{}'.", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Could not remove '{}'", path.display())),
    }
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Could not create directory '{}'", parent.display()))?;
        }
    }
    Ok(())
}

fn append(path: &Path, data: &str) -> Result<()> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut file| file.write_all(data.as_bytes()))
        .with_context(|| format!("Could not write to '{}'", path.display()))
}

/// Writes the generated source one font at a time, then the font list and the header.
pub struct FontEmitter<'a> {
    config: &'a FontGenConfig,
    artifacts: GeneratedArtifacts,
}
impl<'a> FontEmitter<'a> {
    /// Removes any outputs left over from an earlier run.
    pub fn new(config: &'a FontGenConfig) -> Result<Self> {
        remove_stale(&config.source_path)?;
        remove_stale(&config.header_path)?;
        create_parent(&config.source_path)?;
        create_parent(&config.header_path)?;
        Ok(FontEmitter { config, artifacts: GeneratedArtifacts::default() })
    }

    /// Appends the tables of a font to the generated source.
    pub fn emit_font(&mut self, font: &FontDescription, index: &DedupIndex) -> Result<char> {
        if !is_c_identifier(&font.name) {
            bail!(FormatError::InvalidFontName { name: font.name.clone() });
        }
        let codename = codename(self.artifacts.font_names.len())?;

        let source = render_font(
            &self.config.generator,
            codename,
            font,
            index,
            &mut self.artifacts.symbols,
        );
        append(&self.config.source_path, &source)?;

        self.artifacts.font_names.push(font.name.clone());
        self.artifacts.pixel_bytes += pixel_bytes(font, index);
        Ok(codename)
    }

    /// Appends the font list and writes the header.
    pub fn finish(self) -> Result<GeneratedArtifacts> {
        let names = &self.artifacts.font_names;
        append(&self.config.source_path, &render_font_list(names))?;
        fs::write(&self.config.header_path, render_header(&self.config.generator, names))
            .with_context(|| format!("Could not write '{}'", self.config.header_path.display()))?;
        Ok(self.artifacts)
    }
}
