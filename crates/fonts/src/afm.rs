//! Minimal AFM (Adobe Font Metrics) parsing.
//!
//! The renderer only needs horizontal advance widths to measure text for
//! centered and right-aligned fields, so parsing is limited to `FontName`
//! and the `StartCharMetrics` table. Widths are in 1/1000 em, keyed by the
//! standard encoding code carried in the file.

use crate::source::FontSource;
use crate::{afm_file_name, FontError, HELVETICA, HELVETICA_BOLD};

/// Width assumed for characters without an entry in the metrics table.
const DEFAULT_GLYPH_WIDTH: f32 = 500.0;

/// Parsed character widths for one font face.
#[derive(Debug, Clone)]
pub struct AfmMetrics {
    font_name: String,
    widths: [f32; 256],
}

impl AfmMetrics {
    /// Parses AFM data. `name` is the logical file name, used only in
    /// error messages.
    pub fn parse(name: &str, data: &[u8]) -> Result<Self, FontError> {
        let text = String::from_utf8_lossy(data);
        let mut font_name = String::new();
        let mut widths = [DEFAULT_GLYPH_WIDTH; 256];
        let mut in_char_metrics = false;
        let mut parsed = 0usize;

        for line in text.lines() {
            let line = line.trim();
            if let Some(rest) = line.strip_prefix("FontName ") {
                font_name = rest.trim().to_string();
            } else if line.starts_with("StartCharMetrics") {
                in_char_metrics = true;
            } else if line.starts_with("EndCharMetrics") {
                break;
            } else if in_char_metrics {
                if let Some((code, width)) = parse_char_metric(line) {
                    if (0..256).contains(&code) {
                        widths[code as usize] = width;
                    }
                    parsed += 1;
                }
            }
        }

        if parsed == 0 {
            return Err(FontError::InvalidMetrics {
                name: name.to_string(),
                message: "no character metrics found".to_string(),
            });
        }
        Ok(Self { font_name, widths })
    }

    /// Loads and parses one face through the given source.
    pub fn load(source: &dyn FontSource, face: &str) -> Result<Self, FontError> {
        let file = afm_file_name(face);
        let data = source.load(&file)?;
        Self::parse(&file, &data)
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    /// Advance width of one encoded byte at the given size.
    pub fn char_width(&self, byte: u8, size: f32) -> f32 {
        self.widths[byte as usize] / 1000.0 * size
    }

    /// Width of `text` at the given size, using the same WinAnsi byte
    /// mapping the content stream uses.
    pub fn width_of(&self, text: &str, size: f32) -> f32 {
        win_ansi_bytes(text)
            .iter()
            .map(|b| self.widths[*b as usize])
            .sum::<f32>()
            / 1000.0
            * size
    }
}

/// Parses one `C <code> ; WX <width> ; …` line. Returns `None` for lines
/// that do not carry both fields.
fn parse_char_metric(line: &str) -> Option<(i32, f32)> {
    let mut code = None;
    let mut width = None;
    for segment in line.split(';') {
        let mut tokens = segment.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some("C"), Some(value)) => code = value.parse::<i32>().ok(),
            (Some("WX"), Some(value)) => width = value.parse::<f32>().ok(),
            _ => {}
        }
    }
    Some((code?, width?))
}

/// Maps text to the WinAnsi (CP1252) single-byte encoding the document
/// declares; characters without a slot are replaced with `?`.
pub fn win_ansi_bytes(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    // CP1252 repurposes the 0x80..0x9F range for punctuation and a few
    // letters; the rest coincides with Latin-1.
    match c {
        '\u{20AC}' => 0x80,
        '\u{201A}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201E}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02C6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017D}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02DC}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203A}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017E}' => 0x9E,
        '\u{0178}' => 0x9F,
        c if (c as u32) <= 255 => c as u8,
        _ => b'?',
    }
}

/// The two faces the document layout draws with.
#[derive(Debug, Clone)]
pub struct FontSet {
    regular: AfmMetrics,
    bold: AfmMetrics,
}

impl FontSet {
    /// Loads `Helvetica.afm` and `Helvetica-Bold.afm` through the source
    /// bound to this render.
    pub fn load(source: &dyn FontSource) -> Result<Self, FontError> {
        Ok(Self {
            regular: AfmMetrics::load(source, HELVETICA)?,
            bold: AfmMetrics::load(source, HELVETICA_BOLD)?,
        })
    }

    /// Metrics for a face name; unknown faces fall back to the regular
    /// face so measurement never fails mid-render.
    pub fn metrics(&self, face: &str) -> &AfmMetrics {
        if face == HELVETICA_BOLD {
            &self.bold
        } else {
            &self.regular
        }
    }
}
