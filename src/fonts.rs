use pdf_writer::{Name, Pdf, Ref};

use crate::model::FontFace;

/// Helvetica advance widths at 1000 units/em for ASCII 32..=126 (Adobe AFM).
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // space../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Average width used for the upper half of WinAnsi (accented Latin, typographic quotes).
const UPPER_HALF_WIDTH: f32 = 556.0;

pub(crate) struct FontEntry {
    pub(crate) pdf_name: &'static str,
    pub(crate) font_ref: Ref,
}

impl FontFace {
    pub(crate) fn base_font(self) -> &'static str {
        match self {
            FontFace::Helvetica => "Helvetica",
            FontFace::HelveticaBold => "Helvetica-Bold",
        }
    }

    pub(crate) fn pdf_name(self) -> &'static str {
        match self {
            FontFace::Helvetica => "F1",
            FontFace::HelveticaBold => "F2",
        }
    }

    fn ascii_widths(self) -> &'static [u16; 95] {
        match self {
            FontFace::Helvetica => &HELVETICA_ASCII,
            FontFace::HelveticaBold => &HELVETICA_BOLD_ASCII,
        }
    }

    /// Width of one WinAnsi byte in 1000-units. Control bytes have no width.
    fn byte_width_1000(self, byte: u8) -> f32 {
        match byte {
            32..=126 => self.ascii_widths()[(byte - 32) as usize] as f32,
            0..=31 | 127 => 0.0,
            _ => UPPER_HALF_WIDTH,
        }
    }
}

/// Rendered width of `text` in points. Characters outside WinAnsi are measured as the
/// `?` they are drawn as, so measurement always agrees with the emitted bytes.
pub fn text_width(text: &str, face: FontFace, size: f32) -> f32 {
    to_winansi_bytes(text)
        .iter()
        .map(|&b| face.byte_width_1000(b) * size / 1000.0)
        .sum()
}

pub fn space_width(face: FontFace, size: f32) -> f32 {
    face.byte_width_1000(b' ') * size / 1000.0
}

/// Map a single Unicode char to its WinAnsi byte, or None if unmappable.
fn char_to_winansi(c: char) -> Option<u8> {
    let byte = match c as u32 {
        0x0000..=0x007F => c as u8,
        0x00A0..=0x00FF => c as u8, // Latin-1 supplement maps directly
        0x20AC => 0x80,
        0x201A => 0x82,
        0x0192 => 0x83,
        0x201E => 0x84,
        0x2026 => 0x85,
        0x2020 => 0x86,
        0x2021 => 0x87,
        0x02C6 => 0x88,
        0x2030 => 0x89,
        0x0160 => 0x8A,
        0x2039 => 0x8B,
        0x0152 => 0x8C,
        0x017D => 0x8E,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2022 => 0x95, // bullet
        0x2013 => 0x96,
        0x2014 => 0x97,
        0x02DC => 0x98,
        0x2122 => 0x99,
        0x0161 => 0x9A,
        0x203A => 0x9B,
        0x0153 => 0x9C,
        0x017E => 0x9E,
        0x0178 => 0x9F,
        _ => return None,
    };
    Some(byte)
}

/// Convert a UTF-8 string to WinAnsi (Windows-1252) bytes for PDF Str encoding.
/// Unmappable characters become `?`.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| char_to_winansi(c).unwrap_or(b'?'))
        .collect()
}

/// Characters of `s` that cannot be drawn with the base-14 fonts.
pub(crate) fn unmappable_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().filter(|&c| char_to_winansi(c).is_none())
}

/// Write a Type1 font dictionary for a base-14 face. Nothing is embedded.
pub(crate) fn register_font(pdf: &mut Pdf, face: FontFace, font_ref: Ref) -> FontEntry {
    pdf.type1_font(font_ref)
        .base_font(Name(face.base_font().as_bytes()))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    log::debug!("register_font: {} as /{}", face.base_font(), face.pdf_name());
    FontEntry {
        pdf_name: face.pdf_name(),
        font_ref,
    }
}
