use unicode_width::UnicodeWidthStr;

/// Right-pads `s` with spaces until it fills `field_cells` terminal cells.
///
/// Width is measured in display cells rather than bytes or chars, so dice glyphs
/// and other wide characters line up in tables.
pub fn pad_cells(s: &str, field_cells: usize) -> String {
    let w = s.width();
    let pad = field_cells.saturating_sub(w);
    format!("{s}{}", " ".repeat(pad))
}

/// The Unicode die face for a value in 1..=6, or `?` for anything else.
pub fn face_glyph(face: Option<u32>) -> char {
    match face {
        Some(1) => '\u{2680}',
        Some(2) => '\u{2681}',
        Some(3) => '\u{2682}',
        Some(4) => '\u{2683}',
        Some(5) => '\u{2684}',
        Some(6) => '\u{2685}',
        _ => '?',
    }
}
