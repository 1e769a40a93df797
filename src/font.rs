//! Tiny 5x7 bitmap font for the toolbar labels.
//!
//! Each glyph is 7 rows of 5 bits, most significant bit on the left. Glyphs
//! are uploaded once to a storage buffer and sampled by the board shader.

use crate::layout::Action;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;

/// Horizontal distance between glyph origins (one column of spacing)
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Longest label the shader has room for
pub const MAX_LABEL_LEN: usize = 9;

/// Words per glyph slot in the storage buffer (7 rows, padded to 8)
pub const GLYPH_STRIDE: usize = 8;

fn glyph_5x7(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        _ => [0; 7],
    }
}

/// Width and height of `text` in unscaled font pixels
pub fn text_size(text: &str) -> (u32, u32) {
    let len = text.chars().count() as u32;
    (len * GLYPH_ADVANCE - u32::from(len > 0), GLYPH_HEIGHT)
}

/// Glyph rows for every toolbar label, in `Action::index` order.
///
/// Each label occupies `MAX_LABEL_LEN` slots of `GLYPH_STRIDE` words.
pub fn toolbar_glyphs() -> Vec<u32> {
    let mut words = vec![0u32; Action::ALL.len() * MAX_LABEL_LEN * GLYPH_STRIDE];

    for action in Action::ALL {
        let label = action.label();
        debug_assert!(label.chars().count() <= MAX_LABEL_LEN, "label too long: {}", label);

        for (slot, ch) in label.chars().take(MAX_LABEL_LEN).enumerate() {
            let base = (action.index() * MAX_LABEL_LEN + slot) * GLYPH_STRIDE;
            for (row, bits) in glyph_5x7(ch).into_iter().enumerate() {
                words[base + row] = u32::from(bits);
            }
        }
    }

    words
}
