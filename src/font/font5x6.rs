// src/font/font5x6.rs

//! Packed bitmap table for the 5x6 font.
//!
//! Regenerated by `generate_fonts.rs` at the repository root; edit the glyph
//! art there and re-run it rather than editing these values.

/// One entry per printable ASCII character, `' '` through `'~'`.
///
/// Bits 0-29 hold the 5x6 bitmap: bit index `y * 5 + x`, LSB first, 1 = ink.
/// Bits 30-31 hold how many pixels below the usual top row the glyph is
/// drawn (0 to 2; the descender letters use the full 2).
pub(super) static GLYPHS_5X6: [u32; 95] = [
    0x00000000, // ' '
    0x08021084, // '!'
    0x0000014a, // '"'
    0x15f52bea, // '#'
    0x1f0707c4, // '$'
    0x33922273, // '%'
    0x2c9a9926, // '&'
    0x00000084, // '\''
    0x10421088, // '('
    0x04421082, // ')'
    0x09575480, // '*'
    0x084f9080, // '+'
    0x44400000, // ','
    0x000f8000, // '-'
    0x08000000, // '.'
    0x02221110, // '/'
    0x1d19e62e, // '0'
    0x1c4210c4, // '1'
    0x3e22222e, // '2'
    0x1d18322e, // '3'
    0x108fa988, // '4'
    0x1d183c3f, // '5'
    0x1d18bc2e, // '6'
    0x0842221f, // '7'
    0x1d18ba2e, // '8'
    0x1d0f462e, // '9'
    0x00400080, // ':'
    0x44400080, // ';'
    0x10410888, // '<'
    0x01f07c00, // '='
    0x04442082, // '>'
    0x0802222e, // '?'
    0x0ddaf62e, // '@'
    0x231fc62e, // 'A'
    0x1f18be2f, // 'B'
    0x1d10862e, // 'C'
    0x1f18c62f, // 'D'
    0x3e10bc3f, // 'E'
    0x0210bc3f, // 'F'
    0x1d18f42e, // 'G'
    0x2318fe31, // 'H'
    0x1c42108e, // 'I'
    0x1d184210, // 'J'
    0x23149d31, // 'K'
    0x3e108421, // 'L'
    0x2318d771, // 'M'
    0x231cd671, // 'N'
    0x1d18c62e, // 'O'
    0x0210be2f, // 'P'
    0x2c9ac62e, // 'Q'
    0x2292be2f, // 'R'
    0x1f08383e, // 'S'
    0x0842109f, // 'T'
    0x1d18c631, // 'U'
    0x08a8c631, // 'V'
    0x23bac631, // 'W'
    0x22a21151, // 'X'
    0x08422a31, // 'Y'
    0x3e22221f, // 'Z'
    0x1842108c, // '['
    0x20821041, // '\\'
    0x0c421086, // ']'
    0x00004544, // '^'
    0x3e000000, // '_'
    0x00000082, // '`'
    0x2d98b800, // 'a'
    0x1f18bc21, // 'b'
    0x1c10b800, // 'c'
    0x3d18fa10, // 'd'
    0x1c1fb800, // 'e'
    0x04213c4c, // 'f'
    0x9d0f463e, // 'g'
    0x2318bc21, // 'h'
    0x1c421804, // 'i'
    0x58842008, // 'j'
    0x12519421, // 'k'
    0x1c421086, // 'l'
    0x2b5aac00, // 'm'
    0x2318bc00, // 'n'
    0x1d18b800, // 'o'
    0x8217c62f, // 'p'
    0xa10f463e, // 'q'
    0x0219b400, // 'r'
    0x1f81f800, // 's'
    0x18213c42, // 't'
    0x3d18c400, // 'u'
    0x08a8c400, // 'v'
    0x155ad400, // 'w'
    0x22a54400, // 'x'
    0x9d0f4631, // 'y'
    0x3e247c00, // 'z'
    0x1842088c, // '{'
    0x08421084, // '|'
    0x0c422086, // '}'
    0x008a8800, // '~'
];
