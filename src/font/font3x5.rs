// src/font/font3x5.rs

//! Packed bitmap table for the 3x5 font.
//!
//! Regenerated by `generate_fonts.rs` at the repository root; edit the glyph
//! art there and re-run it rather than editing these values.

/// One entry per printable ASCII character, `' '` through `'~'`.
///
/// Bits 0-14 hold the 3x5 bitmap: bit index `y * 3 + x`, LSB first, 1 = ink.
/// Bit 15 marks glyphs drawn one pixel below the usual top row (comma-class
/// punctuation and the descender letters).
pub(super) static GLYPHS_3X5: [u16; 95] = [
    0x0000, // ' '
    0x2092, // '!'
    0x002d, // '"'
    0x5f7d, // '#'
    0x3c9e, // '$'
    0x52a5, // '%'
    0x6aaa, // '&'
    0x0012, // '\''
    0x4494, // '('
    0x1491, // ')'
    0x0155, // '*'
    0x05d0, // '+'
    0x9400, // ','
    0x01c0, // '-'
    0x2000, // '.'
    0x12a4, // '/'
    0x2b6a, // '0'
    0x749a, // '1'
    0x72a3, // '2'
    0x38a7, // '3'
    0x49ed, // '4'
    0x38cf, // '5'
    0x2bce, // '6'
    0x24a7, // '7'
    0x2aaa, // '8'
    0x39ea, // '9'
    0x0410, // ':'
    0x9410, // ';'
    0x4454, // '<'
    0x0e38, // '='
    0x1511, // '>'
    0x20a3, // '?'
    0x636a, // '@'
    0x5bea, // 'A'
    0x3aeb, // 'B'
    0x624e, // 'C'
    0x3b6b, // 'D'
    0x72cf, // 'E'
    0x12cf, // 'F'
    0x6b4e, // 'G'
    0x5bed, // 'H'
    0x7497, // 'I'
    0x2b24, // 'J'
    0x5aed, // 'K'
    0x7249, // 'L'
    0x5b7d, // 'M'
    0x5bfd, // 'N'
    0x2b6a, // 'O'
    0x12eb, // 'P'
    0x456a, // 'Q'
    0x5aeb, // 'R'
    0x388e, // 'S'
    0x2497, // 'T'
    0x7b6d, // 'U'
    0x2b6d, // 'V'
    0x5f6d, // 'W'
    0x5aad, // 'X'
    0x24ad, // 'Y'
    0x72a7, // 'Z'
    0x6496, // '['
    0x4889, // '\\'
    0x3493, // ']'
    0x002a, // '^'
    0x7000, // '_'
    0x0011, // '`'
    0x6b70, // 'a'
    0x3ac9, // 'b'
    0x6270, // 'c'
    0x6ba4, // 'd'
    0x63f0, // 'e'
    0x25d6, // 'f'
    0xb9ae, // 'g'
    0x5ac9, // 'h'
    0x2482, // 'i'
    0x9482, // 'j'
    0x5749, // 'k'
    0x6492, // 'l'
    0x5bf8, // 'm'
    0x5b58, // 'n'
    0x2b50, // 'o'
    0x92eb, // 'p'
    0xc9ae, // 'q'
    0x1258, // 'r'
    0x3870, // 's'
    0x64ba, // 't'
    0x6b68, // 'u'
    0x2b68, // 'v'
    0x7f68, // 'w'
    0x5540, // 'x'
    0xb9ad, // 'y'
    0x72b8, // 'z'
    0x6456, // '{'
    0x2492, // '|'
    0x3513, // '}'
    0x0150, // '~'
];
