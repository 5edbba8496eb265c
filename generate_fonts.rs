//! Prints the packed glyph tables in `src/font/` from editable pixel art.
//! Run with `rustc generate_fonts.rs -o /tmp/genfonts && /tmp/genfonts` and
//! paste the output over the table in the matching module.
//!
//! Packing: bit index `y * width + x`, LSB first, `#` = ink. The second
//! tuple field is the glyph's downward shift in pixels, stored in the spare
//! high bits (bit 15 for the 3x5 table, bits 30-31 for the 5x6 table).

#[rustfmt::skip]
const ART_3X5: [([&str; 5], u32); 95] = [
    (["...", "...", "...", "...", "..."], 0), // ' '
    ([".#.", ".#.", ".#.", "...", ".#."], 0), // '!'
    (["#.#", "#.#", "...", "...", "..."], 0), // '"'
    (["#.#", "###", "#.#", "###", "#.#"], 0), // '#'
    ([".##", "##.", ".#.", ".##", "##."], 0), // '$'
    (["#.#", "..#", ".#.", "#..", "#.#"], 0), // '%'
    ([".#.", "#.#", ".#.", "#.#", ".##"], 0), // '&'
    ([".#.", ".#.", "...", "...", "..."], 0), // '\''
    (["..#", ".#.", ".#.", ".#.", "..#"], 0), // '('
    (["#..", ".#.", ".#.", ".#.", "#.."], 0), // ')'
    (["#.#", ".#.", "#.#", "...", "..."], 0), // '*'
    (["...", ".#.", "###", ".#.", "..."], 0), // '+'
    (["...", "...", "...", ".#.", "#.."], 1), // ','
    (["...", "...", "###", "...", "..."], 0), // '-'
    (["...", "...", "...", "...", ".#."], 0), // '.'
    (["..#", "..#", ".#.", "#..", "#.."], 0), // '/'
    ([".#.", "#.#", "#.#", "#.#", ".#."], 0), // '0'
    ([".#.", "##.", ".#.", ".#.", "###"], 0), // '1'
    (["##.", "..#", ".#.", "#..", "###"], 0), // '2'
    (["###", "..#", ".#.", "..#", "##."], 0), // '3'
    (["#.#", "#.#", "###", "..#", "..#"], 0), // '4'
    (["###", "#..", "##.", "..#", "##."], 0), // '5'
    ([".##", "#..", "###", "#.#", ".#."], 0), // '6'
    (["###", "..#", ".#.", ".#.", ".#."], 0), // '7'
    ([".#.", "#.#", ".#.", "#.#", ".#."], 0), // '8'
    ([".#.", "#.#", "###", "..#", "##."], 0), // '9'
    (["...", ".#.", "...", ".#.", "..."], 0), // ':'
    (["...", ".#.", "...", ".#.", "#.."], 1), // ';'
    (["..#", ".#.", "#..", ".#.", "..#"], 0), // '<'
    (["...", "###", "...", "###", "..."], 0), // '='
    (["#..", ".#.", "..#", ".#.", "#.."], 0), // '>'
    (["##.", "..#", ".#.", "...", ".#."], 0), // '?'
    ([".#.", "#.#", "#.#", "#..", ".##"], 0), // '@'
    ([".#.", "#.#", "###", "#.#", "#.#"], 0), // 'A'
    (["##.", "#.#", "##.", "#.#", "##."], 0), // 'B'
    ([".##", "#..", "#..", "#..", ".##"], 0), // 'C'
    (["##.", "#.#", "#.#", "#.#", "##."], 0), // 'D'
    (["###", "#..", "##.", "#..", "###"], 0), // 'E'
    (["###", "#..", "##.", "#..", "#.."], 0), // 'F'
    ([".##", "#..", "#.#", "#.#", ".##"], 0), // 'G'
    (["#.#", "#.#", "###", "#.#", "#.#"], 0), // 'H'
    (["###", ".#.", ".#.", ".#.", "###"], 0), // 'I'
    (["..#", "..#", "..#", "#.#", ".#."], 0), // 'J'
    (["#.#", "#.#", "##.", "#.#", "#.#"], 0), // 'K'
    (["#..", "#..", "#..", "#..", "###"], 0), // 'L'
    (["#.#", "###", "#.#", "#.#", "#.#"], 0), // 'M'
    (["#.#", "###", "###", "#.#", "#.#"], 0), // 'N'
    ([".#.", "#.#", "#.#", "#.#", ".#."], 0), // 'O'
    (["##.", "#.#", "##.", "#..", "#.."], 0), // 'P'
    ([".#.", "#.#", "#.#", ".#.", "..#"], 0), // 'Q'
    (["##.", "#.#", "##.", "#.#", "#.#"], 0), // 'R'
    ([".##", "#..", ".#.", "..#", "##."], 0), // 'S'
    (["###", ".#.", ".#.", ".#.", ".#."], 0), // 'T'
    (["#.#", "#.#", "#.#", "#.#", "###"], 0), // 'U'
    (["#.#", "#.#", "#.#", "#.#", ".#."], 0), // 'V'
    (["#.#", "#.#", "#.#", "###", "#.#"], 0), // 'W'
    (["#.#", "#.#", ".#.", "#.#", "#.#"], 0), // 'X'
    (["#.#", "#.#", ".#.", ".#.", ".#."], 0), // 'Y'
    (["###", "..#", ".#.", "#..", "###"], 0), // 'Z'
    ([".##", ".#.", ".#.", ".#.", ".##"], 0), // '['
    (["#..", "#..", ".#.", "..#", "..#"], 0), // '\\'
    (["##.", ".#.", ".#.", ".#.", "##."], 0), // ']'
    ([".#.", "#.#", "...", "...", "..."], 0), // '^'
    (["...", "...", "...", "...", "###"], 0), // '_'
    (["#..", ".#.", "...", "...", "..."], 0), // '`'
    (["...", ".##", "#.#", "#.#", ".##"], 0), // 'a'
    (["#..", "#..", "##.", "#.#", "##."], 0), // 'b'
    (["...", ".##", "#..", "#..", ".##"], 0), // 'c'
    (["..#", "..#", ".##", "#.#", ".##"], 0), // 'd'
    (["...", ".##", "###", "#..", ".##"], 0), // 'e'
    ([".##", ".#.", "###", ".#.", ".#."], 0), // 'f'
    ([".##", "#.#", ".##", "..#", "##."], 1), // 'g'
    (["#..", "#..", "##.", "#.#", "#.#"], 0), // 'h'
    ([".#.", "...", ".#.", ".#.", ".#."], 0), // 'i'
    ([".#.", "...", ".#.", ".#.", "#.."], 1), // 'j'
    (["#..", "#..", "#.#", "##.", "#.#"], 0), // 'k'
    ([".#.", ".#.", ".#.", ".#.", ".##"], 0), // 'l'
    (["...", "###", "###", "#.#", "#.#"], 0), // 'm'
    (["...", "##.", "#.#", "#.#", "#.#"], 0), // 'n'
    (["...", ".#.", "#.#", "#.#", ".#."], 0), // 'o'
    (["##.", "#.#", "##.", "#..", "#.."], 1), // 'p'
    ([".##", "#.#", ".##", "..#", "..#"], 1), // 'q'
    (["...", "##.", "#..", "#..", "#.."], 0), // 'r'
    (["...", ".##", "#..", "..#", "##."], 0), // 's'
    ([".#.", "###", ".#.", ".#.", ".##"], 0), // 't'
    (["...", "#.#", "#.#", "#.#", ".##"], 0), // 'u'
    (["...", "#.#", "#.#", "#.#", ".#."], 0), // 'v'
    (["...", "#.#", "#.#", "###", "###"], 0), // 'w'
    (["...", "...", "#.#", ".#.", "#.#"], 0), // 'x'
    (["#.#", "#.#", ".##", "..#", "##."], 1), // 'y'
    (["...", "###", ".#.", "#..", "###"], 0), // 'z'
    ([".##", ".#.", "#..", ".#.", ".##"], 0), // '{'
    ([".#.", ".#.", ".#.", ".#.", ".#."], 0), // '|'
    (["##.", ".#.", "..#", ".#.", "##."], 0), // '}'
    (["...", ".#.", "#.#", "...", "..."], 0), // '~'
];

#[rustfmt::skip]
const ART_5X6: [([&str; 6], u32); 95] = [
    ([".....", ".....", ".....", ".....", ".....", "....."], 0), // ' '
    (["..#..", "..#..", "..#..", "..#..", ".....", "..#.."], 0), // '!'
    ([".#.#.", ".#.#.", ".....", ".....", ".....", "....."], 0), // '"'
    ([".#.#.", "#####", ".#.#.", ".#.#.", "#####", ".#.#."], 0), // '#'
    (["..#..", ".####", "#....", ".###.", "....#", "####."], 0), // '$'
    (["##..#", "##..#", "...#.", "..#..", "#..##", "#..##"], 0), // '%'
    ([".##..", "#..#.", ".##..", "#.#.#", "#..#.", ".##.#"], 0), // '&'
    (["..#..", "..#..", ".....", ".....", ".....", "....."], 0), // '\''
    (["...#.", "..#..", "..#..", "..#..", "..#..", "...#."], 0), // '('
    ([".#...", "..#..", "..#..", "..#..", "..#..", ".#..."], 0), // ')'
    ([".....", "..#..", "#.#.#", ".###.", "#.#.#", "..#.."], 0), // '*'
    ([".....", "..#..", "..#..", "#####", "..#..", "..#.."], 0), // '+'
    ([".....", ".....", ".....", ".....", "..#..", ".#..."], 1), // ','
    ([".....", ".....", ".....", "#####", ".....", "....."], 0), // '-'
    ([".....", ".....", ".....", ".....", ".....", "..#.."], 0), // '.'
    (["....#", "...#.", "..#..", "..#..", ".#...", "#...."], 0), // '/'
    ([".###.", "#...#", "#..##", "##..#", "#...#", ".###."], 0), // '0'
    (["..#..", ".##..", "..#..", "..#..", "..#..", ".###."], 0), // '1'
    ([".###.", "#...#", "...#.", "..#..", ".#...", "#####"], 0), // '2'
    ([".###.", "#...#", "..##.", "....#", "#...#", ".###."], 0), // '3'
    (["...#.", "..##.", ".#.#.", "#####", "...#.", "...#."], 0), // '4'
    (["#####", "#....", "####.", "....#", "#...#", ".###."], 0), // '5'
    ([".###.", "#....", "####.", "#...#", "#...#", ".###."], 0), // '6'
    (["#####", "....#", "...#.", "..#..", "..#..", "..#.."], 0), // '7'
    ([".###.", "#...#", ".###.", "#...#", "#...#", ".###."], 0), // '8'
    ([".###.", "#...#", "#...#", ".####", "....#", ".###."], 0), // '9'
    ([".....", "..#..", ".....", ".....", "..#..", "....."], 0), // ':'
    ([".....", "..#..", ".....", ".....", "..#..", ".#..."], 1), // ';'
    (["...#.", "..#..", ".#...", ".#...", "..#..", "...#."], 0), // '<'
    ([".....", ".....", "#####", ".....", "#####", "....."], 0), // '='
    ([".#...", "..#..", "...#.", "...#.", "..#..", ".#..."], 0), // '>'
    ([".###.", "#...#", "...#.", "..#..", ".....", "..#.."], 0), // '?'
    ([".###.", "#...#", "#.###", "#.#.#", "#.###", ".##.."], 0), // '@'
    ([".###.", "#...#", "#...#", "#####", "#...#", "#...#"], 0), // 'A'
    (["####.", "#...#", "####.", "#...#", "#...#", "####."], 0), // 'B'
    ([".###.", "#...#", "#....", "#....", "#...#", ".###."], 0), // 'C'
    (["####.", "#...#", "#...#", "#...#", "#...#", "####."], 0), // 'D'
    (["#####", "#....", "####.", "#....", "#....", "#####"], 0), // 'E'
    (["#####", "#....", "####.", "#....", "#....", "#...."], 0), // 'F'
    ([".###.", "#....", "#.###", "#...#", "#...#", ".###."], 0), // 'G'
    (["#...#", "#...#", "#####", "#...#", "#...#", "#...#"], 0), // 'H'
    ([".###.", "..#..", "..#..", "..#..", "..#..", ".###."], 0), // 'I'
    (["....#", "....#", "....#", "....#", "#...#", ".###."], 0), // 'J'
    (["#...#", "#..#.", "###..", "#..#.", "#...#", "#...#"], 0), // 'K'
    (["#....", "#....", "#....", "#....", "#....", "#####"], 0), // 'L'
    (["#...#", "##.##", "#.#.#", "#...#", "#...#", "#...#"], 0), // 'M'
    (["#...#", "##..#", "#.#.#", "#..##", "#...#", "#...#"], 0), // 'N'
    ([".###.", "#...#", "#...#", "#...#", "#...#", ".###."], 0), // 'O'
    (["####.", "#...#", "####.", "#....", "#....", "#...."], 0), // 'P'
    ([".###.", "#...#", "#...#", "#.#.#", "#..#.", ".##.#"], 0), // 'Q'
    (["####.", "#...#", "####.", "#.#..", "#..#.", "#...#"], 0), // 'R'
    ([".####", "#....", ".###.", "....#", "....#", "####."], 0), // 'S'
    (["#####", "..#..", "..#..", "..#..", "..#..", "..#.."], 0), // 'T'
    (["#...#", "#...#", "#...#", "#...#", "#...#", ".###."], 0), // 'U'
    (["#...#", "#...#", "#...#", "#...#", ".#.#.", "..#.."], 0), // 'V'
    (["#...#", "#...#", "#...#", "#.#.#", "##.##", "#...#"], 0), // 'W'
    (["#...#", ".#.#.", "..#..", "..#..", ".#.#.", "#...#"], 0), // 'X'
    (["#...#", "#...#", ".#.#.", "..#..", "..#..", "..#.."], 0), // 'Y'
    (["#####", "....#", "...#.", "..#..", ".#...", "#####"], 0), // 'Z'
    (["..##.", "..#..", "..#..", "..#..", "..#..", "..##."], 0), // '['
    (["#....", ".#...", "..#..", "..#..", "...#.", "....#"], 0), // '\\'
    ([".##..", "..#..", "..#..", "..#..", "..#..", ".##.."], 0), // ']'
    (["..#..", ".#.#.", "#...#", ".....", ".....", "....."], 0), // '^'
    ([".....", ".....", ".....", ".....", ".....", "#####"], 0), // '_'
    ([".#...", "..#..", ".....", ".....", ".....", "....."], 0), // '`'
    ([".....", ".....", ".###.", "#...#", "#..##", ".##.#"], 0), // 'a'
    (["#....", "#....", "####.", "#...#", "#...#", "####."], 0), // 'b'
    ([".....", ".....", ".###.", "#....", "#....", ".###."], 0), // 'c'
    (["....#", "....#", ".####", "#...#", "#...#", ".####"], 0), // 'd'
    ([".....", ".....", ".###.", "#####", "#....", ".###."], 0), // 'e'
    (["..##.", ".#...", "####.", ".#...", ".#...", ".#..."], 0), // 'f'
    ([".####", "#...#", "#...#", ".####", "....#", ".###."], 2), // 'g'
    (["#....", "#....", "####.", "#...#", "#...#", "#...#"], 0), // 'h'
    (["..#..", ".....", ".##..", "..#..", "..#..", ".###."], 0), // 'i'
    (["...#.", ".....", "...#.", "...#.", "...#.", "..##."], 1), // 'j'
    (["#....", "#....", "#.#..", "##...", "#.#..", "#..#."], 0), // 'k'
    ([".##..", "..#..", "..#..", "..#..", "..#..", ".###."], 0), // 'l'
    ([".....", ".....", "##.#.", "#.#.#", "#.#.#", "#.#.#"], 0), // 'm'
    ([".....", ".....", "####.", "#...#", "#...#", "#...#"], 0), // 'n'
    ([".....", ".....", ".###.", "#...#", "#...#", ".###."], 0), // 'o'
    (["####.", "#...#", "#...#", "####.", "#....", "#...."], 2), // 'p'
    ([".####", "#...#", "#...#", ".####", "....#", "....#"], 2), // 'q'
    ([".....", ".....", "#.##.", "##..#", "#....", "#...."], 0), // 'r'
    ([".....", ".....", ".####", "##...", "...##", "####."], 0), // 's'
    ([".#...", ".#...", "####.", ".#...", ".#...", "..##."], 0), // 't'
    ([".....", ".....", "#...#", "#...#", "#...#", ".####"], 0), // 'u'
    ([".....", ".....", "#...#", "#...#", ".#.#.", "..#.."], 0), // 'v'
    ([".....", ".....", "#.#.#", "#.#.#", "#.#.#", ".#.#."], 0), // 'w'
    ([".....", ".....", "#...#", ".#.#.", ".#.#.", "#...#"], 0), // 'x'
    (["#...#", "#...#", "#...#", ".####", "....#", ".###."], 2), // 'y'
    ([".....", ".....", "#####", "...#.", ".#...", "#####"], 0), // 'z'
    (["..##.", "..#..", ".#...", "..#..", "..#..", "..##."], 0), // '{'
    (["..#..", "..#..", "..#..", "..#..", "..#..", "..#.."], 0), // '|'
    ([".##..", "..#..", "...#.", "..#..", "..#..", ".##.."], 0), // '}'
    ([".....", ".....", ".#...", "#.#.#", "...#.", "....."], 0), // '~'
];

fn pack(rows: &[&str], width: usize) -> u32 {
    let mut bits = 0u32;
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), width);
        for (x, cell) in row.bytes().enumerate() {
            if cell == b'#' {
                bits |= 1 << (y * width + x);
            }
        }
    }
    bits
}

fn main() {
    println!("pub(super) static GLYPHS_3X5: [u16; 95] = [");
    for (i, (rows, shift)) in ART_3X5.iter().enumerate() {
        assert!(*shift <= 1);
        let value = pack(rows, 3) | (shift << 15);
        println!("    0x{:04x}, // {:?}", value, (b' ' + i as u8) as char);
    }
    println!("];");
    println!();
    println!("pub(super) static GLYPHS_5X6: [u32; 95] = [");
    for (i, (rows, shift)) in ART_5X6.iter().enumerate() {
        assert!(*shift <= 2);
        let value = pack(rows, 5) | (shift << 30);
        println!("    0x{:08x}, // {:?}", value, (b' ' + i as u8) as char);
    }
    println!("];");
}
