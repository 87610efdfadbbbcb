//! Block glyphs for the large `MM:SS` display.

/// Rows per glyph.
pub const GLYPH_HEIGHT: usize = 5;

#[rustfmt::skip]
static DIGITS: [[&str; GLYPH_HEIGHT]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"], // 0
    [" ██", "  █", "  █", "  █", "  █"], // 1
    ["███", "  █", "███", "█  ", "███"], // 2
    ["███", "  █", "███", "  █", "███"], // 3
    ["█ █", "█ █", "███", "  █", "  █"], // 4
    ["███", "█  ", "███", "  █", "███"], // 5
    ["███", "█  ", "███", "█ █", "███"], // 6
    ["███", "  █", "  █", "  █", "  █"], // 7
    ["███", "█ █", "███", "█ █", "███"], // 8
    ["███", "█ █", "███", "  █", "███"], // 9
];

#[rustfmt::skip]
static COLON: [&str; GLYPH_HEIGHT] = [" ", "█", " ", "█", " "];

static BLANK: [&str; GLYPH_HEIGHT] = ["   "; GLYPH_HEIGHT];

fn glyph(c: char) -> &'static [&'static str; GLYPH_HEIGHT] {
    match c {
        ':' => &COLON,
        _ => match c.to_digit(10) {
            Some(d) => &DIGITS[d as usize],
            None => &BLANK,
        },
    }
}

/// Renders `text` as [`GLYPH_HEIGHT`] rows of block characters, one column
/// of spacing between glyphs.
pub fn render_big(text: &str) -> [String; GLYPH_HEIGHT] {
    let mut rows: [String; GLYPH_HEIGHT] = Default::default();
    for (i, c) in text.chars().enumerate() {
        for (row, part) in rows.iter_mut().zip(glyph(c).iter()) {
            if i > 0 {
                row.push(' ');
            }
            row.push_str(part);
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_have_equal_width() {
        let rows = render_big("02:05");
        // 4 digits of 3, a colon of 1, 4 gaps
        for row in &rows {
            assert_eq!(row.chars().count(), 4 * 3 + 1 + 4);
        }
    }

    #[test]
    fn test_digit_shapes() {
        let rows = render_big("8");
        assert_eq!(rows, ["███", "█ █", "███", "█ █", "███"].map(String::from));

        let rows = render_big("1:");
        assert_eq!(rows[1], "  █ █");
        assert_eq!(rows[2], "  █  ");
    }
}
