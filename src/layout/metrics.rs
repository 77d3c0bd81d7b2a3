//! Helvetica advance widths for measuring and wrapping notes

/// Advance widths (1/1000 em) for printable ASCII, starting at space
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

/// Width used for anything outside printable ASCII
const FALLBACK_WIDTH: u16 = 556;

fn glyph_width(c: char) -> u16 {
    match c {
        ' '..='~' => HELVETICA_ASCII[c as usize - 0x20],
        '\u{2018}' | '\u{2019}' => 222,
        _ => FALLBACK_WIDTH,
    }
}

/// Rendered width of `text` in Helvetica at `size` points
pub fn text_width(text: &str, size: f64) -> f64 {
    let units: u64 = text.chars().map(|c| u64::from(glyph_width(c))).sum();
    units as f64 * size / 1000.0
}

/// Greedy word wrap to `max_width`
///
/// Explicit newlines start a new line. A single word wider than the line is
/// kept whole on its own line rather than split.
pub fn wrap_words(text: &str, size: f64, max_width: f64) -> Vec<String> {
    let space = text_width(" ", size);
    let mut lines = vec![];

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0.0;

        for word in paragraph.split_whitespace() {
            let word_width = text_width(word, size);
            if line.is_empty() {
                line.push_str(word);
                line_width = word_width;
            } else if line_width + space + word_width <= max_width {
                line.push(' ');
                line.push_str(word);
                line_width += space + word_width;
            } else {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
                line_width = word_width;
            }
        }
        lines.push(line);
    }

    // Drop trailing blank lines left by a terminating newline
    while lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}
