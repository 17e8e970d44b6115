//! Static glyph-width tables for the standard PDF Helvetica family.
//!
//! Widths are AFM advance widths in 1/1000 em for ASCII 0x20..=0x7E
//! (index = `(char as usize) - 32`). Helvetica-Oblique shares the regular
//! widths. Characters outside the table fall back to `average_char_width`.
//!
//! The tables drive the two places where text width matters: aligning a
//! centered/right-aligned cell and wrapping a value cell to its column.

/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

// ────────────────────────────────────────────────────────────────────────────
// Font styles
// ────────────────────────────────────────────────────────────────────────────

/// The three faces the report uses. All are base-14 fonts, so no font
/// program is embedded in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Bold,
    Oblique,
}

impl FontStyle {
    /// Every style, in resource-dictionary order.
    pub const ALL: [FontStyle; 3] = [FontStyle::Regular, FontStyle::Bold, FontStyle::Oblique];

    /// PostScript name written as the font's `BaseFont`.
    pub fn base_font(self) -> &'static str {
        match self {
            FontStyle::Regular => "Helvetica",
            FontStyle::Bold => "Helvetica-Bold",
            FontStyle::Oblique => "Helvetica-Oblique",
        }
    }

    /// Name under which the font is registered in each page's resources.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontStyle::Regular => "F1",
            FontStyle::Bold => "F2",
            FontStyle::Oblique => "F3",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Character-width table for one face.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    widths: [u16; 95],
    /// Fallback width for characters outside the ASCII table.
    pub average_char_width: u16,
}

impl FontMetricTable {
    /// Advance width of a single character in 1/1000 em.
    pub fn char_width(&self, c: char) -> u16 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            self.widths[code - 32]
        } else {
            self.average_char_width
        }
    }

    /// Rendered width of `s` in millimetres at `size_pt`.
    pub fn measure_mm(&self, s: &str, size_pt: f32) -> f32 {
        let units: u32 = s.chars().map(|c| u32::from(self.char_width(c))).sum();
        units as f32 / 1000.0 * size_pt / PT_PER_MM
    }

    /// Greedy word-wrap of `text` into lines no wider than `max_width_mm`.
    ///
    /// Explicit newlines always start a new line. Spacing inside a line is
    /// kept as written; only the whitespace at a wrap point is dropped. A word
    /// wider than the whole line is broken between characters. Always returns
    /// at least one line, so an empty value still occupies one row.
    pub fn wrap_text(&self, text: &str, max_width_mm: f32, size_pt: f32) -> Vec<String> {
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
            if self.measure_mm(paragraph, size_pt) <= max_width_mm {
                lines.push(paragraph.to_string());
                continue;
            }

            let mut current = String::new();
            let mut first_word = true;

            for (gap, word) in spaced_words(paragraph) {
                // A wrapped line never starts with the gap that caused the wrap.
                let lead = if current.is_empty() && !first_word { "" } else { gap };
                first_word = false;

                if self.measure_mm(word, size_pt) > max_width_mm {
                    if !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                    }
                    let mut pieces = self.break_word(word, max_width_mm, size_pt);
                    // The tail of a broken word may still share its line.
                    current = pieces.pop().unwrap_or_default();
                    lines.extend(pieces);
                    continue;
                }

                let candidate = format!("{current}{lead}{word}");
                if self.measure_mm(&candidate, size_pt) <= max_width_mm {
                    current = candidate;
                } else if current.is_empty() {
                    current = word.to_string();
                } else {
                    lines.push(std::mem::replace(&mut current, word.to_string()));
                }
            }

            lines.push(current);
        }

        lines
    }

    /// Splits a single over-long word into pieces that each fit `max_width_mm`.
    /// Every piece holds at least one character.
    fn break_word(&self, word: &str, max_width_mm: f32, size_pt: f32) -> Vec<String> {
        let mut pieces = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for c in word.chars() {
            let w = f32::from(self.char_width(c)) / 1000.0 * size_pt / PT_PER_MM;
            if !current.is_empty() && current_width + w > max_width_mm {
                pieces.push(std::mem::take(&mut current));
                current_width = 0.0;
            }
            current.push(c);
            current_width += w;
        }
        if !current.is_empty() {
            pieces.push(current);
        }
        pieces
    }
}

/// Splits `text` into words, each paired with the whitespace run before it.
/// Trailing whitespace is dropped.
fn spaced_words(text: &str) -> Vec<(&str, &str)> {
    let mut words = Vec::new();
    let mut rest = text;
    while let Some(word_start) = rest.find(|c: char| !c.is_whitespace()) {
        let (gap, tail) = rest.split_at(word_start);
        let word_end = tail.find(char::is_whitespace).unwrap_or(tail.len());
        let (word, next) = tail.split_at(word_end);
        words.push((gap, word));
        rest = next;
    }
    words
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {    |    }    ~
        334, 260, 334, 584,
    ],
    average_char_width: 556,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        333, 333, 584, 584, 584, 611, 975,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 584, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        // {    |    }    ~
        389, 280, 389, 584,
    ],
    average_char_width: 611,
};

/// Returns the static metric table for a font style.
pub fn get_metrics(style: FontStyle) -> &'static FontMetricTable {
    match style {
        FontStyle::Regular | FontStyle::Oblique => &HELVETICA_TABLE,
        FontStyle::Bold => &HELVETICA_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
