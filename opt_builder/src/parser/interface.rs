use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// Target 95% of the total width, so the renderer doesn't butt up against the terminal edge.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Assuming an average word length of 5, 17 allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_TEXT_WIDTH: usize = 17;

/// Lays out help rows as an indented label column followed by a wrapped text column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColumnRenderer {
    indent: usize,
    label: usize,
    padding: usize,
    text: usize,
}

impl ColumnRenderer {
    /// Produce a renderer whose text column fills the remainder of `total_width`.
    /// The text column never drops below the minimum width, even if that overflows the total.
    pub(crate) fn guided(indent: usize, label: usize, padding: usize, total_width: usize) -> Self {
        let fixed = indent + label + padding;
        let target = (total_width as f64 * TARGET_TOTAL_FACTOR) as usize;

        let text = if fixed + MINIMUM_TEXT_WIDTH <= target {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {fixed} fit within the target {target}.  Selecting text width: {}.", target - fixed);
            }

            target - fixed
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {fixed} do not fit within the target {target}.  Selecting text width: {MINIMUM_TEXT_WIDTH}.");
            }

            MINIMUM_TEXT_WIDTH
        };

        Self::new(indent, label, padding, text)
    }

    pub(crate) fn new(indent: usize, label: usize, padding: usize, text: usize) -> Self {
        // The text column must allow at least 1 character plus a hyphen.
        assert!(text >= 2);
        Self {
            indent,
            label,
            padding,
            text,
        }
    }

    pub(crate) fn render(&self, label: &str, text: &str) -> Vec<String> {
        let ColumnRenderer {
            indent,
            label: label_width,
            padding,
            text: text_width,
        } = *self;
        let lines = chunk(text, text_width);

        if lines.is_empty() {
            return vec![format!("{:indent$}{label}", "")];
        }

        lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let label = if i == 0 { label } else { "" };
                format!("{:indent$}{label:label_width$}{:padding$}{line}", "", "")
            })
            .collect()
    }
}

// Break the paragraph into lines of at most `width` characters, splitting on whitespace.
fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split_whitespace() {
        if current.is_empty() {
            current = hyphenate(word, width, &mut lines);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = hyphenate(word, width, &mut lines);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

// Push the full-width pieces of `word` into `lines`, returning the final (partial) piece.
fn hyphenate(word: &str, width: usize, lines: &mut Vec<String>) -> String {
    let characters: Vec<char> = word.chars().collect();
    let mut remaining = characters.as_slice();

    while remaining.len() > width {
        let (head, tail) = remaining.split_at(width - 1);
        lines.push(format!("{}-", head.iter().collect::<String>()));
        remaining = tail;
    }

    remaining.iter().collect()
}

/// The sink for everything a [`crate::GeneralParser`] displays to the user.
pub trait UserInterface {
    /// Display a regular message (ex: the help message).
    fn print(&self, message: String);

    /// Display a parse error.
    fn print_error(&self, error: ParseError);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("Parse error: {error}");
    }
}
