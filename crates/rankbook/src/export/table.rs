//! Boxed, centre-aligned text table.

use std::fmt::Write as _;

use unicode_width::UnicodeWidthStr;

/// ```text
/// +----------+--------+
/// | Name#Tag | Region |
/// +----------+--------+
/// |   a#1    |  EUW1  |
/// +----------+--------+
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row; missing cells render empty, extra cells are dropped.
    pub fn add_row(&mut self, mut cells: Vec<String>) {
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].width())
                    .chain(std::iter::once(header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let border = border_line(&widths);
        let mut output = String::new();

        let _ = writeln!(output, "{}", border);
        let _ = writeln!(output, "{}", row_line(&self.headers, &widths));
        let _ = writeln!(output, "{}", border);
        for row in &self.rows {
            let _ = writeln!(output, "{}", row_line(row, &widths));
        }
        if !self.rows.is_empty() {
            let _ = writeln!(output, "{}", border);
        }

        output.pop();
        output
    }
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line
}

fn row_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, &w) in cells.iter().zip(widths) {
        let pad = w.saturating_sub(cell.width());
        let left = pad / 2;
        let _ = write!(line, " {}{}{} |", " ".repeat(left), cell, " ".repeat(pad - left));
    }
    line
}
