//! Plain-text table layout.

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridColumn {
    pub label: String,
    pub align: Align,
}

impl GridColumn {
    pub fn new(label: impl Into<String>, align: Align) -> Self {
        Self {
            label: label.into(),
            align,
        }
    }
}

/// Rows of already formatted cells laid out under a header.
#[derive(Debug, Clone, Default)]
pub struct TextGrid {
    columns: Vec<GridColumn>,
    rows: Vec<Vec<String>>,
    filler_rows: usize,
    empty_message: Option<String>,
    footer: Option<String>,
}

const GAP: &str = "  ";

impl TextGrid {
    pub fn new(columns: Vec<GridColumn>) -> Self {
        Self {
            columns,
            ..Default::default()
        }
    }

    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Blank lines appended after the rows so short pages keep their height.
    pub fn with_filler_rows(mut self, filler_rows: usize) -> Self {
        self.filler_rows = filler_rows;
        self
    }

    /// Line shown instead of rows when there are none.
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = Some(message.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(column.label.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn line(&self, cells: &[String], widths: &[usize]) -> String {
        let padded: Vec<String> = self
            .columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (column, width))| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                pad(cell, *width, column.align)
            })
            .collect();
        padded.join(GAP).trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let total_width = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);

        let labels: Vec<String> = self.columns.iter().map(|c| c.label.clone()).collect();
        let mut lines = vec![self.line(&labels, &widths), "-".repeat(total_width)];

        for row in &self.rows {
            lines.push(self.line(row, &widths));
        }

        if self.rows.is_empty() {
            if let Some(message) = &self.empty_message {
                lines.push(pad_center(message, total_width));
            }
        }

        lines.extend(std::iter::repeat(String::new()).take(self.filler_rows));

        if let Some(footer) = &self.footer {
            lines.push("-".repeat(total_width));
            lines.push(pad(footer, total_width, Align::Right));
        }

        lines.join("\n")
    }
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    match align {
        Align::Left => format!("{}{}", cell, " ".repeat(fill)),
        Align::Right => format!("{}{}", " ".repeat(fill), cell),
    }
}

fn pad_center(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    format!("{}{}", " ".repeat(fill / 2), cell)
}
