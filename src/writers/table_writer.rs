use std::io::Write;

use crate::error::Result;

/// Plain text table without header row or index column. Every column is
/// right-aligned to its widest cell and columns are separated by one space.
#[derive(Debug, Default, Clone)]
pub struct TableWriter {
    rows: Vec<Vec<String>>,
}

impl TableWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut widths = vec![0; columns];
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();

        self.rows
            .iter()
            .map(|row| {
                widths
                    .iter()
                    .enumerate()
                    .map(|(i, width)| {
                        let cell = row.get(i).map(String::as_str).unwrap_or("");
                        format!("{:>width$}", cell, width = *width)
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        writeln!(out, "{}", self.render())?;
        Ok(())
    }
}
