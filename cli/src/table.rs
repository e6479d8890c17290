// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io, marker::PhantomData};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

pub struct Table<'a, T, C: Column<T>> {
    pub columns: &'a [C],
    pub separator: &'a str,
    pub padding: bool,
    pub data: &'a [T],
}

impl<'a, T, C: Column<T>> Table<'a, T, C> {
    pub fn write_to(&self, w: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        let table: Vec<Vec<String>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let columns = self.compute_columns(&table);

        for (cells, row) in table.into_iter().zip(self.data) {
            let line = columns
                .iter()
                .zip(cells)
                .map(|(col, cell)| col.stylize_cell(row, cell))
                .collect::<Vec<_>>()
                .join(self.separator);

            // Empty trailing cells would otherwise leave padding behind.
            writeln!(w, "{}", line.trim_end())?;
        }

        Ok(())
    }

    fn compute_columns(&self, table: &[Vec<String>]) -> Vec<ColumnStylizer<'a, T, C>> {
        let max_lengths = self.padding.then(|| get_column_max_width(table));

        let mut columns = Vec::with_capacity(self.columns.len());
        for (i, col) in self.columns.iter().enumerate() {
            let padding_direction = col.padding_direction();

            let padding = if max_lengths.is_none()
                || (i == self.columns.len() - 1 && padding_direction == PaddingDirection::Left)
            {
                None // Last column does not need padding if it's left-aligned
            } else {
                Some((max_lengths.as_ref().map_or(0, |m| m[i]), padding_direction))
            };

            columns.push(ColumnStylizer {
                config: col,
                padding,
                _marker: PhantomData,
            });
        }
        columns
    }
}

pub trait Column<T> {
    fn format(&self, data: &T) -> String;
    fn padding_direction(&self) -> PaddingDirection;
    fn get_color(&self, data: &T) -> Option<Color>;
}

#[derive(Debug, Clone)]
struct ColumnStylizer<'a, T, C: Column<T>> {
    config: &'a C,
    /// padding width and direction
    padding: Option<(usize, PaddingDirection)>,
    _marker: PhantomData<T>,
}

impl<T, C: Column<T>> ColumnStylizer<'_, T, C> {
    pub fn stylize_cell(&self, data: &T, cell: String) -> String {
        let cell = match self.padding {
            Some((width, PaddingDirection::Left)) => pad(&cell, width, PaddingDirection::Left),
            Some((width, PaddingDirection::Right)) => pad(&cell, width, PaddingDirection::Right),
            _ => cell,
        };

        match self.config.get_color(data) {
            Some(color) => cell.color(color).to_string(),
            _ => cell,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Pads by display width, so wide characters in course names line up.
fn pad(cell: &str, width: usize, direction: PaddingDirection) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        PaddingDirection::Left => format!("{cell}{fill}"),
        PaddingDirection::Right => format!("{fill}{cell}"),
    }
}

fn get_column_max_width(table: &[Vec<String>]) -> Vec<usize> {
    let mut max_width = vec![0; table.first().map_or(0, Vec::len)];
    for row in table {
        for (i, cell) in row.iter().enumerate() {
            let width = cell.width();
            if width > max_width[i] {
                max_width[i] = width;
            }
        }
    }
    max_width
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Column<(&'static str, u32)> for Upper {
        fn format(&self, data: &(&'static str, u32)) -> String {
            data.0.to_uppercase()
        }

        fn padding_direction(&self) -> PaddingDirection {
            PaddingDirection::Left
        }

        fn get_color(&self, _: &(&'static str, u32)) -> Option<Color> {
            None
        }
    }

    struct Number;

    impl Column<(&'static str, u32)> for Number {
        fn format(&self, data: &(&'static str, u32)) -> String {
            data.1.to_string()
        }

        fn padding_direction(&self) -> PaddingDirection {
            PaddingDirection::Right
        }

        fn get_color(&self, _: &(&'static str, u32)) -> Option<Color> {
            None
        }
    }

    enum Col {
        Upper(Upper),
        Number(Number),
    }

    impl Column<(&'static str, u32)> for Col {
        fn format(&self, data: &(&'static str, u32)) -> String {
            match self {
                Col::Upper(c) => c.format(data),
                Col::Number(c) => c.format(data),
            }
        }

        fn padding_direction(&self) -> PaddingDirection {
            match self {
                Col::Upper(c) => c.padding_direction(),
                Col::Number(c) => c.padding_direction(),
            }
        }

        fn get_color(&self, data: &(&'static str, u32)) -> Option<Color> {
            match self {
                Col::Upper(c) => c.get_color(data),
                Col::Number(c) => c.get_color(data),
            }
        }
    }

    #[test]
    fn pads_columns_to_widest_cell() {
        let columns = [Col::Upper(Upper), Col::Number(Number)];
        let data = [("ab", 1), ("abcd", 100)];
        let table = Table {
            columns: &columns[..],
            separator: " ",
            padding: true,
            data: &data[..],
        };

        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "AB     1\nABCD 100\n");
    }

    #[test]
    fn leaves_no_trailing_whitespace() {
        let columns = [Col::Number(Number), Col::Upper(Upper)];
        let data = [("", 1), ("abcd", 100)];
        let table = Table {
            columns: &columns[..],
            separator: "  ",
            padding: true,
            data: &data[..],
        };

        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "  1\n100  ABCD\n");
    }

    #[test]
    fn writes_nothing_for_empty_data() {
        let columns = [Col::Upper(Upper)];
        let data: [(&'static str, u32); 0] = [];
        let table = Table {
            columns: &columns[..],
            separator: " ",
            padding: true,
            data: &data[..],
        };

        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        assert!(out.is_empty());
    }
}
