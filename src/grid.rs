use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("input contains no rows")]
    Empty,
    #[error("row {row} is empty")]
    EmptyRow { row: usize },
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("invalid height character {ch:?} at row {row}, column {col}")]
    NonDigit { ch: char, row: usize, col: usize },
}

// up, right, down, left
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heightmap {
    heights: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl Heightmap {
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let mut heights = Vec::new();
        let mut rows = 0usize;
        let mut cols = None;

        for (row, line) in text.lines().enumerate() {
            if line.is_empty() {
                return Err(FormatError::EmptyRow { row });
            }

            let len = line.chars().count();
            let expected = *cols.get_or_insert(len);
            if len != expected {
                return Err(FormatError::RaggedRow { row, len, expected });
            }

            for (col, ch) in line.chars().enumerate() {
                match ch.to_digit(10) {
                    Some(height) => heights.push(height as u8),
                    None => return Err(FormatError::NonDigit { ch, row, col }),
                }
            }

            rows += 1;
        }

        match cols {
            Some(cols) => Ok(Self { heights, rows, cols }),
            None => Err(FormatError::Empty),
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn height(&self, location: (usize, usize)) -> u8 {
        let (row, col) = location;
        assert!(
            row < self.rows && col < self.cols,
            "location out of bounds: ({}, {})",
            row,
            col
        );

        self.heights[row * self.cols + col]
    }

    pub fn neighbors(&self, location: (usize, usize)) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (row, col) = location;
        assert!(
            row < self.rows && col < self.cols,
            "location out of bounds: ({}, {})",
            row,
            col
        );

        NEIGHBOR_OFFSETS.iter().copied().filter_map(move |(dr, dc)| {
            let nr = row as isize + dr;
            let nc = col as isize + dc;

            if nr >= 0 && nc >= 0 && (nr as usize) < self.rows && (nc as usize) < self.cols {
                Some((nr as usize, nc as usize))
            } else {
                None
            }
        })
    }
}

impl Display for Heightmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.heights.chunks(self.cols) {
            for height in row {
                write!(f, "{}", height)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) const EXAMPLE: &str = "\
2199943210
3987894921
9856789892
8767896789
9899965678
";
