use std::fmt;
use std::str::FromStr;

use super::types::{BOARD_SIZE, CELL_COUNT, Mark};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index].is_none()
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.is_none().then_some(index))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn mark_count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    /// Copy of this board with `mark` placed at `index`; `self` is left as is.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[index] = Some(mark);
        next
    }

    pub(super) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Some(mark);
    }

    pub fn to_compact_string(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.map_or('-', |mark| mark.to_char()))
            .collect()
    }
}

impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; CELL_COUNT];
        let mut count = 0;

        for c in s.chars() {
            if c.is_whitespace() || c == '|' || c == '/' {
                continue;
            }
            let cell = match c {
                '-' | '.' | '_' => None,
                other => Some(Mark::from_char(other).ok_or_else(|| {
                    format!("Invalid cell character '{}' at cell {}", other, count)
                })?),
            };
            if count < CELL_COUNT {
                cells[count] = cell;
            }
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(format!(
                "Board must have exactly {} cells, got {}",
                CELL_COUNT, count
            ));
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or('-', |mark| mark.to_char()).to_string())
                .collect();
            write!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}
