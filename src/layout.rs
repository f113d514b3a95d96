//! Layout management - packing blocks into side-by-side columns

use crate::block::{Block, BlockSet};
use crate::config;

/// What happens to blocks left over once the last column is full
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Stop placing blocks; the rest are not shown
    Drop,
    /// Keep appending to the last column past the target height
    Extend,
}

/// Configuration for layouts
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Width of one column in terminal cells
    pub column_width: usize,
    /// Blank cells after each column
    pub column_spacing: usize,
    /// Character used for the rule under category names
    pub rule_char: char,
    pub overflow: Overflow,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_width: config::COLUMN_WIDTH,
            column_spacing: config::COLUMN_SPACING,
            rule_char: config::RULE_CHAR,
            overflow: config::OVERFLOW,
        }
    }
}

impl LayoutConfig {
    /// Column width including the trailing spacing
    pub fn full_column_width(&self) -> usize {
        self.column_width + self.column_spacing
    }

    /// Number of columns that fit in `terminal_width`, at least 1
    pub fn display_columns(&self, terminal_width: usize) -> usize {
        match self.full_column_width() {
            0 => 1,
            full => (terminal_width / full).max(1),
        }
    }
}

/// One vertical strip of the output grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    pub lines: Vec<String>,
    /// Indices into the block sequence, in placement order
    pub blocks: Vec<usize>,
}

impl Column {
    fn place(&mut self, index: usize, lines: &[String]) {
        self.lines.extend_from_slice(lines);
        self.blocks.push(index);
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Result of packing a block sequence
#[derive(Debug, Clone)]
pub struct Packing {
    pub columns: Vec<Column>,
    /// Advisory height every column aims for
    pub target_height: usize,
    /// Blocks that did not fit anywhere
    pub dropped: usize,
    pub overflow: Overflow,
}

impl Packing {
    /// Rows to render. Under `Overflow::Drop` this is the target height, so
    /// lines of an oversized block past it are not shown. `Overflow::Extend`
    /// grows it to the tallest column.
    pub fn rows(&self) -> usize {
        match self.overflow {
            Overflow::Drop => self.target_height,
            Overflow::Extend => self
                .columns
                .iter()
                .map(Column::height)
                .max()
                .unwrap_or(0)
                .max(self.target_height),
        }
    }

    /// Line at (`col`, `row`), empty when the column is shorter
    pub fn line(&self, col: usize, row: usize) -> &str {
        self.columns
            .get(col)
            .and_then(|c| c.lines.get(row))
            .map_or("", String::as_str)
    }
}

/// Lines a block needs at the bottom of a column. A header is kept
/// together with the first entry of its category.
fn min_space_needed(blocks: &[Block], index: usize) -> usize {
    let block = &blocks[index];
    let mut needed = block.height();
    if block.is_header {
        if let Some(next) = blocks.get(index + 1) {
            if !next.is_header && next.category_id == block.category_id {
                needed += next.height();
            }
        }
    }
    needed
}

/// Greedily distribute `set` across `num_columns` columns of near-equal height.
///
/// Blocks are never split. When a block (with its first entry, for headers)
/// would push a non-empty column past the target height, packing moves to the
/// next column and a leading blank line on that block is dropped. What happens
/// after the last column is decided by `config.overflow`.
pub fn pack(set: &BlockSet, num_columns: usize, config: &LayoutConfig) -> Packing {
    let num_columns = num_columns.max(1);
    let target_height = set.total_lines.div_ceil(num_columns);
    let mut columns = vec![Column::default(); num_columns];
    let mut current = 0;
    let mut dropped = 0;

    for (i, block) in set.blocks.iter().enumerate() {
        let needed = min_space_needed(&set.blocks, i);
        let mut lines = block.lines.as_slice();

        let column = &columns[current];
        if !column.is_empty() && column.height() + needed > target_height {
            if current + 1 < num_columns {
                current += 1;
                if block.starts_blank() {
                    lines = &lines[1..];
                }
            } else if config.overflow == Overflow::Drop {
                dropped = set.blocks.len() - i;
                log::warn!(
                    "Out of columns: dropping {} of {} blocks",
                    dropped,
                    set.blocks.len()
                );
                break;
            }
        }

        columns[current].place(i, lines);
    }

    Packing {
        columns,
        target_height,
        dropped,
        overflow: config.overflow,
    }
}
