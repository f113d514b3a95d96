//! Block building - turning categories into atomic groups of lines
//!
//! A block is the unit the column packer moves around. Its lines are
//! never split across columns.

use crate::layout::LayoutConfig;
use crate::shortcuts::{Category, Shortcut};
use crate::text::{center, format_cell, word_wrap};

/// Atomic group of pre-rendered lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub lines: Vec<String>,
    pub is_header: bool,
    /// Index of the category in display order
    pub category_id: usize,
}

impl Block {
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Whether the first line is blank
    pub fn starts_blank(&self) -> bool {
        self.lines.first().is_some_and(|l| l.trim().is_empty())
    }
}

/// The full ordered block sequence for one run
#[derive(Debug, Clone, Default)]
pub struct BlockSet {
    pub blocks: Vec<Block>,
    pub total_lines: usize,
}

impl BlockSet {
    /// Build header and entry blocks for each category in order
    pub fn build(categories: &[Category<'_>], config: &LayoutConfig) -> Self {
        let mut set = BlockSet::default();

        for (id, category) in categories.iter().enumerate() {
            set.push(header_block(category.name, id, config));
            for shortcut in &category.entries {
                set.push(entry_block(shortcut, id, config));
            }
        }

        set
    }

    fn push(&mut self, block: Block) {
        self.total_lines += block.height();
        self.blocks.push(block);
    }
}

fn header_block(name: &str, category_id: usize, config: &LayoutConfig) -> Block {
    let mut lines = Vec::with_capacity(4);
    // The first category sits at the very top, no gap needed
    if category_id > 0 {
        lines.push(String::new());
    }
    lines.push(center(name, config.column_width));
    lines.push(config.rule_char.to_string().repeat(config.column_width));
    lines.push(String::new());

    Block {
        lines,
        is_header: true,
        category_id,
    }
}

fn entry_block(shortcut: &Shortcut, category_id: usize, config: &LayoutConfig) -> Block {
    let width = config.column_width;
    let mut lines = vec![format_cell(&format!(" {}", shortcut.key), width)];

    for line in word_wrap(&shortcut.description, width.saturating_sub(2)) {
        lines.push(format_cell(&format!("  {}", line), width));
    }
    lines.push(String::new());

    Block {
        lines,
        is_header: false,
        category_id,
    }
}
