//! Rendering - writing packed columns out as a text grid

use crate::layout::{LayoutConfig, Packing};
use crate::text::format_cell;
use crossterm::{queue, style::Print};
use std::io::Write;

/// Write `packing` row by row. Every cell is padded to the column width
/// and followed by the column spacing.
pub fn render_grid(out: &mut impl Write, packing: &Packing, config: &LayoutConfig) -> std::io::Result<()> {
    let spacing = " ".repeat(config.column_spacing);

    for row in 0..packing.rows() {
        for col in 0..packing.columns.len() {
            let cell = format_cell(packing.line(col, row), config.column_width);
            queue!(out, Print(cell), Print(&spacing))?;
        }
        queue!(out, Print("\n"))?;
    }

    Ok(())
}

/// Full cheatsheet output: a blank line, the grid, a blank line
pub fn render(out: &mut impl Write, packing: &Packing, config: &LayoutConfig) -> std::io::Result<()> {
    queue!(out, Print("\n"))?;
    render_grid(out, packing, config)?;
    queue!(out, Print("\n"))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Column, Overflow};

    fn packing(columns: Vec<Vec<&str>>, target_height: usize) -> Packing {
        packing_with(columns, target_height, Overflow::Drop)
    }

    fn packing_with(columns: Vec<Vec<&str>>, target_height: usize, overflow: Overflow) -> Packing {
        Packing {
            columns: columns
                .into_iter()
                .map(|lines| Column {
                    lines: lines.into_iter().map(String::from).collect(),
                    blocks: vec![0],
                })
                .collect(),
            target_height,
            dropped: 0,
            overflow,
        }
    }

    fn config() -> LayoutConfig {
        LayoutConfig {
            column_width: 4,
            column_spacing: 1,
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn test_render_grid() {
        let packing = packing(vec![vec!["ab", "c", "d"], vec!["xyz"]], 3);
        let mut buf = Vec::new();
        render_grid(&mut buf, &packing, &config()).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "ab   xyz  \nc         \nd         \n"
        );
    }

    #[test]
    fn test_render_wraps_grid_in_blank_lines() {
        let packing = packing(vec![vec!["a"]], 1);
        let mut buf = Vec::new();
        render(&mut buf, &packing, &config()).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "\na    \n\n");
    }

    #[test]
    fn test_render_empty() {
        let packing = packing(vec![vec![], vec![]], 0);
        let mut buf = Vec::new();
        render(&mut buf, &packing, &config()).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "\n\n");
    }

    #[test]
    fn test_render_stops_at_target_height() {
        let packing = packing(vec![vec!["1", "2", "3"]], 2);
        let mut buf = Vec::new();
        render_grid(&mut buf, &packing, &config()).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "1    \n2    \n");
    }

    #[test]
    fn test_render_extend_shows_rows_past_target() {
        let packing = packing_with(vec![vec!["1", "2", "3"]], 2, Overflow::Extend);
        let mut buf = Vec::new();
        render_grid(&mut buf, &packing, &config()).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 3);
    }
}
