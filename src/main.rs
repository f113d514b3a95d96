//! muxkeys - a column-packed cheatsheet of terminal multiplexer shortcuts

mod block;
mod config;
mod layout;
mod render;
mod shortcuts;
mod term;
mod text;

use anyhow::{Context, Result};
use block::BlockSet;
use layout::LayoutConfig;
use shortcuts::Catalog;
use std::io;

fn main() -> Result<()> {
    env_logger::init();

    run()
}

fn run() -> Result<()> {
    let catalog = Catalog::tmux().with_prefix(config::PREFIX_PLACEHOLDER, &config::prefix_label());
    let layout = LayoutConfig::default();

    let terminal_width = term::terminal_width();
    let num_columns = layout.display_columns(terminal_width);

    let packing = build_packing(&catalog, num_columns, &layout);

    let mut stdout = io::stdout().lock();
    render::render(&mut stdout, &packing, &layout).context("Failed to write cheatsheet")?;

    Ok(())
}

/// Catalog → blocks → columns
fn build_packing(catalog: &Catalog, num_columns: usize, layout: &LayoutConfig) -> layout::Packing {
    for name in catalog.unlisted() {
        log::warn!("Category {:?} is not in the display order and will not be shown", name);
    }

    let blocks = BlockSet::build(&catalog.categories(), layout);
    let packing = layout::pack(&blocks, num_columns, layout);
    log::debug!(
        "Packed {} shortcuts as {} blocks ({} lines) into {} columns, target height {}",
        catalog.shortcuts().len(),
        blocks.blocks.len(),
        blocks.total_lines,
        num_columns,
        packing.target_height
    );
    for (i, column) in packing.columns.iter().enumerate() {
        log::debug!("Column {}: {} blocks, {} lines", i, column.blocks.len(), column.height());
    }

    packing
}
