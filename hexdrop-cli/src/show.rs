//! Show command - render a layout

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use hexdrop_core::{Cell, Color, HexBoard, RenderStyle};

#[derive(Args)]
pub struct ShowArgs {
    /// Layout string, e.g. "yp/wg/p"
    pub layout: String,

    /// Output the board as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CellReport {
    index: usize,
    row: usize,
    column: usize,
    color: Color,
}

#[derive(Serialize)]
struct BoardReport {
    layout: HexBoard,
    cells: Vec<CellReport>,
}

pub fn run(args: ShowArgs, style: RenderStyle) -> Result<()> {
    let board = load(&args.layout)?;
    tracing::info!("Showing board with {} occupied cells", board.occupied().count());

    if args.json {
        let report = report(board);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", board.render(style));
    }
    Ok(())
}

pub(crate) fn load(layout: &str) -> Result<HexBoard> {
    HexBoard::from_layout(layout).with_context(|| format!("Failed to load layout {:?}", layout))
}

/// Occupied cells only
fn report(board: HexBoard) -> BoardReport {
    let cells = Cell::all()
        .filter_map(|cell| {
            board.color_at(cell).map(|color| CellReport {
                index: cell.index(),
                row: cell.row(),
                column: cell.column(),
                color,
            })
        })
        .collect();
    BoardReport {
        layout: board,
        cells,
    }
}
