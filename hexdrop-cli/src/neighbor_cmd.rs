//! Neighbor command - query the neighbors of a cell

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use hexdrop_core::{Cell, Color, Direction, HexBoard};

use crate::show;

#[derive(Args)]
pub struct NeighborArgs {
    /// Layout string, e.g. "yp/wg/p"
    pub layout: String,

    /// Linear cell index (row * 7 + column)
    #[arg(long)]
    pub index: usize,

    /// Single direction to query (all six when omitted)
    #[arg(long)]
    pub direction: Option<Direction>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct NeighborReport {
    direction: Direction,
    color: Option<Color>,
}

pub fn run(args: NeighborArgs) -> Result<()> {
    let board = show::load(&args.layout)?;
    let cell = Cell::new(args.index).with_context(|| format!("Cannot query index {}", args.index))?;

    let directions = match args.direction {
        Some(direction) => vec![direction],
        None => Direction::ALL.to_vec(),
    };
    tracing::info!("Querying {} direction(s) around cell {}", directions.len(), cell);

    let reports = query(&board, cell, &directions);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            match report.color {
                Some(color) => println!("{:<12} {}", report.direction, color),
                None => println!("{:<12} -", report.direction),
            }
        }
    }
    Ok(())
}

fn query(board: &HexBoard, cell: Cell, directions: &[Direction]) -> Vec<NeighborReport> {
    directions
        .iter()
        .map(|&direction| NeighborReport {
            direction,
            color: board.neighbor(cell, direction),
        })
        .collect()
}
