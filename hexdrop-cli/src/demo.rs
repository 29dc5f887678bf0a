//! Demo command - the sample board walk-through

use anyhow::{Context, Result};

use hexdrop_core::{Cell, Color, Direction, HexBoard, RenderStyle};

/// Layout loaded by the demo
pub const DEMO_LAYOUT: &str = "yp/wg/p";

pub fn run(style: RenderStyle) -> Result<()> {
    tracing::info!("Running demo with layout {:?}", DEMO_LAYOUT);

    let board = HexBoard::from_layout(DEMO_LAYOUT)
        .with_context(|| format!("Failed to load demo layout {:?}", DEMO_LAYOUT))?;

    print!("{}", board.render(style));
    for color in Color::ALL {
        println!("{} - {}", color, board.bitboard(color));
    }

    let purple = board
        .bitboard(Color::Purple)
        .first()
        .context("Demo layout has no purple cell")?;
    let cell = Cell::new(purple)?;
    match board.neighbor(cell, Direction::BottomLeft) {
        Some(color) => println!("{}", color),
        None => println!("null"),
    }

    Ok(())
}
