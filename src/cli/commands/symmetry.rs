//! Symmetry command - canonical form and orbit of a grid

use std::collections::BTreeSet;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        output::{print_kv, print_section, print_subsection, render_side_by_side},
        parse_grid,
    },
    tictactoe::{D4Transform, canonical_context, orbit},
};

#[derive(Parser, Debug)]
#[command(about = "Show the canonical form and symmetry orbit of a grid")]
pub struct SymmetryArgs {
    /// Grid in the 9-character encoding, row-major
    pub grid: String,

    /// Draw all eight images of the grid
    #[arg(long)]
    pub visualize: bool,
}

pub fn execute(args: SymmetryArgs) -> Result<()> {
    let grid = parse_grid(&args.grid)?;
    let context = canonical_context(&grid);
    let images = orbit(&grid);
    let distinct: BTreeSet<String> = images.iter().map(|g| g.encode()).collect();

    print_section("Symmetry analysis");
    print_kv("Grid", &format!("{:?}", grid.encode()));
    print_kv("Canonical", &context.key.to_string());
    print_kv("Via", &context.transform.to_string());
    print_kv("Distinct images", &distinct.len().to_string());
    print_kv(
        "Stabilizer size",
        &(images.len() / distinct.len()).to_string(),
    );

    if args.visualize {
        print_subsection("Orbit");
        let labelled: Vec<_> = D4Transform::all()
            .into_iter()
            .zip(images)
            .map(|(transform, image)| (transform.to_string(), image))
            .collect();
        for row in labelled.chunks(4) {
            println!("{}\n", render_side_by_side(row));
        }
    }
    Ok(())
}
