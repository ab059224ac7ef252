use anyhow::Result;
use clap::Parser;
use console::style;
use sewing_core::RegenerationNotice;

/// Show the regeneration notice for a turn
#[derive(Parser, Debug)]
pub struct Regen {
    /// Turn number (starts at 1)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub turn: u32,

    /// Nine comma-separated cell values (default: fresh cloth)
    #[arg(long)]
    pub grid: Option<String>,
}

impl Regen {
    pub fn execute(self) -> Result<()> {
        let grid = super::parse_grid(self.grid.as_deref())?;

        match RegenerationNotice::for_turn(self.turn, &grid) {
            Some(notice) => println!("{}", style(notice).yellow()),
            None => println!(
                "{}",
                style(format!("Turn {} is not a regeneration turn.", self.turn)).dim()
            ),
        }

        Ok(())
    }
}
