use anyhow::Result;
use clap::Parser;
use console::style;

/// Show max concentration and critical rate for a loadout
#[derive(Parser, Debug)]
pub struct Loadout {
    /// Player level (0-80)
    #[arg(long)]
    pub level: u8,

    /// Needle kind (copper, iron, silver, platinum, super, miracle, light)
    #[arg(long, default_value = "copper")]
    pub needle: String,

    /// Needle star tier (0-3)
    #[arg(long, default_value_t = 0)]
    pub stars: u8,
}

impl Loadout {
    pub fn execute(self) -> Result<()> {
        let loadout = super::parse_loadout(self.level, &self.needle, self.stars)?;

        println!(
            "{} level {} / {} needle / {} stars",
            style("Loadout:").bold(),
            loadout.level(),
            loadout.needle(),
            loadout.stars()
        );
        println!("Max concentration: {}", loadout.max_concentration());
        println!(
            "Base critical rate: {:.1}%",
            loadout.base_crit_rate() * 100.0
        );

        Ok(())
    }
}
