//! Recommend command
//!
//! Builds a session from flags or a RON snapshot, runs the advisor and prints
//! the best action along with the precision tally and any regeneration notice.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use sewing_advisor::{Advisor, Recommendation};
use sewing_content::{ConfigLoader, SnapshotLoader};
use sewing_core::{ClothCondition, EngineConfig, EngineInput, PrecisionTracker, Session};

use crate::config::CliConfig;

/// Recommend the best action for a turn
#[derive(Parser, Debug)]
pub struct Recommend {
    /// Load the turn from a RON snapshot instead of flags
    #[arg(
        long,
        conflicts_with_all = [
            "level",
            "needle",
            "stars",
            "concentration",
            "cloth",
            "turn",
            "grid",
            "precision_attempts",
            "precision_successes",
        ]
    )]
    pub snapshot: Option<PathBuf>,

    /// Player level (0-80)
    #[arg(long, required_unless_present = "snapshot")]
    pub level: Option<u8>,

    /// Needle kind (copper, iron, silver, platinum, super, miracle, light)
    #[arg(long, default_value = "copper")]
    pub needle: String,

    /// Needle star tier (0-3)
    #[arg(long, default_value_t = 0)]
    pub stars: u8,

    /// Current concentration (default: full)
    #[arg(long)]
    pub concentration: Option<u32>,

    /// Cloth condition (normal, weak, strong, strongest)
    #[arg(long, default_value = "normal")]
    pub cloth: String,

    /// Turn number (starts at 1)
    #[arg(long, default_value_t = 1)]
    pub turn: u32,

    /// Nine comma-separated cell values, row by row (default: fresh cloth)
    #[arg(long)]
    pub grid: Option<String>,

    /// Precision skill uses so far
    #[arg(long, default_value_t = 0)]
    pub precision_attempts: u32,

    /// Precision skill uses that landed a critical
    #[arg(long, default_value_t = 0)]
    pub precision_successes: u32,

    /// Engine configuration TOML (overrides SEWING_CONFIG)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// List every candidate with its score
    #[arg(long)]
    pub all: bool,
}

impl Recommend {
    pub fn execute(self, cli_config: &CliConfig) -> Result<()> {
        let config_path = self.config.as_deref().or(cli_config.engine_config.as_deref());
        let engine_config = load_engine_config(config_path)?;

        let session = match &self.snapshot {
            Some(path) => SnapshotLoader::load_session(path)?,
            None => self.session_from_flags()?,
        };
        let input = session.snapshot()?;

        let advisor = Advisor::new(engine_config);
        let recommendation = advisor.recommend(&input);

        print_header(&input);

        if self.all {
            print_candidates(&advisor, &input);
        }

        match &recommendation {
            Recommendation::Action(_) => {
                println!("{} {}", style("Recommendation:").green().bold(), recommendation)
            }
            Recommendation::NoValidAction => {
                println!("{}", style(&recommendation).red())
            }
        }

        print_precision(session.precision());

        if let Some(notice) = session.regeneration_notice() {
            println!("{}", style(notice).yellow());
        }

        Ok(())
    }

    fn session_from_flags(&self) -> Result<Session> {
        let level = self
            .level
            .context("--level is required unless --snapshot is given")?;
        let loadout = super::parse_loadout(level, &self.needle, self.stars)?;

        let mut session = Session::new(loadout);
        session.set_cloth(ClothCondition::parse(&self.cloth)?);
        session.set_grid(super::parse_grid(self.grid.as_deref())?);
        session.set_turn(self.turn)?;
        if let Some(concentration) = self.concentration {
            session.set_concentration(concentration)?;
        }
        session.set_precision(PrecisionTracker::from_counts(
            self.precision_attempts,
            self.precision_successes,
        )?);

        Ok(session)
    }
}

fn load_engine_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => {
            tracing::debug!("Loading engine config from {}", path.display());
            ConfigLoader::load(path)
                .with_context(|| format!("Failed to load engine config {}", path.display()))
        }
        None => Ok(EngineConfig::default()),
    }
}

fn print_header(input: &EngineInput) {
    println!(
        "{} turn {} | concentration {}/{} | cloth {}",
        style("Sewing:").bold(),
        input.turn(),
        input.concentration(),
        input.max_concentration(),
        input.cloth()
    );
    println!("{}", input.grid());
}

fn print_precision(tracker: &PrecisionTracker) {
    if tracker.attempts() > 0 {
        println!("{} {}", style("Precision crits:").bold(), tracker);
    }
}

fn print_candidates(advisor: &Advisor, input: &EngineInput) {
    let candidates = advisor.evaluate_all(input);
    println!("{} ({})", style("Candidates").bold(), candidates.len());

    for candidate in &candidates {
        println!(
            "  {:<8} {:<24} cost {:>2}  score {:>8.2}",
            candidate.skill.name,
            candidate.target.label(),
            candidate.skill.cost,
            candidate.score.value()
        );
    }
}
