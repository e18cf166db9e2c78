//! Strictly Rings - command-line driver
//!
//! Loads level packs and drives the rules engine from the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_rings::{
    Campaign, CampaignStatus, GameConfig, GameSession, PegId, Progress, SelectOutcome,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Validate { levels } => run_validate(&levels),
        Command::Play {
            levels,
            level,
            picks,
            json,
        } => run_play(&levels, level, &picks, json),
    }
}

/// Print a summary of each level in the pack
#[instrument]
fn run_validate(path: &Path) -> Result<()> {
    let config = GameConfig::from_file(path)
        .with_context(|| format!("Invalid level pack {}", path.display()))?;

    println!(
        "{}: {} level(s), capacity {}",
        path.display(),
        config.levels().len(),
        config.capacity()
    );
    for (i, level) in config.levels().iter().enumerate() {
        println!(
            "  level {:>2}: {} pegs, {} rings, {} colors, {} mystery",
            i + 1,
            level.peg_count(),
            level.total_ring_count(),
            level.total_distinct_colors(),
            level.mystery().len()
        );
    }
    Ok(())
}

/// Replay peg selections on one level
#[instrument(skip(picks))]
fn run_play(path: &Path, level: usize, picks: &[usize], json: bool) -> Result<()> {
    let config = GameConfig::from_file(path)
        .with_context(|| format!("Invalid level pack {}", path.display()))?;
    let mut campaign = Campaign::resume(config, Progress::new(level, Default::default()))?;

    match campaign.start()? {
        CampaignStatus::Loaded(index) => info!(level = index + 1, "Playing level"),
        CampaignStatus::Finished => anyhow::bail!("Level {} is not in the pack", level),
    }
    print_events(campaign.session_mut(), json)?;
    println!("{}", campaign.session().board().display());

    for &pick in picks {
        let outcome = campaign
            .select_peg(PegId(pick))
            .with_context(|| format!("Selecting peg {}", pick))?;
        if !json {
            println!("{}", describe(&outcome));
        }
        print_events(campaign.session_mut(), json)?;
    }

    println!("{}", campaign.session().board().display());
    if campaign.is_level_won() {
        println!("Level {} cleared!", level + 1);
    } else {
        println!("Level {} not solved yet.", level + 1);
    }
    Ok(())
}

fn print_events(session: &mut GameSession, json: bool) -> Result<()> {
    let events = session.drain_events();
    if json {
        for event in events {
            println!("{}", serde_json::to_string(&event)?);
        }
    }
    Ok(())
}

fn describe(outcome: &SelectOutcome) -> String {
    match outcome {
        SelectOutcome::Ignored { peg } => format!("{}: empty, nothing to lift", peg),
        SelectOutcome::Lifted {
            source,
            count,
            revealed,
        } => match revealed {
            Some(ring) => format!("{}: lifted {} ring(s), revealed {}", source, count, ring),
            None => format!("{}: lifted {} ring(s)", source, count),
        },
        SelectOutcome::Deselected { source } => format!("{}: deselected", source),
        SelectOutcome::Moved {
            from,
            to,
            count,
            won,
        } => {
            let suffix = if *won { " - solved" } else { "" };
            format!("{} -> {}: moved {} ring(s){}", from, to, count, suffix)
        }
        SelectOutcome::Rejected { from, to } => format!("{} -> {}: rejected", from, to),
        SelectOutcome::Aborted { source } => format!("{}: selection reset", source),
    }
}
