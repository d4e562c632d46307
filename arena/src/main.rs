//! Arena - command line front end for the Connect 4 agents
//!
//! Subcommands:
//! 1. `battle`: play agent-vs-agent battles and tally the results
//! 2. `time`: measure how long one move takes from the empty board
//! 3. `play`: play against an agent on the terminal

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

mod agents;
mod battle;
mod config;
mod play;
mod timing;

use crate::config::{Cli, Command};

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.validate()?;

    init_tracing(&cli.log_level)?;
    debug!(?cli, "arena starting");

    let settings = cli.agent_settings()?;

    match cli.command {
        Command::Battle {
            agent1,
            agent2,
            games,
            json,
        } => {
            let mut first = settings.build(agent1, 0);
            let mut second = settings.build(agent2, 1);
            info!(agent1 = first.name(), agent2 = second.name(), battles = games, "starting battles");

            let stats = battle::run_battles(first.as_mut(), second.as_mut(), games)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{stats}");
            }
        }
        Command::Time { agent, runs } => {
            let mut agent = settings.build(agent, 0);
            let report = timing::time_agent(agent.as_mut(), runs);
            println!(
                "{}: column {} in {:.3} ms (mean of {}, fastest {:.3} ms, slowest {:.3} ms)",
                report.agent,
                report.column,
                report.mean_ms,
                report.runs,
                report.fastest_ms,
                report.slowest_ms
            );
        }
        Command::Play {
            opponent,
            human_first,
        } => {
            let mut opponent = settings.build(opponent, 0);
            let stdin = io::stdin();
            play::play_interactive(stdin.lock(), io::stdout(), opponent.as_mut(), human_first)?;
        }
    }

    Ok(())
}
