mod cli;
mod commands;
mod paths;
mod play;

use std::io::{self, Write};

use clap::Parser;
use services::AppServices;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let data_dir = paths::resolve_data_dir(cli.data_dir);
    tracing::debug!(data_dir = %data_dir.display(), collection = %cli.collection, "opening storage");

    let services = AppServices::new_files(&data_dir, cli.collection)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Groups) {
        Commands::Groups => {
            let loaded = services.question_groups().load_collection()?;
            if loaded.was_seeded() {
                tracing::info!("started from the bundled question groups");
            }
            commands::list_groups(&loaded.collection, &mut out)?;
        }
        Commands::Play { title } => {
            let mut collection = services.question_groups().load_collection()?.collection;
            let stdin = io::stdin();
            let outcome = play::play(
                &services.sessions(),
                &mut collection,
                &title,
                stdin.lock(),
                &mut out,
            )?;
            tracing::info!(
                %title,
                end = ?outcome.end,
                correct = outcome.score.correct_count(),
                incorrect = outcome.score.incorrect_count(),
                "quiz finished"
            );
        }
        Commands::Strategy { choice: None } => {
            commands::show_strategy(&services.settings(), &mut out)?;
        }
        Commands::Strategy {
            choice: Some(choice),
        } => {
            commands::set_strategy(&services.settings(), choice, &mut out)?;
        }
        Commands::Add { title, questions } => {
            let mut collection = services.question_groups().load_collection()?.collection;
            commands::add_group(
                &services.question_groups(),
                &mut collection,
                &title,
                &questions,
                &mut out,
            )?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() {
    init_tracing();

    if let Err(err) = run() {
        // Binary glue: report once and exit.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
