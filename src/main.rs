//! Pokedex command-line front end.
//!
//! A thin presentation layer over the lookup engine: it forwards terms and
//! selections to a [`DexSession`] and prints whatever comes back.
//!
//! ```bash
//! pokedex search charizard
//! pokedex filter fire --moves
//! pokedex color "Fire/Flying"
//! RUST_LOG=debug pokedex --database data/pokedex.db browse
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pokedex_lookup::config::{DATABASE_ENV, DEFAULT_DATABASE_PATH};
use pokedex_lookup::{
    ColorDescriptor, Creature, CreatureCard, DexConfig, DexSession, Domain, FilterOutcome,
    FilterResults, MoveCard, MoveRecord, RecordStore, SearchOutcome, StepOutcome, TypeSelection,
    View,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Look up creatures and moves in a local Pokedex database
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQLite database holding the `creatures` and `moves` tables
    #[arg(
        short = 'd',
        long,
        env = DATABASE_ENV,
        default_value = DEFAULT_DATABASE_PATH,
        value_name = "FILE"
    )]
    database: PathBuf,

    /// Log level used when RUST_LOG is not set (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "POKEDEX_LOG", default_value = "warn")]
    log_level: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find a creature by dex number or name
    Search { term: Vec<String> },
    /// Find moves by name
    Moves { name: Vec<String> },
    /// List records whose type contains the given type name
    Filter {
        type_name: Option<String>,
        /// Filter moves instead of creatures
        #[arg(long)]
        moves: bool,
    },
    /// Show the theme color for a type label such as "Fire/Flying"
    Color { label: Vec<String> },
    /// Interactive browsing: n = next, p = previous, q = quit, anything else searches
    Browse,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_cards<T>(items: &[T], card: impl Fn(&T) -> String) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", card(item));
    }
}

fn creature_card(creature: &Creature) -> String {
    CreatureCard(creature).to_string()
}

fn move_card(move_: &MoveRecord) -> String {
    MoveCard(move_).to_string()
}

fn print_theme(theme: ColorDescriptor) {
    println!("Theme: {}", theme);
}

fn report_search<T: Serialize>(
    outcome: &SearchOutcome<T>,
    json: bool,
    card: impl Fn(&T) -> String,
) -> Result<()> {
    if json {
        return print_json(outcome);
    }
    match outcome {
        SearchOutcome::Matches(matches) => print_cards(matches, card),
        SearchOutcome::NotFound => println!("No matching records."),
        SearchOutcome::EmptyInput => println!("Please enter a number or a name to search."),
    }
    Ok(())
}

fn report_filter<T: Serialize>(
    outcome: &FilterOutcome<T>,
    json: bool,
    card: impl Fn(&T) -> String,
) -> Result<()> {
    if json {
        return print_json(outcome);
    }
    match outcome {
        FilterOutcome::Matches(matches) => print_cards(matches, card),
        FilterOutcome::NotFound => println!("No records have that type."),
        FilterOutcome::NoSelection => println!("Please choose a type to filter by."),
    }
    Ok(())
}

fn report_step(outcome: &StepOutcome, json: bool) -> Result<()> {
    if json {
        return print_json(outcome);
    }
    match outcome {
        StepOutcome::Moved(creature) => println!("{}", CreatureCard(creature)),
        StepOutcome::AtFirst => println!("Already at the first record."),
        StepOutcome::AtLast => println!("Already at the last record."),
    }
    Ok(())
}

fn browse<S: RecordStore>(session: &mut DexSession<S>, json: bool) -> Result<()> {
    session.enter(View::CreatureSearch);
    println!(
        "Browsing from #{:03}. n = next, p = previous, q = quit.",
        session.cursor().current()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let result = match line.trim() {
            "q" | "quit" => break,
            "n" | "next" => session
                .step_forward()
                .map(|outcome| report_step(&outcome, json)),
            "p" | "prev" => session
                .step_back()
                .map(|outcome| report_step(&outcome, json)),
            term => session
                .search(term)
                .map(|outcome| report_search(&outcome, json, creature_card)),
        };

        // A failed lookup ends that operation, not the session.
        match result {
            Ok(printed) => printed?,
            Err(err) => eprintln!("Error: {}", err),
        }
        if !json {
            print_theme(session.theme());
        }
    }

    session.enter(View::MainMenu);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = DexConfig::new(cli.database);
    let store = config
        .open_store()
        .context("failed to prepare the record store")?;
    info!(database = %config.database_path.display(), "opened record store");
    let mut session = DexSession::new(store);

    match cli.command {
        Command::Search { term } => {
            session.enter(View::CreatureSearch);
            let outcome = session.search(&term.join(" "))?;
            report_search(&outcome, cli.json, creature_card)?;
        }
        Command::Moves { name } => {
            session.enter(View::MoveSearch);
            let outcome = session.search_moves(&name.join(" "))?;
            report_search(&outcome, cli.json, move_card)?;
        }
        Command::Filter { type_name, moves } => {
            session.enter(View::TypeFilter);
            let selection = TypeSelection::from_choice(type_name.as_deref());
            let domain = if moves { Domain::Move } else { Domain::Creature };
            match session.filter_by_type(&selection, domain)? {
                FilterResults::Creatures(outcome) => {
                    report_filter(&outcome, cli.json, creature_card)?
                }
                FilterResults::Moves(outcome) => {
                    report_filter(&outcome, cli.json, move_card)?
                }
            }
        }
        Command::Color { label } => {
            let descriptor = session.resolve_color(&label.join(" "));
            if cli.json {
                print_json(&descriptor)?;
            } else {
                println!("{}", descriptor);
            }
        }
        Command::Browse => browse(&mut session, cli.json)?,
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    run(cli)
}
