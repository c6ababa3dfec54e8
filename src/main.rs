use std::path::PathBuf;

use chrono::Local;
use clap::{
    Parser,
    Subcommand,
};
use conjuga::{
    conjugation::conjugation_grid,
    srs::{
        format_interval,
        preview_intervals,
    },
    Catalog,
    ConjugaError,
    DataDir,
    ReviewGrade,
    ReviewSnapshot,
    Session,
    Settings,
};

const DEFAULT_CATALOG_FILE: &str = "verbs.json";

#[derive(Parser)]
#[command(name = "conjuga", about = "Spanish verb conjugation drills", version)]
struct Cli {
    /// Directory for settings and review progress (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Verb catalog JSON file
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every tense and person of a verb
    Table {
        /// Infinitive (case-insensitive)
        infinitive: String,
    },

    /// Show how many cards are due today
    Due,

    /// Reveal the current card and grade it
    Review {
        /// forgot, hard, medium or easy
        grade: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ConjugaError> {
    let data_dir = match cli.data_dir {
        Some(path) => DataDir::at(path),
        None => DataDir::resolve(),
    };
    let settings = Settings::load(&data_dir);
    let catalog_path = cli
        .catalog
        .or_else(|| settings.resolved_catalog_path(&data_dir))
        .unwrap_or_else(|| data_dir.file_path(DEFAULT_CATALOG_FILE));
    let catalog = Catalog::load(&catalog_path)?;

    match cli.command {
        Command::Table { infinitive } => {
            let verb = catalog
                .find_infinitive(&infinitive)
                .ok_or_else(|| ConjugaError::Custom(format!("Unknown verb: {}", infinitive)))?;
            println!("{} ({}), {}", verb.infinitive, verb.english, verb.regularity.display_name());
            for (tense, row) in conjugation_grid(verb) {
                println!("\n{}", tense.display_name());
                for (person, form) in row {
                    println!("  {:<10} {}", person.display_name(), form);
                }
            }
        }
        Command::Due => {
            let now = Local::now();
            let snapshot = ReviewSnapshot::load(&data_dir, &settings.review_state_file)?;
            let session = Session::from_saved(catalog, &settings, snapshot, now);
            println!("{} of {} cards due today", session.due_count(), session.cards().len());
            for scheduled in session.cards().iter().filter(|c| c.is_due_on(now)) {
                println!("  {}", scheduled.card.prompt());
            }
        }
        Command::Review { grade } => {
            let grade = ReviewGrade::from_id(&grade)
                .ok_or_else(|| ConjugaError::Custom(format!("Unknown grade: {}", grade)))?;
            let now = Local::now();
            let snapshot = ReviewSnapshot::load(&data_dir, &settings.review_state_file)?;
            let mut session = Session::from_saved(catalog, &settings, snapshot, now);

            let Some(current) = session.current() else {
                println!("No cards match the current filter");
                return Ok(());
            };
            println!("{}", current.card.headline());
            println!("{}", current.card.prompt());
            println!("Answer: {}", current.card.conjugated_form);
            let previews: Vec<String> = ReviewGrade::ALL
                .iter()
                .zip(preview_intervals(current))
                .map(|(g, days)| format!("{} {}", g.label(), format_interval(days)))
                .collect();
            println!("Options: {}", previews.join(" | "));

            if let Some(graded) = session.grade(grade, now) {
                println!(
                    "{}: next in {} (due {}), streak {}",
                    grade.label(),
                    format_interval(graded.interval_days),
                    graded.due.format("%Y-%m-%d"),
                    graded.streak
                );
            }
            session.review_snapshot(now).save(&data_dir, &settings.review_state_file)?;
            println!("{} cards still due today", session.due_count());
        }
    }

    Ok(())
}
