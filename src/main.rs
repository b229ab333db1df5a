use chrono::Local;
use clap::Parser;
use diaro::application::{init::init, ConfigService, PersistenceFacade};
use diaro::cli::{self, Cli, Commands};
use diaro::domain::{EntryKey, TimeReference};
use diaro::error::{DiaroError, Result};
use diaro::infrastructure::{DiaryRepository, FileSystemRepository};
use std::io::{Read, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("DIARO_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Turn a date argument into the `YYYY-MM-DD` string the facade expects
fn resolve_date(input: &str) -> String {
    TimeReference::parse(input).resolve(Local::now().date_naive())
}

fn open_session() -> Result<PersistenceFacade> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    Ok(PersistenceFacade::open(repo.root(), &config))
}

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

/// Ask a yes/no question on stdout; anything but yes, including EOF, is no
fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(cli::confirmation_accepted(&answer))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init {
            path,
            database,
            no_database,
        } => {
            let config = init(&path, !no_database, database)?;
            println!("Initialized diaro diary at {}", path.display());
            match &config.database.path {
                Some(db) => println!("Database: {}", db.display()),
                None => println!("Database: none (file only)"),
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemRepository::discover()?);

            if list {
                let config = service.list()?;
                println!("entries_dir = {}", config.entries_dir.display());
                println!("write_header = {}", config.write_header);
                println!(
                    "database = {}",
                    config
                        .database
                        .path
                        .map(|p| p.display().to_string())
                        .unwrap_or_default()
                );
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: diaro config [--list | <key> [<value>]]");
                println!("Valid keys: entries_dir, write_header, database");
            }
            Ok(())
        }
        command => {
            let session = open_session()?;
            let result = run_session_command(&session, command);
            if let Err(e) = session.close() {
                tracing::warn!(error = %e, "closing the database failed");
            }
            result
        }
    }
}

fn run_session_command(session: &PersistenceFacade, command: Commands) -> Result<()> {
    let mode = session.mode();

    match command {
        Commands::Write {
            date,
            message,
            force,
        } => {
            let date = resolve_date(&date);
            let key = EntryKey::parse(&date)?;

            if !force && session.exists(&date)? {
                return Err(DiaroError::Validation(format!(
                    "an entry for {} already exists; pass --force to overwrite it",
                    key
                )));
            }

            let content = match message {
                Some(text) => text,
                None => read_stdin()?,
            };
            let result = session.write(&date, &content)?;
            println!("{}", cli::format_write_result(&key, &result, mode));

            if result.stored_anywhere() {
                Ok(())
            } else {
                Err(DiaroError::WriteFailed(key.to_string()))
            }
        }
        Commands::Show { date } => {
            let date = resolve_date(&date);
            match session.entry(&date)? {
                Some(entry) => {
                    print!("{}", cli::format_entry(&entry));
                    Ok(())
                }
                None => Err(DiaroError::NotFound(date)),
            }
        }
        Commands::Delete { date, yes } => {
            let date = resolve_date(&date);
            let key = EntryKey::parse(&date)?;

            if !yes
                && session.exists(&date)?
                && !confirm(&format!("Delete the entry for {} from every backend?", key))?
            {
                println!("Kept {}", key);
                return Ok(());
            }

            let result = session.delete(&date)?;
            println!("{}", cli::format_delete_result(&key, &result));
            Ok(())
        }
        Commands::List => {
            println!("{}", cli::format_listing(&session.list(), mode).trim_end());
            Ok(())
        }
        Commands::Search { term } => {
            let result = session.search(&term)?;
            println!(
                "{}",
                cli::format_search_result(term.trim(), &result, mode).trim_end()
            );
            Ok(())
        }
        Commands::Status => {
            println!("Mode: {}", mode);
            match session.availability().reason() {
                Some(reason) => println!("Database: unavailable ({})", reason),
                None => println!("Database: connected"),
            }
            if !session.file_backend_ready() {
                println!("Entry directory could not be created");
            }
            Ok(())
        }
        Commands::Init { .. } | Commands::Config { .. } => unreachable!("handled in run"),
    }
}
