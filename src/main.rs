use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, info};

use room_cards::dataset::{load_occupants, save_occupants};
use room_cards::roster::{apply_occupant_update, format_rooms, UpdateOutcome};
use room_cards::{CardResult, Config, Generation, RoomCardDocument};

const DEFAULT_OCCUPANTS: &str = "nomiStudenti.csv";
const DEFAULT_SCHEDULES: &str = "datiStanze.csv";
const DEFAULT_OUTPUT: &str = "cartellini_stanze.pdf";

#[derive(Parser)]
#[command(name = "room-cards", version)]
#[command(about = "Printable room cards with occupants and housekeeping times")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render room cards to a PDF
    Generate {
        /// Occupant dataset (CAMERA;STUDENTE 1;STUDENTE 2)
        #[arg(long, default_value = DEFAULT_OCCUPANTS)]
        occupants: PathBuf,

        /// Schedule dataset (CAMERA;C;C-ORE;R1;R1-ORE;R2;R2-ORE)
        #[arg(long, default_value = DEFAULT_SCHEDULES)]
        schedules: PathBuf,

        /// Output PDF
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// JSON layout configuration
        #[arg(long)]
        config: Option<PathBuf>,

        /// Comma-separated room keys to print (default: all)
        #[arg(long)]
        rooms: Option<String>,
    },

    /// Show rooms and their occupants
    List {
        #[arg(long, default_value = DEFAULT_OCCUPANTS)]
        occupants: PathBuf,

        /// Only this room
        #[arg(long)]
        room: Option<String>,
    },

    /// Change the occupants of one room ("-" removes an occupant)
    SetOccupants {
        room: String,

        #[arg(long)]
        first: Option<String>,

        #[arg(long)]
        second: Option<String>,

        #[arg(long, default_value = DEFAULT_OCCUPANTS)]
        occupants: PathBuf,
    },
}

fn generate(
    occupants: &Path,
    schedules: &Path,
    output: &Path,
    config: Option<&Path>,
    rooms: Option<&str>,
) -> CardResult<bool> {
    let config = Config::load(config)?;
    let mut document = RoomCardDocument::load(occupants, schedules, config)?;
    document.select(rooms);
    match document.generate(output)? {
        Generation::Written { path, cards, pages } => {
            println!("{cards} cards on {pages} pages saved as {}", path.display());
            Ok(true)
        }
        Generation::Empty => {
            error!("Could not generate a file: check the requested room keys");
            Ok(false)
        }
    }
}

fn set_occupants(
    path: &Path,
    room: &str,
    first: Option<&str>,
    second: Option<&str>,
) -> CardResult<()> {
    let mut records = load_occupants(path)?;
    let outcome = apply_occupant_update(&mut records, room, first, second);
    match outcome {
        UpdateOutcome::NothingRequested => info!("No names given, nothing to change"),
        UpdateOutcome::Unchanged => info!("Room {room} already has these occupants"),
        UpdateOutcome::Added => info!("Room {room} not found, added"),
        UpdateOutcome::Updated => info!("Room {room} updated"),
    }
    if outcome.is_modified() {
        save_occupants(path, &records)?;
        info!("Saved {}", path.display());
    }
    print!("{}", format_rooms(&records, Some(room)));
    Ok(())
}

fn run(cli: Cli) -> CardResult<bool> {
    match cli.command {
        Command::Generate {
            occupants,
            schedules,
            output,
            config,
            rooms,
        } => generate(
            &occupants,
            &schedules,
            &output,
            config.as_deref(),
            rooms.as_deref(),
        ),
        Command::List { occupants, room } => {
            let records = load_occupants(&occupants)?;
            print!("{}", format_rooms(&records, room.as_deref()));
            Ok(true)
        }
        Command::SetOccupants {
            room,
            first,
            second,
            occupants,
        } => {
            set_occupants(&occupants, &room, first.as_deref(), second.as_deref())?;
            Ok(true)
        }
    }
}

fn exit_code(result: CardResult<bool>) -> ExitCode {
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    exit_code(run(Cli::parse()))
}
