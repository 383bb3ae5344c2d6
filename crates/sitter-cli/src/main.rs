//! `sitter` CLI — availability, coverage and booking checks over a guardian data file.
//!
//! The data file is the JSON the mock backend serves: `guardians`,
//! `availability`, `availability_exceptions` and `bookings` collections.
//!
//! ## Usage
//!
//! ```sh
//! # Capacity / occupancy / free maps for November
//! sitter --data db.json daily --guardian g1 --from 2025-11-01 --to 2025-12-01
//!
//! # Would this booking request be accepted?
//! sitter --data db.json check --guardian g1 --owner o1 --start 2025-11-05 --end 2025-11-08
//!
//! # First free stretch in the next 60 days
//! SITTER_DATA=db.json sitter next-span --guardian g1 --from 2025-11-01
//!
//! # Evaluate a list of requests, accepting the ones that pass
//! sitter --data db.json batch --requests requests.json --accept
//!
//! # Plan an availability block edit
//! sitter --data db.json slot --guardian g1 --start 2025-12-01 --end 2025-12-10 --merge
//!
//! # Requests without a pet count assume two pets
//! SITTER_DEFAULT_PETS=2 sitter -d db.json check -g g1 -o o1 --start 2025-11-05 --end 2025-11-06
//!
//! # Range helpers (no data file needed)
//! sitter range overlaps 2025-10-01 2025-10-05 2025-10-05 2025-10-10
//! ```
//!
//! Exit status: 0 on success, 1 when a booking or slot is refused, 2 on bad input.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use sitter_engine::coverage::find_next_free_span;
use sitter_engine::range::{covers, days_between, enumerate_days, overlaps};
use sitter_engine::slots::plan_slot_change;
use sitter_engine::{
    check_request, Booking, BookingRequest, BookingStatus, DateRange, Day, EngineConfig, Quote,
    SnapshotCache, Store,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sitter",
    version,
    about = "Guardian availability and booking checks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend data file (JSON)
    #[arg(short, long, global = true, env = "SITTER_DATA")]
    data: Option<PathBuf>,

    /// Log filter, e.g. "info" or "sitter_engine=debug"
    #[arg(long, global = true, env = "SITTER_LOG", default_value = "warn")]
    log_level: String,

    /// Treat this day as today (defaults to the local date)
    #[arg(long, global = true, env = "SITTER_TODAY")]
    today: Option<Day>,

    /// Days scanned by next-span
    #[arg(long, global = true, env = "SITTER_HORIZON_DAYS", default_value_t = 60)]
    horizon_days: u32,

    /// Allow booking checks to start before today
    #[arg(long, global = true)]
    allow_past: bool,

    /// Pets assumed for requests that do not give a count
    #[arg(long, global = true, env = "SITTER_DEFAULT_PETS", default_value_t = 1)]
    default_pets: u32,

    /// Always merge overlapping/adjacent blocks in `slot`
    #[arg(long, global = true, env = "SITTER_MERGE_SLOTS")]
    merge_slots: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print per-day capacity, occupancy and free counts
    Daily {
        #[arg(short, long)]
        guardian: String,
        /// First day of the window
        #[arg(long)]
        from: Day,
        /// Day after the last day of the window
        #[arg(long)]
        to: Day,
    },
    /// Run the booking request guards for one request
    Check {
        #[arg(short, long)]
        guardian: String,
        #[arg(short, long)]
        owner: String,
        #[arg(long)]
        start: Option<Day>,
        #[arg(long)]
        end: Option<Day>,
        /// Number of pets (defaults to 1)
        #[arg(long)]
        pets: Option<u32>,
        /// Nightly price override (minor units); defaults to the guardian profile
        #[arg(long)]
        price_per_night: Option<u64>,
    },
    /// Find the first run of consecutive free days
    NextSpan {
        #[arg(short, long)]
        guardian: String,
        #[arg(long)]
        from: Day,
        #[arg(long, default_value_t = 1)]
        min_free: u32,
    },
    /// Evaluate every request in a JSON array file
    Batch {
        /// JSON file with an array of booking requests
        #[arg(short, long)]
        requests: PathBuf,
        /// Record passing requests as accepted bookings before evaluating the next one
        #[arg(long)]
        accept: bool,
    },
    /// Check an availability block create/edit
    Slot {
        #[arg(short, long)]
        guardian: String,
        #[arg(long)]
        start: Day,
        #[arg(long)]
        end: Day,
        /// Id of the block being edited
        #[arg(long)]
        edit: Option<String>,
        /// Merge overlapping/adjacent blocks instead of rejecting
        #[arg(long)]
        merge: bool,
    },
    /// Half-open range helpers
    Range {
        #[command(subcommand)]
        op: RangeOp,
    },
}

#[derive(Subcommand)]
enum RangeOp {
    /// Do [A_START, A_END) and [B_START, B_END) share a day?
    Overlaps {
        a_start: Day,
        a_end: Day,
        b_start: Day,
        b_end: Day,
    },
    /// Does [OUTER_START, OUTER_END) contain [INNER_START, INNER_END)?
    Covers {
        outer_start: Day,
        outer_end: Day,
        inner_start: Day,
        inner_end: Day,
    },
    /// List the days of [START, END)
    Days { start: Day, end: Day },
}

/// Outcome of one request in a batch.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchResult {
    index: usize,
    guardian_id: String,
    owner_id: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    quote: Option<Quote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {:#}", err);
            process::exit(2);
        }
    }
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the command and return the process exit code.
fn run(cli: Cli) -> Result<i32> {
    let config = EngineConfig {
        scan_horizon_days: cli.horizon_days,
        default_pet_count: cli.default_pets,
        reject_past_dates: !cli.allow_past,
        merge_adjacent_slots: cli.merge_slots,
    };
    let today = cli.today.unwrap_or_else(Day::today);
    debug!(%today, horizon = config.scan_horizon_days, "configuration");

    match cli.command {
        Commands::Range { op } => {
            run_range(op)?;
            Ok(0)
        }
        Commands::Daily { guardian, from, to } => {
            let store = load_store(cli.data.as_deref())?;
            let window = DateRange::new(from, to).context("Invalid --from/--to window")?;
            let daily = store.snapshot_for(&guardian).daily_availability(&window);
            print_json(&daily)?;
            Ok(0)
        }
        Commands::Check {
            guardian,
            owner,
            start,
            end,
            pets,
            price_per_night,
        } => {
            let store = load_store(cli.data.as_deref())?;
            let price = match price_per_night {
                Some(price) => price,
                None => store.guardian(&guardian)?.price_per_night,
            };
            let request = BookingRequest {
                guardian_id: guardian,
                owner_id: owner,
                start,
                end,
                pet_count: pets,
            };
            let snapshot = store.snapshot_for(&request.guardian_id);
            let outcome = check_request(
                &request,
                &snapshot,
                store.bookings_for_owner(&request.owner_id),
                price,
                today,
                &config,
            );
            match outcome {
                Ok(quote) => {
                    print_json(&quote)?;
                    Ok(0)
                }
                Err(refusal) => {
                    eprintln!("{}", refusal);
                    Ok(1)
                }
            }
        }
        Commands::NextSpan {
            guardian,
            from,
            min_free,
        } => {
            let store = load_store(cli.data.as_deref())?;
            let snapshot = store.snapshot_for(&guardian);
            let span = find_next_free_span(&snapshot, from, config.scan_horizon_days, min_free);
            print_json(&span)?;
            Ok(0)
        }
        Commands::Batch { requests, accept } => {
            let mut store = load_store(cli.data.as_deref())?;
            let raw = std::fs::read_to_string(&requests)
                .with_context(|| format!("Failed to read file: {}", requests.display()))?;
            let requests: Vec<BookingRequest> =
                serde_json::from_str(&raw).context("Failed to parse booking requests")?;
            run_batch(&mut store, &requests, accept, today, &config)?;
            Ok(0)
        }
        Commands::Slot {
            guardian,
            start,
            end,
            edit,
            merge,
        } => {
            let store = load_store(cli.data.as_deref())?;
            let snapshot = store.snapshot_for(&guardian);
            let merge = merge || config.merge_adjacent_slots;
            match plan_slot_change(start, end, &snapshot.blocks, edit.as_deref(), merge) {
                Ok(plan) => {
                    print_json(&plan)?;
                    Ok(0)
                }
                Err(refusal) => {
                    eprintln!("{}", refusal);
                    Ok(1)
                }
            }
        }
    }
}

fn run_range(op: RangeOp) -> Result<()> {
    match op {
        RangeOp::Overlaps {
            a_start,
            a_end,
            b_start,
            b_end,
        } => println!("{}", overlaps(a_start, a_end, b_start, b_end)),
        RangeOp::Covers {
            outer_start,
            outer_end,
            inner_start,
            inner_end,
        } => println!("{}", covers(outer_start, outer_end, inner_start, inner_end)),
        RangeOp::Days { start, end } => {
            let days: Vec<Day> = enumerate_days(start, end).collect();
            debug!(count = days_between(start, end), "enumerated days");
            print_json(&days)?;
        }
    }
    Ok(())
}

/// Evaluate requests in order, printing one JSON line per request.
///
/// Snapshots are cached per guardian. With `accept`, each passing request is
/// stored as an accepted booking and that guardian's cache entry is dropped, so
/// later requests see the new occupancy.
fn run_batch(
    store: &mut Store,
    requests: &[BookingRequest],
    accept: bool,
    today: Day,
    config: &EngineConfig,
) -> Result<()> {
    let mut cache = SnapshotCache::new();

    for (index, request) in requests.iter().enumerate() {
        let price = match store.guardian(&request.guardian_id) {
            Ok(profile) => profile.price_per_night,
            Err(unknown) => {
                print_batch_line(&BatchResult {
                    index,
                    guardian_id: request.guardian_id.clone(),
                    owner_id: request.owner_id.clone(),
                    ok: false,
                    quote: None,
                    error: Some(unknown.to_string()),
                })?;
                continue;
            }
        };
        let snapshot = cache.get_or_load(&request.guardian_id, |id| store.snapshot_for(id));
        let outcome = check_request(
            request,
            snapshot,
            store.bookings_for_owner(&request.owner_id),
            price,
            today,
            config,
        );

        let result = match outcome {
            Ok(quote) => {
                if accept {
                    store.bookings.push(accepted_booking(index, &quote));
                    cache.invalidate(&request.guardian_id);
                }
                BatchResult {
                    index,
                    guardian_id: request.guardian_id.clone(),
                    owner_id: request.owner_id.clone(),
                    ok: true,
                    quote: Some(quote),
                    error: None,
                }
            }
            Err(refusal) => BatchResult {
                index,
                guardian_id: request.guardian_id.clone(),
                owner_id: request.owner_id.clone(),
                ok: false,
                quote: None,
                error: Some(refusal.to_string()),
            },
        };
        print_batch_line(&result)?;
    }

    let (hits, misses) = cache.stats();
    info!(requests = requests.len(), hits, misses, "batch finished");
    Ok(())
}

fn print_batch_line(result: &BatchResult) -> Result<()> {
    println!("{}", serde_json::to_string(result)?);
    Ok(())
}

fn accepted_booking(index: usize, quote: &Quote) -> Booking {
    Booking {
        id: format!("batch-{}", index),
        owner_id: quote.owner_id.clone(),
        guardian_id: quote.guardian_id.clone(),
        pet_id: None,
        start: quote.start,
        end: quote.end,
        status: BookingStatus::Accepted,
        pet_count: Some(quote.pet_count),
        deposit_paid: false,
    }
}

fn load_store(path: Option<&Path>) -> Result<Store> {
    let path = path.ok_or_else(|| {
        anyhow::anyhow!("No data file given. Pass --data or set SITTER_DATA")
    })?;
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let store = Store::from_json(&raw)
        .with_context(|| format!("Failed to parse data file: {}", path.display()))?;
    debug!(
        guardians = store.guardians.len(),
        blocks = store.availability.len(),
        bookings = store.bookings.len(),
        "loaded data file"
    );
    Ok(store)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

