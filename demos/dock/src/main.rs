//! dock — hackers and peasants crossing a river, one full boat at a time.
//!
//! A boat leaves with four of one side or two of each.  Whoever's arrival
//! completes a boatload rows it.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use rv_core::{SimConfig, SimRng};
use rv_output::{ConsoleObserver, CsvEventWriter, EventLogObserver, Tee};
use rv_sim::{DockConfig, dock};

// ── Constants ─────────────────────────────────────────────────────────────────

const HACKERS:       usize = 6;
const PEASANTS:      usize = 6;
const BOAT_CAPACITY: usize = 4;
const UNIT_MILLIS:   u64   = 1_000; // 1 unit = 1 second
const OUTPUT_DIR:    &str  = "output/dock";

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = SimConfig { seed: SimRng::from_entropy().random(), unit_millis: UNIT_MILLIS };
    let dock_config = DockConfig { hackers: HACKERS, peasants: PEASANTS, capacity: BOAT_CAPACITY };

    println!("=== dock — {HACKERS} hackers, {PEASANTS} peasants, boat of {BOAT_CAPACITY} ===");
    println!("Seed: {}", config.seed);
    println!();

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let log = Arc::new(EventLogObserver::new(CsvEventWriter::new(Path::new(OUTPUT_DIR))?));
    let observer = Arc::new(Tee(ConsoleObserver::new(), log.clone()));

    let t0 = Instant::now();
    let report = dock::run(&config, &dock_config, observer)?;
    let elapsed = t0.elapsed();

    if let Some(e) = log.take_error() {
        eprintln!("output error: {e}");
    }

    println!();
    println!("Done in {:.1} s, {} events logged to {OUTPUT_DIR}/events.csv", elapsed.as_secs_f64(), log.rows());
    println!();
    println!("{:<6} {:<28} {:<8}", "Boat", "Captain", "Load");
    println!("{}", "-".repeat(44));
    for crossing in &report.cycles {
        let captain = crossing.coordinator().map(ToString::to_string).unwrap_or_default();
        println!("{:<6} {:<28} {}", crossing.cycle.0, captain, crossing.members);
    }
    for rider in report.stranded() {
        println!("stranded: {}", rider.badge);
    }

    Ok(())
}
