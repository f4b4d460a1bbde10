//! chamber — hydrogen and oxygen atoms bonding into water, one molecule
//! at a time.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use rv_core::{SimConfig, SimRng};
use rv_output::{ConsoleObserver, CsvEventWriter, EventLogObserver, Tee};
use rv_sim::{ChamberConfig, chamber};

// ── Constants ─────────────────────────────────────────────────────────────────

const HYDROGEN:    usize = 10;
const OXYGEN:      usize = 5;
const UNIT_MILLIS: u64   = 1_000; // 1 unit = 1 second
const OUTPUT_DIR:  &str  = "output/chamber";

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = SimConfig { seed: SimRng::from_entropy().random(), unit_millis: UNIT_MILLIS };
    let chamber_config = ChamberConfig { hydrogen: HYDROGEN, oxygen: OXYGEN };

    println!("=== chamber — {HYDROGEN} hydrogen, {OXYGEN} oxygen ===");
    println!("Seed: {}", config.seed);
    println!();

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let log = Arc::new(EventLogObserver::new(CsvEventWriter::new(Path::new(OUTPUT_DIR))?));
    let observer = Arc::new(Tee(ConsoleObserver::new(), log.clone()));

    let t0 = Instant::now();
    let report = chamber::run(&config, &chamber_config, observer)?;
    let elapsed = t0.elapsed();

    if let Some(e) = log.take_error() {
        eprintln!("output error: {e}");
    }

    println!();
    println!(
        "{} molecules in {:.1} s, {} atoms left over",
        report.cycles.len(),
        elapsed.as_secs_f64(),
        report.stranded().count()
    );
    println!("{} events logged to {OUTPUT_DIR}/events.csv", log.rows());

    Ok(())
}
