//! office — students programming and queueing for a teacher who naps
//! whenever nobody needs help.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use rv_core::{SimConfig, SimRng};
use rv_output::{ConsoleObserver, CsvEventWriter, EventLogObserver, Tee};
use rv_sim::{OfficeConfig, office};

// ── Constants ─────────────────────────────────────────────────────────────────

const STUDENTS:    usize = 8;
const CHAIRS:      usize = 5;
const UNIT_MILLIS: u64   = 1_000; // 1 unit = 1 second
const OUTPUT_DIR:  &str  = "output/office";

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = SimConfig { seed: SimRng::from_entropy().random(), unit_millis: UNIT_MILLIS };
    let office_config = OfficeConfig { students: STUDENTS, chairs: CHAIRS };

    println!("=== office — {STUDENTS} students, {CHAIRS} chairs ===");
    println!("Seed: {}", config.seed);
    println!();

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let log = Arc::new(EventLogObserver::new(CsvEventWriter::new(Path::new(OUTPUT_DIR))?));
    let observer = Arc::new(Tee(ConsoleObserver::new(), log.clone()));

    let t0 = Instant::now();
    let report = office::run(&config, &office_config, observer)?;
    let elapsed = t0.elapsed();

    if let Some(e) = log.take_error() {
        eprintln!("output error: {e}");
    }

    println!();
    println!(
        "Done in {:.1} s: {} help sessions, teacher woken {} times",
        elapsed.as_secs_f64(),
        report.teacher.sessions,
        report.teacher.wakeups
    );
    println!("{} events logged to {OUTPUT_DIR}/events.csv", log.rows());
    println!();
    println!("{:<24} {:>8} {:>7} {:>12}", "Student", "Progress", "Visits", "Turned away");
    println!("{}", "-".repeat(54));
    for s in &report.students {
        println!("{:<24} {:>7}% {:>7} {:>12}", s.badge.to_string(), s.progress, s.visits, s.turned_away);
    }

    Ok(())
}
