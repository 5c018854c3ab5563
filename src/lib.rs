//! Iris classification demo: CSV import, offline training,
//! a prediction API and a terminal dashboard.
//!
//! ## Modules
//!
//! - [`sample`] — Samples, species labels, and their invariants
//! - [`dataset`] — CSV and table loading into an in-memory [`dataset::Dataset`]
//! - [`store`] — The append-only `iris` table behind a repository trait
//! - [`import`] — One-shot, all-or-nothing CSV import
//! - [`model`] — Scaler, logistic regression, pipeline, and artifact format
//! - [`predict`] — Prediction service over the on-disk artifact
//! - [`analysis`] — Descriptive statistics per column
//! - [`dto`] — JSON request and response bodies
//! - [`server`] — HTTP API (feature `server`)
//! - [`dashboard`] — Terminal client (feature `client`)
pub mod analysis;
pub mod dataset;
pub mod dto;
pub mod import;
pub mod model;
pub mod predict;
pub mod sample;
pub mod store;

#[cfg(feature = "client")]
pub mod dashboard;
#[cfg(feature = "server")]
pub mod server;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Measurements in centimeters, and anything derived from them.
pub type Feature = f64;
/// Class probabilities and confidence values.
pub type Probability = f64;

// ============================================================================
// SCHEMA PARAMETERS
// ============================================================================
/// Number of features per sample.
pub const N_FEATURES: usize = 4;
/// Number of classes.
pub const N_CLASSES: usize = 3;
/// Feature column names, in feature order.
pub const FEATURES: [&str; N_FEATURES] = [
    "sepal_length",
    "sepal_width",
    "petal_length",
    "petal_width",
];
/// Label column name.
pub const TARGET: &str = "target";
/// All required columns after mapping, in storage order.
pub const COLUMNS: [&str; N_FEATURES + 1] = [
    "sepal_length",
    "sepal_width",
    "petal_length",
    "petal_width",
    "target",
];

// ============================================================================
// TRAINING PARAMETERS
// L-BFGS on the L2-penalized softmax log-loss.
// ============================================================================
/// Inverse regularization strength (larger = weaker penalty).
pub const LOGISTIC_C: f64 = 1.0;
/// Solver iteration cap.
pub const LOGISTIC_MAX_ITERATIONS: u64 = 200;
/// Solver stops once the gradient norm falls below this.
pub const LOGISTIC_TOLERANCE: f64 = 1e-4;
/// Held-out fraction for the stratified split.
pub const SPLIT_TEST_FRACTION: f64 = 0.2;
/// Seed for the stratified split.
pub const SPLIT_SEED: u64 = 42;

// ============================================================================
// DEFAULT LOCATIONS
// Each can be overridden by environment variable or command line flag.
// ============================================================================
/// Default CSV source for import and training.
pub const DEFAULT_CSV_PATH: &str = "sample_data/iris.csv";
/// Default artifact location (`MODEL_PATH`).
pub const DEFAULT_MODEL_PATH: &str = "artifacts/model.bin";
/// Default bind address for the HTTP API (`BIND_ADDR`).
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
/// Default API base for the dashboard (`API_BASE`).
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Artifact path from `MODEL_PATH`, falling back to [`DEFAULT_MODEL_PATH`].
pub fn model_path() -> std::path::PathBuf {
    std::env::var("MODEL_PATH")
        .unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
        .into()
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Log prefix shared by every binary.
#[cfg(feature = "cli")]
const LOG_DIR: &str = "logs";

/// Terminal logging at INFO plus a DEBUG file at `logs/irisdash-<unix secs>.log`.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all(LOG_DIR).expect("create log directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = std::fs::File::create(log_file()).expect("create log file");
    simplelog::CombinedLogger::init(vec![
        simplelog::TermLogger::new(
            log::LevelFilter::Info,
            config.clone(),
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        ),
        simplelog::WriteLogger::new(log::LevelFilter::Debug, config, file),
    ])
    .expect("initialize logger");
}
#[cfg(feature = "cli")]
fn log_file() -> std::path::PathBuf {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    std::path::Path::new(LOG_DIR).join(format!("irisdash-{}.log", secs))
}

/// Ctrl+C exits at once, without waiting on in-flight work.
#[cfg(feature = "cli")]
pub fn kys() {
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        println!();
        log::warn!("ctrl+c, shutting down");
        std::process::exit(0);
    });
}

/// Global interrupt flag for graceful training shutdown.
#[cfg(feature = "cli")]
static INTERRUPTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
/// Optional training deadline from TRAIN_DURATION env var.
#[cfg(feature = "cli")]
static DEADLINE: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();
/// Check if graceful shutdown was requested (via stdin "Q") or deadline reached.
#[cfg(feature = "cli")]
pub fn interrupted() -> bool {
    INTERRUPTED.load(std::sync::atomic::Ordering::Relaxed)
        || DEADLINE
            .get()
            .map_or(false, |d| std::time::Instant::now() >= *d)
}
/// Register graceful interrupt handler. Type "Q" + Enter to stop before the artifact is written.
/// Optionally set TRAIN_DURATION env var (e.g., "30s", "5m") for timed runs.
#[cfg(feature = "cli")]
pub fn brb() {
    if let Ok(duration) = std::env::var("TRAIN_DURATION") {
        if let Some(deadline) = parse_duration(&duration) {
            let _ = DEADLINE.set(std::time::Instant::now() + deadline);
            log::info!("training will stop after {}", duration);
        }
    }
    std::thread::spawn(|| {
        loop {
            let ref mut buffer = String::new();
            match std::io::stdin().read_line(buffer) {
                Ok(0) | Err(_) => break,
                Ok(_) if buffer.trim().to_uppercase() == "Q" => {
                    log::warn!("graceful interrupt requested, artifact will not be written");
                    INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
                    break;
                }
                Ok(_) => continue,
            }
        }
    });
}
/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
#[cfg(feature = "cli")]
fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (num, unit) = s.split_at(s.len().saturating_sub(1));
    let value: u64 = num.parse().ok()?;
    match unit {
        "s" => Some(std::time::Duration::from_secs(value)),
        "m" => Some(std::time::Duration::from_secs(value * 60)),
        "h" => Some(std::time::Duration::from_secs(value * 3600)),
        "d" => Some(std::time::Duration::from_secs(value * 86400)),
        _ => None,
    }
}
