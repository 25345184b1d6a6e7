//! PortWatch Headless Simulation Harness
//!
//! Validates the metric store, classifier, selection rules and driver
//! without a renderer. Runs entirely in-process.
//!
//! Usage:
//!   cargo run -p portwatch-simtest
//!   cargo run -p portwatch-simtest -- --verbose
//!   cargo run -p portwatch-simtest -- --seed 42 --config sim.json
//!
//! Set `RUST_LOG=debug` to see per-pass engine logging.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{info, warn};
use portwatch_core::prelude::*;
use portwatch_logic::layout::{lanes, ZoneId};
use portwatch_logic::selection::{CategoryState, SelectionEvent, SelectionState};
use portwatch_logic::thresholds::{classify, legend, MetricKind, Tier};

// ── CLI / config ────────────────────────────────────────────────────────

struct Options {
    verbose: bool,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
}

fn parse_args() -> Result<Options, String> {
    let mut opts = Options {
        verbose: false,
        seed: None,
        config_path: None,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--verbose" | "-v" => opts.verbose = true,
            "--seed" => {
                let raw = args.next().ok_or("--seed needs a value")?;
                let seed = raw
                    .parse::<u64>()
                    .map_err(|_| format!("--seed expects an integer, got '{}'", raw))?;
                opts.seed = Some(seed);
            }
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                opts.config_path = Some(PathBuf::from(path));
            }
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }
    Ok(opts)
}

/// Errors that can occur while loading a config file
#[derive(Debug)]
enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Invalid(StoreError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl From<StoreError> for ConfigError {
    fn from(e: StoreError) -> Self {
        ConfigError::Invalid(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Json(e) => write!(f, "Config parse error: {}", e),
            ConfigError::Invalid(e) => write!(f, "{}", e),
        }
    }
}

fn load_config(path: &Path) -> Result<SimConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)?;
    let config: SimConfig = serde_json::from_str(&raw)?;
    config.validate()?;
    Ok(config)
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn new(name: &str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
        }
    }
}

fn main() {
    env_logger::init();

    let opts = match parse_args() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    let mut config = match &opts.config_path {
        Some(path) => match load_config(path) {
            Ok(c) => {
                info!("Loaded config from {}", path.display());
                c
            }
            Err(e) => {
                eprintln!("error: {}: {}", path.display(), e);
                std::process::exit(2);
            }
        },
        None => SimConfig::default(),
    };
    if opts.seed.is_some() {
        config.seed = opts.seed;
    }
    if config.seed.is_none() {
        config.seed = Some(42);
        warn!("No seed given; using 42 for a reproducible run");
    }

    println!("=== PortWatch Simulation Harness ===\n");
    let verbose = opts.verbose;
    let mut results = Vec::new();

    // 1. Store generation
    results.extend(validate_generation(&config, verbose));

    // 2. Clamp invariant under long runs
    results.extend(validate_clamp_invariant(&config, verbose));

    // 3. Classifier boundaries
    results.extend(validate_classifier(verbose));

    // 4. Trend cache
    results.extend(validate_trends(&config, verbose));

    // 5. Selection scenarios
    results.extend(validate_selection(verbose));

    // 6. Threaded driver lifecycle
    results.extend(validate_driver(&config, verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Generation ───────────────────────────────────────────────────────

fn validate_generation(config: &SimConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Store Generation ---");
    let mut results = Vec::new();

    let engine = match SimulationEngine::new(config.clone()) {
        Ok(e) => e,
        Err(e) => {
            results.push(TestResult::new("engine_new", false, e.to_string()));
            return results;
        }
    };
    let store = engine.store();

    let letters: String = store.all_zones().iter().map(|z| z.id.letter()).collect();
    results.push(TestResult::new(
        "zones_a_to_j",
        letters == "ABCDEFGHIJ",
        format!("zones {}", letters),
    ));

    results.push(TestResult::new(
        "ship_points",
        store.ship_points().len() == config.ship_point_count as usize,
        format!("{} monitor points", store.ship_points().len()),
    ));

    let rows: Vec<&str> = store.empty_blocks().iter().map(|b| b.id.as_str()).collect();
    results.push(TestResult::new(
        "empty_rows",
        rows.len() == 6,
        rows.join(", "),
    ));

    let unknown = store.get_zone_metric("K");
    results.push(TestResult::new(
        "unknown_zone_rejected",
        matches!(unknown, Err(StoreError::UnknownZone(_))),
        "lookup of K fails with UnknownZone",
    ));

    if verbose {
        let s = store.summary();
        println!(
            "  avg BU {:.1}%, avg WT {:.1}min, critical zones {}",
            s.average_utilization, s.average_waiting_time, s.utilization_tiers.critical
        );
    }

    results
}

// ── 2. Clamp invariant ──────────────────────────────────────────────────

fn out_of_range_fields(store: &MetricStore) -> Vec<String> {
    let mut bad = Vec::new();
    for z in store.all_zones() {
        let fields = [
            ("utilization", z.utilization),
            ("waiting_time", z.waiting_time),
            ("plug_status", z.plug_status),
            ("crane_position", z.crane_position),
        ];
        for (name, f) in fields {
            if !f.range().contains(f.value()) {
                bad.push(format!("{}.{}={}", z.id, name, f.value()));
            }
        }
    }
    for p in store.ship_points() {
        if !p.status.range().contains(p.status.value()) {
            bad.push(format!("ship{}.status={}", p.id, p.status.value()));
        }
    }
    for b in store.empty_blocks() {
        let fields = [
            ("to_clean", b.containers_to_clean),
            ("repairing", b.repairing_containers),
            ("forklift_x", b.forklift_x),
        ];
        for (name, f) in fields {
            if !f.range().contains(f.value()) {
                bad.push(format!("{}.{}={}", b.id, name, f.value()));
            }
        }
    }
    bad
}

fn validate_clamp_invariant(config: &SimConfig, _verbose: bool) -> Vec<TestResult> {
    println!("--- Clamp Invariant ---");
    let mut results = Vec::new();

    // 10 zones from 50%, 100 ticks
    let zones: Vec<ZoneMetric> = ZoneId::ALL
        .iter()
        .map(|&id| ZoneMetric::new(id, 50.0, 20.0, 50.0, 250.0))
        .collect();
    let store = MetricStore::from_parts(zones, Vec::new(), Vec::new(), Vec::new());
    let mut violations = 0usize;
    match SimulationEngine::with_store(store, config.clone()) {
        Ok(mut engine) => {
            for _ in 0..100 {
                engine.tick();
                violations += out_of_range_fields(engine.store()).len();
            }
            results.push(TestResult::new(
                "zones_100_ticks",
                violations == 0,
                format!("{} out-of-range readings", violations),
            ));
        }
        Err(e) => results.push(TestResult::new("zones_100_ticks", false, e.to_string())),
    }

    // Forklift in [100, 1600] from 850 with ±25
    let band = FieldRange::new(100.0, 1600.0);
    let row = EmptyBlock::new("Row1", 20.0, 10.0, 850.0, band, -120.0);
    let store = MetricStore::from_parts(Vec::new(), Vec::new(), vec![row], Vec::new());
    let mut wide = config.clone();
    wide.steps.forklift_x = 25.0;
    match SimulationEngine::with_store(store, wide) {
        Ok(mut engine) => {
            let mut min_x = f32::MAX;
            let mut max_x = f32::MIN;
            for _ in 0..1000 {
                engine.tick();
                let x = engine.store().empty_blocks()[0].forklift_x.value();
                min_x = min_x.min(x);
                max_x = max_x.max(x);
            }
            results.push(TestResult::new(
                "forklift_1000_ticks",
                band.contains(min_x) && band.contains(max_x),
                format!("x ranged {:.1}..{:.1}", min_x, max_x),
            ));
        }
        Err(e) => results.push(TestResult::new("forklift_1000_ticks", false, e.to_string())),
    }

    // Full store, one simulated hour at 60 FPS
    match SimulationEngine::new(config.clone()) {
        Ok(mut engine) => {
            let mut bad = Vec::new();
            for _ in 0..(60 * 3600) {
                engine.update(1.0 / 60.0);
            }
            bad.extend(out_of_range_fields(engine.store()));
            results.push(TestResult::new(
                "full_store_one_hour",
                bad.is_empty(),
                if bad.is_empty() {
                    format!("{} zone passes, all in range", engine.simulator().zone_passes())
                } else {
                    bad.join(", ")
                },
            ));
        }
        Err(e) => results.push(TestResult::new("full_store_one_hour", false, e.to_string())),
    }

    results
}

// ── 3. Classifier ───────────────────────────────────────────────────────

fn validate_classifier(verbose: bool) -> Vec<TestResult> {
    println!("--- Threshold Classifier ---");
    let mut results = Vec::new();

    let cases: [(MetricKind, f32, Tier); 12] = [
        (MetricKind::Utilization, 70.0, Tier::Normal),
        (MetricKind::Utilization, 70.01, Tier::Warning),
        (MetricKind::Utilization, 75.0, Tier::Warning),
        (MetricKind::Utilization, 75.01, Tier::Critical),
        (MetricKind::WaitingTime, 20.0, Tier::Normal),
        (MetricKind::WaitingTime, 30.01, Tier::Critical),
        (MetricKind::PlugStatus, 65.0, Tier::Normal),
        (MetricKind::PlugStatus, 65.01, Tier::Warning),
        (MetricKind::ContainersToClean, 40.0, Tier::Warning),
        (MetricKind::ContainersToClean, 40.01, Tier::Critical),
        (MetricKind::RepairingContainers, 10.0, Tier::Normal),
        (MetricKind::RepairingContainers, 20.01, Tier::Critical),
    ];
    let wrong: Vec<String> = cases
        .iter()
        .filter(|(kind, value, tier)| classify(*kind, *value).tier != *tier)
        .map(|(kind, value, tier)| format!("{:?}@{} expected {:?}", kind, value, tier))
        .collect();
    results.push(TestResult::new(
        "boundary_values",
        wrong.is_empty(),
        if wrong.is_empty() {
            format!("{} boundary cases", cases.len())
        } else {
            wrong.join("; ")
        },
    ));

    let pure = MetricKind::ALL
        .iter()
        .all(|&k| (0..=100).all(|v| classify(k, v as f32) == classify(k, v as f32)));
    results.push(TestResult::new("deterministic", pure, "same input, same tier"));

    if verbose {
        for kind in MetricKind::ALL {
            let labels: Vec<String> = legend(kind).iter().map(|e| e.label.clone()).collect();
            println!("  {:?}: {}", kind, labels.join(" | "));
        }
    }

    results
}

// ── 4. Trends ───────────────────────────────────────────────────────────

fn validate_trends(config: &SimConfig, _verbose: bool) -> Vec<TestResult> {
    println!("--- Historical Trends ---");
    let mut results = Vec::new();

    let mut engine = match SimulationEngine::new(config.clone()) {
        Ok(e) => e,
        Err(e) => {
            results.push(TestResult::new("trend_engine", false, e.to_string()));
            return results;
        }
    };

    let first = engine.historical_trend("C").map(|s| s.to_vec());
    engine.tick();
    let second = engine.historical_trend("C").map(|s| s.to_vec());
    let identical = match (&first, &second) {
        (Ok(a), Ok(b)) => a.iter().map(|v| v.to_bits()).eq(b.iter().map(|v| v.to_bits())),
        _ => false,
    };
    results.push(TestResult::new(
        "trend_idempotent",
        identical,
        "zone C trend identical across requests",
    ));

    let len = first.as_ref().map(|s| s.len()).unwrap_or(0);
    results.push(TestResult::new(
        "trend_length",
        len == 24,
        format!("{} points", len),
    ));

    results.push(TestResult::new(
        "trend_unknown_zone",
        engine.historical_trend("Z").is_err(),
        "no series fabricated for unknown id",
    ));

    results
}

// ── 5. Selection ────────────────────────────────────────────────────────

fn validate_selection(_verbose: bool) -> Vec<TestResult> {
    println!("--- Selection State ---");
    let mut results = Vec::new();
    let c = ZoneId::ALL[2];
    let d = ZoneId::ALL[3];

    let mut sel = SelectionState::new();
    sel.apply(SelectionEvent::ClickZone(c));
    sel.apply(SelectionEvent::ClickZone(c));
    results.push(TestResult::new(
        "reclick_toggles_idle",
        sel.zone() == CategoryState::Idle,
        "C then C returns to idle",
    ));

    sel.apply(SelectionEvent::ClickZone(c));
    sel.apply(SelectionEvent::ClickZone(d));
    results.push(TestResult::new(
        "switch_is_direct",
        sel.zone() == CategoryState::Selected(d),
        "C then D selects D",
    ));

    sel.apply(SelectionEvent::ClickShip);
    let lane = lanes()[0];
    sel.apply(SelectionEvent::ClickLane {
        lane,
        position: 200.0,
    });
    results.push(TestResult::new(
        "categories_independent",
        sel.ship_selected() && sel.selected_zone() == Some(d) && sel.selected_lane().is_some(),
        format!("zone {}, ship, {} open together", d, lane.camera_label()),
    ));

    results
}

// ── 6. Driver ───────────────────────────────────────────────────────────

fn validate_driver(config: &SimConfig, _verbose: bool) -> Vec<TestResult> {
    println!("--- Threaded Driver ---");
    let mut results = Vec::new();

    let fast = SimConfig {
        frame_interval_secs: 0.01,
        zone_interval_secs: 0.02,
        empty_block_interval_secs: 0.02,
        ..config.clone()
    };
    let (store, simulator) = match SimulationEngine::new(fast) {
        Ok(e) => e.into_parts(),
        Err(e) => {
            results.push(TestResult::new("driver_start", false, e.to_string()));
            return results;
        }
    };
    let store = shared(store);

    let mut driver = match SimulationDriver::start(&store, simulator) {
        Ok(d) => d,
        Err(e) => {
            results.push(TestResult::new("driver_start", false, e.to_string()));
            return results;
        }
    };
    std::thread::sleep(Duration::from_millis(150));
    let stopped = driver.stop();

    let revision = store.lock().map(|s| s.revision()).unwrap_or(0);
    results.push(TestResult::new(
        "driver_ticks",
        revision > 0,
        format!("{} passes before stop", revision),
    ));

    std::thread::sleep(Duration::from_millis(50));
    let after = store.lock().map(|s| s.revision()).unwrap_or(u64::MAX);
    results.push(TestResult::new(
        "driver_stop_clean",
        stopped.is_some() && !driver.is_running() && after == revision,
        "no writes after stop",
    ));

    results
}
