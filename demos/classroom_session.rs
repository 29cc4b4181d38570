//! Classroom Session Example
//!
//! Walks through one lab session from the console: weigh the block, pull it
//! with a few weight loads, fill in the rest automatically, export the table.
//!
//! Usage: `cargo run --example classroom_session [config.toml]`

use std::path::PathBuf;

use friction_lab::{FrictionError, FrictionExperiment, LabConfig, Trial};
use rand::Rng;

fn fmt_opt(value: Option<f64>, digits: usize) -> String {
    match value {
        Some(v) => format!("{v:.digits$}"),
        None => "—".to_string(),
    }
}

fn print_table<R: Rng>(exp: &FrictionExperiment<R>) {
    println!("  #  weights  m, kg    N, N     F, N     mu");
    for t in exp.trials() {
        println!(
            "  {}  {:>7}  {:>6}  {:>7}  {:>7}  {:>6}",
            t.index(),
            t.weights_count(),
            fmt_opt(t.total_mass_kg(), 2),
            fmt_opt(t.normal_force_n(), 2),
            fmt_opt(t.friction_force_n(), 2),
            fmt_opt(t.mu(), 3),
        );
    }
    println!(
        "  mu avg: {}   done: {}",
        fmt_opt(exp.mu_average(), 3),
        exp.export_snapshot().progress_label()
    );
    println!();
}

fn main() -> Result<(), FrictionError> {
    env_logger::init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => LabConfig::from_toml_file(&path)?,
        None => LabConfig {
            seed: Some(42),
            ..Default::default()
        },
    };

    println!("Running friction coefficient lab...\n");
    println!("Configuration:");
    println!("  Block mass: {} kg", config.block_mass_kg);
    println!("  Weight mass: {} kg", config.weight_mass_kg);
    println!("  Noise: {}%", config.noise_percent);
    println!();

    let mut exp = config.build();

    println!("Block weight reading: {:.2} N\n", exp.measure_block_weight_n());

    for weights in [0, 2] {
        let m = exp.measure_and_record(weights)?;
        let index = exp.trial(weights).map(Trial::index).unwrap_or_default();
        println!("Trial {index} ({weights} weights): friction {:.2} N", m.friction_force_n);
    }
    println!();
    print_table(&exp);

    println!("Auto-filling remaining trials...\n");
    exp.auto_fill_all_trials();
    print_table(&exp);
    if exp.is_complete() {
        println!("Finished (4/4)\n");
    }

    println!("Export:");
    println!("{}", exp.export_snapshot().to_json_pretty()?);

    exp.reset();
    println!("\nReset. Done trials: {}", exp.done_count());

    Ok(())
}
