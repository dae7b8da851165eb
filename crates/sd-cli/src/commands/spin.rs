use std::time::Instant;

use colored::Colorize;
use serde::Serialize;

use sd_core::{SpinOutcome, SpinRequest, WheelConfig};

use super::OptionSource;

/// Everything `--json` prints.
#[derive(Serialize)]
struct SpinReport {
    mode: String,
    seed: u64,
    spins: Vec<SpinOutcome>,
    history: Vec<String>,
}

pub fn run(
    source: &OptionSource,
    config: WheelConfig,
    count: u32,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    if count == 0 {
        return Err("--count must be at least 1".into());
    }
    let config = match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    };
    let seed = config.seed;
    let mut controller = source.controller(config)?;

    let mut spins = Vec::with_capacity(count as usize);
    for _ in 0..count {
        match controller
            .request_spin(Instant::now())
            .map_err(|e| format!("spin failed: {e}"))?
        {
            SpinRequest::Started(outcome) => {
                controller.finish_pending();
                spins.push(outcome);
            }
            SpinRequest::Ignored => return Err("spin already in flight".into()),
        }
    }

    if json {
        let report = SpinReport {
            mode: controller.mode().to_string(),
            seed,
            spins,
            history: controller.history().to_vec(),
        };
        let out =
            serde_json::to_string_pretty(&report).map_err(|e| format!("json error: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} {}",
        "Spinning".bold(),
        format!("({count} spins, {} mode, seed={seed})", controller.mode()).dimmed()
    );
    println!();
    for (i, outcome) in spins.iter().enumerate() {
        println!(
            "  {:>3}. {}  {}",
            i + 1,
            outcome.landed.label.green().bold(),
            format!("slice {} at {:.1}\u{b0}", outcome.target_index, outcome.final_rotation)
                .dimmed()
        );
    }
    println!();
    println!("  {}", "History".bold());
    for label in controller.history().iter() {
        println!("    {label}");
    }

    Ok(())
}
