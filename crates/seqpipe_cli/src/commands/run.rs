//! Run command implementation.

use seqpipe_core::{Consumer, NoProbe, PipelineStats, Record, Scenario, ScenarioConfig};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Measurements for one scenario.
#[derive(Debug, Serialize)]
pub struct ScenarioReport {
    /// Scenario name.
    pub scenario: &'static str,
    /// Family the scenario is compared within.
    pub family: String,
    /// Whether this is the family baseline.
    pub baseline: bool,
    /// Number of timed iterations.
    pub iterations: u32,
    /// Mean wall time per iteration in microseconds.
    pub mean_micros: f64,
    /// Fastest iteration in microseconds.
    pub min_micros: f64,
    /// Results produced by one pass.
    pub results: usize,
    /// Elements handed to the consumer in one iteration.
    pub consumed: u64,
    /// Predicate evaluations in one iteration.
    pub predicate_calls: u64,
    /// Transform applications in one iteration.
    pub transform_calls: u64,
}

/// Full run report.
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Records in the source collection.
    pub source_size: usize,
    /// Generator seed, if one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Name the first filter stage matches.
    pub target_name: &'static str,
    /// Results kept by top-N scenarios.
    pub top_n: usize,
    /// Id threshold of multi-stage scenarios.
    pub id_threshold: u32,
    /// Per-scenario measurements.
    pub scenarios: Vec<ScenarioReport>,
}

/// Runs the run command.
pub fn run(
    config: &ScenarioConfig,
    scenarios: &[Scenario],
    iterations: u32,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;
    if iterations == 0 {
        return Err("iterations must be at least 1".into());
    }
    if format != "text" && format != "json" {
        return Err(format!("Unknown output format: {format}").into());
    }

    let selected: Vec<Scenario> = if scenarios.is_empty() {
        Scenario::ALL.to_vec()
    } else {
        scenarios.to_vec()
    };

    info!(size = config.source_size, seed = ?config.seed, "building source");
    let source = config.build_source();

    let mut report = RunReport {
        source_size: source.len(),
        seed: config.seed,
        target_name: config.target_name,
        top_n: config.top_n,
        id_threshold: config.id_threshold,
        scenarios: Vec::with_capacity(selected.len()),
    };

    for scenario in selected {
        info!(scenario = scenario.name(), iterations, "measuring");
        report
            .scenarios
            .push(measure(scenario, &source, config, iterations));
    }

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print_text(&report),
    }

    Ok(())
}

fn measure(
    scenario: Scenario,
    source: &[Record],
    config: &ScenarioConfig,
    iterations: u32,
) -> ScenarioReport {
    let mut consumer = Consumer::new();
    let mut total = Duration::ZERO;
    let mut fastest = Duration::MAX;

    for _ in 0..iterations {
        let start = Instant::now();
        let outcome = scenario.run(source, config, &NoProbe, &mut consumer);
        let elapsed = start.elapsed();
        total += elapsed;
        fastest = fastest.min(elapsed);
        debug!(scenario = scenario.name(), ?elapsed, results = outcome.result_count());
    }

    // Counted separately so the probe does not skew the timings.
    let stats = PipelineStats::new();
    consumer.reset();
    let outcome = scenario.run(source, config, &stats, &mut consumer);

    ScenarioReport {
        scenario: scenario.name(),
        family: scenario.family().to_string(),
        baseline: scenario.is_baseline(),
        iterations,
        mean_micros: total.as_secs_f64() * 1e6 / f64::from(iterations),
        min_micros: fastest.as_secs_f64() * 1e6,
        results: outcome.result_count(),
        consumed: consumer.consumed(),
        predicate_calls: stats.predicate_calls(),
        transform_calls: stats.transform_calls(),
    }
}

fn print_text(report: &RunReport) {
    println!("=== seqpipe run ===");
    println!("Source size: {}", report.source_size);
    if let Some(seed) = report.seed {
        println!("Seed: {}", seed);
    }
    println!(
        "Target: {}  Top-N: {}  Id threshold: {}",
        report.target_name, report.top_n, report.id_threshold
    );
    println!();
    println!(
        "{:<20} {:>12} {:>12} {:>8} {:>9} {:>12} {:>12}",
        "Scenario", "Mean (us)", "Min (us)", "Ratio", "Results", "Predicates", "Transforms"
    );

    for entry in &report.scenarios {
        let ratio = baseline_mean(report, &entry.family)
            .filter(|base| *base > 0.0)
            .map(|base| format!("{:.2}", entry.mean_micros / base))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<20} {:>12.1} {:>12.1} {:>8} {:>9} {:>12} {:>12}",
            entry.scenario,
            entry.mean_micros,
            entry.min_micros,
            ratio,
            entry.results,
            entry.predicate_calls,
            entry.transform_calls
        );
    }
}

fn baseline_mean(report: &RunReport, family: &str) -> Option<f64> {
    report
        .scenarios
        .iter()
        .find(|entry| entry.baseline && entry.family == family)
        .map(|entry| entry.mean_micros)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_counts_one_iteration() {
        let config = ScenarioConfig::new().source_size(500).seed(3).top_n(4);
        let source = config.build_source();

        let report = measure(Scenario::TopNMaterialized, &source, &config, 3);
        assert_eq!(report.iterations, 3);
        assert_eq!(report.results, 4);
        assert_eq!(report.consumed, 4);
        assert_eq!(report.predicate_calls, 500);
        assert!(report.min_micros <= report.mean_micros);
    }

    #[test]
    fn ratio_uses_family_baseline() {
        let config = ScenarioConfig::new().source_size(200).seed(5);
        let source = config.build_source();
        let report = RunReport {
            source_size: source.len(),
            seed: config.seed,
            target_name: config.target_name,
            top_n: config.top_n,
            id_threshold: config.id_threshold,
            scenarios: vec![
                measure(Scenario::MultiStageOnce, &source, &config, 1),
                measure(Scenario::MultiStageLazy, &source, &config, 1),
            ],
        };

        assert_eq!(
            baseline_mean(&report, "multi-stage"),
            Some(report.scenarios[1].mean_micros)
        );
        assert_eq!(baseline_mean(&report, "top-n"), None);
    }
}
