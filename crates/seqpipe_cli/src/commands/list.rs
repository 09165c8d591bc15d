//! List command implementation.

use seqpipe_core::Scenario;

/// Runs the list command.
pub fn run() {
    for scenario in Scenario::ALL {
        let marker = if scenario.is_baseline() { " (baseline)" } else { "" };
        println!(
            "{:<20} {:<12} {}{}",
            scenario.name(),
            scenario.family(),
            scenario.description(),
            marker
        );
    }
}
