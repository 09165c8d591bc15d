//! Fixed pipeline compositions compared against each other.
//!
//! Two scenario sets are defined. Within a set every candidate computes
//! the same answer; only the evaluation strategy differs.
//!
//! **Top-N**: keep records named `target`, project their ids, take the
//! first `top_n`.
//!
//! | Candidate | Strategy |
//! |-----------|----------|
//! | [`top_n_lazy`] | lazy chain, stops pulling after `top_n` results |
//! | [`top_n_materialized`] | `filter_array` + `map_array` over the whole source, then take |
//!
//! **Multi-stage**: keep `target` records, project to `(id, NAME)`, keep
//! ids above `id_threshold`, project to the id, then consume the result
//! twice.
//!
//! | Candidate | Strategy |
//! |-----------|----------|
//! | [`multi_stage_lazy`] | no materialization; the chain runs on each pass |
//! | [`multi_stage_materialize_once`] | one `to_array` at the end of the chain |
//! | [`multi_stage_materialize_many`] | `to_array` of the source and after every stage |
//!
//! Every scenario takes a [`Probe`] that is notified from inside each
//! predicate and transform.

use crate::config::ScenarioConfig;
use crate::consume::{consume_twice, take_first, Consumer};
use crate::eager::filter_array;
use crate::error::{CoreError, CoreResult};
use crate::lazy::{lazy, EnumerableExt};
use crate::record::Record;
use crate::stats::Probe;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Result of a multi-stage scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MultiStageOutcome {
    /// Number of results one pass over the final sequence yields.
    pub per_pass: usize,
    /// Total elements visited across both passes.
    pub visited: usize,
}

/// Top-N over a lazy chain.
///
/// Source records after the `top_n`-th match are never examined.
pub fn top_n_lazy<P: Probe>(
    source: &[Record],
    config: &ScenarioConfig,
    probe: &P,
    consumer: &mut Consumer,
) -> Vec<u32> {
    let target = config.target_name;
    let ids = lazy(source)
        .filter_lazy(|record| {
            probe.on_predicate();
            record.has_name(target)
        })
        .map_lazy(|record| {
            probe.on_transform();
            record.id()
        });

    take_first(&ids, config.top_n, consumer)
}

/// Top-N over fully materialized arrays.
///
/// Every source record is filtered and every match projected before the
/// first result is taken.
pub fn top_n_materialized<P: Probe>(
    source: &[Record],
    config: &ScenarioConfig,
    probe: &P,
    consumer: &mut Consumer,
) -> Vec<u32> {
    let target = config.target_name;
    let ids = filter_array(source, |record| {
        probe.on_predicate();
        record.has_name(target)
    })
    .map_array(|record| {
        probe.on_transform();
        record.id()
    });

    take_first(&ids, config.top_n, consumer)
}

/// Multi-stage chain consumed twice with no materialization.
///
/// Both passes run all four stages from the source.
pub fn multi_stage_lazy<P: Probe>(
    source: &[Record],
    config: &ScenarioConfig,
    probe: &P,
    consumer: &mut Consumer,
) -> MultiStageOutcome {
    let (target, threshold) = (config.target_name, config.id_threshold);
    let ids = lazy(source)
        .filter_lazy(|record| {
            probe.on_predicate();
            record.has_name(target)
        })
        .map_lazy(|record| {
            probe.on_transform();
            (record.id(), record.name().to_uppercase())
        })
        .filter_lazy(|pair| {
            probe.on_predicate();
            pair.0 > threshold
        })
        .map_lazy(|pair| {
            probe.on_transform();
            pair.0
        });

    let visited = consume_twice(&ids, consumer);
    MultiStageOutcome {
        per_pass: visited / 2,
        visited,
    }
}

/// Multi-stage chain materialized once, at its end, then consumed twice.
pub fn multi_stage_materialize_once<P: Probe>(
    source: &[Record],
    config: &ScenarioConfig,
    probe: &P,
    consumer: &mut Consumer,
) -> MultiStageOutcome {
    let (target, threshold) = (config.target_name, config.id_threshold);
    let ids = lazy(source)
        .filter_lazy(|record| {
            probe.on_predicate();
            record.has_name(target)
        })
        .map_lazy(|record| {
            probe.on_transform();
            (record.id(), record.name().to_uppercase())
        })
        .filter_lazy(|pair| {
            probe.on_predicate();
            pair.0 > threshold
        })
        .map_lazy(|pair| {
            probe.on_transform();
            pair.0
        })
        .to_array();

    let visited = consume_twice(&ids, consumer);
    MultiStageOutcome {
        per_pass: ids.len(),
        visited,
    }
}

/// Multi-stage chain materialized before the first stage and after every
/// stage, then consumed twice.
pub fn multi_stage_materialize_many<P: Probe>(
    source: &[Record],
    config: &ScenarioConfig,
    probe: &P,
    consumer: &mut Consumer,
) -> MultiStageOutcome {
    let (target, threshold) = (config.target_name, config.id_threshold);

    let copied = lazy(source).to_array();
    let named = copied
        .lazy()
        .filter_lazy(|record| {
            probe.on_predicate();
            record.has_name(target)
        })
        .to_array();
    let labelled = named
        .lazy()
        .map_lazy(|record| {
            probe.on_transform();
            (record.id(), record.name().to_uppercase())
        })
        .to_array();
    let above = labelled
        .lazy()
        .filter_lazy(|pair| {
            probe.on_predicate();
            pair.0 > threshold
        })
        .to_array();
    let ids = above
        .lazy()
        .map_lazy(|pair| {
            probe.on_transform();
            pair.0
        })
        .to_array();

    let visited = consume_twice(&ids, consumer);
    MultiStageOutcome {
        per_pass: ids.len(),
        visited,
    }
}

/// Which comparison a scenario belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioFamily {
    /// Filter, project, take the first N.
    TopN,
    /// Four stages consumed twice.
    MultiStage,
}

impl fmt::Display for ScenarioFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::TopN => "top-n",
            Self::MultiStage => "multi-stage",
        })
    }
}

/// Output of [`Scenario::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioOutcome {
    /// Ids kept by a top-N scenario.
    TopN(Vec<u32>),
    /// Counts from a multi-stage scenario.
    MultiStage(MultiStageOutcome),
}

impl ScenarioOutcome {
    /// Returns how many results one pass produced.
    #[must_use]
    pub fn result_count(&self) -> usize {
        match self {
            Self::TopN(ids) => ids.len(),
            Self::MultiStage(outcome) => outcome.per_pass,
        }
    }
}

/// Every candidate pipeline, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// [`top_n_lazy`].
    TopNLazy,
    /// [`top_n_materialized`].
    TopNMaterialized,
    /// [`multi_stage_lazy`].
    MultiStageLazy,
    /// [`multi_stage_materialize_once`].
    MultiStageOnce,
    /// [`multi_stage_materialize_many`].
    MultiStageMany,
}

impl Scenario {
    /// All scenarios, grouped by family.
    pub const ALL: [Scenario; 5] = [
        Scenario::TopNLazy,
        Scenario::TopNMaterialized,
        Scenario::MultiStageLazy,
        Scenario::MultiStageOnce,
        Scenario::MultiStageMany,
    ];

    /// Returns the stable name used on the command line and in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TopNLazy => "top-n-lazy",
            Self::TopNMaterialized => "top-n-materialized",
            Self::MultiStageLazy => "multi-stage-lazy",
            Self::MultiStageOnce => "multi-stage-once",
            Self::MultiStageMany => "multi-stage-many",
        }
    }

    /// Returns a one-line description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::TopNLazy => "lazy filter/project, stop after N results",
            Self::TopNMaterialized => "materialize filter and projection, then take N",
            Self::MultiStageLazy => "four lazy stages, consumed twice",
            Self::MultiStageOnce => "four lazy stages materialized once, consumed twice",
            Self::MultiStageMany => "materialize source and every stage, consumed twice",
        }
    }

    /// Returns the comparison this scenario belongs to.
    #[must_use]
    pub const fn family(self) -> ScenarioFamily {
        match self {
            Self::TopNLazy | Self::TopNMaterialized => ScenarioFamily::TopN,
            Self::MultiStageLazy | Self::MultiStageOnce | Self::MultiStageMany => {
                ScenarioFamily::MultiStage
            }
        }
    }

    /// Returns true for the candidate the rest of its family is measured against.
    #[must_use]
    pub const fn is_baseline(self) -> bool {
        matches!(self, Self::TopNLazy | Self::MultiStageLazy)
    }

    /// Runs the scenario once over `source`.
    pub fn run<P: Probe>(
        self,
        source: &[Record],
        config: &ScenarioConfig,
        probe: &P,
        consumer: &mut Consumer,
    ) -> ScenarioOutcome {
        debug!(scenario = self.name(), source = source.len(), "running scenario");
        match self {
            Self::TopNLazy => ScenarioOutcome::TopN(top_n_lazy(source, config, probe, consumer)),
            Self::TopNMaterialized => {
                ScenarioOutcome::TopN(top_n_materialized(source, config, probe, consumer))
            }
            Self::MultiStageLazy => {
                ScenarioOutcome::MultiStage(multi_stage_lazy(source, config, probe, consumer))
            }
            Self::MultiStageOnce => ScenarioOutcome::MultiStage(multi_stage_materialize_once(
                source, config, probe, consumer,
            )),
            Self::MultiStageMany => ScenarioOutcome::MultiStage(multi_stage_materialize_many(
                source, config, probe, consumer,
            )),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Scenario {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.name() == s)
            .ok_or_else(|| CoreError::unknown_scenario(s))
    }
}
