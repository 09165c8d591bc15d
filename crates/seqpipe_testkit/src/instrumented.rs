//! Instrumented predicates and transforms.
//!
//! [`Instrumented`] counts every call and remembers which record ids the
//! predicate looked at, so tests can assert exactly which elements a
//! pipeline evaluated.

use seqpipe_core::stats::{counted_predicate, counted_transform, CallCounter, StatsSnapshot};
use seqpipe_core::{Probe, Record};
use std::cell::RefCell;

/// Call-recording probe for tests.
#[derive(Debug, Default)]
pub struct Instrumented {
    predicates: CallCounter,
    transforms: CallCounter,
    inspected: RefCell<Vec<u32>>,
}

impl Instrumented {
    /// Creates an instrument with no recorded calls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counted `record.name == name` predicate, ready to install as a stage.
    ///
    /// Every call also records the record id it inspected.
    pub fn name_filter<'s>(&'s self, name: &'s str) -> impl Fn(&Record) -> bool + 's {
        counted_predicate(&self.predicates, move |record: &Record| {
            self.inspected.borrow_mut().push(record.id());
            record.has_name(name)
        })
    }

    /// Counted `record.name == name` predicate.
    pub fn name_is(&self, record: &Record, name: &str) -> bool {
        self.name_filter(name)(record)
    }

    /// Counted `id > threshold` predicate.
    pub fn id_above(&self, id: u32, threshold: u32) -> bool {
        counted_predicate(&self.predicates, |id: &u32| *id > threshold)(&id)
    }

    /// Counted projection to the record id.
    pub fn id_of(&self, record: &Record) -> u32 {
        counted_transform(&self.transforms, |record: &Record| record.id())(record)
    }

    /// Returns the number of predicate calls.
    #[must_use]
    pub fn predicate_calls(&self) -> u64 {
        self.predicates.get()
    }

    /// Returns the number of transform calls.
    #[must_use]
    pub fn transform_calls(&self) -> u64 {
        self.transforms.get()
    }

    /// Returns both counters.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            predicate_calls: self.predicate_calls(),
            transform_calls: self.transform_calls(),
        }
    }

    /// Returns the ids [`name_is`](Self::name_is) was called on, in call order.
    #[must_use]
    pub fn inspected_ids(&self) -> Vec<u32> {
        self.inspected.borrow().clone()
    }

    /// Returns true if [`name_is`](Self::name_is) ever saw `id`.
    #[must_use]
    pub fn inspected(&self, id: u32) -> bool {
        self.inspected.borrow().contains(&id)
    }

    /// Clears counters and inspected ids.
    pub fn reset(&self) {
        self.predicates.reset();
        self.transforms.reset();
        self.inspected.borrow_mut().clear();
    }
}

impl Probe for Instrumented {
    fn on_predicate(&self) {
        self.predicates.increment();
    }

    fn on_transform(&self) {
        self.transforms.increment();
    }
}
