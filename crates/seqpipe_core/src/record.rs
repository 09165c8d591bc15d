//! Records flowing through every pipeline.

use std::fmt;

/// The fixed set of labels a record's name is drawn from.
pub const NAMES: [&str; 6] = ["foo", "bar", "hanako", "taro", "jiro", "kyoko"];

/// An immutable source record.
///
/// Identifiers are assigned in generation order starting at 1, so a
/// record's id is also its 1-based position in the source it came from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Record {
    id: u32,
    name: &'static str,
}

impl Record {
    /// Creates a record.
    #[inline]
    #[must_use]
    pub const fn new(id: u32, name: &'static str) -> Self {
        Self { id, name }
    }

    /// Returns the identifier.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Returns the name label.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if the record carries `name`.
    #[inline]
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.name == name
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record({}, {:?})", self.id, self.name)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.name)
    }
}

/// Looks up the static label equal to `name`.
///
/// Returns `None` if `name` is not one of [`NAMES`].
#[must_use]
pub fn known_name(name: &str) -> Option<&'static str> {
    NAMES.iter().copied().find(|n| *n == name)
}
