use std::{collections::HashSet, fmt::Display};

/// Running counts collected while scanning.
///
/// A `Scanner` keeps one of these for its whole lifetime, so the numbers
/// accumulate across every buffer it is fed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    integers: usize,
    strings: usize,
    comments: usize,
    types: usize,
    type_names: Vec<String>,
    seen_types: HashSet<String>,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    pub fn integers_seen(&self) -> usize {
        self.integers
    }

    pub fn strings_seen(&self) -> usize {
        self.strings
    }

    pub fn comments_seen(&self) -> usize {
        self.comments
    }

    pub fn types_seen(&self) -> usize {
        self.types
    }

    /// Distinct type names in the order they were first seen.
    pub fn distinct_type_names(&self) -> &[String] {
        &self.type_names
    }

    pub(crate) fn record_integer(&mut self) {
        self.integers += 1;
    }

    pub(crate) fn record_string(&mut self) {
        self.strings += 1;
    }

    pub(crate) fn record_comment(&mut self) {
        self.comments += 1;
    }

    pub(crate) fn record_type(&mut self, name: &str) {
        self.types += 1;
        self.remember_type_name(name);
    }

    fn remember_type_name(&mut self, name: &str) {
        if self.seen_types.insert(name.to_string()) {
            self.type_names.push(name.to_string());
        }
    }

    /// Folds `other` into `self`; type names new to `self` keep `other`'s order.
    pub fn merge(&mut self, other: &Statistics) {
        self.integers += other.integers;
        self.strings += other.strings;
        self.comments += other.comments;
        self.types += other.types;

        for name in &other.type_names {
            self.remember_type_name(name);
        }
    }
}

impl Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "INTEGERS found: {}", self.integers)?;
        writeln!(f, "STRINGS found: {}", self.strings)?;
        writeln!(f, "COMMENTS found: {}", self.comments)?;
        writeln!(f, "TYPES found: {}", self.types)?;
        write!(f, "Unique TYPES found: {:?}", self.type_names)
    }
}
