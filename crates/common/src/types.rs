//! Core data types for the nsight signature engine
//!
//! - `PortSet` is hash-backed for constant-time membership checks
//! - `Signature` keeps its port sets ordered so every list derived from it
//!   comes out in ascending numeric order, independent of declaration order

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// A TCP port number. Any positive value is accepted, including ones above
/// the conventional 65535 limit.
pub type Port = u32;

/// Set of TCP ports observed open on a single host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortSet {
    ports: HashSet<Port>,
}

impl PortSet {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the port was not already present.
    #[inline]
    pub fn insert(&mut self, port: Port) -> bool {
        self.ports.insert(port)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, port: Port) -> bool {
        self.ports.contains(&port)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Ports in ascending order, for display.
    #[must_use]
    pub fn sorted(&self) -> Vec<Port> {
        let mut ports: Vec<Port> = self.ports.iter().copied().collect();
        ports.sort_unstable();
        ports
    }
}

impl FromIterator<Port> for PortSet {
    fn from_iter<I: IntoIterator<Item = Port>>(iter: I) -> Self {
        Self {
            ports: iter.into_iter().collect(),
        }
    }
}

/// A composite service signature: every `required` port must be open for a
/// match, `optional` ports only corroborate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub required: BTreeSet<Port>,
    #[serde(default)]
    pub optional: BTreeSet<Port>,
}

impl Signature {
    #[must_use]
    pub fn new<S, I>(name: S, required: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = Port>,
    {
        Self {
            name: name.into(),
            required: required.into_iter().collect(),
            optional: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_optional<I: IntoIterator<Item = Port>>(mut self, optional: I) -> Self {
        self.optional = optional.into_iter().collect();
        self
    }
}

/// A signature that matched, with its optional ports split into those seen
/// open and those not. All three port lists are ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub name: String,
    pub required: Vec<Port>,
    pub present: Vec<Port>,
    pub missing: Vec<Port>,
}

impl MatchOutcome {
    #[inline]
    #[must_use]
    pub fn has_optional(&self) -> bool {
        !self.present.is_empty() || !self.missing.is_empty()
    }
}

/// Result of evaluating one port set against a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// The port set was empty, so no signature was evaluated.
    NoOpenPorts,
    /// The catalog was evaluated; `outcomes` may be empty.
    Evaluated {
        open_ports: Vec<Port>,
        outcomes: Vec<MatchOutcome>,
    },
}

impl Report {
    #[must_use]
    pub fn outcomes(&self) -> &[MatchOutcome] {
        match self {
            Report::NoOpenPorts => &[],
            Report::Evaluated { outcomes, .. } => outcomes,
        }
    }

    #[must_use]
    pub fn open_ports(&self) -> &[Port] {
        match self {
            Report::NoOpenPorts => &[],
            Report::Evaluated { open_ports, .. } => open_ports,
        }
    }

    #[inline]
    #[must_use]
    pub fn has_matches(&self) -> bool {
        !self.outcomes().is_empty()
    }
}
