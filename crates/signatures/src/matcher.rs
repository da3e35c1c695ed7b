//! Matching of a single signature against a port set

use std::collections::BTreeSet;

use nsight_common::{Port, PortSet, Signature};

/// True iff every required port of `signature` is open in `ports`.
#[inline]
#[must_use]
pub fn matches(ports: &PortSet, signature: &Signature) -> bool {
    signature.required.iter().all(|&p| ports.contains(p))
}

/// Optional ports that are open, ascending.
#[must_use]
pub fn present_optional(ports: &PortSet, optional: &BTreeSet<Port>) -> Vec<Port> {
    optional.iter().copied().filter(|&p| ports.contains(p)).collect()
}

/// Optional ports not in `present`, ascending.
#[must_use]
pub fn missing_optional(optional: &BTreeSet<Port>, present: &[Port]) -> Vec<Port> {
    optional
        .iter()
        .copied()
        .filter(|p| !present.contains(p))
        .collect()
}
