//! Counter entity backing a sequence namespace.

/// Namespace used for allocating short codes.
pub const SHORT_LINK_NAMESPACE: &str = "short";

/// Current state of a named sequence.
///
/// `seq` is the last value handed out; a counter that has never been
/// incremented does not exist in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub name: String,
    pub seq: i64,
}

impl Counter {
    pub fn new(name: impl Into<String>, seq: i64) -> Self {
        Self {
            name: name.into(),
            seq,
        }
    }
}
