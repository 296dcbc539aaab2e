//! Node identifiers and the decision-node record they name.

use std::fmt;

/// Depth of a variable in the fixed ordering. Lower levels sit closer to the root.
pub type Level = u32;

/// Level assigned to the two terminals, strictly above any declared variable so
/// `min(level(..))` stays total without special-casing constants at call sites.
pub const TERMINAL_LEVEL: Level = u32::MAX;

/// A handle to a node owned by a [`crate::manager::DDManager`]. Opaque to callers:
/// compare, copy and pass it around, but it cannot be dereferenced without the
/// manager that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub const ZERO: NodeId = NodeId(0);
    pub const ONE: NodeId = NodeId(1);

    pub fn is_terminal(self) -> bool {
        self.0 <= 1
    }

    pub fn is_zero(self) -> bool {
        self == NodeId::ZERO
    }

    pub fn is_one(self) -> bool {
        self == NodeId::ONE
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `if level then high else low`. Stored only for identifiers >= 2; `0` and `1`
/// are sentinels that never get a record of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DDNode {
    pub level: Level,
    pub high: NodeId,
    pub low: NodeId,
}
