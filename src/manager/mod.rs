//! The ROBDD manager: node store, unique table, operation caches and the
//! operators defined over them.
//!
//! See "Graph-Based Algorithms for Boolean Function Manipulation", Bryant,
//! 10.1109/TC.1986.1676819, for the underlying algorithm this crate implements
//! directly (hash-consed `ite`, recursing on the minimum variable level).

use std::fmt;

use rustc_hash::FxHashMap;

use crate::error::EngineError;
use crate::node::{DDNode, Level, NodeId, TERMINAL_LEVEL};
use crate::variable::{VarReg, Variable};

mod cofactor;
mod dot;
mod gc;
mod ite;
mod pre_image;

#[cfg(test)]
mod tests;

/// The single stateful object owning the DAG. Single-threaded, single-owner:
/// every operation reads and mutates the node store and caches, so two
/// operations on the same manager may never run concurrently.
pub struct DDManager {
    vars: VarReg,
    nodes: FxHashMap<NodeId, DDNode>,
    unique: FxHashMap<(Level, NodeId, NodeId), NodeId>,
    next_id: u32,
    free_ids: Vec<NodeId>,

    cofactor_cache: FxHashMap<(NodeId, Level), (NodeId, NodeId)>,
    ite_cache: FxHashMap<(NodeId, NodeId, NodeId), NodeId>,
    and_cache: FxHashMap<(NodeId, NodeId), NodeId>,
    or_cache: FxHashMap<(NodeId, NodeId), NodeId>,
    pre_image_cache: FxHashMap<(NodeId, NodeId), NodeId>,
}

impl fmt::Debug for DDManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DDManager [{} vars, {} nodes, cache sizes ite={} and={} or={} cofactor={} pre_image={}]",
            self.vars.len(),
            self.nodes.len(),
            self.ite_cache.len(),
            self.and_cache.len(),
            self.or_cache.len(),
            self.cofactor_cache.len(),
            self.pre_image_cache.len(),
        )
    }
}

impl Default for DDManager {
    fn default() -> Self {
        DDManager {
            vars: VarReg::default(),
            nodes: FxHashMap::default(),
            unique: FxHashMap::default(),
            next_id: 2,
            free_ids: Vec::new(),
            cofactor_cache: FxHashMap::default(),
            ite_cache: FxHashMap::default(),
            and_cache: FxHashMap::default(),
            or_cache: FxHashMap::default(),
            pre_image_cache: FxHashMap::default(),
        }
    }
}

impl DDManager {
    pub fn new() -> Self {
        Self::default()
    }

    //------------------------------------------------------------------//
    // Variables

    pub fn declare(&mut self, name: impl Into<String>, primed: bool) -> Variable {
        self.vars.declare(name, primed)
    }

    /// `variable_node(v) ≔ make(v, 1, 0)`: the function "v". Infallible because
    /// terminals are always strictly deeper than any declared variable.
    pub fn variable_node(&mut self, v: &Variable) -> NodeId {
        self.make(v, NodeId::ONE, NodeId::ZERO)
            .expect("terminal children always satisfy the ordering precondition")
    }

    //------------------------------------------------------------------//
    // Constants

    pub fn zero(&self) -> NodeId {
        NodeId::ZERO
    }

    pub fn one(&self) -> NodeId {
        NodeId::ONE
    }

    //------------------------------------------------------------------------//
    // Node store

    pub(crate) fn level_of(&self, id: NodeId) -> Result<Level, EngineError> {
        if id.is_terminal() {
            return Ok(TERMINAL_LEVEL);
        }
        self.nodes
            .get(&id)
            .map(|n| n.level)
            .ok_or(EngineError::UnknownId(id))
    }

    pub(crate) fn high_low(&self, id: NodeId) -> Result<(NodeId, NodeId), EngineError> {
        if id.is_terminal() {
            return Ok((id, id));
        }
        self.nodes
            .get(&id)
            .map(|n| (n.high, n.low))
            .ok_or(EngineError::UnknownId(id))
    }

    fn alloc_id(&mut self) -> NodeId {
        match self.free_ids.pop() {
            Some(id) => id,
            None => {
                let id = NodeId(self.next_id);
                self.next_id += 1;
                id
            }
        }
    }

    /// The sole constructor of decision nodes (§4.2): reduces, hash-conses,
    /// and otherwise allocates a fresh id.
    pub fn make(&mut self, v: &Variable, high: NodeId, low: NodeId) -> Result<NodeId, EngineError> {
        if high == low {
            return Ok(high);
        }

        let level = v.level();
        let high_level = self.level_of(high)?;
        let low_level = self.level_of(low)?;
        if level >= high_level || level >= low_level {
            return Err(EngineError::OrderingViolation {
                parent_level: level,
                child_level: high_level.min(low_level),
            });
        }

        let key = (level, high, low);
        if let Some(&id) = self.unique.get(&key) {
            return Ok(id);
        }

        let id = self.alloc_id();
        self.nodes.insert(id, DDNode { level, high, low });
        self.unique.insert(key, id);
        log::trace!("make: {id} = (level {level}, high {high}, low {low})");
        Ok(id)
    }
}
