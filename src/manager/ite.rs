//! Memoized Boolean operators (§4.4), all following the same schema: constant
//! short-circuit, then recurse on the minimum variable level among operands.

use crate::error::EngineError;
use crate::node::NodeId;

use super::DDManager;

impl DDManager {
    /// "if `a` then `b` else `c`".
    pub fn ite(&mut self, a: NodeId, b: NodeId, c: NodeId) -> Result<NodeId, EngineError> {
        if a.is_one() {
            return Ok(b);
        }
        if a.is_zero() {
            return Ok(c);
        }

        let key = (a, b, c);
        if let Some(&cached) = self.ite_cache.get(&key) {
            return Ok(cached);
        }

        let level = self
            .level_of(a)?
            .min(self.level_of(b)?)
            .min(self.level_of(c)?);
        let v = self.vars.at_level(level).clone();

        let (a1, a0) = self.cofactor(a, &v)?;
        let (b1, b0) = self.cofactor(b, &v)?;
        let (c1, c0) = self.cofactor(c, &v)?;

        let high = self.ite(a1, b1, c1)?;
        let low = self.ite(a0, b0, c0)?;
        let result = self.make(&v, high, low)?;

        self.ite_cache.insert(key, result);
        Ok(result)
    }

    pub fn not(&mut self, a: NodeId) -> Result<NodeId, EngineError> {
        self.ite(a, NodeId::ZERO, NodeId::ONE)
    }

    pub fn and(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, EngineError> {
        if a.is_zero() || b.is_zero() {
            return Ok(NodeId::ZERO);
        }
        if a.is_one() {
            return Ok(b);
        }
        if b.is_one() {
            return Ok(a);
        }
        if a == b {
            return Ok(a);
        }

        let key = (a, b);
        if let Some(&cached) = self.and_cache.get(&key) {
            return Ok(cached);
        }

        let level = self.level_of(a)?.min(self.level_of(b)?);
        let v = self.vars.at_level(level).clone();

        let (a1, a0) = self.cofactor(a, &v)?;
        let (b1, b0) = self.cofactor(b, &v)?;

        let high = self.and(a1, b1)?;
        let low = self.and(a0, b0)?;
        let result = self.make(&v, high, low)?;

        self.and_cache.insert(key, result);
        Ok(result)
    }

    pub fn or(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, EngineError> {
        if a.is_one() || b.is_one() {
            return Ok(NodeId::ONE);
        }
        // `a == 0` is checked before `a == b`, so `or(0, 0)` resolves to `0`
        // here rather than through the equality shortcut.
        if a.is_zero() {
            return Ok(b);
        }
        if b.is_zero() {
            return Ok(a);
        }
        if a == b {
            return Ok(a);
        }

        let key = (a, b);
        if let Some(&cached) = self.or_cache.get(&key) {
            return Ok(cached);
        }

        let level = self.level_of(a)?.min(self.level_of(b)?);
        let v = self.vars.at_level(level).clone();

        let (a1, a0) = self.cofactor(a, &v)?;
        let (b1, b0) = self.cofactor(b, &v)?;

        let high = self.or(a1, b1)?;
        let low = self.or(a0, b0)?;
        let result = self.make(&v, high, low)?;

        self.or_cache.insert(key, result);
        Ok(result)
    }
}
