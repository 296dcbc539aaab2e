//! Shannon cofactoring (§4.3).

use crate::error::EngineError;
use crate::node::NodeId;
use crate::variable::Variable;

use super::DDManager;

impl DDManager {
    /// Cofactors `n` with respect to `v`, returning `(high, low)`. Callers must
    /// always cofactor on the minimum level among their operands first; asking
    /// for a variable strictly below `n`'s level is an [`EngineError::OrderingViolation`].
    pub fn cofactor(&mut self, n: NodeId, v: &Variable) -> Result<(NodeId, NodeId), EngineError> {
        if n.is_terminal() {
            return Ok((n, n));
        }

        let key = (n, v.level());
        if let Some(&cached) = self.cofactor_cache.get(&key) {
            return Ok(cached);
        }

        let n_level = self.level_of(n)?;
        let result = if v.level() < n_level {
            (n, n)
        } else if v.level() > n_level {
            return Err(EngineError::OrderingViolation {
                parent_level: v.level(),
                child_level: n_level,
            });
        } else {
            self.high_low(n)?
        };

        self.cofactor_cache.insert(key, result);
        Ok(result)
    }
}
