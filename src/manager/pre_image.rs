//! Quantified pre-image over interleaved primed/unprimed variables (§4.5).

use crate::error::EngineError;
use crate::node::NodeId;

use super::DDManager;

impl DDManager {
    /// `∃ X'. T(X, X') ∧ S(X')[X'/X]`: the states from which a transition in
    /// `T` reaches a state in `S`. `S` is written over the *unprimed*
    /// variables; this only gives the right answer if variables were declared
    /// as interleaved (unprimed, primed) pairs, which is checked once here.
    pub fn pre_image(&mut self, t: NodeId, s: NodeId) -> Result<NodeId, EngineError> {
        if !self.vars.is_interleaved() {
            return Err(EngineError::MalformedPreImage {
                detail: "variables must be declared as adjacent (unprimed, primed) pairs".into(),
            });
        }
        self.pre_image_rec(t, s)
    }

    fn pre_image_rec(&mut self, t: NodeId, s: NodeId) -> Result<NodeId, EngineError> {
        if t.is_zero() || s.is_zero() {
            return Ok(NodeId::ZERO);
        }
        if t.is_one() && s.is_one() {
            return Ok(NodeId::ONE);
        }

        let key = (t, s);
        if let Some(&cached) = self.pre_image_cache.get(&key) {
            return Ok(cached);
        }

        let level = self.level_of(t)?.min(self.level_of(s)?);
        let v = self.vars.at_level(level).clone();

        let result = if v.is_primed() {
            // S does not depend on this primed variable (it lives at a lower
            // level, on the unprimed side); only T needs splitting, and the
            // primed variable is existentially quantified away.
            let (t1, t0) = self.cofactor(t, &v)?;
            let w1 = self.pre_image_rec(t1, s)?;
            let w0 = self.pre_image_rec(t0, s)?;
            self.or(w1, w0)?
        } else {
            let primed = self.vars.at_level(level + 1).clone();

            let (t1, t0) = self.cofactor(t, &v)?;
            let (s1, s0) = self.cofactor(s, &v)?;
            let (t11, t10) = self.cofactor(t1, &primed)?;
            let (t01, t00) = self.cofactor(t0, &primed)?;

            let w11 = self.pre_image_rec(t11, s1)?;
            let w10 = self.pre_image_rec(t10, s0)?;
            let w01 = self.pre_image_rec(t01, s1)?;
            let w00 = self.pre_image_rec(t00, s0)?;

            let high = self.or(w11, w10)?;
            let low = self.or(w01, w00)?;
            self.make(&v, high, low)?
        };

        self.pre_image_cache.insert(key, result);
        Ok(result)
    }
}
