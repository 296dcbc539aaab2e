//! DOT-format dump of the current store (§6). A pure fold over node records;
//! not part of the core redesign, kept as a thin projection the way the
//! teacher's own graphviz dumper was.

use crate::node::NodeId;

use super::DDManager;

impl DDManager {
    fn label_of(&self, id: NodeId) -> String {
        if id.is_terminal() {
            return if id.is_one() { "1".into() } else { "0".into() };
        }
        let node = &self.nodes[&id];
        let var = self.vars.at_level(node.level);
        if var.is_primed() {
            format!("{}_prime_id_{}", var.name(), id)
        } else {
            format!("{}_id_{}", var.name(), id)
        }
    }

    /// Dumps every node currently in the store as a DOT digraph. Terminals are
    /// labeled `"0"`/`"1"`; decision nodes are labeled
    /// `"<name>[_prime]_id_<n>"`. Edges to the `0` terminal are elided.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph {\n");

        for &id in self.nodes.keys() {
            let node = &self.nodes[&id];
            let label = self.label_of(id);

            if !node.high.is_zero() {
                out.push_str(&format!(
                    "  \"{label}\" -> \"{}\" [label=\"1\"]\n",
                    self.label_of(node.high)
                ));
            }
            if !node.low.is_zero() {
                out.push_str(&format!(
                    "  \"{label}\" -> \"{}\" [label=\"0\"]\n",
                    self.label_of(node.low)
                ));
            }
        }

        out.push('}');
        out
    }
}
