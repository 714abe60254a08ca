// src/locate.rs
// One-level child location. Deep search is deliberately unsupported:
// every descent step names exactly where it expects its target, and a
// miss stays local to that step.

use crate::tree::Node;

/// Child predicate. Plain fn pointers so strategy tables can be consts.
pub type Pred = fn(&Node) -> bool;

/// One way to reach a target node from a parent.
#[derive(Clone, Copy)]
pub enum Strategy {
    /// Scan the parent's direct children.
    Direct(Pred),
    /// Find an intermediate child first, then scan *its* children.
    Nested { via: Pred, then: Pred },
}

/// First direct child satisfying `pred`. Absent `children` means
/// not found, never an error.
pub fn find_child<'t>(node: &'t Node, pred: impl Fn(&Node) -> bool) -> Option<&'t Node> {
    node.children().iter().find(|c| pred(c))
}

/// Try each strategy in order; first success wins.
pub fn locate<'t>(node: &'t Node, strategies: &[Strategy]) -> Option<&'t Node> {
    strategies.iter().find_map(|s| match *s {
        Strategy::Direct(pred) => find_child(node, pred),
        Strategy::Nested { via, then } => {
            find_child(node, via).and_then(|mid| find_child(mid, then))
        }
    })
}
