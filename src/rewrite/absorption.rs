//! Absorption-AND matcher — supplemental and **not** part of the default
//! cascade even when this feature is enabled.
use crate::depth::DepthView;
use crate::network::Network;
use crate::signal::Signal;

/// `AND(s1, s2)` is redundant if either fanin is constant, or if the two
/// fanins are literally identical (same node, same polarity) — both
/// collapse to a single operand.
///
/// Neither case can actually arise through [`Network::create_and`]: its own
/// canonicalization already folds a constant fanin or an identical-fanin
/// pair down to a copy before a node is ever created, so this helper only
/// ever sees these shapes when called directly with hand-built signals, as
/// the tests below do. It is kept anyway so this matcher's checks mirror
/// the pattern it is named after literally, not just in spirit.
fn absorb(s1: Signal, s2: Signal) -> Option<Signal> {
  if let Some(v) = s1.constant_value() { return Some(if v { s2 } else { crate::signal::ZERO }); }
  if let Some(v) = s2.constant_value() { return Some(if v { s1 } else { crate::signal::ZERO }); }
  if s1 == s2 { return Some(s1); }
  None
}

/// Try the absorption rewrite at `n`. Returns the synthesized replacement
/// signal on a match, or `None` if `n` does not satisfy the rule's
/// preconditions.
///
/// Not wired into [`crate::rewrite::rewrite`]'s default cascade. Callers
/// building a custom cascade under the `absorption` feature must include it
/// explicitly.
pub fn try_absorption_and(n: crate::signal::NodeId, net: &Network, _dv: &DepthView) -> Option<Signal> {
  let (s1, s2) = net.node(n).fanin_pair()?;
  absorb(s1, s2)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::signal::{NodeId, ONE, ZERO};

  #[test] fn absorbs_a_constant_false_fanin() {
    let a = Signal::pos(NodeId::new(1));
    assert_eq!(absorb(a, ZERO), Some(ZERO));
    assert_eq!(absorb(ZERO, a), Some(ZERO));
  }

  #[test] fn absorbs_a_constant_true_fanin() {
    let a = Signal::pos(NodeId::new(1));
    assert_eq!(absorb(a, ONE), Some(a));
    assert_eq!(absorb(ONE, a), Some(a));
  }

  #[test] fn absorbs_equal_fanins() {
    let a = Signal::pos(NodeId::new(1));
    assert_eq!(absorb(a, a), Some(a));
  }

  #[test] fn declines_on_unrelated_fanins() {
    let a = Signal::pos(NodeId::new(1));
    let b = Signal::pos(NodeId::new(2));
    assert_eq!(absorb(a, b), None);
  }
}
