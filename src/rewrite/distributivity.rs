//! Distributivity matchers: the OR form
//! `¬(¬(g·x)·¬(g·y)) ≡ g·(x+y)` and the AND form `(g·x)·(g·y) ≡ g·(x·y)`,
//! sharing the "find the deep operand both children agree on" search.
use crate::depth::DepthView;
use crate::network::Network;
use crate::signal::{NodeId, Signal};

/// Find a signal `g` that appears, with identical polarity, as a fanin of
/// both `child1` and `child2`, whose driver is on the critical path, with
/// both *other* fanins ("remaining operands") off the critical path. Shared
/// by both distributivity variants, which differ only in what they do with
/// the result.
fn shared_deep_operand(net: &Network, dv: &DepthView, child1: NodeId, child2: NodeId) -> Option<(Signal, Signal, Signal)> {
  let (p1a, p1b) = net.node(child1).fanin_pair()?;
  let (p2a, p2b) = net.node(child2).fanin_pair()?;
  for g in [p1a, p1b] {
    if !dv.is_on_critical_path(g.node()) { continue; }
    if g != p2a && g != p2b { continue; }
    let x = if g == p1a { p1b } else { p1a };
    let y = if g == p2a { p2b } else { p2a };
    if !dv.is_on_critical_path(x.node()) && !dv.is_on_critical_path(y.node()) {
      return Some((g, x, y));
    }
  }
  None
}

/// `n = AND(¬child1, ¬child2)` where both children are critical ANDs
/// sharing a deep operand — De Morgan's form of `g · (x + y)`.
pub(super) fn try_match_or(n: NodeId, net: &mut Network, dv: &DepthView) -> Option<Signal> {
  if !dv.is_on_critical_path(n) { return None; }
  let (s1, s2) = net.node(n).fanin_pair()?;
  if !(s1.is_complemented() && s2.is_complemented()) { return None; }
  let (c1, c2) = (s1.node(), s2.node());
  if !dv.is_on_critical_path(c1) || !dv.is_on_critical_path(c2) { return None; }

  let (g, x, y) = shared_deep_operand(net, dv, c1, c2)?;
  let t = net.create_and(!x, !y);
  let u = net.create_and(g, !t);
  Some(!u)
}

/// `n = AND(child1, child2)` where both children are critical ANDs
/// sharing a deep operand — `(g·x)·(g·y) ≡ g·(x·y)`.
pub(super) fn try_match_and(n: NodeId, net: &mut Network, dv: &DepthView) -> Option<Signal> {
  if !dv.is_on_critical_path(n) { return None; }
  let (s1, s2) = net.node(n).fanin_pair()?;
  if s1.is_complemented() || s2.is_complemented() { return None; }
  let (c1, c2) = (s1.node(), s2.node());
  if !dv.is_on_critical_path(c1) || !dv.is_on_critical_path(c2) { return None; }

  let (g, x, y) = shared_deep_operand(net, dv, c1, c2)?;
  let t = net.create_and(x, y);
  let u = net.create_and(g, t);
  Some(u)
}
