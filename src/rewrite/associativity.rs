//! Associativity matcher: `AND(a, AND(c, d)) ≡ AND(d, AND(a, c))`.
use crate::depth::DepthView;
use crate::network::Network;
use crate::signal::{NodeId, Signal};

/// Try the associativity rewrite at `n`. Returns the synthesized replacement
/// signal on a match, or `None` if `n` does not satisfy the rule's
/// preconditions.
pub(super) fn try_match(n: NodeId, net: &mut Network, dv: &DepthView) -> Option<Signal> {
  if !dv.is_on_critical_path(n) { return None; }
  let (s1, s2) = net.node(n).fanin_pair()?;

  let (la, lb) = (dv.level(s1.node()), dv.level(s2.node()));
  if la == lb { return None; }
  let (a, b) = if la < lb { (s1, s2) } else { (s2, s1) };
  if b.is_complemented() { return None; }
  if !dv.is_on_critical_path(b.node()) { return None; }

  let (c0, d0) = net.node(b.node()).fanin_pair()?;
  let (lc, ld) = (dv.level(c0.node()), dv.level(d0.node()));
  if lc == ld { return None; }
  let (c, d) = if lc < ld { (c0, d0) } else { (d0, c0) };
  if dv.level(d.node()) <= dv.level(a.node()) { return None; }

  let t = net.create_and(a, c);
  let u = net.create_and(d, t);
  Some(u)
}
