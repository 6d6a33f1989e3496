//! Three-layer matcher: collapses an alternating-inversion chain of
//! three ANDs down one level.
use crate::depth::DepthView;
use crate::network::Network;
use crate::signal::{NodeId, Signal};

/// Try the three-layer rewrite at `n`. Returns the synthesized replacement
/// signal on a match, or `None` if `n` does not satisfy the rule's
/// preconditions.
pub(super) fn try_match(n: NodeId, net: &mut Network, dv: &DepthView) -> Option<Signal> {
  if !dv.is_on_critical_path(n) { return None; }
  let (s1, s2) = net.node(n).fanin_pair()?;

  let (l1, l2) = (dv.level(s1.node()), dv.level(s2.node()));
  if l1 == l2 { return None; }
  let (x0, s_crit) = if l1 < l2 { (s1, s2) } else { (s2, s1) };
  if !s_crit.is_complemented() { return None; }
  let c1 = s_crit.node();
  if !dv.is_on_critical_path(c1) { return None; }

  let (f1, f2) = net.node(c1).fanin_pair()?;
  let f1_crit = dv.is_on_critical_path(f1.node());
  let f2_crit = dv.is_on_critical_path(f2.node());
  if f1_crit == f2_crit { return None; } // need exactly one critical grandchild
  let (x1, sg1) = if f2_crit { (f1, f2) } else { (f2, f1) };
  if !sg1.is_complemented() { return None; }
  let gc1 = sg1.node();

  let (g1, g2) = net.node(gc1).fanin_pair()?;
  let g1_crit = dv.is_on_critical_path(g1.node());
  let g2_crit = dv.is_on_critical_path(g2.node());
  if g1_crit == g2_crit { return None; } // need exactly one critical great-grandchild
  let (x2, x3) = if g2_crit { (g1, g2) } else { (g2, g1) };
  if dv.level(x3.node()) <= dv.level(x0.node()) { return None; }

  let a = net.create_and(x2, x0);
  let b = net.create_and(x3, a);
  let c = net.create_and(x0, !x1);
  let d = net.create_and(!b, !c);
  Some(!d)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::network::Network;

  fn build_three_layer_chain() -> (Network, NodeId) {
    let mut net = Network::new();
    let x0 = net.add_input();
    let x1 = net.add_input();
    let x2 = net.add_input();
    let x3 = net.add_input();
    let filler = net.add_input();
    // x3 needs to sit strictly deeper than x0, so drive it through an extra layer.
    let x3_deep = net.create_and(x3, filler);
    let inner = net.create_and(x2, x3_deep); // AND(x2, x3)
    let mid = net.create_and(x1, !inner); // ¬(x1 · ¬(x2 · x3))
    let top = net.create_and(x0, !mid); // ¬(x0 · ¬(...))
    net.add_output(top);
    (net, top.node())
  }

  #[test] fn fires_on_the_canonical_chain() {
    let (mut net, n) = build_three_layer_chain();
    let mut dv = DepthView::new();
    dv.update_levels(&net);
    assert!(try_match(n, &mut net, &dv).is_some());
  }

  #[test] fn declines_when_top_fanin_is_not_complemented() {
    let mut net = Network::new();
    let a = net.add_input();
    let b = net.add_input();
    let c = net.add_input();
    let inner = net.create_and(b, c);
    let n = net.create_and(a, inner).node(); // no inversion on the deep branch
    net.add_output(Signal::pos(n));
    let mut dv = DepthView::new();
    dv.update_levels(&net);
    assert!(try_match(n, &mut net, &dv).is_none());
  }
}
