//! Per-node depth and critical-path tracking over a [`Network`](crate::network::Network).
use crate::network::Network;
use crate::signal::NodeId;

/// A decoration over a [`Network`] tracking, per node, its `level` (longest
/// AND-gate path from a primary input) and whether it lies `on_critical_path`
/// (some primary-input-to-primary-output path of length equal to the
/// network's global `depth` passes through it).
///
/// Computed with a forward pass (earliest level per node, from its fanins)
/// followed by a backward pass from the deepest primary outputs (which
/// fanins sit exactly one level shallower, i.e. have zero slack). An AIG
/// is already acyclic, so no cycle condensation is needed before either
/// pass.
#[derive(Debug, Default, Clone)]
pub struct DepthView {
  level: Vec<u32>,
  on_critical_path: Vec<bool>,
  depth: u32,
}

impl DepthView {
  pub fn new() -> Self { Self::default() }

  /// Recompute `level` and `on_critical_path` for every node in `net`. Must
  /// be called after every accepted substitution before any matcher queries
  /// this view again.
  pub fn update_levels(&mut self, net: &Network) {
    let n = net.node_count();
    self.level = vec![0; n];
    for ix in 0..n {
      let id = NodeId::new(ix as u32);
      self.level[ix] = match net.node(id).fanin_pair() {
        None => 0,
        Some((a, b)) => 1 + self.level[a.node().as_usize()].max(self.level[b.node().as_usize()]),
      };
    }

    self.depth = net.outputs().iter().map(|s| self.level[s.node().as_usize()]).max().unwrap_or(0);

    self.on_critical_path = vec![false; n];
    let mut stack: Vec<NodeId> = net
      .outputs()
      .iter()
      .map(|s| s.node())
      .filter(|id| self.level[id.as_usize()] == self.depth)
      .collect();
    while let Some(id) = stack.pop() {
      let ix = id.as_usize();
      if self.on_critical_path[ix] { continue; }
      self.on_critical_path[ix] = true;
      if let Some((a, b)) = net.node(id).fanin_pair() {
        let target = self.level[ix].saturating_sub(1);
        if self.level[a.node().as_usize()] == target { stack.push(a.node()); }
        if self.level[b.node().as_usize()] == target { stack.push(b.node()); }
      }
    }
  }

  pub fn level(&self, n: NodeId) -> u32 { self.level[n.as_usize()] }
  pub fn is_on_critical_path(&self, n: NodeId) -> bool { self.on_critical_path[n.as_usize()] }

  /// The network's global depth: the level of its deepest primary output.
  pub fn depth(&self) -> u32 { self.depth }
}
