//! The reference AIG implementation: arena storage, structural hashing, fanout
//! tracking, and the substitution protocol the rewriter commits through.
use std::collections::HashSet;
use std::fmt;

use fxhash::FxHashMap;

use crate::error::RewriteError;
use crate::gate::{canonicalize_and, Canonical, Node};
use crate::signal::{NodeId, Signal};

/// One entry in a node's fanout list: some AND gate reads this node as one of
/// its two fanins, at the given slot (0 or 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fanout { parent: NodeId, slot: u8 }

/// An And-Inverter Graph: arena of nodes, each AND pair canonicalized and
/// structurally hashed, plus a fanout table and the list of primary outputs.
/// Owns all node storage itself and exposes lookups over it rather than
/// handing out the arena directly.
#[derive(Debug, Clone)]
pub struct Network {
  nodes: Vec<Node>,
  fanouts: Vec<Vec<Fanout>>,
  strash: FxHashMap<(Signal, Signal), Signal>,
  num_inputs: u32,
  outputs: Vec<Signal>,
}

impl Default for Network {
  fn default() -> Self { Self::new() }
}

impl Network {
  /// A fresh network containing only the constant-0 node and no inputs/outputs.
  pub fn new() -> Self {
    Network {
      nodes: vec![Node::Const0],
      fanouts: vec![Vec::new()],
      strash: FxHashMap::default(),
      num_inputs: 0,
      outputs: Vec::new(),
    }
  }

  /// Total number of nodes in the arena, including the constant and any dead
  /// (substituted-away but not yet swept) nodes.
  pub fn node_count(&self) -> usize { self.nodes.len() }

  pub fn num_inputs(&self) -> u32 { self.num_inputs }

  pub fn outputs(&self) -> &[Signal] { &self.outputs }

  /// Add a fresh primary input and return its (non-complemented) signal.
  pub fn add_input(&mut self) -> Signal {
    let id = NodeId::new(self.nodes.len() as u32);
    self.nodes.push(Node::Input(self.num_inputs));
    self.fanouts.push(Vec::new());
    self.num_inputs += 1;
    Signal::pos(id)
  }

  /// Register `signal` as an additional primary output.
  pub fn add_output(&mut self, signal: Signal) { self.outputs.push(signal); }

  pub fn node(&self, id: NodeId) -> &Node { &self.nodes[id.as_usize()] }

  /// Whether `node` is the distinguished constant node.
  pub fn is_constant(&self, node: NodeId) -> bool { node == NodeId::ZERO }

  /// If `signal` names the constant node, the boolean value its polarity
  /// selects; `None` otherwise.
  pub fn constant_value(&self, signal: Signal) -> Option<bool> { signal.constant_value() }

  pub fn is_complemented(&self, signal: Signal) -> bool { signal.is_complemented() }

  pub fn node_of(&self, signal: Signal) -> &Node { self.node(signal.node()) }

  /// Visit every live AND gate's id, in arena (topological) order.
  pub fn for_each_gate(&self, mut f: impl FnMut(NodeId)) {
    for (ix, node) in self.nodes.iter().enumerate() {
      if node.is_and() { f(NodeId::new(ix as u32)); }
    }
  }

  /// Visit the two fanin signals of an AND gate, in order. No-op for
  /// constants/inputs.
  pub fn for_each_fanin(&self, n: NodeId, mut f: impl FnMut(Signal)) {
    if let Some((a, b)) = self.node(n).fanin_pair() {
      f(a);
      f(b);
    }
  }

  /// Construct (or reuse, via structural hashing) the AND of `a` and `b`.
  pub fn create_and(&mut self, a: Signal, b: Signal) -> Signal {
    match canonicalize_and(a, b) {
      Canonical::Copy(s) => s,
      Canonical::Fresh(lo, hi) => {
        if let Some(&existing) = self.strash.get(&(lo, hi)) { return existing; }
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(Node::And(lo, hi));
        self.fanouts.push(Vec::new());
        self.register_fanout(lo.node(), id, 0);
        self.register_fanout(hi.node(), id, 1);
        let signal = Signal::pos(id);
        self.strash.insert((lo, hi), signal);
        signal
      }
    }
  }

  fn register_fanout(&mut self, of: NodeId, parent: NodeId, slot: u8) {
    self.fanouts[of.as_usize()].push(Fanout { parent, slot });
  }

  /// Does `start`'s transitive fanin cone include `target`?
  fn depends_on(&self, start: NodeId, target: NodeId) -> bool {
    let mut stack = vec![start];
    let mut seen = HashSet::new();
    while let Some(n) = stack.pop() {
      if n == target { return true; }
      if !seen.insert(n) { continue; }
      if let Some((a, b)) = self.node(n).fanin_pair() {
        stack.push(a.node());
        stack.push(b.node());
      }
    }
    false
  }

  /// Replace every reference to `n`'s own (non-complemented) output with
  /// `new_signal`, composing polarities as needed. `n`'s storage is
  /// left in place; reclaiming it is `sweep`'s job.
  pub fn substitute_node(&mut self, n: NodeId, new_signal: Signal) -> Result<(), RewriteError> {
    if self.depends_on(new_signal.node(), n) {
      return Err(RewriteError::CycleIntroduced { node: n.ix(), replacement: format!("{new_signal}") });
    }
    let fanouts = std::mem::take(&mut self.fanouts[n.as_usize()]);
    for Fanout { parent, slot } in &fanouts {
      let replacement = {
        let (a, b) = self.node(*parent).fanin_pair().expect("fanout parent is always an AND gate");
        let old = if *slot == 0 { a } else { b };
        new_signal.inv_if(old.is_complemented())
      };
      let parent_ix = parent.as_usize();
      match &mut self.nodes[parent_ix] {
        Node::And(a, b) => {
          if *slot == 0 { *a = replacement; } else { *b = replacement; }
        }
        _ => unreachable!("fanout parent is always an AND gate"),
      }
      self.register_fanout(replacement.node(), *parent, *slot);
    }
    for out in self.outputs.iter_mut() {
      if out.node() == n { *out = new_signal.inv_if(out.is_complemented()); }
    }
    Ok(())
  }

  /// Evaluate every primary output for one assignment of primary-input
  /// values. Used by equivalence tests, never by the rewriter itself.
  pub fn evaluate(&self, inputs: &[bool]) -> Vec<bool> {
    let mut values = vec![false; self.nodes.len()];
    for (ix, node) in self.nodes.iter().enumerate() {
      values[ix] = match node {
        Node::Const0 => false,
        Node::Input(i) => inputs[*i as usize],
        Node::And(a, b) => {
          (values[a.node().as_usize()] ^ a.is_complemented())
            && (values[b.node().as_usize()] ^ b.is_complemented())
        }
      };
    }
    self.outputs.iter().map(|s| values[s.node().as_usize()] ^ s.is_complemented()).collect()
  }

  /// Compact away every node unreachable from the primary outputs, remapping
  /// ids so the arena stays dense. Never called automatically by `rewrite`.
  pub fn sweep(&mut self) {
    let mut keep = vec![false; self.nodes.len()];
    keep[0] = true;
    let mut stack: Vec<NodeId> = self.outputs.iter().map(|s| s.node()).collect();
    while let Some(n) = stack.pop() {
      if keep[n.as_usize()] { continue; }
      keep[n.as_usize()] = true;
      if let Some((a, b)) = self.node(n).fanin_pair() {
        stack.push(a.node());
        stack.push(b.node());
      }
    }

    let mut remap = vec![NodeId::ZERO; self.nodes.len()];
    let mut new_nodes = Vec::new();
    for (old_ix, node) in self.nodes.iter().enumerate() {
      if keep[old_ix] {
        remap[old_ix] = NodeId::new(new_nodes.len() as u32);
        new_nodes.push(*node);
      }
    }
    let fix = |s: Signal, remap: &[NodeId]| Signal::pos(remap[s.node().as_usize()]).inv_if(s.is_complemented());
    for node in new_nodes.iter_mut() {
      if let Node::And(a, b) = node {
        *a = fix(*a, &remap);
        *b = fix(*b, &remap);
      }
    }
    let mut new_fanouts = vec![Vec::new(); new_nodes.len()];
    for (new_ix, node) in new_nodes.iter().enumerate() {
      if let Node::And(a, b) = node {
        new_fanouts[a.node().as_usize()].push(Fanout { parent: NodeId::new(new_ix as u32), slot: 0 });
        new_fanouts[b.node().as_usize()].push(Fanout { parent: NodeId::new(new_ix as u32), slot: 1 });
      }
    }
    for out in self.outputs.iter_mut() { *out = fix(*out, &remap); }
    self.strash = self
      .strash
      .drain()
      .filter(|(_, sig)| keep[sig.node().as_usize()])
      .map(|((lo, hi), sig)| ((fix(lo, &remap), fix(hi, &remap)), fix(sig, &remap)))
      .collect();
    self.nodes = new_nodes;
    self.fanouts = new_fanouts;
  }
}

impl fmt::Display for Network {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    for (ix, node) in self.nodes.iter().enumerate() {
      let id = NodeId::new(ix as u32);
      match node {
        Node::Const0 => writeln!(f, "{id} = 0")?,
        Node::Input(i) => writeln!(f, "{id} = input[{i}]")?,
        Node::And(a, b) => writeln!(f, "{id} = AND({a}, {b})")?,
      }
    }
    for (ix, out) in self.outputs.iter().enumerate() {
      writeln!(f, "output[{ix}] = {out}")?;
    }
    Ok(())
  }
}
