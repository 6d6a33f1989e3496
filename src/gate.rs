//! Node variants and the canonicalization applied when constructing an AND gate.
use crate::signal::{Signal, ONE, ZERO};

/// The three node variants an AIG can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
  /// The single distinguished constant-0 node. Logical 1 is its complement signal.
  Const0,
  /// A primary input; has no fanins.
  Input(u32),
  /// A 2-input AND gate.
  And(Signal, Signal),
}

impl Node {
  pub fn is_and(&self) -> bool { matches!(self, Node::And(..)) }
  pub fn is_input(&self) -> bool { matches!(self, Node::Input(..)) }

  /// The two fanins of an AND gate, or `None` for constants/inputs.
  pub fn fanin_pair(&self) -> Option<(Signal, Signal)> {
    match self { Node::And(a, b) => Some((*a, *b)), _ => None }
  }
}

/// Result of canonicalizing a freshly-requested AND gate: either it collapses
/// to an existing signal immediately (`Copy`), or it is a genuine new gate in
/// canonical (order-independent) form (`Fresh`).
///
/// Mirrors quaigh's `Gate`/`Normalization::{Copy, Node}` split (see DESIGN.md):
/// a gate is first reduced to a canonical, hashable form, and only the
/// strash table decides whether that form already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Canonical {
  /// The gate is trivial; no new node is needed.
  Copy(Signal),
  /// A genuine 2-input AND, with fanins in canonical order.
  Fresh(Signal, Signal),
}

/// Canonicalize a requested `AND(a, b)` before it is looked up in / inserted
/// into the strash table: apply the trivial Boolean simplifications and put
/// the two fanins into a fixed order so that `AND(a,b)` and `AND(b,a)` hash
/// identically.
pub fn canonicalize_and(a: Signal, b: Signal) -> Canonical {
  use Canonical::*;
  if a == ZERO || b == ZERO { return Copy(ZERO); }
  if a == ONE { return Copy(b); }
  if b == ONE { return Copy(a); }
  if a == b { return Copy(a); }
  if a == !b { return Copy(ZERO); }
  let (lo, hi) = if a.node() <= b.node() { (a, b) } else { (b, a) };
  Fresh(lo, hi)
}
