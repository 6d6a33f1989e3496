//! Signals: the (node id, polarity) pairs that are the universal currency of
//! reference inside an AIG.
use std::fmt;

/// Single-bit mask indicating that a [`Signal`] is inverted (refers to the
/// logical complement of the node it names).
const INV: u32 = 1 << 31;

/// Mask over the remaining bits, used to recover the raw node id.
const ID_MASK: u32 = !INV;

/// Dense, small integer identifying a node in a [`crate::network::Network`].
/// Node 0 is always the distinguished constant node.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct NodeId(u32);

impl NodeId {
  /// The distinguished constant-0 node. Always present, always id 0.
  pub const ZERO: NodeId = NodeId(0);

  pub const fn new(ix: u32) -> Self { NodeId(ix) }
  pub const fn ix(self) -> u32 { self.0 }
  pub fn as_usize(self) -> usize { self.0 as usize }
}

impl fmt::Display for NodeId {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "n{}", self.0) }}

/// A reference to a node together with a polarity bit: `polarity=0` means the
/// node's own output, `polarity=1` means its logical complement.
///
/// Packed into a single `u32`: there is no variable-ordering tier to carry
/// here, so only the node id and the inversion bit remain.
#[derive(Default, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Signal(u32);

/// The constant-0 signal ("always false").
pub const ZERO: Signal = Signal(0);
/// The constant-1 signal ("always true"): the complement of [`ZERO`].
pub const ONE: Signal = Signal(INV);

impl Signal {
  /// Construct the non-inverted signal naming `node`.
  pub const fn pos(node: NodeId) -> Self { Signal(node.ix()) }

  /// Construct the inverted signal naming `node`.
  pub const fn neg(node: NodeId) -> Self { Signal(node.ix() | INV) }

  /// The constant-0 signal.
  pub const fn zero() -> Self { ZERO }
  /// The constant-1 signal.
  pub const fn one() -> Self { ONE }

  /// The node this signal refers to, ignoring polarity.
  #[inline] pub const fn node(self) -> NodeId { NodeId(self.0 & ID_MASK) }

  /// Is this signal the logical complement of its node's own output?
  #[inline] pub const fn is_complemented(self) -> bool { (self.0 & INV) != 0 }

  /// Does this signal refer to the distinguished constant node?
  #[inline] pub const fn is_constant(self) -> bool { self.node() == NodeId::ZERO }

  /// If this is a constant signal, its boolean value.
  pub fn constant_value(self) -> Option<bool> {
    if self.is_constant() { Some(self.is_complemented()) } else { None }}

  /// Compose this signal's polarity with an extra inversion.
  #[inline] pub fn inv_if(self, invert: bool) -> Self { if invert { !self } else { self }}

  /// Same node, forced to non-complemented polarity.
  pub const fn raw(self) -> Self { Signal(self.0 & ID_MASK) }
}

impl std::ops::Not for Signal {
  type Output = Signal;
  fn not(self) -> Signal { Signal(self.0 ^ INV) }}

impl fmt::Display for Signal {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    if self.is_complemented() { write!(f, "~")?; }
    write!(f, "{}", self.node())
  }}

impl fmt::Debug for Signal {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{self}") }}
