//! A depth-reducing algebraic rewriter for And-Inverter Graphs.
//!
//! Given a structurally-hashed AIG, [`rewrite`] repeatedly applies a small
//! set of local, Boolean-equivalence-preserving transformations that lower
//! logic depth — the longest path of AND gates from a primary input to a
//! primary output — without changing the function the network computes.

#![allow(clippy::many_single_char_names)]

/// The `(node id, polarity)` pairs that are the universal currency of
/// reference inside an AIG.
pub mod signal;
/// Node variants and AND-gate canonicalization.
pub mod gate;
/// The reference AIG implementation: arena, structural hashing, fanouts,
/// substitution.
pub mod network;
/// Per-node level and critical-path tracking over a [`network::Network`].
pub mod depth;
/// Fatal errors raised by the rewriting driver.
pub mod error;
/// The rewriting engine itself: matchers, the fixpoint driver, configuration.
pub mod rewrite;

pub use depth::DepthView;
pub use error::RewriteError;
pub use network::Network;
pub use rewrite::{rewrite, rewrite_with_config, RewriteConfig};
pub use signal::Signal;
