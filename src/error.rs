//! Fatal errors raised by the rewriting driver. None of these are meant to
//! be recoverable: each one means a matcher proposed a replacement that
//! violates one of its own preconditions.
use thiserror::Error;

/// A fatal error aborting a rewrite pass. Each variant names the node the
/// active matcher was inspecting and the precondition that failed.
#[derive(Debug, Error)]
pub enum RewriteError {
  /// A matcher proposed a replacement whose driver transitively depends on
  /// the node being replaced. Always a rule bug, never a data problem.
  #[error("substituting n{node} with {replacement} would introduce a cycle")]
  CycleIntroduced { node: u32, replacement: String },

  /// A matcher was invoked while the depth view was stale relative to the
  /// network (i.e. after a substitution with no intervening `update_levels`).
  #[error("inspected n{node} while the depth view was stale")]
  UnleveledAccess { node: u32 },

  /// A matcher produced a replacement whose fanin set or level relationship
  /// violates the rule's own stated precondition.
  #[error("matcher {rule} produced an invalid replacement for n{node}: {precondition}")]
  InvariantViolation { rule: &'static str, node: u32, precondition: String },
}
