//! The one configuration knob the rewriter exposes.

/// Controls how many fixpoint passes [`crate::rewrite::rewrite_with_config`]
/// may run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RewriteConfig {
  /// Stop after this many passes even if the most recent pass still found
  /// rewrites. `None` (the default) runs to the natural fixpoint.
  pub max_passes: Option<usize>,
}
