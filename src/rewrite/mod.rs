//! The depth-reducing algebraic rewriter: fixpoint driver over the four
//! matchers (associativity, distributivity-OR, distributivity-AND,
//! three-layer), in their fixed cascade order. Each pass offers every live
//! AND gate to the cascade in turn; the driver keeps looping until a full
//! pass makes no rewrites at all, the way a "keep going until nothing
//! changes" fixpoint loop is usually written.
pub mod config;
mod associativity;
mod distributivity;
mod three_layer;

#[cfg(feature = "absorption")]
pub mod absorption;

use log::{debug, trace};

pub use config::RewriteConfig;

use crate::depth::DepthView;
use crate::error::RewriteError;
use crate::network::Network;
use crate::signal::{NodeId, Signal};

/// Run the fixpoint rewriter to its natural conclusion (no cap on passes).
pub fn rewrite(network: &mut Network) -> Result<(), RewriteError> {
  rewrite_with_config(network, RewriteConfig::default())
}

/// Run the fixpoint rewriter, offering every live AND gate to the matcher
/// cascade (Associativity → Distributivity-OR → Distributivity-AND →
/// Three-Layer) each pass, re-leveling after every accepted substitution,
/// until a full pass makes no rewrites or `config.max_passes` is reached.
pub fn rewrite_with_config(network: &mut Network, config: RewriteConfig) -> Result<(), RewriteError> {
  let mut dv = DepthView::new();
  dv.update_levels(network);

  let mut pass = 0usize;
  loop {
    if let Some(max) = config.max_passes {
      if pass >= max {
        debug!("stopping after reaching the {max}-pass cap");
        break;
      }
    }
    pass += 1;

    let mut node_ids = Vec::new();
    network.for_each_gate(|id| node_ids.push(id));

    let mut rewrites = 0usize;
    for id in node_ids {
      if id.as_usize() >= network.node_count() { continue; }
      if let Some(replacement) = try_cascade(id, network, &dv) {
        trace!("rewriting n{} -> {replacement}", id.ix());
        network.substitute_node(id, replacement)?;
        dv.update_levels(network);
        rewrites += 1;
      }
    }

    debug!("pass {pass}: {rewrites} rewrite(s), depth now {}", dv.depth());
    if rewrites == 0 { break; }
  }

  trace!("rewrite converged after {pass} pass(es)");
  Ok(())
}

fn try_cascade(n: NodeId, net: &mut Network, dv: &DepthView) -> Option<Signal> {
  associativity::try_match(n, net, dv)
    .or_else(|| distributivity::try_match_or(n, net, dv))
    .or_else(|| distributivity::try_match_and(n, net, dv))
    .or_else(|| three_layer::try_match(n, net, dv))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::network::Network;

  #[test] fn no_op_on_an_already_optimal_network() {
    let mut net = Network::new();
    let a = net.add_input();
    let b = net.add_input();
    let ab = net.create_and(a, b);
    net.add_output(ab);
    let before = net.clone();
    rewrite(&mut net).unwrap();
    assert_eq!(format!("{net}"), format!("{before}"));
  }

  #[test] fn associativity_scenario_reduces_depth() {
    let mut net = Network::new();
    let a = net.add_input();
    let b = net.add_input();
    let c = net.add_input();
    let e = net.add_input();
    let filler1 = net.add_input();
    let filler2 = net.add_input();

    let ab = net.create_and(a, b);
    let deeper = net.create_and(filler2, ab);
    let deep = net.create_and(filler1, deeper);
    let t2 = net.create_and(c, deep);
    let top = net.create_and(t2, e);
    net.add_output(top);

    let mut dv = DepthView::new();
    dv.update_levels(&net);
    let depth_before = dv.depth();

    rewrite(&mut net).unwrap();

    dv.update_levels(&net);
    assert!(dv.depth() < depth_before);
  }

  #[test] fn rewrite_is_idempotent_at_fixpoint() {
    let mut net = Network::new();
    let a = net.add_input();
    let b = net.add_input();
    let c = net.add_input();
    let e = net.add_input();
    let filler1 = net.add_input();
    let filler2 = net.add_input();

    let ab = net.create_and(a, b);
    let deeper = net.create_and(filler2, ab);
    let deep = net.create_and(filler1, deeper);
    let t2 = net.create_and(c, deep);
    let top = net.create_and(t2, e);
    net.add_output(top);

    rewrite(&mut net).unwrap();
    let after_first = net.clone();
    rewrite(&mut net).unwrap();
    assert_eq!(format!("{net}"), format!("{after_first}"));
  }

  #[test] fn max_passes_caps_the_driver() {
    let mut net = Network::new();
    let a = net.add_input();
    let b = net.add_input();
    let c = net.add_input();
    let e = net.add_input();
    let filler1 = net.add_input();
    let filler2 = net.add_input();

    let ab = net.create_and(a, b);
    let deeper = net.create_and(filler2, ab);
    let deep = net.create_and(filler1, deeper);
    let t2 = net.create_and(c, deep);
    let top = net.create_and(t2, e);
    net.add_output(top);

    rewrite_with_config(&mut net, RewriteConfig { max_passes: Some(0) }).unwrap();
    let mut dv = DepthView::new();
    dv.update_levels(&net);
    // zero passes means the network is untouched
    assert_eq!(dv.level(top.node()), 5);
  }

  fn all_assignments(num_inputs: u32) -> Vec<Vec<bool>> {
    (0..(1u32 << num_inputs))
      .map(|mask| (0..num_inputs).map(|i| (mask >> i) & 1 == 1).collect())
      .collect()
  }

  /// Evaluates every possible input assignment before and after `rewrite`,
  /// and asserts the two output vectors match exactly at every assignment —
  /// the rewriter is only allowed to change depth, never the function.
  fn assert_rewrite_preserves_function(net: &mut Network) {
    let assignments = all_assignments(net.num_inputs());
    let before: Vec<Vec<bool>> = assignments.iter().map(|asg| net.evaluate(asg)).collect();
    rewrite(net).unwrap();
    let after: Vec<Vec<bool>> = assignments.iter().map(|asg| net.evaluate(asg)).collect();
    assert_eq!(before, after);
  }

  #[test] fn associativity_rewrite_preserves_function_over_all_inputs() {
    let mut net = Network::new();
    let a = net.add_input();
    let b = net.add_input();
    let c = net.add_input();
    let e = net.add_input();
    let filler1 = net.add_input();
    let filler2 = net.add_input();

    let ab = net.create_and(a, b);
    let deeper = net.create_and(filler2, ab);
    let deep = net.create_and(filler1, deeper);
    let t2 = net.create_and(c, deep);
    let top = net.create_and(t2, e);
    net.add_output(top);

    assert_rewrite_preserves_function(&mut net);
  }

  #[test] fn distributivity_or_rewrite_preserves_function_over_all_inputs() {
    let mut net = Network::new();
    let g = net.add_input();
    let x = net.add_input();
    let y = net.add_input();
    let filler = net.add_input();

    let g_deep = net.create_and(g, filler);
    let u1 = net.create_and(g_deep, x);
    let u2 = net.create_and(g_deep, y);
    let n = net.create_and(!u1, !u2);
    net.add_output(n);

    assert_rewrite_preserves_function(&mut net);
  }

  #[test] fn distributivity_and_rewrite_preserves_function_over_all_inputs() {
    let mut net = Network::new();
    let g = net.add_input();
    let x = net.add_input();
    let y = net.add_input();
    let filler = net.add_input();

    let g_deep = net.create_and(g, filler);
    let u1 = net.create_and(g_deep, x);
    let u2 = net.create_and(g_deep, y);
    let n = net.create_and(u1, u2);
    net.add_output(n);

    assert_rewrite_preserves_function(&mut net);
  }

  #[test] fn three_layer_rewrite_preserves_function_over_all_inputs() {
    let mut net = Network::new();
    let x0 = net.add_input();
    let x1 = net.add_input();
    let x2 = net.add_input();
    let x3 = net.add_input();
    let filler = net.add_input();

    let x3_deep = net.create_and(x3, filler);
    let inner = net.create_and(x2, x3_deep);
    let mid = net.create_and(x1, !inner);
    let top = net.create_and(x0, !mid);
    net.add_output(top);

    assert_rewrite_preserves_function(&mut net);
  }
}
