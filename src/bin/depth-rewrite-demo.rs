//! A small CLI that builds a couple of built-in example AIGs, runs the
//! depth-reducing rewriter over them, and reports the depth before and after.
//!
//! Does not parse netlist files — that remains out of scope for this crate.
use clap::Parser;
use depth_rewrite::{rewrite_with_config, DepthView, Network, RewriteConfig};
use log::info;

#[derive(Parser)]
#[command(about = "Runs the depth-reducing AIG rewriter over built-in example circuits")]
struct Args {
  /// Cap the number of fixpoint passes (default: run to the natural fixpoint).
  #[arg(long)]
  max_passes: Option<usize>,
}

/// Scenario 1: an associativity opportunity buried under two filler layers.
fn associativity_example() -> Network {
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
  net
}

/// Scenario 4: a four-deep alternating-inversion chain for the three-layer rule.
fn three_layer_example() -> Network {
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
  net
}

fn run(name: &str, mut net: Network, config: RewriteConfig) {
  let mut dv = DepthView::new();
  dv.update_levels(&net);
  let before = dv.depth();

  match rewrite_with_config(&mut net, config) {
    Ok(()) => {
      dv.update_levels(&net);
      info!("{name}: depth {before} -> {}", dv.depth());
    }
    Err(err) => eprintln!("{name}: rewrite failed: {err}"),
  }
}

fn main() {
  use simplelog::*;
  TermLogger::init(LevelFilter::Info, Config::default()).unwrap();

  let args = Args::parse();
  let config = RewriteConfig { max_passes: args.max_passes };

  run("associativity", associativity_example(), config);
  run("three-layer", three_layer_example(), config);
}
