use clap::Parser;
use colored::Colorize;
use std::rc::Rc;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use dectree::{
    BuildState, CountLeavesVisitor, DecisionTree, DepthVisitor, Node, Render, TreeBuilder,
    TreeResult,
};

/// Demo driver: builds a sample decision tree, runs both traversals and
/// visitors over it, then steps the builder state machine.
#[derive(Parser, Debug)]
#[command(name = "dectree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging. Multiple -d options increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    /// Number of builder steps to run
    #[arg(short, long, default_value_t = 6)]
    steps: usize,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(cli.steps) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run(steps: usize) -> TreeResult<()> {
    // root -> (decision -> (leaf, leaf), leaf)
    let root = Node::decision();
    let left = Node::decision();
    let right = Node::leaf();

    root.borrow_mut().add_child(Rc::clone(&left))?;
    root.borrow_mut().add_child(right)?;
    left.borrow_mut().add_child(Node::leaf())?;
    left.borrow_mut().add_child(Node::leaf())?;

    let tree = DecisionTree::new(Rc::clone(&root));

    println!("--- sample tree ---");
    println!("{}", root.to_tree_string());

    println!("--- pre-order ---");
    for node in tree.traverse_pre_order() {
        println!("Visit: {}", node.borrow().kind());
    }

    println!("--- breadth-first ---");
    for node in tree.traverse_breadth_first() {
        println!("Visit: {}", node.borrow().kind());
    }

    let mut depth_visitor = DepthVisitor::new();
    for node in tree.traverse_pre_order() {
        node.borrow().accept(&mut depth_visitor);
    }
    println!("decision-path count: {}", depth_visitor.depth());

    let mut leaf_visitor = CountLeavesVisitor::new();
    for node in tree.traverse_pre_order() {
        node.borrow().accept(&mut leaf_visitor);
    }
    println!("leaves: {}", leaf_visitor.leaves());

    println!("--- builder, {} steps ---", steps);
    let mut builder = TreeBuilder::new(BuildState::Splitting);
    for _ in 0..steps {
        builder.build_step()?;
    }
    let generated = builder.get_tree();
    println!("{}", generated.root().to_tree_string());
    println!(
        "generated: {} nodes, depth {}, final state {}",
        generated.node_count(),
        generated.depth(),
        builder.state()
    );

    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Create a noisy module filter
    let noisy_modules = [""];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    let filtered_layer = fmt_layer.with_filter(filter).with_filter(module_filter);

    tracing_subscriber::registry().with(filtered_layer).init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
