use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::Parser;
use limitbook_core::prelude::*;

/// Line-oriented REPL front end for the limit order book core. Contains no
/// matching logic itself; every command is a direct call into
/// `MatchingEngine`/`QueryInterface`.
#[derive(Parser)]
#[command(name = "limitbook-cli", about = "Price-time priority limit order book REPL")]
struct Args {
    /// Smallest price increment every order must align to.
    tick_size: f64,
    /// Fraction of a tick a submitted price may drift and still snap.
    precision: f64,
}

fn dispatch(engine: &DefaultMatchingEngine, tokens: &[&str]) -> String {
    match tokens.first().copied() {
        Some("order") => order_command(engine, tokens),
        Some("cancel") => cancel_command(engine, tokens),
        Some("amend") => amend_command(engine, tokens),
        Some("q") => query_command(engine, tokens),
        _ => "Unknown command".to_string(),
    }
}

fn order_command(engine: &DefaultMatchingEngine, tokens: &[&str]) -> String {
    if tokens.len() != 5 {
        return "Order rejected".to_string();
    }
    let Ok(id) = tokens[1].parse::<OrderID>() else {
        return "Order rejected".to_string();
    };
    let side = match tokens[2] {
        "buy" => Side::Buy,
        "sell" => Side::Sell,
        _ => return "Order rejected".to_string(),
    };
    let Ok(quantity) = tokens[3].parse::<Quantity>() else {
        return "Order rejected".to_string();
    };
    let Ok(price) = tokens[4].parse::<f64>() else {
        return "Order rejected".to_string();
    };
    match engine.add_order(side, id, quantity, price) {
        Ok(()) => "Order added".to_string(),
        Err(_) => "Order rejected".to_string(),
    }
}

fn cancel_command(engine: &DefaultMatchingEngine, tokens: &[&str]) -> String {
    if tokens.len() != 2 {
        return "Order not cancelled".to_string();
    }
    let Ok(id) = tokens[1].parse::<OrderID>() else {
        return "Order not cancelled".to_string();
    };
    match engine.cancel_order(id) {
        Ok(()) => "Order cancelled".to_string(),
        Err(_) => "Order not cancelled".to_string(),
    }
}

fn amend_command(engine: &DefaultMatchingEngine, tokens: &[&str]) -> String {
    if tokens.len() != 3 {
        return "Order not amended".to_string();
    }
    let Ok(id) = tokens[1].parse::<OrderID>() else {
        return "Order not amended".to_string();
    };
    let Ok(quantity) = tokens[2].parse::<Quantity>() else {
        return "Order not amended".to_string();
    };
    match engine.amend_order(id, quantity) {
        Ok(()) => "Order amended".to_string(),
        Err(_) => "Order not amended".to_string(),
    }
}

fn query_command(engine: &DefaultMatchingEngine, tokens: &[&str]) -> String {
    match tokens.get(1).copied() {
        Some("level") => {
            if tokens.len() != 4 {
                return "Usage: q level <bid|ask> <depth>".to_string();
            }
            let side = match tokens[2] {
                "bid" => Side::Buy,
                "ask" => Side::Sell,
                _ => return "Usage: q level <bid|ask> <depth>".to_string(),
            };
            let Ok(depth) = tokens[3].parse::<u32>() else {
                return "Usage: q level <bid|ask> <depth>".to_string();
            };
            format_depth(engine.query_depth(side, depth))
        }
        Some("order") => {
            if tokens.len() != 3 {
                return "Usage: q order <id>".to_string();
            }
            let Ok(id) = tokens[2].parse::<OrderID>() else {
                return "Usage: q order <id>".to_string();
            };
            format_order(engine.query_order(id))
        }
        _ => "Usage: q <level|order> ...".to_string(),
    }
}

fn format_depth(view: DepthView) -> String {
    let side_label = match view.side {
        Side::Buy => "bid",
        Side::Sell => "ask",
    };
    format!("{}, {}, {}, {}, {}", side_label, view.depth, view.price, view.sum_left, view.n_items)
}

fn format_order(view: OrderView) -> String {
    let side_label = match view.side {
        Some(Side::Buy) => "buy",
        Some(Side::Sell) => "sell",
        None => "null",
    };
    let status_label = match view.status {
        Some(OrderStatus::Open) => "open",
        Some(OrderStatus::Partial) => "partial",
        Some(OrderStatus::Executed) => "executed",
        Some(OrderStatus::Cancelled) => "cancelled",
        None => "null",
    };
    format!(
        "{}, {}, {}, {}, {}, {}",
        side_label, view.price, view.quantity, view.left, view.position, status_label
    )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let config = match BookConfig::new(args.tick_size, args.precision) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let syncer: Arc<dyn OrderBookSyncer> = Arc::new(TracingSyncer);
    let book = Arc::new(DefaultOrderBook::new(config, syncer));
    let engine = DefaultMatchingEngine::new(book);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let output = dispatch(&engine, &tokens);
        let _ = writeln!(stdout, "{output}");
        let _ = stdout.flush();
    }
}
