//! swapview demo binary
//!
//! Renders a sample quote summary and the effective route set to the
//! console. Flags:
//!   --config <path>            load swap-settings defaults from JSON
//!   --resources-unavailable    simulate the missing-resources signal
//!   --debug-routes / --debug-summary    module debug logging

use anyhow::{Context, Result};

use swapview::config::{self, SwapViewConfig};
use swapview::global;
use swapview::logger::{log, LogTag};
use swapview::routes::{self, ROUTE_TEMPLATE};
use swapview::summary::SwapDetail;
use swapview::types::{Quote, Token};

fn config_path(args: &[String]) -> Option<String> {
    args.iter()
        .position(|arg| arg == "--config")
        .and_then(|idx| args.get(idx + 1))
        .cloned()
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    log(LogTag::App, "START", "swapview demo starting");

    let configs = match config_path(&args) {
        Some(path) => config::read_configs(&path)
            .with_context(|| format!("loading config from '{}'", path))?,
        None => SwapViewConfig::default(),
    };
    let settings = configs.default_settings();
    log(
        LogTag::Config,
        "LOADED",
        &format!(
            "slip_tolerance={}% max_gas_fee={} units",
            settings.slip_tolerance, settings.max_gas_fee
        ),
    );

    routes::validate_route_table(&ROUTE_TEMPLATE).context("route template invariants")?;

    if args.iter().any(|arg| arg == "--resources-unavailable") {
        global::set_resources_not_found(true);
        global::navigate_to("/stats");
    }

    let effective = routes::compute_effective_routes(
        &ROUTE_TEMPLATE,
        global::is_resources_not_found(),
        &global::current_path(),
    );

    for route in &effective.routes {
        log(
            LogTag::Route,
            if route.hidden { "HIDDEN" } else { "VISIBLE" },
            &format!("{:?} -> '{}'", route.name, route.path),
        );
    }

    if effective.should_redirect_home {
        routes::schedule_home_redirect()
            .await
            .context("redirect continuation")?;
    }

    // Sample quote: 100 APT -> 250 USDC with 0.03% price impact.
    let from_token = Token::new("APT", 8);
    let to_token = Token::new("USDC", 6);
    let quote = Quote {
        input_amount: 100.0,
        output_amount: 250.0,
        price_impact: Some(0.0003),
    };

    let mut detail = SwapDetail::new();
    let fields = detail.summary(Some(&quote), &from_token, &to_token, &settings);

    println!();
    for (label, value) in fields.rows() {
        println!("  {:<20} {}", label, value);
    }

    detail.toggle_direction();
    let inverted = detail.summary(Some(&quote), &from_token, &to_token, &settings);
    println!("  {:<20} {}", "Rate (inverted)", inverted.rate);

    log(LogTag::App, "DONE", "swapview demo finished");
    Ok(())
}
