// File: crates/wealthflow-demo/src/main.rs
// Summary: Demo renders the four bundled charts, prints an income breakdown and runs the transfer counter.
// Usage: wealthflow-demo [annual-income] [out-dir] [ticker-seconds]

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wealthflow_core::format::{format_percent, format_percent_with};
use wealthflow_core::{fixtures, CurrencyFormat, IncomeRange, Ticker, TickerConfig, TransferAccumulator};
use wealthflow_render::{write_svg, Draw, Theme};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let income = match args.next() {
        Some(raw) => raw.parse::<f64>().with_context(|| format!("invalid annual income '{raw}'"))?,
        None => 30_000.0,
    };
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out"));
    let seconds = match args.next() {
        Some(raw) => raw.parse::<u64>().with_context(|| format!("invalid ticker seconds '{raw}'"))?,
        None => 3,
    };
    let theme = wealthflow_render::theme::find(&std::env::var("WEALTHFLOW_THEME").unwrap_or_default());

    render_charts(&out_dir, &theme)?;
    report_income(income)?;
    report_pools();
    run_ticker(seconds);
    Ok(())
}

fn render_charts(out_dir: &Path, theme: &Theme) -> Result<()> {
    render(&fixtures::wealth_flow()?, theme, &out_dir.join("wealth_flow"))?;
    render(&fixtures::recycling()?, theme, &out_dir.join("recycling"))?;
    render(&fixtures::divergence_chart()?, theme, &out_dir.join("divergence"))?;
    render(&fixtures::squeeze_chart()?, theme, &out_dir.join("squeeze"))?;
    Ok(())
}

fn render(chart: &impl Draw, theme: &Theme, stem: &Path) -> Result<()> {
    let svg = stem.with_extension("svg");
    write_svg(chart, theme, &svg).with_context(|| format!("failed to write '{}'", svg.display()))?;
    #[cfg(feature = "png")]
    {
        let png = stem.with_extension("png");
        wealthflow_render::write_png(chart, theme, &png)
            .with_context(|| format!("failed to write '{}'", png.display()))?;
    }
    Ok(())
}

fn report_income(requested: f64) -> Result<()> {
    let income = IncomeRange::default().clamp(requested);
    if income != requested {
        tracing::warn!(requested, income, "income clamped to slider range");
    }
    let breakdown = fixtures::allocation_table()?.allocate(income)?;
    let fmt = CurrencyFormat::compact();

    tracing::info!(annual = %fmt.format(breakdown.annual_income), monthly = %fmt.format(breakdown.monthly), "income breakdown");
    for entry in &breakdown.entries {
        tracing::info!(
            category = %entry.category,
            amount = %fmt.format(entry.amount),
            share = %format_percent(entry.fraction * 100.0),
            beneficiary = %entry.beneficiary,
            destination = ?entry.destination,
            "allocation"
        );
    }
    let upward = breakdown.upward();
    tracing::info!(
        monthly = %fmt.format(upward),
        share = %format_percent(breakdown.percent_of_monthly(upward)),
        annual = %fmt.format(breakdown.annual_upward()),
        thirty_years = %fmt.format(breakdown.upward_over_years(30)),
        "flowing upward"
    );
    Ok(())
}

fn report_pools() {
    let pools = fixtures::pools();
    let fmt = CurrencyFormat::ticker();
    match pools.ratio() {
        Some(ratio) => tracing::info!(
            lower = %fmt.format(pools.lower),
            upper = %fmt.format(pools.upper),
            lower_share = %format_percent_with(pools.lower_share(), 1),
            upper_share = %format_percent_with(pools.upper_share(), 1),
            ratio = %format!("{ratio:.0}x"),
            "wealth pools"
        ),
        None => tracing::info!(upper = %fmt.format(pools.upper), "lower pool is empty"),
    }
}

fn run_ticker(seconds: u64) {
    let config = TickerConfig::default();
    tracing::info!(per_day = %CurrencyFormat::ticker().format(config.per_day()), "starting transfer counter");
    let ticker = Ticker::start(TransferAccumulator::new(config));
    for _ in 0..seconds {
        thread::sleep(Duration::from_secs(1));
        tracing::info!(transferred = %wealthflow_core::format_currency(ticker.value()), "today");
    }
    let last = ticker.cancel();
    tracing::info!(ticks = last.ticks(), value = %wealthflow_core::format_currency(last.value()), "counter stopped");
}
