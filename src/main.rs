mod cli;
mod config;
mod error;
mod ingest;
mod market;
mod normalize;
mod pipeline;
mod report;
mod scoring;
mod session;
mod types;

use crate::error::BaitScanError;
use crate::types::listing::Region;
use crate::types::report::NormalizedUnit;
use crate::types::scoring::RiskLevel;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const DANGER: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("baitscan={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<i32, BaitScanError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if !cli.config_dir.exists() {
        return Err(BaitScanError::PathNotFound(
            cli.config_dir.display().to_string(),
        ));
    }
    let loaded = config::load_config(&cli.config_dir)?;
    if loaded.is_none() {
        info!(
            dir = %cli.config_dir.display(),
            "no {} found, using defaults",
            config::DEFAULT_CONFIG_FILE
        );
    }
    let cfg = loaded.unwrap_or_default();

    match cli.command {
        cli::Commands::Score(cmd) => {
            let batch = ingest::load_listings(&cmd.input, &cfg.site())?;
            let evidence = cmd
                .evidence
                .as_deref()
                .map(ingest::load_evidence)
                .transpose()?;

            let engine = pipeline::build_engine(&cfg);
            let session = pipeline::scan(engine, batch, evidence.as_ref());
            let mut scan_report = pipeline::build_report(&session);

            let min_level = match cmd.min_level {
                cli::MinLevel::Safe => RiskLevel::Safe,
                cli::MinLevel::Caution => RiskLevel::Caution,
                cli::MinLevel::Warning => RiskLevel::Warning,
                cli::MinLevel::Danger => RiskLevel::Danger,
            };
            scan_report.retain_min_level(min_level);

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&scan_report, output_format)?;
            println!("{rendered}");

            match scan_report.summary.highest_level() {
                Some(RiskLevel::Danger) => Ok(exit_code::DANGER),
                Some(RiskLevel::Warning) => Ok(exit_code::WARNINGS),
                _ => Ok(exit_code::SUCCESS),
            }
        }
        cli::Commands::Normalize(cmd) => {
            let batch = ingest::load_listings(&cmd.input, &cfg.site())?;
            let engine = pipeline::build_engine(&cfg);
            let units = batch
                .listings
                .into_iter()
                .map(|listing| NormalizedUnit {
                    record: engine.normalizer().normalize(&listing.raw),
                    id: listing.id,
                })
                .collect::<Vec<_>>();
            println!("{}", serde_json::to_string_pretty(&units)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Market(cmd) => {
            let region = match cmd.region {
                cli::RegionArg::Tokyo => Region::Tokyo,
                cli::RegionArg::Osaka => Region::Osaka,
                cli::RegionArg::Other => Region::Other,
            };
            let engine = pipeline::build_engine(&cfg);
            let table = engine.market();
            let layout = normalize::normalize_layout(&cmd.layout);

            println!(
                "layout: {} (compared as {})",
                layout,
                market::lookup_layout(&layout)
            );
            println!(
                "minimum plausible rent: {:.1}",
                table.minimum_plausible_rent(region)
            );
            match table.lookup_market_rent(region, &cmd.subdivision, &layout) {
                Some(base) => {
                    let adjusted = market::adjust_market_rent(base, cmd.age, cmd.walk);
                    println!("market rent: {base:.2}");
                    println!("adjusted rent: {adjusted:.2}");
                }
                None => {
                    println!(
                        "market rent: unavailable for {} {}",
                        region, cmd.subdivision
                    );
                }
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
