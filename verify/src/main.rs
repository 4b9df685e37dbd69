// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
mod catalogue;
mod sampling;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use valori_fixed::digest::DeterminismReport;
use valori_fixed::{Fast, Fastest, Fixed32, Fixed48, Fixed64, Precise, Tier};

use crate::catalogue::{arity, Catalogue};

#[derive(Parser)]
#[command(name = "valori-fixed-verify")]
#[command(version, about = "Determinism and accuracy checks for valori-fixed", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the catalogue digest of every tier as JSON.
    Digest,
    /// Sample every function against f64 references and print the worst errors.
    Accuracy {
        /// Samples per function, width and tier.
        #[arg(long, env = "VALORI_FIXED_SAMPLES", default_value_t = 10_000)]
        samples: usize,

        #[arg(long, env = "VALORI_FIXED_SEED", default_value_t = 0x5EED)]
        seed: u64,

        /// Restrict to one tier. All tiers when omitted.
        #[arg(long, env = "VALORI_FIXED_TIER")]
        tier: Option<TierArg>,
    },
    /// Evaluate one function on decimal arguments.
    Eval {
        width: WidthArg,

        function: String,

        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,

        #[arg(long, env = "VALORI_FIXED_TIER", default_value = "precise")]
        tier: TierArg,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TierArg {
    Precise,
    Fast,
    Fastest,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum WidthArg {
    #[value(alias = "32")]
    Fixed32,
    #[value(alias = "48")]
    Fixed48,
    #[value(alias = "64")]
    Fixed64,
}

/// `DeterminismReport` with hex digests.
#[derive(Serialize)]
struct DigestOutput {
    version: &'static str,
    grid_points: u32,
    precise: String,
    fast: String,
    fastest: String,
}

impl From<DeterminismReport> for DigestOutput {
    fn from(report: DeterminismReport) -> Self {
        DigestOutput {
            version: report.version,
            grid_points: report.grid_points,
            precise: hex::encode(report.precise),
            fast: hex::encode(report.fast),
            fastest: hex::encode(report.fastest),
        }
    }
}

fn run_digest() -> Result<()> {
    tracing::info!("Digesting catalogue over all tiers");
    let output = DigestOutput::from(DeterminismReport::generate());
    tracing::debug!(precise = %output.precise, "digest ready");
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_accuracy(samples: usize, seed: u64, tier: Option<TierArg>) -> Result<()> {
    if samples == 0 {
        bail!("--samples must be at least 1");
    }
    tracing::info!(samples, seed, ?tier, "Sampling accuracy");
    let mut rows = Vec::new();
    if matches!(tier, None | Some(TierArg::Precise)) {
        rows.extend(sampling::measure_all::<Precise>(samples, seed));
    }
    if matches!(tier, None | Some(TierArg::Fast)) {
        rows.extend(sampling::measure_all::<Fast>(samples, seed));
    }
    if matches!(tier, None | Some(TierArg::Fastest)) {
        rows.extend(sampling::measure_all::<Fastest>(samples, seed));
    }
    tracing::info!(rows = rows.len(), "Emitting accuracy report");
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn evaluate<V: Catalogue, T: Tier>(function: &str, raw_args: &[String]) -> Result<V> {
    let expected = arity(function).with_context(|| format!("Unknown function '{function}'"))?;
    if raw_args.len() != expected {
        bail!(
            "'{function}' takes {expected} argument(s), got {}",
            raw_args.len()
        );
    }
    let args = raw_args
        .iter()
        .map(|s| {
            s.parse::<V>()
                .with_context(|| format!("Failed to parse '{s}' as {}", V::WIDTH))
        })
        .collect::<Result<Vec<V>>>()?;
    tracing::debug!(function, width = V::WIDTH, tier = T::NAME, "evaluating");
    V::call::<T>(function, &args).with_context(|| format!("Cannot evaluate '{function}'"))
}

fn eval_width<V: Catalogue>(function: &str, args: &[String], tier: TierArg) -> Result<String> {
    let value = match tier {
        TierArg::Precise => evaluate::<V, Precise>(function, args)?,
        TierArg::Fast => evaluate::<V, Fast>(function, args)?,
        TierArg::Fastest => evaluate::<V, Fastest>(function, args)?,
    };
    Ok(value.to_string())
}

fn run_eval(width: WidthArg, function: &str, args: &[String], tier: TierArg) -> Result<()> {
    let text = match width {
        WidthArg::Fixed32 => eval_width::<Fixed32>(function, args, tier)?,
        WidthArg::Fixed48 => eval_width::<Fixed48>(function, args, tier)?,
        WidthArg::Fixed64 => eval_width::<Fixed64>(function, args, tier)?,
    };
    println!("{text}");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "valori_fixed_verify=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Digest => run_digest(),
        Commands::Accuracy {
            samples,
            seed,
            tier,
        } => run_accuracy(samples, seed, tier),
        Commands::Eval {
            width,
            function,
            args,
            tier,
        } => run_eval(width, &function, &args, tier).context("eval failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_decimal_arguments() {
        let args = vec!["2".to_string()];
        let v = evaluate::<Fixed64, Precise>("sqrt", &args).unwrap();
        assert!((v.to_f64() - std::f64::consts::SQRT_2).abs() < 1e-8);
        let args = vec!["-1.5".to_string(), "2".to_string()];
        assert_eq!(
            evaluate::<Fixed32, Fast>("mul", &args).unwrap(),
            Fixed32::from_int(-3)
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(evaluate::<Fixed32, Precise>("sqrt", &[]).is_err());
        assert!(evaluate::<Fixed32, Precise>("frobnicate", &["1".to_string()]).is_err());
        assert!(evaluate::<Fixed32, Precise>("sqrt", &["1.5x".to_string()]).is_err());
    }

    #[test]
    fn cli_parses_width_aliases() {
        let cli = Cli::try_parse_from(["valori-fixed-verify", "eval", "64", "atan2", "-1", "-1"]).unwrap();
        match cli.command {
            Commands::Eval { width, args, .. } => {
                assert!(matches!(width, WidthArg::Fixed64));
                assert_eq!(args, vec!["-1", "-1"]);
            }
            _ => panic!("expected eval"),
        }
    }

    #[test]
    fn digest_output_is_hex() {
        let output = DigestOutput::from(DeterminismReport::generate());
        assert_eq!(output.precise.len(), 64);
        assert!(output.fast.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
