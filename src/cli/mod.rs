//! CLI module for Verdant
//!
//! Provides the decision-support commands:
//! - `rank`: order models by a single metric
//! - `estimate`: project cost and CO2 for one model
//! - `compare`: savings from switching between two models
//! - `recommend`: weighted recommendation from priority sliders
//! - `route`: tiered workload split between a small and a large model

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use verdant_engine::{advisor, Dataset, PriorityWeights, RankMetric};

pub mod catalog;

/// Verdant decision-support CLI
#[derive(Parser, Debug)]
#[command(name = "verdant")]
#[command(about = "LLM cost and carbon decision support")]
#[command(version)]
pub struct Cli {
    /// Path to the model catalog (TOML)
    #[arg(long, global = true, default_value = "models.toml")]
    pub catalog: PathBuf,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank all models by a metric
    Rank {
        /// Metric to rank by
        #[arg(long, value_enum, default_value = "usd-per-million-tokens")]
        metric: MetricArg,
    },
    /// Project cost and CO2 for one model
    Estimate {
        /// Model name
        #[arg(long)]
        model: String,
        /// Estimated monthly token volume
        #[arg(long, default_value_t = 10_000_000)]
        monthly_tokens: u64,
        /// Reporting period
        #[arg(long, value_enum, default_value = "monthly")]
        period: Period,
    },
    /// Compare two models and report savings
    Compare {
        /// Current (or larger) model
        #[arg(long)]
        base: String,
        /// Alternative (or smaller) model
        #[arg(long)]
        alt: String,
        /// Estimated monthly token volume
        #[arg(long, default_value_t = 10_000_000)]
        monthly_tokens: u64,
        /// Reporting period
        #[arg(long, value_enum, default_value = "monthly")]
        period: Period,
    },
    /// Recommend a model for the given priorities
    Recommend {
        /// Cost priority in [0, 1]
        #[arg(long, default_value_t = 0.7)]
        cost: f64,
        /// Carbon priority in [0, 1]
        #[arg(long, default_value_t = 0.7)]
        carbon: f64,
        /// Model-strength priority in [0, 1]
        #[arg(long, default_value_t = 0.5)]
        power: f64,
    },
    /// Split a workload between a small and a large model
    Route {
        /// Small (cheaper) model name
        #[arg(long)]
        small: String,
        /// Large (baseline) model name
        #[arg(long)]
        large: String,
        /// Fraction of tokens routed to the small model, in [0, 1]
        #[arg(long, default_value_t = 0.5)]
        small_share: f64,
        /// Estimated monthly token volume
        #[arg(long, default_value_t = 10_000_000)]
        monthly_tokens: u64,
    },
}

/// Reporting period; maps the UI label to a token multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Period {
    /// One month of traffic
    Monthly,
    /// Three months of traffic
    Quarterly,
    /// Twelve months of traffic
    Yearly,
}

impl Period {
    /// Multiplier applied to the monthly token volume.
    pub fn multiplier(self) -> u32 {
        match self {
            Period::Monthly => 1,
            Period::Quarterly => 3,
            Period::Yearly => 12,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Period::Monthly => "Monthly",
            Period::Quarterly => "Quarterly",
            Period::Yearly => "Yearly",
        }
    }
}

/// Metric argument for `rank`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    /// USD per 1M tokens
    UsdPerMillionTokens,
    /// Grams of CO2 per 1M tokens
    Co2GPerMillionTokens,
    /// Tokens produced per US dollar
    RoiTokensPerDollar,
    /// Tokens per dollar per gram of CO2
    SustainabilityScore,
}

impl From<MetricArg> for RankMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::UsdPerMillionTokens => RankMetric::UsdPerMillionTokens,
            MetricArg::Co2GPerMillionTokens => RankMetric::Co2GPerMillionTokens,
            MetricArg::RoiTokensPerDollar => RankMetric::RoiTokensPerDollar,
            MetricArg::SustainabilityScore => RankMetric::SustainabilityScore,
        }
    }
}

/// Run the CLI command
pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        cmd.print_help()?;
        println!();
        return Ok(());
    };

    let dataset = catalog::load(&cli.catalog)?;

    match command {
        Commands::Rank { metric } => run_rank(&dataset, metric.into(), cli.json),
        Commands::Estimate {
            model,
            monthly_tokens,
            period,
        } => run_estimate(&dataset, &model, monthly_tokens, period, cli.json),
        Commands::Compare {
            base,
            alt,
            monthly_tokens,
            period,
        } => run_compare(&dataset, &base, &alt, monthly_tokens, period, cli.json),
        Commands::Recommend {
            cost,
            carbon,
            power,
        } => run_recommend(&dataset, cost, carbon, power, cli.json),
        Commands::Route {
            small,
            large,
            small_share,
            monthly_tokens,
        } => run_route(&dataset, &small, &large, small_share, monthly_tokens, cli.json),
    }
}

fn run_rank(dataset: &Dataset, metric: RankMetric, json: bool) -> Result<()> {
    let ranked = advisor::rank(dataset, metric);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    println!("{:<20} {:>20}", "Model", "Value");
    println!("{:-<20} {:->20}", "", "");
    for entry in &ranked {
        println!("{:<20} {:>20.4}", entry.name, entry.value);
    }
    Ok(())
}

fn run_estimate(
    dataset: &Dataset,
    model: &str,
    monthly_tokens: u64,
    period: Period,
    json: bool,
) -> Result<()> {
    let record = dataset.get(model)?;
    let projection = advisor::project(record, monthly_tokens, period.multiplier());

    if json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
        return Ok(());
    }

    println!("{} estimate for {}", period.label(), model);
    println!("  Cost (USD): {:.2}", projection.cost_usd);
    println!("  CO2 (kg):   {:.2}", projection.co2_kg);
    Ok(())
}

fn run_compare(
    dataset: &Dataset,
    base: &str,
    alt: &str,
    monthly_tokens: u64,
    period: Period,
    json: bool,
) -> Result<()> {
    let base_record = dataset.get(base)?;
    let alt_record = dataset.get(alt)?;
    let comparison = advisor::compare(base_record, alt_record, monthly_tokens, period.multiplier());

    if json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    println!("{} savings from {} -> {}", period.label(), base, alt);
    println!("  Money saved (USD): {:.2}", comparison.money_saved);
    println!("  Percent saved:     {:.0}%", comparison.percent_saved * 100.0);
    println!("  CO2 saved (kg):    {:.2}", comparison.co2_saved_kg);
    Ok(())
}

fn run_recommend(dataset: &Dataset, cost: f64, carbon: f64, power: f64, json: bool) -> Result<()> {
    let weights = PriorityWeights::new(cost, carbon, power)?;
    let pick = advisor::recommend(dataset, &weights);

    if json {
        println!("{}", serde_json::to_string_pretty(&pick)?);
        return Ok(());
    }

    println!("Suggested model: {}", pick.name);
    println!("  Cost: {:.2e} USD per 1M tokens", pick.usd_per_million_tokens);
    println!("  CO2:  {:.2e} g per 1M tokens", pick.co2_g_per_million_tokens);
    println!("  Strength level: {}", pick.power_tier);
    Ok(())
}

fn run_route(
    dataset: &Dataset,
    small: &str,
    large: &str,
    small_share: f64,
    monthly_tokens: u64,
    json: bool,
) -> Result<()> {
    let small_record = dataset.get(small)?;
    let large_record = dataset.get(large)?;
    let routed = advisor::tiered_routing(small_record, large_record, small_share, monthly_tokens)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&routed)?);
        return Ok(());
    }

    println!(
        "Routing {:.0}% of {} monthly tokens to {}, rest to {}",
        small_share * 100.0,
        monthly_tokens,
        small,
        large
    );
    println!("  Tiered cost (USD):    {:.2}", routed.tiered_cost);
    println!("  Tiered CO2 (kg):      {:.2}", routed.tiered_co2_kg);
    println!("  Baseline cost (USD):  {:.2}", routed.baseline_cost);
    println!("  Baseline CO2 (kg):    {:.2}", routed.baseline_co2_kg);
    println!("  Cost savings (USD):   {:.2}", routed.cost_savings);
    println!("  CO2 savings (kg):     {:.2}", routed.co2_savings_kg);
    Ok(())
}
