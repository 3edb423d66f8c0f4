//! Command definitions and execution.

use crate::render;
use anyhow::{Context, Result};
use civigraph::domain_urban;
use civigraph::prelude::*;
use civigraph::query::templates;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "civigraph",
    version,
    about = "Urban-policy conflict knowledge-graph pipeline"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the urban-conflict knowledge base, compute its closure and
    /// save a snapshot
    Build {
        /// Snapshot destination
        #[arg(short, long, default_value = "civigraph.json")]
        output: PathBuf,
        /// Save only asserted facts; the closure is recomputed on load
        #[arg(long)]
        asserted_only: bool,
    },
    /// Validate a knowledge base and print the report
    Validate {
        /// Snapshot to validate; the bundled case study when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Run an analytical query template
    Query {
        #[arg(value_enum)]
        template: TemplateName,
        /// Focus resource IRI, for templates that accept one
        #[arg(long)]
        focus: Option<String>,
        /// Snapshot to query; the bundled case study when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Print store and closure statistics
    Stats {
        /// Snapshot to inspect; the bundled case study when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateName {
    NormativeConflicts,
    AmbiguousActors,
    CausalChains,
    ConflictingInstruments,
    SpatialOverlaps,
    LegalBreaches,
    InstitutionalFragmentation,
    Reversals,
    MarketPressure,
    JurisdictionConflicts,
    FullNarrative,
}

/// Execute a command; `false` means a clean run with a failing verdict.
pub fn execute(command: Command) -> Result<bool> {
    match command {
        Command::Build {
            output,
            asserted_only,
        } => build(&output, asserted_only),
        Command::Validate { input } => validate(input.as_deref()),
        Command::Query {
            template,
            focus,
            input,
        } => query(template, focus.as_deref(), input.as_deref()),
        Command::Stats { input } => stats(input.as_deref()),
    }
}

/// Load boundary: the one fatal failure point of the pipeline.
fn load_pipeline(input: Option<&Path>) -> Result<Pipeline> {
    let mut pipeline = match input {
        Some(path) => {
            let store = civigraph::io::load(path)
                .with_context(|| format!("loading snapshot {}", path.display()))?;
            Pipeline::from_store(store)
        }
        None => Pipeline::urban_conflict(),
    };
    pipeline.compute_closure()?;
    Ok(pipeline)
}

fn build(output: &Path, asserted_only: bool) -> Result<bool> {
    let mut pipeline = Pipeline::urban_conflict();
    let stats = pipeline.compute_closure()?;
    tracing::debug!(
        iterations = stats.iterations,
        inferred = stats.inferred(),
        "closure computed"
    );
    let snapshot = if asserted_only {
        civigraph::io::Snapshot::asserted(pipeline.store())
    } else {
        civigraph::io::Snapshot::full(pipeline.store())
    };
    civigraph::io::save(&snapshot, output)?;
    println!(
        "built knowledge base: {} facts ({} inferred), saved {} to {}",
        pipeline.store().len(),
        stats.inferred(),
        snapshot.facts.len(),
        output.display()
    );
    Ok(true)
}

fn validate(input: Option<&Path>) -> Result<bool> {
    let pipeline = load_pipeline(input)?;
    let report = pipeline.validate(&domain_urban::expected_classes());
    print!("{}", render::render_report(&report));
    Ok(report.is_valid())
}

fn query(template: TemplateName, focus: Option<&str>, input: Option<&Path>) -> Result<bool> {
    let pipeline = load_pipeline(input)?;
    let store = pipeline.store();
    let focus_resource = focus.map(Resource::new);

    let rows = match template {
        TemplateName::NormativeConflicts => templates::normative_conflicts(store),
        TemplateName::AmbiguousActors => templates::ambiguous_actors(store),
        TemplateName::CausalChains => templates::causal_chains(store, focus_resource.as_ref()),
        TemplateName::ConflictingInstruments => templates::conflicting_instruments(store),
        TemplateName::SpatialOverlaps => templates::spatial_overlaps(store),
        TemplateName::LegalBreaches => templates::legal_breaches(store),
        TemplateName::InstitutionalFragmentation => {
            templates::institutional_fragmentation(store, &pipeline.schema())
        }
        TemplateName::Reversals => templates::benefit_harm_reversals(store),
        TemplateName::MarketPressure => templates::market_pressure(store),
        TemplateName::JurisdictionConflicts => templates::jurisdiction_conflicts(store),
        TemplateName::FullNarrative => templates::full_narrative(store),
    };
    print!("{}", render::render_rows(store, &rows));
    Ok(true)
}

fn stats(input: Option<&Path>) -> Result<bool> {
    let mut pipeline = load_pipeline(input)?;
    // The store is already closed; this run only reports the fixpoint.
    let closure = pipeline.compute_closure()?;
    let store_stats = pipeline.store().statistics();
    println!("facts:    {}", store_stats.total_facts);
    println!("asserted: {}", store_stats.asserted_facts);
    println!("inferred: {}", store_stats.inferred_facts);
    println!("closure iterations (re-run): {}", closure.iterations);
    Ok(true)
}
