//! everlake-matcher CLI
//!
//! Generates ranked supplier suggestions for a call for tenders, samples the
//! score distribution, or builds the quote requests for a selection.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use everlake_matcher::catalog::CITY_FACETS;
use everlake_matcher::config::MatcherConfig;
use everlake_matcher::filter::SuggestionFilter;
use everlake_matcher::generator::generate_suppliers_with;
use everlake_matcher::models::{CompanySize, TenderCriteria};
use everlake_matcher::reporting::{display_criteria, display_dispatch, display_distribution, display_suggestions};
use everlake_matcher::sampling::sample_scores;
use everlake_matcher::selection::{build_quote_requests, NetworkContact, Selection, TenderRef};

/// Supplier suggestions for calls for tenders
#[derive(Parser, Debug)]
#[command(name = "everlake-matcher")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// TOML config file (count, seed, runs, [criteria])
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Tender sector slug, e.g. btp-construction
    #[arg(long, global = true)]
    sector: Option<String>,

    /// Tender location, "<code> - <name>"
    #[arg(long, global = true)]
    location: Option<String>,

    /// Procurement type ("services", "produits", ...)
    #[arg(long, global = true)]
    procurement_type: Option<String>,

    /// Suggestions per list
    #[arg(short = 'n', long, global = true)]
    count: Option<usize>,

    /// RNG seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate and display ranked suggestions
    Suggest {
        /// Free-text search over name, city and specialties
        #[arg(long, default_value = "")]
        search: String,

        /// micro, small-medium or mid-size
        #[arg(long)]
        size: Option<CompanySize>,

        /// City facet
        #[arg(long, ignore_case = true, value_parser = PossibleValuesParser::new(CITY_FACETS.iter().copied()))]
        city: Option<String>,

        /// Print JSON instead of the table
        #[arg(long)]
        json: bool,
    },

    /// Generate many lists and summarise the score distribution
    Sample {
        #[arg(long)]
        runs: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Build quote requests for selected suggestions and network contacts
    Send {
        #[arg(long)]
        tender_id: String,

        #[arg(long)]
        tender_title: String,

        /// Selected supplier ids (supplier-1,supplier-4)
        #[arg(long, value_delimiter = ',')]
        select: Vec<String>,

        /// Network contact as "id;company;location" (repeatable)
        #[arg(long = "contact", value_parser = parse_contact)]
        contacts: Vec<NetworkContact>,

        #[arg(long)]
        json: bool,
    },
}

fn parse_contact(raw: &str) -> Result<NetworkContact, String> {
    let mut parts = raw.splitn(3, ';');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(id), Some(company), Some(location)) if !id.is_empty() => Ok(NetworkContact {
            id: id.to_string(),
            company_name: company.to_string(),
            location: location.to_string(),
        }),
        _ => Err(format!("expected \"id;company;location\", got \"{}\"", raw)),
    }
}

fn criteria_from(cli: &Cli, config: &MatcherConfig) -> TenderCriteria {
    let mut criteria = config.criteria.clone();
    if let Some(sector) = &cli.sector {
        criteria.sector = sector.clone();
    }
    if let Some(location) = &cli.location {
        criteria.location = location.clone();
    }
    if let Some(procurement_type) = &cli.procurement_type {
        criteria.procurement_type = procurement_type.clone();
    }
    criteria
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &cli.config {
        Some(path) => MatcherConfig::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => MatcherConfig::default(),
    };

    let criteria = criteria_from(&cli, &config);
    let count = cli.count.unwrap_or(config.count);
    let mut rng = match cli.seed.or(config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let now = Utc::now();

    info!(sector = %criteria.sector, location = %criteria.location, count, "starting");

    match cli.command {
        None => {
            let suppliers = generate_suppliers_with(&criteria, count, &mut rng, now);
            display_criteria(&criteria);
            display_suggestions(&suppliers.iter().collect::<Vec<_>>());
        }
        Some(Command::Suggest { search, size, city, json }) => {
            let suppliers = generate_suppliers_with(&criteria, count, &mut rng, now);
            let visible = SuggestionFilter { search, size, city }.apply(&suppliers);

            if json {
                println!("{}", serde_json::to_string_pretty(&visible).context("serializing suggestions")?);
            } else {
                display_criteria(&criteria);
                display_suggestions(&visible);
            }
        }
        Some(Command::Sample { runs, json }) => {
            let runs = runs.unwrap_or(config.runs);
            let dist = sample_scores(&criteria, count, runs, &mut rng, now);

            if json {
                println!("{}", serde_json::to_string_pretty(&dist).context("serializing distribution")?);
            } else {
                display_distribution(&dist);
            }
        }
        Some(Command::Send { tender_id, tender_title, select, contacts, json }) => {
            let suppliers = generate_suppliers_with(&criteria, count, &mut rng, now);

            let mut selection = Selection::new();
            for id in &select {
                if !selection.contains(id) {
                    selection.toggle(id);
                }
            }
            let selected = selection.resolve_strict(&suppliers)?;

            let tender = TenderRef { id: tender_id, title: tender_title };
            let dispatch = build_quote_requests(Some(&tender), &contacts, &selected)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&dispatch).context("serializing quote requests")?);
            } else {
                display_dispatch(&dispatch);
            }
        }
    }

    Ok(())
}
