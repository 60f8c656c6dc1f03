//! Firmdex CLI
//!
//! Command-line frontend for the Firmdex company directory. `serve` runs the
//! API server; the remaining commands talk to a running server over HTTP and
//! apply the view model locally — the server only ever hands out the full
//! snapshot.

use std::net::SocketAddr;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use reqwest::StatusCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use firmdex_api::{
    ApiConfig, ApiFailure, ApiServer, CompanyListResponse, CompanyResponse, HealthResponse,
};
use firmdex_core::types::{CompanyRecord, SortDirection, SortKey, ViewState};
use firmdex_view::{distinct_industries, distinct_locations, project};

/// Firmdex - company directory
#[derive(Parser)]
#[command(name = "firmdex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the directory service
    #[arg(long, global = true, env = "FIRMDEX_API_URL", default_value = "http://localhost:5000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "FIRMDEX_PORT", default_value = "5000")]
        port: u16,
        /// Bind address
        #[arg(short, long, default_value = "0.0.0.0")]
        bind: String,
    },

    /// List companies (search, filter, sort, and paginate locally)
    List {
        /// Substring to search in name and location
        #[arg(short, long)]
        search: Option<String>,
        /// Exact location filter
        #[arg(short, long)]
        location: Option<String>,
        /// Exact industry filter
        #[arg(short, long)]
        industry: Option<String>,
        /// Sort key: name, location, industry, employees, or founded
        #[arg(long, default_value = "name")]
        sort: SortKey,
        /// Sort descending
        #[arg(long)]
        desc: bool,
        /// Page to show (1-based; clamped into range)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Show one company by id
    Get {
        /// Company id
        id: u32,
    },

    /// Show the distinct locations and industries (filter choices)
    Facets,

    /// Force the server to refetch from the registry
    Refresh,

    /// Show service health and cache population
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { port, bind } => serve(port, &bind).await,
        Commands::List {
            search,
            location,
            industry,
            sort,
            desc,
            page,
        } => list(&cli.api_url, search, location, industry, sort, desc, page).await,
        Commands::Get { id } => get(&cli.api_url, id).await,
        Commands::Facets => facets(&cli.api_url).await,
        Commands::Refresh => refresh(&cli.api_url).await,
        Commands::Health => health(&cli.api_url).await,
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(port: u16, bind: &str) -> Result<()> {
    let mut config = ApiConfig::from_env();
    config.port = port;

    let addr: SocketAddr = format!("{bind}:{port}")
        .parse()
        .with_context(|| format!("invalid bind address '{bind}:{port}'"))?;

    println!(
        "{} listening on {}",
        "firmdex".bold().green(),
        addr.to_string().cyan()
    );

    ApiServer::new(config)
        .run(addr)
        .await
        .context("server stopped unexpectedly")?;

    Ok(())
}

/// Fetches the full snapshot. A transport failure means the service is
/// unreachable, which gets its own message and retry hint; that is a
/// different condition from the server answering with `success: false`.
async fn fetch_companies(api_url: &str) -> Result<CompanyListResponse> {
    let response = reqwest::get(format!("{api_url}/api/companies"))
        .await
        .with_context(|| unreachable_hint(api_url))?;

    parse_list_response(response).await
}

async fn parse_list_response(response: reqwest::Response) -> Result<CompanyListResponse> {
    if !response.status().is_success() {
        let status = response.status();
        let failure: ApiFailure = response
            .json()
            .await
            .context("service answered with an unreadable error body")?;
        bail!("service error ({status}): {}", failure.message);
    }

    response
        .json()
        .await
        .context("service answered with an unexpected body")
}

#[allow(clippy::too_many_arguments)]
async fn list(
    api_url: &str,
    search: Option<String>,
    location: Option<String>,
    industry: Option<String>,
    sort: SortKey,
    desc: bool,
    page: usize,
) -> Result<()> {
    let list = fetch_companies(api_url).await?;

    let mut state = ViewState::default();
    if let Some(search) = search {
        state.set_search_term(search);
    }
    if let Some(location) = location {
        state.set_location_filter(location);
    }
    if let Some(industry) = industry {
        state.set_industry_filter(industry);
    }
    state.set_sort_key(sort);
    state.set_sort_direction(if desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    });
    // Page last: every setter above resets to page 1.
    state.set_page(page);

    let result = project(&list.data, &state);

    if result.records.is_empty() {
        println!("{}", "No companies match the active filters.".yellow());
        return Ok(());
    }

    print_table(&result.records);
    println!(
        "{}",
        format!(
            "page {} of {} ({} matching, source: {})",
            result.page, result.total_pages, result.total_matching, list.source
        )
        .dimmed()
    );

    Ok(())
}

async fn get(api_url: &str, id: u32) -> Result<()> {
    let response = reqwest::get(format!("{api_url}/api/companies/{id}"))
        .await
        .with_context(|| unreachable_hint(api_url))?;

    if response.status() == StatusCode::NOT_FOUND {
        println!("{}", format!("Company {id} not found.").yellow());
        return Ok(());
    }
    if !response.status().is_success() {
        let status = response.status();
        let failure: ApiFailure = response
            .json()
            .await
            .context("service answered with an unreadable error body")?;
        bail!("service error ({status}): {}", failure.message);
    }

    let company: CompanyResponse = response
        .json()
        .await
        .context("service answered with an unexpected body")?;
    let record = company.data;

    println!("{} (id {})", record.name.bold(), record.id);
    println!("  location:  {}", record.location);
    println!("  industry:  {}", record.industry);
    println!("  employees: {}", record.employees);
    println!("  founded:   {}", record.founded);
    if let Some(ticker) = &record.ticker {
        println!("  ticker:    {}", ticker.green());
    }

    Ok(())
}

async fn facets(api_url: &str) -> Result<()> {
    let list = fetch_companies(api_url).await?;

    println!("{}", "Locations".bold());
    for location in distinct_locations(&list.data) {
        println!("  {location}");
    }
    println!("{}", "Industries".bold());
    for industry in distinct_industries(&list.data) {
        println!("  {industry}");
    }

    Ok(())
}

async fn refresh(api_url: &str) -> Result<()> {
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{api_url}/api/companies/refresh"))
        .send()
        .await
        .with_context(|| unreachable_hint(api_url))?;

    let list = parse_list_response(response).await?;
    println!(
        "{} {} companies (source: {})",
        "Refreshed:".green().bold(),
        list.count,
        list.source
    );

    Ok(())
}

async fn health(api_url: &str) -> Result<()> {
    let response = reqwest::get(format!("{api_url}/api/health"))
        .await
        .with_context(|| unreachable_hint(api_url))?;

    let health: HealthResponse = response
        .json()
        .await
        .context("service answered with an unexpected body")?;

    let status = if health.success {
        health.status.green()
    } else {
        health.status.red()
    };
    println!("status:    {status}");
    println!("companies: {}", health.companies);
    if let Some(source) = health.source {
        println!("source:    {source}");
    }
    if let Some(fetched_at) = health.fetched_at {
        println!("fetched:   {fetched_at}");
    }

    Ok(())
}

fn unreachable_hint(api_url: &str) -> String {
    format!("cannot reach the directory service at {api_url}; start one with `firmdex serve`, then retry")
}

fn print_table(records: &[CompanyRecord]) {
    let name_width = column_width(records.iter().map(|r| r.name.len()), 4);
    let location_width = column_width(records.iter().map(|r| r.location.len()), 8);
    let industry_width = column_width(records.iter().map(|r| r.industry.len()), 8);

    let header = format!(
        "{:>4}  {:name_width$}  {:location_width$}  {:industry_width$}  {:>9}  {:>7}  {}",
        "ID", "NAME", "LOCATION", "INDUSTRY", "EMPLOYEES", "FOUNDED", "TICKER",
    );
    println!("{}", header.bold());

    for record in records {
        println!(
            "{:>4}  {:name_width$}  {:location_width$}  {:industry_width$}  {:>9}  {:>7}  {}",
            record.id,
            record.name,
            record.location,
            record.industry,
            record.employees,
            record.founded,
            record.ticker.as_deref().unwrap_or("-"),
        );
    }
}

fn column_width(lengths: impl Iterator<Item = usize>, min: usize) -> usize {
    lengths.fold(min, usize::max)
}
