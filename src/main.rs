use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dreamdns::api::{DreamhostApi, DreamhostClient};
use dreamdns::config::{ConfigError, Settings, API_KEY_VAR, CHECK_IPV6_VAR, DOMAIN_VAR};
use dreamdns::records::{self, AddressFamily};
use dreamdns::runner;

#[derive(Parser)]
#[command(name = "dreamdns")]
#[command(about = "DreamHost dynamic DNS updater - syncs A/AAAA records with this host's public address")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one reconciliation pass against DreamHost
    Run,

    /// Show current public address(es) and published records without changing anything
    Check,

    /// Show the environment-derived configuration
    Config,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging();

    match cli.command {
        Commands::Run => {
            let settings = load_settings_or_exit();
            let client = DreamhostClient::new(&settings.api_key);

            if let Err(e) = runner::run(&settings, &client).await {
                let chain = format!("{e:#}");
                error!(error = %chain, "update pass failed");
                std::process::exit(1);
            }
        }

        Commands::Check => {
            let settings = load_settings_or_exit();
            let client = DreamhostClient::new(&settings.api_key);

            if let Err(e) = check_status(&settings, &client).await {
                let chain = format!("{e:#}");
                error!(error = %chain, "check failed");
                std::process::exit(1);
            }
        }

        Commands::Config => {
            show_config();
        }
    }
}

fn load_settings_or_exit() -> Settings {
    match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "missing configuration");
            std::process::exit(1);
        }
    }
}

async fn check_status(settings: &Settings, client: &DreamhostClient) -> Result<()> {
    println!("Checking public addresses for {}...\n", settings.domain);

    let mut families = vec![AddressFamily::V4];
    if settings.check_ipv6 {
        families.push(AddressFamily::V6);
    }

    for family in &families {
        match client.current_host_address(*family).await {
            Ok(addr) => println!("Host {} address: {}", family, addr),
            Err(e) => println!("Host {} address: Error - {}", family, e),
        }
    }

    println!("\nChecking published records...\n");

    let listing = client.list_records().await?;
    let parsed = records::parse(&listing, &settings.domain);

    for family in &families {
        match records::select(&parsed, &settings.domain, *family) {
            Some(rec) => {
                println!("{} ({}): {}", settings.domain, rec.record_type, rec.value)
            }
            None => println!(
                "{} ({}): no record published",
                settings.domain,
                family.record_type()
            ),
        }
    }

    Ok(())
}

fn show_config() {
    println!("Configuration is read from the environment:\n");
    println!("  {:<24} API key (required)", API_KEY_VAR);
    println!("  {:<24} domain to keep updated (required)", DOMAIN_VAR);
    println!(
        "  {:<24} \"1\"/\"true\"/\"yes\" to also manage the AAAA record",
        CHECK_IPV6_VAR
    );
    println!();

    match Settings::from_env() {
        Ok(settings) => {
            println!("Current configuration:\n");
            match toml::to_string_pretty(&settings.redacted()) {
                Ok(rendered) => println!("{rendered}"),
                Err(e) => println!("Failed to render configuration: {e}"),
            }
        }
        Err(e) => {
            println!("Configuration incomplete: {e}");
        }
    }
}
