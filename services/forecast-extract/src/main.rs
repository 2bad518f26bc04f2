//! NDFD forecast extraction tool.
//!
//! Reads DWML responses (or NWS zone text products) saved from the NDFD
//! services and prints the extracted data as JSON on stdout. Logs go to
//! stderr.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use dwml_parser::{
    lat_lon_points, parse_zone_forecast, Document, ExtractorConfig, ForecastExtractor, Product,
    Strategy, PARAMETER_REGISTRY,
};

#[derive(Parser, Debug)]
#[command(name = "forecast-extract")]
#[command(about = "Extract NDFD DWML forecasts to JSON")]
struct Cli {
    /// Extractor configuration (YAML)
    #[arg(long, env = "NDFD_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info", global = true)]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract parameter series from a DWML document ("-" reads stdin)
    Extract {
        input: PathBuf,

        /// Product the document was requested as: glance, time-series, by-day
        #[arg(long, default_value = "glance")]
        product: Product,

        /// Parameter codes, comma separated (e.g. maxt,mint,wx)
        #[arg(short, long, value_delimiter = ',')]
        params: Vec<String>,
    },

    /// Print the points of a lat/lon list response
    Points { input: PathBuf },

    /// Parse a zone forecast text product
    Zone { input: PathBuf },

    /// List known parameter codes
    Parameters,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs)?;

    let config = match &cli.config {
        Some(path) => ExtractorConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => ExtractorConfig::default(),
    };

    let output = run(&cli.command, config)?;
    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);
    Ok(())
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

fn run(command: &Commands, config: ExtractorConfig) -> Result<serde_json::Value> {
    match command {
        Commands::Extract {
            input,
            product,
            params,
        } => {
            let xml = read_input(input)?;
            let extractor = ForecastExtractor::new(config)?;
            info!(
                input = %input.display(),
                product = %product,
                "Extracting forecast"
            );
            let forecast = extractor
                .extract_product(&xml, *product, params)
                .with_context(|| format!("Failed to extract {}", input.display()))?;
            Ok(serde_json::to_value(forecast)?)
        }
        Commands::Points { input } => {
            let xml = read_input(input)?;
            let doc = Document::parse(&xml)?;
            let points: Vec<[String; 2]> = lat_lon_points(&doc)?
                .into_iter()
                .map(|(lat, lon)| [lat, lon])
                .collect();
            Ok(serde_json::to_value(points)?)
        }
        Commands::Zone { input } => {
            let text = read_input(input)?;
            let forecast = parse_zone_forecast(&text)?;
            Ok(serde_json::to_value(forecast)?)
        }
        Commands::Parameters => {
            let list: Vec<serde_json::Value> = PARAMETER_REGISTRY
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "code": p.code,
                        "name": p.name,
                        "kind": strategy_label(p.strategy),
                    })
                })
                .collect();
            Ok(serde_json::Value::Array(list))
        }
    }
}

fn strategy_label(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Generic { .. } => "scalar",
        Strategy::Rtma => "rtma",
        Strategy::Weather => "weather",
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
