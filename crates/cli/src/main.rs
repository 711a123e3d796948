mod config;

use anyhow::Result;
use bulk_whois_client::Client;
use bulk_whois_core::validation::validate_output_format;
use bulk_whois_core::{CreateRequest, DownloadRequest, RecordsRequest, RequestsListRequest};
use clap::{Parser, Subcommand};
use config::Config;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bulk-whois",
    about = "Command line client for the bulk WHOIS lookup API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, help = "Output format of parsed results", default_value = "pretty")]
    format: PrintFormat,

    #[arg(long, help = "Print the response body instead of parsing it")]
    raw: bool,

    #[arg(
        long,
        alias = "response-format",
        help = "Format requested from the API with --raw (json or xml)"
    )]
    output_format: Option<String>,

    #[arg(short, long, help = "Set log level")]
    log_level: Option<String>,

    #[arg(short, long, help = "Path to a TOML configuration file")]
    config: Option<PathBuf>,

    #[arg(long, help = "API key, overrides configuration and environment")]
    api_key: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Create a bulk request for a list of domains")]
    Create {
        #[arg(help = "Domain names to look up")]
        domains: Vec<String>,

        #[arg(long, help = "Request parameters as JSON string")]
        params: Option<String>,
    },

    #[command(about = "List your bulk requests")]
    Requests,

    #[command(about = "Fetch processed WHOIS records of a request")]
    Records {
        #[arg(help = "Request ID")]
        request_id: Option<String>,

        #[arg(long, help = "Maximum number of records to return")]
        max_records: Option<i64>,

        #[arg(long, help = "Index of the first record, starting at 1")]
        start_index: Option<i64>,

        #[arg(long, help = "Request parameters as JSON string")]
        params: Option<String>,
    },

    #[command(about = "Download the CSV results of a request")]
    Download {
        #[arg(help = "Request ID")]
        request_id: Option<String>,

        #[arg(short, long, help = "File to write the results to")]
        output: Option<PathBuf>,

        #[arg(long, help = "Search type (all or noerror)")]
        search_type: Option<String>,

        #[arg(long, help = "Request parameters as JSON string")]
        params: Option<String>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum PrintFormat {
    Json,
    Pretty,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(api_key) = &cli.api_key {
        config.api_key = api_key.clone();
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    debug!(
        base_url = %config.client.base_url,
        timeout_secs = config.client.timeout_secs,
        "Configuration loaded"
    );

    let client = Client::with_config(&config.api_key, config.client.clone())?;

    match cli.command {
        Commands::Create { domains, params } => {
            let request = create_request(domains, params.as_deref())?;
            if cli.raw {
                let request = match &cli.output_format {
                    Some(format) => request.with_output_format(validate_output_format(format)?),
                    None => request,
                };
                println!("{}", client.create_request_raw(&request).await?);
            } else {
                print_result(&client.create_request(&request).await?, cli.format)?;
            }
        }
        Commands::Requests => {
            if cli.raw {
                let request = match &cli.output_format {
                    Some(format) => RequestsListRequest::from_format(format)?,
                    None => RequestsListRequest::new(),
                };
                println!("{}", client.get_requests_raw(&request).await?);
            } else {
                print_result(&client.get_requests().await?, cli.format)?;
            }
        }
        Commands::Records {
            request_id,
            max_records,
            start_index,
            params,
        } => {
            let request = records_request(request_id, max_records, start_index, params.as_deref())?;
            if cli.raw {
                let request = match &cli.output_format {
                    Some(format) => request.with_output_format(validate_output_format(format)?),
                    None => request,
                };
                println!("{}", client.get_records_raw(&request).await?);
            } else {
                print_result(&client.get_records(&request).await?, cli.format)?;
            }
        }
        Commands::Download {
            request_id,
            output,
            search_type,
            params,
        } => {
            let request = download_request(request_id, search_type, params.as_deref())?;
            if cli.raw {
                print!("{}", client.download_raw(&request).await?);
            } else {
                let output = output.unwrap_or_default();
                client.download(&request, &output).await?;
                eprintln!("Saved results to {}", output.display());
            }
        }
    }

    Ok(())
}

fn parse_params(params: &str) -> Result<Value> {
    Ok(serde_json::from_str(params)?)
}

fn create_request(domains: Vec<String>, params: Option<&str>) -> Result<CreateRequest> {
    let request = match params {
        Some(params) => CreateRequest::from_params(&parse_params(params)?)?,
        None if domains.is_empty() => CreateRequest::builder().build()?,
        None => CreateRequest::builder().domains(domains).build()?,
    };
    Ok(request)
}

fn records_request(
    request_id: Option<String>,
    max_records: Option<i64>,
    start_index: Option<i64>,
    params: Option<&str>,
) -> Result<RecordsRequest> {
    if let Some(params) = params {
        return Ok(RecordsRequest::from_params(&parse_params(params)?)?);
    }

    let mut builder = RecordsRequest::builder();
    if let Some(request_id) = request_id {
        builder = builder.request_id(request_id);
    }
    if let Some(max_records) = max_records {
        builder = builder.max_records(max_records);
    }
    if let Some(start_index) = start_index {
        builder = builder.start_index(start_index);
    }
    Ok(builder.build()?)
}

fn download_request(
    request_id: Option<String>,
    search_type: Option<String>,
    params: Option<&str>,
) -> Result<DownloadRequest> {
    if let Some(params) = params {
        return Ok(DownloadRequest::from_params(&parse_params(params)?)?);
    }

    let mut builder = DownloadRequest::builder();
    if let Some(request_id) = request_id {
        builder = builder.request_id(request_id);
    }
    if let Some(search_type) = search_type {
        builder = builder.search_type(search_type);
    }
    Ok(builder.build()?)
}

fn print_result<T: Serialize>(result: &T, format: PrintFormat) -> Result<()> {
    match format {
        PrintFormat::Json => println!("{}", serde_json::to_string(result)?),
        PrintFormat::Pretty => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}
