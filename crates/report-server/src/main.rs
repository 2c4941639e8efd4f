//! Insights report HTTP server

use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use clap::{Arg, Command};
use report_core::{ReportConfig, ReportOrchestrator, ReportProcessor};
use report_server::routes;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with INFO as default if RUST_LOG not set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("report-server")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Business A.I. insights report API")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("JSON configuration file (defaults to environment variables)"),
        )
        .arg(
            Arg::new("host")
                .long("host")
                .value_name("HOST")
                .help("Address to bind, overrides configuration"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .value_name("PORT")
                .value_parser(clap::value_parser!(u16))
                .help("Port to listen on, overrides configuration"),
        )
        .get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => {
            let config = ReportConfig::from_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path))?;
            log::info!("Loaded configuration from {}", path);
            config
        }
        None => {
            let config =
                ReportConfig::from_env().context("Failed to load configuration from environment")?;
            log::info!("Loaded configuration from environment");
            config
        }
    };

    if let Some(host) = matches.get_one::<String>("host") {
        config.server.host = host.clone();
    }
    if let Some(port) = matches.get_one::<u16>("port") {
        config.server.port = *port;
    }

    // Fail before binding if the origin cannot be sent as a header
    routes::response_headers(&config.server.allowed_origin)
        .with_context(|| format!("Invalid allowed origin '{}'", config.server.allowed_origin))?;

    let processor = ReportProcessor::from_config(&config)?;
    let orchestrator = web::Data::new(ReportOrchestrator::new(processor));

    log::info!(
        "Starting report server on {}:{} (allowed origin {})",
        config.server.host,
        config.server.port,
        config.server.allowed_origin
    );

    let allowed_origin = config.server.allowed_origin.clone();
    HttpServer::new(move || {
        let headers = routes::response_headers(&allowed_origin)
            .unwrap_or_else(|_| middleware::DefaultHeaders::new());

        App::new()
            .app_data(orchestrator.clone())
            .wrap(headers)
            .wrap(middleware::Logger::default())
            .configure(routes::config::<ReportProcessor>)
    })
    .bind((config.server.host.as_str(), config.server.port))
    .with_context(|| {
        format!(
            "Failed to bind {}:{}",
            config.server.host, config.server.port
        )
    })?
    .run()
    .await?;

    Ok(())
}
