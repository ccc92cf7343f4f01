use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing::info;
use weather_proxy_core::{Config, OpenMeteoArchive, WeatherProxyHandler, WeatherRequest};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-proxy", version, about = "Historical weather archive proxy")]
pub struct Cli {
    /// Config file; defaults to the platform config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server.
    Serve {
        /// Listen address, e.g. "0.0.0.0:8000".
        #[arg(long)]
        bind: Option<SocketAddr>,

        /// Archive endpoint to forward to.
        #[arg(long)]
        upstream_url: Option<String>,
    },

    /// Fetch one range and print the reshaped JSON.
    Fetch {
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long)]
        start_year: i32,

        #[arg(long)]
        end_year: i32,
    },

    /// Print the effective configuration.
    Config {
        /// Also write it to the config file.
        #[arg(long)]
        init: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let path = match self.config {
            Some(path) => path,
            None => Config::config_file_path()?,
        };
        let mut config = Config::load_from(&path)?;

        match self.command {
            Command::Serve { bind, upstream_url } => {
                if let Some(bind) = bind {
                    config.server.bind = bind;
                }
                if let Some(url) = upstream_url {
                    config.upstream.base_url = url;
                }

                let handler = build_handler(&config)?;
                info!(upstream = %config.upstream.base_url, "starting weather proxy");
                weather_proxy::serve(handler, config.server.bind).await?;
            }
            Command::Fetch { lon, lat, start_year, end_year } => {
                let handler = build_handler(&config)?;
                let request = WeatherRequest { lon, lat, start_year, end_year };

                let response = handler
                    .handle(&request)
                    .await
                    .map_err(|e| anyhow!("{} (status {})", e.detail(), e.status_code()))?;

                let json = serde_json::to_string_pretty(&response)
                    .context("Failed to serialize weather response")?;
                println!("{json}");
            }
            Command::Config { init } => {
                if init {
                    config.save_to(&path)?;
                    eprintln!("Wrote configuration to {}", path.display());
                }
                print!("{}", config.to_toml()?);
            }
        }

        Ok(())
    }
}

fn build_handler(config: &Config) -> anyhow::Result<WeatherProxyHandler> {
    let archive = OpenMeteoArchive::from_config(&config.upstream)
        .context("Failed to build archive client")?;
    Ok(WeatherProxyHandler::new(Arc::new(archive)))
}
