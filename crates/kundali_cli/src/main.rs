//! `kundali` command-line front end.
//!
//! Every subcommand prints one JSON envelope on stdout; logs go to stderr
//! at the level given by `RUST_LOG` (default: info). The process exits with
//! status 1 when the envelope reports failure.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{Level, debug, info, warn};
use tracing_subscriber::FmtSubscriber;

use kundali_rs::{
    BirthRequest, DashaBalance, DashaOptions, EngineBridge, Envelope, KundaliConfig,
    KundaliError, SubPeriodMethod,
};
use kundali_time::{parse_date, parse_time};

#[derive(Parser)]
#[command(name = "kundali", version, about = "Vedic astrology calculations")]
struct Cli {
    /// Path to a kundali.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print compact single-line JSON
    #[arg(long, global = true)]
    compact: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sidereal birth chart from the built-in ephemeris
    Chart(BirthArgs),
    /// Tithi, yoga, karan, nakshatra, weekday, sunrise and sunset
    Panchang(BirthArgs),
    /// Vimshottari dasha timeline
    Dasha {
        #[command(flatten)]
        birth: BirthArgs,
        /// Evaluate at this local time (YYYY-MM-DD[ HH:MM[:SS]]); default now
        #[arg(long)]
        now: Option<String>,
        /// Shorten the first mahadasha by the Moon's progress in its nakshatra
        #[arg(long)]
        moon_balance: bool,
        /// How sub-periods are derived
        #[arg(long, value_enum, default_value_t = Method::Proportional)]
        method: Method,
    },
    /// Nakshatra and rashi of a sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Chart from the external engines (primary, then fallback)
    Engine(BirthArgs),
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date, YYYY-MM-DD
    #[arg(long, required_unless_present = "request")]
    date: Option<String>,
    /// Local birth time, HH:MM[:SS]
    #[arg(long, required_unless_present = "request")]
    time: Option<String>,
    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    lon: Option<f64>,
    #[arg(long)]
    place: Option<String>,
    #[arg(long)]
    name: Option<String>,
    /// Read a JSON birth request from this file ("-" for stdin); flags
    /// given alongside override its fields
    #[arg(long)]
    request: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Method {
    Proportional,
    ElapsedFraction,
}

impl From<Method> for SubPeriodMethod {
    fn from(m: Method) -> Self {
        match m {
            Method::Proportional => SubPeriodMethod::Proportional,
            Method::ElapsedFraction => SubPeriodMethod::ElapsedFraction,
        }
    }
}

impl BirthArgs {
    /// Build the birth request. Unreadable or malformed request input is a
    /// validation failure and is reported through the envelope.
    fn to_request(&self) -> Result<BirthRequest, KundaliError> {
        let mut req = match &self.request {
            Some(path) => {
                let json = if path.as_os_str() == "-" {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf).map_err(|e| {
                        KundaliError::Validation(format!("reading birth request from stdin: {e}"))
                    })?;
                    buf
                } else {
                    std::fs::read_to_string(path).map_err(|e| {
                        KundaliError::Validation(format!(
                            "reading birth request {}: {e}",
                            path.display()
                        ))
                    })?
                };
                BirthRequest::from_json(&json)?
            }
            None => BirthRequest::default(),
        };

        if self.date.is_some() {
            req.date.clone_from(&self.date);
        }
        if self.time.is_some() {
            req.time.clone_from(&self.time);
        }
        if self.lat.is_some() {
            req.latitude = self.lat;
        }
        if self.lon.is_some() {
            req.longitude = self.lon;
        }
        if self.place.is_some() {
            req.place.clone_from(&self.place);
        }
        if self.name.is_some() {
            req.name.clone_from(&self.name);
        }
        Ok(req)
    }
}

/// Parse `YYYY-MM-DD`, `YYYY-MM-DD HH:MM[:SS]` or `YYYY-MM-DDTHH:MM[:SS]`.
fn parse_now(s: &str) -> Result<NaiveDateTime, KundaliError> {
    let s = s.trim();
    let (date, time) = match s.split_once(['T', ' ']) {
        Some((d, t)) => (d, Some(t)),
        None => (s, None),
    };
    let date = parse_date(date).map_err(|e| KundaliError::Validation(e.to_string()))?;
    let time = match time {
        Some(t) => parse_time(t).map_err(|e| KundaliError::Validation(e.to_string()))?,
        None => chrono::NaiveTime::MIN,
    };
    Ok(date.and_time(time))
}

fn emit<T: Serialize>(result: Result<T, KundaliError>, compact: bool) -> anyhow::Result<bool> {
    let envelope = Envelope::from_result(result);
    let json = if compact {
        serde_json::to_string(&envelope)?
    } else {
        serde_json::to_string_pretty(&envelope)?
    };
    println!("{json}");
    if let Some(failure) = &envelope.failure {
        warn!(status = envelope.status_code(), error = %failure.error, "Request failed");
    }
    Ok(envelope.success)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let config = KundaliConfig::load(cli.config.clone()).context("loading configuration")?;
    debug!(?config, "Configuration loaded");

    let ok = match &cli.command {
        Commands::Chart(birth) => emit(
            birth.to_request().and_then(|req| kundali_rs::birth_chart(&req, &config)),
            cli.compact,
        )?,
        Commands::Panchang(birth) => emit(
            birth.to_request().and_then(|req| kundali_rs::panchang(&req, &config)),
            cli.compact,
        )?,
        Commands::Dasha {
            birth,
            now,
            moon_balance,
            method,
        } => {
            let options = DashaOptions {
                balance: if *moon_balance {
                    DashaBalance::MoonLongitude
                } else {
                    DashaBalance::BirthNakshatra
                },
                sub_period_method: (*method).into(),
            };
            let result = birth.to_request().and_then(|req| {
                let now = now
                    .as_deref()
                    .map(parse_now)
                    .transpose()?
                    .unwrap_or_else(|| chrono::Local::now().naive_local());
                kundali_rs::dasha(&req, now, &options, &config)
            });
            emit(result, cli.compact)?
        }
        Commands::Nakshatra { lon } => emit(kundali_rs::nakshatra(*lon), cli.compact)?,
        Commands::Engine(birth) => {
            let bridge = EngineBridge::from_config(&config);
            info!(
                primary = %bridge.primary().program,
                fallback = %bridge.fallback().program,
                "Requesting engine chart"
            );
            let result = match birth.to_request() {
                Ok(req) => kundali_rs::engine_chart(&req, &config, &bridge).await,
                Err(e) => Err(e),
            };
            let ok = emit(result, cli.compact)?;
            let health = bridge.health();
            debug!(status = %health.status, failures = health.total_failures, "Engine health");
            ok
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
