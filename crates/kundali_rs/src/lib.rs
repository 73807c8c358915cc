//! Convenience facade for the kundali backend.
//!
//! Accepts loosely named birth requests, resolves them against the loaded
//! configuration and returns serializable reports wrapped in JSON
//! envelopes.
//!
//! ```
//! use kundali_rs::*;
//!
//! let config = KundaliConfig::default();
//! let req = BirthRequest::new("1990-01-15", "10:30").with_coordinates(13.0827, 80.2707);
//! let report = birth_chart(&req, &config)?;
//! assert_eq!(report.chart.positions.len(), 10);
//! let json = Envelope::ok(report).to_json()?;
//! assert!(json.contains("\"success\": true"));
//! # Ok::<(), KundaliError>(())
//! ```

pub mod convenience;
pub mod envelope;
pub mod error;
pub mod request;

pub use convenience::{
    ChartReport, DashaBalance, DashaOptions, DashaReport, NakshatraReport, PanchangReport,
    birth_chart, dasha, engine_chart, nakshatra, panchang, panchang_for_chart,
};
pub use envelope::{Envelope, ErrorBody};
pub use error::{ApiErrorKind, KundaliError};
pub use request::{BirthRequest, DEFAULT_NAME};

// Re-export the types callers need so they can depend on this crate alone.
pub use kundali_bridge::{EngineBridge, EngineResult, EngineTier, HealthReport};
pub use kundali_config::{KundaliConfig, LocationSettings};
pub use kundali_ephem::{BirthChart, BirthInput, ChartPoint, PlanetaryPosition};
pub use kundali_vedic::{
    DashaPeriod, DashaStatus, DashaTimeline, Graha, Nakshatra, PanchangResult, Rashi,
    RemainingTime, SubPeriodMethod,
};
