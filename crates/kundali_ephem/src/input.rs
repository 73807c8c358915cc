//! Birth input: who, when and where.
//!
//! A `BirthInput` is validated at construction and immutable afterwards.
//! Its serialized form is the payload handed to external chart engines:
//! `{name, date "YYYY-MM-DD", time "HH:MM:SS", latitude, longitude, place?}`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use kundali_time::{LocalDateTime, parse_date, parse_time};

use crate::error::EphemError;

/// Validated birth data. Date and time are local civil values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "BirthWire", try_from = "BirthWire")]
pub struct BirthInput {
    name: String,
    date: NaiveDate,
    time: NaiveTime,
    latitude: f64,
    longitude: f64,
    place: Option<String>,
}

impl BirthInput {
    /// Build from already-parsed values, validating the coordinates.
    pub fn new(
        name: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        latitude: f64,
        longitude: f64,
        place: Option<String>,
    ) -> Result<Self, EphemError> {
        validate_coordinates(latitude, longitude)?;
        Ok(Self {
            name: name.into(),
            date,
            time,
            latitude,
            longitude,
            place: place.filter(|p| !p.trim().is_empty()),
        })
    }

    /// Build from `YYYY-MM-DD` and `HH:MM[:SS]` strings.
    pub fn parse(
        name: impl Into<String>,
        date: &str,
        time: &str,
        latitude: f64,
        longitude: f64,
        place: Option<String>,
    ) -> Result<Self, EphemError> {
        Self::new(name, parse_date(date)?, parse_time(time)?, latitude, longitude, place)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn place(&self) -> Option<&str> {
        self.place.as_deref()
    }

    /// Local civil instant of birth.
    pub fn datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn local(&self) -> LocalDateTime {
        LocalDateTime::from_naive(self.datetime())
    }
}

/// Reject non-finite or out-of-range geographic coordinates.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), EphemError> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(EphemError::InvalidLatitude(latitude));
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(EphemError::InvalidLongitude(longitude));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BirthWire {
    #[serde(default)]
    name: String,
    date: String,
    time: String,
    latitude: f64,
    longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    place: Option<String>,
}

impl From<BirthInput> for BirthWire {
    fn from(b: BirthInput) -> Self {
        Self {
            name: b.name,
            date: b.date.format("%Y-%m-%d").to_string(),
            time: b.time.format("%H:%M:%S").to_string(),
            latitude: b.latitude,
            longitude: b.longitude,
            place: b.place,
        }
    }
}

impl TryFrom<BirthWire> for BirthInput {
    type Error = EphemError;

    fn try_from(w: BirthWire) -> Result<Self, Self::Error> {
        Self::parse(w.name, &w.date, &w.time, w.latitude, w.longitude, w.place)
    }
}
