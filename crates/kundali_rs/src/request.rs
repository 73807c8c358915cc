//! Birth requests as received from clients.
//!
//! Field names vary between callers, so each field accepts its aliases:
//! `date`/`birthDate`, `time`/`birthTime`, `place`/`birthPlace`,
//! `latitude`/`lat`, `longitude`/`lng`/`lon`. Coordinates may be numbers or
//! numeric strings. A request without coordinates is placed at the
//! configured default location.

use serde::{Deserialize, Deserializer, Serialize};

use kundali_config::LocationSettings;
use kundali_ephem::BirthInput;

use crate::error::KundaliError;

/// Name used when a request carries none.
pub const DEFAULT_NAME: &str = "Native";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BirthRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, alias = "birthDate")]
    pub date: Option<String>,

    #[serde(default, alias = "birthTime")]
    pub time: Option<String>,

    #[serde(default, alias = "birthPlace")]
    pub place: Option<String>,

    #[serde(default, alias = "lat", deserialize_with = "lenient_coordinate")]
    pub latitude: Option<f64>,

    #[serde(
        default,
        alias = "lng",
        alias = "lon",
        deserialize_with = "lenient_coordinate"
    )]
    pub longitude: Option<f64>,
}

fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::String(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::String(s)) => s.trim().parse().map(Some).map_err(D::Error::custom),
    }
}

fn required<'a>(value: &'a Option<String>, what: &str) -> Result<&'a str, KundaliError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| KundaliError::Validation(format!("{what} is required")))
}

impl BirthRequest {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            time: Some(time.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, KundaliError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate and resolve into a [`BirthInput`].
    pub fn to_birth_input(&self, default: &LocationSettings) -> Result<BirthInput, KundaliError> {
        let date = required(&self.date, "date")?;
        let time = required(&self.time, "time")?;

        let (latitude, longitude, place) = match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => (lat, lon, self.place.clone()),
            (None, None) => (
                default.latitude,
                default.longitude,
                self.place.clone().or_else(|| Some(default.place.clone())),
            ),
            _ => {
                return Err(KundaliError::Validation(
                    "latitude and longitude must be given together".to_string(),
                ));
            }
        };

        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_NAME);

        Ok(BirthInput::parse(name, date, time, latitude, longitude, place)?)
    }
}
