//! Engine reply shapes.
//!
//! The primary engine answers in the canonical [`EngineResult`] shape. The
//! fallback nests its chart and uses camelCase names; [`FallbackResult`]
//! is converted into the canonical shape and tagged "(via Fallback)".

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use kundali_config::EngineSettings;
use kundali_vedic::normalize_360;

use crate::error::EngineFailure;

/// Which tier produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineTier {
    #[default]
    Primary,
    Fallback,
}

impl std::fmt::Display for EngineTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnginePlanet {
    pub name: String,
    /// Sidereal longitude, degrees [0, 360).
    pub longitude: f64,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub retrograde: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rashi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nakshatra: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineAscendant {
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rashi: Option<String>,
}

/// Canonical engine result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineResult {
    pub success: bool,
    #[serde(default)]
    pub planets: Vec<EnginePlanet>,
    #[serde(default)]
    pub ascendant: Option<EngineAscendant>,
    /// Dasha block as produced by the engine; passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dasha: Option<Value>,
    #[serde(default)]
    pub ayanamsa: Option<f64>,
    #[serde(default)]
    pub julian_day: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub engine: EngineTier,
    /// Label of the engine that answered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// A parsed engine reply that can be turned into the canonical shape.
pub trait EngineReply: DeserializeOwned {
    fn into_result(self, settings: &EngineSettings) -> Result<EngineResult, EngineFailure>;
}

fn reported(error: Option<String>) -> EngineFailure {
    EngineFailure::Reported(error.unwrap_or_else(|| "success was false".to_string()))
}

impl EngineReply for EngineResult {
    fn into_result(mut self, settings: &EngineSettings) -> Result<EngineResult, EngineFailure> {
        if !self.success {
            return Err(reported(self.error));
        }
        for p in &mut self.planets {
            p.longitude = normalize_360(p.longitude);
        }
        if let Some(asc) = &mut self.ascendant {
            asc.longitude = normalize_360(asc.longitude);
        }
        self.engine = EngineTier::Primary;
        self.source = Some(settings.label.clone());
        Ok(self)
    }
}

// =============================================================================
// Fallback shape
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackPlanet {
    #[serde(alias = "name")]
    pub planet: String,
    #[serde(alias = "longitude")]
    pub sidereal_longitude: f64,
    #[serde(default, alias = "latitude")]
    pub lat: f64,
    #[serde(default)]
    pub speed: f64,
    #[serde(default, alias = "retrograde")]
    pub is_retrograde: bool,
    #[serde(default, alias = "rashi")]
    pub sign: Option<String>,
    #[serde(default)]
    pub nakshatra: Option<FallbackNakshatra>,
}

/// Nakshatra as either a bare name or `{ "name": ... }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FallbackNakshatra {
    Name(String),
    Detail { name: String },
}

impl FallbackNakshatra {
    fn into_name(self) -> String {
        match self {
            Self::Name(name) | Self::Detail { name } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackLagna {
    #[serde(alias = "degree")]
    pub longitude: f64,
    #[serde(default, alias = "rashi")]
    pub sign: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackChart {
    #[serde(default)]
    pub planets: Vec<FallbackPlanet>,
    #[serde(default, alias = "ascendant")]
    pub lagna: Option<FallbackLagna>,
    #[serde(default)]
    pub ayanamsa: Option<f64>,
    #[serde(default, alias = "jd")]
    pub julian_day: Option<f64>,
}

/// Reply shape of the fallback engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub chart: Option<FallbackChart>,
    #[serde(default, alias = "dashas")]
    pub dasha: Option<Value>,
    #[serde(default, alias = "message")]
    pub error: Option<String>,
}

impl EngineReply for FallbackResult {
    fn into_result(self, settings: &EngineSettings) -> Result<EngineResult, EngineFailure> {
        if !self.success {
            return Err(reported(self.error));
        }
        let chart = self
            .chart
            .ok_or_else(|| EngineFailure::Reported("reply has no chart".to_string()))?;

        let planets = chart
            .planets
            .into_iter()
            .map(|p| EnginePlanet {
                name: p.planet,
                longitude: normalize_360(p.sidereal_longitude),
                latitude: p.lat,
                speed: p.speed,
                retrograde: p.is_retrograde,
                rashi: p.sign,
                nakshatra: p.nakshatra.map(FallbackNakshatra::into_name),
            })
            .collect();

        Ok(EngineResult {
            success: true,
            planets,
            ascendant: chart.lagna.map(|l| EngineAscendant {
                longitude: normalize_360(l.longitude),
                rashi: l.sign,
            }),
            dasha: self.dasha,
            ayanamsa: chart.ayanamsa,
            julian_day: chart.julian_day,
            error: None,
            engine: EngineTier::Fallback,
            source: Some(format!("{} (via Fallback)", settings.label)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(label: &str) -> EngineSettings {
        EngineSettings {
            program: "engine".into(),
            args: vec![],
            timeout_ms: 1_000,
            label: label.into(),
        }
    }

    #[test]
    fn primary_success_tagged() {
        let reply: EngineResult = serde_json::from_str(
            r#"{"success":true,"planets":[{"name":"Sun","longitude":361.5}],"ayanamsa":23.7}"#,
        )
        .unwrap();
        let result = reply.into_result(&settings("swiss")).unwrap();
        assert_eq!(result.engine, EngineTier::Primary);
        assert_eq!(result.source.as_deref(), Some("swiss"));
        assert!((result.planets[0].longitude - 1.5).abs() < 1e-12);
    }

    #[test]
    fn primary_reported_failure() {
        let reply: EngineResult =
            serde_json::from_str(r#"{"success":false,"error":"invalid date"}"#).unwrap();
        let err = reply.into_result(&settings("swiss")).unwrap_err();
        assert_eq!(err.to_string(), "engine reported failure: invalid date");
    }

    #[test]
    fn fallback_is_flattened_and_renamed() {
        let reply: FallbackResult = serde_json::from_str(
            r#"{
                "success": true,
                "chart": {
                    "planets": [
                        {"planet": "Moon", "siderealLongitude": 200.25, "isRetrograde": false,
                         "speed": 13.1, "sign": "Tula", "nakshatra": {"name": "Vishakha"}},
                        {"name": "Rahu", "longitude": -10.0, "retrograde": true,
                         "nakshatra": "Uttara Bhadrapada"}
                    ],
                    "lagna": {"longitude": 45.0, "sign": "Vrishabha"},
                    "julianDay": 2447906.708
                },
                "dasha": {"current": "Venus"}
            }"#,
        )
        .unwrap();
        let result = reply.into_result(&settings("backup")).unwrap();
        assert_eq!(result.engine, EngineTier::Fallback);
        assert_eq!(result.source.as_deref(), Some("backup (via Fallback)"));
        assert_eq!(result.planets[0].name, "Moon");
        assert_eq!(result.planets[0].nakshatra.as_deref(), Some("Vishakha"));
        assert_eq!(result.planets[1].longitude, 350.0);
        assert!(result.planets[1].retrograde);
        assert_eq!(result.ascendant.unwrap().rashi.as_deref(), Some("Vrishabha"));
        assert_eq!(result.julian_day, Some(2447906.708));
        assert!(result.dasha.is_some());
    }

    #[test]
    fn tiny_negative_longitudes_stay_in_range() {
        let fallback: FallbackResult = serde_json::from_str(
            r#"{"success":true,"chart":{"planets":[{"planet":"Sun","siderealLongitude":-1e-20}],
                "lagna":{"longitude":-1e-17}}}"#,
        )
        .unwrap();
        let result = fallback.into_result(&settings("backup")).unwrap();
        assert_eq!(result.planets[0].longitude, 0.0);
        assert_eq!(result.ascendant.unwrap().longitude, 0.0);

        let primary: EngineResult = serde_json::from_str(
            r#"{"success":true,"planets":[{"name":"Moon","longitude":-1e-17}],
                "ascendant":{"longitude":-1e-20}}"#,
        )
        .unwrap();
        let result = primary.into_result(&settings("swiss")).unwrap();
        assert!((0.0..360.0).contains(&result.planets[0].longitude));
        assert!((0.0..360.0).contains(&result.ascendant.unwrap().longitude));
    }

    #[test]
    fn fallback_without_chart_fails() {
        let reply: FallbackResult = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(matches!(
            reply.into_result(&settings("backup")),
            Err(EngineFailure::Reported(_))
        ));
    }

    #[test]
    fn serialized_tier_is_lowercase() {
        let json = serde_json::to_string(&EngineTier::Fallback).unwrap();
        assert_eq!(json, "\"fallback\"");
    }
}
