//! High-level entry points: one call per report.
//!
//! Every function takes a [`BirthRequest`] and the loaded [`KundaliConfig`]
//! and returns a serializable report; wrap the result in an
//! [`Envelope`](crate::Envelope) for the wire.

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, info};

use kundali_bridge::{EngineBridge, EngineResult};
use kundali_config::KundaliConfig;
use kundali_ephem::{BirthChart, BirthInput, calculate_chart};
use kundali_vedic::{
    BalanceMode, DashaConfig, DashaTimeline, Graha, NakshatraAttributes, NakshatraInfo,
    PanchangInput, PanchangResult, RashiInfo, SubPeriodMethod, nakshatra_from_longitude,
    rashi_from_longitude, vimshottari_timeline,
};

use crate::error::KundaliError;
use crate::request::BirthRequest;

/// A computed chart together with the birth data it was computed for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReport {
    pub birth: BirthInput,
    #[serde(flatten)]
    pub chart: BirthChart,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangReport {
    pub birth: BirthInput,
    pub julian_day: f64,
    #[serde(flatten)]
    pub panchang: PanchangResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaReport {
    pub birth: BirthInput,
    /// Sidereal Moon longitude at birth, degrees.
    pub moon_longitude: f64,
    #[serde(flatten)]
    pub timeline: DashaTimeline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NakshatraReport {
    pub longitude: f64,
    #[serde(flatten)]
    pub position: NakshatraInfo,
    pub lord: Graha,
    pub attributes: NakshatraAttributes,
    pub rashi: RashiInfo,
}

/// Where the first mahadasha's balance comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DashaBalance {
    /// The first mahadasha starts at birth with its full length.
    #[default]
    BirthNakshatra,
    /// The first mahadasha is shortened by the Moon's progress through
    /// its nakshatra.
    MoonLongitude,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashaOptions {
    pub balance: DashaBalance,
    pub sub_period_method: SubPeriodMethod,
}

fn resolve(req: &BirthRequest, config: &KundaliConfig) -> Result<BirthInput, KundaliError> {
    req.to_birth_input(&config.location)
}

fn compute(input: &BirthInput, config: &KundaliConfig) -> Result<BirthChart, KundaliError> {
    let chart = calculate_chart(input, &config.ephemeris.to_ephemeris_config())?;
    debug!(
        name = input.name(),
        julian_day = chart.julian_day,
        ayanamsa = chart.ayanamsa,
        "Chart computed"
    );
    Ok(chart)
}

fn graha_longitude(chart: &BirthChart, graha: Graha) -> Result<f64, KundaliError> {
    chart
        .graha(graha)
        .map(|p| p.longitude)
        .ok_or_else(|| KundaliError::Internal(format!("chart has no {graha}")))
}

/// Sidereal birth chart: nine grahas and the Ascendant.
pub fn birth_chart(
    req: &BirthRequest,
    config: &KundaliConfig,
) -> Result<ChartReport, KundaliError> {
    let birth = resolve(req, config)?;
    let chart = compute(&birth, config)?;
    info!(name = birth.name(), "Birth chart calculated");
    Ok(ChartReport { birth, chart })
}

/// Panchang elements from a chart's Sun and Moon at the given place.
pub fn panchang_for_chart(
    chart: &BirthChart,
    latitude: f64,
    longitude: f64,
) -> Result<PanchangResult, KundaliError> {
    Ok(kundali_vedic::panchang(&PanchangInput {
        sun_longitude: graha_longitude(chart, Graha::Surya)?,
        moon_longitude: graha_longitude(chart, Graha::Chandra)?,
        julian_day: chart.julian_day,
        latitude,
        longitude,
    }))
}

/// Panchang for the birth moment and place.
pub fn panchang(
    req: &BirthRequest,
    config: &KundaliConfig,
) -> Result<PanchangReport, KundaliError> {
    let birth = resolve(req, config)?;
    let chart = compute(&birth, config)?;
    let panchang = panchang_for_chart(&chart, birth.latitude(), birth.longitude())?;
    info!(tithi = panchang.tithi.name, "Panchang calculated");
    Ok(PanchangReport {
        birth,
        julian_day: chart.julian_day,
        panchang,
    })
}

/// Vimshottari timeline rooted at the natal Moon's nakshatra, evaluated at
/// `now` (local civil time).
pub fn dasha(
    req: &BirthRequest,
    now: NaiveDateTime,
    options: &DashaOptions,
    config: &KundaliConfig,
) -> Result<DashaReport, KundaliError> {
    let birth = resolve(req, config)?;
    let chart = compute(&birth, config)?;
    let moon_longitude = graha_longitude(&chart, Graha::Chandra)?;

    let balance = match options.balance {
        DashaBalance::BirthNakshatra => {
            BalanceMode::FromBirth(nakshatra_from_longitude(moon_longitude).nakshatra_index)
        }
        DashaBalance::MoonLongitude => BalanceMode::MoonPosition(moon_longitude),
    };
    let dasha_config = DashaConfig {
        sub_period_method: options.sub_period_method,
    };

    let timeline = vimshottari_timeline(birth.datetime(), now, balance, &dasha_config)?;
    info!(
        mahadasha = %timeline.mahadasha.lord,
        antardasha = %timeline.antardasha.lord,
        "Dasha timeline calculated"
    );
    Ok(DashaReport {
        birth,
        moon_longitude,
        timeline,
    })
}

/// Nakshatra, pada, attributes and rashi of a sidereal longitude.
pub fn nakshatra(longitude: f64) -> Result<NakshatraReport, KundaliError> {
    if !longitude.is_finite() {
        return Err(KundaliError::Validation(format!(
            "longitude {longitude} is not a finite number"
        )));
    }
    let position = nakshatra_from_longitude(longitude);
    Ok(NakshatraReport {
        longitude: kundali_vedic::normalize_360(longitude),
        position,
        lord: position.nakshatra.lord(),
        attributes: position.nakshatra.attributes(),
        rashi: rashi_from_longitude(longitude),
    })
}

/// Authoritative chart from the external engines.
pub async fn engine_chart(
    req: &BirthRequest,
    config: &KundaliConfig,
    bridge: &EngineBridge,
) -> Result<EngineResult, KundaliError> {
    let birth = resolve(req, config)?;
    let result = bridge.calculate(&birth).await?;
    info!(engine = %result.engine, planets = result.planets.len(), "Engine chart obtained");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_vedic::Nakshatra;

    #[test]
    fn nakshatra_report_edges() {
        let first = nakshatra(0.0).unwrap();
        assert_eq!(first.position.nakshatra, Nakshatra::Ashwini);
        assert_eq!(first.lord, Graha::Ketu);
        let last = nakshatra(359.9).unwrap();
        assert_eq!(last.position.nakshatra, Nakshatra::Revati);
        assert_eq!(last.position.pada, 4);
    }

    #[test]
    fn nakshatra_rejects_nan() {
        assert!(matches!(nakshatra(f64::NAN), Err(KundaliError::Validation(_))));
    }

    #[test]
    fn negative_longitude_normalized() {
        let r = nakshatra(-1.0).unwrap();
        assert!((r.longitude - 359.0).abs() < 1e-12);
        assert_eq!(r.position.nakshatra, Nakshatra::Revati);
    }
}
