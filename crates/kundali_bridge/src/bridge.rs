//! The primary/fallback engine bridge.

use std::time::Instant;

use tracing::{debug, error, info, warn};

use kundali_config::{EngineSettings, EnginesConfig, KundaliConfig};
use kundali_ephem::BirthInput;

use crate::error::{BridgeError, BridgeResult, EngineFailure};
use crate::fallback::{Escalation, escalate};
use crate::health::{HealthReport, HealthStatus, HealthTracker};
use crate::process::invoke;
use crate::schema::{EngineReply, EngineResult, FallbackResult};

/// Obtains charts from external engines: primary first, fallback on any
/// primary failure, no retries within a tier.
#[derive(Debug)]
pub struct EngineBridge {
    primary: EngineSettings,
    fallback: EngineSettings,
    health: HealthTracker,
}

impl EngineBridge {
    pub fn new(engines: EnginesConfig) -> Self {
        Self {
            primary: engines.primary,
            fallback: engines.fallback,
            health: HealthTracker::new(),
        }
    }

    pub fn from_config(config: &KundaliConfig) -> Self {
        Self::new(config.engines.clone())
    }

    pub fn primary(&self) -> &EngineSettings {
        &self.primary
    }

    pub fn fallback(&self) -> &EngineSettings {
        &self.fallback
    }

    pub fn health(&self) -> HealthReport {
        self.health.report()
    }

    /// Compute a chart for `input`.
    pub async fn calculate(&self, input: &BirthInput) -> BridgeResult<EngineResult> {
        let payload = serde_json::to_vec(input)?;
        self.health.record_request();

        let outcome = escalate(
            attempt::<EngineResult>(&self.primary, &payload),
            |failure: &EngineFailure| {
                warn!(
                    engine = %self.primary.label,
                    error = %failure,
                    fallback = %self.fallback.label,
                    "Primary engine failed; escalating to fallback"
                );
                if let Some(status) = self.health.record_primary_failure(failure) {
                    log_transition(status);
                }
                attempt::<FallbackResult>(&self.fallback, &payload)
            },
        )
        .await;

        match &outcome {
            Escalation::Primary(_) => {
                if let Some(status) = self.health.record_primary_success() {
                    log_transition(status);
                }
            }
            Escalation::Fallback { .. } => {
                self.health.record_fallback_success();
                info!(engine = %self.fallback.label, "Chart served by fallback engine");
            }
            Escalation::Exhausted { fallback, .. } => {
                self.health.record_fallback_failure(fallback);
                error!(
                    primary = %self.primary.label,
                    fallback = %self.fallback.label,
                    error = %fallback,
                    "All chart engines failed"
                );
            }
        }

        outcome.into_result(|primary, fallback| BridgeError::AllEnginesFailed {
            primary_label: self.primary.label.clone(),
            primary,
            fallback_label: self.fallback.label.clone(),
            fallback,
        })
    }
}

async fn attempt<R: EngineReply>(
    settings: &EngineSettings,
    payload: &[u8],
) -> Result<EngineResult, EngineFailure> {
    let started = Instant::now();
    debug!(engine = %settings.label, program = %settings.program, "Invoking chart engine");

    let stdout = invoke(settings, payload).await?;
    let reply: R = serde_json::from_str(stdout.trim()).map_err(EngineFailure::Parse)?;
    let result = reply.into_result(settings)?;

    debug!(
        engine = %settings.label,
        elapsed_ms = started.elapsed().as_millis() as u64,
        planets = result.planets.len(),
        "Chart engine answered"
    );
    Ok(result)
}

fn log_transition(status: HealthStatus) {
    match status {
        HealthStatus::Healthy => info!(%status, "Primary engine recovered"),
        HealthStatus::Degraded => warn!(%status, "Primary engine degraded"),
        HealthStatus::Failing => error!(%status, "Primary engine failing"),
    }
}
