//! Bridge to external chart engines.
//!
//! Each request spawns the primary engine, writes the birth input as one
//! JSON object to its stdin and reads one JSON object back from stdout,
//! bounded by a timeout. Any primary failure escalates once to the fallback
//! engine, whose differently shaped reply is normalized to [`EngineResult`].

pub mod bridge;
pub mod error;
pub mod fallback;
pub mod health;
pub mod process;
pub mod schema;

pub use bridge::EngineBridge;
pub use error::{BridgeError, BridgeResult, EngineFailure};
pub use fallback::{Escalation, escalate};
pub use health::{FAILING_THRESHOLD, HealthReport, HealthStatus, HealthTracker};
pub use process::invoke;
pub use schema::{
    EngineAscendant, EnginePlanet, EngineReply, EngineResult, EngineTier, FallbackResult,
};
