#![cfg(unix)]

use std::path::Path;
use std::time::{Duration, Instant};

use kundali_bridge::{BridgeError, EngineBridge, EngineFailure, EngineTier, HealthStatus};
use kundali_config::{EngineSettings, EnginesConfig};
use kundali_ephem::BirthInput;

const PRIMARY_REPLY: &str = r#"{"success":true,"planets":[{"name":"Sun","longitude":270.5,"speed":1.01,"retrograde":false}],"ascendant":{"longitude":300.25,"rashi":"Kumbha"},"ayanamsa":23.7,"julian_day":2447906.708}"#;

const FALLBACK_REPLY: &str = r#"{"success":true,"chart":{"planets":[{"planet":"Sun","siderealLongitude":270.5,"isRetrograde":false}],"lagna":{"longitude":300.25,"sign":"Kumbha"},"julianDay":2447906.708}}"#;

fn sh(label: &str, script: &str, timeout_ms: u64) -> EngineSettings {
    EngineSettings {
        program: "sh".into(),
        args: vec!["-c".into(), script.into()],
        timeout_ms,
        label: label.into(),
    }
}

/// A script that appends a line to `counter` before running `body`.
fn counted(counter: &Path, body: &str) -> String {
    format!("echo call >> '{}'; {body}", counter.display())
}

fn reply(json: &str) -> String {
    format!("cat > /dev/null; printf '%s' '{json}'")
}

fn calls(counter: &Path) -> usize {
    std::fs::read_to_string(counter)
        .map(|s| s.lines().count())
        .unwrap_or(0)
}

fn bridge(primary: EngineSettings, fallback: EngineSettings) -> EngineBridge {
    EngineBridge::new(EnginesConfig { primary, fallback })
}

fn chennai() -> BirthInput {
    BirthInput::parse("Test", "1990-01-15", "10:30", 13.0827, 80.2707, Some("Chennai".into()))
        .unwrap()
}

#[tokio::test]
async fn primary_success_does_not_touch_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let counter = dir.path().join("fallback_calls");
    let b = bridge(
        sh("primary", &reply(PRIMARY_REPLY), 2_000),
        sh("fallback", &counted(&counter, &reply(FALLBACK_REPLY)), 2_000),
    );

    let result = b.calculate(&chennai()).await.unwrap();
    assert_eq!(result.engine, EngineTier::Primary);
    assert_eq!(result.planets[0].name, "Sun");
    assert_eq!(result.ascendant.unwrap().rashi.as_deref(), Some("Kumbha"));
    assert_eq!(calls(&counter), 0);
    assert_eq!(b.health().status, HealthStatus::Healthy);
}

#[tokio::test]
async fn primary_receives_birth_json_on_stdin() {
    let script = format!(
        "grep -q '\"date\":\"1990-01-15\"' && printf '%s' '{PRIMARY_REPLY}'"
    );
    let b = bridge(sh("primary", &script, 2_000), sh("fallback", "exit 1", 2_000));
    let result = b.calculate(&chennai()).await.unwrap();
    assert_eq!(result.engine, EngineTier::Primary);
}

#[tokio::test]
async fn non_zero_exit_escalates_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let counter = dir.path().join("fallback_calls");
    let b = bridge(
        sh("primary", "echo 'ephemeris files missing' >&2; exit 2", 2_000),
        sh("fallback", &counted(&counter, &reply(FALLBACK_REPLY)), 2_000),
    );

    let result = b.calculate(&chennai()).await.unwrap();
    assert_eq!(result.engine, EngineTier::Fallback);
    assert_eq!(result.source.as_deref(), Some("fallback (via Fallback)"));
    assert_eq!(result.planets[0].longitude, 270.5);
    assert_eq!(calls(&counter), 1);

    let health = b.health();
    assert_eq!(health.status, HealthStatus::Degraded);
    assert_eq!(health.fallback_successes, 1);
    assert!(health.last_error.unwrap().contains("ephemeris files missing"));
}

#[tokio::test]
async fn reported_failure_escalates() {
    let b = bridge(
        sh("primary", &reply(r#"{"success":false,"error":"bad date"}"#), 2_000),
        sh("fallback", &reply(FALLBACK_REPLY), 2_000),
    );
    let result = b.calculate(&chennai()).await.unwrap();
    assert_eq!(result.engine, EngineTier::Fallback);
}

#[tokio::test]
async fn timeout_kills_primary_and_escalates() {
    let b = bridge(
        sh("primary", "exec sleep 10", 200),
        sh("fallback", &reply(FALLBACK_REPLY), 2_000),
    );
    let started = Instant::now();
    let result = b.calculate(&chennai()).await.unwrap();
    assert_eq!(result.engine, EngineTier::Fallback);
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn both_failing_names_both_failures() {
    let b = bridge(
        sh("swiss", "echo 'primary boom' >&2; exit 3", 2_000),
        sh("backup", "cat > /dev/null; echo 'not json'", 2_000),
    );
    let err = b.calculate(&chennai()).await.unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("swiss"), "{msg}");
    assert!(msg.contains("primary boom"), "{msg}");
    assert!(msg.contains("backup"), "{msg}");
    assert!(msg.contains("unparsable"), "{msg}");

    match err {
        BridgeError::AllEnginesFailed { primary, fallback, .. } => {
            assert!(matches!(primary, EngineFailure::Exit { code: Some(3), .. }));
            assert!(matches!(fallback, EngineFailure::Parse(_)));
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(b.health().total_failures, 2);
}

#[tokio::test]
async fn missing_programs_fail_cleanly() {
    let missing = |label: &str| EngineSettings {
        program: "/nonexistent/engine".into(),
        args: vec![],
        timeout_ms: 1_000,
        label: label.into(),
    };
    let b = bridge(missing("primary"), missing("fallback"));
    let err = b.calculate(&chennai()).await.unwrap_err();
    assert!(err.to_string().contains("failed to spawn"));
}

#[tokio::test]
async fn repeated_primary_failures_report_failing_then_recover() {
    let dir = tempfile::tempdir().unwrap();
    let flag = dir.path().join("primary_ok");
    let primary_script = format!(
        "cat > /dev/null; if [ -f '{}' ]; then printf '%s' '{PRIMARY_REPLY}'; else exit 1; fi",
        flag.display()
    );
    let b = bridge(
        sh("primary", &primary_script, 2_000),
        sh("fallback", &reply(FALLBACK_REPLY), 2_000),
    );

    for _ in 0..3 {
        b.calculate(&chennai()).await.unwrap();
    }
    assert_eq!(b.health().status, HealthStatus::Failing);
    assert_eq!(b.health().consecutive_failures, 3);

    std::fs::write(&flag, b"ok").unwrap();
    let result = b.calculate(&chennai()).await.unwrap();
    assert_eq!(result.engine, EngineTier::Primary);
    let health = b.health();
    assert_eq!(health.status, HealthStatus::Healthy);
    assert_eq!(health.total_requests, 4);
}
