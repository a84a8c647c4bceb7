use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::timeline::Timeline;

/// Current snapshot envelope version.
const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),
}

#[derive(Serialize)]
struct EnvelopeRef<'a, S> {
    version: u32,
    timeline: &'a Timeline<S>,
}

#[derive(Deserialize)]
struct Envelope<S> {
    version: u32,
    timeline: Timeline<S>,
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

/// Serialize a timeline to the versioned JSON snapshot format.
pub fn write_snapshot<S: Serialize>(timeline: &Timeline<S>) -> Result<String, SnapshotError> {
    let envelope = EnvelopeRef {
        version: SNAPSHOT_VERSION,
        timeline,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Restore a timeline from the versioned JSON snapshot format.
///
/// The version field is checked before the payload shape, so a snapshot
/// from a future format fails with `UnsupportedVersion` rather than a
/// misleading shape error.
pub fn read_snapshot<S: DeserializeOwned>(data: &str) -> Result<Timeline<S>, SnapshotError> {
    let probe: VersionProbe = serde_json::from_str(data)?;
    if probe.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion(probe.version));
    }
    let envelope: Envelope<S> = serde_json::from_str(data)?;
    Ok(envelope.timeline)
}
