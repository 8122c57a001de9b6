//! JSON export of captured snapshots.

use anyhow::Context;
use inspect_style::ElementSnapshot;

/// Pretty-printed JSON for file export and the detail panel's copy action.
pub fn to_json(snapshot: &ElementSnapshot) -> anyhow::Result<String> {
    serde_json::to_string_pretty(snapshot).context("serializing element snapshot")
}

pub fn from_json(raw: &str) -> anyhow::Result<ElementSnapshot> {
    serde_json::from_str(raw).context("deserializing element snapshot")
}

/// Download file name for an exported snapshot. The selector is flattened
/// to a safe token; the timestamp keeps repeated exports distinct.
pub fn export_file_name(snapshot: &ElementSnapshot) -> String {
    let token: String = snapshot
        .selector
        .chars()
        .map(|character| {
            if character.is_ascii_alphanumeric() {
                character
            } else {
                '-'
            }
        })
        .collect();
    let token = token.trim_matches('-');
    if token.is_empty() {
        format!("element-{}.json", snapshot.timestamp_ms)
    } else {
        format!("{token}-{}.json", snapshot.timestamp_ms)
    }
}
