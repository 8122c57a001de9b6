//! The wire protocol. Requests are tagged by an `action` field, matching
//! the JSON the popup and background contexts exchange.

use inspect_style::ElementSnapshot;
use serde::{Deserialize, Serialize};

use crate::preferences::Preferences;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    GetInspectionState,
    ToggleInspection {
        enabled: bool,
    },
    UpdatePreferences {
        preferences: Preferences,
    },
    /// Save the currently inspected element into the recent-capture list.
    SaveInspectedElement {
        element: ElementSnapshot,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    State { enabled: bool },
    Ack { success: bool },
}
