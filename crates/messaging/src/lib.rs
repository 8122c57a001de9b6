//! Request/response types exchanged with the surrounding contexts, user
//! preferences, and the capped recent-capture history.

#![forbid(unsafe_code)]

pub mod history;
pub mod preferences;
pub mod protocol;

pub use history::{HISTORY_CAP, History};
pub use preferences::{
    MAX_TOOLTIP_FONT_SIZE_PX, MIN_TOOLTIP_FONT_SIZE_PX, PreferenceStore, Preferences,
};
pub use protocol::{Request, Response};
