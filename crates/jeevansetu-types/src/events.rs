//! Messages carried by the push channel.
//!
//! Every frame is a JSON object with an `event` name and a `payload`:
//!
//! ```json
//! {"event":"updateData","payload":{"ICU":10,...}}
//! {"event":"alert","payload":"🚨 Emergency Surge Detected!"}
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::structs::Snapshot;

/// A single push-channel message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "event", content = "payload")]
#[ts(export, export_to = "bindings/")]
pub enum PushEvent {
    /// The full current snapshot, sent after every state change.
    #[serde(rename = "updateData")]
    UpdateData(Snapshot),
    /// A human-readable alert message.
    #[serde(rename = "alert")]
    Alert(String),
}

impl PushEvent {
    /// Wire name of the event.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UpdateData(_) => "updateData",
            Self::Alert(_) => "alert",
        }
    }
}
