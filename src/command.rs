//! Inbound host messages.
//!
//! One message arrives per invocation as loose JSON with a
//! discriminating `type` field. Only the kinds below are accepted;
//! anything else is ignored by the engine, not rejected.

use serde::Deserialize;

/// A recognized inbound command.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Command {
    /// Fetch raw CSS text and apply it with the selector-class strategy.
    #[serde(rename_all = "camelCase")]
    ApplyCss { css_url: String },
    /// Resolve the URL to a kit identifier, fetch the kit, and apply it.
    #[serde(rename_all = "camelCase")]
    ApplyStyles { url: String },
    /// Compose a post from literal text into the named layout template.
    #[serde(rename_all = "camelCase")]
    ComposePost {
        title: String,
        body: String,
        layout: String,
    },
}

impl Command {
    /// Parses a raw message, returning `None` for unrecognized kinds or
    /// malformed payloads.
    pub fn parse(message: &serde_json::Value) -> Option<Command> {
        serde_json::from_value(message.clone()).ok()
    }
}
