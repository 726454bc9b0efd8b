//! The command pipeline: fetch, parse, match, apply, notify.
//!
//! One invocation handles one message. Each pipeline stage returns its
//! own error kind; the outcomes all funnel through [`handle_message`],
//! which logs the diagnostic detail, shows the user exactly one generic
//! notification, and ends the session. Mutations are applied eagerly
//! with no rollback; a failure partway through leaves earlier
//! mutations in place.

use log::{debug, error};

use crate::apply::{apply_css_rules, apply_layer_rules};
use crate::command::Command;
use crate::compose::{compose_post, PostContent};
use crate::css::parse_css;
use crate::document::Document;
use crate::error::ApplyError;
use crate::host::HostContext;
use crate::kit::{self, KitPayload};

/// The fixed kit-service endpoint. The kit identifier derived from the
/// requested URL is POSTed here as a JSON string body.
pub const KIT_SERVICE_URL: &str = "https://api.stylecast.dev/v1/kits";

/// Notification shown when an invocation succeeds.
pub const SUCCESS_NOTICE: &str = "Styles applied.";

/// Notification shown when any pipeline stage fails.
pub const FAILURE_NOTICE: &str = "Failed to fetch or apply styles.";

/// Handles one inbound message end to end.
///
/// Unrecognized message kinds are ignored silently: no notification,
/// no session termination. Recognized commands run to completion or
/// failure, emit exactly one notification, and close the session.
pub fn handle_message(ctx: &mut HostContext<'_>, doc: &mut Document, message: &serde_json::Value) {
    let Some(command) = Command::parse(message) else {
        debug!("ignoring unrecognized message: {}", message);
        return;
    };

    match run(ctx, doc, &command) {
        Ok(()) => ctx.ui.notify(SUCCESS_NOTICE),
        Err(err) => {
            error!("apply failed: {}", err);
            ctx.ui.notify(FAILURE_NOTICE);
        }
    }
    ctx.ui.close();
}

/// Runs one recognized command through its pipeline stages.
pub fn run(
    ctx: &mut HostContext<'_>,
    doc: &mut Document,
    command: &Command,
) -> Result<(), ApplyError> {
    match command {
        Command::ApplyCss { css_url } => {
            let text = ctx.fetcher.get_text(css_url)?;
            let rules = parse_css(&text);
            debug!("parsed {} css rules from '{}'", rules.len(), css_url);
            apply_css_rules(doc, &rules)?;
        }
        Command::ApplyStyles { url } => {
            let id = kit::kit_id(url);
            let body = serde_json::to_string(id)?;
            let response = ctx.fetcher.post_json(KIT_SERVICE_URL, &body)?;
            let payload: KitPayload = serde_json::from_str(&response)?;
            debug!("fetched kit '{}'", id);

            kit::create_paint_styles(doc, &payload)?;
            kit::create_text_styles(doc, ctx.fonts, &payload)?;
            apply_layer_rules(doc, &kit::layer_rules(&payload))?;
        }
        Command::ComposePost { title, body, layout } => {
            let content = PostContent {
                title: title.clone(),
                body: body.clone(),
            };
            compose_post(doc, ctx.fonts, layout, &content)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{FetchError, FontError, FontLoader, HostUi, SourceFetcher};
    use serde_json::json;

    struct FailingFetcher;

    impl SourceFetcher for FailingFetcher {
        fn get_text(&self, url: &str) -> Result<String, FetchError> {
            Err(FetchError::Status { url: url.to_string(), status: 404 })
        }

        fn post_json(&self, url: &str, _body: &str) -> Result<String, FetchError> {
            Err(FetchError::Status { url: url.to_string(), status: 404 })
        }
    }

    struct NoopFonts;

    impl FontLoader for NoopFonts {
        fn load(&self, _family: &str, _style: &str) -> Result<(), FontError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingUi {
        notices: Vec<String>,
        closed: bool,
    }

    impl HostUi for RecordingUi {
        fn notify(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }

        fn close(&mut self) {
            self.closed = true;
        }
    }

    #[test]
    fn test_fetch_failure_notifies_once_and_closes() {
        let mut ui = RecordingUi::default();
        let mut ctx = HostContext {
            fetcher: &FailingFetcher,
            fonts: &NoopFonts,
            ui: &mut ui,
        };
        let mut doc = Document::new();

        let msg = json!({"type": "apply-css", "cssUrl": "https://x.test/a.css"});
        handle_message(&mut ctx, &mut doc, &msg);

        assert_eq!(ui.notices, [FAILURE_NOTICE]);
        assert!(ui.closed);
    }

    #[test]
    fn test_unrecognized_message_is_a_no_op() {
        let mut ui = RecordingUi::default();
        let mut ctx = HostContext {
            fetcher: &FailingFetcher,
            fonts: &NoopFonts,
            ui: &mut ui,
        };
        let mut doc = Document::new();

        handle_message(&mut ctx, &mut doc, &json!({"type": "resize"}));

        assert!(ui.notices.is_empty());
        assert!(!ui.closed);
    }
}
