//! Submission and result handling
//!
//! The button press either copies the previous result or validates, builds
//! and dispatches a creation request. HTTP runs on the blocking pool; every
//! dispatch is tagged with a sequence number and a completion is applied
//! only while its sequence still matches the latest dispatch, so a slow
//! response can never overwrite what a later user action produced.

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::{App, MessageKind};
use crate::client::{ClientError, ConfigClient, CreationOutcome, ServiceLimits};
use crate::form::{CreationRequest, EditorEvent, validation};
use crate::interfaces::tui::clipboard;

/// Completions arriving from the blocking pool.
#[derive(Debug)]
pub enum ApiEvent {
    Limits(Result<ServiceLimits, ClientError>),
    Creation {
        seq: u64,
        result: Result<CreationOutcome, ClientError>,
    },
}

impl App {
    /// The action button was activated (click, Enter, or Space on it).
    pub fn button_pressed(&mut self, now: Instant) {
        if self.button.mode().is_copy_like() {
            self.copy_result(now);
            return;
        }

        self.validate_inputs();
        let fields = self.form_fields();
        let groups = validation::invalid_groups(&fields, &self.limits, Utc::now());
        if let Some(text) = validation::failure_message(&groups) {
            self.message(MessageKind::Error, text);
            return;
        }

        // Accepted for dispatch: the slate of old outcomes is wiped.
        self.clear_messages();
        match CreationRequest::from_fields(&fields, Utc::now()) {
            Ok(request) => self.dispatch_creation(request),
            Err(e) => self.message(MessageKind::Error, e.format_simple()),
        }
    }

    fn copy_result(&mut self, now: Instant) {
        clipboard::write_text(&self.link_input);
        self.button.copied(now);
    }

    fn dispatch_creation(&mut self, request: CreationRequest) {
        self.request_seq += 1;
        let seq = self.request_seq;
        let client = self.link_client.clone();
        let tx = self.events_tx.clone();

        info!(seq, link = %request.link, "dispatching creation request");
        tokio::task::spawn_blocking(move || {
            let result = client.create_link(&request);
            // The receiver is gone only during shutdown.
            let _ = tx.send(ApiEvent::Creation { seq, result });
        });
    }

    pub(crate) fn spawn_limits_fetch(&self, client: ConfigClient) {
        let tx = self.events_tx.clone();
        tokio::task::spawn_blocking(move || {
            let _ = tx.send(ApiEvent::Limits(client.fetch_limits()));
        });
    }

    /// Drain completed background work. Called every loop iteration.
    pub fn drain_api_events(&mut self) {
        let rx = self.events_rx();
        while let Ok(event) = rx.try_recv() {
            self.handle_api_event(event);
        }
    }

    pub(crate) fn handle_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Limits(Ok(limits)) => {
                self.limits.max_link_length = Some(limits.max_link_length);
                self.limits.max_custom_id_length = Some(limits.max_custom_id_length);
                self.validate_inputs();
            }
            ApiEvent::Limits(Err(e)) => {
                warn!("config fetch failed: {}", e);
                self.message(MessageKind::Error, e.to_string());
            }
            ApiEvent::Creation { seq, result } => {
                if seq != self.request_seq {
                    debug!(seq, latest = self.request_seq, "dropping stale creation outcome");
                    return;
                }
                self.apply_creation_result(result);
            }
        }
    }

    fn apply_creation_result(&mut self, result: Result<CreationOutcome, ClientError>) {
        match result {
            Ok(CreationOutcome::Created(short_link)) => {
                info!(%short_link, "link created");
                self.link_input = short_link;
                self.button.creation_succeeded();
                self.validate_inputs();
            }
            Ok(CreationOutcome::Conflict) => {
                self.message(
                    MessageKind::Error,
                    format!(
                        "Custom ID: {} already used. Try something different",
                        self.custom_id_input
                    ),
                );
            }
            Ok(CreationOutcome::Failed { status, body }) => {
                self.message(MessageKind::Error, format!("{}: {}", status, body));
            }
            Err(e) => {
                warn!("creation request failed: {}", e);
                self.message(MessageKind::Error, e.to_string());
            }
        }
    }

    // ---- Duration field plumbing ----

    /// Route an editor event through the pure core and apply its effects.
    pub fn duration_event(&mut self, event: EditorEvent) {
        let outcome = self.duration.apply(event);
        if let Some(text) = outcome.clipboard {
            clipboard::write_text(&text);
        }
        self.duration = outcome.state;
    }

    /// Bracketed paste or Ctrl+V, routed by focus.
    pub fn paste_text(&mut self, text: &str) {
        if self.focus == super::FocusField::Duration {
            self.duration_event(EditorEvent::Paste(text.to_string()));
            return;
        }
        for c in text.chars() {
            self.push_char(c);
        }
    }
}
