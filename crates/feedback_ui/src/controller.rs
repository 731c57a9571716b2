//! Request lifecycle of one feedback analysis: validate, guard, post, render, restore.

use std::sync::atomic::{AtomicBool, Ordering};

use client_core::AnalysisClient;
use shared::{domain::AnalysisResult, protocol::AnalyzeRequest};
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::{
    events::{FeedbackError, KeyChord},
    presentation::{summarize, BUSY_BUTTON_LABEL, IDLE_BUTTON_LABEL},
    state::{InFlight, UiState},
    view::{Element, View},
};

/// How a submission ended. The view has already been updated by the time this is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// Dropped by the in-flight guard; nothing was sent or shown.
    Ignored,
    Rendered(AnalysisResult),
    Failed(FeedbackError),
}

pub struct FeedbackAnalysisController<V, C> {
    view: Mutex<V>,
    client: C,
    in_flight: AtomicBool,
}

impl<V: View, C: AnalysisClient> FeedbackAnalysisController<V, C> {
    pub fn new(view: V, client: C) -> Self {
        Self {
            view: Mutex::new(view),
            client,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> UiState {
        UiState::from_flag(self.in_flight.load(Ordering::Acquire))
    }

    pub async fn view(&self) -> MutexGuard<'_, V> {
        self.view.lock().await
    }

    /// Submits whatever the input field currently holds.
    pub async fn submit(&self) -> CycleOutcome {
        let raw = self.view.lock().await.input_text();
        self.submit_text(&raw).await
    }

    /// Kept for pages wired to the old entry point name.
    pub async fn run_sentiment_analysis(&self) -> CycleOutcome {
        self.submit().await
    }

    /// Returns `None` when the chord is not the submit shortcut.
    pub async fn handle_key(&self, chord: KeyChord) -> Option<CycleOutcome> {
        if !chord.is_submit_shortcut() {
            return None;
        }
        Some(self.submit().await)
    }

    pub async fn submit_text(&self, raw: &str) -> CycleOutcome {
        let text = raw.trim();
        if text.is_empty() {
            let err = FeedbackError::Validation;
            self.show_error(&err).await;
            return CycleOutcome::Failed(err);
        }

        let Some(in_flight) = InFlight::acquire(&self.in_flight) else {
            debug!("analysis already in flight; ignoring submission");
            return CycleOutcome::Ignored;
        };

        let cycle_id = Uuid::new_v4();
        let span = info_span!("analysis_cycle", %cycle_id, chars = text.chars().count());
        let mut controls = ControlsRestore::arm(&self.view);
        let outcome = self.run_cycle(text).instrument(span).await;
        controls.disarm();
        drop(in_flight);
        debug!(state = ?self.state(), "analysis cycle finished");
        outcome
    }

    async fn run_cycle(&self, text: &str) -> CycleOutcome {
        info!("submitting feedback for analysis");
        {
            let mut view = self.view.lock().await;
            view.set_visible(Element::ErrorMessage, false);
            view.set_visible(Element::ResultSection, false);
            view.set_enabled(Element::AnalyzeButton, false);
            view.set_text(Element::AnalyzeButton, BUSY_BUTTON_LABEL);
            view.set_visible(Element::Loading, true);
        }

        let outcome = match self.client.analyze(&AnalyzeRequest::new(text)).await {
            Ok(reply) if reply.http_ok && reply.body.success => match reply.body.into_result() {
                Ok(result) => {
                    self.render(&result).await;
                    CycleOutcome::Rendered(result)
                }
                Err(malformed) => {
                    warn!(error = %malformed, "analysis reply could not be rendered");
                    CycleOutcome::Failed(FeedbackError::Network)
                }
            },
            Ok(reply) => {
                let err = FeedbackError::service(reply.body.error);
                warn!(error = %err, http_ok = reply.http_ok, "analysis service reported failure");
                CycleOutcome::Failed(err)
            }
            Err(transport) => {
                warn!(error = %transport, "analysis request failed");
                CycleOutcome::Failed(FeedbackError::Network)
            }
        };

        let mut view = self.view.lock().await;
        if let CycleOutcome::Failed(err) = &outcome {
            show_error_on(&mut *view, err);
        }
        settle_controls(&mut *view);
        outcome
    }

    pub async fn render(&self, result: &AnalysisResult) {
        let summary = summarize(result);
        let mut view = self.view.lock().await;
        view.set_text(Element::PrimaryEmotion, &summary.primary_emotion);
        view.set_text(Element::ConfidenceScore, &summary.confidence_text);
        view.set_width_percent(Element::ConfidenceBar, summary.confidence_width);
        view.set_text(Element::OverallSentiment, &summary.sentiment_label);
        view.set_treatment(Element::OverallSentiment, summary.treatment);
        view.set_emotions(&summary.emotions);
        view.set_visible(Element::ResultSection, true);
        view.scroll_into_view(Element::ResultSection);
    }

    /// Resets the form. Does not touch an in-flight request.
    pub async fn clear(&self) {
        let mut view = self.view.lock().await;
        view.set_text(Element::FeedbackInput, "");
        view.set_visible(Element::ErrorMessage, false);
        view.set_visible(Element::ResultSection, false);
        settle_controls(&mut *view);
    }

    async fn show_error(&self, err: &FeedbackError) {
        let mut view = self.view.lock().await;
        show_error_on(&mut *view, err);
    }
}

/// Puts the busy indicator and submit control back if a cycle ends without completing,
/// i.e. its future was dropped or a view call unwound.
struct ControlsRestore<'a, V: View> {
    view: &'a Mutex<V>,
    armed: bool,
}

impl<'a, V: View> ControlsRestore<'a, V> {
    fn arm(view: &'a Mutex<V>) -> Self {
        Self { view, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl<V: View> Drop for ControlsRestore<'_, V> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        match self.view.try_lock() {
            Ok(mut view) => {
                debug!("analysis cycle abandoned; restoring controls");
                settle_controls(&mut *view);
            }
            Err(_) => warn!("analysis cycle abandoned while view was busy; controls not restored"),
        }
    }
}

fn settle_controls<V: View + ?Sized>(view: &mut V) {
    view.set_visible(Element::Loading, false);
    view.set_enabled(Element::AnalyzeButton, true);
    view.set_text(Element::AnalyzeButton, IDLE_BUTTON_LABEL);
}

fn show_error_on<V: View + ?Sized>(view: &mut V, err: &FeedbackError) {
    debug!(kind = err.kind(), "showing error");
    view.set_visible(Element::ErrorMessage, false);
    view.set_visible(Element::ResultSection, false);
    view.set_text(Element::ErrorMessage, &err.to_string());
    view.set_visible(Element::ErrorMessage, true);
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
