//! The analysis pipeline: prompt, one outbound call, best-effort parse.

use crate::domain::{build_prompt, parse_report, AnalysisError, LifeReport, UserProfile};
use crate::infrastructure::GeminiClient;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tracing::debug;

/// Runs one analysis per form submission.
///
/// The pipeline issues exactly one outbound request; there is no retry and
/// no cancellation once the request is in flight. Every failure converges
/// to an [`AnalysisError`] — nothing in here panics on remote misbehavior.
#[derive(Debug, Clone)]
pub struct AnalysisPipeline {
    client: GeminiClient,
}

impl AnalysisPipeline {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Builds the prompt, performs the blocking call, and parses the
    /// reply into a report. Intended to run on a worker thread.
    pub fn run(&self, profile: &UserProfile) -> Result<LifeReport, AnalysisError> {
        let prompt = build_prompt(profile);
        debug!(prompt_len = prompt.len(), "submitting analysis request");
        let reply = self.client.generate(&prompt)?;
        let value = parse_report(&reply)?;
        Ok(LifeReport::new(value))
    }

    /// Runs the pipeline on a fresh worker thread and hands back the
    /// channel end the main loop polls each tick.
    pub fn spawn(&self, profile: UserProfile) -> AnalysisHandle {
        let (tx, rx) = mpsc::channel();
        let pipeline = self.clone();
        thread::spawn(move || {
            // The receiver may have been dropped by a reset; a failed send
            // just means nobody is listening anymore.
            let _ = tx.send(pipeline.run(&profile));
        });
        AnalysisHandle::new(rx)
    }
}

/// Receiving end of an outstanding analysis call.
#[derive(Debug)]
pub struct AnalysisHandle {
    rx: Receiver<Result<LifeReport, AnalysisError>>,
}

impl AnalysisHandle {
    pub fn new(rx: Receiver<Result<LifeReport, AnalysisError>>) -> Self {
        Self { rx }
    }

    /// Non-blocking poll for the outcome.
    ///
    /// Returns `None` while the call is still outstanding. A worker that
    /// died without reporting settles as a transport failure rather than
    /// leaving the loading state stuck forever.
    pub fn try_result(&self) -> Option<Result<LifeReport, AnalysisError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(AnalysisError::Transport(
                "analysis worker exited without reporting".to_string(),
            ))),
        }
    }
}
