//! Application state management for the terminal life-analysis client.
//!
//! This module contains the screen sequencer and the main application
//! state for the terminal user interface.

use crate::application::pipeline::AnalysisHandle;
use crate::application::progress::ProgressTicker;
use crate::domain::{build_cards, AnalysisError, LifeReport, ReportCard, UserProfile};
use std::time::{Duration, Instant};
use tracing::error;

/// Delay before a freshly activated screen receives its "active" visual
/// marker, making the transition observable.
pub const ACTIVE_MARKER_DELAY: Duration = Duration::from_millis(10);

/// How long the login prank screen lingers before bouncing back.
pub const PRANK_RETURN_DELAY: Duration = Duration::from_secs(3);

/// The one user-visible notice shown for every analysis failure.
pub const FAILURE_NOTICE: &str =
    "Analysis failed. The stars are silent today. Please try again.";

/// Labels for the four bio form fields, in focus order.
pub const FIELD_LABELS: [&str; 4] = [
    "Full Name",
    "Date of Birth",
    "Time of Birth",
    "Place of Birth",
];

/// The mutually exclusive top-level screens.
///
/// Loading and results are sub-states of the form screen (fields on
/// [`App`]), not members of this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Landing page with the entry actions
    Landing,
    /// Decoy login dead-end that bounces back on its own
    LoginPrank,
    /// Terms acknowledgement gate
    Terms,
    /// Bio capture form, with loading and results nested below it
    Form,
}

/// Activation phase of the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationPhase {
    /// Visible, but the transition marker has not landed yet
    Entered,
    /// Fully active
    Active,
}

/// Immutable-per-transition view state.
///
/// There is exactly one current screen and no back-stack. Transition
/// functions consume the previous value and return the next one; [`App`]
/// stores whatever the latest transition produced.
#[derive(Debug, Clone, Copy)]
pub struct ViewState {
    pub screen: Screen,
    phase: ActivationPhase,
    marker_at: Instant,
    prank_return_at: Option<Instant>,
}

impl ViewState {
    pub fn new(now: Instant) -> Self {
        Self::enter(Screen::Landing, now)
    }

    fn enter(screen: Screen, now: Instant) -> Self {
        let prank_return_at = match screen {
            Screen::LoginPrank => Some(now + PRANK_RETURN_DELAY),
            _ => None,
        };
        ViewState {
            screen,
            phase: ActivationPhase::Entered,
            marker_at: now + ACTIVE_MARKER_DELAY,
            prank_return_at,
        }
    }

    /// Makes `screen` the single current screen.
    ///
    /// The new screen is visible immediately and receives its active
    /// marker once [`ACTIVE_MARKER_DELAY`] has elapsed. Activating again
    /// before that simply restarts the marker timer; the last call wins.
    pub fn activate(self, screen: Screen, now: Instant) -> ViewState {
        Self::enter(screen, now)
    }

    /// Advances the sequencer's timers: marker promotion and the prank
    /// screen's automatic return to the landing page.
    pub fn on_tick(self, now: Instant) -> ViewState {
        if let Some(deadline) = self.prank_return_at {
            if now >= deadline {
                return Self::enter(Screen::Landing, now);
            }
        }
        if self.phase == ActivationPhase::Entered && now >= self.marker_at {
            return ViewState {
                phase: ActivationPhase::Active,
                ..self
            };
        }
        self
    }

    /// Whether the current screen has received its active marker.
    pub fn is_active(&self) -> bool {
        self.phase == ActivationPhase::Active
    }
}

/// Sub-state of the form screen while an analysis call is outstanding.
///
/// Owns both the worker handle and the progress ticker, so dropping the
/// loading state releases the ticker with it.
#[derive(Debug)]
pub struct LoadingState {
    pub ticker: ProgressTicker,
    handle: AnalysisHandle,
}

impl LoadingState {
    pub fn new(now: Instant, handle: AnalysisHandle) -> Self {
        Self {
            ticker: ProgressTicker::new(now),
            handle,
        }
    }

    fn poll(&mut self) -> Option<Result<LifeReport, AnalysisError>> {
        self.handle.try_result()
    }
}

/// Main application state.
///
/// # Examples
///
/// ```
/// use lifelens::application::{App, Screen};
///
/// let app = App::default();
/// assert_eq!(app.view.screen, Screen::Landing);
/// assert!(app.cards.is_empty());
/// ```
#[derive(Debug)]
pub struct App {
    /// Current screen and its activation phase
    pub view: ViewState,
    /// Raw text of the four bio fields, in [`FIELD_LABELS`] order
    pub profile_inputs: [String; 4],
    /// Index of the focused bio field
    pub focused_field: usize,
    /// Cursor position within the focused field
    pub cursor_position: usize,
    /// Whether the terms checkbox is checked
    pub terms_accepted: bool,
    /// Outstanding analysis call, if any
    pub loading: Option<LoadingState>,
    /// Rendered result cards from the last successful analysis
    pub cards: Vec<ReportCard>,
    /// Scroll position within the results area
    pub results_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl App {
    pub fn new(now: Instant) -> Self {
        Self {
            view: ViewState::new(now),
            profile_inputs: Default::default(),
            focused_field: 0,
            cursor_position: 0,
            terms_accepted: false,
            loading: None,
            cards: Vec::new(),
            results_scroll: 0,
            status_message: None,
        }
    }

    /// Moves to `screen`, leaving every other screen inactive.
    pub fn activate(&mut self, screen: Screen, now: Instant) {
        self.view = self.view.activate(screen, now);
    }

    /// Advances all timers and polls an outstanding analysis call.
    ///
    /// When the call settles, the loading state (and with it the progress
    /// ticker) is dropped before the outcome becomes visible.
    pub fn on_tick(&mut self, now: Instant) {
        self.view = self.view.on_tick(now);

        let outcome = match self.loading.as_mut() {
            Some(loading) => {
                loading.ticker.on_tick(now);
                loading.poll()
            }
            None => None,
        };

        if let Some(result) = outcome {
            // The ticker must be gone before the outcome is applied.
            self.loading = None;
            self.finish_analysis(result);
        }
    }

    /// Mutable access to the text of the focused bio field.
    pub fn focused_input_mut(&mut self) -> &mut String {
        &mut self.profile_inputs[self.focused_field]
    }

    /// Text of the focused bio field.
    pub fn focused_input(&self) -> &str {
        &self.profile_inputs[self.focused_field]
    }

    pub fn focus_next_field(&mut self) {
        self.focused_field = (self.focused_field + 1) % FIELD_LABELS.len();
        self.cursor_position = self.focused_input().len();
    }

    pub fn focus_previous_field(&mut self) {
        self.focused_field = (self.focused_field + FIELD_LABELS.len() - 1) % FIELD_LABELS.len();
        self.cursor_position = self.focused_input().len();
    }

    /// Builds a profile from the form, requiring every field to be
    /// non-empty after trimming. Returns `None` otherwise.
    pub fn capture_profile(&self) -> Option<UserProfile> {
        if self
            .profile_inputs
            .iter()
            .any(|input| input.trim().is_empty())
        {
            return None;
        }
        Some(UserProfile {
            name: self.profile_inputs[0].clone(),
            date_of_birth: self.profile_inputs[1].clone(),
            time_of_birth: self.profile_inputs[2].clone(),
            place_of_birth: self.profile_inputs[3].clone(),
        })
    }

    /// Enters the loading sub-state for a freshly spawned analysis call.
    ///
    /// Any previous cards are cleared up front so a failed call can never
    /// leave a half-stale report on screen.
    pub fn begin_analysis(&mut self, handle: AnalysisHandle, now: Instant) {
        self.cards.clear();
        self.results_scroll = 0;
        self.status_message = None;
        self.loading = Some(LoadingState::new(now, handle));
    }

    fn finish_analysis(&mut self, result: Result<LifeReport, AnalysisError>) {
        match result {
            Ok(report) => {
                self.cards = build_cards(&report);
                self.results_scroll = 0;
            }
            Err(err) => {
                error!("analysis failed: {}", err);
                self.status_message = Some(FAILURE_NOTICE.to_string());
            }
        }
    }

    /// Returns to the landing page and clears everything the session
    /// captured: profile fields, acknowledgement, cards, loading state.
    pub fn reset(&mut self, now: Instant) {
        self.profile_inputs = Default::default();
        self.focused_field = 0;
        self.cursor_position = 0;
        self.terms_accepted = false;
        self.loading = None;
        self.cards.clear();
        self.results_scroll = 0;
        self.status_message = None;
        self.activate(Screen::Landing, now);
    }
}
