//! Application layer managing state and business workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! managing the screen sequencer, the analysis pipeline, and the loading
//! sub-state of an outstanding call.

pub mod pipeline;
pub mod progress;
pub mod state;

pub use pipeline::*;
pub use progress::*;
pub use state::*;
