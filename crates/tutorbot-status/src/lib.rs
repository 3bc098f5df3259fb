//! Health-status polling for the TutorBot backend.
//!
//! A small state machine (`StatusState`) fed by periodic fetches against
//! one endpoint. Fetch and render targets are injected (`StatusFetch`,
//! `IndicatorSink`) so the loop is deterministic under test: no real
//! timers, no real network. Failures never propagate; they map to the
//! `Unknown` state and a warning log.

mod fetch;
mod poller;
mod state;

pub use fetch::{HttpStatusFetch, StatusFetch, StatusPayload};
pub use poller::{IndicatorSink, StatusPoller};
pub use state::{Indicator, StatusState};
