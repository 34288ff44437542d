// Equity service integration: wire client and request-lifecycle coordinator.

pub mod client;
pub mod coordinator;

pub use client::{EquityClient, EquityRequest, FETCH_ERROR_MESSAGE};
pub use coordinator::{EquityCoordinator, INCOMPLETE_HAND_MESSAGE};
