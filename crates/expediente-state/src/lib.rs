//! Page state for the expediente viewer: snapshot types, actions, the pure
//! reducer, and the store that applies actions in order.

pub mod action;
pub mod reducer;
pub mod selectors;
pub mod state;
pub mod store;

pub use action::{ExpedienteAction, FetchPayload};
pub use reducer::reduce;
pub use state::{ExpedienteState, UiState};
pub use store::{ExpedienteStore, FetchTicket};
