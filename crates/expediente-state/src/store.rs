use tracing::{debug, warn};

use crate::action::{ExpedienteAction, FetchPayload};
use crate::reducer::reduce;
use crate::state::ExpedienteState;

/// Identifies one fetch started through [`ExpedienteStore::begin_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Single owner of the page snapshot.
///
/// Actions are applied one at a time in dispatch order. Fetch completions
/// carry the ticket of the request that produced them; only the most
/// recent request may write its result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpedienteStore {
    state: ExpedienteState,
    generation: u64,
}

impl ExpedienteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: ExpedienteState) -> Self {
        Self {
            state,
            generation: 0,
        }
    }

    pub fn state(&self) -> &ExpedienteState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn dispatch(&mut self, action: ExpedienteAction) {
        if let ExpedienteAction::Unknown(tag) = &action {
            warn!(tag = %tag, "ignoring unrecognized expediente action");
            return;
        }
        debug!(action = action.tag(), "dispatch");
        self.state = reduce(&self.state, action);
    }

    /// Close every open modal, including the date modal that `CloseModals`
    /// leaves alone.
    pub fn dismiss_modals(&mut self) {
        let date_open = self.state.ui.is_date_modal_open;
        self.dispatch(ExpedienteAction::CloseModals);
        if date_open {
            self.dispatch(ExpedienteAction::ToggleDateModal);
        }
    }

    /// Start a new request generation and mark the page as loading.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.dispatch(ExpedienteAction::FetchStart);
        FetchTicket(self.generation)
    }

    /// Apply the outcome of a fetch. Returns `false` (and changes nothing)
    /// when a newer fetch has started since `ticket` was issued.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<FetchPayload, String>,
    ) -> bool {
        if ticket.0 != self.generation {
            debug!(
                ticket = ticket.0,
                current = self.generation,
                "dropping stale fetch completion"
            );
            return false;
        }
        let action = match outcome {
            Ok(payload) => ExpedienteAction::FetchSuccess(payload),
            Err(message) => ExpedienteAction::FetchError(message),
        };
        self.dispatch(action);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Expediente, RecordId};

    fn payload_for(id: i64) -> FetchPayload {
        FetchPayload {
            expediente: Some(Some(Expediente::new(id))),
            ..FetchPayload::default()
        }
    }

    #[test]
    fn new_store_holds_initial_state() {
        let store = ExpedienteStore::new();
        assert_eq!(store.state(), &ExpedienteState::default());
        assert_eq!(store.generation(), 0);
    }

    #[test]
    fn dispatch_applies_in_order() {
        let mut store = ExpedienteStore::new();
        store.dispatch(ExpedienteAction::OpenSignatureModal(RecordId::from("doc-7")));
        store.dispatch(ExpedienteAction::CloseModals);
        assert!(store.state().ui.target_documento_id_firma.is_none());
        assert!(!store.state().ui.is_signature_modal_open);
    }

    #[test]
    fn dismiss_modals_also_closes_date_modal() {
        let mut store = ExpedienteStore::new();
        store.dispatch(ExpedienteAction::ToggleDateModal);
        store.dispatch(ExpedienteAction::OpenViewerModal("/files/acta.pdf".into()));
        store.dispatch(ExpedienteAction::SetTargetWorkflow(Some(RecordId::Num(4))));

        store.dismiss_modals();
        let ui = &store.state().ui;
        assert!(!ui.is_date_modal_open);
        assert!(!ui.is_viewer_modal_open);
        assert_eq!(ui.viewing_file_url, "");
        assert_eq!(ui.target_documento_id_workflow, Some(RecordId::Num(4)));
    }

    #[test]
    fn dismiss_modals_leaves_closed_date_modal_closed() {
        let mut store = ExpedienteStore::new();
        store.dispatch(ExpedienteAction::OpenSignatureModal(RecordId::from("doc-2")));

        store.dismiss_modals();
        assert!(!store.state().ui.is_date_modal_open);
        assert!(!store.state().ui.is_signature_modal_open);
    }

    #[test]
    fn unknown_action_leaves_state_alone() {
        let mut store = ExpedienteStore::new();
        let before = store.state().clone();
        store.dispatch(ExpedienteAction::Unknown("LOGOUT".into()));
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn latest_fetch_wins() {
        let mut store = ExpedienteStore::new();
        let first = store.begin_fetch();
        let second = store.begin_fetch();

        assert!(!store.complete_fetch(first, Ok(payload_for(1))));
        assert!(store.state().is_loading);
        assert!(store.state().expediente.is_none());

        assert!(store.complete_fetch(second, Ok(payload_for(2))));
        assert!(!store.state().is_loading);
        assert_eq!(store.state().expediente, Some(Expediente::new(RecordId::Num(2))));
    }

    #[test]
    fn stale_error_is_dropped() {
        let mut store = ExpedienteStore::new();
        let stale = store.begin_fetch();
        let current = store.begin_fetch();
        assert!(!store.complete_fetch(stale, Err("timeout".into())));
        assert_eq!(store.state().error, "");

        assert!(store.complete_fetch(current, Err("404".into())));
        assert_eq!(store.state().error, "404");
        assert!(!store.state().is_loading);
    }

    #[test]
    fn begin_fetch_clears_previous_error() {
        let mut store = ExpedienteStore::new();
        store.dispatch(ExpedienteAction::FetchError("caído".into()));
        store.begin_fetch();
        assert!(store.state().is_loading);
        assert_eq!(store.state().error, "");
    }
}
