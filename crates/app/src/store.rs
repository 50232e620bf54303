use dioxus::prelude::*;
use expediente_state::{ExpedienteAction, ExpedienteState, ExpedienteStore, FetchPayload, FetchTicket};

/// Reactive handle to the expediente page store.
///
/// Components that call [`ExpedienteStoreHandle::state`] during render
/// re-render after every dispatch. Event handlers should use
/// [`ExpedienteStoreHandle::peek_state`] instead.
#[derive(Clone, Copy, PartialEq)]
pub struct ExpedienteStoreHandle {
    inner: Signal<ExpedienteStore>,
}

impl ExpedienteStoreHandle {
    pub fn state(&self) -> ExpedienteState {
        self.inner.read().state().clone()
    }

    pub fn peek_state(&self) -> ExpedienteState {
        self.inner.peek().state().clone()
    }

    pub fn dispatch(&mut self, action: ExpedienteAction) {
        self.inner.write().dispatch(action);
    }

    pub fn dismiss_modals(&mut self) {
        self.inner.write().dismiss_modals();
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.inner.write().begin_fetch()
    }

    pub fn complete_fetch(&mut self, ticket: FetchTicket, outcome: Result<FetchPayload, String>) -> bool {
        self.inner.write().complete_fetch(ticket, outcome)
    }
}

/// Hook creating one store per page mount. The store is dropped with the page.
pub fn use_expediente_store() -> ExpedienteStoreHandle {
    let inner = use_signal(ExpedienteStore::new);
    ExpedienteStoreHandle { inner }
}
