use expediente_state::{
    reduce, selectors, ExpedienteAction, ExpedienteState, ExpedienteStore, FetchPayload,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{Expediente, RecordId};

use crate::common;

#[test]
fn test_fetch_success_from_initial_state() {
    let state = common::run(
        ExpedienteState::default(),
        vec![json!({
            "type": "FETCH_SUCCESS",
            "payload": { "expediente": { "id": 1 }, "documentosDisponibles": [] }
        })],
    );

    assert!(!state.is_loading);
    assert_eq!(state.expediente, Some(Expediente::new(RecordId::Num(1))));
    assert!(state.documentos_disponibles.is_empty());
    assert_eq!(state.error, "");
}

#[test]
fn test_fetch_success_keeps_fields_not_in_payload() {
    let loaded = common::loaded_state();
    let next = common::run(
        loaded.clone(),
        vec![
            json!({ "type": "FETCH_START" }),
            json!({ "type": "FETCH_SUCCESS", "payload": { "workflows": [] } }),
        ],
    );

    assert!(next.workflows.is_empty());
    assert_eq!(next.expediente, loaded.expediente);
    assert_eq!(next.documentos_disponibles, loaded.documentos_disponibles);
    assert_eq!(next.plantillas, loaded.plantillas);
    assert!(!next.is_loading);
}

#[test]
fn test_fetch_success_null_expediente_clears_record() {
    let next = common::run(
        common::loaded_state(),
        vec![json!({ "type": "FETCH_SUCCESS", "payload": { "expediente": null } })],
    );

    assert_eq!(next.expediente, None);
    assert!(!selectors::is_ready(&next));
}

#[test]
fn test_fetch_error_then_retry_clears_error() {
    let failed = common::run(
        common::loaded_state(),
        vec![
            json!({ "type": "FETCH_START" }),
            json!({ "type": "FETCH_ERROR", "payload": "Servidor no disponible" }),
        ],
    );
    assert!(!failed.is_loading);
    assert_eq!(failed.error, "Servidor no disponible");
    assert!(failed.expediente.is_some(), "error keeps previously loaded data");

    let retrying = reduce(&failed, ExpedienteAction::FetchStart);
    assert!(retrying.is_loading);
    assert_eq!(retrying.error, "");
    assert_eq!(retrying.documentos_disponibles, failed.documentos_disponibles);
}

#[test]
fn test_store_drops_stale_fetch_completion() {
    let mut store = ExpedienteStore::new();

    let first = store.begin_fetch();
    let second = store.begin_fetch();

    let stale = FetchPayload {
        expediente: Some(Some(Expediente::new("viejo"))),
        ..Default::default()
    };
    assert!(!store.complete_fetch(first, Ok(stale)));
    assert!(store.state().is_loading, "stale result must not end loading");

    let fresh = FetchPayload {
        expediente: Some(Some(Expediente::new(RecordId::Num(2)))),
        ..Default::default()
    };
    assert!(store.complete_fetch(second, Ok(fresh)));
    assert_eq!(store.state().expediente, Some(Expediente::new(RecordId::Num(2))));
    assert!(!store.state().is_loading);
}

#[test]
fn test_store_stale_error_is_ignored() {
    let mut store = ExpedienteStore::new();
    let old = store.begin_fetch();
    let current = store.begin_fetch();

    assert!(store.complete_fetch(current, Ok(FetchPayload::default())));
    assert!(!store.complete_fetch(old, Err("tiempo de espera agotado".to_string())));

    assert_eq!(store.state().error, "");
    assert!(!store.state().is_loading);
}

#[test]
fn test_route_change_refetch_supersedes_previous_record() {
    let mut store = ExpedienteStore::new();
    let first_route = store.begin_fetch();
    let loaded = FetchPayload {
        expediente: Some(Some(Expediente::new(RecordId::Num(1)))),
        ..Default::default()
    };
    assert!(store.complete_fetch(first_route, Ok(loaded)));

    // Navigating to another id while a reload of the old one is in flight.
    let old_reload = store.begin_fetch();
    let new_route = store.begin_fetch();
    let next = FetchPayload {
        expediente: Some(Some(Expediente::new(RecordId::Num(2)))),
        documentos_disponibles: Some(Vec::new()),
        ..Default::default()
    };
    assert!(store.complete_fetch(new_route, Ok(next)));
    let late = FetchPayload {
        expediente: Some(Some(Expediente::new(RecordId::Num(1)))),
        ..Default::default()
    };
    assert!(!store.complete_fetch(old_reload, Ok(late)));

    assert_eq!(store.state().expediente, Some(Expediente::new(RecordId::Num(2))));
    assert!(!store.state().is_loading);
}
