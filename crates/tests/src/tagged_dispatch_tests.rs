use expediente_state::{reduce, ExpedienteAction, ExpedienteStore};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, RecordId};

use crate::common;

#[test]
fn test_unknown_tag_is_noop() {
    let loaded = common::loaded_state();
    let action = common::action(json!({ "type": "ARCHIVAR_EXPEDIENTE", "payload": 1 }));
    assert_eq!(action, ExpedienteAction::Unknown("ARCHIVAR_EXPEDIENTE".to_string()));
    assert_eq!(reduce(&loaded, action), loaded);
}

#[test]
fn test_store_skips_unknown_tag() {
    let mut store = ExpedienteStore::with_state(common::loaded_state());
    let before = store.state().clone();
    store.dispatch(common::action(json!({ "type": "RESET" })));
    assert_eq!(store.state(), &before);
}

#[test]
fn test_known_tag_with_bad_payload_is_rejected() {
    let err = ExpedienteAction::from_tagged("OPEN_VIEWER_MODAL", Some(json!(42)))
        .expect_err("url must be a string");
    assert_eq!(err.kind, AppErrorKind::BadRequest);

    let err = ExpedienteAction::from_tagged("FETCH_ERROR", None)
        .expect_err("payload is required");
    assert_eq!(err.kind, AppErrorKind::BadRequest);
}

#[test]
fn test_decoding_through_serde_reports_bad_payload() {
    let result = serde_json::from_value::<ExpedienteAction>(json!({
        "type": "SET_CUSTOM_DATA",
        "payload": "no es un objeto"
    }));
    assert!(result.is_err());
}

#[test]
fn test_signature_id_accepts_numbers_and_strings() {
    assert_eq!(
        common::action(json!({ "type": "OPEN_SIGNATURE_MODAL", "payload": 7 })),
        ExpedienteAction::OpenSignatureModal(RecordId::Num(7))
    );
    assert_eq!(
        common::action(json!({ "type": "OPEN_SIGNATURE_MODAL", "payload": "doc-7" })),
        ExpedienteAction::OpenSignatureModal(RecordId::Text("doc-7".to_string()))
    );
}

#[test]
fn test_tag_matches_wire_name() {
    for raw in [
        json!({ "type": "FETCH_START" }),
        json!({ "type": "TOGGLE_PRESTAMO_FORM" }),
        json!({ "type": "CLOSE_MODALS" }),
        json!({ "type": "SET_PLANTILLA_DATA", "payload": {} }),
    ] {
        let expected = raw["type"].as_str().unwrap_or_default().to_string();
        assert_eq!(common::action(raw).tag(), expected);
    }
}
