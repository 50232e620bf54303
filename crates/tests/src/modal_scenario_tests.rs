use expediente_state::{reduce, selectors, ExpedienteAction, ExpedienteStore};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::RecordId;

use crate::common;

#[test]
fn test_open_signature_then_close_clears_target() {
    let state = common::run(
        common::loaded_state(),
        vec![
            json!({ "type": "OPEN_SIGNATURE_MODAL", "payload": "doc-7" }),
            json!({ "type": "CLOSE_MODALS" }),
        ],
    );

    assert_eq!(state.ui.target_documento_id_firma, None);
    assert!(!state.ui.is_signature_modal_open);
}

#[test]
fn test_signature_target_resolves_document() {
    let state = reduce(
        &common::loaded_state(),
        ExpedienteAction::OpenSignatureModal(RecordId::Num(7)),
    );

    let documento = selectors::documento_firma(&state).expect("document 7 is loaded");
    assert_eq!(documento.nombre, "contrato.pdf");
    assert!(selectors::any_modal_open(&state));
}

#[test]
fn test_viewer_close_resets_url() {
    let state = common::run(
        common::loaded_state(),
        vec![
            json!({ "type": "OPEN_VIEWER_MODAL", "payload": "/files/contrato.pdf" }),
        ],
    );
    assert!(state.ui.is_viewer_modal_open);
    assert_eq!(state.ui.viewing_file_url, "/files/contrato.pdf");

    let closed = reduce(&state, ExpedienteAction::CloseModals);
    assert!(!closed.ui.is_viewer_modal_open);
    assert_eq!(closed.ui.viewing_file_url, "");
}

// Documented quirk: closing modals leaves the workflow target, the date
// modal and the loan form untouched.
#[test]
fn test_close_modals_quirk_survives_full_sequence() {
    let state = common::run(
        common::loaded_state(),
        vec![
            json!({ "type": "SET_TARGET_WORKFLOW", "payload": 8 }),
            json!({ "type": "TOGGLE_DATE_MODAL" }),
            json!({ "type": "TOGGLE_PRESTAMO_FORM" }),
            json!({ "type": "OPEN_VIEWER_MODAL", "payload": "/files/anexo.pdf" }),
            json!({ "type": "CLOSE_MODALS" }),
        ],
    );

    assert_eq!(state.ui.target_documento_id_workflow, Some(RecordId::Num(8)));
    assert!(state.ui.is_date_modal_open);
    assert!(state.ui.show_prestamo_form);
    assert!(!state.ui.is_viewer_modal_open);
    assert!(selectors::any_modal_open(&state), "date modal still counts as open");
}

#[test]
fn test_date_modal_double_toggle_returns_to_original() {
    let original = common::loaded_state();
    let state = common::run(
        original.clone(),
        vec![
            json!({ "type": "TOGGLE_DATE_MODAL" }),
            json!({ "type": "TOGGLE_DATE_MODAL" }),
        ],
    );
    assert_eq!(state, original);
}

#[test]
fn test_workflow_target_cleared_with_null() {
    let state = common::run(
        common::loaded_state(),
        vec![
            json!({ "type": "SET_TARGET_WORKFLOW", "payload": 7 }),
            json!({ "type": "SET_TARGET_WORKFLOW", "payload": null }),
        ],
    );
    assert_eq!(state.ui.target_documento_id_workflow, None);
    assert!(selectors::documento_workflow(&state).is_none());
}

#[test]
fn test_store_applies_actions_in_order() {
    let mut store = ExpedienteStore::with_state(common::loaded_state());
    store.dispatch(ExpedienteAction::OpenSignatureModal(RecordId::Num(7)));
    store.dispatch(ExpedienteAction::OpenViewerModal("/files/contrato.pdf".to_string()));
    store.dispatch(ExpedienteAction::CloseModals);

    let ui = &store.state().ui;
    assert!(!ui.is_signature_modal_open);
    assert!(!ui.is_viewer_modal_open);
    assert_eq!(ui.target_documento_id_firma, None);
}
