use expediente_state::{reduce, selectors, ExpedienteAction};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{PlantillaSeleccionada, RecordId};
use std::collections::HashMap;

use crate::common;

#[test]
fn test_fill_template_then_switch_resets_data() {
    let filled = common::run(
        common::loaded_state(),
        vec![
            json!({ "type": "SELECT_PLANTILLA", "payload": 5 }),
            json!({
                "type": "SET_PLANTILLA_DATA",
                "payload": { "destinatario": "Dirección de Obras", "asunto": "Permiso" }
            }),
        ],
    );
    assert!(selectors::campos_pendientes(&filled).is_empty());

    let switched = reduce(
        &filled,
        ExpedienteAction::SelectPlantilla(Some(PlantillaSeleccionada::Id(RecordId::Num(5)))),
    );
    assert!(switched.datos_plantilla.is_empty());
    assert_eq!(
        selectors::campos_pendientes(&switched),
        vec!["destinatario", "asunto"]
    );
}

#[test]
fn test_partial_template_data_reports_missing_fields() {
    let state = common::run(
        common::loaded_state(),
        vec![
            json!({ "type": "SELECT_PLANTILLA", "payload": 5 }),
            json!({ "type": "SET_PLANTILLA_DATA", "payload": { "destinatario": "Tesorería" } }),
        ],
    );
    assert_eq!(selectors::campos_pendientes(&state), vec!["asunto"]);
}

#[test]
fn test_set_plantilla_data_replaces_wholesale() {
    let state = common::run(
        common::loaded_state(),
        vec![
            json!({ "type": "SELECT_PLANTILLA", "payload": 5 }),
            json!({ "type": "SET_PLANTILLA_DATA", "payload": { "destinatario": "A" } }),
            json!({ "type": "SET_PLANTILLA_DATA", "payload": { "asunto": "B" } }),
        ],
    );
    let expected: HashMap<String, String> = [("asunto".to_string(), "B".to_string())].into();
    assert_eq!(state.datos_plantilla, expected);
}

#[test]
fn test_custom_data_completes_required_fields() {
    let loaded = common::loaded_state();
    assert_eq!(selectors::custom_fields_faltantes(&loaded).len(), 1);

    let state = common::run(
        loaded,
        vec![json!({ "type": "SET_CUSTOM_DATA", "payload": { "11": "Alta" } })],
    );
    assert!(selectors::custom_fields_faltantes(&state).is_empty());
    assert_eq!(state.custom_data.get("11"), Some(&json!("Alta")));
}
