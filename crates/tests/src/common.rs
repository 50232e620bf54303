use expediente_state::{reduce, ExpedienteAction, ExpedienteState};
use serde_json::{json, Value};

/// Decode a `{type, payload}` action the way the page receives it.
pub fn action(value: Value) -> ExpedienteAction {
    serde_json::from_value(value).expect("action should decode")
}

/// Fold a sequence of tagged actions over `state`.
pub fn run(state: ExpedienteState, actions: Vec<Value>) -> ExpedienteState {
    actions
        .into_iter()
        .map(action)
        .fold(state, |acc, a| reduce(&acc, a))
}

/// A loaded page with two documents, one workflow and one template.
pub fn loaded_state() -> ExpedienteState {
    run(
        ExpedienteState::default(),
        vec![json!({
            "type": "FETCH_SUCCESS",
            "payload": {
                "expediente": { "id": 1, "numero": "EXP-2024-001", "titulo": "Licitación" },
                "documentosDisponibles": [
                    { "id": 7, "nombre": "contrato.pdf", "url": "/files/contrato.pdf" },
                    { "id": 8, "nombre": "anexo.pdf", "restringido": true }
                ],
                "workflows": [{ "id": 3, "nombre": "Revisión legal" }],
                "plantillas": [{ "id": 5, "nombre": "Oficio", "campos": ["destinatario", "asunto"] }],
                "customFields": [
                    { "id": 11, "nombre": "Prioridad", "tipo": "text", "requerido": true }
                ]
            }
        })],
    )
}
