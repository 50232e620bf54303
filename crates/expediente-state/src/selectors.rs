//! Read-only views derived from an [`ExpedienteState`] snapshot.

use serde_json::Value;
use shared_types::{CustomField, DocumentoDisponible, Plantilla, PlantillaSeleccionada, RecordId};

use crate::state::ExpedienteState;

fn find_documento<'a>(
    state: &'a ExpedienteState,
    id: Option<&RecordId>,
) -> Option<&'a DocumentoDisponible> {
    let id = id?;
    state.documentos_disponibles.iter().find(|d| &d.id == id)
}

/// Document targeted by the open signature modal.
pub fn documento_firma(state: &ExpedienteState) -> Option<&DocumentoDisponible> {
    find_documento(state, state.ui.target_documento_id_firma.as_ref())
}

/// Document selected for workflow assignment.
pub fn documento_workflow(state: &ExpedienteState) -> Option<&DocumentoDisponible> {
    find_documento(state, state.ui.target_documento_id_workflow.as_ref())
}

pub fn is_workflow_target(state: &ExpedienteState, documento_id: &RecordId) -> bool {
    state.ui.target_documento_id_workflow.as_ref() == Some(documento_id)
}

/// Resolve the current template selection to its record.
pub fn plantilla_activa(state: &ExpedienteState) -> Option<&Plantilla> {
    match state.plantilla_seleccionada.as_ref()? {
        PlantillaSeleccionada::Plantilla(p) => Some(p),
        PlantillaSeleccionada::Id(id) => state.plantillas.iter().find(|p| &p.id == id),
    }
}

/// Template fields still blank, in template order.
pub fn campos_pendientes(state: &ExpedienteState) -> Vec<&str> {
    let Some(plantilla) = plantilla_activa(state) else {
        return Vec::new();
    };
    plantilla
        .campos
        .iter()
        .filter(|campo| {
            state
                .datos_plantilla
                .get(campo.as_str())
                .map_or(true, |v| v.trim().is_empty())
        })
        .map(String::as_str)
        .collect()
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Required custom fields with no usable value in `custom_data`.
pub fn custom_fields_faltantes(state: &ExpedienteState) -> Vec<&CustomField> {
    state
        .custom_fields
        .iter()
        .filter(|field| field.requerido)
        .filter(|field| {
            state
                .custom_data
                .get(&field.id.to_string())
                .map_or(true, is_blank)
        })
        .collect()
}

pub fn any_modal_open(state: &ExpedienteState) -> bool {
    state.ui.is_viewer_modal_open || state.ui.is_signature_modal_open || state.ui.is_date_modal_open
}

/// Data has arrived without error and the page can render the record.
pub fn is_ready(state: &ExpedienteState) -> bool {
    !state.is_loading && state.error.is_empty() && state.expediente.is_some()
}
