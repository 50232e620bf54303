use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::{
    CustomField, DocumentoDisponible, Expediente, Plantilla, PlantillaSeleccionada, RecordId,
    Workflow,
};
use std::collections::HashMap;

/// Modal visibility, selection targets and form toggles of the expediente page.
///
/// The four booleans are independent; several may be true at once even
/// though the page usually shows a single modal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub show_prestamo_form: bool,
    pub is_viewer_modal_open: bool,
    pub is_signature_modal_open: bool,
    pub is_date_modal_open: bool,
    pub viewing_file_url: String,
    pub target_documento_id_workflow: Option<RecordId>,
    pub target_documento_id_firma: Option<RecordId>,
}

/// Snapshot of the expediente page.
///
/// Created once per page mount via [`Default`] (empty collections,
/// `is_loading = true`) and replaced wholesale on every dispatch.
/// `is_loading` and a non-empty `error` are kept exclusive by the callers
/// that dispatch fetch actions; nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpedienteState {
    pub expediente: Option<Expediente>,
    pub is_loading: bool,
    pub error: String,
    pub documentos_disponibles: Vec<DocumentoDisponible>,
    pub workflows: Vec<Workflow>,
    pub plantillas: Vec<Plantilla>,
    pub custom_fields: Vec<CustomField>,
    pub custom_data: HashMap<String, Value>,
    pub plantilla_seleccionada: Option<PlantillaSeleccionada>,
    pub datos_plantilla: HashMap<String, String>,
    pub ui: UiState,
}

impl Default for ExpedienteState {
    fn default() -> Self {
        Self {
            expediente: None,
            is_loading: true,
            error: String::new(),
            documentos_disponibles: Vec::new(),
            workflows: Vec::new(),
            plantillas: Vec::new(),
            custom_fields: Vec::new(),
            custom_data: HashMap::new(),
            plantilla_seleccionada: None,
            datos_plantilla: HashMap::new(),
            ui: UiState::default(),
        }
    }
}

impl ExpedienteState {
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}
