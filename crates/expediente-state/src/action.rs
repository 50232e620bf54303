//! Actions accepted by [`reduce`](crate::reduce) and their tagged wire form.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use shared_types::{
    AppError, CustomField, DocumentoDisponible, Expediente, Plantilla, PlantillaSeleccionada,
    RecordId, Workflow,
};
use std::collections::HashMap;

/// Partial state delivered by a completed fetch.
///
/// Absent fields leave the current value untouched. The nullable fields use
/// a double `Option`: `None` means "not sent", `Some(None)` means "sent as
/// null" and clears the value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchPayload {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub expediente: Option<Option<Expediente>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentos_disponibles: Option<Vec<DocumentoDisponible>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflows: Option<Vec<Workflow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plantillas: Option<Vec<Plantilla>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomField>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<HashMap<String, Value>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub plantilla_seleccionada: Option<Option<PlantillaSeleccionada>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datos_plantilla: Option<HashMap<String, String>>,
}

/// Marks a field as sent, so an explicit `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Everything the expediente page can ask the store to do.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "TaggedAction")]
pub enum ExpedienteAction {
    FetchStart,
    FetchSuccess(FetchPayload),
    FetchError(String),
    TogglePrestamoForm,
    ToggleDateModal,
    OpenViewerModal(String),
    OpenSignatureModal(RecordId),
    /// `None` clears the workflow target.
    SetTargetWorkflow(Option<RecordId>),
    CloseModals,
    SetCustomData(HashMap<String, Value>),
    /// `None` clears the selection.
    SelectPlantilla(Option<PlantillaSeleccionada>),
    SetPlantillaData(HashMap<String, String>),
    /// A tag this page does not know. Reduced as a no-op.
    Unknown(String),
}

pub const FETCH_START: &str = "FETCH_START";
pub const FETCH_SUCCESS: &str = "FETCH_SUCCESS";
pub const FETCH_ERROR: &str = "FETCH_ERROR";
pub const TOGGLE_PRESTAMO_FORM: &str = "TOGGLE_PRESTAMO_FORM";
pub const TOGGLE_DATE_MODAL: &str = "TOGGLE_DATE_MODAL";
pub const OPEN_VIEWER_MODAL: &str = "OPEN_VIEWER_MODAL";
pub const OPEN_SIGNATURE_MODAL: &str = "OPEN_SIGNATURE_MODAL";
pub const SET_TARGET_WORKFLOW: &str = "SET_TARGET_WORKFLOW";
pub const CLOSE_MODALS: &str = "CLOSE_MODALS";
pub const SET_CUSTOM_DATA: &str = "SET_CUSTOM_DATA";
pub const SELECT_PLANTILLA: &str = "SELECT_PLANTILLA";
pub const SET_PLANTILLA_DATA: &str = "SET_PLANTILLA_DATA";

impl ExpedienteAction {
    /// Wire tag of this action.
    pub fn tag(&self) -> &str {
        match self {
            ExpedienteAction::FetchStart => FETCH_START,
            ExpedienteAction::FetchSuccess(_) => FETCH_SUCCESS,
            ExpedienteAction::FetchError(_) => FETCH_ERROR,
            ExpedienteAction::TogglePrestamoForm => TOGGLE_PRESTAMO_FORM,
            ExpedienteAction::ToggleDateModal => TOGGLE_DATE_MODAL,
            ExpedienteAction::OpenViewerModal(_) => OPEN_VIEWER_MODAL,
            ExpedienteAction::OpenSignatureModal(_) => OPEN_SIGNATURE_MODAL,
            ExpedienteAction::SetTargetWorkflow(_) => SET_TARGET_WORKFLOW,
            ExpedienteAction::CloseModals => CLOSE_MODALS,
            ExpedienteAction::SetCustomData(_) => SET_CUSTOM_DATA,
            ExpedienteAction::SelectPlantilla(_) => SELECT_PLANTILLA,
            ExpedienteAction::SetPlantillaData(_) => SET_PLANTILLA_DATA,
            ExpedienteAction::Unknown(tag) => tag,
        }
    }

    /// Decode a tag and its JSON payload.
    ///
    /// Unknown tags decode to [`ExpedienteAction::Unknown`]. A known tag whose
    /// payload is missing or has the wrong shape is a `BadRequest`.
    /// Payloads of payload-less actions are ignored.
    pub fn from_tagged(tag: &str, payload: Option<Value>) -> Result<Self, AppError> {
        let action = match tag {
            FETCH_START => ExpedienteAction::FetchStart,
            FETCH_SUCCESS => ExpedienteAction::FetchSuccess(required(tag, payload)?),
            FETCH_ERROR => ExpedienteAction::FetchError(required(tag, payload)?),
            TOGGLE_PRESTAMO_FORM => ExpedienteAction::TogglePrestamoForm,
            TOGGLE_DATE_MODAL => ExpedienteAction::ToggleDateModal,
            OPEN_VIEWER_MODAL => ExpedienteAction::OpenViewerModal(required(tag, payload)?),
            OPEN_SIGNATURE_MODAL => ExpedienteAction::OpenSignatureModal(required(tag, payload)?),
            SET_TARGET_WORKFLOW => ExpedienteAction::SetTargetWorkflow(nullable(tag, payload)?),
            CLOSE_MODALS => ExpedienteAction::CloseModals,
            SET_CUSTOM_DATA => ExpedienteAction::SetCustomData(required(tag, payload)?),
            SELECT_PLANTILLA => ExpedienteAction::SelectPlantilla(nullable(tag, payload)?),
            SET_PLANTILLA_DATA => ExpedienteAction::SetPlantillaData(required(tag, payload)?),
            other => ExpedienteAction::Unknown(other.to_string()),
        };
        Ok(action)
    }
}

fn required<T: DeserializeOwned>(tag: &str, payload: Option<Value>) -> Result<T, AppError> {
    let value = payload.ok_or_else(|| AppError::bad_request(format!("{tag} requires a payload")))?;
    serde_json::from_value(value)
        .map_err(|e| AppError::bad_request(format!("invalid {tag} payload: {e}")))
}

fn nullable<T: DeserializeOwned>(tag: &str, payload: Option<Value>) -> Result<Option<T>, AppError> {
    match payload {
        None | Some(Value::Null) => Ok(None),
        Some(value) => required(tag, Some(value)).map(Some),
    }
}

/// `{ "type": TAG, "payload": ... }` as dispatched by untyped callers.
#[derive(Debug, Deserialize)]
struct TaggedAction {
    #[serde(rename = "type")]
    tag: String,
    #[serde(default)]
    payload: Option<Value>,
}

impl TryFrom<TaggedAction> for ExpedienteAction {
    type Error = AppError;

    fn try_from(raw: TaggedAction) -> Result<Self, Self::Error> {
        ExpedienteAction::from_tagged(&raw.tag, raw.payload)
    }
}
