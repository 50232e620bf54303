use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

use crate::RecordId;

/// Request body for a loan of restricted documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PrestamoRequest {
    pub expediente_id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documento_id: Option<RecordId>,
    #[validate(length(min = 1, message = "El solicitante es obligatorio"))]
    pub solicitante: String,
    #[validate(length(min = 5, message = "Indique el motivo del préstamo"))]
    pub motivo: String,
    /// Expected return date, `YYYY-MM-DD`.
    #[validate(length(equal = 10, message = "Fecha de devolución inválida"))]
    pub fecha_devolucion: String,
}

/// Request body for signing a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct FirmaRequest {
    #[validate(length(min = 1, message = "El firmante es obligatorio"))]
    pub firmante: String,
}

/// Request body for routing a document through a workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsignarWorkflowRequest {
    pub workflow_id: RecordId,
}

/// Request body for generating a document from a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerarDocumentoRequest {
    pub plantilla_id: RecordId,
    pub datos: HashMap<String, String>,
}
