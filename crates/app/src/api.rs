//! REST client for the expediente backend.
//!
//! Every call returns `Result<_, AppError>`; failed responses are decoded
//! from the backend's JSON error body when possible, otherwise mapped from
//! the HTTP status.

use expediente_state::FetchPayload;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared_types::{
    ApiConfig, AppConfig, AppError, AsignarWorkflowRequest, CustomField, DocumentoDisponible,
    Expediente, FirmaRequest, GenerarDocumentoRequest, Plantilla, PrestamoRequest, RecordId,
    Workflow, FECHA_VENCIMIENTO_KEY,
};
use std::collections::HashMap;
use tracing::{debug, warn};
use validator::Validate;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api: ApiConfig,
}

impl ApiClient {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            http: build_http(&config.api),
            api: config.api.clone(),
        }
    }

    /// Load everything the expediente page shows in one payload.
    pub async fn fetch_expediente_bundle(&self, id: &RecordId) -> Result<FetchPayload, AppError> {
        let expediente: Expediente = self.get_json(&format!("/api/expedientes/{id}")).await?;
        let documentos: Vec<DocumentoDisponible> = self
            .get_json(&format!("/api/expedientes/{id}/documentos"))
            .await?;
        let workflows: Vec<Workflow> = self.get_json("/api/workflows").await?;
        let plantillas: Vec<Plantilla> = self.get_json("/api/plantillas").await?;
        let custom_fields: Vec<CustomField> = self
            .get_json(&format!("/api/expedientes/{id}/custom-fields"))
            .await?;

        Ok(FetchPayload {
            custom_data: Some(seed_custom_data(&custom_fields, &expediente)),
            expediente: Some(Some(expediente)),
            documentos_disponibles: Some(documentos),
            workflows: Some(workflows),
            plantillas: Some(plantillas),
            custom_fields: Some(custom_fields),
            ..FetchPayload::default()
        })
    }

    pub async fn save_custom_data(
        &self,
        expediente_id: &RecordId,
        data: &HashMap<String, Value>,
    ) -> Result<(), AppError> {
        self.send_json::<_, Value>(
            Method::PUT,
            &format!("/api/expedientes/{expediente_id}/custom-data"),
            data,
        )
        .await
        .map(|_| ())
    }

    pub async fn generate_from_plantilla(
        &self,
        expediente_id: &RecordId,
        request: &GenerarDocumentoRequest,
    ) -> Result<DocumentoDisponible, AppError> {
        self.send_json(
            Method::POST,
            &format!("/api/expedientes/{expediente_id}/documentos"),
            request,
        )
        .await
    }

    pub async fn assign_workflow(
        &self,
        documento_id: &RecordId,
        workflow_id: RecordId,
    ) -> Result<(), AppError> {
        let body = AsignarWorkflowRequest { workflow_id };
        self.send_json::<_, Value>(
            Method::POST,
            &format!("/api/documentos/{documento_id}/workflow"),
            &body,
        )
        .await
        .map(|_| ())
    }

    pub async fn sign_documento(
        &self,
        documento_id: &RecordId,
        request: &FirmaRequest,
    ) -> Result<(), AppError> {
        request.validate()?;
        self.send_json::<_, Value>(
            Method::POST,
            &format!("/api/documentos/{documento_id}/firma"),
            request,
        )
        .await
        .map(|_| ())
    }

    pub async fn request_prestamo(&self, request: &PrestamoRequest) -> Result<(), AppError> {
        request.validate()?;
        self.send_json::<_, Value>(Method::POST, "/api/prestamos", request)
            .await
            .map(|_| ())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.api.url(path);
        debug!(%url, "GET");
        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        decode(&url, response).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.api.url(path);
        debug!(%method, %url, "sending");
        let response = self
            .http
            .request(method, &url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        decode(&url, response).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http(api: &ApiConfig) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(api.timeout_secs))
        .build()
        .unwrap_or_else(|e| {
            warn!(error = %e, "failed to build HTTP client with timeout, using defaults");
            reqwest::Client::new()
        })
}

// Browser fetch has no client-side timeout knob.
#[cfg(target_arch = "wasm32")]
fn build_http(_api: &ApiConfig) -> reqwest::Client {
    reqwest::Client::new()
}

async fn decode<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> Result<T, AppError> {
    let status = response.status();
    if status.is_success() {
        let body = response.text().await.map_err(transport_error)?;
        // Mutations may answer 204 or an empty body.
        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        return serde_json::from_str(body).map_err(AppError::from);
    }
    let body = response.text().await.unwrap_or_default();
    let err = error_from_response(status.as_u16(), &body);
    warn!(status = status.as_u16(), %url, error = %err, "backend request failed");
    Err(err)
}

fn transport_error(err: reqwest::Error) -> AppError {
    warn!(error = %err, "backend unreachable");
    if err.is_timeout() {
        AppError::unavailable("El servidor tardó demasiado en responder.")
    } else {
        AppError::unavailable("No se pudo conectar con el servidor.")
    }
}

/// Build the error for a non-2xx response.
pub fn error_from_response(status: u16, body: &str) -> AppError {
    AppError::from_response_body(body).unwrap_or_else(|| {
        let message = match status {
            401 | 403 => "No tiene permisos para esta operación.",
            404 => "El recurso solicitado no existe.",
            _ => shared_types::GENERIC_ERROR_MESSAGE,
        };
        AppError::from_status(status, message)
    })
}

/// Initial `custom_data`: the stored value of every field that has one,
/// keyed by field id, plus the expediente's saved expiry date.
pub fn seed_custom_data(fields: &[CustomField], expediente: &Expediente) -> HashMap<String, Value> {
    let mut data: HashMap<String, Value> = fields
        .iter()
        .filter_map(|f| f.valor.clone().map(|v| (f.id.to_string(), v)))
        .collect();
    if let Some(fecha) = expediente.fecha_vencimiento() {
        data.insert(FECHA_VENCIMIENTO_KEY.to_string(), Value::from(fecha));
    }
    data
}
