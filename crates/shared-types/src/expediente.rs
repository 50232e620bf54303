use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::RecordId;

// ---------------------------------------------------------------------------
// Expediente
// ---------------------------------------------------------------------------

/// Column and `custom_data` key holding the expediente's expiry date.
pub const FECHA_VENCIMIENTO_KEY: &str = "fecha_vencimiento";

/// A document folder/case record.
///
/// Only the columns the page renders are typed; any other column the backend
/// returns is kept verbatim in `extra` so the record round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expediente {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titulo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    /// Opening date as sent by the backend (ISO-8601 or SQL DATETIME text).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_apertura: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Expediente {
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            numero: None,
            titulo: None,
            estado: None,
            fecha_apertura: None,
            extra: Map::new(),
        }
    }

    /// Heading shown for the record: title, then number, then raw id.
    pub fn display_title(&self) -> String {
        self.titulo
            .clone()
            .or_else(|| self.numero.clone())
            .unwrap_or_else(|| format!("Expediente {}", self.id))
    }

    /// Stored expiry date, if the backend sent a non-empty one.
    pub fn fecha_vencimiento(&self) -> Option<&str> {
        self.extra
            .get(FECHA_VENCIMIENTO_KEY)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// A document available inside an expediente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentoDisponible {
    pub id: RecordId,
    #[serde(alias = "nombre_archivo")]
    pub nombre: String,
    #[serde(default, alias = "ruta", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
    #[serde(default)]
    pub firmado: bool,
    /// Restricted documents can only be consulted through a loan request.
    #[serde(default)]
    pub restringido: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha: Option<String>,
}

// ---------------------------------------------------------------------------
// Workflows & templates
// ---------------------------------------------------------------------------

/// An approval workflow a document can be routed through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: RecordId,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
}

/// A document template; `campos` lists its fillable field names in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plantilla {
    pub id: RecordId,
    pub nombre: String,
    #[serde(default)]
    pub campos: Vec<String>,
}

/// Template selection: either a bare id (from a `<select>`) or the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlantillaSeleccionada {
    Id(RecordId),
    Plantilla(Plantilla),
}

impl PlantillaSeleccionada {
    pub fn id(&self) -> &RecordId {
        match self {
            PlantillaSeleccionada::Id(id) => id,
            PlantillaSeleccionada::Plantilla(p) => &p.id,
        }
    }
}

impl From<RecordId> for PlantillaSeleccionada {
    fn from(id: RecordId) -> Self {
        PlantillaSeleccionada::Id(id)
    }
}

impl From<Plantilla> for PlantillaSeleccionada {
    fn from(p: Plantilla) -> Self {
        PlantillaSeleccionada::Plantilla(p)
    }
}

// ---------------------------------------------------------------------------
// Custom fields
// ---------------------------------------------------------------------------

/// Input type of a user-defined metadata field. Unknown types render as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomFieldType {
    Number,
    Date,
    Boolean,
    #[default]
    #[serde(other)]
    Text,
}

impl CustomFieldType {
    /// HTML `<input type>` for this field.
    pub fn input_type(&self) -> &'static str {
        match self {
            CustomFieldType::Text => "text",
            CustomFieldType::Number => "number",
            CustomFieldType::Date => "date",
            CustomFieldType::Boolean => "checkbox",
        }
    }
}

/// A user-defined metadata field attached to an expediente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: RecordId,
    pub nombre: String,
    #[serde(default)]
    pub tipo: CustomFieldType,
    #[serde(default)]
    pub requerido: bool,
    /// Value currently stored for this expediente, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor: Option<Value>,
}
