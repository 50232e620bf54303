use dioxus::prelude::*;
use expediente_state::{selectors, ExpedienteAction};
use serde_json::Value;
use shared_types::{
    AppError, CustomField, CustomFieldType, GenerarDocumentoRequest, PlantillaSeleccionada,
    PrestamoRequest, RecordId,
};
use std::collections::HashMap;
use tracing::info;

use crate::api::ApiClient;
use crate::config::app_config;
use crate::store::ExpedienteStoreHandle;

/// Validation message reported for `field`, if any.
fn field_error(errors: &HashMap<String, String>, field: &str) -> Option<String> {
    errors.get(field).cloned()
}

#[component]
pub fn PrestamoForm(store: ExpedienteStoreHandle, expediente_id: RecordId) -> Element {
    let mut store = store;
    let mut solicitante = use_signal(String::new);
    let mut motivo = use_signal(String::new);
    let mut fecha_devolucion = use_signal(String::new);
    let mut documento = use_signal(String::new);
    let mut error = use_signal(|| None::<AppError>);
    let mut submitting = use_signal(|| false);

    let restringidos: Vec<(String, String)> = store
        .state()
        .documentos_disponibles
        .iter()
        .filter(|d| d.restringido)
        .map(|d| (d.id.to_string(), d.nombre.clone()))
        .collect();

    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let documento_id = documento.read().clone();
        let request = PrestamoRequest {
            expediente_id: expediente_id.clone(),
            documento_id: (!documento_id.is_empty()).then(|| RecordId::parse(&documento_id)),
            solicitante: solicitante.read().trim().to_string(),
            motivo: motivo.read().trim().to_string(),
            fecha_devolucion: fecha_devolucion.read().clone(),
        };
        spawn(async move {
            submitting.set(true);
            error.set(None);
            match ApiClient::from_config(app_config()).request_prestamo(&request).await {
                Ok(()) => {
                    info!(expediente = %request.expediente_id, "préstamo solicitado");
                    submitting.set(false);
                    store.dispatch(ExpedienteAction::TogglePrestamoForm);
                }
                Err(e) => {
                    error.set(Some(e));
                    submitting.set(false);
                }
            }
        });
    };

    let field_errors = error
        .read()
        .as_ref()
        .map(|e| e.field_errors.clone())
        .unwrap_or_default();
    let summary = error.read().as_ref().map(|e| e.message.clone());

    rsx! {
        section { class: "card",
            h2 { "Solicitud de préstamo" }
            if let Some(message) = summary {
                div { class: "error-message", "{message}" }
            }
            form { onsubmit: handle_submit,
                div { class: "form-group",
                    label { "Documento" }
                    select {
                        value: "{documento}",
                        onchange: move |evt: Event<FormData>| documento.set(evt.value()),
                        option { value: "", "Todo el expediente" }
                        for (id, nombre) in restringidos {
                            option { key: "{id}", value: "{id}", "{nombre}" }
                        }
                    }
                }
                div { class: "form-group",
                    label { "Solicitante" }
                    input {
                        r#type: "text",
                        value: "{solicitante}",
                        oninput: move |evt: FormEvent| solicitante.set(evt.value()),
                    }
                    if let Some(msg) = field_error(&field_errors, "solicitante") {
                        span { class: "field-error", "{msg}" }
                    }
                }
                div { class: "form-group",
                    label { "Motivo" }
                    textarea {
                        value: "{motivo}",
                        oninput: move |evt: FormEvent| motivo.set(evt.value()),
                    }
                    if let Some(msg) = field_error(&field_errors, "motivo") {
                        span { class: "field-error", "{msg}" }
                    }
                }
                div { class: "form-group",
                    label { "Fecha de devolución" }
                    input {
                        r#type: "date",
                        value: "{fecha_devolucion}",
                        oninput: move |evt: FormEvent| fecha_devolucion.set(evt.value()),
                    }
                    if let Some(msg) = field_error(&field_errors, "fecha_devolucion") {
                        span { class: "field-error", "{msg}" }
                    }
                }
                button {
                    r#type: "submit",
                    class: "button",
                    disabled: submitting(),
                    if submitting() { "Enviando..." } else { "Enviar solicitud" }
                }
            }
        }
    }
}

#[component]
pub fn WorkflowPanel(store: ExpedienteStoreHandle, reload: Signal<u32>) -> Element {
    let mut store = store;
    let mut reload = reload;
    let mut workflow = use_signal(String::new);
    let mut error_msg = use_signal(|| None::<String>);

    let state = store.state();
    let documento = selectors::documento_workflow(&state)
        .map(|d| d.nombre.clone())
        .unwrap_or_default();
    let workflows: Vec<(String, String)> = state
        .workflows
        .iter()
        .map(|w| (w.id.to_string(), w.nombre.clone()))
        .collect();

    let handle_assign = move |_: MouseEvent| {
        let selected = workflow.read().clone();
        if selected.is_empty() {
            error_msg.set(Some("Seleccione un workflow.".to_string()));
            return;
        }
        let Some(documento_id) = store.peek_state().ui.target_documento_id_workflow else {
            return;
        };
        spawn(async move {
            error_msg.set(None);
            match ApiClient::from_config(app_config())
                .assign_workflow(&documento_id, RecordId::parse(&selected))
                .await
            {
                Ok(()) => {
                    info!(documento = %documento_id, workflow = %selected, "workflow asignado");
                    store.dispatch(ExpedienteAction::SetTargetWorkflow(None));
                    *reload.write() += 1;
                }
                Err(e) => error_msg.set(Some(e.message)),
            }
        });
    };

    rsx! {
        section { class: "card",
            h2 { "Asignar workflow a {documento}" }
            if let Some(err) = &*error_msg.read() {
                div { class: "error-message", "{err}" }
            }
            select {
                value: "{workflow}",
                onchange: move |evt: Event<FormData>| workflow.set(evt.value()),
                option { value: "", "Seleccione..." }
                for (id, nombre) in workflows {
                    option { key: "{id}", value: "{id}", "{nombre}" }
                }
            }
            div { class: "form-actions",
                button {
                    class: "button button-secondary",
                    onclick: move |_| store.dispatch(ExpedienteAction::SetTargetWorkflow(None)),
                    "Cancelar"
                }
                button { class: "button", onclick: handle_assign, "Asignar" }
            }
        }
    }
}

#[component]
pub fn PlantillaPanel(
    store: ExpedienteStoreHandle,
    expediente_id: RecordId,
    reload: Signal<u32>,
) -> Element {
    let mut store = store;
    let mut reload = reload;
    let mut error_msg = use_signal(|| None::<String>);
    let mut generating = use_signal(|| false);

    let state = store.state();
    let opciones: Vec<(String, String)> = state
        .plantillas
        .iter()
        .map(|p| (p.id.to_string(), p.nombre.clone()))
        .collect();
    let seleccion = state
        .plantilla_seleccionada
        .as_ref()
        .map(|p| p.id().to_string())
        .unwrap_or_default();
    let campos: Vec<(String, String)> = selectors::plantilla_activa(&state)
        .map(|p| {
            p.campos
                .iter()
                .map(|c| (c.clone(), state.datos_plantilla.get(c).cloned().unwrap_or_default()))
                .collect()
        })
        .unwrap_or_default();
    let pendientes = selectors::campos_pendientes(&state).len();

    let handle_generate = move |_: MouseEvent| {
        let snapshot = store.peek_state();
        let Some(plantilla) = selectors::plantilla_activa(&snapshot) else {
            return;
        };
        let request = GenerarDocumentoRequest {
            plantilla_id: plantilla.id.clone(),
            datos: snapshot.datos_plantilla.clone(),
        };
        let expediente_id = expediente_id.clone();
        spawn(async move {
            generating.set(true);
            error_msg.set(None);
            match ApiClient::from_config(app_config())
                .generate_from_plantilla(&expediente_id, &request)
                .await
            {
                Ok(documento) => {
                    info!(documento = %documento.id, "documento generado");
                    store.dispatch(ExpedienteAction::SelectPlantilla(None));
                    *reload.write() += 1;
                }
                Err(e) => error_msg.set(Some(e.message)),
            }
            generating.set(false);
        });
    };

    rsx! {
        section { class: "card",
            h2 { "Generar desde plantilla" }
            if let Some(err) = &*error_msg.read() {
                div { class: "error-message", "{err}" }
            }
            select {
                value: "{seleccion}",
                onchange: move |evt: Event<FormData>| {
                    let value = evt.value();
                    let seleccion = (!value.is_empty())
                        .then(|| PlantillaSeleccionada::Id(RecordId::parse(&value)));
                    store.dispatch(ExpedienteAction::SelectPlantilla(seleccion));
                },
                option { value: "", "Sin plantilla" }
                for (id, nombre) in opciones {
                    option { key: "{id}", value: "{id}", "{nombre}" }
                }
            }
            for (campo, valor) in campos {
                CampoPlantillaInput { key: "{campo}", store, campo: campo.clone(), valor }
            }
            if !seleccion.is_empty() {
                button {
                    class: "button",
                    disabled: pendientes > 0 || generating(),
                    onclick: handle_generate,
                    if generating() { "Generando..." } else { "Generar documento" }
                }
            }
        }
    }
}

#[component]
fn CampoPlantillaInput(store: ExpedienteStoreHandle, campo: String, valor: String) -> Element {
    let mut store = store;
    let label = campo.replace('_', " ");

    rsx! {
        div { class: "form-group",
            label { "{label}" }
            input {
                r#type: "text",
                value: "{valor}",
                oninput: move |evt: FormEvent| {
                    let mut datos = store.peek_state().datos_plantilla;
                    datos.insert(campo.clone(), evt.value());
                    store.dispatch(ExpedienteAction::SetPlantillaData(datos));
                },
            }
        }
    }
}

#[component]
pub fn CustomFieldsPanel(store: ExpedienteStoreHandle, expediente_id: RecordId) -> Element {
    let mut saving = use_signal(|| false);
    let mut status = use_signal(|| None::<String>);

    let state = store.state();
    if state.custom_fields.is_empty() {
        return rsx! {};
    }
    let faltantes: Vec<String> = selectors::custom_fields_faltantes(&state)
        .iter()
        .map(|f| f.nombre.clone())
        .collect();
    let campos: Vec<(CustomField, Value)> = state
        .custom_fields
        .iter()
        .map(|f| {
            let valor = state
                .custom_data
                .get(&f.id.to_string())
                .cloned()
                .unwrap_or(Value::Null);
            (f.clone(), valor)
        })
        .collect();

    let handle_save = move |_: MouseEvent| {
        let data = store.peek_state().custom_data;
        let expediente_id = expediente_id.clone();
        spawn(async move {
            saving.set(true);
            let message = match ApiClient::from_config(app_config())
                .save_custom_data(&expediente_id, &data)
                .await
            {
                Ok(()) => "Metadatos guardados.".to_string(),
                Err(e) => e.message,
            };
            status.set(Some(message));
            saving.set(false);
        });
    };

    rsx! {
        section { class: "card",
            h2 { "Metadatos" }
            if !faltantes.is_empty() {
                div { class: "alert alert-warning",
                    "Campos obligatorios sin completar: {faltantes.join(\", \")}"
                }
            }
            for (field, valor) in campos {
                CustomFieldInput { key: "{field.id}", store, field: field.clone(), valor }
            }
            if let Some(msg) = &*status.read() {
                p { class: "text-muted", "{msg}" }
            }
            button {
                class: "button",
                disabled: saving(),
                onclick: handle_save,
                if saving() { "Guardando..." } else { "Guardar metadatos" }
            }
        }
    }
}

/// Convert an input's raw value to the JSON stored for a field type.
pub fn custom_value(tipo: CustomFieldType, raw: &str, checked: bool) -> Value {
    match tipo {
        CustomFieldType::Boolean => Value::Bool(checked),
        CustomFieldType::Number => {
            let raw = raw.trim();
            // Integers first, or "15" echoes back as "15.0".
            if let Ok(n) = raw.parse::<i64>() {
                return Value::from(n);
            }
            raw.parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .unwrap_or(Value::Null)
        }
        CustomFieldType::Text | CustomFieldType::Date => {
            if raw.is_empty() {
                Value::Null
            } else {
                Value::String(raw.to_string())
            }
        }
    }
}

fn display_value(valor: &Value) -> String {
    match valor {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[component]
fn CustomFieldInput(store: ExpedienteStoreHandle, field: CustomField, valor: Value) -> Element {
    let mut store = store;
    let key = field.id.to_string();
    let tipo = field.tipo;
    let checked = valor.as_bool().unwrap_or(false);
    let text = display_value(&valor);
    let marker = if field.requerido { " *" } else { "" };

    rsx! {
        div { class: "form-group",
            label { "{field.nombre}{marker}" }
            input {
                r#type: tipo.input_type(),
                value: "{text}",
                checked: checked,
                oninput: move |evt: FormEvent| {
                    let mut data = store.peek_state().custom_data;
                    let value = custom_value(tipo, &evt.value(), evt.checked());
                    if value.is_null() {
                        data.remove(&key);
                    } else {
                        data.insert(key.clone(), value);
                    }
                    store.dispatch(ExpedienteAction::SetCustomData(data));
                },
            }
        }
    }
}
