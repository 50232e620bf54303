use dioxus::prelude::*;
use expediente_state::{selectors, ExpedienteAction};
use serde_json::Value;
use shared_types::{FirmaRequest, RecordId, FECHA_VENCIMIENTO_KEY};
use std::collections::HashMap;
use tracing::info;

use crate::api::ApiClient;
use crate::config::app_config;
use crate::store::ExpedienteStoreHandle;

#[component]
pub fn ViewerModal(store: ExpedienteStoreHandle, url: String) -> Element {
    let mut store = store;

    rsx! {
        div { class: "modal modal-wide", role: "dialog",
            div { class: "modal-header",
                h3 { "Visor de documento" }
                button {
                    class: "button button-secondary",
                    onclick: move |_| store.dispatch(ExpedienteAction::CloseModals),
                    "Cerrar"
                }
            }
            iframe { class: "document-viewer", src: "{url}", title: "Documento" }
        }
    }
}

#[component]
pub fn SignatureModal(store: ExpedienteStoreHandle, reload: Signal<u32>) -> Element {
    let mut store = store;
    let mut reload = reload;
    let mut firmante = use_signal(String::new);
    let mut error_msg = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let state = store.state();
    let nombre = selectors::documento_firma(&state)
        .map(|d| d.nombre.clone())
        .unwrap_or_else(|| "documento".to_string());

    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let Some(documento_id) = store.peek_state().ui.target_documento_id_firma else {
            return;
        };
        let request = FirmaRequest {
            firmante: firmante.read().trim().to_string(),
        };
        spawn(async move {
            submitting.set(true);
            error_msg.set(None);
            match ApiClient::from_config(app_config())
                .sign_documento(&documento_id, &request)
                .await
            {
                Ok(()) => {
                    info!(documento = %documento_id, "documento firmado");
                    submitting.set(false);
                    // Unmounts this modal; nothing local may be touched after.
                    store.dispatch(ExpedienteAction::CloseModals);
                    *reload.write() += 1;
                }
                Err(e) => {
                    let message = e.field_errors.get("firmante").cloned().unwrap_or(e.message);
                    error_msg.set(Some(message));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "modal", role: "dialog",
            div { class: "modal-header",
                h3 { "Firmar {nombre}" }
            }
            form { onsubmit: handle_submit,
                if let Some(err) = &*error_msg.read() {
                    div { class: "error-message", "{err}" }
                }
                div { class: "form-group",
                    label { r#for: "firmante", "Nombre del firmante" }
                    input {
                        id: "firmante",
                        r#type: "text",
                        value: "{firmante}",
                        oninput: move |evt: FormEvent| firmante.set(evt.value()),
                    }
                }
                div { class: "modal-actions",
                    button {
                        r#type: "button",
                        class: "button button-secondary",
                        onclick: move |_| store.dispatch(ExpedienteAction::CloseModals),
                        "Cancelar"
                    }
                    button {
                        r#type: "submit",
                        class: "button",
                        disabled: submitting(),
                        if submitting() { "Firmando..." } else { "Firmar" }
                    }
                }
            }
        }
    }
}

/// `custom_data` with the expiry date set, or removed when `fecha` is blank.
pub fn with_fecha_vencimiento(
    mut custom_data: HashMap<String, Value>,
    fecha: &str,
) -> HashMap<String, Value> {
    let fecha = fecha.trim();
    if fecha.is_empty() {
        custom_data.remove(FECHA_VENCIMIENTO_KEY);
    } else {
        custom_data.insert(FECHA_VENCIMIENTO_KEY.to_string(), Value::String(fecha.to_string()));
    }
    custom_data
}

/// Edits the expiry date kept in `custom_data` and saves it right away.
/// Closing uses the toggle, since `CloseModals` leaves this modal open.
#[component]
pub fn DateModal(store: ExpedienteStoreHandle, expediente_id: RecordId) -> Element {
    let mut store = store;
    let mut fecha = use_signal(move || {
        store
            .peek_state()
            .custom_data
            .get(FECHA_VENCIMIENTO_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    });
    let mut error_msg = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let handle_save = move |_: MouseEvent| {
        let custom_data = with_fecha_vencimiento(store.peek_state().custom_data, &fecha.read());
        let expediente_id = expediente_id.clone();
        spawn(async move {
            saving.set(true);
            error_msg.set(None);
            match ApiClient::from_config(app_config())
                .save_custom_data(&expediente_id, &custom_data)
                .await
            {
                Ok(()) => {
                    info!(expediente = %expediente_id, "fecha de vencimiento guardada");
                    saving.set(false);
                    store.dispatch(ExpedienteAction::SetCustomData(custom_data));
                    store.dispatch(ExpedienteAction::ToggleDateModal);
                }
                Err(e) => {
                    error_msg.set(Some(e.message));
                    saving.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "modal", role: "dialog",
            div { class: "modal-header",
                h3 { "Fecha de vencimiento" }
            }
            if let Some(err) = &*error_msg.read() {
                div { class: "error-message", "{err}" }
            }
            div { class: "form-group",
                input {
                    r#type: "date",
                    value: "{fecha}",
                    oninput: move |evt: FormEvent| fecha.set(evt.value()),
                }
            }
            div { class: "modal-actions",
                button {
                    class: "button button-secondary",
                    onclick: move |_| store.dispatch(ExpedienteAction::ToggleDateModal),
                    "Cancelar"
                }
                button {
                    class: "button",
                    disabled: saving(),
                    onclick: handle_save,
                    if saving() { "Guardando..." } else { "Aplicar" }
                }
            }
        }
    }
}
