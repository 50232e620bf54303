use dioxus::prelude::*;
use expediente_state::{selectors, ExpedienteAction};
use shared_types::{DocumentoDisponible, Expediente, FeatureFlags, RecordId};

use super::modals::{DateModal, SignatureModal, ViewerModal};
use super::panels::{CustomFieldsPanel, PlantillaPanel, PrestamoForm, WorkflowPanel};
use crate::api::ApiClient;
use crate::config::app_config;
use crate::format_helpers::{format_fecha, format_fecha_hora};
use crate::routes::Route;
use crate::store::{use_expediente_store, ExpedienteStoreHandle};

#[component]
pub fn ExpedienteDetailPage(id: String) -> Element {
    let mut store = use_expediente_store();
    let flags: FeatureFlags = use_context();
    // Bumped by child panels after a successful mutation to refetch.
    let mut reload = use_signal(|| 0u32);
    let expediente_id = RecordId::parse(&id);

    // Reruns when the route id changes or `reload` is bumped.
    use_effect(use_reactive((&id,), move |(id,)| {
        let _ = reload();
        let id = RecordId::parse(&id);
        spawn(async move {
            let ticket = store.begin_fetch();
            let outcome = ApiClient::from_config(app_config())
                .fetch_expediente_bundle(&id)
                .await
                .map_err(|e| e.message);
            store.complete_fetch(ticket, outcome);
        });
    }));

    let state = store.state();

    rsx! {
        div { class: "container",
            div { class: "page-header",
                Link { to: Route::Home {}, class: "button button-secondary", "Volver" }
            }

            if state.is_loading {
                p { class: "text-muted", "Cargando expediente..." }
            } else if state.has_error() {
                div { class: "alert alert-error",
                    p { "{state.error}" }
                    button {
                        class: "button",
                        onclick: move |_| *reload.write() += 1,
                        "Reintentar"
                    }
                }
            } else if let Some(expediente) = state.expediente.clone() {
                ExpedienteHeader { expediente }

                section { class: "card",
                    div { class: "card-header",
                        h2 { "Documentos" }
                        if flags.prestamos {
                            button {
                                class: "button button-secondary",
                                onclick: move |_| store.dispatch(ExpedienteAction::TogglePrestamoForm),
                                if state.ui.show_prestamo_form { "Cancelar préstamo" } else { "Solicitar préstamo" }
                            }
                        }
                        button {
                            class: "button button-secondary",
                            onclick: move |_| store.dispatch(ExpedienteAction::ToggleDateModal),
                            "Fecha de vencimiento"
                        }
                    }
                    if state.documentos_disponibles.is_empty() {
                        p { class: "text-muted", "Este expediente no tiene documentos." }
                    } else {
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Nombre" }
                                    th { "Tipo" }
                                    th { "Fecha" }
                                    th { "Estado" }
                                    th { "" }
                                }
                            }
                            tbody {
                                for documento in state.documentos_disponibles.iter() {
                                    DocumentoRow {
                                        key: "{documento.id}",
                                        store,
                                        is_workflow_target: selectors::is_workflow_target(&state, &documento.id),
                                        documento: documento.clone(),
                                        firmas: flags.signatures,
                                    }
                                }
                            }
                        }
                    }
                }

                if flags.prestamos && state.ui.show_prestamo_form {
                    PrestamoForm { store, expediente_id: expediente_id.clone() }
                }
                if state.ui.target_documento_id_workflow.is_some() {
                    WorkflowPanel { store, reload }
                }
                if flags.plantillas {
                    PlantillaPanel { store, expediente_id: expediente_id.clone(), reload }
                }
                CustomFieldsPanel { store, expediente_id: expediente_id.clone() }

                if selectors::any_modal_open(&state) {
                    div {
                        class: "modal-backdrop",
                        onclick: move |_| store.dismiss_modals(),
                    }
                }
                if state.ui.is_viewer_modal_open {
                    ViewerModal { store, url: state.ui.viewing_file_url.clone() }
                }
                if flags.signatures && state.ui.is_signature_modal_open {
                    SignatureModal { store, reload }
                }
                if state.ui.is_date_modal_open {
                    DateModal { store, expediente_id: expediente_id.clone() }
                }
            } else {
                div { class: "empty-state",
                    h2 { "Expediente no encontrado" }
                    p { "El expediente solicitado no existe o fue archivado." }
                }
            }
        }
    }
}

#[component]
fn ExpedienteHeader(expediente: Expediente) -> Element {
    let titulo = expediente.display_title();
    let fecha = expediente.fecha_apertura.as_deref().map(format_fecha);

    rsx! {
        div { class: "page-header",
            h1 { class: "page-title", "{titulo}" }
            dl { class: "detail-list",
                if let Some(numero) = expediente.numero.as_ref() {
                    dt { "Número" }
                    dd { "{numero}" }
                }
                if let Some(estado) = expediente.estado.as_ref() {
                    dt { "Estado" }
                    dd { "{estado}" }
                }
                if let Some(fecha) = fecha {
                    dt { "Apertura" }
                    dd { "{fecha}" }
                }
            }
        }
    }
}

#[component]
fn DocumentoRow(
    store: ExpedienteStoreHandle,
    documento: DocumentoDisponible,
    firmas: bool,
    is_workflow_target: bool,
) -> Element {
    let mut store = store;
    let tipo = documento.tipo.clone().unwrap_or_else(|| "-".to_string());
    let fecha = documento.fecha.as_deref().map(format_fecha_hora).unwrap_or_default();
    let estado = if documento.firmado { "Firmado" } else { "Pendiente de firma" };
    let viewer_url = documento.url.clone();
    let firma_id = documento.id.clone();
    let workflow_id = documento.id.clone();
    let can_view = viewer_url.is_some() && !documento.restringido;
    let can_sign = firmas && !documento.firmado && !documento.restringido;

    rsx! {
        tr { class: if is_workflow_target { "row-selected" } else { "" },
            td {
                "{documento.nombre}"
                if documento.restringido {
                    span { class: "badge badge-warning", "Restringido" }
                }
            }
            td { "{tipo}" }
            td { "{fecha}" }
            td { "{estado}" }
            td { class: "row-actions",
                if can_view {
                    button {
                        class: "button button-small",
                        onclick: move |_| {
                            if let Some(url) = viewer_url.clone() {
                                store.dispatch(ExpedienteAction::OpenViewerModal(url));
                            }
                        },
                        "Ver"
                    }
                }
                if can_sign {
                    button {
                        class: "button button-small",
                        onclick: move |_| store.dispatch(ExpedienteAction::OpenSignatureModal(firma_id.clone())),
                        "Firmar"
                    }
                }
                button {
                    class: "button button-small button-secondary",
                    onclick: move |_| store.dispatch(ExpedienteAction::SetTargetWorkflow(Some(workflow_id.clone()))),
                    "Workflow"
                }
            }
        }
    }
}
