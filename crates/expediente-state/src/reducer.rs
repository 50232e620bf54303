//! Pure state transitions for the expediente page.
//!
//! `reduce` never touches its input: every branch builds a new snapshot,
//! copying the untouched fields from the previous one. It performs no I/O,
//! reads no clock and cannot fail.

use crate::action::{ExpedienteAction, FetchPayload};
use crate::state::{ExpedienteState, UiState};

pub fn reduce(state: &ExpedienteState, action: ExpedienteAction) -> ExpedienteState {
    match action {
        ExpedienteAction::FetchStart => ExpedienteState {
            is_loading: true,
            error: String::new(),
            ..state.clone()
        },
        ExpedienteAction::FetchSuccess(payload) => merge_fetched(state, payload),
        ExpedienteAction::FetchError(error) => ExpedienteState {
            is_loading: false,
            error,
            ..state.clone()
        },
        ExpedienteAction::TogglePrestamoForm => with_ui(
            state,
            UiState {
                show_prestamo_form: !state.ui.show_prestamo_form,
                ..state.ui.clone()
            },
        ),
        ExpedienteAction::ToggleDateModal => with_ui(
            state,
            UiState {
                is_date_modal_open: !state.ui.is_date_modal_open,
                ..state.ui.clone()
            },
        ),
        ExpedienteAction::OpenViewerModal(url) => with_ui(
            state,
            UiState {
                is_viewer_modal_open: true,
                viewing_file_url: url,
                ..state.ui.clone()
            },
        ),
        ExpedienteAction::OpenSignatureModal(documento_id) => with_ui(
            state,
            UiState {
                is_signature_modal_open: true,
                target_documento_id_firma: Some(documento_id),
                ..state.ui.clone()
            },
        ),
        ExpedienteAction::SetTargetWorkflow(documento_id) => with_ui(
            state,
            UiState {
                target_documento_id_workflow: documento_id,
                ..state.ui.clone()
            },
        ),
        // Leaves the workflow target, the date modal and the loan form as
        // they were.
        ExpedienteAction::CloseModals => with_ui(
            state,
            UiState {
                is_viewer_modal_open: false,
                is_signature_modal_open: false,
                viewing_file_url: String::new(),
                target_documento_id_firma: None,
                ..state.ui.clone()
            },
        ),
        ExpedienteAction::SetCustomData(custom_data) => ExpedienteState {
            custom_data,
            ..state.clone()
        },
        ExpedienteAction::SelectPlantilla(plantilla) => ExpedienteState {
            plantilla_seleccionada: plantilla,
            datos_plantilla: Default::default(),
            ..state.clone()
        },
        ExpedienteAction::SetPlantillaData(datos_plantilla) => ExpedienteState {
            datos_plantilla,
            ..state.clone()
        },
        ExpedienteAction::Unknown(_) => state.clone(),
    }
}

fn with_ui(state: &ExpedienteState, ui: UiState) -> ExpedienteState {
    ExpedienteState {
        ui,
        ..state.clone()
    }
}

fn merge_fetched(state: &ExpedienteState, payload: FetchPayload) -> ExpedienteState {
    let mut next = state.clone();
    next.is_loading = false;
    if let Some(expediente) = payload.expediente {
        next.expediente = expediente;
    }
    if let Some(error) = payload.error {
        next.error = error;
    }
    if let Some(documentos) = payload.documentos_disponibles {
        next.documentos_disponibles = documentos;
    }
    if let Some(workflows) = payload.workflows {
        next.workflows = workflows;
    }
    if let Some(plantillas) = payload.plantillas {
        next.plantillas = plantillas;
    }
    if let Some(custom_fields) = payload.custom_fields {
        next.custom_fields = custom_fields;
    }
    if let Some(custom_data) = payload.custom_data {
        next.custom_data = custom_data;
    }
    if let Some(plantilla) = payload.plantilla_seleccionada {
        next.plantilla_seleccionada = plantilla;
    }
    if let Some(datos) = payload.datos_plantilla {
        next.datos_plantilla = datos;
    }
    next
}
