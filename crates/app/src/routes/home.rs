use dioxus::prelude::*;

use crate::routes::Route;

/// Landing page: open an expediente by its identifier.
#[component]
pub fn Home() -> Element {
    let mut id = use_signal(String::new);
    let nav = navigator();

    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let id = id.read().trim().to_string();
        if !id.is_empty() {
            nav.push(Route::ExpedienteDetail { id });
        }
    };

    rsx! {
        div { class: "container",
            h1 { class: "page-title", "Consultar expediente" }
            form { class: "card", onsubmit: handle_submit,
                div { class: "form-group",
                    label { r#for: "expediente-id", "Número de expediente" }
                    input {
                        id: "expediente-id",
                        r#type: "text",
                        placeholder: "Ej. 1024",
                        value: "{id}",
                        oninput: move |evt: FormEvent| id.set(evt.value()),
                    }
                }
                button { r#type: "submit", class: "button", "Abrir" }
            }
        }
    }
}
