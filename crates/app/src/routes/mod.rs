pub mod expedientes;
pub mod home;
pub mod not_found;

use dioxus::prelude::*;

use home::Home;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/expedientes/:id")]
    ExpedienteDetail { id: String },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn ExpedienteDetail(id: String) -> Element {
    rsx! {
        expedientes::detail::ExpedienteDetailPage { id }
    }
}

/// Shell shared by every page: top bar plus the routed outlet.
#[component]
fn AppLayout() -> Element {
    rsx! {
        header { class: "navbar",
            Link { to: Route::Home {}, class: "navbar-brand", "Expedientes" }
        }
        main { class: "main-content",
            Outlet::<Route> {}
        }
    }
}
