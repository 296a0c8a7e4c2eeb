// ============================================================================
// APP - Raíz: ruta activa, controlador de sync y versión de datos
// ============================================================================

use yew::prelude::*;

use super::{
    BroadcastDetailPage, BroadcastsPage, Layout, SegmentDetailPage, SegmentsPage, UserDetailPage,
    UsersPage,
};
use crate::hooks::use_sync;

/// Vista activa de la consola. Lista ↔ detalle, sin router externo.
#[derive(Clone, PartialEq)]
pub enum Route {
    Broadcasts,
    BroadcastDetail { id: String },
    Users,
    UserDetail { email: String },
    Segments,
    SegmentDetail { id: String },
}

impl Route {
    /// Sección de navegación a la que pertenece la ruta.
    pub fn section(&self) -> &'static str {
        match self {
            Route::Broadcasts | Route::BroadcastDetail { .. } => "broadcasts",
            Route::Users | Route::UserDetail { .. } => "users",
            Route::Segments | Route::SegmentDetail { .. } => "segments",
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let route = use_state(|| Route::Broadcasts);
    let sync = use_sync();

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| route.set(next))
    };

    let page = {
        let on_navigate = on_navigate.clone();
        let data_version = sync.data_version;
        match &*route {
            Route::Broadcasts => html! {
                <BroadcastsPage
                    data_version={data_version}
                    on_open={on_navigate.reform(|id| Route::BroadcastDetail { id })}
                />
            },
            Route::BroadcastDetail { id } => html! {
                <BroadcastDetailPage
                    key={id.clone()}
                    id={id.clone()}
                    data_version={data_version}
                    on_back={on_navigate.reform(|_: ()| Route::Broadcasts)}
                />
            },
            Route::Users => html! {
                <UsersPage
                    data_version={data_version}
                    on_open={on_navigate.reform(|email| Route::UserDetail { email })}
                />
            },
            Route::UserDetail { email } => html! {
                <UserDetailPage
                    key={email.clone()}
                    email={email.clone()}
                    data_version={data_version}
                    on_back={on_navigate.reform(|_: ()| Route::Users)}
                />
            },
            Route::Segments => html! {
                <SegmentsPage
                    data_version={data_version}
                    on_open={on_navigate.reform(|id| Route::SegmentDetail { id })}
                />
            },
            Route::SegmentDetail { id } => html! {
                <SegmentDetailPage
                    key={id.clone()}
                    id={id.clone()}
                    data_version={data_version}
                    on_back={on_navigate.reform(|_: ()| Route::Segments)}
                />
            },
        }
    };

    html! {
        <Layout
            active={(*route).clone()}
            on_navigate={on_navigate}
            syncing={sync.syncing}
            clearing={sync.clearing}
            busy={sync.busy}
            busy_label={sync.busy_label}
            message={sync.message.clone()}
            on_sync={sync.on_sync.clone()}
            on_clear={sync.on_clear.clone()}
        >
            { page }
        </Layout>
    }
}
