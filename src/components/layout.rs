// ============================================================================
// LAYOUT - Cabecera con navegación, acciones de sync y overlay de bloqueo
// ============================================================================

use web_sys::MouseEvent;
use yew::prelude::*;

use super::app::Route;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub active: Route,
    pub on_navigate: Callback<Route>,
    pub syncing: bool,
    pub clearing: bool,
    pub busy: bool,
    pub busy_label: &'static str,
    pub message: String,
    pub on_sync: Callback<MouseEvent>,
    pub on_clear: Callback<MouseEvent>,
    pub children: Html,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let nav_items = [
        (Route::Broadcasts, "Broadcasts"),
        (Route::Users, "Users"),
        (Route::Segments, "Segments"),
    ];

    html! {
        <div class="app-shell">
            <header class="app-header">
                <div class="app-header-inner">
                    <div class="app-brand">
                        <h1 class="app-title">{"Maya Email Analytics"}</h1>
                        <nav class="app-nav">
                            { for nav_items.into_iter().map(|(route, label)| {
                                let is_active = props.active.section() == route.section();
                                let onclick = {
                                    let on_navigate = props.on_navigate.clone();
                                    let route = route.clone();
                                    Callback::from(move |_: MouseEvent| on_navigate.emit(route.clone()))
                                };
                                html! {
                                    <a
                                        class={if is_active { "nav-link active" } else { "nav-link" }}
                                        onclick={onclick}
                                    >
                                        {label}
                                    </a>
                                }
                            }) }
                        </nav>
                    </div>
                    <div class="app-actions">
                        <button
                            type="button"
                            class="btn btn-danger"
                            onclick={props.on_clear.clone()}
                            disabled={props.clearing || props.syncing}
                        >
                            { if props.clearing { "Clearing..." } else { "Clear Synced Data" } }
                        </button>
                        <button
                            type="button"
                            class="btn btn-primary"
                            onclick={props.on_sync.clone()}
                            disabled={props.syncing || props.clearing}
                        >
                            { if props.syncing { "Syncing..." } else { "Sync" } }
                        </button>
                    </div>
                </div>
                { if !props.message.is_empty() {
                    html! { <div class="sync-message">{ &props.message }</div> }
                } else {
                    html! {}
                } }
            </header>

            <main class="app-main">
                { props.children.clone() }
            </main>

            { if props.busy {
                html! {
                    <div class="busy-overlay">
                        <div class="busy-card">
                            <p class="busy-title">
                                { if props.busy_label.is_empty() { "Please wait..." } else { props.busy_label } }
                            </p>
                            <p class="busy-note">
                                {"Actions are temporarily disabled while this operation completes."}
                            </p>
                        </div>
                    </div>
                }
            } else {
                html! {}
            } }
        </div>
    }
}
