// ============================================================================
// PAGER - Controles prev/next con rango visible
// ============================================================================

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::state::PageWindow;
use crate::utils::fmt_int;

#[derive(Properties, PartialEq)]
pub struct PagerProps {
    pub total: u64,
    pub page_index: u32,
    pub page_size: u32,
    pub on_prev: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
}

#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    let window = PageWindow::new(props.total, props.page_index, props.page_size);

    html! {
        <div class="pager">
            <span class="pager-range">
                { format!(
                    "Showing {}–{} of {}",
                    fmt_int(Some(window.from())),
                    fmt_int(Some(window.to())),
                    fmt_int(Some(window.total)),
                ) }
            </span>
            <div class="pager-controls">
                <button
                    type="button"
                    class="btn btn-secondary"
                    onclick={props.on_prev.clone()}
                    disabled={!window.has_prev()}
                >
                    {"Previous"}
                </button>
                <span class="pager-page">
                    { format!("Page {} of {}", window.page_index + 1, window.total_pages()) }
                </span>
                <button
                    type="button"
                    class="btn btn-secondary"
                    onclick={props.on_next.clone()}
                    disabled={!window.has_next()}
                >
                    {"Next"}
                </button>
            </div>
        </div>
    }
}
