// ============================================================================
// BROADCASTS PAGE - Lista paginada y buscable de campañas
// ============================================================================

use web_sys::{HtmlInputElement, InputEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

use super::Pager;
use crate::hooks::use_paginated;
use crate::models::Broadcast;
use crate::services;
use crate::utils::{fmt_date, fmt_int, fmt_percent, PAGE_SIZE};

#[derive(Properties, PartialEq)]
pub struct BroadcastsPageProps {
    pub data_version: u32,
    pub on_open: Callback<String>,
}

#[function_component(BroadcastsPage)]
pub fn broadcasts_page(props: &BroadcastsPageProps) -> Html {
    let page = use_paginated(PAGE_SIZE, props.data_version, |params| async move {
        services::get_broadcasts(&params).await
    });

    let onsubmit = {
        let submit = page.submit_search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let oninput = {
        let query = page.query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    html! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">{"Broadcasts"}</h1>
                    <p class="page-subtitle">{ format!("{} total broadcasts", fmt_int(Some(page.total))) }</p>
                </div>
                <form class="search-form" onsubmit={onsubmit}>
                    <input
                        class="input"
                        value={(*page.query).clone()}
                        oninput={oninput}
                        placeholder="Search by name or subject..."
                    />
                    <button type="submit" class="btn btn-primary">{"Search"}</button>
                </form>
            </div>

            { if !page.error.is_empty() {
                html! { <div class="card card-error"><p>{ &page.error }</p></div> }
            } else if page.loading {
                html! { <div class="loading"><span class="spinner" /></div> }
            } else {
                html! {
                    <>
                        <div class="card table-card">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>{"Broadcast"}</th>
                                        <th>{"Status"}</th>
                                        <th>{"Sent"}</th>
                                        <th>{"Delivered"}</th>
                                        <th>{"Opened"}</th>
                                        <th>{"Clicked"}</th>
                                        <th>{"Open Rate"}</th>
                                        <th>{"Click Rate"}</th>
                                        <th>{"Sent At"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for page.items.iter().map(|row| broadcast_row(row, &props.on_open)) }
                                    { if page.items.is_empty() {
                                        html! {
                                            <tr><td class="table-empty" colspan="9">{"No broadcasts available."}</td></tr>
                                        }
                                    } else {
                                        html! {}
                                    } }
                                </tbody>
                            </table>
                        </div>
                        <Pager
                            total={page.total}
                            page_index={page.page_index}
                            page_size={page.page_size}
                            on_prev={page.prev_page.clone()}
                            on_next={page.next_page.clone()}
                        />
                    </>
                }
            } }
        </div>
    }
}

fn broadcast_row(row: &Broadcast, on_open: &Callback<String>) -> Html {
    let onclick = {
        let on_open = on_open.clone();
        let id = row.id.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(id.clone()))
    };

    html! {
        <tr class="table-row" key={row.id.clone()}>
            <td>
                <a class="link" onclick={onclick}>{ row.display_name() }</a>
                <p class="table-note">{ row.subject.clone().unwrap_or_else(|| "-".to_string()) }</p>
            </td>
            <td>{ row.status.clone().unwrap_or_default() }</td>
            <td>{ fmt_int(row.total_sent) }</td>
            <td>{ fmt_int(row.total_delivered) }</td>
            <td>{ fmt_int(row.total_opened) }</td>
            <td>{ fmt_int(row.total_clicked) }</td>
            <td>{ fmt_percent(row.open_rate) }</td>
            <td>{ fmt_percent(row.click_rate) }</td>
            <td>{ fmt_date(row.sent_at.as_deref().or(row.created_at.as_deref())) }</td>
        </tr>
    }
}
