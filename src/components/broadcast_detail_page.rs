// ============================================================================
// BROADCAST DETAIL PAGE - Cabecera, resumen y destinatarios paginados
// ============================================================================

use web_sys::{HtmlInputElement, InputEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

use super::Pager;
use crate::hooks::{use_detail, use_paginated};
use crate::models::{BroadcastDetail, RecipientRow};
use crate::services;
use crate::utils::{fmt_date, fmt_int, fmt_percent, PAGE_SIZE};

#[derive(Properties, PartialEq)]
pub struct BroadcastDetailPageProps {
    pub id: String,
    pub data_version: u32,
    pub on_back: Callback<()>,
}

#[function_component(BroadcastDetailPage)]
pub fn broadcast_detail_page(props: &BroadcastDetailPageProps) -> Html {
    let detail = use_detail(
        props.id.clone(),
        props.data_version,
        |id: String| async move { services::get_broadcast(&id).await },
    );

    let recipients = {
        let id = props.id.clone();
        use_paginated(PAGE_SIZE, props.data_version, move |params| {
            let id = id.clone();
            async move { services::get_broadcast_recipients(&id, &params).await }
        })
    };

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let onsubmit = {
        let submit = recipients.submit_search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let oninput = {
        let query = recipients.query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    html! {
        <div class="page">
            <a class="link back-link" onclick={on_back}>{"← Back to broadcasts"}</a>

            { if !detail.error.is_empty() {
                html! { <div class="card card-error"><p>{ &detail.error }</p></div> }
            } else if detail.loading {
                html! { <div class="loading"><span class="spinner" /></div> }
            } else if let Some(detail) = &detail.data {
                broadcast_header(detail)
            } else {
                html! {}
            } }

            <div class="page-header">
                <h2 class="section-title">{"Recipients"}</h2>
                <form class="search-form" onsubmit={onsubmit}>
                    <input
                        class="input"
                        value={(*recipients.query).clone()}
                        oninput={oninput}
                        placeholder="Search by email..."
                    />
                    <button type="submit" class="btn btn-primary">{"Search"}</button>
                </form>
            </div>

            { if !recipients.error.is_empty() {
                html! { <div class="card card-error"><p>{ &recipients.error }</p></div> }
            } else if recipients.loading {
                html! { <div class="loading"><span class="spinner" /></div> }
            } else {
                html! {
                    <>
                        <div class="card table-card">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>{"Email"}</th>
                                        <th>{"Sent"}</th>
                                        <th>{"Delivered"}</th>
                                        <th>{"Opened"}</th>
                                        <th>{"Clicked"}</th>
                                        <th>{"Bounced"}</th>
                                        <th>{"Opens"}</th>
                                        <th>{"Clicks"}</th>
                                        <th>{"Last Event"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for recipients.items.iter().map(recipient_row) }
                                    { if recipients.items.is_empty() {
                                        html! {
                                            <tr><td class="table-empty" colspan="9">{"No recipients found."}</td></tr>
                                        }
                                    } else {
                                        html! {}
                                    } }
                                </tbody>
                            </table>
                        </div>
                        <Pager
                            total={recipients.total}
                            page_index={recipients.page_index}
                            page_size={recipients.page_size}
                            on_prev={recipients.prev_page.clone()}
                            on_next={recipients.next_page.clone()}
                        />
                    </>
                }
            } }
        </div>
    }
}

fn broadcast_header(detail: &BroadcastDetail) -> Html {
    let broadcast = &detail.broadcast;
    let summary = &detail.summary;

    html! {
        <>
            <div class="page-header">
                <div>
                    <h1 class="page-title">{ broadcast.display_name() }</h1>
                    <p class="page-subtitle">
                        { broadcast.subject.clone().unwrap_or_else(|| "-".to_string()) }
                        { " · " }
                        { fmt_date(broadcast.sent_at.as_deref().or(broadcast.created_at.as_deref())) }
                    </p>
                    <p class="page-subtitle">
                        { format!("From: {}", broadcast.from_address.clone().unwrap_or_else(|| "-".to_string())) }
                    </p>
                </div>
            </div>
            <div class="metric-grid">
                <div class="metric-card">
                    <p class="metric-label">{"Recipients"}</p>
                    <p class="metric-value">{ fmt_int(summary.total_recipients) }</p>
                </div>
                <div class="metric-card">
                    <p class="metric-label">{"Delivered"}</p>
                    <p class="metric-value">{ fmt_int(summary.delivered_recipients) }</p>
                </div>
                <div class="metric-card">
                    <p class="metric-label">{"Opened"}</p>
                    <p class="metric-value">{ fmt_int(summary.opened_recipients) }</p>
                </div>
                <div class="metric-card">
                    <p class="metric-label">{"Clicked"}</p>
                    <p class="metric-value">{ fmt_int(summary.clicked_recipients) }</p>
                </div>
                <div class="metric-card">
                    <p class="metric-label">{"Bounced"}</p>
                    <p class="metric-value">{ fmt_int(broadcast.total_bounced) }</p>
                </div>
                <div class="metric-card">
                    <p class="metric-label">{"Suppressed"}</p>
                    <p class="metric-value">{ fmt_int(broadcast.total_suppressed) }</p>
                </div>
                <div class="metric-card">
                    <p class="metric-label">{"Open Rate"}</p>
                    <p class="metric-value">{ fmt_percent(broadcast.open_rate) }</p>
                </div>
                <div class="metric-card">
                    <p class="metric-label">{"Click Rate"}</p>
                    <p class="metric-value">{ fmt_percent(broadcast.click_rate) }</p>
                </div>
            </div>
        </>
    }
}

fn recipient_row(row: &RecipientRow) -> Html {
    html! {
        <tr class="table-row" key={row.id.clone()}>
            <td>{ &row.email_address }</td>
            <td>{ fmt_date(row.sent_at.as_deref()) }</td>
            <td>{ fmt_date(row.delivered_at.as_deref()) }</td>
            <td>{ fmt_date(row.opened_at.as_deref()) }</td>
            <td>{ fmt_date(row.clicked_at.as_deref()) }</td>
            <td>{ fmt_date(row.bounced_at.as_deref()) }</td>
            <td>{ fmt_int(row.open_count) }</td>
            <td>{ fmt_int(row.click_count) }</td>
            <td>{ fmt_date(row.last_event_at.as_deref()) }</td>
        </tr>
    }
}
