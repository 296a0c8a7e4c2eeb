// ============================================================================
// USER DETAIL PAGE - Perfil del contacto e historial de envíos
// ============================================================================

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::use_detail;
use crate::models::{ContactDetail, ContactHistoryEntry};
use crate::services;
use crate::utils::{fmt_date, fmt_int, fmt_percent};

#[derive(Properties, PartialEq)]
pub struct UserDetailPageProps {
    pub email: String,
    pub data_version: u32,
    pub on_back: Callback<()>,
}

#[function_component(UserDetailPage)]
pub fn user_detail_page(props: &UserDetailPageProps) -> Html {
    let detail = use_detail(
        props.email.clone(),
        props.data_version,
        |email: String| async move { services::get_user(&email).await },
    );

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <div class="page">
            <a class="link back-link" onclick={on_back}>{"← Back to users"}</a>

            { if !detail.error.is_empty() {
                html! { <div class="card card-error"><p>{ &detail.error }</p></div> }
            } else if detail.loading {
                html! { <div class="loading"><span class="spinner" /></div> }
            } else if let Some(detail) = &detail.data {
                user_detail(detail)
            } else {
                html! {}
            } }
        </div>
    }
}

fn user_detail(detail: &ContactDetail) -> Html {
    let user = &detail.user;

    html! {
        <>
            <div class="page-header">
                <div>
                    <h1 class="page-title">{ &user.email }</h1>
                    <p class="page-subtitle">
                        { match (&user.first_name, &user.last_name) {
                            (Some(first), Some(last)) => format!("{} {}", first, last),
                            (Some(first), None) => first.clone(),
                            (None, Some(last)) => last.clone(),
                            (None, None) => "-".to_string(),
                        } }
                    </p>
                </div>
                { if user.unsubscribed.unwrap_or(false) {
                    html! { <span class="badge badge-error">{"Unsubscribed"}</span> }
                } else {
                    html! { <span class="badge badge-success">{"Active"}</span> }
                } }
            </div>

            <div class="metric-grid">
                <div class="metric-card">
                    <p class="metric-label">{"Sent"}</p>
                    <p class="metric-value">{ fmt_int(user.total_sent) }</p>
                </div>
                <div class="metric-card">
                    <p class="metric-label">{"Delivered"}</p>
                    <p class="metric-value">{ fmt_int(user.total_delivered) }</p>
                </div>
                <div class="metric-card">
                    <p class="metric-label">{"Opened"}</p>
                    <p class="metric-value">{ fmt_int(user.total_opened) }</p>
                </div>
                <div class="metric-card">
                    <p class="metric-label">{"Clicked"}</p>
                    <p class="metric-value">{ fmt_int(user.total_clicked) }</p>
                </div>
                <div class="metric-card">
                    <p class="metric-label">{"Open Rate"}</p>
                    <p class="metric-value">{ fmt_percent(user.open_rate) }</p>
                </div>
                <div class="metric-card">
                    <p class="metric-label">{"Click Rate"}</p>
                    <p class="metric-value">{ fmt_percent(user.click_rate) }</p>
                </div>
                <div class="metric-card">
                    <p class="metric-label">{"Segments"}</p>
                    <p class="metric-value">{ fmt_int(Some(user.segment_ids.len() as u64)) }</p>
                </div>
            </div>

            <h2 class="section-title">{"Broadcast History"}</h2>
            <div class="card table-card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Broadcast"}</th>
                            <th>{"Sent"}</th>
                            <th>{"Delivered"}</th>
                            <th>{"Opened"}</th>
                            <th>{"Clicked"}</th>
                            <th>{"Opens"}</th>
                            <th>{"Clicks"}</th>
                            <th>{"Last Event"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for detail.history.iter().map(history_row) }
                        { if detail.history.is_empty() {
                            html! {
                                <tr><td class="table-empty" colspan="8">{"No broadcast history."}</td></tr>
                            }
                        } else {
                            html! {}
                        } }
                    </tbody>
                </table>
            </div>
        </>
    }
}

fn history_row(row: &ContactHistoryEntry) -> Html {
    html! {
        <tr class="table-row" key={row.broadcast_id.clone()}>
            <td>
                { row.broadcast_name.clone().unwrap_or_else(|| row.broadcast_id.clone()) }
                <p class="table-note">{ row.broadcast_subject.clone().unwrap_or_else(|| "-".to_string()) }</p>
            </td>
            <td>{ fmt_date(row.sent_at.as_deref()) }</td>
            <td>{ fmt_date(row.delivered_at.as_deref()) }</td>
            <td>{ fmt_date(row.opened_at.as_deref()) }</td>
            <td>{ fmt_date(row.clicked_at.as_deref()) }</td>
            <td>{ fmt_int(row.open_count) }</td>
            <td>{ fmt_int(row.click_count) }</td>
            <td>{ fmt_date(row.last_event_at.as_deref()) }</td>
        </tr>
    }
}
