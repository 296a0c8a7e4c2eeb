// ============================================================================
// SEGMENT DETAIL PAGE - Métricas, broadcasts del segmento y miembros
// ============================================================================

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::use_detail;
use crate::models::{Broadcast, SegmentDetail, SegmentMember};
use crate::services;
use crate::utils::{fmt_date, fmt_int, fmt_percent};

#[derive(Properties, PartialEq)]
pub struct SegmentDetailPageProps {
    pub id: String,
    pub data_version: u32,
    pub on_back: Callback<()>,
}

#[function_component(SegmentDetailPage)]
pub fn segment_detail_page(props: &SegmentDetailPageProps) -> Html {
    let detail = use_detail(
        props.id.clone(),
        props.data_version,
        |id: String| async move { services::get_segment(&id).await },
    );

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <div class="page">
            <a class="link back-link" onclick={on_back}>{"← Back to segments"}</a>

            { if !detail.error.is_empty() {
                html! { <div class="card card-error"><p>{ &detail.error }</p></div> }
            } else if detail.loading {
                html! { <div class="loading"><span class="spinner" /></div> }
            } else if let Some(detail) = &detail.data {
                segment_detail(detail)
            } else {
                html! {}
            } }
        </div>
    }
}

fn segment_detail(detail: &SegmentDetail) -> Html {
    let segment = &detail.segment;

    html! {
        <>
            <div class="page-header">
                <div>
                    <h1 class="page-title">{ segment.name.clone().unwrap_or_else(|| segment.id.clone()) }</h1>
                    <p class="page-subtitle">{ format!("Created {}", fmt_date(segment.created_at.as_deref())) }</p>
                </div>
            </div>

            <div class="metric-grid">
                <div class="metric-card">
                    <p class="metric-label">{"Contacts"}</p>
                    <p class="metric-value">{ fmt_int(segment.total_contacts) }</p>
                </div>
                <div class="metric-card">
                    <p class="metric-label">{"Broadcasts"}</p>
                    <p class="metric-value">{ fmt_int(segment.total_broadcasts) }</p>
                </div>
                <div class="metric-card">
                    <p class="metric-label">{"Delivered"}</p>
                    <p class="metric-value">{ fmt_int(segment.total_delivered) }</p>
                </div>
                <div class="metric-card">
                    <p class="metric-label">{"Open Rate"}</p>
                    <p class="metric-value">{ fmt_percent(segment.open_rate) }</p>
                </div>
                <div class="metric-card">
                    <p class="metric-label">{"Click Rate"}</p>
                    <p class="metric-value">{ fmt_percent(segment.click_rate) }</p>
                </div>
            </div>

            <h2 class="section-title">{"Broadcasts"}</h2>
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
                            <th>{"Sent At"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for detail.broadcasts.iter().map(segment_broadcast_row) }
                        { if detail.broadcasts.is_empty() {
                            html! {
                                <tr><td class="table-empty" colspan="7">{"No broadcasts for this segment."}</td></tr>
                            }
                        } else {
                            html! {}
                        } }
                    </tbody>
                </table>
            </div>

            <h2 class="section-title">{"Members"}</h2>
            <div class="card table-card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Email"}</th>
                            <th>{"Delivered"}</th>
                            <th>{"Opened"}</th>
                            <th>{"Clicked"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for detail.users.iter().map(member_row) }
                        { if detail.users.is_empty() {
                            html! {
                                <tr><td class="table-empty" colspan="4">{"No members recorded."}</td></tr>
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

fn segment_broadcast_row(row: &Broadcast) -> Html {
    html! {
        <tr class="table-row" key={row.id.clone()}>
            <td>{ row.display_name() }</td>
            <td>{ row.status.clone().unwrap_or_default() }</td>
            <td>{ fmt_int(row.total_sent) }</td>
            <td>{ fmt_int(row.total_delivered) }</td>
            <td>{ fmt_int(row.total_opened) }</td>
            <td>{ fmt_int(row.total_clicked) }</td>
            <td>{ fmt_date(row.sent_at.as_deref()) }</td>
        </tr>
    }
}

fn member_row(row: &SegmentMember) -> Html {
    html! {
        <tr class="table-row" key={row.email.clone()}>
            <td>{ &row.email }</td>
            <td>{ fmt_int(row.delivered) }</td>
            <td>{ fmt_int(row.opened) }</td>
            <td>{ fmt_int(row.clicked) }</td>
        </tr>
    }
}
