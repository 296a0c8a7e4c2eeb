// ============================================================================
// SEGMENTS PAGE - Lista paginada de segmentos (sin buscador)
// ============================================================================

use web_sys::MouseEvent;
use yew::prelude::*;

use super::Pager;
use crate::hooks::use_paginated;
use crate::models::Segment;
use crate::services::{self, ListParams};
use crate::utils::{fmt_date, fmt_int, fmt_percent, PAGE_SIZE};

#[derive(Properties, PartialEq)]
pub struct SegmentsPageProps {
    pub data_version: u32,
    pub on_open: Callback<String>,
}

#[function_component(SegmentsPage)]
pub fn segments_page(props: &SegmentsPageProps) -> Html {
    // El endpoint de segmentos no acepta filtro de texto
    let page = use_paginated(PAGE_SIZE, props.data_version, |params: ListParams| async move {
        services::get_segments(&ListParams::new(params.limit, params.offset)).await
    });

    html! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">{"Segments"}</h1>
                    <p class="page-subtitle">{ format!("{} segments", fmt_int(Some(page.total))) }</p>
                </div>
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
                                        <th>{"Segment"}</th>
                                        <th>{"Contacts"}</th>
                                        <th>{"Broadcasts"}</th>
                                        <th>{"Delivered"}</th>
                                        <th>{"Opened"}</th>
                                        <th>{"Clicked"}</th>
                                        <th>{"Open Rate"}</th>
                                        <th>{"Created"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for page.items.iter().map(|row| segment_row(row, &props.on_open)) }
                                    { if page.items.is_empty() {
                                        html! {
                                            <tr><td class="table-empty" colspan="8">{"No segments available."}</td></tr>
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

fn segment_row(row: &Segment, on_open: &Callback<String>) -> Html {
    let onclick = {
        let on_open = on_open.clone();
        let id = row.id.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(id.clone()))
    };

    html! {
        <tr class="table-row" key={row.id.clone()}>
            <td><a class="link" onclick={onclick}>{ row.name.clone().unwrap_or_else(|| row.id.clone()) }</a></td>
            <td>{ fmt_int(row.total_contacts) }</td>
            <td>{ fmt_int(row.total_broadcasts) }</td>
            <td>{ fmt_int(row.total_delivered) }</td>
            <td>{ fmt_int(row.total_opened) }</td>
            <td>{ fmt_int(row.total_clicked) }</td>
            <td>{ fmt_percent(row.open_rate) }</td>
            <td>{ fmt_date(row.created_at.as_deref()) }</td>
        </tr>
    }
}
