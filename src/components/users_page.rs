// ============================================================================
// USERS PAGE - Lista paginada de contactos, búsqueda por email
// ============================================================================

use web_sys::{HtmlInputElement, InputEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

use super::Pager;
use crate::hooks::use_paginated;
use crate::models::Contact;
use crate::services;
use crate::utils::{fmt_int, fmt_percent, PAGE_SIZE};

#[derive(Properties, PartialEq)]
pub struct UsersPageProps {
    pub data_version: u32,
    pub on_open: Callback<String>,
}

#[function_component(UsersPage)]
pub fn users_page(props: &UsersPageProps) -> Html {
    let page = use_paginated(PAGE_SIZE, props.data_version, |params| async move {
        services::get_users(&params).await
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
                    <h1 class="page-title">{"Users"}</h1>
                    <p class="page-subtitle">{ format!("{} users found", fmt_int(Some(page.total))) }</p>
                </div>
                <form class="search-form" onsubmit={onsubmit}>
                    <input
                        class="input"
                        value={(*page.query).clone()}
                        oninput={oninput}
                        placeholder="Search by email..."
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
                                        <th>{"Email"}</th>
                                        <th>{"Delivered"}</th>
                                        <th>{"Opened"}</th>
                                        <th>{"Clicked"}</th>
                                        <th>{"Open Rate"}</th>
                                        <th>{"Click Rate"}</th>
                                        <th>{"Unsubscribed"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for page.items.iter().map(|row| contact_row(row, &props.on_open)) }
                                    { if page.items.is_empty() {
                                        html! {
                                            <tr><td class="table-empty" colspan="7">{"No users found."}</td></tr>
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

fn contact_row(row: &Contact, on_open: &Callback<String>) -> Html {
    let onclick = {
        let on_open = on_open.clone();
        let email = row.email.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(email.clone()))
    };

    html! {
        <tr class="table-row" key={row.email.clone()}>
            <td><a class="link" onclick={onclick}>{ &row.email }</a></td>
            <td>{ fmt_int(row.total_delivered) }</td>
            <td>{ fmt_int(row.total_opened) }</td>
            <td>{ fmt_int(row.total_clicked) }</td>
            <td>{ fmt_percent(row.open_rate) }</td>
            <td>{ fmt_percent(row.click_rate) }</td>
            <td>
                { if row.unsubscribed.unwrap_or(false) {
                    html! { <span class="badge badge-error">{"Unsubscribed"}</span> }
                } else {
                    html! { <span class="badge badge-success">{"Active"}</span> }
                } }
            </td>
        </tr>
    }
}
