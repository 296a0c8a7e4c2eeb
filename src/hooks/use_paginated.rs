// ============================================================================
// USE PAGINATED HOOK - Estado de vista paginada genérico
// ============================================================================
// Parametrizado por una función de query del API y un tamaño de página
// fijo. Refetch en: montaje, cambio de página, cambio de versión de
// datos y submit de búsqueda (que vuelve a página 0 y re-ejecuta aunque
// ya estuviera en 0). Teclear en el buscador NO dispara fetch.
// ============================================================================

use std::future::Future;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::models::PageResult;
use crate::services::ListParams;
use crate::state::{FetchGeneration, PageWindow};

pub struct UsePaginatedHandle<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub loading: bool,
    pub error: String,
    /// Texto vivo del buscador; solo viaja al API al hacer submit.
    pub query: UseStateHandle<String>,
    pub page_index: u32,
    pub page_size: u32,
    pub submit_search: Callback<()>,
    pub prev_page: Callback<MouseEvent>,
    pub next_page: Callback<MouseEvent>,
}

impl<T> UsePaginatedHandle<T> {
    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.total, self.page_index, self.page_size)
    }
}

#[hook]
pub fn use_paginated<T, F, Fut>(page_size: u32, data_version: u32, fetch: F) -> UsePaginatedHandle<T>
where
    T: Clone + PartialEq + 'static,
    F: Fn(ListParams) -> Fut + 'static,
    Fut: Future<Output = Result<PageResult<T>, String>> + 'static,
{
    let items = use_state(Vec::<T>::new);
    let total = use_state(|| 0u64);
    let loading = use_state(|| true);
    let error = use_state(String::new);
    let query = use_state(String::new);
    let page_index = use_state(|| 0u32);
    // (época, texto enviado): la época sube en cada submit, así un
    // re-submit del mismo texto en página 0 vuelve a ejecutar el fetch
    let search = use_state(|| (0u32, String::new()));
    let generation = use_mut_ref(FetchGeneration::new);

    {
        let items = items.clone();
        let total = total.clone();
        let loading = loading.clone();
        let error = error.clone();
        let generation = generation.borrow().clone();
        let deps = (*page_index, data_version, (*search).clone());
        use_effect_with(deps, move |(page_index, _version, (_epoch, submitted))| {
            let token = generation.begin();
            let params =
                ListParams::new(page_size, page_index * page_size).with_query(submitted.clone());
            loading.set(true);
            error.set(String::new());

            let task_generation = generation.clone();
            let future = fetch(params);
            wasm_bindgen_futures::spawn_local(async move {
                let result = future.await;
                if !task_generation.is_current(token) {
                    // Fetch superado o vista desmontada: no tocar nada
                    return;
                }
                match result {
                    Ok(page) => {
                        items.set(page.data);
                        total.set(page.total);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando página: {}", e);
                        items.set(Vec::new());
                        total.set(0);
                        error.set(e);
                    }
                }
                loading.set(false);
            });

            move || generation.invalidate()
        });
    }

    let submit_search = {
        let query = query.clone();
        let page_index = page_index.clone();
        let search = search.clone();
        Callback::from(move |_: ()| {
            let epoch = search.0;
            page_index.set(0);
            search.set((epoch.wrapping_add(1), (*query).clone()));
        })
    };

    let prev_page = {
        let page_index = page_index.clone();
        let total = total.clone();
        Callback::from(move |_: MouseEvent| {
            let window = PageWindow::new(*total, *page_index, page_size);
            page_index.set(window.prev_index());
        })
    };

    let next_page = {
        let page_index = page_index.clone();
        let total = total.clone();
        Callback::from(move |_: MouseEvent| {
            let window = PageWindow::new(*total, *page_index, page_size);
            page_index.set(window.next_index());
        })
    };

    UsePaginatedHandle {
        items: (*items).clone(),
        total: *total,
        loading: *loading,
        error: (*error).clone(),
        query,
        page_index: *page_index,
        page_size,
        submit_search,
        prev_page,
        next_page,
    }
}
