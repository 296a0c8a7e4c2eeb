// ============================================================================
// USE DETAIL HOOK - Fetch único de una entidad con guard de liveness
// ============================================================================

use std::future::Future;

use yew::prelude::*;

use crate::state::FetchGeneration;

pub struct UseDetailHandle<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: String,
}

/// Carga una entidad por clave (id o email). Refetch al cambiar la clave
/// o la versión de datos; una respuesta tardía tras el desmontaje se
/// descarta.
#[hook]
pub fn use_detail<T, F, Fut>(key: String, data_version: u32, fetch: F) -> UseDetailHandle<T>
where
    T: Clone + PartialEq + 'static,
    F: Fn(String) -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let data = use_state(|| None::<T>);
    let loading = use_state(|| true);
    let error = use_state(String::new);
    let generation = use_mut_ref(FetchGeneration::new);

    {
        let data = data.clone();
        let loading = loading.clone();
        let error = error.clone();
        let generation = generation.borrow().clone();
        use_effect_with((key, data_version), move |(key, _version)| {
            let token = generation.begin();
            loading.set(true);
            error.set(String::new());

            let task_generation = generation.clone();
            let future = fetch(key.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let result = future.await;
                if !task_generation.is_current(token) {
                    return;
                }
                match result {
                    Ok(entity) => data.set(Some(entity)),
                    Err(e) => {
                        log::error!("❌ Error cargando detalle: {}", e);
                        data.set(None);
                        error.set(e);
                    }
                }
                loading.set(false);
            });

            move || generation.invalidate()
        });
    }

    UseDetailHandle {
        data: (*data).clone(),
        loading: *loading,
        error: (*error).clone(),
    }
}
