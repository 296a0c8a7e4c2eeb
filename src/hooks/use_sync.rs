// ============================================================================
// USE SYNC HOOK - Controlador de sincronización
// ============================================================================
// Dueño de los flags syncing/clearing, del mensaje de estado y del
// contador de versión de datos. Los flags se limpian en TODAS las
// salidas (éxito o fallo); la versión solo sube en éxito.
// ============================================================================

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services;
use crate::state::FetchGeneration;
use crate::viewmodels::sync_viewmodel as vm;

#[derive(Clone)]
pub struct UseSyncHandle {
    pub syncing: bool,
    pub clearing: bool,
    pub busy: bool,
    pub busy_label: &'static str,
    pub message: String,
    /// Contador de versión de datos: cada éxito de sync/clear lo sube en 1
    /// y fuerza el refetch de todas las vistas montadas.
    pub data_version: u32,
    pub on_sync: Callback<MouseEvent>,
    pub on_clear: Callback<MouseEvent>,
}

#[hook]
pub fn use_sync() -> UseSyncHandle {
    let syncing = use_state(|| false);
    let clearing = use_state(|| false);
    let message = use_state(String::new);
    let data_version = use_state(|| 0u32);
    let status_generation = use_mut_ref(FetchGeneration::new);

    // Estado del último sync, una vez al montar
    {
        let message = message.clone();
        let generation = status_generation.borrow().clone();
        use_effect_with((), move |_| {
            let token = generation.begin();
            let task_generation = generation.clone();
            let message = message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = services::get_sync_status().await;
                if !task_generation.is_current(token) {
                    // La vista ya no existe, descartar
                    return;
                }
                match result {
                    Ok(status) => {
                        log::debug!(
                            "📡 Último sync: {} (inicio {:?}, fin {:?}, último webhook {:?}, error {:?})",
                            status.status,
                            status.started_at,
                            status.completed_at,
                            status.last_processed_webhook_received_at,
                            status.error_message,
                        );
                        if let Some(msg) = vm::status_message(&status) {
                            message.set(msg);
                        }
                    }
                    Err(e) => {
                        log::warn!("⚠️ Estado de sync no disponible: {}", e);
                        message.set(vm::MSG_STATUS_UNAVAILABLE.to_string());
                    }
                }
            });
            move || generation.invalidate()
        });
    }

    let on_sync = {
        let syncing = syncing.clone();
        let clearing = clearing.clone();
        let message = message.clone();
        let data_version = data_version.clone();
        Callback::from(move |_: MouseEvent| {
            // Exclusión mutua en el controlador, no solo en los botones
            if *syncing || *clearing {
                log::warn!("⏳ Sync ignorado: ya hay una operación en curso");
                return;
            }
            syncing.set(true);
            message.set(vm::MSG_SYNC_STARTED.to_string());
            log::info!("🔄 Sync disparado");

            let syncing = syncing.clone();
            let message = message.clone();
            let data_version = data_version.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let exit = vm::sync_finished(services::trigger_sync().await);
                message.set(exit.message);
                if exit.bump_version {
                    data_version.set(*data_version + 1);
                }
                syncing.set(false);
            });
        })
    };

    let on_clear = {
        let syncing = syncing.clone();
        let clearing = clearing.clone();
        let message = message.clone();
        let data_version = data_version.clone();
        Callback::from(move |_: MouseEvent| {
            if *syncing || *clearing {
                log::warn!("⏳ Clear ignorado: ya hay una operación en curso");
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };

            let confirmed = window.confirm_with_message(vm::CLEAR_WARNING).unwrap_or(false);
            if !confirmed {
                return;
            }

            let challenge = window
                .prompt_with_message(vm::CLEAR_CHALLENGE_PROMPT)
                .ok()
                .flatten();
            if !vm::clear_confirmation_accepted(confirmed, challenge.as_deref()) {
                message.set(vm::MSG_CLEAR_CANCELLED.to_string());
                return;
            }

            clearing.set(true);
            message.set(vm::MSG_CLEARING.to_string());
            log::info!("🗑️ Clear de datos sincronizados confirmado");

            let clearing = clearing.clone();
            let message = message.clone();
            let data_version = data_version.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let exit = vm::clear_finished(services::clear_synced_data().await);
                message.set(exit.message);
                if exit.bump_version {
                    data_version.set(*data_version + 1);
                }
                clearing.set(false);
            });
        })
    };

    UseSyncHandle {
        syncing: *syncing,
        clearing: *clearing,
        busy: *syncing || *clearing,
        busy_label: vm::busy_label(*syncing, *clearing),
        message: (*message).clone(),
        data_version: *data_version,
        on_sync,
        on_clear,
    }
}
