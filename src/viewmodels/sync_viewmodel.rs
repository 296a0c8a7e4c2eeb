// ============================================================================
// SYNC VIEWMODEL - LÓGICA DE SINCRONIZACIÓN
// ============================================================================
// Solo decisiones y mensajes; sin red ni DOM. El hook `use_sync` aplica
// los resultados al estado y dispara los requests.
// ============================================================================

use crate::models::{ClearResponse, SyncStatus, SyncTriggerResponse};

pub const MSG_SYNC_STARTED: &str = "Sync started...";
pub const MSG_STATUS_UNAVAILABLE: &str = "Sync status unavailable";
pub const MSG_CLEARING: &str = "Clearing synced analytics data...";
pub const MSG_CLEAR_CANCELLED: &str = "Clear action cancelled.";
pub const MSG_CLEAR_DEFAULT: &str = "Synced analytics data cleared.";

/// Token literal que el operador debe teclear para confirmar el clear.
pub const CLEAR_CHALLENGE_TOKEN: &str = "CLEAR";

pub const CLEAR_WARNING: &str = "This will permanently delete all synced analytics data \
(broadcasts, users, segments, sync history). Webhook source event tables will NOT be changed.\
\n\nDo you want to continue?";

pub const CLEAR_CHALLENGE_PROMPT: &str = "Type \"CLEAR\" to confirm destructive action:";

/// Cierre de una acción de sync/clear: mensaje a mostrar y si hay que
/// subir el contador de versión de datos (solo en éxito).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionExit {
    pub message: String,
    pub bump_version: bool,
}

/// Mensaje para el estado del último sync. `never_synced` no muestra nada.
pub fn status_message(status: &SyncStatus) -> Option<String> {
    if status.is_never_synced() {
        return None;
    }
    Some(format!(
        "Last sync: {} ({} events processed)",
        status.status,
        status.events_processed.unwrap_or(0)
    ))
}

pub fn sync_finished(outcome: Result<SyncTriggerResponse, String>) -> ActionExit {
    match outcome {
        Ok(response) => ActionExit {
            message: format!(
                "Sync completed: {} events processed, {} recipients updated",
                response.result.events_processed, response.result.recipients_synced
            ),
            bump_version: true,
        },
        Err(error) => ActionExit {
            message: format!("Sync failed: {}", non_empty_or_unknown(&error)),
            bump_version: false,
        },
    }
}

pub fn clear_finished(outcome: Result<ClearResponse, String>) -> ActionExit {
    match outcome {
        Ok(response) => ActionExit {
            message: response
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| MSG_CLEAR_DEFAULT.to_string()),
            bump_version: true,
        },
        Err(error) => ActionExit {
            message: format!("Clear failed: {}", non_empty_or_unknown(&error)),
            bump_version: false,
        },
    }
}

/// El clear solo procede con la confirmación aceptada y el token exacto.
/// `challenge: None` es el prompt cancelado.
pub fn clear_confirmation_accepted(confirmed: bool, challenge: Option<&str>) -> bool {
    confirmed && challenge == Some(CLEAR_CHALLENGE_TOKEN)
}

/// Prioridad: syncing > clearing > idle.
pub fn busy_label(syncing: bool, clearing: bool) -> &'static str {
    if syncing {
        "Sync in progress..."
    } else if clearing {
        "Clearing synced data..."
    } else {
        ""
    }
}

fn non_empty_or_unknown(error: &str) -> &str {
    if error.is_empty() {
        "Unknown error"
    } else {
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SyncResult;

    #[test]
    fn never_synced_renders_no_message() {
        let status = SyncStatus {
            status: "never_synced".to_string(),
            ..Default::default()
        };
        assert_eq!(status_message(&status), None);
        // Respuesta vacía (objeto {}) tampoco muestra nada
        assert_eq!(status_message(&SyncStatus::default()), None);
    }

    #[test]
    fn completed_status_renders_event_count() {
        let status = SyncStatus {
            status: "completed".to_string(),
            events_processed: Some(42),
            ..Default::default()
        };
        assert_eq!(
            status_message(&status).as_deref(),
            Some("Last sync: completed (42 events processed)")
        );
    }

    #[test]
    fn status_without_event_count_defaults_to_zero() {
        let status = SyncStatus {
            status: "failed".to_string(),
            ..Default::default()
        };
        assert_eq!(
            status_message(&status).as_deref(),
            Some("Last sync: failed (0 events processed)")
        );
    }

    #[test]
    fn successful_sync_bumps_version_and_reports_counts() {
        let exit = sync_finished(Ok(SyncTriggerResponse {
            ok: true,
            result: SyncResult {
                events_processed: 10,
                recipients_synced: 4,
            },
        }));
        assert!(exit.bump_version);
        assert_eq!(
            exit.message,
            "Sync completed: 10 events processed, 4 recipients updated"
        );
    }

    #[test]
    fn sync_response_without_result_counts_as_zero() {
        let exit = sync_finished(Ok(SyncTriggerResponse::default()));
        assert!(exit.bump_version);
        assert_eq!(
            exit.message,
            "Sync completed: 0 events processed, 0 recipients updated"
        );
    }

    #[test]
    fn failed_sync_keeps_version_and_reports_error() {
        let exit = sync_finished(Err("Sync failed: db down".to_string()));
        assert!(!exit.bump_version);
        assert_eq!(exit.message, "Sync failed: Sync failed: db down");

        let exit = sync_finished(Err(String::new()));
        assert!(!exit.bump_version);
        assert_eq!(exit.message, "Sync failed: Unknown error");
    }

    #[test]
    fn clear_uses_server_message_or_default() {
        let exit = clear_finished(Ok(ClearResponse {
            ok: true,
            message: Some("Cleared all synced analytics data.".to_string()),
        }));
        assert!(exit.bump_version);
        assert_eq!(exit.message, "Cleared all synced analytics data.");

        let exit = clear_finished(Ok(ClearResponse::default()));
        assert!(exit.bump_version);
        assert_eq!(exit.message, MSG_CLEAR_DEFAULT);
    }

    #[test]
    fn failed_clear_keeps_version() {
        let exit = clear_finished(Err("boom".to_string()));
        assert!(!exit.bump_version);
        assert_eq!(exit.message, "Clear failed: boom");
    }

    #[test]
    fn clear_requires_confirm_and_exact_token() {
        assert!(clear_confirmation_accepted(true, Some("CLEAR")));
        assert!(!clear_confirmation_accepted(false, Some("CLEAR")));
        assert!(!clear_confirmation_accepted(true, None));
        assert!(!clear_confirmation_accepted(true, Some("clear")));
        assert!(!clear_confirmation_accepted(true, Some("CLEAR ")));
        assert!(!clear_confirmation_accepted(true, Some("")));
    }

    #[test]
    fn busy_label_prioritizes_syncing() {
        assert_eq!(busy_label(true, true), "Sync in progress...");
        assert_eq!(busy_label(true, false), "Sync in progress...");
        assert_eq!(busy_label(false, true), "Clearing synced data...");
        assert_eq!(busy_label(false, false), "");
    }
}
