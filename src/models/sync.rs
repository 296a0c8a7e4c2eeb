use serde::Deserialize;

/// Snapshot del último sync reportado por `/api/sync/status`.
/// `status` es un conjunto abierto: "never_synced", "running",
/// "completed", "failed", ...
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SyncStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub events_processed: Option<u64>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub last_processed_webhook_received_at: Option<String>,
}

impl SyncStatus {
    pub fn is_never_synced(&self) -> bool {
        self.status.is_empty() || self.status == "never_synced"
    }
}

/// Resultado de un trigger exitoso. Campos ausentes cuentan como 0.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SyncResult {
    #[serde(default)]
    pub events_processed: u64,
    #[serde(default)]
    pub recipients_synced: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SyncTriggerResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub result: SyncResult,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ClearResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
}
