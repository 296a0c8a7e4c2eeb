// ============================================================================
// API CLIENT - Funciones tipadas por endpoint (stateless)
// ============================================================================
// NO tiene lógica de negocio, solo construye rutas y delega en transport.
// ============================================================================

use crate::models::{
    Broadcast, BroadcastDetail, ClearResponse, Contact, ContactDetail, PageResult, RecipientRow,
    Segment, SegmentDetail, SyncStatus, SyncTriggerResponse,
};
use crate::services::transport::{get_json, post_json};

/// Parámetros de listado: paginación y filtro de texto opcional.
/// `q: None` no emite la clave; `q: Some("")` sí emite `q=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub limit: u32,
    pub offset: u32,
    pub q: Option<String>,
}

impl ListParams {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit,
            offset,
            q: None,
        }
    }

    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Query string determinista: mismas entradas, misma cadena
    /// (orden fijo limit, offset, q).
    pub fn query_string(&self) -> String {
        let mut qs = format!("limit={}&offset={}", self.limit, self.offset);
        if let Some(q) = &self.q {
            qs.push_str("&q=");
            qs.push_str(&urlencoding::encode(q));
        }
        qs
    }
}

// --- Sync -------------------------------------------------------------------

pub async fn trigger_sync() -> Result<SyncTriggerResponse, String> {
    post_json("/api/sync").await
}

pub async fn get_sync_status() -> Result<SyncStatus, String> {
    get_json("/api/sync/status").await
}

pub async fn clear_synced_data() -> Result<ClearResponse, String> {
    post_json("/api/sync/clear").await
}

// --- Broadcasts -------------------------------------------------------------

pub async fn get_broadcasts(params: &ListParams) -> Result<PageResult<Broadcast>, String> {
    get_json(&format!("/api/broadcasts?{}", params.query_string())).await
}

pub async fn get_broadcast(broadcast_id: &str) -> Result<BroadcastDetail, String> {
    get_json(&format!(
        "/api/broadcasts/{}",
        urlencoding::encode(broadcast_id)
    ))
    .await
}

pub async fn get_broadcast_recipients(
    broadcast_id: &str,
    params: &ListParams,
) -> Result<PageResult<RecipientRow>, String> {
    get_json(&format!(
        "/api/broadcasts/{}/recipients?{}",
        urlencoding::encode(broadcast_id),
        params.query_string()
    ))
    .await
}

// --- Users ------------------------------------------------------------------

pub async fn get_users(params: &ListParams) -> Result<PageResult<Contact>, String> {
    get_json(&format!("/api/users?{}", params.query_string())).await
}

pub async fn get_user(email: &str) -> Result<ContactDetail, String> {
    get_json(&format!("/api/users/{}", urlencoding::encode(email))).await
}

// --- Segments ---------------------------------------------------------------

pub async fn get_segments(params: &ListParams) -> Result<PageResult<Segment>, String> {
    get_json(&format!("/api/segments?{}", params.query_string())).await
}

pub async fn get_segment(segment_id: &str) -> Result<SegmentDetail, String> {
    get_json(&format!("/api/segments/{}", urlencoding::encode(segment_id))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_without_filter_omits_q() {
        let params = ListParams::new(50, 100);
        assert_eq!(params.query_string(), "limit=50&offset=100");
    }

    #[test]
    fn query_string_keeps_empty_filter() {
        let params = ListParams::new(50, 0).with_query("");
        assert_eq!(params.query_string(), "limit=50&offset=0&q=");
    }

    #[test]
    fn query_string_encodes_filter_text() {
        let params = ListParams::new(50, 0).with_query("ana maría+co");
        assert_eq!(
            params.query_string(),
            "limit=50&offset=0&q=ana%20mar%C3%ADa%2Bco"
        );
    }

    #[test]
    fn query_string_is_deterministic() {
        let a = ListParams::new(25, 75).with_query("news");
        let b = ListParams::new(25, 75).with_query("news");
        assert_eq!(a.query_string(), b.query_string());
    }
}
