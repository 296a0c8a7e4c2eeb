use serde::Deserialize;

/// Una fila de destinatario de un broadcast con sus marcas de evento.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RecipientRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub broadcast_id: String,
    #[serde(default)]
    pub email_id: Option<String>,
    #[serde(default)]
    pub email_address: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub sent_at: Option<String>,
    #[serde(default)]
    pub delivered_at: Option<String>,
    #[serde(default)]
    pub opened_at: Option<String>,
    #[serde(default)]
    pub clicked_at: Option<String>,
    #[serde(default)]
    pub bounced_at: Option<String>,
    #[serde(default)]
    pub suppressed_at: Option<String>,
    #[serde(default)]
    pub open_count: Option<u64>,
    #[serde(default)]
    pub click_count: Option<u64>,
    #[serde(default)]
    pub last_event_at: Option<String>,
}
