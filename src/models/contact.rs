use serde::Deserialize;

/// Un contacto (usuario final) con sus métricas agregadas.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub unsubscribed: Option<bool>,
    #[serde(default)]
    pub segment_ids: Vec<String>,
    #[serde(default)]
    pub total_sent: Option<u64>,
    #[serde(default)]
    pub total_delivered: Option<u64>,
    #[serde(default)]
    pub total_opened: Option<u64>,
    #[serde(default)]
    pub total_clicked: Option<u64>,
    #[serde(default)]
    pub total_bounced: Option<u64>,
    #[serde(default)]
    pub total_suppressed: Option<u64>,
    #[serde(default)]
    pub open_rate: Option<f64>,
    #[serde(default)]
    pub click_rate: Option<f64>,
    #[serde(default)]
    pub synced_at: Option<String>,
}

/// Una fila del historial de envíos de un contacto.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ContactHistoryEntry {
    #[serde(default)]
    pub broadcast_id: String,
    #[serde(default)]
    pub broadcast_name: Option<String>,
    #[serde(default)]
    pub broadcast_subject: Option<String>,
    #[serde(default)]
    pub segment_id: Option<String>,
    #[serde(default)]
    pub email_id: Option<String>,
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

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ContactDetail {
    #[serde(default)]
    pub user: Contact,
    #[serde(default)]
    pub history: Vec<ContactHistoryEntry>,
}
