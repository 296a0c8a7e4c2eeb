use serde::Deserialize;

/// Un envío de campaña con sus métricas agregadas.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Broadcast {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub from_address: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub segment_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub sent_at: Option<String>,
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

impl Broadcast {
    /// Nombre para mostrar: name, o el id si no hay nombre.
    pub fn display_name(&self) -> &str {
        match &self.name {
            Some(name) if !name.is_empty() => name,
            _ => &self.id,
        }
    }
}

/// Conteos de destinatarios calculados por el backend para un broadcast.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct BroadcastSummary {
    #[serde(default)]
    pub total_recipients: Option<u64>,
    #[serde(default)]
    pub delivered_recipients: Option<u64>,
    #[serde(default)]
    pub opened_recipients: Option<u64>,
    #[serde(default)]
    pub clicked_recipients: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct BroadcastDetail {
    #[serde(default)]
    pub broadcast: Broadcast,
    #[serde(default)]
    pub summary: BroadcastSummary,
}
