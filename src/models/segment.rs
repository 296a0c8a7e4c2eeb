use serde::Deserialize;

/// Un segmento (agrupación de contactos) con sus métricas agregadas.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub total_contacts: Option<u64>,
    #[serde(default)]
    pub total_broadcasts: Option<u64>,
    #[serde(default)]
    pub total_delivered: Option<u64>,
    #[serde(default)]
    pub total_opened: Option<u64>,
    #[serde(default)]
    pub total_clicked: Option<u64>,
    #[serde(default)]
    pub open_rate: Option<f64>,
    #[serde(default)]
    pub click_rate: Option<f64>,
    #[serde(default)]
    pub synced_at: Option<String>,
}

/// Un miembro del segmento con conteos de eventos.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SegmentMember {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub delivered: Option<u64>,
    #[serde(default)]
    pub opened: Option<u64>,
    #[serde(default)]
    pub clicked: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SegmentDetail {
    #[serde(default)]
    pub segment: Segment,
    #[serde(default)]
    pub broadcasts: Vec<crate::models::Broadcast>,
    #[serde(default)]
    pub users: Vec<SegmentMember>,
}
