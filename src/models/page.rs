use serde::Deserialize;

/// Una página de resultados de cualquier colección (`{ data, total }`).
/// Se reemplaza completa en cada fetch, nunca se parchea.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageResult<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

impl<T> Default for PageResult<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }
}
