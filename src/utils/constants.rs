/// URL base del API de analytics.
/// Configurada en tiempo de compilación:
/// - Por defecto: cadena vacía (mismo origen que la app)
/// - Producción: via API_BASE_URL env var
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "",
};

/// Portal de autenticación usado como fallback cuando
/// `/api/auth/portal-url` no responde.
pub const DEFAULT_PORTAL_URL: &str = match option_env!("PORTAL_URL") {
    Some(url) => url,
    None => "https://portal.usemaya.com",
};

/// Tamaño de página fijo para todas las tablas paginadas.
pub const PAGE_SIZE: u32 = 50;
