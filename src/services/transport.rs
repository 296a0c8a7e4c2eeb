// ============================================================================
// TRANSPORT - Única puerta de salida HTTP (stateless salvo el portal cache)
// ============================================================================
// Todo request lleva Content-Type JSON y la cookie de sesión. Un 401 no
// devuelve payload: resuelve el portal de login, redirige el navegador y
// falla con "Not authenticated".
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cell::RefCell;
use web_sys::RequestCredentials;

use crate::utils::{API_BASE_URL, DEFAULT_PORTAL_URL};

thread_local! {
    // Primera resolución (éxito o fallback) gana para toda la sesión.
    static PORTAL_URL: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// GET autenticado que espera un cuerpo JSON.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = format!("{}{}", API_BASE_URL, path);
    let response = Request::get(&url)
        .header("Content-Type", "application/json")
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    handle_response(response).await
}

/// POST autenticado sin cuerpo que espera un JSON de vuelta.
pub async fn post_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = format!("{}{}", API_BASE_URL, path);
    let response = Request::post(&url)
        .header("Content-Type", "application/json")
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    handle_response(response).await
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if response.status() == 401 {
        let portal = resolve_portal_url().await;
        redirect_to_portal(&portal);
        return Err("Not authenticated".to_string());
    }

    let payload = parse_body(&response).await;
    if !response.ok() {
        return Err(error_message(&payload));
    }

    serde_json::from_value(payload).map_err(|e| format!("Parse error: {}", e))
}

/// Cuerpo como JSON; un cuerpo inválido cuenta como objeto vacío.
async fn parse_body(response: &Response) -> Value {
    match response.text().await {
        Ok(text) => serde_json::from_str(&text).unwrap_or_else(|_| Value::Object(Default::default())),
        Err(_) => Value::Object(Default::default()),
    }
}

/// Mensaje de error del API: `detail`, si no `message`, si no el genérico.
fn error_message(payload: &Value) -> String {
    payload
        .get("detail")
        .and_then(Value::as_str)
        .or_else(|| payload.get("message").and_then(Value::as_str))
        .unwrap_or("Request failed")
        .to_string()
}

/// Portal de autenticación, una sola resolución por sesión.
async fn resolve_portal_url() -> String {
    if let Some(cached) = PORTAL_URL.with(|cell| cell.borrow().clone()) {
        return cached;
    }

    let resolved = match fetch_portal_url().await {
        Ok(url) => url,
        Err(e) => {
            log::warn!("⚠️ Portal URL no disponible ({}), usando fallback", e);
            DEFAULT_PORTAL_URL.to_string()
        }
    };

    PORTAL_URL.with(|cell| {
        let mut cached = cell.borrow_mut();
        if cached.is_none() {
            *cached = Some(resolved);
        }
        cached.clone().unwrap_or_else(|| DEFAULT_PORTAL_URL.to_string())
    })
}

async fn fetch_portal_url() -> Result<String, String> {
    let url = format!("{}/api/auth/portal-url", API_BASE_URL);
    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let payload = parse_body(&response).await;
    payload
        .get("portal_url")
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .map(ToString::to_string)
        .ok_or_else(|| "portal_url missing in response".to_string())
}

fn redirect_to_portal(portal_url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let current = location.href().unwrap_or_default();
    let target = format!(
        "{}?redirect={}",
        portal_url,
        urlencoding::encode(&current)
    );
    log::info!("🔐 Sesión expirada, redirigiendo al portal");
    if location.set_href(&target).is_err() {
        log::error!("❌ No se pudo redirigir al portal");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_message_prefers_detail() {
        let payload = json!({ "detail": "Sync failed: boom", "message": "ignored" });
        assert_eq!(error_message(&payload), "Sync failed: boom");
    }

    #[test]
    fn error_message_falls_back_to_message() {
        let payload = json!({ "message": "service unavailable" });
        assert_eq!(error_message(&payload), "service unavailable");
    }

    #[test]
    fn error_message_generic_for_empty_body() {
        assert_eq!(error_message(&json!({})), "Request failed");
        // `detail` no textual tampoco cuenta
        assert_eq!(error_message(&json!({ "detail": 42 })), "Request failed");
    }
}
