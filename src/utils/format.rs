// ============================================================================
// FORMAT HELPERS - Valores para tablas y métricas
// ============================================================================

/// Entero con separador de miles ("12,345"). Valores ausentes se muestran como "0".
pub fn fmt_int(value: Option<u64>) -> String {
    let value = value.unwrap_or(0);
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Porcentaje con dos decimales ("12.34%"). Valores ausentes → "0.00%".
pub fn fmt_percent(value: Option<f64>) -> String {
    format!("{:.2}%", value.unwrap_or(0.0))
}

/// Fecha en formato local del navegador. Inválida o ausente → "-".
pub fn fmt_date(value: Option<&str>) -> String {
    let Some(value) = value else {
        return "-".to_string();
    };
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(value));
    if date.get_time().is_nan() {
        return "-".to_string();
    }
    date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .as_string()
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_int_groups_thousands() {
        assert_eq!(fmt_int(Some(0)), "0");
        assert_eq!(fmt_int(Some(999)), "999");
        assert_eq!(fmt_int(Some(1000)), "1,000");
        assert_eq!(fmt_int(Some(1234567)), "1,234,567");
        assert_eq!(fmt_int(None), "0");
    }

    #[test]
    fn fmt_percent_two_decimals() {
        assert_eq!(fmt_percent(Some(12.345)), "12.35%");
        assert_eq!(fmt_percent(Some(0.0)), "0.00%");
        assert_eq!(fmt_percent(None), "0.00%");
    }
}
