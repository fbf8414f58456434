//! Theme bootstrap: fetch once at startup, paint the document, cache.

use shared::models::{ThemeSettings, hex_to_hsl};
use wasm_bindgen::JsCast;

use crate::{api::ShopKeepClient, storage};

/// CSS custom properties derived from the settings. Pure so the mapping is
/// testable off the browser.
pub fn css_variables(theme: &ThemeSettings) -> Vec<(String, String)> {
    let mut variables = Vec::with_capacity(5);
    if let Ok(hsl) = hex_to_hsl(&theme.primary) {
        variables.push(("--p".to_string(), hsl));
    }
    variables.push(("--rounded-btn".to_string(), format!("{}rem", theme.radius)));
    variables.push((
        "--shopkeep-font-size".to_string(),
        format!("{}px", theme.font_size),
    ));
    variables.push((
        "--shopkeep-heading-size".to_string(),
        format!("{}px", theme.heading_size),
    ));
    variables.push((
        "--shopkeep-font-family".to_string(),
        theme.font_family.clone(),
    ));
    variables
}

/// Writes the theme onto the document element: appearance as `data-theme`
/// plus the derived custom properties.
pub fn apply_theme(theme: &ThemeSettings) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    let _ = element.set_attribute("data-theme", &theme.appearance);
    let _ = element.set_attribute("data-variant", &theme.variant);

    if let Some(html_element) = element.dyn_ref::<web_sys::HtmlElement>() {
        let style = html_element.style();
        for (name, value) in css_variables(theme) {
            let _ = style.set_property(&name, &value);
        }
    }
}

/// Caches the pieces the login page wants before the next fetch. Each key is
/// written independently, so a partial failure leaves the rest intact.
pub fn cache_theme(theme: &ThemeSettings) {
    storage::cache_theme_entry(storage::THEME_PRIMARY_KEY, &theme.primary);
    storage::cache_theme_entry(
        storage::THEME_FONT_SIZE_KEY,
        &theme.font_size.to_string(),
    );
    storage::cache_theme_entry(storage::THEME_FONT_FAMILY_KEY, &theme.font_family);
}

/// Fetch the theme and paint the document. Falls back to the defaults when
/// the server is unreachable so the login page still renders styled.
pub async fn bootstrap_theme() {
    let client = ShopKeepClient::shared();
    let theme = client.theme().await.unwrap_or_default();
    apply_theme(&theme);
    cache_theme(&theme);
}
