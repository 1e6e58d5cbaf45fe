//! API settings persisted in `localStorage`

use processos_common::{RequestContext, DEFAULT_BASE_URL};
use web_sys::Storage;

/// Key the login flow stores the bearer token under
pub const TOKEN_KEY: &str = "authToken";
pub const BASE_URL_KEY: &str = "apiBaseUrl";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

/// Context for the next call; read fresh each time so a new login applies
pub fn request_context() -> RequestContext {
    let base_url = read(BASE_URL_KEY)
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    RequestContext::new(base_url, read(TOKEN_KEY))
}

pub fn save(base_url: &str, token: &str) -> Result<(), String> {
    let ctx = RequestContext::new(base_url.trim(), Some(token.trim().to_string()));
    ctx.validate().map_err(|e| e.user_message())?;

    let storage = local_storage().ok_or_else(|| "localStorage indisponível".to_string())?;
    storage
        .set_item(BASE_URL_KEY, &ctx.base_url)
        .map_err(|e| format!("Falha ao salvar: {:?}", e))?;
    match &ctx.token {
        Some(token) => storage.set_item(TOKEN_KEY, token),
        None => storage.remove_item(TOKEN_KEY),
    }
    .map_err(|e| format!("Falha ao salvar: {:?}", e))
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn reset() {
        let storage = local_storage().expect("localStorage");
        storage.remove_item(TOKEN_KEY).expect("remove token");
        storage.remove_item(BASE_URL_KEY).expect("remove base url");
    }

    #[wasm_bindgen_test]
    fn wasm_request_context_falls_back_to_default_url() {
        reset();
        let storage = local_storage().expect("localStorage");
        storage.set_item(TOKEN_KEY, "abc123").expect("set token");

        let ctx = request_context();
        assert_eq!(ctx.base_url, DEFAULT_BASE_URL);
        assert_eq!(ctx.authorization().as_deref(), Some("Bearer abc123"));
    }

    #[wasm_bindgen_test]
    fn wasm_save_round_trips_and_clear_token_keeps_url() {
        reset();
        save("https://api.exemplo.com.br", "tok").expect("save");

        let ctx = request_context();
        assert_eq!(ctx.base_url, "https://api.exemplo.com.br");
        assert_eq!(ctx.token.as_deref(), Some("tok"));

        clear_token();
        let ctx = request_context();
        assert_eq!(ctx.base_url, "https://api.exemplo.com.br");
        assert!(ctx.token.is_none());
    }

    #[wasm_bindgen_test]
    fn wasm_save_rejects_non_http_url() {
        reset();
        assert!(save("ftp://arquivos.exemplo.com", "tok").is_err());
        assert_eq!(read(BASE_URL_KEY), None);
        assert_eq!(read(TOKEN_KEY), None);
    }
}
