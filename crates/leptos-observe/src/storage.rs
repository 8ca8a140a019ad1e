//! Web storage access.

use crate::js_err;

pub fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or("no window")?
        .local_storage()
        .map_err(js_err)?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

pub fn session_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or("no window")?
        .session_storage()
        .map_err(js_err)?
        .ok_or_else(|| "sessionStorage unavailable".to_string())
}

pub fn read_key(storage: &web_sys::Storage, key: &str) -> Result<Option<String>, String> {
    storage.get_item(key).map_err(js_err)
}

pub fn write_key(storage: &web_sys::Storage, key: &str, value: &str) -> Result<(), String> {
    storage.set_item(key, value).map_err(js_err)
}
