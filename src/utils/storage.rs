use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Leer un valor crudo de localStorage
///
/// Acepta tanto texto plano como un string JSON (`"abc"`).
pub fn load_raw(key: &str) -> Option<String> {
    let storage = get_local_storage()?;
    let value = storage.get_item(key).ok()??;
    let value = match serde_json::from_str::<String>(&value) {
        Ok(unquoted) => unquoted,
        Err(_) => value,
    };
    let value = value.trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage.remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())?;
    Ok(())
}
