//! Catalog Commands
//!
//! Frontend bindings for the read-only catalog commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{invoke, js_error};
use crate::models::{Catalog, Pokemon};

#[derive(Serialize)]
struct NumberArgs {
    number: u32,
}

/// Full snapshot, loaded once at startup
pub async fn get_catalog() -> Result<Catalog, String> {
    let result = invoke("get_catalog", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Record by display number; `Ok(None)` when absent
pub async fn get_pokemon(number: u32) -> Result<Option<Pokemon>, String> {
    let js_args = serde_wasm_bindgen::to_value(&NumberArgs { number }).map_err(|e| e.to_string())?;
    let result = invoke("get_pokemon", js_args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
