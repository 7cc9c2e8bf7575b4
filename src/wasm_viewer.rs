//! Viewer services backed by JavaScript objects.
//!
//! The page passes plain objects with these methods:
//!
//! - camera: `isNavigable()`, `position()`, `target()`,
//!   `setLookAt(position, target, animate)`; vectors are `{x, y, z}`
//! - highlighter: `currentSelection()`, `registerStyle(id, color)`,
//!   `applyStyle(id, selection)`, `clearStyle(id)`; selections are
//!   `{modelId: [index, ...]}` and colors are `#rrggbb`

use js_sys::{Array, Function, JSON, Reflect};
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::color_utils::css_hex;
use crate::model::{Selection, Vec3};
use crate::viewer::{CameraService, HighlightService};

/// Call `target[method](...args)`. Missing methods and thrown errors are logged.
fn call(target: &JsValue, method: &str, args: &Array) -> Option<JsValue> {
    let function = Reflect::get(target, &JsValue::from_str(method))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok());
    let Some(function) = function else {
        log::error!("Viewer service has no method {}", method);
        return None;
    };
    match function.apply(target, args) {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("{} failed: {:?}", method, e);
            None
        }
    }
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_json::to_string(value)
        .ok()
        .and_then(|json| JSON::parse(&json).ok())
        .unwrap_or(JsValue::NULL)
}

fn from_js<T: DeserializeOwned + Default>(value: Option<JsValue>) -> T {
    value
        .and_then(|value| JSON::stringify(&value).ok())
        .map(String::from)
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

pub struct JsCamera(pub JsValue);

impl CameraService for JsCamera {
    fn is_navigable(&self) -> bool {
        call(&self.0, "isNavigable", &Array::new()).is_some_and(|value| value.is_truthy())
    }

    fn position(&self) -> Vec3 {
        from_js(call(&self.0, "position", &Array::new()))
    }

    fn target(&self) -> Vec3 {
        from_js(call(&self.0, "target", &Array::new()))
    }

    fn set_look_at(&mut self, position: Vec3, target: Vec3, animate: bool) {
        let args = Array::of3(&to_js(&position), &to_js(&target), &JsValue::from_bool(animate));
        call(&self.0, "setLookAt", &args);
    }
}

pub struct JsHighlighter(pub JsValue);

impl HighlightService for JsHighlighter {
    fn current_selection(&self) -> Selection {
        from_js(call(&self.0, "currentSelection", &Array::new()))
    }

    fn register_style(&mut self, style_id: &str, color: [u8; 3]) {
        let args = Array::of2(&JsValue::from_str(style_id), &JsValue::from_str(&css_hex(color)));
        call(&self.0, "registerStyle", &args);
    }

    fn apply_style(&mut self, style_id: &str, selection: &Selection) {
        let args = Array::of2(&JsValue::from_str(style_id), &to_js(selection));
        call(&self.0, "applyStyle", &args);
    }

    fn clear_style(&mut self, style_id: &str) {
        call(&self.0, "clearStyle", &Array::of1(&JsValue::from_str(style_id)));
    }
}
