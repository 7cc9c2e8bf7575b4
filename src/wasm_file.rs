//! Browser file helpers.
//!
//! Snapshot export is a download of a generated JSON blob. Import opens a
//! hidden file input and hands the text of the chosen file to a one-shot
//! callback once the `FileReader` finishes.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, Document, Event, FileReader, HtmlAnchorElement, HtmlInputElement, Url};

type TextCallback = Box<dyn FnOnce(String, String)>;

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Offer `contents` to the user as a JSON file download.
pub fn download_text(file_name: &str, contents: &str) -> Result<(), JsValue> {
    let document = document()?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url)?;
    log::info!("Offered {} ({} bytes) for download", file_name, contents.len());
    Ok(())
}

/// Open a picker for a single JSON file.
///
/// `on_load` receives the file name and its text. It is not called when the
/// user picks nothing or the file can't be read.
pub fn open_json_picker<F>(on_load: F) -> Result<(), JsValue>
where
    F: FnOnce(String, String) + 'static,
{
    let document = document()?;
    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_type("file");
    input.set_accept(".json,application/json");

    let callback: Rc<RefCell<Option<TextCallback>>> =
        Rc::new(RefCell::new(Some(Box::new(on_load))));

    let onchange = Closure::wrap(Box::new(move |event: Event| {
        let Some(input) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            log::warn!("No file selected");
            return;
        };

        let reader = match FileReader::new() {
            Ok(reader) => reader,
            Err(e) => {
                log::error!("Failed to create FileReader: {:?}", e);
                return;
            }
        };

        let name = file.name();
        log::info!("Reading file: {}", name);
        let callback = callback.clone();
        let onload = Closure::wrap(Box::new(move |event: Event| {
            let text = event
                .target()
                .and_then(|target| target.dyn_into::<FileReader>().ok())
                .and_then(|reader| reader.result().ok())
                .and_then(|result| result.as_string());
            let Some(text) = text else {
                log::error!("Failed to read {} as text", name);
                return;
            };
            if let Some(on_load) = callback.borrow_mut().take() {
                on_load(name.clone(), text);
            }
        }) as Box<dyn FnMut(Event)>);

        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        if let Err(e) = reader.read_as_text(&file) {
            log::error!("Failed to read file: {:?}", e);
        }
    }) as Box<dyn FnMut(Event)>);

    input.set_onchange(Some(onchange.as_ref().unchecked_ref()));
    onchange.forget();

    input.click();
    Ok(())
}
