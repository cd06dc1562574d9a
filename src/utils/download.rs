use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Trigger a browser download of `contents` under `filename` via a temporary
/// object URL on an off-screen anchor element.
pub fn download_json(filename: &str, contents: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window available")?;
    let document = window.document().ok_or("No document available")?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| "Failed to build blob".to_string())?;
    let href =
        Url::create_object_url_with_blob(&blob).map_err(|_| "Failed to create URL".to_string())?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "Failed to create anchor".to_string())?
        .unchecked_into();
    anchor.set_href(&href);
    anchor.set_download(filename);
    anchor.click();

    // The URL is only needed for the synchronous click above
    Url::revoke_object_url(&href).ok();
    Ok(())
}
