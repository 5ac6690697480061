use platform_host::DownloadService;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, Default)]
/// Offers downloads through a Blob object URL and a transient `<a download>` click.
pub struct WebDownloadService;

impl DownloadService for WebDownloadService {
    fn download_text(
        &self,
        file_name: &str,
        mime_type: &str,
        contents: &str,
    ) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
            let options = web_sys::BlobPropertyBag::new();
            options.set_type(mime_type);
            let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
                .map_err(|err| format!("failed to create blob: {err:?}"))?;
            let url = web_sys::Url::create_object_url_with_blob(&blob)
                .map_err(|err| format!("failed to create object url: {err:?}"))?;

            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or_else(|| "document unavailable".to_string())?;
            let anchor = document
                .create_element("a")
                .map_err(|err| format!("failed to create anchor: {err:?}"))?
                .dyn_into::<web_sys::HtmlAnchorElement>()
                .map_err(|_| "failed to cast anchor".to_string())?;
            anchor.set_href(&url);
            anchor.set_download(file_name);
            anchor.click();

            web_sys::Url::revoke_object_url(&url)
                .map_err(|err| format!("failed to revoke object url: {err:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (file_name, mime_type, contents);
            Err("downloads require a browser".to_string())
        }
    }
}
