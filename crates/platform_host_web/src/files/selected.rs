use platform_host::{FileReadFuture, SelectedFile};

#[cfg(target_arch = "wasm32")]
use futures::channel::oneshot;
#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[derive(Debug, Clone)]
/// A `File` taken from an `<input type="file">` element.
pub struct WebSelectedFile {
    file: web_sys::File,
}

impl WebSelectedFile {
    /// Wraps a browser file handle.
    pub fn new(file: web_sys::File) -> Self {
        Self { file }
    }

    /// Returns the first file selected in `input`, if any.
    pub fn first_from_input(input: &web_sys::HtmlInputElement) -> Option<Self> {
        input.files().and_then(|files| files.get(0)).map(Self::new)
    }
}

impl SelectedFile for WebSelectedFile {
    fn name(&self) -> String {
        self.file.name()
    }

    fn read_data_url(&self) -> FileReadFuture<'_, Result<String, String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                read_file_as_data_url(&self.file).await
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                Err("file reading requires a browser".to_string())
            }
        })
    }

    fn read_text(&self) -> FileReadFuture<'_, Result<String, String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let value = wasm_bindgen_futures::JsFuture::from(self.file.text())
                    .await
                    .map_err(|err| format!("failed to read file text: {err:?}"))?;
                value
                    .as_string()
                    .ok_or_else(|| "file text was not a string".to_string())
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                Err("file reading requires a browser".to_string())
            }
        })
    }
}

#[cfg(target_arch = "wasm32")]
async fn read_file_as_data_url(file: &web_sys::File) -> Result<String, String> {
    let reader = web_sys::FileReader::new().map_err(|err| format!("{err:?}"))?;
    let (tx, rx) = oneshot::channel::<Result<String, String>>();
    let sender = Rc::new(RefCell::new(Some(tx)));

    let reader_for_load = reader.clone();
    let load_sender = sender.clone();
    let on_load = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
        let result = reader_for_load
            .result()
            .map_err(|err| format!("failed to read image file: {err:?}"))
            .and_then(|value| {
                value
                    .as_string()
                    .ok_or_else(|| "file reader returned non-string result".to_string())
            });
        if let Some(tx) = load_sender.borrow_mut().take() {
            let _ = tx.send(result);
        }
    }));
    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));

    let error_sender = sender.clone();
    let on_error = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
        if let Some(tx) = error_sender.borrow_mut().take() {
            let _ = tx.send(Err("failed to load image file".to_string()));
        }
    }));
    reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    reader
        .read_as_data_url(file)
        .map_err(|err| format!("failed to start file read: {err:?}"))?;

    let result = rx
        .await
        .map_err(|_| "image file read was interrupted".to_string())?;
    reader.set_onload(None);
    reader.set_onerror(None);
    drop(on_load);
    drop(on_error);
    result
}
