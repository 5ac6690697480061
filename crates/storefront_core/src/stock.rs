//! Admin stock operations: upload, delete, export, import and clear.

use std::{cell::Cell, rc::Rc};

use leptos::logging;
use platform_host::{ConfirmPrompt, DownloadService, SelectedFile};

use crate::{
    catalog::CatalogRepository,
    error::{ExportError, ImportError, StoreError, UploadError},
    model::{Product, ProductDraft, ProductId},
};

/// Question shown before the catalog is cleared.
pub const CLEAR_STOCK_PROMPT: &str = "Clear all stock? This cannot be undone.";

#[derive(Clone, Copy)]
/// Raw upload form fields as typed by the admin.
pub struct UploadForm<'a> {
    /// Selected image file, if any.
    pub image: Option<&'a dyn SelectedFile>,
    /// Color input.
    pub color: &'a str,
    /// Price input.
    pub price: &'a str,
    /// Notes input.
    pub notes: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
/// Upload fields that passed validation; the image is still unread.
pub struct ValidatedUpload {
    /// Trimmed color.
    pub color: String,
    /// Parsed price.
    pub price: f64,
    /// Trimmed notes, possibly empty.
    pub notes: String,
}

/// Checks the form in the order the admin sees errors: image, color, then price.
///
/// # Errors
///
/// Returns the first failing [`UploadError`] validation variant.
pub fn validate_upload(form: &UploadForm<'_>) -> Result<ValidatedUpload, UploadError> {
    if form.image.is_none() {
        return Err(UploadError::MissingImage);
    }
    let color = form.color.trim();
    if color.is_empty() {
        return Err(UploadError::MissingColor);
    }
    let price = parse_price(form.price).ok_or(UploadError::InvalidPrice)?;
    Ok(ValidatedUpload {
        color: color.to_string(),
        price,
        notes: form.notes.trim().to_string(),
    })
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
}

#[derive(Debug, Clone, Default)]
/// Single-flight latch for the upload path.
pub struct UploadGate {
    busy: Rc<Cell<bool>>,
}

impl UploadGate {
    /// Whether an upload currently holds the gate.
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    fn try_enter(&self) -> Option<UploadPermit> {
        if self.busy.replace(true) {
            return None;
        }
        Some(UploadPermit {
            busy: self.busy.clone(),
        })
    }
}

struct UploadPermit {
    busy: Rc<Cell<bool>>,
}

impl Drop for UploadPermit {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

#[derive(Clone)]
/// Stock operations over the catalog, shared by the admin view.
pub struct StockManager {
    catalog: CatalogRepository,
    gate: UploadGate,
    export_file_name: String,
    export_mime_type: String,
}

impl StockManager {
    /// Creates the manager. Exports are offered as `export_file_name` with `export_mime_type`.
    pub fn new(
        catalog: CatalogRepository,
        export_file_name: impl Into<String>,
        export_mime_type: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            gate: UploadGate::default(),
            export_file_name: export_file_name.into(),
            export_mime_type: export_mime_type.into(),
        }
    }

    /// The catalog this manager edits.
    pub fn catalog(&self) -> &CatalogRepository {
        &self.catalog
    }

    /// The upload latch, for disabling the submit control while busy.
    pub fn upload_gate(&self) -> &UploadGate {
        &self.gate
    }

    /// Validates `form`, embeds the image as a data URL and appends the new product.
    ///
    /// While this future is pending further calls fail with [`UploadError::Busy`].
    ///
    /// # Errors
    ///
    /// Returns a validation [`UploadError`], [`UploadError::ImageRead`], or
    /// [`UploadError::Store`]. The catalog is unchanged in every error case.
    pub async fn upload(&self, form: UploadForm<'_>) -> Result<Product, UploadError> {
        let _permit = self.gate.try_enter().ok_or(UploadError::Busy)?;
        let fields = validate_upload(&form)?;
        let image = form.image.ok_or(UploadError::MissingImage)?;
        let data_url = image.read_data_url().await.map_err(|err| {
            logging::warn!("image read failed for `{}`: {err}", image.name());
            UploadError::ImageRead(err)
        })?;
        let product = self.catalog.append(ProductDraft {
            color: fields.color,
            price: fields.price,
            notes: Some(fields.notes),
            image: Some(data_url),
            sample: None,
        })?;
        Ok(product)
    }

    /// Removes one product.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the catalog cannot be written.
    pub fn delete(&self, id: &ProductId) -> Result<bool, StoreError> {
        self.catalog.delete_by_id(id)
    }

    /// Pretty-printed JSON of the stored catalog records, including any the shop cannot show.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Serialize`] if the catalog cannot be encoded.
    pub fn export_json(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(&self.catalog.records())
            .map_err(|err| ExportError::Serialize(err.to_string()))
    }

    /// Offers the catalog as a download.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] when encoding or the host download fails.
    pub fn export(&self, downloads: &dyn DownloadService) -> Result<(), ExportError> {
        let json = self.export_json()?;
        downloads
            .download_text(&self.export_file_name, &self.export_mime_type, &json)
            .map_err(|err| {
                logging::warn!("catalog export failed: {err}");
                ExportError::Download(err)
            })
    }

    /// Replaces the catalog with the list of records in `file`, stored verbatim. Returns the
    /// record count.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError`] when the file cannot be read, is not JSON, or is not a list.
    /// The catalog is unchanged in every error case.
    pub async fn import(&self, file: &dyn SelectedFile) -> Result<usize, ImportError> {
        let text = file.read_text().await.map_err(ImportError::Read)?;
        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|err| ImportError::Parse(err.to_string()))?;
        self.catalog.replace_all_from_value(value).map_err(|err| {
            logging::warn!("import of `{}` rejected: {err:?}", file.name());
            err
        })
    }

    /// Empties the catalog if `prompt` confirms. Returns whether it was cleared.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the empty catalog cannot be written.
    pub fn clear_with_confirmation(&self, prompt: &dyn ConfirmPrompt) -> Result<bool, StoreError> {
        if !prompt.confirm(CLEAR_STOCK_PROMPT) {
            return Ok(false);
        }
        self.catalog.clear()?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::task::Poll;

    use futures::{executor::block_on, future::poll_fn, FutureExt};
    use platform_host::{
        FileReadFuture, MemoryDownloadService, MemoryFile, ScriptedConfirmPrompt,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        cart::CartRepository, catalog::tests::catalog, model::CartLine, persistence::JsonStore,
    };

    fn manager() -> StockManager {
        let (_, catalog) = catalog();
        StockManager::new(catalog, "stock.json", "application/json")
    }

    fn image() -> MemoryFile {
        MemoryFile::new("saree.png", "image/png", "iVBOR")
    }

    fn form<'a>(image: Option<&'a dyn SelectedFile>, color: &'a str, price: &'a str) -> UploadForm<'a> {
        UploadForm {
            image,
            color,
            price,
            notes: "  Tussar  ",
        }
    }

    #[test]
    fn validation_reports_first_failure_in_form_order() {
        let file = image();
        assert_eq!(
            validate_upload(&form(None, "", "-1")),
            Err(UploadError::MissingImage)
        );
        assert_eq!(
            validate_upload(&form(Some(&file), "   ", "-1")),
            Err(UploadError::MissingColor)
        );
        for bad in ["", "abc", "-1", "NaN", "inf"] {
            assert_eq!(
                validate_upload(&form(Some(&file), "Teal", bad)),
                Err(UploadError::InvalidPrice),
                "{bad:?}"
            );
        }
        assert_eq!(
            validate_upload(&form(Some(&file), " Teal ", " 0 ")),
            Ok(ValidatedUpload {
                color: "Teal".to_string(),
                price: 0.0,
                notes: "Tussar".to_string(),
            })
        );
    }

    #[test]
    fn upload_appends_record_with_embedded_image() {
        let stock = manager();
        let file = image();
        let product = block_on(stock.upload(form(Some(&file), "Teal", "1250"))).expect("upload");

        assert_eq!(product.image.as_deref(), Some("data:image/png,iVBOR"));
        assert_eq!(product.notes.as_deref(), Some("Tussar"));
        assert_eq!(product.sample, None);
        assert_eq!(stock.catalog().list_all(), vec![product]);
        assert!(!stock.upload_gate().is_busy());
    }

    #[test]
    fn failed_upload_leaves_catalog_untouched() {
        let stock = manager();
        let broken = MemoryFile::unreadable("saree.png", "disk error");
        assert_eq!(
            block_on(stock.upload(form(Some(&broken), "Teal", "10"))),
            Err(UploadError::ImageRead("disk error".to_string()))
        );
        assert_eq!(
            block_on(stock.upload(form(None, "Teal", "10"))),
            Err(UploadError::MissingImage)
        );
        assert!(stock.catalog().list_all().is_empty());
        assert!(!stock.upload_gate().is_busy());
    }

    struct PendingOnceFile;

    impl SelectedFile for PendingOnceFile {
        fn name(&self) -> String {
            "slow.png".to_string()
        }

        fn read_data_url(&self) -> FileReadFuture<'_, Result<String, String>> {
            let mut polled = false;
            Box::pin(poll_fn(move |cx| {
                if polled {
                    Poll::Ready(Ok("data:image/png,slow".to_string()))
                } else {
                    polled = true;
                    cx.waker().wake_by_ref();
                    Poll::Pending
                }
            }))
        }

        fn read_text(&self) -> FileReadFuture<'_, Result<String, String>> {
            Box::pin(async { Err("not text".to_string()) })
        }
    }

    #[test]
    fn concurrent_upload_is_rejected_while_first_is_pending() {
        let stock = manager();
        let slow = PendingOnceFile;
        let quick = image();

        let mut first = Box::pin(stock.upload(form(Some(&slow), "Teal", "10")));
        assert!(first.as_mut().now_or_never().is_none());
        assert!(stock.upload_gate().is_busy());

        assert_eq!(
            block_on(stock.upload(form(Some(&quick), "Gold", "20"))),
            Err(UploadError::Busy)
        );

        let product = block_on(first).expect("first upload completes");
        assert_eq!(product.color, "Teal");
        assert_eq!(stock.catalog().list_all().len(), 1);
        assert!(!stock.upload_gate().is_busy());
    }

    #[test]
    fn export_offers_pretty_json_under_configured_name() {
        let stock = manager();
        stock.catalog().seed_if_empty().expect("seed");
        let downloads = MemoryDownloadService::default();
        stock.export(&downloads).expect("export");

        let files = downloads.downloads();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name, "stock.json");
        assert_eq!(files[0].mime_type, "application/json");
        assert!(files[0].contents.contains("\n  {"));
        let decoded: Vec<Product> = serde_json::from_str(&files[0].contents).expect("decode");
        assert_eq!(decoded, stock.catalog().list_all());
    }

    #[test]
    fn import_of_non_list_keeps_existing_catalog() {
        let stock = manager();
        stock.catalog().seed_if_empty().expect("seed");
        let before = stock.catalog().list_all();

        for contents in [r#"{"id":"x"}"#, "not json", "42"] {
            let file = MemoryFile::new("bad.json", "application/json", contents);
            let err = block_on(stock.import(&file)).expect_err("rejected");
            assert_eq!(err.to_string(), "Import failed");
        }
        let unreadable = MemoryFile::unreadable("gone.json", "missing");
        assert_eq!(
            block_on(stock.import(&unreadable)),
            Err(ImportError::Read("missing".to_string()))
        );
        assert_eq!(stock.catalog().list_all(), before);
    }

    #[test]
    fn import_of_exported_list_replaces_catalog_exactly() {
        let source = manager();
        source.catalog().seed_if_empty().expect("seed");
        let exported = source.export_json().expect("export");

        let target = manager();
        target
            .catalog()
            .append(ProductDraft {
                color: "Old".to_string(),
                ..ProductDraft::default()
            })
            .expect("append");
        let file = MemoryFile::new("stock.json", "application/json", exported);
        assert_eq!(block_on(target.import(&file)), Ok(4));
        assert_eq!(target.catalog().list_all(), source.catalog().list_all());
    }

    #[test]
    fn clear_requires_confirmation() {
        let stock = manager();
        stock.catalog().seed_if_empty().expect("seed");

        let decline = ScriptedConfirmPrompt::answering(false);
        assert_eq!(stock.clear_with_confirmation(&decline), Ok(false));
        assert_eq!(stock.catalog().list_all().len(), 4);
        assert_eq!(decline.asked(), vec![CLEAR_STOCK_PROMPT.to_string()]);

        let accept = ScriptedConfirmPrompt::answering(true);
        assert_eq!(stock.clear_with_confirmation(&accept), Ok(true));
        assert!(stock.catalog().list_all().is_empty());
    }

    #[test]
    fn deleting_a_carted_product_leaves_the_cart_line() {
        let stock = manager();
        stock.catalog().seed_if_empty().expect("seed");
        let cart = CartRepository::new(
            JsonStore::new(std::rc::Rc::new(platform_host::MemoryKeyValueStore::default())),
            "cart",
        );
        let target = stock.catalog().list_all().remove(0);
        cart.add_or_increment(&target).expect("add");

        assert_eq!(stock.delete(&target.id), Ok(true));
        assert!(stock.catalog().list_all().iter().all(|p| p.id != target.id));
        assert_eq!(cart.list_all(), vec![CartLine::snapshot(&target)]);
    }
}
