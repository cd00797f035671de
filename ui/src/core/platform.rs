//! Platform glue: the durable key-value slot behind the history log and the
//! export delivery path (browser download vs. data-dir file write).

use crate::core::history::HistoryStore;

/// Durable slot keyed into localStorage on the web and into a JSON file in
/// the app data directory on desktop.
#[derive(Debug, Clone)]
pub struct PlatformStore {
    key: String,
}

impl PlatformStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(target_arch = "wasm32")]
impl HistoryStore for PlatformStore {
    fn load_raw(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(&self.key).ok()?
    }

    fn save_raw(&mut self, payload: &str) {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if let Some(storage) = storage {
            if storage.set_item(&self.key, payload).is_err() {
                #[cfg(debug_assertions)]
                println!("[history] localStorage write refused for {}", self.key);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HistoryStore for PlatformStore {
    fn load_raw(&self) -> Option<String> {
        std::fs::read_to_string(data_file(&self.key).ok()?).ok()
    }

    fn save_raw(&mut self, payload: &str) {
        let Ok(path) = data_file(&self.key) else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if std::fs::write(&path, payload).is_err() {
            #[cfg(debug_assertions)]
            println!("[history] write failed for {}", path.display());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn data_file(key: &str) -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("com", "Datacon", "Datacon")
        .ok_or("Unable to determine data directory")?;
    Ok(dirs.data_dir().join(format!("{key}.json")))
}

/// Delivers export bytes. Web: object-URL download, returns `None`. Desktop:
/// writes into the app data `exports` directory and returns the path.
pub async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("com", "Datacon", "Datacon")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}
