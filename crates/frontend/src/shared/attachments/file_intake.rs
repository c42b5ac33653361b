//! Converts browser file selections into [`RawFile`] metadata.
//!
//! Only name, size and MIME type are read; file contents are never loaded.

use contracts::domain::attachments::RawFile;
use wasm_bindgen::JsCast;

pub fn raw_file_from(file: &web_sys::File) -> RawFile {
    // Blob sizes are whole numbers reported as f64
    let size_bytes = file.size().max(0.0) as u64;
    RawFile::new(file.name(), size_bytes, file.type_())
}

/// Every file of the list, in selection order
pub fn raw_files_from_list(files: &web_sys::FileList) -> Vec<RawFile> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| raw_file_from(&file))
        .collect()
}

/// Files picked in an `<input type="file">` change event.
///
/// Clears the input afterwards so picking the same file again fires a new
/// change event.
pub fn raw_files_from_input(ev: &web_sys::Event) -> Vec<RawFile> {
    let input = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

    let Some(input) = input else {
        return Vec::new();
    };

    let files = input
        .files()
        .map(|list| raw_files_from_list(&list))
        .unwrap_or_default();
    input.set_value("");
    files
}

/// Files dropped onto a drop zone
pub fn raw_files_from_drop(ev: &web_sys::DragEvent) -> Vec<RawFile> {
    ev.data_transfer()
        .and_then(|dt| dt.files())
        .map(|list| raw_files_from_list(&list))
        .unwrap_or_default()
}
