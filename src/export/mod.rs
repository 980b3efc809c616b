pub mod clipboard;
pub mod download;

pub use clipboard::{ClipboardBackend, Osc52Clipboard, SystemClipboard, copy_text, copy_text_with};
pub use download::{DEFAULT_WORKFLOW_FILENAME, download, write_text_file};
