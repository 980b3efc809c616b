//! # calbridge - n8n Workflow Generator for Calendar Sync
//!
//! **calbridge** produces an importable [n8n](https://n8n.io) workflow that mirrors
//! Google Calendar changes into Zoho Calendar. It never talks to either calendar
//! itself: the generated document is a static graph of typed nodes that n8n
//! executes once imported.
//!
//! ## Core Workflow
//!
//! 1.  **Configure**: Fill a [`SyncConfig`](config::SyncConfig) from a JSON file, flags, or code. Every field is optional.
//! 2.  **Generate**: Call [`generate`](workflow::generate) to build the fixed graph
//!     (webhook trigger, event lookup, three action guards, three Zoho operations).
//! 3.  **Export**: Save it with [`download`](export::download) or put it on the clipboard with [`copy_text`](export::copy_text).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use calbridge::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = SyncConfig::from_json(r#"{ "syncFrequency": "15min" }"#)?;
//!     let workflow = generate(Some(&config));
//!
//!     // Only a "created" notification reaches the Zoho create node.
//!     let targets = destinations_for_action(&workflow, "created");
//!     assert_eq!(targets.len(), 1);
//!
//!     let path = download(&workflow, None)?;
//!     println!("Saved to {}", path.display());
//!
//!     if !copy_text(&workflow.to_json_pretty()?) {
//!         eprintln!("Clipboard unavailable");
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod guide;
pub mod prelude;
pub mod visualizer;
pub mod workflow;
