#![forbid(unsafe_code)]
//! .NET `.resx` to JSON locale catalog toolkit.
//!
//! Parses `.resx` resource documents and exports them as flat per-locale JSON
//! files for client-side consumption, one `<locale>.json` per configured
//! locale. Missing or malformed source documents are handled best-effort per
//! locale and reported in a batch [`catalog::ExportReport`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use resxcat::catalog::{ExportOptions, export_catalog};
//!
//! // Export Resources/SharedResource.<locale>.resx to wwwroot/locales/<locale>.json
//! let (catalog, report) = export_catalog("Resources", "wwwroot/locales", &ExportOptions::new())?;
//! println!("exported {} of {} locales", report.converted, catalog.len());
//! # Ok::<(), resxcat::Error>(())
//! ```
//!
//! # Behavior
//!
//! - Entries without a `name` or without a `<value>` element are excluded.
//! - Duplicate names resolve last-write-wins in document order.
//! - A missing source document produces a warning outcome, no output file.
//! - An unparseable source document produces an empty `{}` output file.
//! - Output files are UTF-8 with 2-space indentation; non-ASCII characters
//!   are emitted literally.

pub mod catalog;
pub mod error;
pub mod formats;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    catalog::{
        ExportOptions, ExportReport, LocaleOutcome, LocaleStatus, build_catalog, export_catalog,
        source_file_name, write_catalog,
    },
    error::Error,
    formats::ResxFormat,
    types::{Catalog, LocaleResource, Translations},
};
