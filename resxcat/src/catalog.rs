//! Batch export of `.resx` resource documents into per-locale JSON catalogs.
//!
//! The builder walks a configured, ordered list of locale codes, extracts
//! each locale's `SharedResource.<locale>.resx` document (base name
//! configurable), and writes one `<locale>.json` file per extracted locale.
//! Missing or malformed source documents never abort the batch; each locale
//! gets its own outcome in the [`ExportReport`].

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    formats::ResxFormat,
    traits::Parser,
    types::{Catalog, LocaleResource, Translations},
};

/// The locale set of the reference deployment.
pub const DEFAULT_LOCALES: [&str; 3] = ["en", "hi", "gu"];

/// Default base name of the resource documents (`SharedResource.<locale>.resx`).
pub const DEFAULT_BASE_NAME: &str = "SharedResource";

/// Options controlling catalog export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Ordered list of locale codes to process.
    pub locales: Vec<String>,
    /// Base name of the source documents.
    pub base_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            locales: DEFAULT_LOCALES.iter().map(|s| s.to_string()).collect(),
            base_name: DEFAULT_BASE_NAME.to_string(),
        }
    }
}

impl ExportOptions {
    /// Creates options with the default locale list and base name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the locale list.
    pub fn with_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locales = locales.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the source document base name.
    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = base_name.into();
        self
    }
}

/// Per-locale outcome classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocaleStatus {
    /// The source document was extracted; its JSON artifact will be written.
    Converted,
    /// The expected source document does not exist; no artifact is produced.
    MissingSource,
    /// The source document exists but could not be parsed; an empty JSON
    /// object is still written for this locale.
    ParseFailed,
}

/// Per-locale outcome details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleOutcome {
    pub locale: String,
    /// The source file name the builder looked for.
    pub source: String,
    pub status: LocaleStatus,
    /// Number of extracted entries (zero unless `Converted`).
    pub entries: usize,
    /// Diagnostic for `ParseFailed` outcomes.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub detail: Option<String>,
}

/// Export report with counters and per-locale outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReport {
    pub locales_requested: usize,
    pub converted: usize,
    pub missing_sources: usize,
    pub parse_failures: usize,
    pub total_entries: usize,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub outcomes: Vec<LocaleOutcome>,
}

/// Computes the expected source file name for a locale.
///
/// # Example
/// ```rust
/// use resxcat::catalog::source_file_name;
/// assert_eq!(source_file_name("SharedResource", "hi"), "SharedResource.hi.resx");
/// ```
pub fn source_file_name(base_name: &str, locale: &str) -> String {
    format!("{}.{}.resx", base_name, locale)
}

/// Builds an in-memory [`Catalog`] from the resource directory.
///
/// Walks the configured locales in order. A missing source document yields a
/// `MissingSource` outcome and no catalog entry; a document that fails to
/// parse yields a `ParseFailed` outcome and an empty catalog entry. This
/// function performs no writes and never fails as a whole; per-locale
/// problems are confined to the report.
pub fn build_catalog<P: AsRef<Path>>(
    resources_dir: P,
    options: &ExportOptions,
) -> (Catalog, ExportReport) {
    let resources_dir = resources_dir.as_ref();
    let mut catalog = Catalog::new();
    let mut report = ExportReport {
        locales_requested: options.locales.len(),
        ..ExportReport::default()
    };

    for locale in &options.locales {
        let source = source_file_name(&options.base_name, locale);
        let path = resources_dir.join(&source);

        if !path.is_file() {
            report.missing_sources += 1;
            report.outcomes.push(LocaleOutcome {
                locale: locale.clone(),
                source,
                status: LocaleStatus::MissingSource,
                entries: 0,
                detail: None,
            });
            continue;
        }

        match ResxFormat::read_from(&path) {
            Ok(format) => {
                let resource = format.into_locale_resource(locale.clone());
                report.converted += 1;
                report.total_entries += resource.len();
                report.outcomes.push(LocaleOutcome {
                    locale: locale.clone(),
                    source,
                    status: LocaleStatus::Converted,
                    entries: resource.len(),
                    detail: None,
                });
                catalog.add_resource(resource);
            }
            Err(e) => {
                report.parse_failures += 1;
                report.outcomes.push(LocaleOutcome {
                    locale: locale.clone(),
                    source,
                    status: LocaleStatus::ParseFailed,
                    entries: 0,
                    detail: Some(e.to_string()),
                });
                catalog.add_resource(LocaleResource::new(locale.clone(), Translations::new()));
            }
        }
    }

    (catalog, report)
}

/// Writes one `<locale>.json` file per catalog entry into `output_dir`.
///
/// Creates the output directory first (idempotent). Files are whole-file
/// overwrites: UTF-8, 2-space indentation, non-ASCII characters emitted
/// literally. Unlike source-side problems, a write failure here is fatal.
pub fn write_catalog<P: AsRef<Path>>(catalog: &Catalog, output_dir: P) -> Result<(), Error> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir).map_err(Error::Io)?;

    for resource in catalog.iter() {
        let path = output_dir.join(format!("{}.json", resource.locale));
        let file = File::create(&path).map_err(Error::Io)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &resource.translations).map_err(Error::Json)?;
        writer.flush().map_err(Error::Io)?;
    }

    Ok(())
}

/// Builds the catalog and writes its JSON artifacts in one pass.
///
/// # Example
///
/// ```rust,no_run
/// use resxcat::catalog::{ExportOptions, export_catalog};
///
/// let options = ExportOptions::new();
/// let (catalog, report) = export_catalog("Resources", "wwwroot/locales", &options)?;
/// println!("exported {} of {} locales", report.converted, catalog.len());
/// # Ok::<(), resxcat::Error>(())
/// ```
pub fn export_catalog<P: AsRef<Path>>(
    resources_dir: P,
    output_dir: P,
    options: &ExportOptions,
) -> Result<(Catalog, ExportReport), Error> {
    let (catalog, report) = build_catalog(resources_dir, options);
    write_catalog(&catalog, output_dir)?;
    Ok((catalog, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_source_file_name() {
        assert_eq!(source_file_name("SharedResource", "en"), "SharedResource.en.resx");
        assert_eq!(source_file_name("Strings", "gu"), "Strings.gu.resx");
    }

    #[test]
    fn test_default_options() {
        let options = ExportOptions::new();
        assert_eq!(options.locales, vec!["en", "hi", "gu"]);
        assert_eq!(options.base_name, "SharedResource");
    }

    #[test]
    fn test_options_builder() {
        let options = ExportOptions::new()
            .with_locales(["en", "fr"])
            .with_base_name("Strings");
        assert_eq!(options.locales, vec!["en", "fr"]);
        assert_eq!(options.base_name, "Strings");
    }

    #[test]
    fn test_build_catalog_missing_sources() {
        let resources_dir = TempDir::new().unwrap();
        let options = ExportOptions::new();

        let (catalog, report) = build_catalog(resources_dir.path(), &options);
        assert!(catalog.is_empty());
        assert_eq!(report.locales_requested, 3);
        assert_eq!(report.missing_sources, 3);
        assert_eq!(report.converted, 0);
        assert_eq!(report.outcomes.len(), 3);
        assert!(
            report
                .outcomes
                .iter()
                .all(|o| o.status == LocaleStatus::MissingSource)
        );
    }

    #[test]
    fn test_build_catalog_reads_present_locales() {
        let resources_dir = TempDir::new().unwrap();
        std::fs::write(
            resources_dir.path().join("SharedResource.en.resx"),
            r#"<root><data name="Greeting"><value>Hello</value></data></root>"#,
        )
        .unwrap();

        let (catalog, report) = build_catalog(resources_dir.path(), &ExportOptions::new());
        assert_eq!(catalog.len(), 1);
        assert_eq!(report.converted, 1);
        assert_eq!(report.missing_sources, 2);
        assert_eq!(report.total_entries, 1);
        assert_eq!(
            catalog.get_by_locale("en").unwrap().get("Greeting"),
            Some("Hello")
        );
    }

    #[test]
    fn test_build_catalog_parse_failure_yields_empty_resource() {
        let resources_dir = TempDir::new().unwrap();
        std::fs::write(
            resources_dir.path().join("SharedResource.en.resx"),
            r#"<root><data name="Greeting"><value>Hel"#,
        )
        .unwrap();

        let options = ExportOptions::new().with_locales(["en"]);
        let (catalog, report) = build_catalog(resources_dir.path(), &options);
        assert_eq!(report.parse_failures, 1);
        assert_eq!(report.converted, 0);
        assert!(catalog.get_by_locale("en").unwrap().is_empty());

        let outcome = &report.outcomes[0];
        assert_eq!(outcome.status, LocaleStatus::ParseFailed);
        assert!(outcome.detail.is_some());
    }

    #[test]
    fn test_report_serializes_snake_case() {
        let report = ExportReport {
            locales_requested: 1,
            missing_sources: 1,
            outcomes: vec![LocaleOutcome {
                locale: "hi".to_string(),
                source: "SharedResource.hi.resx".to_string(),
                status: LocaleStatus::MissingSource,
                entries: 0,
                detail: None,
            }],
            ..ExportReport::default()
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"missing_source\""));
        assert!(!json.contains("detail"));
    }
}
