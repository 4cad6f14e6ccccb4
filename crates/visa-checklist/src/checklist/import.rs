//! Loaders for checklist and document lists exported by the document store.
//!
//! JSON exports are arrays of records. CSV exports carry a header row using the
//! record field names; blank optional cells read as absent.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use super::domain::{ChecklistRequirement, DocumentStatus, UploadedDocument};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported export format for {}: expected .json or .csv", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    fn from_path(path: &Path) -> Result<Self, ImportError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            _ => Err(ImportError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

pub fn requirements_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<ChecklistRequirement>, ImportError> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path)?;
    let file = File::open(path)?;
    match format {
        ExportFormat::Json => requirements_from_json_reader(file),
        ExportFormat::Csv => requirements_from_csv_reader(file),
    }
}

pub fn documents_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<UploadedDocument>, ImportError> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path)?;
    let file = File::open(path)?;
    match format {
        ExportFormat::Json => documents_from_json_reader(file),
        ExportFormat::Csv => documents_from_csv_reader(file),
    }
}

pub fn requirements_from_json_reader<R: Read>(
    reader: R,
) -> Result<Vec<ChecklistRequirement>, ImportError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn documents_from_json_reader<R: Read>(
    reader: R,
) -> Result<Vec<UploadedDocument>, ImportError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn requirements_from_csv_reader<R: Read>(
    reader: R,
) -> Result<Vec<ChecklistRequirement>, ImportError> {
    let rows: Vec<RequirementRow> = parse_rows(reader)?;
    Ok(rows.into_iter().map(RequirementRow::into_requirement).collect())
}

pub fn documents_from_csv_reader<R: Read>(
    reader: R,
) -> Result<Vec<UploadedDocument>, ImportError> {
    let rows: Vec<DocumentRow> = parse_rows(reader)?;
    Ok(rows.into_iter().map(DocumentRow::into_document).collect())
}

fn parse_rows<R: Read, T: DeserializeOwned>(reader: R) -> Result<Vec<T>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<T>() {
        rows.push(record?);
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct RequirementRow {
    document_type: String,
    document_category: String,
    #[serde(default, deserialize_with = "flexible_bool")]
    required: bool,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    company_name: Option<String>,
}

impl RequirementRow {
    fn into_requirement(self) -> ChecklistRequirement {
        ChecklistRequirement {
            document_type: self.document_type,
            document_category: self.document_category,
            required: self.required,
            company_name: self.company_name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DocumentRow {
    #[serde(default)]
    file_name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    document_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    document_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    document_category: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    company_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
}

impl DocumentRow {
    fn into_document(self) -> UploadedDocument {
        UploadedDocument {
            file_name: self.file_name,
            document_name: self.document_name,
            document_type: self.document_type,
            document_category: self.document_category,
            company_name: self.company_name,
            status: self
                .status
                .map(DocumentStatus::from)
                .unwrap_or_default(),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected a boolean for 'required', found '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            ExportFormat::from_path(Path::new("checklist.JSON")).expect("json"),
            ExportFormat::Json
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("exports/documents.csv")).expect("csv"),
            ExportFormat::Csv
        );
        match ExportFormat::from_path(Path::new("documents.xlsx")) {
            Err(ImportError::UnsupportedFormat { path }) => {
                assert_eq!(path, PathBuf::from("documents.xlsx"))
            }
            other => panic!("expected unsupported format, got {other:?}"),
        }
    }

    #[test]
    fn csv_requirements_accept_yes_no_flags() {
        let csv = "document_type,document_category,required,company_name\n\
Passport,Identity,yes,\n\
Degree Certificate,Education,No,\n";
        let requirements = requirements_from_csv_reader(csv.as_bytes()).expect("csv parses");
        assert!(requirements[0].required);
        assert!(!requirements[1].required);
        assert!(requirements[0].company_name.is_none());
    }

    #[test]
    fn csv_rejects_unparseable_required_flag() {
        let csv = "document_type,document_category,required\nPassport,Identity,maybe\n";
        match requirements_from_csv_reader(csv.as_bytes()) {
            Err(ImportError::Csv(err)) => assert!(err.to_string().contains("maybe")),
            other => panic!("expected csv error, got {other:?}"),
        }
    }

    #[test]
    fn csv_documents_default_missing_status_to_pending() {
        let csv = "file_name,document_name,status\npassport.pdf,Passport,\n";
        let documents = documents_from_csv_reader(csv.as_bytes()).expect("csv parses");
        assert_eq!(documents[0].status, DocumentStatus::Pending);
        assert_eq!(documents[0].document_name.as_deref(), Some("Passport"));
        assert!(documents[0].document_category.is_none());
    }
}
