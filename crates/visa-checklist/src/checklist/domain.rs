use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One required or optional document type on an application's checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistRequirement {
    pub document_type: String,
    pub document_category: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

impl ChecklistRequirement {
    pub fn new(
        document_type: impl Into<String>,
        document_category: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            document_type: document_type.into(),
            document_category: document_category.into(),
            required,
            company_name: None,
        }
    }

    pub fn with_company(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }
}

/// A document submitted against an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedDocument {
    #[serde(default)]
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default)]
    pub status: DocumentStatus,
}

impl UploadedDocument {
    pub fn new(file_name: impl Into<String>, status: DocumentStatus) -> Self {
        Self {
            file_name: file_name.into(),
            document_name: None,
            document_type: None,
            document_category: None,
            company_name: None,
            status,
        }
    }

    pub fn named(mut self, document_name: impl Into<String>) -> Self {
        self.document_name = Some(document_name.into());
        self
    }

    pub fn typed(mut self, document_type: impl Into<String>) -> Self {
        self.document_type = Some(document_type.into());
        self
    }

    pub fn in_category(mut self, document_category: impl Into<String>) -> Self {
        self.document_category = Some(document_category.into());
        self
    }

    pub fn with_company(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }

    /// Documents without a file name are excluded from matching.
    pub fn is_valid(&self) -> bool {
        !self.file_name.is_empty()
    }
}

/// Review lifecycle of an uploaded document.
///
/// Parsing is case-insensitive. Values outside the known vocabulary are kept in
/// `Unknown` so a stray status never fails a whole import; they never count as
/// reviewed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentStatus {
    #[default]
    Pending,
    Approved,
    Reviewed,
    RequestReview,
    Rejected,
    Unknown(String),
}

impl DocumentStatus {
    pub fn label(&self) -> &str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Approved => "approved",
            DocumentStatus::Reviewed => "reviewed",
            DocumentStatus::RequestReview => "request_review",
            DocumentStatus::Rejected => "rejected",
            DocumentStatus::Unknown(raw) => raw,
        }
    }

    /// Only reviewed or approved documents count toward completion.
    pub fn counts_as_reviewed(&self) -> bool {
        matches!(self, DocumentStatus::Reviewed | DocumentStatus::Approved)
    }
}

impl From<&str> for DocumentStatus {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "pending" => DocumentStatus::Pending,
            "approved" => DocumentStatus::Approved,
            "reviewed" => DocumentStatus::Reviewed,
            "request_review" => DocumentStatus::RequestReview,
            "rejected" => DocumentStatus::Rejected,
            _ => DocumentStatus::Unknown(value.to_string()),
        }
    }
}

impl From<String> for DocumentStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(value))
    }
}

impl From<DocumentStatus> for String {
    fn from(value: DocumentStatus) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
