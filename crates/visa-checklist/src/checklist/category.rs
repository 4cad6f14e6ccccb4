use std::fmt;

use serde::{Serialize, Serializer};

use super::normalizer::{collapse_whitespace, extract_company_name_from_label};

/// Marker carried by every company-scoped category label.
pub(crate) const COMPANY_DOCUMENTS: &str = "Company Documents";
pub(crate) const COMPANY_DOCUMENTS_LOWER: &str = "company documents";
/// Short code of the generic, employer-agnostic company category.
pub(crate) const GENERIC_COMPANY_CODE: &str = "Company";

const IDENTITY_LABEL: &str = "Identity Documents";
const EDUCATION_LABEL: &str = "Education Documents";
const OTHER_LABEL: &str = "Other Documents";
const SELF_EMPLOYMENT_LABEL: &str = "Self Employment/Freelance";

/// Stored short codes and the display label each one maps to.
const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("Identity", IDENTITY_LABEL),
    ("Education", EDUCATION_LABEL),
    ("Other", OTHER_LABEL),
    ("Self Employment/Freelance", SELF_EMPLOYMENT_LABEL),
    (GENERIC_COMPANY_CODE, COMPANY_DOCUMENTS),
];

/// Map a stored category code to its canonical display label.
///
/// Labels that already carry `"Company Documents"` are employer-specific and
/// are returned as-is, as is anything outside the known vocabulary.
pub fn normalize_category(raw: &str) -> String {
    if raw.contains(COMPANY_DOCUMENTS) {
        return raw.to_string();
    }

    CATEGORY_LABELS
        .iter()
        .find(|(code, _)| *code == raw)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Typed view over the flat category strings exchanged with the document store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentCategory {
    Identity,
    Education,
    Other,
    SelfEmployment,
    /// `employer` is the normalized employer key; `None` for the generic category.
    Company { employer: Option<String> },
    Unrecognized(String),
}

impl DocumentCategory {
    pub fn parse(raw: &str) -> Self {
        let label = collapse_whitespace(&normalize_category(raw.trim()));
        match label.as_str() {
            IDENTITY_LABEL => Self::Identity,
            EDUCATION_LABEL => Self::Education,
            OTHER_LABEL => Self::Other,
            SELF_EMPLOYMENT_LABEL => Self::SelfEmployment,
            _ => match extract_company_name_from_label(Some(&label)) {
                Some(employer) => Self::Company {
                    employer: Some(employer).filter(|name| !name.is_empty()),
                },
                None => Self::Unrecognized(raw.to_string()),
            },
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Identity => IDENTITY_LABEL.to_string(),
            Self::Education => EDUCATION_LABEL.to_string(),
            Self::Other => OTHER_LABEL.to_string(),
            Self::SelfEmployment => SELF_EMPLOYMENT_LABEL.to_string(),
            Self::Company { employer: None } => COMPANY_DOCUMENTS.to_string(),
            Self::Company {
                employer: Some(employer),
            } => format!("{employer} {COMPANY_DOCUMENTS}"),
            Self::Unrecognized(raw) => raw.clone(),
        }
    }

    pub fn is_company_scoped(&self) -> bool {
        matches!(self, Self::Company { .. })
    }

    pub fn employer(&self) -> Option<&str> {
        match self {
            Self::Company { employer } => employer.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for DocumentCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}
