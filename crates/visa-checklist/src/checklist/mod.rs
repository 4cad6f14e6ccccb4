//! Checklist-to-document reconciliation.
//!
//! A checklist is a per-application list of requirements, optionally scoped to
//! one of several tracked employers. Uploaded documents are matched against
//! each requirement by declared name, machine type or file name, gated by
//! category and employer compatibility. [`are_all_mandatory_documents_reviewed`]
//! is the aggregate answer used to unlock the quality check;
//! [`ChecklistReport`] gives the per-requirement breakdown.

pub mod category;
mod completion;
pub mod domain;
pub mod import;
mod matching;
mod normalizer;
pub mod report;

#[cfg(test)]
mod tests;

pub use category::{normalize_category, DocumentCategory};
pub use completion::are_all_mandatory_documents_reviewed;
pub use domain::{ChecklistRequirement, DocumentStatus, UploadedDocument};
pub use import::ImportError;
pub use matching::MatchStrategy;
pub use normalizer::{extract_company_name_from_label, normalize_company_name};
pub use report::{ChecklistReport, RequirementEntry, RequirementState};
