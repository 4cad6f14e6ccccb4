use serde::Serialize;
use tracing::debug;

use super::category::{normalize_category, DocumentCategory};
use super::completion::are_all_mandatory_documents_reviewed;
use super::domain::{ChecklistRequirement, DocumentStatus, UploadedDocument};
use super::matching::{match_document, MatchStrategy};

/// Per-requirement reconciliation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RequirementState {
    Reviewed,
    AwaitingReview { status: DocumentStatus },
    Missing,
}

impl RequirementState {
    pub fn label(&self) -> &'static str {
        match self {
            RequirementState::Reviewed => "Reviewed",
            RequirementState::AwaitingReview { .. } => "Awaiting review",
            RequirementState::Missing => "Missing",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RequirementEntry {
    pub document_type: String,
    pub category: DocumentCategory,
    /// Category as stored on the checklist, after code-to-label mapping.
    pub category_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub required: bool,
    #[serde(flatten)]
    pub state: RequirementState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<MatchStrategy>,
}

impl RequirementEntry {
    pub fn is_reviewed(&self) -> bool {
        self.state == RequirementState::Reviewed
    }
}

/// Checklist view listing each requirement alongside its matching document.
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistReport {
    pub entries: Vec<RequirementEntry>,
    pub mandatory_total: usize,
    pub mandatory_reviewed: usize,
    pub ready_for_quality_check: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unrecognized_categories: Vec<String>,
}

impl ChecklistReport {
    pub fn build(requirements: &[ChecklistRequirement], documents: &[UploadedDocument]) -> Self {
        let valid: Vec<&UploadedDocument> =
            documents.iter().filter(|doc| doc.is_valid()).collect();
        let mut unrecognized_categories: Vec<String> = Vec::new();

        let entries: Vec<RequirementEntry> = requirements
            .iter()
            .map(|requirement| {
                let category = DocumentCategory::parse(&requirement.document_category);
                if let DocumentCategory::Unrecognized(raw) = &category {
                    if !unrecognized_categories.contains(raw) {
                        unrecognized_categories.push(raw.clone());
                    }
                }
                reconcile(requirement, category, &valid)
            })
            .collect();

        let mandatory_total = entries.iter().filter(|entry| entry.required).count();
        let mandatory_reviewed = entries
            .iter()
            .filter(|entry| entry.required && entry.is_reviewed())
            .count();
        let ready_for_quality_check =
            are_all_mandatory_documents_reviewed(Some(requirements), Some(documents));

        debug!(
            mandatory_total,
            mandatory_reviewed, ready_for_quality_check, "checklist reconciled"
        );

        Self {
            entries,
            mandatory_total,
            mandatory_reviewed,
            ready_for_quality_check,
            unrecognized_categories,
        }
    }

    /// Mandatory requirements still blocking the quality check.
    pub fn outstanding(&self) -> Vec<&RequirementEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.required && !entry.is_reviewed())
            .collect()
    }

    pub fn summary(&self) -> String {
        if self.entries.is_empty() {
            return "no checklist defined".to_string();
        }
        if self.ready_for_quality_check {
            return format!(
                "ready for quality check: {} of {} mandatory documents reviewed",
                self.mandatory_reviewed, self.mandatory_total
            );
        }
        format!(
            "not ready: {} of {} mandatory documents reviewed",
            self.mandatory_reviewed, self.mandatory_total
        )
    }
}

fn reconcile(
    requirement: &ChecklistRequirement,
    category: DocumentCategory,
    documents: &[&UploadedDocument],
) -> RequirementEntry {
    let mut first_unreviewed: Option<(&UploadedDocument, MatchStrategy)> = None;
    let mut reviewed: Option<(&UploadedDocument, MatchStrategy)> = None;

    for &doc in documents {
        let Some(strategy) = match_document(doc, requirement) else {
            continue;
        };
        if doc.status.counts_as_reviewed() {
            reviewed = Some((doc, strategy));
            break;
        }
        if first_unreviewed.is_none() {
            first_unreviewed = Some((doc, strategy));
        }
    }

    let (state, matched) = match (reviewed, first_unreviewed) {
        (Some(found), _) => (RequirementState::Reviewed, Some(found)),
        (None, Some((doc, strategy))) => (
            RequirementState::AwaitingReview {
                status: doc.status.clone(),
            },
            Some((doc, strategy)),
        ),
        (None, None) => (RequirementState::Missing, None),
    };

    RequirementEntry {
        document_type: requirement.document_type.clone(),
        category,
        category_label: normalize_category(&requirement.document_category),
        company_name: requirement.company_name.clone(),
        required: requirement.required,
        state,
        matched_file: matched.map(|(doc, _)| doc.file_name.clone()),
        strategy: matched.map(|(_, strategy)| strategy),
    }
}
