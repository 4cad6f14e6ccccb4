mod company;
mod rules;

use serde::Serialize;
use tracing::trace;

use super::domain::{ChecklistRequirement, UploadedDocument};
use company::matches_company_requirement;
use rules::{category_compatible, name_matches, MatchContext};

/// Name-level signal that tied a document to a requirement, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Declared document name equals the requirement type.
    DeclaredName,
    /// Declared document name and requirement type contain one another.
    FuzzyDeclaredName,
    /// Machine document type equals the requirement type.
    DocumentType,
    /// File name contains the requirement type.
    FileName,
}

impl MatchStrategy {
    pub const ORDERED: [MatchStrategy; 4] = [
        MatchStrategy::DeclaredName,
        MatchStrategy::FuzzyDeclaredName,
        MatchStrategy::DocumentType,
        MatchStrategy::FileName,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            MatchStrategy::DeclaredName => "declared name",
            MatchStrategy::FuzzyDeclaredName => "fuzzy declared name",
            MatchStrategy::DocumentType => "document type",
            MatchStrategy::FileName => "file name",
        }
    }
}

/// First strategy under which `doc` satisfies `requirement`.
///
/// A strategy that name-matches but fails the category or company check does
/// not end the search; the remaining strategies are still tried.
pub(crate) fn match_document(
    doc: &UploadedDocument,
    requirement: &ChecklistRequirement,
) -> Option<MatchStrategy> {
    if !doc.is_valid() {
        return None;
    }

    let ctx = MatchContext::new(doc, requirement);

    MatchStrategy::ORDERED.into_iter().find(|&strategy| {
        if !name_matches(strategy, &ctx) {
            return false;
        }

        let compatible = category_compatible(&ctx)
            && matches_company_requirement(
                doc,
                requirement,
                &ctx.category_label,
                &requirement.document_category,
            );
        if !compatible {
            trace!(
                file = %doc.file_name,
                requirement = %requirement.document_type,
                strategy = strategy.label(),
                "name matched but category or company differs"
            );
        }
        compatible
    })
}

pub(crate) fn match_document_to_checklist_item(
    doc: &UploadedDocument,
    requirement: &ChecklistRequirement,
) -> bool {
    match_document(doc, requirement).is_some()
}
