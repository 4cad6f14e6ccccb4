use super::super::category::{normalize_category, COMPANY_DOCUMENTS};
use super::super::domain::{ChecklistRequirement, UploadedDocument};
use super::super::normalizer::snake_case;
use super::MatchStrategy;

/// Comparison keys derived once per document/requirement pair.
pub(crate) struct MatchContext<'a> {
    pub doc: &'a UploadedDocument,
    pub requirement: &'a ChecklistRequirement,
    pub expected_type: String,
    pub category_label: String,
    declared_name: Option<String>,
}

impl<'a> MatchContext<'a> {
    pub(crate) fn new(doc: &'a UploadedDocument, requirement: &'a ChecklistRequirement) -> Self {
        let declared_name = doc
            .document_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(snake_case);

        Self {
            doc,
            requirement,
            expected_type: snake_case(&requirement.document_type),
            category_label: normalize_category(&requirement.document_category),
            declared_name,
        }
    }
}

pub(crate) fn name_matches(strategy: MatchStrategy, ctx: &MatchContext<'_>) -> bool {
    match strategy {
        MatchStrategy::DeclaredName => {
            ctx.declared_name.as_deref() == Some(ctx.expected_type.as_str())
        }
        MatchStrategy::FuzzyDeclaredName => ctx.declared_name.as_deref().is_some_and(|name| {
            ctx.expected_type.contains(name) || name.contains(ctx.expected_type.as_str())
        }),
        MatchStrategy::DocumentType => {
            ctx.doc.document_type.as_deref() == Some(ctx.expected_type.as_str())
        }
        MatchStrategy::FileName => ctx
            .doc
            .file_name
            .to_lowercase()
            .contains(&ctx.requirement.document_type.to_lowercase()),
    }
}

/// Whether the document's own category can stand in for the requirement's.
///
/// Uncategorized documents are compatible here; the company check still
/// rejects them for company-scoped requirements.
pub(crate) fn category_compatible(ctx: &MatchContext<'_>) -> bool {
    let Some(doc_category) = ctx
        .doc
        .document_category
        .as_deref()
        .filter(|category| !category.is_empty())
    else {
        return true;
    };

    let label = ctx.category_label.as_str();
    doc_category == label
        || (label.contains(COMPANY_DOCUMENTS) && doc_category.contains(COMPANY_DOCUMENTS))
        || normalize_category(doc_category) == label
}
