use super::super::category::{COMPANY_DOCUMENTS, COMPANY_DOCUMENTS_LOWER, GENERIC_COMPANY_CODE};
use super::super::domain::{ChecklistRequirement, UploadedDocument};
use super::super::normalizer::{
    collapse_whitespace_runs, extract_company_name_from_label, normalize_company_name,
};

/// Employer constraint between a document and a company-scoped requirement.
///
/// Requirements outside the company categories impose no constraint. A
/// requirement naming an employer is never satisfied by another employer's
/// document.
pub(crate) fn matches_company_requirement(
    doc: &UploadedDocument,
    requirement: &ChecklistRequirement,
    category_label: &str,
    original_category: &str,
) -> bool {
    if !category_label
        .to_lowercase()
        .contains(COMPANY_DOCUMENTS_LOWER)
    {
        return true;
    }

    let doc_category = doc.document_category.as_deref().unwrap_or_default();
    let doc_category_lower = doc_category.to_lowercase();
    if !doc_category_lower.contains(COMPANY_DOCUMENTS_LOWER) {
        return false;
    }

    let label_company = extract_company_name_from_label(Some(category_label));

    // The chain stops at the first captured key, even an empty one.
    let required_company = normalize_company_name(requirement.company_name.as_deref())
        .or_else(|| label_company.clone())
        .or_else(|| extract_company_name_from_label(Some(original_category)));

    let doc_company = normalize_company_name(doc.company_name.as_deref())
        .or_else(|| extract_company_name_from_label(Some(doc_category)));

    if let Some(required) = required_company.filter(|name| !name.is_empty()) {
        return doc_company.as_deref() == Some(required.as_str())
            || doc_category_lower.contains(&required);
    }

    if let Some(doc_company) = doc_company.filter(|name| !name.is_empty()) {
        if label_company.as_deref() == Some(doc_company.as_str()) {
            return true;
        }
    }

    let generic_requirement =
        original_category == GENERIC_COMPANY_CODE || category_label == COMPANY_DOCUMENTS;
    if generic_requirement && doc_category_lower.contains(COMPANY_DOCUMENTS_LOWER) {
        return true;
    }

    collapse_whitespace_runs(doc_category) == collapse_whitespace_runs(category_label)
}
