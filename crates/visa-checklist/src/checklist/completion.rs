use tracing::debug;

use super::domain::{ChecklistRequirement, UploadedDocument};
use super::matching::match_document_to_checklist_item;

/// Whether every mandatory requirement has a reviewed or approved document.
///
/// A missing or empty checklist is never complete. A checklist without
/// mandatory rows is complete regardless of documents.
pub fn are_all_mandatory_documents_reviewed(
    requirements: Option<&[ChecklistRequirement]>,
    documents: Option<&[UploadedDocument]>,
) -> bool {
    let Some(requirements) = requirements.filter(|items| !items.is_empty()) else {
        debug!("no checklist defined; completion blocked");
        return false;
    };

    let mandatory: Vec<&ChecklistRequirement> =
        requirements.iter().filter(|item| item.required).collect();
    if mandatory.is_empty() {
        return true;
    }

    let Some(documents) = documents.filter(|docs| !docs.is_empty()) else {
        debug!(
            mandatory = mandatory.len(),
            "no documents supplied for mandatory checklist"
        );
        return false;
    };

    let valid: Vec<&UploadedDocument> =
        documents.iter().filter(|doc| doc.is_valid()).collect();

    for requirement in mandatory {
        let satisfied = valid.iter().any(|doc| {
            doc.status.counts_as_reviewed() && match_document_to_checklist_item(doc, requirement)
        });
        if !satisfied {
            debug!(
                requirement = %requirement.document_type,
                category = %requirement.document_category,
                company = requirement.company_name.as_deref().unwrap_or("-"),
                "mandatory requirement has no reviewed document"
            );
            return false;
        }
    }

    true
}
