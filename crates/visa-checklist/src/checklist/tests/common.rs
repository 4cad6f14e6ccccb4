use crate::checklist::domain::{ChecklistRequirement, DocumentStatus, UploadedDocument};

pub(super) const ALPHA_CATEGORY: &str = "Alpha LLC Company Documents";
pub(super) const BETA_CATEGORY: &str = "Beta Ltd Company Documents";

pub(super) fn requirement(document_type: &str, category: &str) -> ChecklistRequirement {
    ChecklistRequirement::new(document_type, category, true)
}

pub(super) fn optional(document_type: &str, category: &str) -> ChecklistRequirement {
    ChecklistRequirement::new(document_type, category, false)
}

pub(super) fn reviewed(file_name: &str, document_name: &str, category: &str) -> UploadedDocument {
    UploadedDocument::new(file_name, DocumentStatus::Reviewed)
        .named(document_name)
        .in_category(category)
}

pub(super) fn with_status(mut doc: UploadedDocument, status: DocumentStatus) -> UploadedDocument {
    doc.status = status;
    doc
}

pub(super) fn alpha_gst_requirement() -> ChecklistRequirement {
    requirement("GST Registration", ALPHA_CATEGORY).with_company("Alpha LLC")
}

pub(super) fn beta_gst_requirement() -> ChecklistRequirement {
    requirement("GST Registration", BETA_CATEGORY).with_company("Beta Ltd")
}

pub(super) fn beta_financials_requirement() -> ChecklistRequirement {
    requirement("Financial Statement", BETA_CATEGORY).with_company("Beta Ltd")
}

pub(super) fn alpha_gst_document() -> UploadedDocument {
    reviewed("alpha_gst.pdf", "GST Registration", ALPHA_CATEGORY).with_company("Alpha LLC")
}

pub(super) fn beta_gst_document() -> UploadedDocument {
    reviewed("beta_gst.pdf", "GST Registration", BETA_CATEGORY).with_company("Beta Ltd")
}

pub(super) fn beta_financials_document() -> UploadedDocument {
    reviewed("beta_fs_2024.pdf", "Financial Statement", BETA_CATEGORY).with_company("Beta Ltd")
}

/// Identity, education and two employers, every mandatory row satisfied.
pub(super) fn complete_checklist() -> (Vec<ChecklistRequirement>, Vec<UploadedDocument>) {
    let requirements = vec![
        requirement("Passport", "Identity"),
        requirement("Degree Certificate", "Education"),
        alpha_gst_requirement(),
        beta_gst_requirement(),
        optional("Travel Itinerary", "Other"),
    ];
    let documents = vec![
        reviewed("passport_scan.pdf", "Passport", "Identity Documents"),
        with_status(
            reviewed("degree.pdf", "Degree Certificate", "Education"),
            DocumentStatus::Approved,
        ),
        alpha_gst_document(),
        beta_gst_document(),
    ];
    (requirements, documents)
}
