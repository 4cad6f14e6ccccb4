use super::common::*;
use crate::checklist::domain::DocumentStatus;
use crate::checklist::{
    are_all_mandatory_documents_reviewed, ChecklistReport, DocumentCategory, MatchStrategy,
    RequirementState,
};

#[test]
fn report_lists_every_requirement_in_order() {
    let (requirements, documents) = complete_checklist();
    let report = ChecklistReport::build(&requirements, &documents);

    assert_eq!(report.entries.len(), requirements.len());
    assert_eq!(report.mandatory_total, 4);
    assert_eq!(report.mandatory_reviewed, 4);
    assert!(report.ready_for_quality_check);
    assert!(report.outstanding().is_empty());

    let passport = &report.entries[0];
    assert_eq!(passport.category, DocumentCategory::Identity);
    assert_eq!(passport.matched_file.as_deref(), Some("passport_scan.pdf"));
    assert_eq!(passport.strategy, Some(MatchStrategy::DeclaredName));

    let itinerary = &report.entries[4];
    assert!(!itinerary.required);
    assert_eq!(itinerary.state, RequirementState::Missing);
}

#[test]
fn unreviewed_match_is_awaiting_review() {
    let requirements = vec![beta_financials_requirement()];
    let documents = vec![with_status(
        beta_financials_document(),
        DocumentStatus::RequestReview,
    )];
    let report = ChecklistReport::build(&requirements, &documents);

    assert_eq!(
        report.entries[0].state,
        RequirementState::AwaitingReview {
            status: DocumentStatus::RequestReview
        }
    );
    assert_eq!(report.outstanding().len(), 1);
    assert!(!report.ready_for_quality_check);
}

#[test]
fn reviewed_document_wins_over_earlier_pending_upload() {
    let requirements = vec![requirement("Passport", "Identity")];
    let documents = vec![
        with_status(
            reviewed("passport_old.pdf", "Passport", "Identity"),
            DocumentStatus::Rejected,
        ),
        reviewed("passport_new.pdf", "Passport", "Identity"),
    ];
    let report = ChecklistReport::build(&requirements, &documents);

    assert_eq!(report.entries[0].state, RequirementState::Reviewed);
    assert_eq!(
        report.entries[0].matched_file.as_deref(),
        Some("passport_new.pdf")
    );
}

#[test]
fn readiness_agrees_with_completion_check() {
    let (requirements, documents) = complete_checklist();
    let scenarios = vec![
        (requirements.clone(), documents.clone()),
        (requirements.clone(), documents[1..].to_vec()),
        (requirements.clone(), Vec::new()),
        (Vec::new(), documents.clone()),
        (vec![optional("Cover Letter", "Other")], Vec::new()),
        (
            vec![
                alpha_gst_requirement(),
                beta_gst_requirement(),
                beta_financials_requirement(),
            ],
            vec![alpha_gst_document(), beta_gst_document()],
        ),
    ];

    for (requirements, documents) in scenarios {
        let report = ChecklistReport::build(&requirements, &documents);
        assert_eq!(
            report.ready_for_quality_check,
            are_all_mandatory_documents_reviewed(Some(&requirements), Some(&documents))
        );
    }
}

#[test]
fn unrecognized_categories_are_collected_once() {
    let requirements = vec![
        requirement("Sponsor Letter", "Sponsorship"),
        requirement("Sponsor ID", "Sponsorship"),
        requirement("Passport", "Identity"),
    ];
    let report = ChecklistReport::build(&requirements, &[]);
    assert_eq!(report.unrecognized_categories, vec!["Sponsorship".to_string()]);
    assert_eq!(report.summary(), "not ready: 0 of 3 mandatory documents reviewed");
}

#[test]
fn empty_checklist_summary() {
    let report = ChecklistReport::build(&[], &[]);
    assert!(!report.ready_for_quality_check);
    assert_eq!(report.summary(), "no checklist defined");
}

#[test]
fn report_serializes_state_inline() {
    let requirements = vec![beta_gst_requirement()];
    let documents = vec![beta_gst_document()];
    let report = ChecklistReport::build(&requirements, &documents);

    let json = serde_json::to_value(&report).expect("report serializes");
    let entry = &json["entries"][0];
    assert_eq!(entry["state"], "reviewed");
    assert_eq!(entry["category"], "beta ltd Company Documents");
    assert_eq!(entry["category_label"], "Beta Ltd Company Documents");
    assert_eq!(entry["strategy"], "declared_name");
    assert!(json.get("unrecognized_categories").is_none());
}
