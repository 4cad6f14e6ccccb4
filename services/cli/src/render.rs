use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;
use visa_checklist::checklist::{
    normalize_category, ChecklistReport, DocumentCategory, RequirementEntry, RequirementState,
};
use visa_checklist::error::AppError;

#[derive(Serialize)]
struct ReportEnvelope<'a> {
    evaluated_on: NaiveDate,
    report: &'a ChecklistReport,
}

pub(crate) fn render_json<W: Write>(
    out: &mut W,
    report: &ChecklistReport,
    today: NaiveDate,
) -> Result<(), AppError> {
    let envelope = ReportEnvelope {
        evaluated_on: today,
        report,
    };
    serde_json::to_writer_pretty(&mut *out, &envelope)?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn render_text<W: Write>(
    out: &mut W,
    report: &ChecklistReport,
    today: NaiveDate,
) -> Result<(), AppError> {
    writeln!(out, "Checklist (evaluated {})", today.format("%Y-%m-%d"))?;
    for entry in &report.entries {
        writeln!(out, "{}", entry_line(entry))?;
    }
    if !report.unrecognized_categories.is_empty() {
        writeln!(
            out,
            "Unrecognized categories: {}",
            report.unrecognized_categories.join(", ")
        )?;
    }
    writeln!(out, "{}", report.summary())?;
    Ok(())
}

fn entry_line(entry: &RequirementEntry) -> String {
    let marker = match (&entry.state, entry.required) {
        (RequirementState::Reviewed, _) => "[x]",
        (_, true) => "[ ]",
        (_, false) => "[-]",
    };
    let mut line = format!(
        "{marker} {} ({}): {}",
        entry.document_type,
        entry.category_label,
        entry.state.label()
    );
    if let RequirementState::AwaitingReview { status } = &entry.state {
        line.push_str(&format!(" [{}]", status.label()));
    }
    if let (Some(file), Some(strategy)) = (&entry.matched_file, entry.strategy) {
        line.push_str(&format!(" <- {file} via {}", strategy.label()));
    }
    line
}

pub(crate) fn render_category_table<W: Write>(
    out: &mut W,
    categories: &[String],
) -> Result<(), AppError> {
    for raw in categories {
        let parsed = DocumentCategory::parse(raw);
        writeln!(
            out,
            "{raw} -> {} ({})",
            normalize_category(raw),
            category_kind(&parsed)
        )?;
    }
    Ok(())
}

fn category_kind(category: &DocumentCategory) -> String {
    match category {
        DocumentCategory::Company {
            employer: Some(employer),
        } => format!("company: {employer}"),
        DocumentCategory::Company { employer: None } => "company: any employer".to_string(),
        DocumentCategory::Unrecognized(_) => "unrecognized".to_string(),
        _ => "standard".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use visa_checklist::checklist::{ChecklistRequirement, DocumentStatus, UploadedDocument};

    fn sample_report() -> ChecklistReport {
        let requirements = vec![
            ChecklistRequirement::new("Passport", "Identity", true),
            ChecklistRequirement::new("Degree Certificate", "Education", true),
            ChecklistRequirement::new("Cover Letter", "Other", false),
            ChecklistRequirement::new("Payslip", "Beta Ltd Company Documents", false),
        ];
        let documents = vec![
            UploadedDocument::new("passport.pdf", DocumentStatus::Reviewed)
                .named("Passport")
                .in_category("Identity Documents"),
            UploadedDocument::new("degree.pdf", DocumentStatus::Pending)
                .named("Degree Certificate")
                .in_category("Education Documents"),
        ];
        ChecklistReport::build(&requirements, &documents)
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date")
    }

    #[test]
    fn text_marks_each_requirement() {
        let mut out = Vec::new();
        render_text(&mut out, &sample_report(), day()).expect("render text");
        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Checklist (evaluated 2025-03-14)");
        assert!(lines[1].starts_with("[x] Passport (Identity Documents): Reviewed"));
        assert!(lines[1].ends_with("<- passport.pdf via declared name"));
        assert!(lines[2].starts_with("[ ] Degree Certificate (Education Documents): Awaiting review [pending]"));
        assert_eq!(lines[3], "[-] Cover Letter (Other Documents): Missing");
        assert_eq!(
            lines[4],
            "[-] Payslip (Beta Ltd Company Documents): Missing"
        );
        assert_eq!(lines[5], "not ready: 1 of 2 mandatory documents reviewed");
    }

    #[test]
    fn json_wraps_report_with_date() {
        let mut out = Vec::new();
        render_json(&mut out, &sample_report(), day()).expect("render json");
        let payload: serde_json::Value = serde_json::from_slice(&out).expect("valid json");

        assert_eq!(payload["evaluated_on"], "2025-03-14");
        assert_eq!(payload["report"]["mandatory_total"], 2);
        assert_eq!(payload["report"]["entries"][1]["state"], "awaiting_review");
        assert_eq!(payload["report"]["entries"][1]["status"], "pending");
    }

    #[test]
    fn category_table_shows_label_and_kind() {
        let mut out = Vec::new();
        let categories = vec![
            "Identity".to_string(),
            "Company".to_string(),
            "Beta Ltd Company Documents".to_string(),
            "Travel".to_string(),
        ];
        render_category_table(&mut out, &categories).expect("render table");
        let text = String::from_utf8(out).expect("utf8");

        assert_eq!(
            text,
            "Identity -> Identity Documents (standard)\n\
Company -> Company Documents (company: any employer)\n\
Beta Ltd Company Documents -> Beta Ltd Company Documents (company: beta ltd)\n\
Travel -> Travel (unrecognized)\n"
        );
    }
}
