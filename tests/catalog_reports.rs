use anyhow::Result;
use chrono::NaiveDate;
use dashboard_tests::{fixture_module, params};
use products_hr::{HrModule, Role, catalog, profile::ProfileField};

#[test]
fn every_page_renders_with_default_filters() -> Result<()> {
    let module = fixture_module();
    for info in catalog() {
        let json = module.report(info.slug, &params(&[]))?;
        if info.slug == "employee-profile" {
            assert_eq!(json["editing"], false);
            continue;
        }
        let records = json["records"].as_array().expect("records array");
        let badges = json["badges"].as_array().expect("badges array");
        assert_eq!(records.len(), badges.len(), "{}", info.slug);
        assert_eq!(json["shown"], json["total"], "{} unfiltered", info.slug);
        assert!(json["summary"].is_object(), "{}", info.slug);
    }
    Ok(())
}

#[test]
fn blank_filter_values_mean_all() -> Result<()> {
    let module = fixture_module();
    let unfiltered = module.report("hr-employees", &params(&[]))?;
    let blank = module.report(
        "hr-employees",
        &params(&[("department", ""), ("status", " "), ("search", "")]),
    )?;
    assert_eq!(unfiltered, blank);
    Ok(())
}

#[test]
fn every_role_has_a_dashboard() {
    let module = fixture_module();
    let total: usize = Role::ALL
        .into_iter()
        .map(|role| {
            let pages = module.pages(Some(role));
            assert!(!pages.is_empty(), "{role:?} has no pages");
            pages.len()
        })
        .sum();
    assert_eq!(total, catalog().len());
}

#[test]
fn unknown_slug_is_not_found() {
    let err = fixture_module()
        .report("admin-nope", &params(&[]))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn overdue_flags_follow_the_reference_date() -> Result<()> {
    let early = HrModule::new(NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"));
    let json = early.report("employee-trainings", &params(&[]))?;
    assert_eq!(json["summary"]["overdue"], 0);

    let json = fixture_module().report("employee-trainings", &params(&[]))?;
    assert_eq!(json["summary"]["overdue"], 2);
    Ok(())
}

#[test]
fn attendance_report_carries_its_calendar() -> Result<()> {
    let module = fixture_module();
    let json = module.report("employee-attendance", &params(&[("month", "2025-02")]))?;
    assert_eq!(json["shown"], 20);
    assert_eq!(json["calendar"]["label"], "February 2025");

    let fallback = module.report("employee-attendance", &params(&[("month", "someday")]))?;
    assert_eq!(fallback["shown"], 0);
    assert_eq!(fallback["calendar"]["label"], "March 2025");

    let far = module.report("employee-attendance", &params(&[("month", "300000-01")]))?;
    assert_eq!(far["calendar"]["label"], "March 2025");
    Ok(())
}

#[test]
fn free_text_filters_keep_boolean_words() -> Result<()> {
    let module = fixture_module();
    let json = module.report("admin-benefits", &params(&[("search", "true")]))?;
    assert_eq!(json["shown"], 0);

    let json = module.report(
        "employee-profile",
        &params(&[("action", "edit"), ("address", "false")]),
    )?;
    assert_eq!(json["fields"]["address"], "false");

    let json = module.report("trainer-assessments", &params(&[("passed", "false")]))?;
    assert_eq!(json["shown"], 2);
    Ok(())
}

#[test]
fn profile_edits_only_touch_editable_fields() -> Result<()> {
    let json = fixture_module().report(
        "employee-profile",
        &params(&[("action", "edit"), ("phone", "+1 555 0199")]),
    )?;
    assert_eq!(json["editing"], true);
    assert_eq!(json["fields"]["phone"], "+1 555 0199");
    assert_eq!(json["fields"]["employee_id"], "EMP-0042");
    assert!(!ProfileField::EmployeeId.is_editable());
    Ok(())
}
