//! Navigation over every page and slug-based report rendering.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    common::parse_month_key,
    error::{HrError, HrResult},
    page::{Page, PageContext, PageInfo, Role, view},
    pages::{
        admin::{
            benefits::{self, BenefitsPage},
            compliance::{self, CompliancePage},
            departments::{self, DepartmentsPage},
            payroll::{self, PayrollPage},
            users::{self, SystemUsersPage},
        },
        auditor::{
            access_reviews::{self, AccessReviewsPage},
            audit_log::{self, AuditLogPage},
            compliance_reports::{self, ComplianceReportsPage},
        },
        employee::{
            attendance::{self, AttendancePage, attendance_calendar},
            leave_balance::{self, LeaveBalancePage},
            leave_history::{self, LeaveHistoryPage},
            payslips::{self, PayslipsPage},
            profile::{self, ProfileAction, profile_view},
            trainings::{self, MyTrainingsPage},
        },
        hr::{
            employees::{self, EmployeesPage},
            hiring::{self, HiringPage},
            job_postings::{self, JobPostingsPage},
            onboarding::{self, OnboardingPage},
            performance::{self, PerformancePage},
            predictions::{self, PredictionsPage},
        },
        manager::{
            goals::{self, TeamGoalsPage},
            leave_approvals::{self, LeaveApprovalsPage},
            team::{self, TeamPage},
            team_attendance::{self, TeamAttendancePage},
        },
        trainer::{
            assessments::{self, AssessmentsPage},
            programs::{self, ProgramsPage},
            sessions::{self, SessionsPage},
        },
    },
    profile::ProfileInput,
};

const PAGES: [PageInfo; 27] = [
    BenefitsPage::INFO,
    CompliancePage::INFO,
    SystemUsersPage::INFO,
    DepartmentsPage::INFO,
    PayrollPage::INFO,
    HiringPage::INFO,
    JobPostingsPage::INFO,
    EmployeesPage::INFO,
    OnboardingPage::INFO,
    PerformancePage::INFO,
    PredictionsPage::INFO,
    TeamPage::INFO,
    LeaveApprovalsPage::INFO,
    TeamAttendancePage::INFO,
    TeamGoalsPage::INFO,
    LeaveBalancePage::INFO,
    LeaveHistoryPage::INFO,
    AttendancePage::INFO,
    PayslipsPage::INFO,
    profile::INFO,
    MyTrainingsPage::INFO,
    AuditLogPage::INFO,
    ComplianceReportsPage::INFO,
    AccessReviewsPage::INFO,
    ProgramsPage::INFO,
    SessionsPage::INFO,
    AssessmentsPage::INFO,
];

/// Every page, grouped by role in navigation order.
pub fn catalog() -> &'static [PageInfo] {
    &PAGES
}

pub fn pages_for(role: Role) -> Vec<PageInfo> {
    PAGES.iter().filter(|info| info.role == role).copied().collect()
}

pub fn find(slug: &str) -> Option<PageInfo> {
    PAGES.iter().find(|info| info.slug == slug).copied()
}

/// Renders the page behind `slug` as JSON.
///
/// `params` are the raw query-string pairs. Blank values mean "All";
/// everything else reaches the page filter as text, which yes/no filters
/// read through [`deserialize_flag`](crate::common::deserialize_flag).
pub fn report(slug: &str, params: &BTreeMap<String, String>, ctx: &PageContext) -> HrResult<Value> {
    debug!(slug, params = params.len(), "rendering report");
    match slug {
        benefits::SLUG => render::<BenefitsPage>(params, ctx),
        compliance::SLUG => render::<CompliancePage>(params, ctx),
        users::SLUG => render::<SystemUsersPage>(params, ctx),
        departments::SLUG => render::<DepartmentsPage>(params, ctx),
        payroll::SLUG => render::<PayrollPage>(params, ctx),
        hiring::SLUG => render::<HiringPage>(params, ctx),
        job_postings::SLUG => render::<JobPostingsPage>(params, ctx),
        employees::SLUG => render::<EmployeesPage>(params, ctx),
        onboarding::SLUG => render::<OnboardingPage>(params, ctx),
        performance::SLUG => render::<PerformancePage>(params, ctx),
        predictions::SLUG => render::<PredictionsPage>(params, ctx),
        team::SLUG => render::<TeamPage>(params, ctx),
        leave_approvals::SLUG => render::<LeaveApprovalsPage>(params, ctx),
        team_attendance::SLUG => render::<TeamAttendancePage>(params, ctx),
        goals::SLUG => render::<TeamGoalsPage>(params, ctx),
        leave_balance::SLUG => render::<LeaveBalancePage>(params, ctx),
        leave_history::SLUG => render::<LeaveHistoryPage>(params, ctx),
        attendance::SLUG => attendance_report(params, ctx),
        payslips::SLUG => render::<PayslipsPage>(params, ctx),
        profile::SLUG => profile_report(params),
        trainings::SLUG => render::<MyTrainingsPage>(params, ctx),
        audit_log::SLUG => render::<AuditLogPage>(params, ctx),
        compliance_reports::SLUG => render::<ComplianceReportsPage>(params, ctx),
        access_reviews::SLUG => render::<AccessReviewsPage>(params, ctx),
        programs::SLUG => render::<ProgramsPage>(params, ctx),
        sessions::SLUG => render::<SessionsPage>(params, ctx),
        assessments::SLUG => render::<AssessmentsPage>(params, ctx),
        _ => Err(HrError::UnknownPage(slug.to_string())),
    }
}

fn render<P: Page>(params: &BTreeMap<String, String>, ctx: &PageContext) -> HrResult<Value> {
    let filter: P::Filter = parse_params(params)?;
    to_json(&view::<P>(&filter, ctx))
}

/// The attendance list plus the calendar for the filtered month. Without a
/// usable month the calendar shows the `as_of` month.
fn attendance_report(params: &BTreeMap<String, String>, ctx: &PageContext) -> HrResult<Value> {
    let mut report = render::<AttendancePage>(params, ctx)?;
    let requested = params
        .get("month")
        .and_then(|key| parse_month_key(key))
        .and_then(|(year, month)| attendance_calendar(year, month).ok());
    let calendar = match requested {
        Some(calendar) => calendar,
        None => attendance_calendar(ctx.as_of.year(), ctx.as_of.month())?,
    };
    let calendar = to_json(&calendar)?;
    if let Value::Object(fields) = &mut report {
        fields.insert("calendar".into(), calendar);
    }
    Ok(report)
}

fn profile_report(params: &BTreeMap<String, String>) -> HrResult<Value> {
    let action: ProfileAction = match params.get("action").filter(|a| !a.trim().is_empty()) {
        Some(action) => serde_json::from_value(Value::String(action.trim().to_string()))
            .map_err(|err| HrError::InvalidFilter(format!("action: {err}")))?,
        None => ProfileAction::View,
    };
    let draft: ProfileInput = parse_params(params)?;
    to_json(&profile_view(action, &draft)?)
}

fn parse_params<T: DeserializeOwned>(params: &BTreeMap<String, String>) -> HrResult<T> {
    let object: Map<String, Value> = params
        .iter()
        .filter(|(_, raw)| !raw.trim().is_empty())
        .map(|(key, raw)| (key.clone(), Value::String(raw.trim().to_string())))
        .collect();
    serde_json::from_value(Value::Object(object))
        .map_err(|err| HrError::InvalidFilter(err.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> HrResult<Value> {
    serde_json::to_value(value).map_err(|err| HrError::Render(err.to_string()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::common::ymd;

    fn ctx() -> PageContext {
        PageContext::new(ymd(2025, 3, 14))
    }

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn slugs_are_unique_and_every_role_has_pages() {
        let slugs: HashSet<_> = catalog().iter().map(|info| info.slug).collect();
        assert_eq!(slugs.len(), catalog().len());
        for role in Role::ALL {
            assert!(!pages_for(role).is_empty(), "{role:?}");
        }
        assert_eq!(pages_for(Role::Employee).len(), 6);
    }

    #[test]
    fn every_catalog_page_renders_without_params() {
        for info in catalog() {
            let json = report(info.slug, &BTreeMap::new(), &ctx())
                .unwrap_or_else(|err| panic!("{}: {err}", info.slug));
            assert!(json.is_object(), "{}", info.slug);
        }
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let err = report("admin-payroll-v2", &BTreeMap::new(), &ctx()).unwrap_err();
        assert_eq!(err, HrError::UnknownPage("admin-payroll-v2".into()));
        assert!(err.is_not_found());
    }

    #[test]
    fn enum_filter_from_query_string() {
        let json = report(
            leave_history::SLUG,
            &params(&[("status", "approved")]),
            &ctx(),
        )
        .unwrap();
        let statuses: Vec<_> = json["records"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["status"].as_str().unwrap())
            .collect();
        assert!(!statuses.is_empty());
        assert!(statuses.iter().all(|s| *s == "approved"));
    }

    #[test]
    fn bool_and_blank_params() {
        let json = report(
            sessions::SLUG,
            &params(&[("upcoming_only", "true"), ("program", "")]),
            &ctx(),
        )
        .unwrap();
        assert_eq!(json["shown"], 4);
    }

    #[test]
    fn bad_filter_value_is_invalid() {
        let err = report(payroll::SLUG, &params(&[("status", "bogus")]), &ctx()).unwrap_err();
        assert!(matches!(err, HrError::InvalidFilter(_)));
    }

    #[test]
    fn attendance_report_carries_calendar() {
        let json = report(attendance::SLUG, &params(&[("month", "2025-02")]), &ctx()).unwrap();
        assert_eq!(json["calendar"]["label"], "February 2025");
        assert_eq!(json["shown"], 20);

        let fallback = report(attendance::SLUG, &params(&[("month", "soon")]), &ctx()).unwrap();
        assert_eq!(fallback["calendar"]["label"], "March 2025");
        assert_eq!(fallback["shown"], 0);
    }

    #[test]
    fn attendance_month_beyond_calendar_range_falls_back() {
        let json = report(attendance::SLUG, &params(&[("month", "300000-01")]), &ctx()).unwrap();
        assert_eq!(json["calendar"]["label"], "March 2025");
        assert_eq!(json["shown"], 0);
    }

    #[test]
    fn boolean_looking_text_stays_text() {
        let json = report(benefits::SLUG, &params(&[("search", "true")]), &ctx()).unwrap();
        assert_eq!(json["shown"], 0);
        assert_eq!(json["total"], 8);

        let json = report(
            profile::SLUG,
            &params(&[("action", "edit"), ("address", "false")]),
            &ctx(),
        )
        .unwrap();
        assert_eq!(json["fields"]["address"], "false");
    }

    #[test]
    fn flag_filters_read_query_text() {
        let json = report(assessments::SLUG, &params(&[("passed", "false")]), &ctx()).unwrap();
        assert_eq!(json["shown"], 2);

        let err = report(sessions::SLUG, &params(&[("upcoming_only", "soon")]), &ctx())
            .unwrap_err();
        assert!(matches!(err, HrError::InvalidFilter(_)));
    }

    #[test]
    fn profile_report_applies_action() {
        let editing = report(
            profile::SLUG,
            &params(&[("action", "edit"), ("phone", "555-0101")]),
            &ctx(),
        )
        .unwrap();
        assert_eq!(editing["editing"], true);
        assert_eq!(editing["fields"]["phone"], "555-0101");

        let err = report(
            profile::SLUG,
            &params(&[("action", "save"), ("email", "nope")]),
            &ctx(),
        )
        .unwrap_err();
        assert!(matches!(err, HrError::Validation(_)));
    }
}
