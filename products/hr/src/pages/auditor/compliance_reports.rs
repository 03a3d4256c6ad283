use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, StatusTone, Toned, matches_choice, percentage, ymd},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "auditor-compliance-reports";

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Draft,
    InReview,
    Final,
}

impl Toned for ReportStatus {
    fn label(&self) -> &'static str {
        match self {
            ReportStatus::Draft => "Draft",
            ReportStatus::InReview => "In Review",
            ReportStatus::Final => "Final",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            ReportStatus::Draft => StatusTone::Neutral,
            ReportStatus::InReview => StatusTone::Warning,
            ReportStatus::Final => StatusTone::Success,
        }
    }
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct ComplianceReport {
    pub id: String,
    pub title: String,
    pub period: String,
    pub findings: u32,
    pub resolved: u32,
    pub generated_on: NaiveDate,
    pub status: ReportStatus,
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct ComplianceReportFilter {
    pub status: Option<ReportStatus>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct ComplianceReportSummary {
    pub reports: u32,
    pub total_findings: u32,
    pub resolved: u32,
    pub resolution_rate: f64,
}

pub struct ComplianceReportsPage;

impl Page for ComplianceReportsPage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "Compliance Reports",
        role: Role::Auditor,
        description: "Audit findings by reporting period",
    };

    type Record = ComplianceReport;
    type Filter = ComplianceReportFilter;
    type Summary = ComplianceReportSummary;

    #[rustfmt::skip]
    fn records() -> Vec<ComplianceReport> {
        vec![
            report("CR-2025-Q1", "Q1 Payroll Controls Review", "Q1 2025", 4, 1, ymd(2025, 3, 10), ReportStatus::Draft),
            report("CR-2024-Q4", "Q4 Access Control Audit", "Q4 2024", 7, 6, ymd(2025, 1, 15), ReportStatus::Final),
            report("CR-2024-H2", "H2 Data Retention Review", "H2 2024", 3, 3, ymd(2025, 1, 8), ReportStatus::Final),
            report("CR-2024-Q3", "Q3 Labor Law Compliance", "Q3 2024", 5, 4, ymd(2024, 10, 20), ReportStatus::InReview),
            report("CR-2024-Q2", "Q2 Benefits Eligibility Audit", "Q2 2024", 1, 1, ymd(2024, 7, 12), ReportStatus::Final),
        ]
    }

    fn matches(
        filter: &ComplianceReportFilter,
        record: &ComplianceReport,
        _ctx: &PageContext,
    ) -> bool {
        matches_choice(filter.status.as_ref(), &record.status)
    }

    fn badge(record: &ComplianceReport, _ctx: &PageContext) -> Badge {
        record.status.badge()
    }

    fn summarize(records: &[ComplianceReport], _ctx: &PageContext) -> ComplianceReportSummary {
        let total_findings = records.iter().map(|r| r.findings).sum();
        let resolved = records.iter().map(|r| r.resolved).sum();
        ComplianceReportSummary {
            reports: records.len() as u32,
            total_findings,
            resolved,
            resolution_rate: percentage(f64::from(resolved), f64::from(total_findings)),
        }
    }
}

fn report(
    id: &str,
    title: &str,
    period: &str,
    findings: u32,
    resolved: u32,
    generated_on: NaiveDate,
    status: ReportStatus,
) -> ComplianceReport {
    ComplianceReport {
        id: id.into(),
        title: title.into(),
        period: period.into(),
        findings,
        resolved,
        generated_on,
        status,
    }
}
