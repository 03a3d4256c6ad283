//! The shape every dashboard page shares: a literal dataset, a filter, and
//! summary cards derived from the dataset.

use std::str::FromStr;

use async_graphql::{Enum, Object, OutputType, SimpleObject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    common::Badge,
    error::HrError,
    pages::{
        admin::{
            benefits::{BenefitPlan, BenefitSummary},
            compliance::{ComplianceItem, ComplianceSummary},
            departments::{Department, DepartmentSummary},
            payroll::{PayrollRun, PayrollSummary},
            users::{SystemUser, UserSummary},
        },
        auditor::{
            access_reviews::{AccessReview, AccessReviewSummary},
            audit_log::{AuditEntry, AuditLogSummary},
            compliance_reports::{ComplianceReport, ComplianceReportSummary},
        },
        employee::{
            attendance::{AttendanceDay, AttendanceSummary},
            leave_balance::{LeaveBalance, LeaveBalanceSummary},
            leave_history::{LeaveHistorySummary, LeaveRecord},
            payslips::{Payslip, PayslipSummary},
            trainings::{AssignedCourse, AssignedCourseSummary},
        },
        hr::{
            employees::{Employee, EmployeeSummary},
            hiring::{Candidate, HiringSummary},
            job_postings::{JobPosting, JobPostingSummary},
            onboarding::{OnboardingCase, OnboardingSummary},
            performance::{PerformanceReview, PerformanceSummary},
            predictions::{AttritionPrediction, PredictionSummary},
        },
        manager::{
            goals::{TeamGoal, TeamGoalSummary},
            leave_approvals::{LeaveApprovalSummary, LeaveRequest},
            team::{TeamMember, TeamSummary},
            team_attendance::{TeamAttendanceRecord, TeamAttendanceSummary},
        },
        trainer::{
            assessments::{AssessmentResult, AssessmentSummary},
            programs::{ProgramSummary, TrainingProgram},
            sessions::{SessionSummary, TrainingSession},
        },
    },
};

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Hr,
    Manager,
    Employee,
    Auditor,
    Trainer,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Admin,
        Role::Hr,
        Role::Manager,
        Role::Employee,
        Role::Auditor,
        Role::Trainer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Hr => "hr",
            Role::Manager => "manager",
            Role::Employee => "employee",
            Role::Auditor => "auditor",
            Role::Trainer => "trainer",
        }
    }
}

impl FromStr for Role {
    type Err = HrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == wanted)
            .ok_or_else(|| HrError::InvalidFilter(format!("unknown role {s}")))
    }
}

/// Static navigation entry for a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub slug: &'static str,
    pub title: &'static str,
    pub role: Role,
    pub description: &'static str,
}

#[Object]
impl PageInfo {
    async fn slug(&self) -> &str {
        self.slug
    }

    async fn title(&self) -> &str {
        self.title
    }

    async fn role(&self) -> Role {
        self.role
    }

    async fn description(&self) -> &str {
        self.description
    }
}

/// The reference "today" for overdue and upcoming derivations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageContext {
    pub as_of: NaiveDate,
}

impl PageContext {
    pub fn new(as_of: NaiveDate) -> Self {
        Self { as_of }
    }
}

pub trait Page {
    const INFO: PageInfo;

    type Record: Clone + Serialize + OutputType;
    type Filter: Default + DeserializeOwned;
    type Summary: Serialize + OutputType;

    /// The literal dataset, rebuilt on every call.
    fn records() -> Vec<Self::Record>;

    fn matches(filter: &Self::Filter, record: &Self::Record, ctx: &PageContext) -> bool;

    fn badge(record: &Self::Record, ctx: &PageContext) -> Badge;

    fn summarize(records: &[Self::Record], ctx: &PageContext) -> Self::Summary;

    /// Display order of the filtered rows; literal order unless overridden.
    fn sort(_filter: &Self::Filter, _records: &mut [Self::Record]) {}
}

/// What a page renders: the filtered rows with their badges, and the summary
/// cards computed over the whole dataset.
#[derive(Clone, Debug, SimpleObject, Serialize)]
#[graphql(
    concrete(name = "BenefitsPage", params(BenefitPlan, BenefitSummary)),
    concrete(name = "CompliancePage", params(ComplianceItem, ComplianceSummary)),
    concrete(name = "SystemUsersPage", params(SystemUser, UserSummary)),
    concrete(name = "DepartmentsPage", params(Department, DepartmentSummary)),
    concrete(name = "PayrollPage", params(PayrollRun, PayrollSummary)),
    concrete(name = "HiringPage", params(Candidate, HiringSummary)),
    concrete(name = "JobPostingsPage", params(JobPosting, JobPostingSummary)),
    concrete(name = "EmployeesPage", params(Employee, EmployeeSummary)),
    concrete(name = "OnboardingPage", params(OnboardingCase, OnboardingSummary)),
    concrete(name = "PerformancePage", params(PerformanceReview, PerformanceSummary)),
    concrete(name = "PredictionsPage", params(AttritionPrediction, PredictionSummary)),
    concrete(name = "TeamPage", params(TeamMember, TeamSummary)),
    concrete(name = "LeaveApprovalsPage", params(LeaveRequest, LeaveApprovalSummary)),
    concrete(name = "TeamAttendancePage", params(TeamAttendanceRecord, TeamAttendanceSummary)),
    concrete(name = "TeamGoalsPage", params(TeamGoal, TeamGoalSummary)),
    concrete(name = "LeaveBalancePage", params(LeaveBalance, LeaveBalanceSummary)),
    concrete(name = "LeaveHistoryPage", params(LeaveRecord, LeaveHistorySummary)),
    concrete(name = "AttendancePage", params(AttendanceDay, AttendanceSummary)),
    concrete(name = "PayslipsPage", params(Payslip, PayslipSummary)),
    concrete(name = "MyTrainingsPage", params(AssignedCourse, AssignedCourseSummary)),
    concrete(name = "AuditLogPage", params(AuditEntry, AuditLogSummary)),
    concrete(name = "ComplianceReportsPage", params(ComplianceReport, ComplianceReportSummary)),
    concrete(name = "AccessReviewsPage", params(AccessReview, AccessReviewSummary)),
    concrete(name = "ProgramsPage", params(TrainingProgram, ProgramSummary)),
    concrete(name = "SessionsPage", params(TrainingSession, SessionSummary)),
    concrete(name = "AssessmentsPage", params(AssessmentResult, AssessmentSummary)),
)]
pub struct PageView<R: OutputType, S: OutputType> {
    pub records: Vec<R>,
    /// One badge per row, in row order.
    pub badges: Vec<Badge>,
    pub total: u32,
    pub shown: u32,
    pub summary: S,
}

pub fn view<P: Page>(filter: &P::Filter, ctx: &PageContext) -> PageView<P::Record, P::Summary> {
    view_records::<P>(P::records(), filter, ctx)
}

/// Like [`view`], over a working copy of the dataset instead of the literal.
pub fn view_records<P: Page>(
    all: Vec<P::Record>,
    filter: &P::Filter,
    ctx: &PageContext,
) -> PageView<P::Record, P::Summary> {
    let summary = P::summarize(&all, ctx);
    let total = all.len() as u32;
    let mut records: Vec<_> = all
        .into_iter()
        .filter(|record| P::matches(filter, record, ctx))
        .collect();
    P::sort(filter, &mut records);
    let badges = records.iter().map(|record| P::badge(record, ctx)).collect();
    PageView {
        shown: records.len() as u32,
        records,
        badges,
        total,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_parse_case_insensitively() {
        assert_eq!("HR".parse::<Role>().unwrap(), Role::Hr);
        assert_eq!(" trainer ".parse::<Role>().unwrap(), Role::Trainer);
        assert!("ceo".parse::<Role>().is_err());
    }
}
