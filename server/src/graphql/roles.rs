//! One query object per role, one field per page.

use async_graphql::{Context, Object};
use products_hr::{
    Page, PageView, ProfileInput,
    pages::{
        admin::{
            benefits::{BenefitFilter, BenefitsPage},
            compliance::{ComplianceFilter, CompliancePage},
            departments::{DepartmentFilter, DepartmentsPage},
            payroll::{PayrollFilter, PayrollPage},
            users::{SystemUserFilter, SystemUsersPage},
        },
        auditor::{
            access_reviews::{AccessReviewFilter, AccessReviewsPage},
            audit_log::{AuditLogFilter, AuditLogPage},
            compliance_reports::{ComplianceReportFilter, ComplianceReportsPage},
        },
        employee::{
            attendance::{AttendanceCalendar, AttendanceFilter, AttendancePage, attendance_calendar},
            leave_balance::{LeaveBalanceFilter, LeaveBalancePage},
            leave_history::{LeaveHistoryFilter, LeaveHistoryPage},
            payslips::{PayslipFilter, PayslipsPage},
            profile::{ProfileAction, ProfileView, profile_view},
            trainings::{AssignedCourseFilter, MyTrainingsPage},
        },
        hr::{
            employees::{EmployeeFilter, EmployeesPage},
            hiring::{CandidateFilter, HiringPage},
            job_postings::{JobPostingFilter, JobPostingsPage},
            onboarding::{OnboardingFilter, OnboardingPage},
            performance::{PerformanceFilter, PerformancePage},
            predictions::{PredictionFilter, PredictionsPage},
        },
        manager::{
            goals::{TeamGoalFilter, TeamGoalsPage},
            leave_approvals::{
                ApprovalBoard, LeaveApprovalSummary, LeaveDecision, LeaveRequest,
                LeaveRequestFilter,
            },
            team::{TeamFilter, TeamPage},
            team_attendance::{TeamAttendanceFilter, TeamAttendancePage},
        },
        trainer::{
            assessments::{AssessmentFilter, AssessmentsPage},
            programs::{ProgramFilter, ProgramsPage},
            sessions::{SessionFilter, SessionsPage},
        },
    },
};
use tracing::instrument;

use super::{graphql_data, graphql_error};

type PageResult<P> = async_graphql::Result<PageView<<P as Page>::Record, <P as Page>::Summary>>;

fn render<P: Page>(ctx: &Context<'_>, filter: &P::Filter) -> PageResult<P> {
    Ok(graphql_data(ctx)?.module.view::<P>(filter))
}

pub struct AdminQuery;

#[Object]
impl AdminQuery {
    #[instrument(name = "graphql.admin.benefits", skip_all)]
    async fn benefits(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: BenefitFilter,
    ) -> PageResult<BenefitsPage> {
        render::<BenefitsPage>(ctx, &filter)
    }

    #[instrument(name = "graphql.admin.compliance", skip_all)]
    async fn compliance(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: ComplianceFilter,
    ) -> PageResult<CompliancePage> {
        render::<CompliancePage>(ctx, &filter)
    }

    #[instrument(name = "graphql.admin.users", skip_all)]
    async fn users(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: SystemUserFilter,
    ) -> PageResult<SystemUsersPage> {
        render::<SystemUsersPage>(ctx, &filter)
    }

    #[instrument(name = "graphql.admin.departments", skip_all)]
    async fn departments(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: DepartmentFilter,
    ) -> PageResult<DepartmentsPage> {
        render::<DepartmentsPage>(ctx, &filter)
    }

    #[instrument(name = "graphql.admin.payroll", skip_all)]
    async fn payroll(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: PayrollFilter,
    ) -> PageResult<PayrollPage> {
        render::<PayrollPage>(ctx, &filter)
    }
}

pub struct HrQuery;

#[Object]
impl HrQuery {
    #[instrument(name = "graphql.hr.employees", skip_all)]
    async fn employees(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: EmployeeFilter,
    ) -> PageResult<EmployeesPage> {
        render::<EmployeesPage>(ctx, &filter)
    }

    #[instrument(name = "graphql.hr.hiring", skip_all)]
    async fn hiring(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: CandidateFilter,
    ) -> PageResult<HiringPage> {
        render::<HiringPage>(ctx, &filter)
    }

    #[instrument(name = "graphql.hr.job_postings", skip_all)]
    async fn job_postings(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: JobPostingFilter,
    ) -> PageResult<JobPostingsPage> {
        render::<JobPostingsPage>(ctx, &filter)
    }

    #[instrument(name = "graphql.hr.onboarding", skip_all)]
    async fn onboarding(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: OnboardingFilter,
    ) -> PageResult<OnboardingPage> {
        render::<OnboardingPage>(ctx, &filter)
    }

    #[instrument(name = "graphql.hr.performance", skip_all)]
    async fn performance(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: PerformanceFilter,
    ) -> PageResult<PerformancePage> {
        render::<PerformancePage>(ctx, &filter)
    }

    #[instrument(name = "graphql.hr.predictions", skip_all)]
    async fn predictions(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: PredictionFilter,
    ) -> PageResult<PredictionsPage> {
        render::<PredictionsPage>(ctx, &filter)
    }
}

pub struct ManagerQuery;

#[Object]
impl ManagerQuery {
    #[instrument(name = "graphql.manager.team", skip_all)]
    async fn team(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: TeamFilter,
    ) -> PageResult<TeamPage> {
        render::<TeamPage>(ctx, &filter)
    }

    /// `decisions` are applied in order to a fresh copy of the request list
    /// before filtering; nothing outlives the query.
    #[instrument(
        name = "graphql.manager.leave_approvals",
        skip_all,
        fields(decisions = decisions.len())
    )]
    async fn leave_approvals(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: LeaveRequestFilter,
        #[graphql(default)] decisions: Vec<LeaveDecision>,
    ) -> async_graphql::Result<PageView<LeaveRequest, LeaveApprovalSummary>> {
        let data = graphql_data(ctx)?;
        let mut board = ApprovalBoard::new();
        board.apply(&decisions).map_err(graphql_error)?;
        Ok(board.view(&filter, data.module.context()))
    }

    #[instrument(name = "graphql.manager.attendance", skip_all)]
    async fn attendance(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: TeamAttendanceFilter,
    ) -> PageResult<TeamAttendancePage> {
        render::<TeamAttendancePage>(ctx, &filter)
    }

    #[instrument(name = "graphql.manager.goals", skip_all)]
    async fn goals(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: TeamGoalFilter,
    ) -> PageResult<TeamGoalsPage> {
        render::<TeamGoalsPage>(ctx, &filter)
    }
}

pub struct EmployeeQuery;

#[Object]
impl EmployeeQuery {
    #[instrument(name = "graphql.employee.leave_balance", skip_all)]
    async fn leave_balance(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: LeaveBalanceFilter,
    ) -> PageResult<LeaveBalancePage> {
        render::<LeaveBalancePage>(ctx, &filter)
    }

    #[instrument(name = "graphql.employee.leave_history", skip_all)]
    async fn leave_history(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: LeaveHistoryFilter,
    ) -> PageResult<LeaveHistoryPage> {
        render::<LeaveHistoryPage>(ctx, &filter)
    }

    #[instrument(name = "graphql.employee.attendance", skip_all)]
    async fn attendance(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: AttendanceFilter,
    ) -> PageResult<AttendancePage> {
        render::<AttendancePage>(ctx, &filter)
    }

    #[instrument(name = "graphql.employee.attendance_calendar", skip(self))]
    async fn attendance_calendar(
        &self,
        year: i32,
        month: u32,
    ) -> async_graphql::Result<AttendanceCalendar> {
        attendance_calendar(year, month).map_err(graphql_error)
    }

    #[instrument(name = "graphql.employee.payslips", skip_all)]
    async fn payslips(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: PayslipFilter,
    ) -> PageResult<PayslipsPage> {
        render::<PayslipsPage>(ctx, &filter)
    }

    #[instrument(name = "graphql.employee.trainings", skip_all)]
    async fn trainings(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: AssignedCourseFilter,
    ) -> PageResult<MyTrainingsPage> {
        render::<MyTrainingsPage>(ctx, &filter)
    }

    /// One profile interaction; a rejected save comes back as an input error.
    #[instrument(name = "graphql.employee.profile", skip(self, draft))]
    async fn profile(
        &self,
        #[graphql(default)] action: ProfileAction,
        #[graphql(default)] draft: ProfileInput,
    ) -> async_graphql::Result<ProfileView> {
        profile_view(action, &draft).map_err(graphql_error)
    }
}

pub struct AuditorQuery;

#[Object]
impl AuditorQuery {
    #[instrument(name = "graphql.auditor.audit_log", skip_all)]
    async fn audit_log(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: AuditLogFilter,
    ) -> PageResult<AuditLogPage> {
        render::<AuditLogPage>(ctx, &filter)
    }

    #[instrument(name = "graphql.auditor.compliance_reports", skip_all)]
    async fn compliance_reports(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: ComplianceReportFilter,
    ) -> PageResult<ComplianceReportsPage> {
        render::<ComplianceReportsPage>(ctx, &filter)
    }

    #[instrument(name = "graphql.auditor.access_reviews", skip_all)]
    async fn access_reviews(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: AccessReviewFilter,
    ) -> PageResult<AccessReviewsPage> {
        render::<AccessReviewsPage>(ctx, &filter)
    }
}

pub struct TrainerQuery;

#[Object]
impl TrainerQuery {
    #[instrument(name = "graphql.trainer.programs", skip_all)]
    async fn programs(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: ProgramFilter,
    ) -> PageResult<ProgramsPage> {
        render::<ProgramsPage>(ctx, &filter)
    }

    #[instrument(name = "graphql.trainer.sessions", skip_all)]
    async fn sessions(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: SessionFilter,
    ) -> PageResult<SessionsPage> {
        render::<SessionsPage>(ctx, &filter)
    }

    #[instrument(name = "graphql.trainer.assessments", skip_all)]
    async fn assessments(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] filter: AssessmentFilter,
    ) -> PageResult<AssessmentsPage> {
        render::<AssessmentsPage>(ctx, &filter)
    }
}

#[cfg(test)]
mod tests {
    use async_graphql::{Request, Value};
    use serde_json::json;

    use crate::graphql::tests::test_schema;

    async fn run(query: &str) -> serde_json::Value {
        let response = test_schema().execute(Request::new(query)).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        response.data.into_json().unwrap()
    }

    #[tokio::test]
    async fn benefits_summary_covers_all_plans() {
        let body = run("{ admin { benefits { total summary { activePlans } } } }").await;
        assert_eq!(
            body,
            json!({"admin": {"benefits": {"total": 8, "summary": {"activePlans": 6}}}})
        );
    }

    #[tokio::test]
    async fn filters_narrow_rows_but_not_summary() {
        let body = run(
            r#"{ trainer { assessments(filter: { passed: true }) { shown total summary { passRate } } } }"#,
        )
        .await;
        let page = &body["trainer"]["assessments"];
        assert_eq!(page["total"], 7);
        assert_eq!(page["shown"], 5);
        assert_eq!(page["summary"]["passRate"], 71.4);
    }

    #[tokio::test]
    async fn decisions_apply_before_filtering() {
        let body = run(
            r#"{ manager { leaveApprovals(
                filter: { status: PENDING },
                decisions: [{ requestId: "LR-303", decision: REJECT }, { requestId: "LR-305", decision: APPROVE }]
            ) { shown records { id } summary { rejected } } } }"#,
        )
        .await;
        let page = &body["manager"]["leaveApprovals"];
        assert_eq!(page["shown"], 1);
        assert_eq!(page["records"][0]["id"], "LR-301");
        assert_eq!(page["summary"]["rejected"], 2);
    }

    #[tokio::test]
    async fn deciding_twice_is_rejected() {
        let response = test_schema()
            .execute(Request::new(
                r#"{ manager { leaveApprovals(decisions: [
                    { requestId: "LR-301", decision: APPROVE },
                    { requestId: "LR-301", decision: REJECT }
                ]) { shown } } }"#,
            ))
            .await;
        assert_eq!(response.errors.len(), 1);
        let code = response.errors[0]
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .cloned();
        assert_eq!(code, Some(Value::from("INVALID_INPUT")));
    }

    #[tokio::test]
    async fn profile_save_validates_draft() {
        let body = run(
            r#"{ employee { profile(action: SAVE, draft: { phone: "+1 555 0100" }) { editing fields { phone } } } }"#,
        )
        .await;
        assert_eq!(
            body,
            json!({"employee": {"profile": {"editing": false, "fields": {"phone": "+1 555 0100"}}}})
        );

        let response = test_schema()
            .execute(Request::new(
                r#"{ employee { profile(action: SAVE, draft: { email: "nope" }) { editing } } }"#,
            ))
            .await;
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.contains("email must contain @"));
    }

    #[tokio::test]
    async fn attendance_calendar_marks_weekends() {
        let body = run(
            "{ employee { attendanceCalendar(year: 2025, month: 3) { label cells { day status } } } }",
        )
        .await;
        let calendar = &body["employee"]["attendanceCalendar"];
        assert_eq!(calendar["label"], "March 2025");
        let cells = calendar["cells"].as_array().unwrap();
        assert_eq!(cells[0]["day"], serde_json::Value::Null);
        let first = &cells[6];
        assert_eq!(first["day"], 1);
        assert_eq!(first["status"], "WEEKEND");
        let monday = &cells[8];
        assert_eq!(monday["day"], 3);
        assert_eq!(monday["status"], "PRESENT");
    }
}
