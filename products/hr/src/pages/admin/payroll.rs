use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, StatusTone, Toned, matches_choice, ymd},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "admin-payroll";

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    Processed,
    Processing,
    Scheduled,
}

impl Toned for PayrollStatus {
    fn label(&self) -> &'static str {
        match self {
            PayrollStatus::Processed => "Processed",
            PayrollStatus::Processing => "Processing",
            PayrollStatus::Scheduled => "Scheduled",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            PayrollStatus::Processed => StatusTone::Success,
            PayrollStatus::Processing => StatusTone::Warning,
            PayrollStatus::Scheduled => StatusTone::Info,
        }
    }
}

/// One department's run for a pay date. Amounts are recorded figures.
#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct PayrollRun {
    pub id: String,
    pub department: String,
    pub pay_date: NaiveDate,
    pub employees: u32,
    pub gross_cents: i64,
    pub deductions_cents: i64,
    pub net_cents: i64,
    pub status: PayrollStatus,
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct PayrollFilter {
    pub status: Option<PayrollStatus>,
    pub department: Option<String>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct PayrollSummary {
    pub total_gross_cents: i64,
    pub total_deductions_cents: i64,
    pub total_net_cents: i64,
    pub processed_runs: u32,
    pub employees_paid: u32,
}

pub struct PayrollPage;

impl Page for PayrollPage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "Payroll Overview",
        role: Role::Admin,
        description: "Payroll runs by department",
    };

    type Record = PayrollRun;
    type Filter = PayrollFilter;
    type Summary = PayrollSummary;

    #[rustfmt::skip]
    fn records() -> Vec<PayrollRun> {
        vec![
            run("PAY-0301", "Engineering", ymd(2025, 2, 28), 48, 52_800_000, 13_200_000, 39_600_000, PayrollStatus::Processed),
            run("PAY-0302", "Sales", ymd(2025, 2, 28), 32, 24_960_000, 5_990_400, 18_969_600, PayrollStatus::Processed),
            run("PAY-0303", "Marketing", ymd(2025, 2, 28), 14, 9_800_000, 2_352_000, 7_448_000, PayrollStatus::Processed),
            run("PAY-0304", "Operations", ymd(2025, 3, 14), 22, 13_200_000, 3_168_000, 10_032_000, PayrollStatus::Processing),
            run("PAY-0305", "Human Resources", ymd(2025, 3, 14), 9, 6_300_000, 1_512_000, 4_788_000, PayrollStatus::Processing),
            run("PAY-0306", "Finance", ymd(2025, 3, 31), 11, 8_250_000, 1_980_000, 6_270_000, PayrollStatus::Scheduled),
        ]
    }

    fn matches(filter: &PayrollFilter, record: &PayrollRun, _ctx: &PageContext) -> bool {
        matches_choice(filter.status.as_ref(), &record.status)
            && filter
                .department
                .as_deref()
                .is_none_or(|dept| dept.eq_ignore_ascii_case(&record.department))
    }

    fn badge(record: &PayrollRun, _ctx: &PageContext) -> Badge {
        record.status.badge()
    }

    fn summarize(records: &[PayrollRun], _ctx: &PageContext) -> PayrollSummary {
        PayrollSummary {
            total_gross_cents: records.iter().map(|r| r.gross_cents).sum(),
            total_deductions_cents: records.iter().map(|r| r.deductions_cents).sum(),
            total_net_cents: records.iter().map(|r| r.net_cents).sum(),
            processed_runs: records
                .iter()
                .filter(|r| r.status == PayrollStatus::Processed)
                .count() as u32,
            employees_paid: records.iter().map(|r| r.employees).sum(),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run(
    id: &str,
    department: &str,
    pay_date: NaiveDate,
    employees: u32,
    gross_cents: i64,
    deductions_cents: i64,
    net_cents: i64,
    status: PayrollStatus,
) -> PayrollRun {
    PayrollRun {
        id: id.into(),
        department: department.into(),
        pay_date,
        employees,
        gross_cents,
        deductions_cents,
        net_cents,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::view;

    fn ctx() -> PageContext {
        PageContext::new(ymd(2025, 3, 14))
    }

    #[test]
    fn recorded_net_equals_gross_minus_deductions() {
        for run in PayrollPage::records() {
            assert_eq!(run.gross_cents - run.deductions_cents, run.net_cents, "{}", run.id);
        }
    }

    #[test]
    fn totals_reduce_every_run() {
        let runs = PayrollPage::records();
        let summary = PayrollPage::summarize(&runs, &ctx());
        assert_eq!(
            summary.total_gross_cents - summary.total_deductions_cents,
            summary.total_net_cents
        );
        assert_eq!(summary.processed_runs, 3);
        assert_eq!(summary.employees_paid, 136);
    }

    #[test]
    fn department_filter_ignores_case() {
        let filter = PayrollFilter {
            department: Some("finance".into()),
            ..Default::default()
        };
        let page = view::<PayrollPage>(&filter, &ctx());
        assert_eq!(page.shown, 1);
        assert_eq!(page.records[0].id, "PAY-0306");
    }
}
