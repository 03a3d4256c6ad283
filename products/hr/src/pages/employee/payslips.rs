use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, PLACEHOLDER, StatusTone, Toned, format_cents, matches_choice, ymd},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "employee-payslips";

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayslipStatus {
    Paid,
    Processing,
}

impl Toned for PayslipStatus {
    fn label(&self) -> &'static str {
        match self {
            PayslipStatus::Paid => "Paid",
            PayslipStatus::Processing => "Processing",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            PayslipStatus::Paid => StatusTone::Success,
            PayslipStatus::Processing => StatusTone::Warning,
        }
    }
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct Payslip {
    pub id: String,
    /// Pay period label, e.g. `February 2025`.
    pub period: String,
    pub gross_cents: i64,
    pub deductions_cents: i64,
    pub net_cents: i64,
    pub paid_on: NaiveDate,
    pub status: PayslipStatus,
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct PayslipFilter {
    /// Four-digit year of the pay date; anything else matches nothing.
    pub year: Option<String>,
    pub status: Option<PayslipStatus>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct PayslipSummary {
    pub ytd_gross_cents: i64,
    pub ytd_deductions_cents: i64,
    pub ytd_net_cents: i64,
    pub latest_net_cents: Option<i64>,
    /// `latest_net_cents` as currency, or the placeholder.
    pub latest_net_pay: String,
}

pub struct PayslipsPage;

impl Page for PayslipsPage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "My Payslips",
        role: Role::Employee,
        description: "Monthly pay statements",
    };

    type Record = Payslip;
    type Filter = PayslipFilter;
    type Summary = PayslipSummary;

    #[rustfmt::skip]
    fn records() -> Vec<Payslip> {
        vec![
            payslip("PS-2025-03", "March 2025", 850_000, 212_500, ymd(2025, 3, 31), PayslipStatus::Processing),
            payslip("PS-2025-02", "February 2025", 850_000, 212_500, ymd(2025, 2, 28), PayslipStatus::Paid),
            payslip("PS-2025-01", "January 2025", 850_000, 212_500, ymd(2025, 1, 31), PayslipStatus::Paid),
            payslip("PS-2024-12", "December 2024", 1_062_500, 278_125, ymd(2024, 12, 31), PayslipStatus::Paid),
            payslip("PS-2024-11", "November 2024", 812_500, 203_125, ymd(2024, 11, 29), PayslipStatus::Paid),
            payslip("PS-2024-10", "October 2024", 812_500, 203_125, ymd(2024, 10, 31), PayslipStatus::Paid),
        ]
    }

    fn matches(filter: &PayslipFilter, record: &Payslip, _ctx: &PageContext) -> bool {
        let in_year = filter
            .year
            .as_deref()
            .is_none_or(|year| year.trim().parse::<i32>() == Ok(record.paid_on.year()));
        in_year && matches_choice(filter.status.as_ref(), &record.status)
    }

    fn badge(record: &Payslip, _ctx: &PageContext) -> Badge {
        record.status.badge()
    }

    /// Year-to-date figures cover slips already paid in the `as_of` year.
    fn summarize(records: &[Payslip], ctx: &PageContext) -> PayslipSummary {
        let paid = || {
            records
                .iter()
                .filter(|p| p.status == PayslipStatus::Paid && p.paid_on <= ctx.as_of)
        };
        let ytd = || paid().filter(|p| p.paid_on.year() == ctx.as_of.year());
        let latest_net_cents = paid().max_by_key(|p| p.paid_on).map(|p| p.net_cents);
        PayslipSummary {
            ytd_gross_cents: ytd().map(|p| p.gross_cents).sum(),
            ytd_deductions_cents: ytd().map(|p| p.deductions_cents).sum(),
            ytd_net_cents: ytd().map(|p| p.net_cents).sum(),
            latest_net_cents,
            latest_net_pay: latest_net_cents.map_or_else(|| PLACEHOLDER.to_string(), format_cents),
        }
    }

    fn sort(_filter: &PayslipFilter, records: &mut [Payslip]) {
        records.sort_by(|a, b| b.paid_on.cmp(&a.paid_on));
    }
}

fn payslip(
    id: &str,
    period: &str,
    gross_cents: i64,
    deductions_cents: i64,
    paid_on: NaiveDate,
    status: PayslipStatus,
) -> Payslip {
    Payslip {
        id: id.into(),
        period: period.into(),
        gross_cents,
        deductions_cents,
        net_cents: gross_cents - deductions_cents,
        paid_on,
        status,
    }
}
