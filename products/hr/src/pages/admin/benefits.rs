use async_graphql::{Enum, InputObject, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, StatusTone, Toned, average, matches_choice, matches_search, percentage},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "admin-benefits";

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitCategory {
    Health,
    Dental,
    Vision,
    Retirement,
    Life,
    Wellness,
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitStatus {
    Active,
    Pending,
    Inactive,
}

impl Toned for BenefitStatus {
    fn label(&self) -> &'static str {
        match self {
            BenefitStatus::Active => "Active",
            BenefitStatus::Pending => "Pending",
            BenefitStatus::Inactive => "Inactive",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            BenefitStatus::Active => StatusTone::Success,
            BenefitStatus::Pending => StatusTone::Warning,
            BenefitStatus::Inactive => StatusTone::Neutral,
        }
    }
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct BenefitPlan {
    pub id: String,
    pub name: String,
    pub category: BenefitCategory,
    pub provider: String,
    pub employee_cost_cents: i64,
    pub employer_cost_cents: i64,
    pub enrolled: u32,
    pub eligible: u32,
    pub status: BenefitStatus,
}

impl BenefitPlan {
    /// Combined monthly premium for everyone enrolled.
    pub fn monthly_cost_cents(&self) -> i64 {
        (self.employee_cost_cents + self.employer_cost_cents) * i64::from(self.enrolled)
    }

    pub fn participation(&self) -> f64 {
        percentage(f64::from(self.enrolled), f64::from(self.eligible))
    }
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct BenefitFilter {
    pub category: Option<BenefitCategory>,
    pub status: Option<BenefitStatus>,
    pub search: Option<String>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct BenefitSummary {
    pub active_plans: u32,
    pub total_enrolled: u32,
    pub monthly_cost_cents: i64,
    pub average_participation: f64,
}

pub struct BenefitsPage;

impl Page for BenefitsPage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "Benefits Management",
        role: Role::Admin,
        description: "Benefit plans, enrollment and monthly cost",
    };

    type Record = BenefitPlan;
    type Filter = BenefitFilter;
    type Summary = BenefitSummary;

    #[rustfmt::skip]
    fn records() -> Vec<BenefitPlan> {
        vec![
            plan("BEN-001", "Premium Health PPO", BenefitCategory::Health, "BlueCross BlueShield", 15_000, 45_000, 142, 180, BenefitStatus::Active),
            plan("BEN-002", "Basic Health HMO", BenefitCategory::Health, "Kaiser Permanente", 8_000, 32_000, 96, 180, BenefitStatus::Active),
            plan("BEN-003", "Dental Plus", BenefitCategory::Dental, "Delta Dental", 2_500, 5_000, 165, 180, BenefitStatus::Active),
            plan("BEN-004", "Vision Care", BenefitCategory::Vision, "VSP", 1_000, 2_000, 120, 180, BenefitStatus::Active),
            plan("BEN-005", "401(k) Retirement", BenefitCategory::Retirement, "Fidelity", 0, 25_000, 150, 180, BenefitStatus::Active),
            plan("BEN-006", "Group Life Insurance", BenefitCategory::Life, "MetLife", 500, 1_500, 175, 180, BenefitStatus::Active),
            plan("BEN-007", "Wellness Program", BenefitCategory::Wellness, "Virgin Pulse", 0, 1_200, 0, 180, BenefitStatus::Pending),
            plan("BEN-008", "HSA Legacy Plan", BenefitCategory::Health, "HealthEquity", 0, 5_000, 12, 180, BenefitStatus::Inactive),
        ]
    }

    fn matches(filter: &BenefitFilter, record: &BenefitPlan, _ctx: &PageContext) -> bool {
        matches_choice(filter.category.as_ref(), &record.category)
            && matches_choice(filter.status.as_ref(), &record.status)
            && matches_search(
                filter.search.as_deref(),
                &[record.name.as_str(), record.provider.as_str()],
            )
    }

    fn badge(record: &BenefitPlan, _ctx: &PageContext) -> Badge {
        record.status.badge()
    }

    fn summarize(records: &[BenefitPlan], _ctx: &PageContext) -> BenefitSummary {
        BenefitSummary {
            active_plans: records
                .iter()
                .filter(|p| p.status == BenefitStatus::Active)
                .count() as u32,
            total_enrolled: records.iter().map(|p| p.enrolled).sum(),
            monthly_cost_cents: records.iter().map(BenefitPlan::monthly_cost_cents).sum(),
            average_participation: average(records.iter().map(BenefitPlan::participation)),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn plan(
    id: &str,
    name: &str,
    category: BenefitCategory,
    provider: &str,
    employee_cost_cents: i64,
    employer_cost_cents: i64,
    enrolled: u32,
    eligible: u32,
    status: BenefitStatus,
) -> BenefitPlan {
    BenefitPlan {
        id: id.into(),
        name: name.into(),
        category,
        provider: provider.into(),
        employee_cost_cents,
        employer_cost_cents,
        enrolled,
        eligible,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common::ymd, page::view};

    fn ctx() -> PageContext {
        PageContext::new(ymd(2025, 3, 14))
    }

    #[test]
    fn active_plan_count_matches_dataset() {
        let plans = BenefitsPage::records();
        let summary = BenefitsPage::summarize(&plans, &ctx());
        let active = plans
            .iter()
            .filter(|p| p.status == BenefitStatus::Active)
            .count() as u32;
        assert_eq!(summary.active_plans, active);
        assert_eq!(summary.active_plans, 6);
        assert_eq!(summary.total_enrolled, 860);
    }

    #[test]
    fn monthly_cost_sums_premiums_times_enrollment() {
        let plans = BenefitsPage::records();
        let expected: i64 = plans
            .iter()
            .map(|p| (p.employee_cost_cents + p.employer_cost_cents) * p.enrolled as i64)
            .sum();
        assert_eq!(
            BenefitsPage::summarize(&plans, &ctx()).monthly_cost_cents,
            expected
        );
    }

    #[test]
    fn category_filter_keeps_only_health_plans() {
        let filter = BenefitFilter {
            category: Some(BenefitCategory::Health),
            ..Default::default()
        };
        let page = view::<BenefitsPage>(&filter, &ctx());
        assert_eq!(page.shown, 3);
        assert_eq!(page.total, 8);
        assert!(page
            .records
            .iter()
            .all(|p| p.category == BenefitCategory::Health));
        assert_eq!(page.badges.len(), page.records.len());
    }

    #[test]
    fn search_matches_provider() {
        let filter = BenefitFilter {
            search: Some("delta".into()),
            ..Default::default()
        };
        let page = view::<BenefitsPage>(&filter, &ctx());
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.records[0].id, "BEN-003");
    }

    #[test]
    fn summary_ignores_filter() {
        let filter = BenefitFilter {
            status: Some(BenefitStatus::Inactive),
            ..Default::default()
        };
        let page = view::<BenefitsPage>(&filter, &ctx());
        assert_eq!(page.shown, 1);
        assert_eq!(page.summary.active_plans, 6);
    }
}
