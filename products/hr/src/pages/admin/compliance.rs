use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, StatusTone, Toned, matches_choice, matches_search, percentage, ymd},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "admin-compliance";

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceCategory {
    Labor,
    Safety,
    Privacy,
    Payroll,
    Training,
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    InReview,
    AtRisk,
    NonCompliant,
}

impl Toned for ComplianceStatus {
    fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::InReview => "In Review",
            ComplianceStatus::AtRisk => "At Risk",
            ComplianceStatus::NonCompliant => "Non-Compliant",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            ComplianceStatus::Compliant => StatusTone::Success,
            ComplianceStatus::InReview => StatusTone::Info,
            ComplianceStatus::AtRisk => StatusTone::Warning,
            ComplianceStatus::NonCompliant => StatusTone::Danger,
        }
    }
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct ComplianceItem {
    pub id: String,
    pub title: String,
    pub category: ComplianceCategory,
    pub owner: String,
    pub due_date: NaiveDate,
    /// 0-100.
    pub completion: u32,
    pub status: ComplianceStatus,
}

impl ComplianceItem {
    pub fn is_overdue(&self, as_of: NaiveDate) -> bool {
        self.due_date < as_of && self.status != ComplianceStatus::Compliant
    }
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[graphql(name = "ComplianceItemFilter")]
#[serde(default)]
pub struct ComplianceFilter {
    pub status: Option<ComplianceStatus>,
    pub category: Option<ComplianceCategory>,
    pub search: Option<String>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct ComplianceSummary {
    pub total: u32,
    pub compliant: u32,
    pub at_risk: u32,
    pub overdue: u32,
    /// Items flagged next to their status badge, in dataset order.
    pub overdue_ids: Vec<String>,
    pub compliance_rate: f64,
}

pub struct CompliancePage;

impl Page for CompliancePage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "Compliance Overview",
        role: Role::Admin,
        description: "Regulatory obligations, owners and deadlines",
    };

    type Record = ComplianceItem;
    type Filter = ComplianceFilter;
    type Summary = ComplianceSummary;

    #[rustfmt::skip]
    fn records() -> Vec<ComplianceItem> {
        vec![
            item("CMP-101", "I-9 Employment Verification", ComplianceCategory::Labor, "Sarah Johnson", ymd(2025, 1, 31), 100, ComplianceStatus::Compliant),
            item("CMP-102", "OSHA Workplace Safety Audit", ComplianceCategory::Safety, "Michael Chen", ymd(2025, 2, 28), 65, ComplianceStatus::AtRisk),
            item("CMP-103", "GDPR Data Retention Review", ComplianceCategory::Privacy, "Emily Davis", ymd(2025, 4, 15), 40, ComplianceStatus::InReview),
            item("CMP-104", "Quarterly Payroll Tax Filing", ComplianceCategory::Payroll, "David Wilson", ymd(2025, 3, 31), 100, ComplianceStatus::Compliant),
            item("CMP-105", "Harassment Prevention Training", ComplianceCategory::Training, "Lisa Anderson", ymd(2025, 3, 1), 72, ComplianceStatus::NonCompliant),
            item("CMP-106", "EEO-1 Component 1 Report", ComplianceCategory::Labor, "Sarah Johnson", ymd(2025, 5, 31), 20, ComplianceStatus::InReview),
            item("CMP-107", "Fire Evacuation Drill", ComplianceCategory::Safety, "Michael Chen", ymd(2025, 2, 10), 100, ComplianceStatus::Compliant),
        ]
    }

    fn matches(filter: &ComplianceFilter, record: &ComplianceItem, _ctx: &PageContext) -> bool {
        matches_choice(filter.status.as_ref(), &record.status)
            && matches_choice(filter.category.as_ref(), &record.category)
            && matches_search(
                filter.search.as_deref(),
                &[record.title.as_str(), record.owner.as_str()],
            )
    }

    fn badge(record: &ComplianceItem, _ctx: &PageContext) -> Badge {
        record.status.badge()
    }

    fn summarize(records: &[ComplianceItem], ctx: &PageContext) -> ComplianceSummary {
        let count = |status| records.iter().filter(|i| i.status == status).count() as u32;
        let compliant = count(ComplianceStatus::Compliant);
        let overdue_ids: Vec<String> = records
            .iter()
            .filter(|i| i.is_overdue(ctx.as_of))
            .map(|i| i.id.clone())
            .collect();
        ComplianceSummary {
            total: records.len() as u32,
            compliant,
            at_risk: count(ComplianceStatus::AtRisk),
            overdue: overdue_ids.len() as u32,
            overdue_ids,
            compliance_rate: percentage(f64::from(compliant), records.len() as f64),
        }
    }

    fn sort(_filter: &ComplianceFilter, records: &mut [ComplianceItem]) {
        records.sort_by_key(|item| item.due_date);
    }
}

fn item(
    id: &str,
    title: &str,
    category: ComplianceCategory,
    owner: &str,
    due_date: NaiveDate,
    completion: u32,
    status: ComplianceStatus,
) -> ComplianceItem {
    ComplianceItem {
        id: id.into(),
        title: title.into(),
        category,
        owner: owner.into(),
        due_date,
        completion,
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
    fn overdue_excludes_compliant_items() {
        let summary = CompliancePage::summarize(&CompliancePage::records(), &ctx());
        // CMP-102 and CMP-105 are past due and still open; CMP-107 is past due but done.
        assert_eq!(summary.overdue, 2);
        assert_eq!(summary.overdue_ids, ["CMP-102", "CMP-105"]);
        assert_eq!(summary.compliant, 3);
        assert_eq!(summary.total, 7);
        assert_eq!(summary.compliance_rate, 42.9);
    }

    #[test]
    fn status_filter_is_exact() {
        let filter = ComplianceFilter {
            status: Some(ComplianceStatus::InReview),
            ..Default::default()
        };
        let page = view::<CompliancePage>(&filter, &ctx());
        let ids: Vec<_> = page.records.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["CMP-103", "CMP-106"]);
    }

    #[test]
    fn rows_are_ordered_by_due_date() {
        let page = view::<CompliancePage>(&ComplianceFilter::default(), &ctx());
        let dates: Vec<_> = page.records.iter().map(|i| i.due_date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn overdue_rows_keep_their_status_badge() {
        let page = view::<CompliancePage>(
            &ComplianceFilter {
                status: Some(ComplianceStatus::AtRisk),
                ..Default::default()
            },
            &ctx(),
        );
        assert_eq!(page.records[0].id, "CMP-102");
        assert!(page.records[0].is_overdue(ctx().as_of));
        assert_eq!(page.badges[0].label, "At Risk");
        assert_eq!(page.badges[0].tone, StatusTone::Warning);
        assert!(page.summary.overdue_ids.contains(&page.records[0].id));
    }
}
