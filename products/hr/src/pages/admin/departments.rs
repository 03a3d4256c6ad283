use async_graphql::{InputObject, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, PLACEHOLDER, StatusTone, Toned, matches_search},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "admin-departments";

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub head: String,
    pub headcount: u32,
    pub budget_cents: i64,
    pub open_positions: u32,
}

/// Whether a department is recruiting, shown as its badge.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Staffing {
    Hiring,
    FullyStaffed,
}

impl Toned for Staffing {
    fn label(&self) -> &'static str {
        match self {
            Staffing::Hiring => "Hiring",
            Staffing::FullyStaffed => "Fully Staffed",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            Staffing::Hiring => StatusTone::Info,
            Staffing::FullyStaffed => StatusTone::Success,
        }
    }
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct DepartmentFilter {
    pub search: Option<String>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct DepartmentSummary {
    pub departments: u32,
    pub total_headcount: u32,
    pub total_budget_cents: i64,
    pub open_positions: u32,
    /// Name of the department with the most people, `-` when there are none.
    pub largest: String,
}

pub struct DepartmentsPage;

impl Page for DepartmentsPage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "Departments",
        role: Role::Admin,
        description: "Headcount, budget and open positions per department",
    };

    type Record = Department;
    type Filter = DepartmentFilter;
    type Summary = DepartmentSummary;

    #[rustfmt::skip]
    fn records() -> Vec<Department> {
        vec![
            department("DEP-ENG", "Engineering", "Michael Chen", 48, 720_000_000, 5),
            department("DEP-SAL", "Sales", "Jennifer Lee", 32, 410_000_000, 3),
            department("DEP-MKT", "Marketing", "Daniel Kim", 14, 180_000_000, 1),
            department("DEP-HR", "Human Resources", "Sarah Johnson", 9, 95_000_000, 0),
            department("DEP-FIN", "Finance", "Robert Taylor", 11, 150_000_000, 0),
            department("DEP-OPS", "Operations", "Maria Garcia", 22, 260_000_000, 2),
        ]
    }

    fn matches(filter: &DepartmentFilter, record: &Department, _ctx: &PageContext) -> bool {
        matches_search(filter.search.as_deref(), &[record.name.as_str(), record.head.as_str()])
    }

    fn badge(record: &Department, _ctx: &PageContext) -> Badge {
        if record.open_positions > 0 {
            Staffing::Hiring.badge()
        } else {
            Staffing::FullyStaffed.badge()
        }
    }

    fn summarize(records: &[Department], _ctx: &PageContext) -> DepartmentSummary {
        DepartmentSummary {
            departments: records.len() as u32,
            total_headcount: records.iter().map(|d| d.headcount).sum(),
            total_budget_cents: records.iter().map(|d| d.budget_cents).sum(),
            open_positions: records.iter().map(|d| d.open_positions).sum(),
            largest: records
                .iter()
                .max_by_key(|d| d.headcount)
                .map(|d| d.name.clone())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        }
    }

    fn sort(_filter: &DepartmentFilter, records: &mut [Department]) {
        records.sort_by(|a, b| b.headcount.cmp(&a.headcount));
    }
}

fn department(
    id: &str,
    name: &str,
    head: &str,
    headcount: u32,
    budget_cents: i64,
    open_positions: u32,
) -> Department {
    Department {
        id: id.into(),
        name: name.into(),
        head: head.into(),
        headcount,
        budget_cents,
        open_positions,
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
    fn totals_match_dataset() {
        let summary = DepartmentsPage::summarize(&DepartmentsPage::records(), &ctx());
        assert_eq!(summary.total_headcount, 136);
        assert_eq!(summary.open_positions, 11);
        assert_eq!(summary.largest, "Engineering");
    }

    #[test]
    fn empty_dataset_falls_back_to_placeholder() {
        let summary = DepartmentsPage::summarize(&[], &ctx());
        assert_eq!(summary.largest, "-");
        assert_eq!(summary.total_budget_cents, 0);
    }

    #[test]
    fn rows_sorted_by_headcount_descending() {
        let page = view::<DepartmentsPage>(&DepartmentFilter::default(), &ctx());
        let heads: Vec<_> = page.records.iter().map(|d| d.headcount).collect();
        assert_eq!(heads, [48, 32, 22, 14, 11, 9]);
        assert_eq!(page.badges[0].label, "Hiring");
        assert_eq!(page.badges[5].label, "Fully Staffed");
    }
}
