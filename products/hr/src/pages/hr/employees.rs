use std::collections::BTreeSet;

use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, StatusTone, Toned, matches_choice, matches_search, ymd},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "hr-employees";

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Active,
    OnLeave,
    Probation,
    Terminated,
}

impl Toned for EmploymentStatus {
    fn label(&self) -> &'static str {
        match self {
            EmploymentStatus::Active => "Active",
            EmploymentStatus::OnLeave => "On Leave",
            EmploymentStatus::Probation => "Probation",
            EmploymentStatus::Terminated => "Terminated",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            EmploymentStatus::Active => StatusTone::Success,
            EmploymentStatus::OnLeave => StatusTone::Warning,
            EmploymentStatus::Probation => StatusTone::Info,
            EmploymentStatus::Terminated => StatusTone::Danger,
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeSort {
    #[default]
    Name,
    HireDate,
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub status: EmploymentStatus,
    pub hire_date: NaiveDate,
    pub location: String,
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct EmployeeFilter {
    pub department: Option<String>,
    pub status: Option<EmploymentStatus>,
    pub search: Option<String>,
    pub sort: Option<EmployeeSort>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct EmployeeSummary {
    pub headcount: u32,
    pub active: u32,
    pub on_leave: u32,
    pub departments: u32,
}

pub struct EmployeesPage;

impl Page for EmployeesPage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "Employee Directory",
        role: Role::Hr,
        description: "Everyone on payroll with department and status",
    };

    type Record = Employee;
    type Filter = EmployeeFilter;
    type Summary = EmployeeSummary;

    #[rustfmt::skip]
    fn records() -> Vec<Employee> {
        vec![
            employee("EMP-001", "Sarah Johnson", "Human Resources", "HR Director", EmploymentStatus::Active, ymd(2018, 4, 2), "New York"),
            employee("EMP-002", "Michael Chen", "Engineering", "Engineering Manager", EmploymentStatus::Active, ymd(2019, 7, 15), "San Francisco"),
            employee("EMP-003", "Emily Davis", "Engineering", "Senior Software Engineer", EmploymentStatus::Active, ymd(2021, 1, 11), "Remote"),
            employee("EMP-004", "David Wilson", "Finance", "Payroll Specialist", EmploymentStatus::OnLeave, ymd(2020, 9, 1), "Chicago"),
            employee("EMP-005", "Jennifer Lee", "Sales", "Sales Director", EmploymentStatus::Active, ymd(2017, 3, 20), "New York"),
            employee("EMP-006", "Carlos Rivera", "Sales", "Account Executive", EmploymentStatus::Probation, ymd(2025, 1, 6), "Austin"),
            employee("EMP-007", "Aisha Khan", "Marketing", "Content Strategist", EmploymentStatus::Active, ymd(2022, 6, 13), "Remote"),
            employee("EMP-008", "Tom Becker", "Operations", "Logistics Coordinator", EmploymentStatus::Terminated, ymd(2021, 11, 8), "Chicago"),
            employee("EMP-009", "Lisa Anderson", "Learning & Development", "Training Lead", EmploymentStatus::Active, ymd(2019, 2, 25), "New York"),
        ]
    }

    fn matches(filter: &EmployeeFilter, record: &Employee, _ctx: &PageContext) -> bool {
        matches_choice(filter.department.as_ref(), &record.department)
            && matches_choice(filter.status.as_ref(), &record.status)
            && matches_search(
                filter.search.as_deref(),
                &[
                    record.name.as_str(),
                    record.email.as_str(),
                    record.position.as_str(),
                ],
            )
    }

    fn badge(record: &Employee, _ctx: &PageContext) -> Badge {
        record.status.badge()
    }

    fn summarize(records: &[Employee], _ctx: &PageContext) -> EmployeeSummary {
        let count = |status| records.iter().filter(|e| e.status == status).count() as u32;
        let departments: BTreeSet<_> = records.iter().map(|e| e.department.as_str()).collect();
        EmployeeSummary {
            headcount: records
                .iter()
                .filter(|e| e.status != EmploymentStatus::Terminated)
                .count() as u32,
            active: count(EmploymentStatus::Active),
            on_leave: count(EmploymentStatus::OnLeave),
            departments: departments.len() as u32,
        }
    }

    fn sort(filter: &EmployeeFilter, records: &mut [Employee]) {
        match filter.sort.unwrap_or_default() {
            EmployeeSort::Name => records.sort_by(|a, b| a.name.cmp(&b.name)),
            EmployeeSort::HireDate => records.sort_by_key(|e| e.hire_date),
        }
    }
}

fn employee(
    id: &str,
    name: &str,
    department: &str,
    position: &str,
    status: EmploymentStatus,
    hire_date: NaiveDate,
    location: &str,
) -> Employee {
    let email = format!("{}@acme.test", name.to_lowercase().replace(' ', "."));
    Employee {
        id: id.into(),
        name: name.into(),
        email,
        department: department.into(),
        position: position.into(),
        status,
        hire_date,
        location: location.into(),
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
    fn headcount_excludes_terminated() {
        let summary = EmployeesPage::summarize(&EmployeesPage::records(), &ctx());
        assert_eq!(summary.headcount, 8);
        assert_eq!(summary.active, 6);
        assert_eq!(summary.on_leave, 1);
        assert_eq!(summary.departments, 7);
    }

    #[test]
    fn department_filter_sorted_by_name() {
        let filter = EmployeeFilter {
            department: Some("Engineering".into()),
            ..Default::default()
        };
        let page = view::<EmployeesPage>(&filter, &ctx());
        let names: Vec<_> = page.records.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Emily Davis", "Michael Chen"]);
    }

    #[test]
    fn hire_date_sort_puts_longest_tenure_first() {
        let filter = EmployeeFilter {
            sort: Some(EmployeeSort::HireDate),
            ..Default::default()
        };
        let page = view::<EmployeesPage>(&filter, &ctx());
        assert_eq!(page.records[0].name, "Jennifer Lee");
        assert_eq!(page.records.last().map(|e| e.id.as_str()), Some("EMP-006"));
    }

    #[test]
    fn search_hits_generated_email() {
        let filter = EmployeeFilter {
            search: Some("aisha.khan@".into()),
            ..Default::default()
        };
        assert_eq!(view::<EmployeesPage>(&filter, &ctx()).shown, 1);
    }
}
