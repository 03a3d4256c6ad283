use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, StatusTone, Toned, matches_choice, matches_search, ymd},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "admin-users";

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    Inactive,
    Suspended,
}

impl Toned for AccountStatus {
    fn label(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Inactive => "Inactive",
            AccountStatus::Suspended => "Suspended",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            AccountStatus::Active => StatusTone::Success,
            AccountStatus::Inactive => StatusTone::Neutral,
            AccountStatus::Suspended => StatusTone::Danger,
        }
    }
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct SystemUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub status: AccountStatus,
    pub last_login: Option<NaiveDate>,
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct SystemUserFilter {
    pub role: Option<Role>,
    pub status: Option<AccountStatus>,
    pub search: Option<String>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct UserSummary {
    pub total: u32,
    pub active: u32,
    pub inactive: u32,
    pub suspended: u32,
    pub admins: u32,
}

pub struct SystemUsersPage;

impl Page for SystemUsersPage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "User Management",
        role: Role::Admin,
        description: "Dashboard accounts and the role each one signs in as",
    };

    type Record = SystemUser;
    type Filter = SystemUserFilter;
    type Summary = UserSummary;

    #[rustfmt::skip]
    fn records() -> Vec<SystemUser> {
        vec![
            user("USR-01", "Alex Morgan", "alex.morgan@acme.test", Role::Admin, "IT", AccountStatus::Active, Some(ymd(2025, 3, 13))),
            user("USR-02", "Sarah Johnson", "sarah.johnson@acme.test", Role::Hr, "Human Resources", AccountStatus::Active, Some(ymd(2025, 3, 14))),
            user("USR-03", "Michael Chen", "michael.chen@acme.test", Role::Manager, "Engineering", AccountStatus::Active, Some(ymd(2025, 3, 12))),
            user("USR-04", "Emily Davis", "emily.davis@acme.test", Role::Employee, "Engineering", AccountStatus::Active, Some(ymd(2025, 3, 14))),
            user("USR-05", "Robert Taylor", "robert.taylor@acme.test", Role::Auditor, "Finance", AccountStatus::Inactive, Some(ymd(2024, 12, 20))),
            user("USR-06", "Lisa Anderson", "lisa.anderson@acme.test", Role::Trainer, "Learning & Development", AccountStatus::Active, Some(ymd(2025, 3, 10))),
            user("USR-07", "James Brown", "james.brown@acme.test", Role::Employee, "Sales", AccountStatus::Suspended, None),
            user("USR-08", "Priya Patel", "priya.patel@acme.test", Role::Admin, "IT", AccountStatus::Active, Some(ymd(2025, 3, 11))),
        ]
    }

    fn matches(filter: &SystemUserFilter, record: &SystemUser, _ctx: &PageContext) -> bool {
        matches_choice(filter.role.as_ref(), &record.role)
            && matches_choice(filter.status.as_ref(), &record.status)
            && matches_search(
                filter.search.as_deref(),
                &[record.name.as_str(), record.email.as_str(), record.department.as_str()],
            )
    }

    fn badge(record: &SystemUser, _ctx: &PageContext) -> Badge {
        record.status.badge()
    }

    fn summarize(records: &[SystemUser], _ctx: &PageContext) -> UserSummary {
        let count = |status| records.iter().filter(|u| u.status == status).count() as u32;
        UserSummary {
            total: records.len() as u32,
            active: count(AccountStatus::Active),
            inactive: count(AccountStatus::Inactive),
            suspended: count(AccountStatus::Suspended),
            admins: records.iter().filter(|u| u.role == Role::Admin).count() as u32,
        }
    }
}

fn user(
    id: &str,
    name: &str,
    email: &str,
    role: Role,
    department: &str,
    status: AccountStatus,
    last_login: Option<NaiveDate>,
) -> SystemUser {
    SystemUser {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        role,
        department: department.into(),
        status,
        last_login,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::view;

    #[test]
    fn role_filter_and_search_combine() {
        let ctx = PageContext::new(ymd(2025, 3, 14));
        let filter = SystemUserFilter {
            role: Some(Role::Employee),
            search: Some("sales".into()),
            ..Default::default()
        };
        let page = view::<SystemUsersPage>(&filter, &ctx);
        assert_eq!(page.shown, 1);
        assert_eq!(page.records[0].name, "James Brown");
        assert_eq!(page.badges[0].label, "Suspended");
    }

    #[test]
    fn status_counts_cover_every_account() {
        let ctx = PageContext::new(ymd(2025, 3, 14));
        let summary = SystemUsersPage::summarize(&SystemUsersPage::records(), &ctx);
        assert_eq!(summary.active + summary.inactive + summary.suspended, summary.total);
        assert_eq!(summary.admins, 2);
    }
}
