use async_graphql::{Enum, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::{
    common::{format_date, ymd},
    error::HrResult,
    page::{PageInfo, Role},
    profile::{ProfileEditor, ProfileField, ProfileFields, ProfileInput},
};

pub const SLUG: &str = "employee-profile";

pub const INFO: PageInfo = PageInfo {
    slug: SLUG,
    title: "My Profile",
    role: Role::Employee,
    description: "Personal and employment details",
};

/// What the visitor did on the profile page.
#[derive(Enum, Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileAction {
    #[default]
    View,
    Edit,
    Cancel,
    Save,
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct ProfileView {
    pub editing: bool,
    pub fields: ProfileFields,
    pub editable_fields: Vec<ProfileField>,
    pub hire_date_label: String,
}

pub fn my_profile() -> ProfileFields {
    ProfileFields {
        employee_id: "EMP-0042".into(),
        name: "Alex Morgan".into(),
        email: "alex.morgan@acme.com".into(),
        phone: "+1 (555) 014-2207".into(),
        address: "742 Evergreen Terrace, Springfield, IL 62704".into(),
        department: "Engineering".into(),
        position: "Software Engineer".into(),
        manager: "Michael Chen".into(),
        hire_date: ymd(2022, 6, 13),
        emergency_contact: "Jordan Morgan, +1 (555) 018-9921".into(),
    }
}

/// Runs one page interaction against a fresh editor over the literal
/// profile. `draft` is applied for every action but `View`.
pub fn profile_view(action: ProfileAction, draft: &ProfileInput) -> HrResult<ProfileView> {
    let mut editor = ProfileEditor::new(my_profile());
    if action != ProfileAction::View {
        editor.begin_edit();
        editor.apply(draft)?;
    }
    match action {
        ProfileAction::View | ProfileAction::Edit => {}
        ProfileAction::Cancel => editor.cancel(),
        ProfileAction::Save => {
            editor.save()?;
        }
    }

    let fields = editor.displayed().clone();
    Ok(ProfileView {
        editing: editor.is_editing(),
        hire_date_label: format_date(fields.hire_date),
        editable_fields: ProfileField::ALL
            .into_iter()
            .filter(|field| field.is_editable())
            .collect(),
        fields,
    })
}
