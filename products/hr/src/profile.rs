//! Edit mode for the employee profile page.
//!
//! The editor works on its own copy of the profile: entering edit mode
//! pre-populates a draft, cancelling throws the draft away, and saving only
//! replaces the editor's copy.

use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HrError, HrResult};

#[derive(Clone, Debug, PartialEq, Eq, SimpleObject, Serialize)]
pub struct ProfileFields {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub department: String,
    pub position: String,
    pub manager: String,
    pub hire_date: NaiveDate,
    pub emergency_contact: String,
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    EmployeeId,
    Name,
    Email,
    Phone,
    Address,
    Department,
    Position,
    Manager,
    HireDate,
    EmergencyContact,
}

impl ProfileField {
    pub const ALL: [ProfileField; 10] = [
        ProfileField::EmployeeId,
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Address,
        ProfileField::Department,
        ProfileField::Position,
        ProfileField::Manager,
        ProfileField::HireDate,
        ProfileField::EmergencyContact,
    ];

    pub fn is_editable(self) -> bool {
        matches!(
            self,
            ProfileField::Name
                | ProfileField::Email
                | ProfileField::Phone
                | ProfileField::Address
                | ProfileField::EmergencyContact
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileField::EmployeeId => "employee_id",
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::Address => "address",
            ProfileField::Department => "department",
            ProfileField::Position => "position",
            ProfileField::Manager => "manager",
            ProfileField::HireDate => "hire_date",
            ProfileField::EmergencyContact => "emergency_contact",
        }
    }
}

/// Values typed into the edit form. Absent fields keep their current value.
#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct ProfileInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
}

impl ProfileInput {
    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    fn entries(&self) -> impl Iterator<Item = (ProfileField, &str)> {
        [
            (ProfileField::Name, &self.name),
            (ProfileField::Email, &self.email),
            (ProfileField::Phone, &self.phone),
            (ProfileField::Address, &self.address),
            (ProfileField::EmergencyContact, &self.emergency_contact),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
    }
}

#[derive(Clone, Debug)]
pub struct ProfileEditor {
    saved: ProfileFields,
    draft: Option<ProfileFields>,
}

impl ProfileEditor {
    pub fn new(saved: ProfileFields) -> Self {
        Self { saved, draft: None }
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Starts editing with the inputs filled from the saved values. Calling
    /// it again while editing keeps the current draft.
    pub fn begin_edit(&mut self) -> &ProfileFields {
        self.draft.get_or_insert_with(|| self.saved.clone())
    }

    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) -> HrResult<()> {
        let draft = self.draft.as_mut().ok_or(HrError::NotEditing)?;
        let value = value.into();
        let slot = match field {
            ProfileField::Name => &mut draft.name,
            ProfileField::Email => &mut draft.email,
            ProfileField::Phone => &mut draft.phone,
            ProfileField::Address => &mut draft.address,
            ProfileField::EmergencyContact => &mut draft.emergency_contact,
            ProfileField::EmployeeId
            | ProfileField::Department
            | ProfileField::Position
            | ProfileField::Manager
            | ProfileField::HireDate => {
                return Err(HrError::ReadOnlyField(field.as_str().to_string()));
            }
        };
        *slot = value;
        Ok(())
    }

    /// Applies every present input field to the draft.
    pub fn apply(&mut self, input: &ProfileInput) -> HrResult<()> {
        for (field, value) in input.entries() {
            self.set_field(field, value)?;
        }
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Validates the draft and makes it the saved profile. An invalid draft
    /// stays open for correction.
    pub fn save(&mut self) -> HrResult<&ProfileFields> {
        let draft = self.draft.as_ref().ok_or(HrError::NotEditing)?;
        validate(draft)?;
        if let Some(draft) = self.draft.take() {
            debug!(employee_id = %draft.employee_id, "profile saved");
            self.saved = draft;
        }
        Ok(&self.saved)
    }

    /// What the page shows: the draft while editing, the saved values otherwise.
    pub fn displayed(&self) -> &ProfileFields {
        self.draft.as_ref().unwrap_or(&self.saved)
    }

    pub fn saved(&self) -> &ProfileFields {
        &self.saved
    }
}

fn validate(fields: &ProfileFields) -> HrResult<()> {
    if fields.name.trim().is_empty() {
        return Err(HrError::Validation("name is required".into()));
    }
    if !fields.email.contains('@') {
        return Err(HrError::Validation("email must contain @".into()));
    }
    if fields.phone.trim().is_empty() {
        return Err(HrError::Validation("phone is required".into()));
    }
    Ok(())
}
