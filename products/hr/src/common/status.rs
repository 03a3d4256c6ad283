use async_graphql::{Enum, SimpleObject};
use serde::Serialize;

/// Colour family of a status badge.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

impl StatusTone {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusTone::Success => "bg-green-100 text-green-800",
            StatusTone::Warning => "bg-yellow-100 text-yellow-800",
            StatusTone::Danger => "bg-red-100 text-red-800",
            StatusTone::Info => "bg-blue-100 text-blue-800",
            StatusTone::Neutral => "bg-gray-100 text-gray-800",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, SimpleObject, Serialize)]
pub struct Badge {
    pub label: String,
    pub tone: StatusTone,
    pub class_name: String,
}

impl Badge {
    pub fn new(label: &str, tone: StatusTone) -> Self {
        Self {
            label: label.to_string(),
            tone,
            class_name: tone.css_class().to_string(),
        }
    }
}

/// Anything that is shown as a coloured status pill.
pub trait Toned {
    fn label(&self) -> &'static str;
    fn tone(&self) -> StatusTone;

    fn badge(&self) -> Badge {
        Badge::new(self.label(), self.tone())
    }
}
