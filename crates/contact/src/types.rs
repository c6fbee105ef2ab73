use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

use crate::{FAILURE_MESSAGE, REQUIRED_FIELDS_MESSAGE, RecordHandle, SUCCESS_MESSAGE};

/// Value of the domain select that switches to free-text domain entry.
pub const DIRECT_ENTRY: &str = "direct";

#[derive(
    EnumString, Display, VariantArray, Default, Clone, Copy, Debug, PartialEq, Eq, AsRefStr,
)]
pub enum EmailDomain {
    #[default]
    #[strum(serialize = "naver.com")]
    Naver,
    #[strum(serialize = "gmail.com")]
    Gmail,
    #[strum(serialize = "daum.net")]
    Daum,
    #[strum(serialize = "hanmail.net")]
    Hanmail,
    #[strum(serialize = "nate.com")]
    Nate,
}

/// One editable attribute of [`ContactDraft`].
///
/// The string form matches the `name` attribute of the landing page inputs.
#[derive(EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Name,
    EmailLocalPart,
    EmailDomain,
    PhonePart1,
    PhonePart2,
    PhonePart3,
    Message,
}

/// In-progress contact form state.
#[derive(Validate, Clone, Debug, PartialEq, Eq)]
pub struct ContactDraft {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email_local_part: String,
    pub email_domain: String,
    #[validate(length(min = 1))]
    pub phone_part1: String,
    #[validate(length(min = 1))]
    pub phone_part2: String,
    #[validate(length(min = 1))]
    pub phone_part3: String,
    pub message: String,
}

impl Default for ContactDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email_local_part: String::new(),
            email_domain: EmailDomain::default().to_string(),
            phone_part1: String::new(),
            phone_part2: String::new(),
            phone_part3: String::new(),
            message: String::new(),
        }
    }
}

impl ContactDraft {
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::EmailLocalPart => self.email_local_part = value,
            Field::EmailDomain => self.email_domain = value,
            Field::PhonePart1 => self.phone_part1 = value,
            Field::PhonePart2 => self.phone_part2 = value,
            Field::PhonePart3 => self.phone_part3 = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::EmailLocalPart => &self.email_local_part,
            Field::EmailDomain => &self.email_domain,
            Field::PhonePart1 => &self.phone_part1,
            Field::PhonePart2 => &self.phone_part2,
            Field::PhonePart3 => &self.phone_part3,
            Field::Message => &self.message,
        }
    }

    /// True when the domain is not one of the preset [`EmailDomain`] values.
    pub fn is_direct_domain(&self) -> bool {
        self.email_domain.parse::<EmailDomain>().is_err()
    }

    /// Joins the segmented inputs into the wire payload. Values are copied
    /// verbatim, no trimming.
    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.to_owned(),
            email: format!("{}@{}", self.email_local_part, self.email_domain),
            phone: format!(
                "{}-{}-{}",
                self.phone_part1, self.phone_part2, self.phone_part3
            ),
            content: Some(self.message.to_owned()),
        }
    }
}

/// Wire payload of `POST /api/contact`.
///
/// Missing string fields deserialize as empty so that they are reported as
/// validation failures instead of parse errors.
#[derive(Validate, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Envelope returned by the submission handler.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl SubmissionResult {
    pub fn accepted(handle: &RecordHandle) -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_owned(),
            data: Some(handle.id.to_owned()),
            error_detail: None,
        }
    }

    /// Envelope for a payload missing a required field.
    pub fn invalid() -> Self {
        Self {
            success: false,
            message: REQUIRED_FIELDS_MESSAGE.to_owned(),
            data: None,
            error_detail: None,
        }
    }

    pub fn rejected(err: &dit_shared::Error) -> Self {
        match err {
            dit_shared::Error::Validate(_) => Self::invalid(),
            err => Self {
                success: false,
                message: FAILURE_MESSAGE.to_owned(),
                data: None,
                error_detail: Some(err.to_string()),
            },
        }
    }
}

impl From<dit_shared::Result<RecordHandle>> for SubmissionResult {
    fn from(value: dit_shared::Result<RecordHandle>) -> Self {
        match value {
            Ok(handle) => Self::accepted(&handle),
            Err(err) => Self::rejected(&err),
        }
    }
}
