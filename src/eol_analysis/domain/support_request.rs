use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Package context attached to a support request when the form is opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportContext {
    pub package_name: String,
    pub ecosystem: String,
}

impl SupportContext {
    pub fn new(package_name: impl Into<String>, ecosystem: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            ecosystem: ecosystem.into(),
        }
    }
}

/// A submitted request for extended support
///
/// Field values are exactly what was entered. Trimming is only applied to
/// decide whether the form may be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportRequest {
    pub name: String,
    pub company_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecosystem: Option<String>,
}

/// Values typed into an open form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportRequestFields {
    pub name: String,
    pub company_name: String,
    pub phone_number: String,
    pub details: String,
}

impl SupportRequestFields {
    /// Names of required fields that are blank after trimming
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("companyName", &self.company_name),
            ("phoneNumber", &self.phone_number),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SupportRequestError {
    #[error("The support request form is not open")]
    FormClosed,

    #[error("Support request is incomplete, missing: {}\n\n💡 Hint: Name, company name and phone number are required", .fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum FormState {
    #[default]
    Closed,
    Open {
        context: Option<SupportContext>,
        fields: SupportRequestFields,
    },
}

/// Support request popup: closed until opened, discards input on cancel,
/// closes after a successful submit.
#[derive(Debug, Clone, Default)]
pub struct SupportRequestForm {
    state: FormState,
}

impl SupportRequestForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, FormState::Open { .. })
    }

    /// Opens the form. Opening an already open form keeps what was entered.
    pub fn open(&mut self, context: Option<SupportContext>) {
        if !self.is_open() {
            self.state = FormState::Open {
                context,
                fields: SupportRequestFields::default(),
            };
        }
    }

    pub fn context(&self) -> Option<&SupportContext> {
        match &self.state {
            FormState::Open { context, .. } => context.as_ref(),
            FormState::Closed => None,
        }
    }

    pub fn fields(&self) -> Option<&SupportRequestFields> {
        match &self.state {
            FormState::Open { fields, .. } => Some(fields),
            FormState::Closed => None,
        }
    }

    pub fn fields_mut(&mut self) -> Result<&mut SupportRequestFields, SupportRequestError> {
        match &mut self.state {
            FormState::Open { fields, .. } => Ok(fields),
            FormState::Closed => Err(SupportRequestError::FormClosed),
        }
    }

    /// Whether submit is currently enabled
    pub fn can_submit(&self) -> bool {
        self.fields().is_some_and(SupportRequestFields::is_valid)
    }

    /// Validates and emits the request, closing the form.
    ///
    /// An incomplete form stays open with its input intact.
    pub fn submit(&mut self) -> Result<SupportRequest, SupportRequestError> {
        let missing = match &self.state {
            FormState::Closed => return Err(SupportRequestError::FormClosed),
            FormState::Open { fields, .. } => fields.missing_fields(),
        };
        if !missing.is_empty() {
            return Err(SupportRequestError::MissingFields { fields: missing });
        }

        match std::mem::take(&mut self.state) {
            FormState::Open { context, fields } => Ok(SupportRequest {
                name: fields.name,
                company_name: fields.company_name,
                phone_number: fields.phone_number,
                details: fields.details,
                package_name: context.as_ref().map(|c| c.package_name.clone()),
                ecosystem: context.map(|c| c.ecosystem),
            }),
            FormState::Closed => Err(SupportRequestError::FormClosed),
        }
    }

    /// Closes the form, discarding all entered values
    pub fn cancel(&mut self) {
        self.state = FormState::Closed;
    }

    /// Backdrop dismissal behaves like cancel
    pub fn dismiss(&mut self) {
        self.cancel();
    }
}
