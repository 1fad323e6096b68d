/// The raw values of the five contact form fields, exactly as read from the
/// form surface. Nothing is validated at this point.
#[derive(Debug, serde::Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// A contact form submission that has passed validation.
/// The only way to create a `Submission` is through the checked conversion
/// from [`FormData`], which means consumers of this type are always
/// guaranteed that all five fields are non-empty.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// A required field was left empty. The `Display` text of each variant is
/// the exact message shown to the user.
#[derive(thiserror::Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Nama harus di isi")]
    MissingName,
    #[error("Email harus di isi")]
    MissingEmail,
    #[error("Nomor harus di isi")]
    MissingPhone,
    #[error("Subject harus di isi")]
    MissingSubject,
    #[error("Message harus di isi")]
    MissingMessage,
}

impl TryFrom<FormData> for Submission {
    type Error = ValidationError;

    fn try_from(value: FormData) -> Result<Self, Self::Error> {
        // Fields are checked in the order they appear on the form, and only
        // the first missing one is reported. The comparison is against the
        // raw value: whitespace-only input counts as filled in.
        if value.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if value.email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if value.phone.is_empty() {
            return Err(ValidationError::MissingPhone);
        }
        if value.subject.is_empty() {
            return Err(ValidationError::MissingSubject);
        }
        if value.message.is_empty() {
            return Err(ValidationError::MissingMessage);
        }

        Ok(Self {
            name: value.name,
            email: value.email,
            phone: value.phone,
            subject: value.subject,
            message: value.message,
        })
    }
}
