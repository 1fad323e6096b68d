use crate::domain::{RecipientEmail, Submission};
use derive_getters::Getters;
use urlencoding::encode;

/// A pre-filled mail-composition link for a contact form submission.
/// The subject is the user's subject verbatim; the body interpolates the
/// name, message and phone number into a fixed template.
#[derive(Debug, Clone, Getters)]
pub struct MailtoLink {
    recipient: RecipientEmail,
    subject: String,
    body: String,
}

impl MailtoLink {
    pub fn new(recipient: RecipientEmail, submission: &Submission) -> Self {
        let body = format!(
            "Hallo nama saya {}, {}, silahkan kontak saya di nomor {}",
            submission.name, submission.message, submission.phone
        );

        Self {
            recipient,
            subject: submission.subject.clone(),
            body,
        }
    }

    /// The `mailto:` URI for this link. The subject and body are
    /// percent-encoded so that the URI stays valid whatever the user typed.
    pub fn href(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient.as_ref(),
            encode(&self.subject),
            encode(&self.body)
        )
    }
}
