use crate::{
    domain::{FormData, RecipientEmail, Submission},
    fields::{FieldId, FieldReader},
    mailto::MailtoLink,
};

/// Capability to show a blocking notification to the user, equivalent to an
/// alert dialog on the contact page.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Capability to open the user's mail client pre-filled from a
/// [`MailtoLink`]. Fire-and-forget: there is no result to report back.
pub trait MailComposer {
    fn compose(&self, link: &MailtoLink);
}

/// The contact form and everything it needs to handle a submission: the
/// field surface to read from, the notifier for validation messages, the
/// mail-composition capability, and the mailbox submissions are sent to.
#[derive(Debug)]
pub struct ContactForm<R, N, M> {
    fields: R,
    notifier: N,
    mail_composer: M,
    recipient: RecipientEmail,
}

impl<R, N, M> ContactForm<R, N, M>
where
    R: FieldReader,
    N: Notifier,
    M: MailComposer,
{
    pub fn new(recipient: RecipientEmail, fields: R, notifier: N, mail_composer: M) -> Self {
        Self {
            fields,
            notifier,
            mail_composer,
            recipient,
        }
    }

    /// Handle one submit interaction. Reads the current field values,
    /// validates them in form order, and either notifies the user about the
    /// first missing field or opens a pre-filled mail composition and
    /// records the submission. Runs to completion synchronously and leaves
    /// no state behind, so a later submit starts from a clean slate.
    #[tracing::instrument(name = "Handling a contact form submission", skip(self))]
    pub fn submit(&self) {
        let form = FormData {
            name: self.fields.value(FieldId::Name),
            email: self.fields.value(FieldId::Email),
            phone: self.fields.value(FieldId::Phone),
            subject: self.fields.value(FieldId::Subject),
            message: self.fields.value(FieldId::Message),
        };

        let submission: Submission = match form.try_into() {
            Ok(x) => x,
            Err(e) => {
                // Expected outcome, not a fault: tell the user and stop.
                self.notifier.alert(&e.to_string());
                return;
            }
        };

        let link = MailtoLink::new(self.recipient.clone(), &submission);
        self.mail_composer.compose(&link);

        record_submission(&submission);
    }
}

/// Write the diagnostic record for a successful submission: one entry with
/// the five field values as a flat mapping.
fn record_submission(submission: &Submission) {
    tracing::info!(
        name = %submission.name,
        email = %submission.email,
        phone = %submission.phone,
        subject = %submission.subject,
        message = %submission.message,
        "Contact form submission recorded"
    );
}
