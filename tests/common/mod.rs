use contact_form::{
    domain::RecipientEmail,
    fields::{FieldId, StaticFields},
    handler::{ContactForm, MailComposer, Notifier},
    mailto::MailtoLink,
    telemetry::{get_subscriber, init_subscriber},
};
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex};

static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber("test".into(), std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber("test".into(), std::io::sink);
        init_subscriber(subscriber);
    };
});

/// Notifier double that records every alert it is asked to show.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier(Arc<Mutex<Vec<String>>>);

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}

/// Mail-composition double that records every link it is asked to open.
#[derive(Debug, Default, Clone)]
pub struct RecordingMailComposer(Arc<Mutex<Vec<MailtoLink>>>);

impl RecordingMailComposer {
    pub fn links(&self) -> Vec<MailtoLink> {
        self.0.lock().unwrap().clone()
    }
}

impl MailComposer for RecordingMailComposer {
    fn compose(&self, link: &MailtoLink) {
        self.0.lock().unwrap().push(link.clone());
    }
}

/// A fully filled field surface matching the values used across the tests.
pub fn filled_fields() -> StaticFields {
    StaticFields::default()
        .set(FieldId::Name, "Budi")
        .set(FieldId::Email, "budi@x.com")
        .set(FieldId::Phone, "08123")
        .set(FieldId::Subject, "Inquiry")
        .set(FieldId::Message, "Saya tertarik")
}

/// Build a contact form over the given fields, returning the recording
/// doubles alongside so the side effects can be inspected.
pub fn spawn_form(
    fields: StaticFields,
) -> (
    ContactForm<StaticFields, RecordingNotifier, RecordingMailComposer>,
    RecordingNotifier,
    RecordingMailComposer,
) {
    Lazy::force(&TRACING);

    let recipient = RecipientEmail::parse("agungkurniawan211@gmail.com".to_string())
        .expect("Failed to parse recipient");
    let notifier = RecordingNotifier::default();
    let mail_composer = RecordingMailComposer::default();
    let form = ContactForm::new(
        recipient,
        fields,
        notifier.clone(),
        mail_composer.clone(),
    );

    (form, notifier, mail_composer)
}
