use contact_form::{
    configuration::get_configuration,
    console::{read_fields, ConsoleMailComposer, ConsoleNotifier},
    handler::ContactForm,
    telemetry,
};

fn main() -> anyhow::Result<()> {
    telemetry::init_subscriber(telemetry::get_subscriber(
        "contact-form".to_string(),
        std::io::stderr,
    ));

    let configuration = get_configuration().expect("Failed to read configuration.");
    let recipient = configuration
        .contact()
        .recipient()
        .map_err(anyhow::Error::msg)?;

    let stdin = std::io::stdin();
    let fields = read_fields(&mut stdin.lock(), &mut std::io::stdout())?;

    let form = ContactForm::new(recipient, fields, ConsoleNotifier, ConsoleMailComposer);
    form.submit();

    Ok(())
}
