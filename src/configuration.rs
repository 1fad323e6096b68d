use crate::domain::RecipientEmail;
use config::{Config, File, FileFormat};
use derive_getters::Getters;

/// Retrieve the configuration for the application.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    Config::builder()
        .add_source(File::new("configuration.yaml", FileFormat::Yaml))
        .build()?
        .try_deserialize()
}

#[derive(Debug, serde::Deserialize, Getters)]
pub struct Settings {
    contact: ContactSettings,
}

#[derive(Debug, serde::Deserialize)]
pub struct ContactSettings {
    recipient: String,
}

impl ContactSettings {
    /// The mailbox that receives contact submissions.
    pub fn recipient(&self) -> Result<RecipientEmail, String> {
        RecipientEmail::parse(self.recipient.clone())
    }
}
