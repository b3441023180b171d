use serde::Deserialize;

use crate::Result;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub policy: PasswordPolicy,
}

/// Length bounds applied to the old and new password fields.
#[derive(Deserialize, Clone, Copy, Debug)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 128,
        }
    }
}

pub fn get_configuration() -> Result<Settings> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    Ok(settings.try_deserialize::<Settings>()?)
}
