use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Invalid generator settings: {0}")]
    Settings(#[from] SettingsError),
}
