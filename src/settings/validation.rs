use log::{debug, warn};

use crate::settings::config::GeneratorSettings;
use crate::settings::errors::SettingsError;

/// # Errors
///
/// Returns an error if the operation list is empty, fewer than two operands
/// are requested, or the range bounds are non-positive or inverted.
pub fn validate_settings(settings: &GeneratorSettings) -> Result<(), SettingsError> {
    debug!("Validating generator settings: {:?}", settings);

    if settings.operations.is_empty() {
        warn!("Settings rejected: no operations selected");
        return Err(SettingsError::NoOperations);
    }

    if settings.numbers_count < 2 {
        warn!(
            "Settings rejected: numbers_count={}",
            settings.numbers_count
        );
        return Err(SettingsError::TooFewOperands(settings.numbers_count));
    }

    if settings.number_range < 1 || settings.number_range_min < 1 {
        warn!(
            "Settings rejected: non-positive bounds min={}, max={}",
            settings.number_range_min, settings.number_range
        );
        return Err(SettingsError::NonPositiveRange {
            min: settings.number_range_min,
            max: settings.number_range,
        });
    }

    if settings.number_range_min > settings.number_range {
        warn!(
            "Settings rejected: inverted bounds min={}, max={}",
            settings.number_range_min, settings.number_range
        );
        return Err(SettingsError::InvertedRange {
            min: settings.number_range_min,
            max: settings.number_range,
        });
    }

    debug!("Settings validation successful");
    Ok(())
}
