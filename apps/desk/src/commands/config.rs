//! # Config Commands
//!
//! Template settings and preset values retrieval/update.
//!
//! Both `get_*` commands return the CURRENT document on every call. The
//! internal quote view depends on that freshness for its tax rate; caching
//! either document in the shell across renders is a contract violation.

use tracing::debug;

use cabquote_core::template::TemplateSettings;
use cabquote_core::types::PresetValues;
use cabquote_core::validation::validate_tax_rate_percent;
use cabquote_core::CoreError;

use crate::error::ApiError;
use crate::state::AppState;

/// Current template settings.
pub fn get_template_settings(state: &AppState) -> TemplateSettings {
    debug!("get_template_settings command");
    state.template.get()
}

/// Replaces the template settings.
pub fn update_template_settings(
    state: &AppState,
    settings: TemplateSettings,
) -> Result<(), ApiError> {
    debug!("update_template_settings command");
    Ok(state.template.update(settings)?)
}

/// Current preset values. Fetch fresh per render; never cache the rate.
pub fn get_preset_values(state: &AppState) -> PresetValues {
    debug!("get_preset_values command");
    state.presets.get()
}

/// Replaces the preset values after validating the tax rate.
pub fn update_preset_values(state: &AppState, values: PresetValues) -> Result<(), ApiError> {
    debug!(tax_rate = values.tax_rate, "update_preset_values command");
    validate_tax_rate_percent(values.tax_rate).map_err(CoreError::from)?;
    Ok(state.presets.update(values)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_template_update_round_trips() {
        let state = AppState::in_memory();
        let mut settings = get_template_settings(&state);
        settings.sections.client_info.title = "Your Details".to_string();
        update_template_settings(&state, settings).unwrap();
        assert_eq!(
            get_template_settings(&state).sections.client_info.title,
            "Your Details"
        );
    }

    #[test]
    fn test_preset_update_rejects_bad_rate() {
        let state = AppState::in_memory();
        let mut values = get_preset_values(&state);
        values.tax_rate = 250.0;
        let err = update_preset_values(&state, values).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        // The stored document is untouched.
        assert_eq!(get_preset_values(&state).tax_rate, 13.0);
    }

    #[test]
    fn test_preset_update_round_trips() {
        let state = AppState::in_memory();
        let mut values = get_preset_values(&state);
        values.tax_rate = 8.25;
        update_preset_values(&state, values).unwrap();
        assert_eq!(get_preset_values(&state).tax_rate, 8.25);
    }
}
