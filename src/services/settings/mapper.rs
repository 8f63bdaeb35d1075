use crate::error::PageResult;
use crate::models::settings::PageSettings;

/// Decodes and validates a TOML settings document.
pub fn settings_from_toml(data: &str) -> PageResult<PageSettings> {
    let settings: PageSettings = toml::from_str(data)?;
    settings.validate()?;
    Ok(settings)
}

pub fn settings_to_toml(settings: &PageSettings) -> PageResult<String> {
    Ok(toml::to_string_pretty(settings)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PageError;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_document_fills_defaults() {
        let settings = settings_from_toml(
            r#"
            target_instant = "2026-06-20T16:30:00"
            reference_line_px = 120.0
            "#,
        )
        .unwrap();

        assert_eq!(settings.target_instant, "2026-06-20T16:30:00");
        assert_eq!(settings.reference_line_px, 120.0);
        assert_eq!(settings.sections, PageSettings::default().sections);
    }

    #[test]
    fn encoded_settings_decode_to_same_value() {
        let mut settings = PageSettings::default();
        settings.sections = vec!["hero".into(), "rsvp".into()];
        let encoded = settings_to_toml(&settings).unwrap();
        assert_eq!(settings_from_toml(&encoded).unwrap(), settings);
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = settings_from_toml("target_instant = ").unwrap_err();
        assert!(matches!(err, PageError::SettingsParse(_)));
    }

    #[test]
    fn invalid_values_are_rejected_on_load() {
        let err = settings_from_toml("tick_interval_ms = 0").unwrap_err();
        assert!(matches!(err, PageError::InvalidSetting { .. }));
    }
}
