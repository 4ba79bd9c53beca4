//! Tests for the field configuration store semantics

use domain_config::{FieldConfiguration, InvoiceConfig, InvoiceField, TemplateKind};

#[test]
fn test_total_disable_is_a_noop_not_an_error() {
    let mut config = FieldConfiguration::default();
    let before = config.clone();

    config.set_enabled(InvoiceField::Total, false);

    // No state change and no error surfaced.
    assert_eq!(config, before);
}

#[test]
fn test_label_overrides_survive_reset_cycle() {
    let mut config = FieldConfiguration::default();
    config.set_label(InvoiceField::KhataName, "Party Name");
    config.set_enabled(InvoiceField::PriceType, false);

    assert_eq!(config.descriptor(InvoiceField::KhataName).label, "Party Name");
    assert_eq!(config.enabled_fields().len(), 6);

    config.reset();
    assert_eq!(config, FieldConfiguration::default());
}

#[test]
fn test_partial_settings_payload_fills_missing_sections() {
    // The collaborator may return a sparse settings object; missing sections
    // take their built-in defaults.
    let sparse = serde_json::json!({
        "defaultTemplate": "elegant",
    });

    let config: InvoiceConfig = serde_json::from_value(sparse).unwrap();
    assert_eq!(config.default_template, TemplateKind::Elegant);
    assert_eq!(config.bank, InvoiceConfig::default().bank);
}
