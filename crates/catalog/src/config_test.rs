use stellar::ZoneModel;

use crate::classifier::FLAG_COLUMN;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::field::Field;

#[test]
fn defaults() {
    let config = CatalogConfig::default();
    assert_eq!(config.required_fields, Field::CLEANING_DEFAULTS.to_vec());
    assert_eq!(config.zone_model, ZoneModel::LuminosityScaled);
    assert_eq!(config.flag_column, FLAG_COLUMN);
    assert!(!config.derived_columns);
    assert_eq!(config.delimiter_byte().unwrap(), b',');
}

#[test]
fn empty_file_is_default() {
    assert_eq!(CatalogConfig::from_toml_str("").unwrap(), CatalogConfig::default());
}

#[test]
fn parses_every_key() {
    let config = CatalogConfig::from_toml_str(
        r#"
        required_fields = ["Orbit Semi-Major Axis", "stellar_effective_temperature"]
        zone_model = "temperature-scaled"
        flag_column = "habitable"
        derived_columns = true
        delimiter = ";"
        "#,
    )
    .unwrap();

    assert_eq!(
        config.required_fields,
        [Field::OrbitSemiMajorAxis, Field::StellarEffectiveTemperature]
    );
    assert_eq!(config.zone_model, ZoneModel::TemperatureScaled);
    assert_eq!(config.flag_column, "habitable");
    assert!(config.derived_columns);
    assert_eq!(config.delimiter_byte().unwrap(), b';');
}

#[test]
fn rejects_unknown_field() {
    let err = CatalogConfig::from_toml_str(r#"required_fields = ["Albedo"]"#).unwrap_err();
    assert!(matches!(err, CatalogError::Config(_)));
}

#[test]
fn rejects_unknown_model() {
    let err = CatalogConfig::from_toml_str(r#"zone_model = "kopparapu""#).unwrap_err();
    assert!(matches!(err, CatalogError::Config(_)));
}

#[test]
fn rejects_non_ascii_delimiter() {
    let err = CatalogConfig::from_toml_str(r#"delimiter = "§""#).unwrap_err();
    assert!(err.to_string().contains("delimiter"));
}

#[test]
fn rejects_bad_flag_columns() {
    assert!(CatalogConfig::from_toml_str(r#"flag_column = "  ""#).is_err());
    assert!(CatalogConfig::from_toml_str(r#"flag_column = "Stellar Radius""#).is_err());
}

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("goldilocks.toml");
    std::fs::write(&path, "derived_columns = true\n").unwrap();

    let config = CatalogConfig::load(&path).unwrap();
    assert!(config.derived_columns);

    let missing = CatalogConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(missing, CatalogError::Io { .. }));
}
