//! Integration tests for the clean → classify → summarize pipeline.
//!
//! These tests drive the catalog through files on disk, the way the command-line
//! front end does.

use catalog::{
    Catalog, CatalogConfig, Classifier, FLAG_COLUMN, Field, Summary, ZoneModel, classify,
    habitable_planets,
};

const CATALOG: &str = "\
No.,Planet Name,Planet Host,Num Stars,Num Planets,Discovery Method,Discovery Year,Discovery Facility,Orbital Period Days,Orbit Semi-Major Axis,Mass,Eccentricity,Insolation Flux,Equilibrium Temperature,Spectral Type,Stellar Effective Temperature,Stellar Radius,Stellar Mass,Stellar Metallicity,Stellar Metallicity Ratio,Stellar Surface Gravity,Distance,Gaia Magnitude
1,Earth-twin b,Twin,1,1,Transit,2020,Kepler,365.25,1.0,0.00315,0.0167,1.0,255,G2 V,5778,1.0,1.0,0.0,[Fe/H],4.44,10.0,4.8
2,Hot b,Twin,1,2,Transit,2019,Kepler,88.0,0.39,0.0002,0.2,6.7,440,G2 V,5778,1.0,1.0,0.0,[Fe/H],4.44,10.0,4.8
3,Blank a,Nowhere,1,1,Imaging,2018,Gemini,,,,,,,,,,,,,,,
4,Radiusless b,Dim,1,1,Radial Velocity,2017,HARPS,200.0,0.6,0.1,0.0,0.8,240,K5 V,4400,,0.7,-0.1,[Fe/H],4.6,12.0,9.1
5,Frozen b,Twin,1,2,Transit,2021,TESS,3000.0,4.0,1.2,0.05,0.06,110,G2 V,5778,1.0,1.0,0.0,[Fe/H],4.44,10.0,4.8
";

fn write_input(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("exoplanets.csv");
    std::fs::write(&path, CATALOG).unwrap();
    path
}

#[test]
fn end_to_end_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir);
    let output = dir.path().join("exoplanets_with_goldilock_zone.csv");

    let catalog = Catalog::read(&input, b',').unwrap();
    assert_eq!(catalog.len(), 5);

    let (cleaned, report) = catalog.clean(&Field::CLEANING_DEFAULTS);
    assert_eq!(report.dropped_rows, 1, "only the blank row is incomplete");
    assert_eq!(cleaned.len(), 4);

    let classified = classify(&cleaned, ZoneModel::LuminosityScaled);
    classified.write(&output, b',').unwrap();

    let reread = Catalog::read(&output, b',').unwrap();
    assert_eq!(reread.headers().last(), Some(FLAG_COLUMN));
    assert_eq!(
        reread.flags(FLAG_COLUMN).unwrap(),
        [true, false, false, false],
        "twin habitable; hot, radiusless and frozen planets are not"
    );

    let summary = Summary::of(&reread, FLAG_COLUMN).unwrap();
    assert_eq!(summary.to_string(), "1 of 4 planets in the habitable zone (25.00%)");

    let planets = habitable_planets(&reread, FLAG_COLUMN);
    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0].name.as_deref(), Some("Earth-twin b"));
}

#[test]
fn reclassifying_a_written_file_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir);
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    let classified = classify(&Catalog::read(&input, b',').unwrap(), ZoneModel::LuminosityScaled);
    classified.write(&first, b',').unwrap();

    let again = classify(&Catalog::read(&first, b',').unwrap(), ZoneModel::LuminosityScaled);
    again.write(&second, b',').unwrap();

    assert_eq!(
        std::fs::read_to_string(&first).unwrap(),
        std::fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn configured_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("goldilocks.toml");
    std::fs::write(
        &config_path,
        r#"
required_fields = ["Planet Name", "Orbit Semi-Major Axis", "Stellar Effective Temperature"]
zone_model = "temperature-scaled"
flag_column = "Habitable"
derived_columns = true
delimiter = ";"
"#,
    )
    .unwrap();
    let config = CatalogConfig::load(&config_path).unwrap();
    let delimiter = config.delimiter_byte().unwrap();

    let input = dir.path().join("exoplanets.csv");
    std::fs::write(&input, CATALOG.replace(',', ";")).unwrap();

    let catalog = Catalog::read(&input, delimiter).unwrap();
    let (cleaned, _) = catalog.clean(&config.required_fields);
    let classified = Classifier::from_config(&config).unwrap().classify(&cleaned);

    let output = dir.path().join("out.csv");
    classified.write(&output, delimiter).unwrap();
    let text = std::fs::read_to_string(&output).unwrap();
    let header = text.lines().next().unwrap();
    assert!(header.ends_with(";Habitable;Stellar Luminosity;Habitable Zone Inner;Habitable Zone Outer"));

    let reread = Catalog::read(&output, delimiter).unwrap();
    // Temperature-scaled zone of a 5778 K star spans roughly 0.95-1.37 AU
    assert_eq!(reread.flags("Habitable").unwrap(), [true, false, false, false]);
}
