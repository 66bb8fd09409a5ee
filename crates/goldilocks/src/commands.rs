//! Subcommand arguments and handlers

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use catalog::{
    Catalog, CatalogConfig, Classifier, Field, HabitablePlanet, Summary, habitable_planets,
};
use clap::Args;
use serde::Serialize;
use stellar::{HostStar, ZoneModel};
use tracing::{debug, info};
use units::Length;

/// Suffix of the file `classify` writes when no output is given
pub const OUTPUT_SUFFIX: &str = "_with_goldilock_zone.csv";

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Catalog to read
    pub input: PathBuf,

    /// Where to write the cleaned catalog (stdout if omitted)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Required fields, replacing the configured set
    #[arg(long, value_delimiter = ',', value_name = "FIELD")]
    pub require: Vec<Field>,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Catalog to read
    pub input: PathBuf,

    /// Where to write the classified catalog
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Habitable-zone model (luminosity-scaled or temperature-scaled)
    #[arg(long)]
    pub model: Option<ZoneModel>,

    /// Also write luminosity and zone-edge columns
    #[arg(long)]
    pub derived: bool,

    /// Drop incomplete rows before classifying
    #[arg(long)]
    pub clean: bool,
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Catalog to read
    pub input: PathBuf,

    /// Habitable-zone model (luminosity-scaled or temperature-scaled)
    #[arg(long)]
    pub model: Option<ZoneModel>,

    /// Drop incomplete rows before classifying
    #[arg(long)]
    pub clean: bool,

    /// List the habitable planets
    #[arg(long)]
    pub list: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ZoneArgs {
    /// Stellar effective temperature (K)
    #[arg(long, value_name = "K")]
    pub temperature: f64,

    /// Stellar radius (solar radii)
    #[arg(long, value_name = "R_SUN")]
    pub radius: f64,

    /// Orbital semi-major axis to test (AU)
    #[arg(long, value_name = "AU")]
    pub orbit: Option<f64>,

    /// Habitable-zone model (luminosity-scaled or temperature-scaled)
    #[arg(long)]
    pub model: Option<ZoneModel>,
}

/// Configuration file values with command-line overrides applied
pub fn load_config(path: Option<&Path>, delimiter: Option<char>) -> Result<CatalogConfig> {
    let mut config = match path {
        Some(path) => CatalogConfig::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => CatalogConfig::default(),
    };

    if let Some(delimiter) = delimiter {
        config.delimiter = delimiter;
        config.validate()?;
    }
    Ok(config)
}

/// `<stem>_with_goldilock_zone.csv` in the input's directory
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_else(|| "catalog".into());
    input.with_file_name(format!("{}{}", stem, OUTPUT_SUFFIX))
}

fn read_catalog(path: &Path, delimiter: u8) -> Result<Catalog> {
    Catalog::read(path, delimiter)
        .with_context(|| format!("failed to read catalog {}", path.display()))
}

/// Read, optionally clean, and classify a catalog
fn classified_catalog(
    config: &CatalogConfig,
    input: &Path,
    model: Option<ZoneModel>,
    clean: bool,
) -> Result<Catalog> {
    let mut config = config.clone();
    if let Some(model) = model {
        config.zone_model = model;
    }

    let catalog = read_catalog(input, config.delimiter_byte()?)?;
    let catalog = if clean {
        let (cleaned, report) = catalog.clean(&config.required_fields);
        info!("{}", report);
        cleaned
    } else {
        catalog
    };

    Ok(Classifier::from_config(&config)?.classify(&catalog))
}

pub fn clean(config: &CatalogConfig, args: CleanArgs, stdout: &mut impl Write) -> Result<()> {
    let delimiter = config.delimiter_byte()?;
    let catalog = read_catalog(&args.input, delimiter)?;

    let required = if args.require.is_empty() {
        &config.required_fields
    } else {
        &args.require
    };
    debug!(?required, "cleaning catalog");
    let (cleaned, report) = catalog.clean(required);
    info!("{}", report);

    match &args.output {
        Some(path) => cleaned
            .write(path, delimiter)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => cleaned.to_writer(&mut *stdout, delimiter)?,
    }
    Ok(())
}

/// Classify a catalog file, returning the path written
pub fn classify(config: &CatalogConfig, args: ClassifyArgs) -> Result<PathBuf> {
    let mut config = config.clone();
    config.derived_columns |= args.derived;

    let classified = classified_catalog(&config, &args.input, args.model, args.clean)?;
    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&args.input));
    classified
        .write(&output, config.delimiter_byte()?)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!(path = %output.display(), rows = classified.len(), "classified catalog written");
    Ok(output)
}

#[derive(Serialize)]
struct SummaryReport<'a> {
    #[serde(flatten)]
    summary: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    planets: Option<&'a [HabitablePlanet]>,
}

pub fn summary(config: &CatalogConfig, args: SummaryArgs, stdout: &mut impl Write) -> Result<()> {
    let classified = classified_catalog(config, &args.input, args.model, args.clean)?;
    let summary = Summary::of(&classified, &config.flag_column)
        .ok_or_else(|| anyhow!("catalog has no '{}' column", config.flag_column))?;
    let planets = habitable_planets(&classified, &config.flag_column);

    if args.json {
        let report = SummaryReport {
            summary,
            planets: args.list.then_some(planets.as_slice()),
        };
        serde_json::to_writer_pretty(&mut *stdout, &report)?;
        writeln!(stdout)?;
        return Ok(());
    }

    writeln!(stdout, "{}", summary)?;
    if args.list {
        for planet in &planets {
            writeln!(stdout, "  {}", describe_planet(planet))?;
        }
    }
    Ok(())
}

fn describe_planet(planet: &HabitablePlanet) -> String {
    let name = planet.name.as_deref().unwrap_or("(unnamed)");
    let mut line = match &planet.host {
        Some(host) => format!("{} ({})", name, host),
        None => name.to_string(),
    };
    if let Some(a) = planet.semi_major_axis {
        line.push_str(&format!(", a = {} AU", a));
    }
    if let Some(t) = planet.equilibrium_temperature {
        line.push_str(&format!(", T_eq = {} K", t));
    }
    line
}

pub fn zone(config: &CatalogConfig, args: ZoneArgs, stdout: &mut impl Write) -> Result<()> {
    let star = HostStar::from_catalog(Some(args.temperature), Some(args.radius))
        .ok_or_else(|| anyhow!("temperature and radius must be finite and non-negative"))?;
    let model = args.model.unwrap_or(config.zone_model);
    let zone = star.habitable_zone(model);

    writeln!(stdout, "model:      {}", model)?;
    writeln!(stdout, "luminosity: {:.4} L☉", star.luminosity().to_solar())?;
    writeln!(stdout, "zone:       {}", zone)?;
    writeln!(stdout, "width:      {:.4} AU", zone.width().to_au())?;

    if let Some(orbit) = args.orbit {
        let orbit = Length::from_au(orbit);
        let verdict = if orbit.is_physical() && zone.contains(orbit) {
            "inside"
        } else {
            "outside"
        };
        writeln!(stdout, "orbit:      {:.4} AU is {} the zone", orbit.to_au(), verdict)?;
    }
    Ok(())
}
