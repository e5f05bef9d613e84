use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for enlistment sessions.
///
/// This struct holds the assessment fee schedule and the unit-load
/// ceiling. The defaults reproduce the university's published rates, so
/// `Config::default()` is the canonical behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Tuition charged per unit, in whole pesos.
    unit_price: u32,

    /// Flat fee added per laboratory subject, in whole pesos.
    lab_fee: u32,

    /// Flat miscellaneous fee added to any non-empty assessment, in whole
    /// pesos.
    misc_fee: u32,

    /// Value-added tax applied to the subtotal, in basis points
    /// (1200 = 12%).
    vat_basis_points: u32,

    /// The most units a student may be enlisted in at once.
    max_units: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_price: default_unit_price(),
            lab_fee: default_lab_fee(),
            misc_fee: default_misc_fee(),
            vat_basis_points: default_vat_basis_points(),
            max_units: default_max_units(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or
    /// if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the per-unit tuition price in whole pesos.
    #[must_use]
    pub const fn unit_price(&self) -> u32 {
        self.unit_price
    }

    /// Returns the per-laboratory-subject fee in whole pesos.
    #[must_use]
    pub const fn lab_fee(&self) -> u32 {
        self.lab_fee
    }

    /// Returns the miscellaneous fee in whole pesos.
    #[must_use]
    pub const fn misc_fee(&self) -> u32 {
        self.misc_fee
    }

    /// Returns the VAT rate in basis points.
    #[must_use]
    pub const fn vat_basis_points(&self) -> u32 {
        self.vat_basis_points
    }

    /// Returns the unit-load ceiling.
    #[must_use]
    pub const fn max_units(&self) -> u32 {
        self.max_units
    }
}

const fn default_unit_price() -> u32 {
    2000
}

const fn default_lab_fee() -> u32 {
    1000
}

const fn default_misc_fee() -> u32 {
    3000
}

const fn default_vat_basis_points() -> u32 {
    1200
}

const fn default_max_units() -> u32 {
    24
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the
/// domain type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_unit_price")]
        unit_price: u32,

        #[serde(default = "default_lab_fee")]
        lab_fee: u32,

        #[serde(default = "default_misc_fee")]
        misc_fee: u32,

        #[serde(default = "default_vat_basis_points")]
        vat_basis_points: u32,

        #[serde(default = "default_max_units")]
        max_units: u32,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                unit_price,
                lab_fee,
                misc_fee,
                vat_basis_points,
                max_units,
            } => Self {
                unit_price,
                lab_fee,
                misc_fee,
                vat_basis_points,
                max_units,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            unit_price: config.unit_price,
            lab_fee: config.lab_fee,
            misc_fee: config.misc_fee,
            vat_basis_points: config.vat_basis_points,
            max_units: config.max_units,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\nunit_price = 2500\nlab_fee = 1500\nmisc_fee = 0\nvat_basis_points = 0\nmax_units = 18\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.unit_price(), 2500);
        assert_eq!(config.lab_fee(), 1500);
        assert_eq!(config.misc_fee(), 0);
        assert_eq!(config.vat_basis_points(), 0);
        assert_eq!(config.max_units(), 18);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(error.starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nmax_units = \"many\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.starts_with("Failed to parse config file:"));
    }

    #[test]
    fn empty_file_returns_default() {
        // Tests that deserialising a bare version header returns the default
        // configuration.
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn defaults_are_the_published_rates() {
        let config = Config::default();
        assert_eq!(config.unit_price(), 2000);
        assert_eq!(config.lab_fee(), 1000);
        assert_eq!(config.misc_fee(), 3000);
        assert_eq!(config.vat_basis_points(), 1200);
        assert_eq!(config.max_units(), 24);
    }

    #[test]
    fn save_then_load_roundtrips() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("fees.toml");

        let config = Config::default();
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
