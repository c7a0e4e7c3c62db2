//! Declarative graph configuration.
//!
//! Values are merged in priority order: built-in defaults, then an optional
//! TOML file, then `HURRICANE_*` environment variables (nested keys split on
//! `__`, e.g. `HURRICANE_SPIRAL__KIND=logarithmic`).
//!
//! ```toml
//! adjacency = "tree"
//! layer_size = 0.5
//!
//! [center]
//! id = "root"
//! data = "root node"
//!
//! [spiral]
//! kind = "logarithmic"
//! a = 1.0
//! b = 0.1
//! height_step = 0.05
//! ```

use std::f64::consts::PI;
use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{
    AdjacencyStrategy, ArchimedeanSpiral, ChainAdjacency, LinearSpiral, LogarithmicSpiral,
    SpiralFunction, StarAdjacency, TreeAdjacency,
};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "hurricane.toml";

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "HURRICANE_";

/// Identity of the center node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CenterConfig {
    /// Center identifier.
    pub id: String,
    /// Center payload.
    pub data: String,
}

impl Default for CenterConfig {
    fn default() -> Self {
        Self {
            id: "center".to_string(),
            data: "center node".to_string(),
        }
    }
}

/// Spiral function selection and parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SpiralConfig {
    /// See [`LinearSpiral`].
    Linear {
        /// Radius growth per index.
        radius_step: f64,
        /// Angle growth per index, in radians.
        angle_step: f64,
        /// Height growth per index.
        height_step: f64,
    },
    /// See [`LogarithmicSpiral`].
    Logarithmic {
        /// Radius scale.
        a: f64,
        /// Angle per index and exponential growth rate.
        b: f64,
        /// Height growth per index.
        height_step: f64,
    },
    /// See [`ArchimedeanSpiral`].
    Archimedean {
        /// Radius offset.
        a: f64,
        /// Angle per index and radial pitch.
        b: f64,
        /// Height growth per index.
        height_step: f64,
    },
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self::Linear {
            radius_step: 0.2,
            angle_step: PI / 10.0,
            height_step: 0.1,
        }
    }
}

impl SpiralConfig {
    /// Instantiates the configured spiral function.
    #[must_use]
    pub fn build(&self) -> Box<dyn SpiralFunction> {
        match *self {
            Self::Linear {
                radius_step,
                angle_step,
                height_step,
            } => Box::new(LinearSpiral::new(radius_step, angle_step, height_step)),
            Self::Logarithmic { a, b, height_step } => {
                Box::new(LogarithmicSpiral::new(a, b, height_step))
            }
            Self::Archimedean { a, b, height_step } => {
                Box::new(ArchimedeanSpiral::new(a, b, height_step))
            }
        }
    }

    fn params(&self) -> [(&'static str, f64); 3] {
        match *self {
            Self::Linear {
                radius_step,
                angle_step,
                height_step,
            } => [
                ("radius_step", radius_step),
                ("angle_step", angle_step),
                ("height_step", height_step),
            ],
            Self::Logarithmic { a, b, height_step } | Self::Archimedean { a, b, height_step } => {
                [("a", a), ("b", b), ("height_step", height_step)]
            }
        }
    }
}

/// Linking strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjacencyKind {
    /// See [`ChainAdjacency`].
    #[default]
    Chain,
    /// See [`StarAdjacency`].
    Star,
    /// See [`TreeAdjacency`].
    Tree,
    /// New nodes receive no edges.
    None,
}

impl AdjacencyKind {
    /// Instantiates the configured strategy; `None` for [`AdjacencyKind::None`].
    #[must_use]
    pub fn build(self) -> Option<Box<dyn AdjacencyStrategy>> {
        match self {
            Self::Chain => Some(Box::new(ChainAdjacency)),
            Self::Star => Some(Box::new(StarAdjacency)),
            Self::Tree => Some(Box::new(TreeAdjacency)),
            Self::None => None,
        }
    }
}

/// Complete graph configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HurricaneConfig {
    /// Linking strategy.
    pub adjacency: AdjacencyKind,
    /// Layer thickness for height-layered queries.
    pub layer_size: f64,
    /// Center node identity.
    pub center: CenterConfig,
    /// Spiral layout.
    pub spiral: SpiralConfig,
}

impl Default for HurricaneConfig {
    fn default() -> Self {
        Self {
            adjacency: AdjacencyKind::default(),
            layer_size: 0.2,
            center: CenterConfig::default(),
            spiral: SpiralConfig::default(),
        }
    }
}

impl HurricaneConfig {
    /// Loads `hurricane.toml` from the working directory (if present) and
    /// environment overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Loads a specific TOML file (if present) and environment overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = Self::figment(path.as_ref()).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the provider chain without extracting it.
    #[must_use]
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Checks semantic constraints figment cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.center.id.is_empty() {
            return Err(Error::InvalidConfig("center.id cannot be empty".to_string()));
        }
        if !(self.layer_size.is_finite() && self.layer_size > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "layer_size must be positive and finite, got {}",
                self.layer_size
            )));
        }
        for (name, value) in self.spiral.params() {
            if !value.is_finite() {
                return Err(Error::InvalidConfig(format!(
                    "spiral.{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}
