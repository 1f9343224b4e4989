//! Configuration system for the raises solver.
//!
//! Load solver configuration from TOML or YAML files to control the time
//! budget, search behavior and the reduction pass without code changes.
//!
//! # Examples
//!
//! A `raises.toml` that caps the search at five seconds and turns the
//! reduction pass off:
//!
//! ```
//! use raises_config::{BounderType, SolverConfig};
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     [termination]
//!     seconds_spent_limit = 5
//!
//!     [search]
//!     bounder_type = "coarse"
//!
//!     [reduction]
//!     enabled = false
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(5)));
//! assert_eq!(config.search.bounder_type, BounderType::Coarse);
//! assert!(!config.reduction.enabled);
//! ```
//!
//! Missing files fall back to the defaults:
//!
//! ```
//! use raises_config::SolverConfig;
//!
//! let config = SolverConfig::load("raises.toml").unwrap_or_default();
//! // 20 second budget, tight bounder, greedy construction, reduction on
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Time budget used when none is configured.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(20);

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Everything a solve can be tuned with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// When to stop searching. Unset means the default time budget.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Branch-and-bound search configuration.
    #[serde(default)]
    pub search: SearchConfig,

    /// Reduction pass configuration.
    #[serde(default)]
    pub reduction: ReductionConfig,
}

impl SolverConfig {
    /// The default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid TOML, or holds values
    /// [`SolverConfig::validate`] rejects.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that parse but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.thread_count == ThreadCount::Count(0) {
            return Err(ConfigError::Invalid(
                "thread_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Replaces any time budget with `limit`.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: None,
            millis_spent_limit: Some(limit.as_millis() as u64),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the termination time limit in whole seconds.
    pub fn with_termination_seconds(self, seconds: u64) -> Self {
        self.with_time_limit(Duration::from_secs(seconds))
    }

    /// Caps the number of search nodes explored.
    pub fn with_node_limit(mut self, nodes: u64) -> Self {
        self.termination = Some(TerminationConfig {
            node_count_limit: Some(nodes),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the number of search threads.
    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.search.thread_count = thread_count;
        self
    }

    /// Enables or disables the reduction pass.
    pub fn with_reduction(mut self, enabled: bool) -> Self {
        self.reduction.enabled = enabled;
        self
    }

    /// Enables or disables bound-based pruning.
    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.search.enable_pruning = enabled;
        self
    }

    /// Selects the upper bound used for pruning.
    pub fn with_bounder(mut self, bounder_type: BounderType) -> Self {
        self.search.bounder_type = bounder_type;
        self
    }

    /// Selects how the initial incumbent is built.
    pub fn with_construction(mut self, construction_type: ConstructionType) -> Self {
        self.search.construction_type = construction_type;
        self
    }

    /// The configured time budget, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use raises_config::SolverConfig;
    /// use std::time::Duration;
    ///
    /// let config = SolverConfig::from_toml_str(r#"
    ///     [termination]
    ///     millis_spent_limit = 1500
    /// "#).unwrap();
    ///
    /// assert_eq!(config.time_limit(), Some(Duration::from_millis(1500)));
    /// ```
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the configured time limit or [`DEFAULT_TIME_LIMIT`].
    pub fn effective_time_limit(&self) -> Duration {
        self.time_limit().unwrap_or(DEFAULT_TIME_LIMIT)
    }

    /// Returns the node count limit, if configured.
    pub fn node_limit(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|t| t.node_count_limit)
    }
}

/// Search budget. Every configured limit applies; the first one hit wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Whole seconds of search.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend solving (added to the seconds).
    pub millis_spent_limit: Option<u64>,

    /// Maximum number of search nodes to explore.
    pub node_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Seconds and millis combined, or `None` if neither is set.
    ///
    /// A configured limit of zero is kept: it stops the search at its first
    /// termination check. Limits too large to add up saturate.
    pub fn time_limit(&self) -> Option<Duration> {
        if self.seconds_spent_limit.is_none() && self.millis_spent_limit.is_none() {
            return None;
        }
        let millis = self
            .seconds_spent_limit
            .unwrap_or(0)
            .saturating_mul(1000)
            .saturating_add(self.millis_spent_limit.unwrap_or(0));
        Some(Duration::from_millis(millis))
    }
}

/// Branch-and-bound search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Whether to prune nodes whose upper bound cannot beat the incumbent.
    #[serde(default = "default_true")]
    pub enable_pruning: bool,

    /// Upper bound used for pruning.
    #[serde(default)]
    pub bounder_type: BounderType,

    /// How the initial incumbent is built.
    #[serde(default)]
    pub construction_type: ConstructionType,

    /// Number of threads searching independent subtrees.
    #[serde(default)]
    pub thread_count: ThreadCount,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enable_pruning: true,
            bounder_type: BounderType::default(),
            construction_type: ConstructionType::default(),
            thread_count: ThreadCount::default(),
        }
    }
}

/// Upper bound selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BounderType {
    /// Remaining pips over the cheapest success cost.
    Coarse,

    /// Per-group completion costs plus fresh-group ratio.
    #[default]
    Tight,
}

/// Construction heuristic selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionType {
    /// Start the search with no incumbent.
    None,

    /// Largest die left, topped up with the smallest dice left.
    #[default]
    GreedyFill,
}

/// Search thread count configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadCount {
    /// Search on the calling thread only.
    #[default]
    None,

    /// Use all available CPU cores.
    Auto,

    /// Use a specific number of threads.
    Count(usize),
}

impl ThreadCount {
    /// The number of search threads to start; never zero.
    pub fn resolve(&self) -> usize {
        match self {
            ThreadCount::None => 1,
            ThreadCount::Auto => std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(1),
            ThreadCount::Count(n) => (*n).max(1),
        }
    }
}

impl std::fmt::Display for ThreadCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThreadCount::None => write!(f, "None"),
            ThreadCount::Auto => write!(f, "Auto"),
            ThreadCount::Count(n) => write!(f, "Count({})", n),
        }
    }
}

/// Reduction pass configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ReductionConfig {
    /// Whether guaranteed groups are reserved before searching (tens mode only).
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}
