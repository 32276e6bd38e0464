//! Configuration for the reading order pipeline.
//!
//! A single [`ReadingOrderConfig`] selects the strategy and carries the
//! XY-Cut++ tuning parameters. All structs follow the same pattern:
//! `Default` for the documented defaults, `with_*` builders, `validate()`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::pipeline::reading_order::xycut::{DEFAULT_BETA, DEFAULT_DENSITY_THRESHOLD};

/// Available reading order strategy types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingOrderStrategyType {
    /// XY-Cut++: cross-layout masking plus recursive projection cuts.
    ///
    /// Handles multi-column pages with spanning titles, headers and footers.
    #[default]
    XYCutPlusPlus,

    /// Simple top-to-bottom, left-to-right ordering.
    ///
    /// Sorts by top edge (descending) then left edge (ascending).
    Simple,

    /// Keep the caller's order; only invalid objects are dropped.
    Off,
}

impl ReadingOrderStrategyType {
    /// Name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::XYCutPlusPlus => "xycut",
            Self::Simple => "simple",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for ReadingOrderStrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadingOrderStrategyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xycut" | "xycut++" | "xy-cut" => Ok(Self::XYCutPlusPlus),
            "simple" => Ok(Self::Simple),
            "off" | "none" => Ok(Self::Off),
            other => Err(Error::InvalidArgument(format!(
                "unknown reading order '{}', expected one of: off, simple, xycut",
                other
            ))),
        }
    }
}

/// XY-Cut++ tuning parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct XYCutConfig {
    /// Cross-layout width multiplier: an object qualifies when its width is
    /// at least `beta * max_width` of its group. Higher means fewer spanning
    /// objects; anything above 1.0 disables detection (default: 2.0).
    pub beta: f64,

    /// Density ratio above which horizontal-first splitting is preferred.
    /// Reported for diagnostics; axis choice is driven by measured gaps
    /// (default: 0.9).
    pub density_threshold: f64,

    /// Maximum segmentation depth before the flat sort is forced.
    /// `None` means "number of input objects".
    pub max_depth: Option<usize>,
}

impl Default for XYCutConfig {
    fn default() -> Self {
        Self {
            beta: DEFAULT_BETA,
            density_threshold: DEFAULT_DENSITY_THRESHOLD,
            max_depth: None,
        }
    }
}

impl XYCutConfig {
    /// Set the cross-layout width multiplier.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Set the density threshold.
    pub fn with_density_threshold(mut self, threshold: f64) -> Self {
        self.density_threshold = threshold;
        self
    }

    /// Cap the segmentation depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "beta must be a finite non-negative number, got {}",
                self.beta
            )));
        }
        if !self.density_threshold.is_finite() || !(0.0..=1.0).contains(&self.density_threshold)
        {
            return Err(Error::InvalidConfig(format!(
                "density_threshold must be within [0, 1], got {}",
                self.density_threshold
            )));
        }
        if self.max_depth == Some(0) {
            return Err(Error::InvalidConfig("max_depth must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Reading order configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingOrderConfig {
    /// The reading order strategy to use.
    pub strategy: ReadingOrderStrategyType,

    /// XY-Cut++ parameters (ignored by the other strategies).
    pub xycut: XYCutConfig,

    /// Order the pages of a document in parallel.
    pub parallel_pages: bool,
}

impl ReadingOrderConfig {
    /// Create config with defaults (XY-Cut++, sequential pages).
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the strategy.
    pub fn with_strategy(mut self, strategy: ReadingOrderStrategyType) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replace the XY-Cut++ parameters.
    pub fn with_xycut(mut self, xycut: XYCutConfig) -> Self {
        self.xycut = xycut;
        self
    }

    /// Enable or disable page-parallel processing.
    pub fn with_parallel_pages(mut self, enabled: bool) -> Self {
        self.parallel_pages = enabled;
        self
    }

    /// Check every nested parameter.
    pub fn validate(&self) -> Result<()> {
        self.xycut.validate()
    }
}
