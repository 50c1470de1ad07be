use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{page, reveal, viewport};
use crate::flags::UiFlags;

/// Deck configuration shared by both front ends.
///
/// Native priority: CLI args > Environment variables > TOML file > Defaults.
/// The browser front end starts from [`DeckConfig::default`] and derives
/// `diagnostics_enabled` from the page host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Slide count for front ends that don't discover slides (terminal preview).
    pub total_slides: usize,
    /// Desktop/mobile breakpoint in logical pixels.
    pub breakpoint_px: u32,
    /// Emit diagnostic logging (debug banner, mode changes, category logs).
    pub diagnostics_enabled: bool,
    /// Comma-separated diagnostic categories, e.g. "nav,flip" or "all".
    pub debug_categories: String,
    /// Brand shown in the footer and startup logs.
    pub brand: String,
    /// Delay before hiding the loader overlay.
    pub loader_delay_ms: u32,
    /// Intersection observer threshold for reveal notifications.
    pub reveal_threshold: f64,
    pub flags: UiFlags,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            total_slides: page::DEFAULT_SLIDES,
            breakpoint_px: viewport::DESKTOP_BREAKPOINT_PX,
            diagnostics_enabled: false,
            debug_categories: String::new(),
            brand: page::DEFAULT_BRAND.to_string(),
            loader_delay_ms: page::LOADER_DELAY_MS,
            reveal_threshold: reveal::THRESHOLD,
            flags: UiFlags::default(),
        }
    }
}

impl DeckConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: DeckConfig = toml::from_str(s).context("invalid deck config TOML")?;
        cfg.validate()
    }

    /// Check every value against its allowed range.
    pub fn validate(self) -> Result<Self> {
        validate_in_range(self.total_slides, 1, 64, "TOTAL_SLIDES")?;
        validate_in_range(self.breakpoint_px, 320, 4096, "BREAKPOINT_PX")?;
        validate_in_range(self.loader_delay_ms, 0, 10_000, "LOADER_DELAY_MS")?;
        if !self.reveal_threshold.is_finite() {
            return Err(anyhow!("REVEAL_THRESHOLD must be a finite number, got {}", self.reveal_threshold));
        }
        validate_in_range(self.reveal_threshold, 0.0, 1.0, "REVEAL_THRESHOLD")?;
        if self.brand.trim().is_empty() {
            return Err(anyhow!("BRAND cannot be empty"));
        }
        Ok(self)
    }

    /// Diagnostics default for a page served from `hostname`.
    pub fn diagnostics_for_host(hostname: &str) -> bool {
        matches!(hostname, "localhost" | "127.0.0.1")
    }

    /// Print current configuration (useful for debugging)
    pub fn print_summary(&self) {
        eprintln!("Slide deck configuration:");
        eprintln!("  Slides: {}", self.total_slides);
        eprintln!("  Breakpoint: {}px", self.breakpoint_px);
        eprintln!("  Diagnostics: {}", self.diagnostics_enabled);
        if !self.debug_categories.is_empty() {
            eprintln!("  Debug categories: {}", self.debug_categories);
        }
        eprintln!("  Brand: {}", self.brand);
        eprintln!("  Loader delay: {}ms", self.loader_delay_ms);
        eprintln!("  Reveal threshold: {}", self.reveal_threshold);
        eprintln!("  Flags: {:?}", self.flags);
    }
}

/// Validate that a value is within a given range (inclusive)
fn validate_in_range<T>(val: T, min: T, max: T, name: &str) -> Result<T>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if val < min || val > max {
        Err(anyhow!("{name} must be in range [{min}, {max}], got {val}"))
    } else {
        Ok(val)
    }
}

#[cfg(feature = "native")]
pub use cli::{load, CliArgs};

#[cfg(feature = "native")]
mod cli {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    /// Slide deck - terminal preview and scripted replay of the page controller
    ///
    /// Configuration priority: CLI args > Environment variables > Config file > Defaults
    #[derive(Parser, Debug)]
    #[command(name = "slidedeck")]
    #[command(version = env!("CARGO_PKG_VERSION"))]
    #[command(about = "Slide deck page controller", long_about = None)]
    pub struct CliArgs {
        /// TOML config file
        #[arg(short, long, env = "DECK_CONFIG")]
        pub config: Option<PathBuf>,

        /// Number of slides (1-64)
        #[arg(long, env = "TOTAL_SLIDES")]
        pub total_slides: Option<usize>,

        /// Desktop breakpoint in logical pixels (320-4096)
        #[arg(long, env = "BREAKPOINT_PX")]
        pub breakpoint_px: Option<u32>,

        /// Emit diagnostic logging
        #[arg(long, env = "DIAGNOSTICS")]
        pub diagnostics: Option<bool>,

        /// Diagnostic categories (e.g. "nav,flip", "all")
        #[arg(long, env = "DECK_DEBUG")]
        pub debug: Option<String>,

        /// Brand shown in the footer
        #[arg(long, env = "BRAND")]
        pub brand: Option<String>,

        /// Rebind flip cards when the viewport crosses the breakpoint
        #[arg(long, env = "LIVE_REBIND")]
        pub live_rebind: Option<bool>,

        /// Replay JSON actions (one per line, "-" for stdin) and print snapshots
        #[arg(long)]
        pub script: Option<String>,

        /// Viewport width in pixels for scripted replay
        #[arg(long, default_value_t = 1280)]
        pub width: u32,
    }

    /// Load configuration from CLI args, environment variables and config file
    /// Priority: CLI args > Environment variables > Config file > Defaults
    pub fn load() -> Result<(DeckConfig, CliArgs)> {
        let args = CliArgs::parse();

        let mut cfg = match &args.config {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                DeckConfig::from_toml_str(&raw)?
            }
            None => DeckConfig::default(),
        };

        // clap already folds env vars into the args
        if let Some(n) = args.total_slides {
            cfg.total_slides = n;
        }
        if let Some(px) = args.breakpoint_px {
            cfg.breakpoint_px = px;
        }
        if let Some(on) = args.diagnostics {
            cfg.diagnostics_enabled = on;
        }
        if let Some(list) = &args.debug {
            cfg.debug_categories = list.clone();
            cfg.diagnostics_enabled = true;
        }
        if let Some(brand) = &args.brand {
            cfg.brand = brand.clone();
        }
        if let Some(on) = args.live_rebind {
            cfg.flags.live_rebind = on;
        }

        let cfg = cfg.validate()?;
        Ok((cfg, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = DeckConfig::default().validate().unwrap();
        assert_eq!(cfg.breakpoint_px, 1024);
        assert_eq!(cfg.total_slides, 5);
        assert!(!cfg.diagnostics_enabled);
    }

    #[test]
    fn toml_overrides_keep_other_defaults() {
        let cfg = DeckConfig::from_toml_str(
            r#"
            total_slides = 3
            brand = "Acme"

            [flags]
            live_rebind = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.total_slides, 3);
        assert_eq!(cfg.brand, "Acme");
        assert!(cfg.flags.live_rebind);
        assert!(cfg.flags.smooth_scroll);
        assert_eq!(cfg.loader_delay_ms, 500);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = DeckConfig::from_toml_str("total_slides = 0").unwrap_err();
        assert!(format!("{err:#}").contains("TOTAL_SLIDES"));

        let err = DeckConfig::from_toml_str("reveal_threshold = 1.5").unwrap_err();
        assert!(format!("{err:#}").contains("REVEAL_THRESHOLD"));
    }

    #[test]
    fn nan_threshold_is_rejected() {
        let cfg = DeckConfig {
            reveal_threshold: f64::NAN,
            ..DeckConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(format!("{err:#}").contains("finite"), "{err:#}");

        let err = DeckConfig::from_toml_str("reveal_threshold = nan").unwrap_err();
        assert!(format!("{err:#}").contains("REVEAL_THRESHOLD"));
    }

    #[test]
    fn diagnostics_follow_local_hosts() {
        assert!(DeckConfig::diagnostics_for_host("localhost"));
        assert!(DeckConfig::diagnostics_for_host("127.0.0.1"));
        assert!(!DeckConfig::diagnostics_for_host("smartcare.example"));
    }
}
