//! Startup parameter resolution - which of the three modes a page load runs.

use serde::{Deserialize, Serialize};

/// External startup parameters, read once per page load.
///
/// On the reference page these arrive as URL query parameters; the
/// fixture harness supplies them from CLI flags. Missing and malformed
/// values are both fine - resolution never fails.
#[derive(Debug, Clone, Default)]
pub struct StartupParams {
    /// Raw `mode` parameter, if present
    pub mode: Option<String>,

    /// Raw `seed` parameter, if present
    pub seed: Option<String>,
}

impl StartupParams {
    /// Convenience constructor from optional string slices.
    pub fn new(mode: Option<&str>, seed: Option<&str>) -> Self {
        Self {
            mode: mode.map(str::to_string),
            seed: seed.map(str::to_string),
        }
    }
}

/// Operating mode for one page load. Resolved once; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationMode {
    /// Keep authored markup values as-is
    Static,

    /// All values derived once, deterministically, from this seed
    Seeded(String),

    /// Bounded random-walk ticks on a repeating timer
    Live,
}

impl SimulationMode {
    /// Resolves the mode from startup parameters.
    ///
    /// `mode=static` (exact match) wins outright. Otherwise a seed that is
    /// non-empty after trimming selects Seeded with the trimmed value.
    /// Anything else - absent, blank, or malformed - degrades to Live.
    pub fn resolve(params: &StartupParams) -> Self {
        if params.mode.as_deref() == Some("static") {
            return Self::Static;
        }
        match params.seed.as_deref().map(str::trim) {
            Some(seed) if !seed.is_empty() => Self::Seeded(seed.to_string()),
            _ => Self::Live,
        }
    }

    /// Short name for logging and fixture exports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Seeded(_) => "seeded",
            Self::Live => "live",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_wins_over_seed() {
        let params = StartupParams::new(Some("static"), Some("123"));
        assert_eq!(SimulationMode::resolve(&params), SimulationMode::Static);
    }

    #[test]
    fn test_seed_selects_seeded() {
        let params = StartupParams::new(None, Some("123"));
        assert_eq!(
            SimulationMode::resolve(&params),
            SimulationMode::Seeded("123".to_string())
        );
    }

    #[test]
    fn test_seed_is_trimmed() {
        let params = StartupParams::new(None, Some("  abc  "));
        assert_eq!(
            SimulationMode::resolve(&params),
            SimulationMode::Seeded("abc".to_string())
        );
    }

    #[test]
    fn test_blank_seed_degrades_to_live() {
        for blank in [None, Some(""), Some("   "), Some("\t\n")] {
            let params = StartupParams::new(None, blank);
            assert_eq!(SimulationMode::resolve(&params), SimulationMode::Live);
        }
    }

    #[test]
    fn test_unknown_mode_falls_through() {
        // Not an error: "STATIC", "Static" and garbage all fall through
        let params = StartupParams::new(Some("STATIC"), None);
        assert_eq!(SimulationMode::resolve(&params), SimulationMode::Live);

        let params = StartupParams::new(Some("banana"), Some("9"));
        assert_eq!(
            SimulationMode::resolve(&params),
            SimulationMode::Seeded("9".to_string())
        );
    }

    #[test]
    fn test_no_params_is_live() {
        assert_eq!(
            SimulationMode::resolve(&StartupParams::default()),
            SimulationMode::Live
        );
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(SimulationMode::Static.name(), "static");
        assert_eq!(SimulationMode::Seeded("1".into()).name(), "seeded");
        assert_eq!(SimulationMode::Live.name(), "live");
    }
}
