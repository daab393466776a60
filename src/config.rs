use crate::logging::LogLevel;

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const DEFAULT_REVEAL_THRESHOLD_PERCENT: u32 = 10;
const DEFAULT_REVEAL_BOTTOM_MARGIN_PX: u32 = 100;
const DEFAULT_CARD_STAGGER_MS: u32 = 100;

const REVEAL_THRESHOLD_PERCENT_BOUNDS: (u32, u32) = (1, 100);
const REVEAL_BOTTOM_MARGIN_PX_BOUNDS: (u32, u32) = (0, 1_000);
const CARD_STAGGER_MS_BOUNDS: (u32, u32) = (0, 1_000);

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub log_level: LogLevel,
    pub reveal_threshold_percent: u32,
    pub reveal_bottom_margin_px: u32,
    pub card_stagger_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            reveal_threshold_percent: DEFAULT_REVEAL_THRESHOLD_PERCENT,
            reveal_bottom_margin_px: DEFAULT_REVEAL_BOTTOM_MARGIN_PX,
            card_stagger_ms: DEFAULT_CARD_STAGGER_MS,
        }
    }
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self::from_lookup(|name| match name {
            "SITE_LOG_LEVEL" => option_env!("SITE_LOG_LEVEL"),
            "SITE_REVEAL_THRESHOLD_PERCENT" => option_env!("SITE_REVEAL_THRESHOLD_PERCENT"),
            "SITE_REVEAL_BOTTOM_MARGIN_PX" => option_env!("SITE_REVEAL_BOTTOM_MARGIN_PX"),
            "SITE_CARD_STAGGER_MS" => option_env!("SITE_CARD_STAGGER_MS"),
            _ => None,
        })
    }

    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        Self {
            log_level: parse_log_level(lookup("SITE_LOG_LEVEL"), DEFAULT_LOG_LEVEL),
            reveal_threshold_percent: parse_u32_with_bounds(
                lookup("SITE_REVEAL_THRESHOLD_PERCENT"),
                DEFAULT_REVEAL_THRESHOLD_PERCENT,
                REVEAL_THRESHOLD_PERCENT_BOUNDS,
            ),
            reveal_bottom_margin_px: parse_u32_with_bounds(
                lookup("SITE_REVEAL_BOTTOM_MARGIN_PX"),
                DEFAULT_REVEAL_BOTTOM_MARGIN_PX,
                REVEAL_BOTTOM_MARGIN_PX_BOUNDS,
            ),
            card_stagger_ms: parse_u32_with_bounds(
                lookup("SITE_CARD_STAGGER_MS"),
                DEFAULT_CARD_STAGGER_MS,
                CARD_STAGGER_MS_BOUNDS,
            ),
        }
    }

    pub fn reveal_threshold(&self) -> f64 {
        f64::from(self.reveal_threshold_percent) / 100.0
    }

    pub fn reveal_root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.reveal_bottom_margin_px)
    }

    pub fn card_delay(&self, position: usize) -> String {
        let delay = u64::from(self.card_stagger_ms).saturating_mul(position as u64);
        format!("animation-delay: {delay}ms;")
    }
}

fn parse_u32_with_bounds(raw: Option<&str>, default: u32, bounds: (u32, u32)) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(raw: Option<&str>, default: LogLevel) -> LogLevel {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| LogLevel::from_str(&value.to_ascii_lowercase()))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&'static str, &'static str)]) -> SiteConfig {
        let vars: HashMap<&str, &str> = pairs.iter().copied().collect();
        SiteConfig::from_lookup(|name| vars.get(name).copied())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config_from(&[]), SiteConfig::default());
    }

    #[test]
    fn values_within_bounds_are_used() {
        let config = config_from(&[
            ("SITE_LOG_LEVEL", " DEBUG "),
            ("SITE_REVEAL_THRESHOLD_PERCENT", "25"),
            ("SITE_REVEAL_BOTTOM_MARGIN_PX", "0"),
            ("SITE_CARD_STAGGER_MS", "60"),
        ]);

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.reveal_threshold_percent, 25);
        assert_eq!(config.reveal_bottom_margin_px, 0);
        assert_eq!(config.card_stagger_ms, 60);
    }

    #[test]
    fn out_of_bounds_and_garbage_fall_back_to_defaults() {
        let config = config_from(&[
            ("SITE_LOG_LEVEL", "verbose"),
            ("SITE_REVEAL_THRESHOLD_PERCENT", "0"),
            ("SITE_REVEAL_BOTTOM_MARGIN_PX", "5000"),
            ("SITE_CARD_STAGGER_MS", "-1"),
        ]);

        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn default_reveal_options_match_observer_settings() {
        let config = SiteConfig::default();

        assert!((config.reveal_threshold() - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.reveal_root_margin(), "0px 0px -100px 0px");
    }

    #[test]
    fn card_delay_is_staggered_by_position() {
        let config = SiteConfig::default();

        assert_eq!(config.card_delay(0), "animation-delay: 0ms;");
        assert_eq!(config.card_delay(3), "animation-delay: 300ms;");
    }
}
