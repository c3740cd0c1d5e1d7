use serde::Serialize;

pub const TOAST_DURATION_MS: u32 = 5_000;

const MAPBOX_VERSION: &str = "v3.3.0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderTheme {
    Light,
    Dark,
}

impl HeaderTheme {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("dark") => HeaderTheme::Dark,
            _ => HeaderTheme::Light,
        }
    }

    pub fn banner_class(&self) -> &'static str {
        match self {
            HeaderTheme::Light => "bg-gradient-to-r from-emerald-300 to-pink-200 h-32 flex items-center justify-center",
            HeaderTheme::Dark => "bg-gradient-to-r from-emerald-700 to-teal-900 h-32 flex items-center justify-center",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            HeaderTheme::Light => "text-center text-gray-700 animate-fade-in",
            HeaderTheme::Dark => "text-center text-white animate-fade-in",
        }
    }
}

pub fn header_theme() -> HeaderTheme {
    HeaderTheme::parse(option_env!("TRAVELOGUE_HEADER_THEME"))
}

pub fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|s| s.trim().parse().ok())
        .unwrap_or(log::Level::Info)
}

pub fn log_level() -> log::Level {
    parse_log_level(option_env!("TRAVELOGUE_LOG"))
}

/// Token typed into the setup form on first render, if one was baked in.
pub fn default_map_token() -> String {
    option_env!("TRAVELOGUE_MAPBOX_TOKEN")
        .unwrap_or_default()
        .to_string()
}

/// Options handed to the map constructor, minus the container element.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapOptions {
    pub style: &'static str,
    pub zoom: f64,
    /// `[lng, lat]`
    pub center: [f64; 2],
    pub projection: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapConfig {
    pub options: MapOptions,
    pub marker_color: &'static str,
    pub control_position: &'static str,
    pub script_url: String,
    pub stylesheet_url: String,
    pub token_help_url: &'static str,
    pub token_placeholder: &'static str,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            options: MapOptions {
                style: "mapbox://styles/mapbox/outdoors-v12",
                zoom: 2.0,
                center: [0.0, 20.0],
                projection: "globe",
            },
            marker_color: "#f97316",
            control_position: "top-right",
            script_url: format!("https://api.mapbox.com/mapbox-gl-js/{}/mapbox-gl.js", MAPBOX_VERSION),
            stylesheet_url: format!("https://api.mapbox.com/mapbox-gl-js/{}/mapbox-gl.css", MAPBOX_VERSION),
            token_help_url: "https://account.mapbox.com/access-tokens/",
            token_placeholder: "pk.eyJ1IjoieW91ci11c2VybmFtZS...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_theme_defaults_to_light() {
        assert_eq!(HeaderTheme::parse(None), HeaderTheme::Light);
        assert_eq!(HeaderTheme::parse(Some("")), HeaderTheme::Light);
        assert_eq!(HeaderTheme::parse(Some("neon")), HeaderTheme::Light);
        assert_eq!(HeaderTheme::parse(Some(" Dark ")), HeaderTheme::Dark);
    }

    #[test]
    fn log_level_falls_back_to_info() {
        assert_eq!(parse_log_level(None), log::Level::Info);
        assert_eq!(parse_log_level(Some("debug")), log::Level::Debug);
        assert_eq!(parse_log_level(Some("WARN")), log::Level::Warn);
        assert_eq!(parse_log_level(Some("loud")), log::Level::Info);
    }

    #[test]
    fn map_options_serialize_for_the_constructor() {
        let config = MapConfig::default();
        let json = serde_json::to_value(&config.options).unwrap();
        assert_eq!(json["style"], "mapbox://styles/mapbox/outdoors-v12");
        assert_eq!(json["zoom"], 2.0);
        assert_eq!(json["center"], serde_json::json!([0.0, 20.0]));
        assert_eq!(json["projection"], "globe");
        assert!(config.script_url.ends_with("mapbox-gl.js"));
    }
}
