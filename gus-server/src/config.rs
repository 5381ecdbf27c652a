use gus_engine::DEFAULT_KOMI;

/// Runtime settings, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: String,
    /// Signing key for session strings. A random key is used when unset.
    pub secret: Option<String>,
    /// Komi for new games, in tenths of a point.
    pub komi: u32,
    /// Whether the server answers each accepted move with its own.
    pub opponent: bool,
    pub static_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: "3000".to_string(),
            secret: None,
            komi: DEFAULT_KOMI,
            opponent: true,
            static_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; unset and invalid values fall back to defaults.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();

        let komi = match var("GUS_KOMI") {
            Some(v) => v.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid GUS_KOMI={v}");
                defaults.komi
            }),
            None => defaults.komi,
        };

        Config {
            port: var("PORT").unwrap_or(defaults.port),
            secret: var("GUS_SECRET").filter(|s| !s.is_empty()),
            komi,
            opponent: var("GUS_OPPONENT").map_or(defaults.opponent, |v| v != "off"),
            static_dir: var("STATIC_DIR"),
        }
    }
}
