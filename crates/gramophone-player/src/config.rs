use crate::cli::Args;
use directories::ProjectDirs;
use gramophone::disc::{DEFAULT_PICTURE_RADIUS, DEFAULT_ROTATE_SPEED, MAX_PICTURE_RADIUS};
use gramophone::{Colors, PictureSource, Settings};
use palette::Srgb;
use serde::Deserialize;
use serde_with::{DeserializeFromStr, DisplayFromStr, serde_as};
use std::path::Path;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, DeserializeFromStr, EnumString, StrumDisplay)]
#[strum(ascii_case_insensitive)]
pub enum PlayState {
    #[strum(to_string = "playing", serialize = "play", serialize = "on")]
    Playing,
    #[default]
    #[strum(to_string = "paused", serialize = "pause", serialize = "off")]
    Paused,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    pub picture_radius: i32,
    pub rotate_speed: f32,
    #[serde_as(as = "DisplayFromStr")]
    pub picture: PictureSource,
    pub state: PlayState,
    #[serde_as(as = "DisplayFromStr")]
    pub ring_color: Srgb<u8>,
    #[serde_as(as = "DisplayFromStr")]
    pub arm_color: Srgb<u8>,
    #[serde_as(as = "DisplayFromStr")]
    pub hub_color: Srgb<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            picture_radius: DEFAULT_PICTURE_RADIUS,
            rotate_speed: DEFAULT_ROTATE_SPEED,
            picture: PictureSource::Default,
            state: PlayState::Paused,
            ring_color: Srgb::new(0x00, 0x00, 0x00),
            arm_color: Srgb::new(0xC0, 0xC0, 0xC0),
            hub_color: Srgb::new(0x8A, 0x8A, 0x8A),
        }
    }
}

impl Config {
    /// A radius outside `1..=MAX_PICTURE_RADIUS` falls back to the default.
    pub fn settings(&self) -> Settings {
        let picture_radius = if (1..=MAX_PICTURE_RADIUS).contains(&self.picture_radius) {
            self.picture_radius
        } else {
            log::warn!(
                "Picture radius {} is outside 1..={}, using {}",
                self.picture_radius,
                MAX_PICTURE_RADIUS,
                DEFAULT_PICTURE_RADIUS
            );
            DEFAULT_PICTURE_RADIUS
        };

        Settings {
            picture_radius,
            rotate_speed: self.rotate_speed,
            picture: self.picture.clone(),
            colors: Colors {
                ring: Colors::opaque(self.ring_color),
                arm: Colors::opaque(self.arm_color),
                hub: Colors::opaque(self.hub_color),
            },
        }
    }

    /// Command-line values win over whatever was loaded.
    pub fn apply_args(mut self, args: &Args) -> Self {
        if let Some(radius) = args.picture_radius {
            self.picture_radius = radius;
        }
        if let Some(speed) = args.rotate_speed {
            self.rotate_speed = speed;
        }
        if let Some(picture) = &args.picture {
            self.picture = picture.clone();
        }
        if let Some(state) = args.state {
            self.state = state;
        }
        self
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
const ENV_PREFIX: &str = "GRAMOPHONE";

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "gramophone", "gramophone")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn builder() -> config::ConfigBuilder<config::builder::DefaultState> {
    config::Config::builder().add_source(config::File::from_str(
        DEFAULT_CONFIG,
        config::FileFormat::Toml,
    ))
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX).try_parsing(true)
}

fn load_layers(config_path: &Path, env: config::Environment) -> Result<Config, ConfigError> {
    let s = builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(env)
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Embedded defaults, then the user's `config.toml`, then `GRAMOPHONE_*`
/// environment variables.
pub fn load_config() -> Result<Config, ConfigError> {
    load_layers(&get_config_path()?, environment())
}

/// Layers a TOML document over the embedded defaults.
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let s = builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    or_default(load_config())
}

fn or_default(loaded: Result<Config, ConfigError>) -> Config {
    match loaded {
        Ok(c) => {
            log::info!(
                "Configuration loaded: radius {}, speed {}, picture {}",
                c.picture_radius,
                c.rotate_speed,
                c.picture
            );
            c
        }
        Err(e) => {
            log::warn!("Falling back to built-in configuration: {}", e);
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gramophone::ResourcePath;

    #[test]
    fn test_embedded_defaults_match_default() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_overlay_overrides_defaults() {
        let config = parse_config(
            r##"
picture_radius = 120
picture = "resource:/org/gramophone/cover.png"
state = "Playing"
arm_color = "#ff0000"
"##,
        )
        .unwrap();

        assert_eq!(config.picture_radius, 120);
        assert_eq!(config.rotate_speed, DEFAULT_ROTATE_SPEED);
        assert_eq!(
            config.picture,
            PictureSource::Resource(ResourcePath::new("/org/gramophone/cover.png"))
        );
        assert_eq!(config.state, PlayState::Playing);
        assert_eq!(config.arm_color, Srgb::new(0xFF, 0x00, 0x00));
    }

    #[test]
    fn test_bad_color_is_an_error() {
        assert!(parse_config("hub_color = \"not a colour\"").is_err());
    }

    #[test]
    fn test_play_state_deserialization() {
        let cases = vec![
            ("\"playing\"", PlayState::Playing),
            ("\"PLAY\"", PlayState::Playing),
            ("\"on\"", PlayState::Playing),
            ("\"Paused\"", PlayState::Paused),
            ("\"off\"", PlayState::Paused),
        ];

        for (json, expected) in cases {
            let deserialized: PlayState = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
        assert_eq!(PlayState::Playing.to_string(), "playing");
    }

    #[test]
    fn test_args_override_config() {
        let args = Args {
            picture_radius: Some(90),
            state: Some(PlayState::Playing),
            ..Args::default()
        };
        let config = Config::default().apply_args(&args);

        assert_eq!(config.picture_radius, 90);
        assert_eq!(config.rotate_speed, DEFAULT_ROTATE_SPEED);
        assert_eq!(config.state, PlayState::Playing);
    }

    fn env_source(vars: &[(&str, &str)]) -> config::Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(map))
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let env = env_source(&[
            ("GRAMOPHONE_PICTURE_RADIUS", "250"),
            ("GRAMOPHONE_ROTATE_SPEED", "1.5"),
            ("GRAMOPHONE_STATE", "playing"),
            ("GRAMOPHONE_HUB_COLOR", "#102030"),
            ("OTHER_PICTURE_RADIUS", "7"),
        ]);
        let config = load_layers(Path::new("/nonexistent/gramophone/config.toml"), env).unwrap();

        assert_eq!(config.picture_radius, 250);
        assert_eq!(config.rotate_speed, 1.5);
        assert_eq!(config.state, PlayState::Playing);
        assert_eq!(config.hub_color, Srgb::new(0x10, 0x20, 0x30));
        assert_eq!(config.picture, PictureSource::Default);
    }

    #[test]
    fn test_missing_user_file_and_empty_environment_give_defaults() {
        let config =
            load_layers(Path::new("/nonexistent/gramophone/config.toml"), env_source(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_failure_falls_back_to_defaults() {
        assert_eq!(or_default(Err(ConfigError::ConfigDirNotFound)), Config::default());

        let broken = parse_config("picture_radius = \"wide\"");
        assert!(broken.is_err());
        assert_eq!(or_default(broken), Config::default());
    }

    #[test]
    fn test_out_of_range_radius_falls_back() {
        for radius in [0, -5, MAX_PICTURE_RADIUS + 1, i32::MAX] {
            let config = Config {
                picture_radius: radius,
                ..Config::default()
            };
            assert_eq!(config.settings().picture_radius, DEFAULT_PICTURE_RADIUS);
        }
        let config = Config {
            picture_radius: 42,
            ..Config::default()
        };
        assert_eq!(config.settings().picture_radius, 42);
    }

    #[test]
    fn test_settings_carry_colors() {
        let settings = Config::default().settings();
        assert_eq!(settings.picture_radius, DEFAULT_PICTURE_RADIUS);
        assert_eq!(settings.colors, Colors::default());
    }
}
