use crate::config::PlayState;
use clap::Parser;
use gramophone::PictureSource;
use gramophone::disc::MAX_PICTURE_RADIUS;

/// Command-line overrides; anything left unset comes from the configuration.
#[derive(Parser, Debug, Default)]
#[command(name = "gramophone-player", version, about, long_about = None)]
pub struct Args {
    /// Radius of the picture in the middle of the disc, in pixels
    #[arg(
        short = 'r',
        long = "radius",
        value_parser = clap::value_parser!(i32).range(1..=i64::from(MAX_PICTURE_RADIUS))
    )]
    pub picture_radius: Option<i32>,

    /// Degrees the disc turns per frame
    #[arg(short = 's', long = "speed")]
    pub rotate_speed: Option<f32>,

    /// Picture to spin: "default", "resource:/path" or a file path
    #[arg(short = 'p', long)]
    pub picture: Option<PictureSource>,

    /// Start "playing" or "paused"
    #[arg(long)]
    pub state: Option<PlayState>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "gramophone-player",
            "--radius",
            "250",
            "-s",
            "1.5",
            "--picture",
            "/tmp/cover.png",
            "--state",
            "Playing",
        ])
        .unwrap();

        assert_eq!(args.picture_radius, Some(250));
        assert_eq!(args.rotate_speed, Some(1.5));
        assert_eq!(
            args.picture,
            Some(PictureSource::File(PathBuf::from("/tmp/cover.png")))
        );
        assert_eq!(args.state, Some(PlayState::Playing));
    }

    #[test]
    fn test_no_flags() {
        let args = Args::try_parse_from(["gramophone-player"]).unwrap();
        assert!(args.picture_radius.is_none());
        assert!(args.picture.is_none());
    }

    #[test]
    fn test_radius_out_of_range_is_rejected() {
        for radius in ["0", "-5", "1500000000"] {
            assert!(
                Args::try_parse_from(["gramophone-player", "--radius", radius]).is_err(),
                "radius {} should be rejected",
                radius
            );
        }
        let args = Args::try_parse_from(["gramophone-player", "-r", "1"]).unwrap();
        assert_eq!(args.picture_radius, Some(1));
    }

    #[test]
    fn test_bad_state_is_rejected() {
        assert!(Args::try_parse_from(["gramophone-player", "--state", "spinning"]).is_err());
    }
}
