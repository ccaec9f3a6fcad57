use clap::{AppSettings, Clap};

#[derive(Debug, Clap, Clone)]
#[clap(
    version = "0.1.0",
    name = "race-telemetry",
    about = "A race telemetry dashboard with replay and live playback"
)]
#[clap(setting = AppSettings::ColoredHelp)]
pub struct SessionOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Generate a synthetic demo session instead of fetching data from the backend
    #[clap(short, long)]
    pub demo: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set the season to load race data for
    #[clap(short, long, default_value = "2024")]
    pub year: u32,

    /// Set the track to load race data for (lowercase track id, e.g. "bahrain")
    #[clap(short, long, default_value = "bahrain")]
    pub track: String,

    /// Set the race data endpoint of the backend
    #[clap(short, long, default_value = "http://localhost:5000/api/race-data")]
    pub backend_url: String,
}

/// SessionConfig identifies the session whose data is (being) loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub year: u32,
    pub track_id: String,
}

impl SessionConfig {
    pub fn from_opts(session_opts: &SessionOpts) -> SessionConfig {
        SessionConfig {
            year: session_opts.year,
            track_id: session_opts.track.to_owned(),
        }
    }
}
