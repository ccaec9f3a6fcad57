use crate::core::frame::{RaceData, RawRaceData};
use anyhow::Context;
use std::time::Duration;

/// Number of fetch attempts before giving up on the backend.
pub const MAX_FETCH_ATTEMPTS: u32 = 3;

/// Fixed delay between two fetch attempts.
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

/// RaceDataApi abstracts the backend endpoint such that the retry logic can be tested against a
/// scripted implementation.
pub trait RaceDataApi {
    fn get_race_data(&self, year: u32, track_id: &str) -> anyhow::Result<RawRaceData>;
}

/// HttpRaceDataApi fetches the race data payload from the backend's HTTP endpoint.
pub struct HttpRaceDataApi {
    agent: ureq::Agent,
    url: String,
}

impl HttpRaceDataApi {
    pub fn new(url: &str) -> HttpRaceDataApi {
        HttpRaceDataApi {
            agent: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(30))
                .build(),
            url: url.to_owned(),
        }
    }
}

impl RaceDataApi for HttpRaceDataApi {
    fn get_race_data(&self, year: u32, track_id: &str) -> anyhow::Result<RawRaceData> {
        let raw: RawRaceData = self
            .agent
            .get(&self.url)
            .query("year", &year.to_string())
            .query("track", track_id)
            .call()
            .context("Race data request failed!")?
            .into_json()
            .context("Could not deserialize race data payload!")?;

        Ok(raw)
    }
}

/// fetch_race_data loads the race data for a session from the backend, retrying up to
/// MAX_FETCH_ATTEMPTS times with a fixed delay in between. A payload carrying an error field
/// counts as a failed attempt. Empty race data is returned once all attempts are exhausted.
pub fn fetch_race_data(api: &dyn RaceDataApi, year: u32, track_id: &str) -> RaceData {
    for attempt in 1..=MAX_FETCH_ATTEMPTS {
        match api.get_race_data(year, track_id) {
            Ok(raw) => {
                if let Some(err_msg) = &raw.error {
                    println!(
                        "WARNING: Backend returned an error on attempt {}/{}: {}",
                        attempt, MAX_FETCH_ATTEMPTS, err_msg
                    );
                } else {
                    return RaceData::from_raw(raw);
                }
            }
            Err(err) => {
                println!(
                    "WARNING: Race data fetch attempt {}/{} failed: {:#}",
                    attempt, MAX_FETCH_ATTEMPTS, err
                );
            }
        }

        if attempt < MAX_FETCH_ATTEMPTS {
            std::thread::sleep(RETRY_DELAY);
        }
    }

    println!("WARNING: All race data fetch attempts failed, returning empty race data!");
    RaceData::empty()
}
