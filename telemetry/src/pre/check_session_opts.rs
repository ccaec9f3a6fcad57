use crate::pre::roster::{TRACKS, YEARS};
use crate::pre::session_opts::SessionOpts;
use anyhow::Context;
use helpers::general::InputValueError;

/// check_session_opts assures that the inserted options are within reasonable limits and raises
/// an error if not.
pub fn check_session_opts(session_opts: &SessionOpts) -> anyhow::Result<()> {
    // demo sessions are synthetic, so year and track are not restricted to the known roster
    if session_opts.demo {
        return Ok(());
    }

    if !YEARS.contains(&session_opts.year) {
        return Err(InputValueError).context(format!(
            "year is {}, which is not within the supported seasons {:?}!",
            session_opts.year, YEARS
        ));
    }

    if !TRACKS.iter().any(|t| t.id == session_opts.track) {
        return Err(InputValueError).context(format!(
            "track \"{}\" is not a known track id!",
            session_opts.track
        ));
    }

    if session_opts.backend_url.is_empty() {
        return Err(InputValueError).context("backend_url must not be empty!");
    }

    Ok(())
}
