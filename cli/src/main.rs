use clap::Clap;
use gui::core::gui::DashboardApp;
use telemetry::pre::check_session_opts::check_session_opts;
use telemetry::pre::session_opts::SessionOpts;

fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get session options from the command line arguments and check them
    let session_opts: SessionOpts = SessionOpts::parse();
    check_session_opts(&session_opts)?;

    // print session details
    if session_opts.demo {
        println!("INFO: Starting dashboard with a synthetic demo session");
    } else {
        println!(
            "INFO: Starting dashboard for {} {} (backend: {})",
            session_opts.track, session_opts.year, session_opts.backend_url
        );
    }

    // EXECUTION -----------------------------------------------------------------------------------
    // start GUI (must be done in the main thread); the data load itself runs on a loader thread
    // spawned by the app such that the UI stays responsive
    let app = DashboardApp::new(&session_opts);
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(Box::new(app), native_options);
    Ok(())
}
