use flume::Receiver;
use telemetry::interfaces::gui_interface::SessionLoad;

/// LoaderInterface is the GUI-side end of the one-shot channel on which a spawned loader thread
/// delivers its session data.
#[derive(Debug, Default)]
pub struct LoaderInterface {
    pub rx: Option<Receiver<SessionLoad>>,
}

impl LoaderInterface {
    pub fn waiting(rx: Receiver<SessionLoad>) -> LoaderInterface {
        LoaderInterface { rx: Some(rx) }
    }

    pub fn is_waiting(&self) -> bool {
        self.rx.is_some()
    }

    /// poll checks the channel for the loader result without blocking the UI thread. The channel
    /// is dropped once the result has arrived (the load is one-shot).
    pub fn poll(&mut self) -> Option<SessionLoad> {
        let message = match &self.rx {
            Some(rx) => rx.try_recv().ok(),
            None => None,
        };

        if message.is_some() {
            self.rx = None;
        }

        message
    }
}
