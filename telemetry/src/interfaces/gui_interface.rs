use crate::core::frame::RaceData;
use crate::pre::session_opts::SessionConfig;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// SessionLoad is the payload shipped from the loader thread to the GUI once the one-shot data
/// load (backend fetch or demo generation) has completed. An empty frame list signals failure.
#[derive(Debug)]
pub struct SessionLoad {
    pub config: SessionConfig,
    pub data: RaceData,
}
