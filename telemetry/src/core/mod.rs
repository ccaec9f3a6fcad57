pub mod frame;
pub mod playback;
pub mod standings;
pub mod track;
pub mod viewport;
