pub mod check_session_opts;
pub mod demo;
pub mod fetch;
pub mod roster;
pub mod session_opts;
