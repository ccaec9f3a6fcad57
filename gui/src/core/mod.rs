pub mod gui;
pub mod panels;
pub mod trackmap;
