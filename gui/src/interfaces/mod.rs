pub mod loader_interface;
