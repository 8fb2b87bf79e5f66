//! Unit tests for wireboard.

mod debounce_tests;
mod geometry_tests;
mod render_tests;
mod scene_tests;
mod settings_tests;
