/// Application layer for voxreel: CLI, keyboard input, terminal sessions.
pub mod app;
pub mod cli;
pub mod input;
