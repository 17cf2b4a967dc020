// Per-player keyboard bindings for games built on winit

pub mod engine;
