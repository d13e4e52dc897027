mod engine;
mod options;
mod render;

pub use engine::Engine;
pub use options::EngineOptions;
pub use render::RenderConfig;
