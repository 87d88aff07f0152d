mod renderer;
pub mod text;

pub use renderer::Renderer;
