pub mod engine;
pub mod fallback;
pub mod outcome;
pub mod special;

pub use engine::resolve_massif;
pub use fallback::resolve_all;
