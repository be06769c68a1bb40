//! Two-vector addition: a pure engine plus the drawing primitives that
//! visualize it as a parallelogram.

pub mod constants;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod scene;
pub mod types;

pub use engine::{compute, EngineInput, EngineResult};
pub use error::{EngineError, InputField};
pub use scene::{PlotConfig, Scene};
