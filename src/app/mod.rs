mod app;
mod plot;
mod scalar_input;

pub use app::App;
