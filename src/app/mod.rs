pub mod app;
pub mod calc;
pub mod ui;
pub mod utils;

pub use app::App;
