pub mod history;
pub mod render;
pub mod settings;
pub mod state;
