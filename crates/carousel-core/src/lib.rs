pub mod animation;
pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod input;
pub mod math;
pub mod observer;
pub mod panel;
pub mod project;
pub mod registry;
pub mod scheduler;
pub mod state;

pub static PANEL_WGSL: &str = include_str!("../shaders/panel.wgsl");

pub use animation::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use input::*;
pub use observer::*;
pub use panel::*;
pub use project::*;
pub use registry::*;
pub use scheduler::*;
pub use state::*;
