pub mod color;
pub mod controller;
pub mod export;
pub mod fill;
pub mod input;
pub mod logging;
pub mod model;
pub mod raster;
pub mod settings;
pub mod state;
pub mod surface;
pub mod text;

pub use controller::{PaintController, PaintRequest};
pub use model::{CursorStyle, Rgba, Tool};
pub use state::PaintPhase;
pub use surface::Surface;
