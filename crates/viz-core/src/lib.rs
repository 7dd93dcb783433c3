pub mod camera;
pub mod cloud;
pub mod color_mode;
pub mod constants;
pub mod model;
pub mod palette;
pub mod scene;
pub mod zone;

pub use camera::*;
pub use cloud::*;
pub use color_mode::*;
pub use constants::*;
pub use model::*;
pub use palette::*;
pub use scene::*;
pub use zone::*;
