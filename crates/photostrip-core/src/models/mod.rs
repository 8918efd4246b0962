pub mod background;
pub mod crop;
pub mod layout;
pub mod session;

pub use background::{BackgroundSpec, Color, Theme};
pub use crop::CropRectangle;
pub use layout::{ItemPlacement, LayoutSpec};
pub use session::{BoothConfig, BoothSession, CaptureMode, Panel, SessionError};
