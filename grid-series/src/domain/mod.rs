pub mod error;
pub mod frame;
pub mod incident;
pub mod index;

pub use error::FrameError;
pub use frame::{Column, Frame};
pub use incident::IncidentWindow;
pub use index::{IndexZone, TimeIndex};
