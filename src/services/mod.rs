pub mod map_session;
pub mod mapbox;

pub use map_session::{MapPhase, MapSlot};
