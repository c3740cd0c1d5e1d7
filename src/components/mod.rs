pub mod budget_chart;
pub mod header;
pub mod icons;
pub mod map;
pub mod photo_gallery;
pub mod stats;
pub mod toaster;
pub mod trip_card;
pub mod trip_modal;

pub use header::Header;
pub use map::MapView;
pub use stats::{QuickStats, TripStats};
pub use toaster::Toaster;
pub use trip_card::TripCard;
pub use trip_modal::TripModal;
