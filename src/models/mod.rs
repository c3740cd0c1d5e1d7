pub mod location;
pub mod mock;
pub mod trip;

pub use location::Location;
pub use trip::{Expense, Photo, Trip};
