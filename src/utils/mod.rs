pub mod budget;
pub mod format;
