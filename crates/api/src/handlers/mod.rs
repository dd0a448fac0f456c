pub mod availability;
pub mod booking;
pub mod community;
pub mod event;
pub mod profile;
pub mod venue;
