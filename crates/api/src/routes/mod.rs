pub mod availability;
pub mod booking;
pub mod community;
pub mod event;
pub mod health;
pub mod profile;
pub mod venue;
