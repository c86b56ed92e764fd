pub mod home;
pub mod venues;
