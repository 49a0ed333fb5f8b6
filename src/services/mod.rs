pub mod country;
pub mod database;
