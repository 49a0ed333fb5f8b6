pub mod country;
pub mod response;
pub mod vote;
