pub mod articles;
pub mod homepage;
pub mod newsletter;
pub mod quiz;
