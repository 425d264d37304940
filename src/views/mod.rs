pub mod articles;
pub mod homepage;
pub mod layout;
pub mod newsletter;
pub mod quiz;

// Re-export commonly used functions from layout
pub use layout::{page, titled};
