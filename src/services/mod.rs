pub mod assessment;
pub mod newsletter;
