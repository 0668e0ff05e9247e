pub mod cohort;
pub mod dimension;
pub mod result;
pub mod risk;
pub mod variant;
