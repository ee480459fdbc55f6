pub mod cors;
pub mod reqwest;
