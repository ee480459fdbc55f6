pub mod apis;
pub mod controller;
pub mod conversion;
pub mod dtos;
pub mod errors;
pub mod service;
