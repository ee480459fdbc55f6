pub mod recraft;
