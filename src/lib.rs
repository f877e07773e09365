pub mod constants;
pub mod error;
pub mod isa_layer;
pub mod isa_model;
pub mod standard;
pub mod profile;
pub mod math_utils;
pub mod temp_utils;
