pub mod model;
pub mod patterns;
pub mod scan;
