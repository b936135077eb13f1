pub mod errors;
pub mod outputs;
pub mod smoke;

pub const ENDPOINT_DEFAULT: &str = "book";
