pub mod extractors;
pub mod password;
