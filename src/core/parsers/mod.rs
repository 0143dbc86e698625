pub mod resource;

pub use resource::{parse_resource_file, parse_resource_str};
