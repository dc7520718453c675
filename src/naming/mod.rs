//! File naming: parsing names, canonical date-time names, and collision handling.

mod canonical;
mod collision;
mod file_name;
mod resolver;

pub use canonical::{canonical_name, is_canonical};
pub use collision::disambiguate;
pub use file_name::FileName;
pub use resolver::{NameResolver, Resolution};
