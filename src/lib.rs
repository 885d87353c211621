pub mod data;

pub use data::loader::{load_file, parse_records, LoadError};
pub use data::model::{Division, Employee, Gender};
pub use data::query::Roster;
