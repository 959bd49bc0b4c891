mod discovery;
mod json_types;
mod parser;
mod value;

pub use discovery::find_state_files;
pub use json_types::{IndexKey, StateFile, StateInstance, StateResource};
pub use parser::{StateError, StateParser};
pub use value::Value;
