//! The in-memory object model produced by the semantic binder: nodes,
//! messages, signals, environment variables, value tables, and attribute
//! schemas/values, cross-linked by name/id key rather than shared pointers.
//! See [`crate::binder`] for the code that populates a [`DbcFile`] from a
//! parse tree.

pub mod attribute;
pub mod env_var;
pub mod file;
pub mod message;
pub mod node;
pub mod signal;
pub mod signal_group;
pub mod value_table;

pub use attribute::{AttributeObjectType, AttributeValue, AttributeValueType, DbcAttribute};
pub use env_var::{DbcEnvironmentVariable, EnvironmentVariableAccessType, EnvironmentVariableType};
pub use file::DbcFile;
pub use message::DbcMessage;
pub use node::DbcNode;
pub use signal::{DbcSignal, SignalByteOrder, SignalValueType};
pub use signal_group::DbcSignalGroup;
pub use value_table::DbcValueTable;
