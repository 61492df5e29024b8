pub mod oid;
pub mod value;
pub mod varbind;

pub use oid::{Oid, ParseOidError};
pub use value::Value;
pub use varbind::VarBind;
