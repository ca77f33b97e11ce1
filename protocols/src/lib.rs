//! SNMP protocol pieces: object identifiers, the identity OID catalog and
//! rendering of agent values into record text.

pub mod catalog;
pub mod oid;
pub mod value;

pub use oid::{ObjectId, OidError};
