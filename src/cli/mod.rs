//! Interactive console front end.
//!
//! - [`input`] - Where selections and registration numbers come from
//! - [`shell`] - The attendant menu loop

pub mod input;
pub mod shell;

pub use input::{DialoguerInput, InputError, InputSource, LineInputReader};
pub use shell::ParkingShell;
