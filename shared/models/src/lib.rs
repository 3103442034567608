//! # Fabrica Core Domain Models
//!
//! Domain models for the Fabrica routing-export system: the routing entry
//! emitted per approved (item, process) pair, the fixed process and
//! routing-number tables, and the workbook layout contract.
//!
//! All tables are immutable configuration data compiled into the binary;
//! nothing here is derived from input workbooks at runtime.

pub mod layout;
pub mod routing;

pub use layout::*;
pub use routing::*;
