//! App-wide constants.
//!
//! Centralises the tool name and default operands so a rename or a
//! new default only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "sumfact";

/// Default first operand when none is supplied on the command line.
pub const DEFAULT_LHS: i64 = 3;

/// Default second operand when none is supplied on the command line.
pub const DEFAULT_RHS: i64 = 4;
