//! Exit codes shared by the summary and the CLI.
//! These codes are part of the public contract.

pub const SUCCESS: i32 = 0;
pub const MISMATCH: i32 = 1; // At least one record rendered differently
pub const CONFIG_ERROR: i32 = 2; // Suite unreadable/invalid, unknown layout, bad arguments
