//! Process exit codes.

pub const SUCCESS: i32 = 0;
pub const IO_ERROR: i32 = 1;
pub const CONFIG_ERROR: i32 = 2;
