// Module exports for CLI commands
//
// The binary currently exposes a single command; main.rs parses arguments
// and dispatches here.

pub mod solve;
