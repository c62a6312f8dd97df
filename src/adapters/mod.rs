// Adapters layer: concrete implementations for the process's real streams
// (stdin, stdout). Tests substitute their own through the domain ports.

pub mod console;
pub mod stdin;
