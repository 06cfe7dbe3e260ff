// Public API for integration tests and embedding the board in other front-ends

pub mod config;
pub mod console;
pub mod csv;
pub mod protocol;
pub mod state;
pub mod types;
