pub mod registry;
pub mod server;
pub mod tools;
