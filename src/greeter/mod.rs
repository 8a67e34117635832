pub mod backend;
pub mod session;
pub mod slot;
pub mod terminal;
