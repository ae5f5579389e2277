pub mod draft;
pub mod session;
