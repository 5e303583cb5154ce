// Presentation layer: form validation, views and the command session that
// stand in front of the registry.

pub mod form;
pub mod render;
pub mod session;
