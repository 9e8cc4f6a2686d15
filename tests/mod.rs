pub mod factory;
pub mod macros;
