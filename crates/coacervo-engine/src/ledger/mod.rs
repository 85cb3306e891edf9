pub(crate) mod parse;
pub mod store;
pub mod types;
pub(crate) mod validate;
