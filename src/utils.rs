pub mod logs;
pub(crate) mod xml;
