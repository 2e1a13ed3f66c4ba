pub(crate) mod compiler;
pub(crate) mod config;
pub(crate) mod phases;
pub(crate) mod states;
