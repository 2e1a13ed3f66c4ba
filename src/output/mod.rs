pub(crate) mod assets;
pub(crate) mod fingerprint;
pub(crate) mod generate;
