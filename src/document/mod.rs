pub(crate) mod css;
pub(crate) mod html;
pub(crate) mod style;
