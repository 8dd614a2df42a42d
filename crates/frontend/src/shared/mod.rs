pub mod components;
pub mod dom;
pub mod format;
pub mod icons;
