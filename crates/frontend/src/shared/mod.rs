pub mod config;
pub mod icons;
pub mod number_format;
pub mod toast;
