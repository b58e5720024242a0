pub mod catalog;
pub mod localizer;
