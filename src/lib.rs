pub mod demo;
pub mod field;
pub mod labels;
pub mod output;
pub mod study;
