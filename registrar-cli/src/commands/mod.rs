pub mod demo;
pub mod render;
pub mod report;
pub mod show;
