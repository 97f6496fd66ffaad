pub mod measure;
pub mod render;
