pub mod initialize;
pub mod read;
pub mod resize;
pub mod write;
