pub mod cell;
pub mod response;
pub mod runset;
pub mod sample;
