pub mod clean;
pub mod pipeline;
