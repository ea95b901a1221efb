// Pipeline stage modules
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod record;
pub mod render;
pub mod report;
pub mod sort;
pub mod split;
pub mod transform;
pub mod validate;
