pub mod buckets;
pub mod chart;
pub mod chunks;
pub mod downsample;
pub mod filter;
