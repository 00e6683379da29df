pub mod chart;
pub mod extremes;
pub mod heatmap;
pub mod insights;
pub mod normalizer;
pub mod performance;
pub mod strategy;

#[cfg(test)]
pub(crate) mod test_support;
