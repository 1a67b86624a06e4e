pub mod add;
pub mod chart;
pub mod export;
pub mod goal;
pub mod summary;
