pub mod entries;
pub mod goal;
