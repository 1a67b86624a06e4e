// src/export/mod.rs

mod xlsx;

pub use xlsx::export_xlsx;
