pub mod entry;
pub mod summary;

pub use entry::Entry;
pub use summary::Summary;
