pub mod regions;
pub mod weekly;

pub use regions::regions;
pub use weekly::weekly;
