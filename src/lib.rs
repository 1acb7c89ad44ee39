pub mod fixture;
pub mod scan;

pub use fixture::{Fixture, DEFAULT_SIZE};
pub use scan::{ScanFn, VARIANTS};
