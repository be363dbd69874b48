pub mod market;
pub mod series;
pub mod signal;
pub mod snapshot;

pub use market::*;
pub use series::*;
pub use signal::*;
pub use snapshot::*;
