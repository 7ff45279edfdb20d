pub mod traits;

pub use traits::{RecordSource, WarehouseSink};
