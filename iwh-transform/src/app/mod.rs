pub mod transform_use_case;

pub use transform_use_case::{TransformRunSummary, TransformUseCase};
