pub mod comparison;
pub mod forecaster;
pub mod history;
pub mod predictions;

pub use comparison::ComparisonService;
pub use forecaster::{forecast, predict_next, ForecastError};
pub use history::{HistoryService, NoHistory};
pub use predictions::PredictionService;
