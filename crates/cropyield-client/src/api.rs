//! Service trait for the prediction backend
//!
//! Both the TUI and headless runners go through this trait, so tests can swap
//! in a scripted implementation without a network.

use cropyield_core::prelude::*;
use cropyield_core::{DistrictRecord, PredictionRequest, PredictionResult};

/// Operations offered by the prediction service
#[trait_variant::make(CropApi: Send)]
pub trait LocalCropApi {
    /// Submit farm parameters and receive a yield/weather estimate
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult>;

    /// Fetch the full district crop catalogue
    async fn list_districts(&self) -> Result<Vec<DistrictRecord>>;
}
