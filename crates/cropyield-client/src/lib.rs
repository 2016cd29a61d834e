//! cropyield-client - HTTP access to the crop yield prediction service
//!
//! The service is an external collaborator with two endpoints:
//! - `POST /predict` - farm parameters in, yield + weather estimate out
//! - `GET /districts` - the per-district crop catalogue
//!
//! [`CropApi`] is the seam the application layer depends on; [`HttpCropApi`]
//! is the reqwest-backed implementation.

pub mod api;
pub mod http;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use api::{CropApi, LocalCropApi};
pub use http::{parse_base_url, HttpCropApi, DEFAULT_BASE_URL, DISTRICTS_PATH, PREDICT_PATH};
