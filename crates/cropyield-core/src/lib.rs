//! # cropyield-core - Core Domain Types
//!
//! Foundation crate for the crop yield client. Provides domain types, error
//! handling, logging setup, the request lifecycle state machine, and the
//! delimited list parser used by the district catalogue.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Farm Input (`form`)
//! - [`FarmInputForm`] - Raw form values entered by the user
//! - [`FormField`] - One input field of the form, with label and input kind
//!
//! ### Districts (`district`)
//! - [`District`] - The fixed set of districts offered by the prediction form
//! - [`DistrictRecord`] - One row of the crop catalogue returned by the backend
//! - [`DistrictCatalogue`] - Loaded, immutable collection of records
//! - [`parse_delimited_list()`] - Semicolon-delimited text → trimmed tokens
//!
//! ### Prediction (`prediction`)
//! - [`PredictionRequest`] - Payload of `POST /predict`
//! - [`PredictionResult`] - Response with every numeric field optional
//! - [`Reading`] - A display-ready value with its unit, or the `N/A` placeholder
//!
//! ### Request Lifecycle (`lifecycle`)
//! - [`RequestState`] - `Idle | Pending | Succeeded(T) | Failed(message)`
//! - [`RequestLifecycle`] - Tagged-union state plus request tokens that drop
//!   stale completions
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`ServiceErrorKind`] - `NetworkFailure` or `MalformedResponse`
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use cropyield_core::prelude::*;
//! ```

pub mod district;
pub mod error;
pub mod form;
pub mod lifecycle;
pub mod logging;
pub mod prediction;
pub mod prelude;

// Re-export commonly used types at crate root for convenience
pub use district::{parse_delimited_list, District, DistrictCatalogue, DistrictRecord};
pub use error::{Error, Result, ResultExt, ServiceErrorKind};
pub use form::{FarmInputForm, FieldKind, FormField};
pub use lifecycle::{RequestLifecycle, RequestState, RequestToken, Settlement};
pub use prediction::{
    PredictedYield, PredictionRequest, PredictionResult, Reading, Unit, WeatherReport,
    DEFAULT_REGION, PLACEHOLDER,
};
