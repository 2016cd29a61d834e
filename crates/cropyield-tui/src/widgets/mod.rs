//! Custom widget components

mod district_detail;
mod district_list;
mod footer;
mod header;
mod landing;
mod prediction_form;
mod prediction_result;
pub mod toast;

pub use district_detail::DistrictDetail;
pub use district_list::DistrictList;
pub use footer::Footer;
pub use header::MainHeader;
pub use landing::Landing;
pub use prediction_form::PredictionForm;
pub use prediction_result::PredictionPanel;
pub use toast::ToastStack;
