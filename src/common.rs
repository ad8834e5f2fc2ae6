mod analysis_config;
mod band;
mod drawing_type;
mod htp_box;
mod htp_detection;

pub use analysis_config::*;
pub use band::*;
pub use drawing_type::*;
pub use htp_box::*;
pub use htp_detection::*;
