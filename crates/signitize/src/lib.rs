pub mod constants;
pub mod impose;
pub mod layout;
mod options;
mod stats;
mod types;

pub use impose::{load_pdf, plan_document, signitize};
pub use options::*;
pub use stats::calculate_statistics;
pub use types::*;
