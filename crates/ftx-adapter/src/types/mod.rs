/*
[INPUT]:  API schema definitions
[OUTPUT]: Typed request/response shapes for the whole crate
[POS]:    Data layer - module wiring
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod models;
pub mod requests;
pub mod responses;

pub use enums::*;
pub use models::*;
pub use requests::*;
pub use responses::{OrderHistoryPage, TriggerOrderHistoryPage};
