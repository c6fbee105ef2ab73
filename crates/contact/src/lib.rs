//! Contact-submission pipeline: the form collector that owns the draft on
//! the visitor's side, and the submission handler that writes accepted
//! submissions into the external record store.

mod collector;
mod handler;
mod store;
mod transport;
mod types;

pub use collector::*;
pub use handler::*;
pub use store::*;
pub use transport::*;
pub use types::*;

/// Shown when a required field is empty, by both the collector and the handler.
pub const REQUIRED_FIELDS_MESSAGE: &str = "필수 항목을 모두 입력해주세요.";

/// Returned by the handler once the record store accepted the submission.
pub const SUCCESS_MESSAGE: &str = "문의가 성공적으로 접수되었습니다.";

/// Returned by the handler when the record store write failed.
pub const FAILURE_MESSAGE: &str = "문의 접수 중 오류가 발생했습니다. 다시 시도해주세요.";

/// Shown by the collector when the handler could not be reached at all.
pub const FALLBACK_MESSAGE: &str = "문의 접수 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";
