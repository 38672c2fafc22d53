pub mod records;

pub use records::{AnswerQueryUseCase, QueryOutcome, ReloadRecordsUseCase};
