mod answer_query;
mod reload_records;

pub use answer_query::{AnswerQueryUseCase, QueryOutcome};
pub use reload_records::ReloadRecordsUseCase;
