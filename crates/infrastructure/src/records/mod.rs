//! Record files: declarative `.prb` rule definitions and the directory
//! loader that turns them into registry rules.
mod loader;
mod record_file;
mod template_rule;

pub use loader::{DirectoryRuleLoader, RECORD_FILE_SUFFIX};
pub use record_file::{AnswerEntry, RecordEntry, RecordFile};
pub use template_rule::TemplateRule;
