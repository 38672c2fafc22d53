mod mock_rules;

pub use mock_rules::*;
