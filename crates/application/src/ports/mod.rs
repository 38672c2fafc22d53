mod resolution_rule;
mod rule_loader;

pub use resolution_rule::ResolutionRule;
pub use rule_loader::RuleLoader;
