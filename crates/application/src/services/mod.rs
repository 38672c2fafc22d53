mod fn_rule;
mod resolver_registry;

pub use fn_rule::FnRule;
pub use resolver_registry::ResolverRegistry;
