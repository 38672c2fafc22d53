mod builders;

pub use builders::PipeRequestBuilder;
