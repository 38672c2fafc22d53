pub mod pipe;

pub use pipe::run_pipe;
