//! Pipe backend infrastructure: the stdio line protocol and the record
//! file loader.
pub mod pipe;
pub mod records;
