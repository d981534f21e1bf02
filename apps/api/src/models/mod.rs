pub mod job;

pub use job::{Job, JobRow, NewJob};
