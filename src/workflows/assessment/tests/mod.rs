mod common;
mod grading;
mod metrics;
