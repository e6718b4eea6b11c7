mod field_tests;
mod pipeline_tests;
mod spec_tests;
