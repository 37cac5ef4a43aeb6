pub mod types_test;
pub mod emissions_test;
