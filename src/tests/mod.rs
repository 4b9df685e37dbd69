pub mod fixed32_tests;
pub mod fixed48_tests;
