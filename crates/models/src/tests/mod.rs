
/// Product serialization and display tests
pub mod product_tests;
