pub mod asserts;
pub mod fixtures;

#[allow(unused_imports)]
pub use asserts::*;
#[allow(unused_imports)]
pub use fixtures::*;
