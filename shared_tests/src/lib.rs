//! Used by the integration tests of both the [core](../kombi_core/index.html)
//! and the [full](../kombi/index.html) crates.  It provides test suites that
//! are generic over the type of input units, so that the same expectations
//! are checked against e.g. `char` input and `u8` input, and it provides
//! utilities that check the cursor contract of every match that the suites
//! do.


pub mod utils;

pub mod suites;
