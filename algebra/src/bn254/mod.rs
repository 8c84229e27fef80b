/// The number of bytes for a scalar value over BN254.
pub const BN254_SCALAR_LEN: usize = 32;

mod fr;
pub use fr::*;

mod curve;
pub use curve::{BN254G1, BN254G2};

mod gt;
pub use gt::*;

mod pairing;
pub use pairing::*;
