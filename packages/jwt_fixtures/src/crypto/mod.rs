//! Signature primitives and signature encoding conversion

mod der;
mod ecdsa;
mod rsa;
mod signer;

pub use self::der::{der_to_raw, raw_to_der};
pub use self::signer::{Signer, SignerRegistry, sign};
