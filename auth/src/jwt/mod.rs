pub mod claims;
pub mod errors;
pub mod signer;
pub mod verifier;

pub use claims::Claims;
pub use claims::ClaimsFactory;
pub use claims::Principal;
pub use claims::TokenTtl;
pub use errors::TokenError;
pub use signer::TokenSigner;
pub use signer::TOKEN_ALGORITHM;
pub use verifier::TokenVerifier;
