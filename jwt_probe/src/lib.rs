//! Audits JSON Web Tokens for three classic misconfigurations:
//!
//! * weak HMAC signing secrets (HS256), found by a wordlist search;
//! * acceptance of unsigned tokens (`alg: none`);
//! * forgeability of arbitrary signed tokens.
//!
//! The crate is the pure core of the audit tool: a token codec over the
//! compact serialization, an HMAC signature engine with constant-time
//! comparison, a bounded brute-force search, and a deliberately permissive
//! forger. Terminal presentation lives in the companion CLI crate.
//!
//! # Example
//!
//! ```
//! use jwt_probe::{crack, CrackOptions, CrackOutcome, Token, Wordlist};
//!
//! let raw = jwt_probe::forge::forge(None, r#"{"user":"admin"}"#, Some(b"hunter2"))?;
//! let token = Token::parse(&raw)?;
//! let wordlist = Wordlist::from_lines(["letmein", "hunter2"]);
//!
//! match crack(&token, &wordlist, &CrackOptions::default()) {
//!     CrackOutcome::Found { secret, attempts, .. } => {
//!         assert_eq!(secret, "hunter2");
//!         assert_eq!(attempts, 2);
//!     }
//!     outcome => panic!("expected a match, got {outcome:?}"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(
    missing_docs,
    unused_import_braces,
    unused_imports,
    unused_qualifications
)]
#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_must_use
)]

pub mod b64;
pub mod crack;
pub mod error;
pub mod forge;
pub mod jwa;
pub mod jws;
pub mod jwt;

#[doc(inline)]
pub use crack::{crack, crack_parallel, AbortReason, CrackOptions, CrackOutcome, Wordlist};
#[doc(inline)]
pub use jwa::Algorithm;
#[doc(inline)]
pub use jwt::Token;
