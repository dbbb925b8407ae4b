#![forbid(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

//! Types to build signed redirect URLs for the PayOnline hosted payment page.
//!
//! The processor renders the checkout page itself; the merchant only hands
//! the customer off with a GET redirect carrying the order fields and an MD5
//! `SecurityKey` computed over a fixed subset of them plus the shared secret.
//! [`PaymentPageRequestBuilder`] accumulates the order fields and
//! [`PaymentPageRequest`] renders the parameter set and the final URL.
//!
//! ```
//! use masking::Secret;
//! use payonline::{Amount, Currency, PaymentPageRequestBuilder};
//! use rust_decimal::Decimal;
//!
//! # fn main() -> Result<(), error_stack::Report<payonline::PaymentPageError>> {
//! let request = PaymentPageRequestBuilder::new("12345", Secret::new("secret".to_string()))
//!     .order_id("ORD-2041")
//!     .price(Amount::new(Decimal::new(1000, 2)), Currency::Usd)
//!     .build();
//!
//! let redirect = request.payment_url()?;
//! assert!(redirect.as_str().starts_with("https://secure.payonlinesystem.com/en/payment/?"));
//! # Ok(())
//! # }
//! ```

pub mod consts;
pub mod crypto;
pub mod errors;
pub mod request;
pub mod types;

pub use errors::PaymentPageError;
pub use request::{PaymentPageRequest, PaymentPageRequestBuilder};
pub use types::{Amount, Currency, Language, PaymentMethod};
