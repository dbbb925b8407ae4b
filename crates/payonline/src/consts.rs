//! Constants of the hosted payment page contract.

/// Host serving the hosted payment pages.
pub const BASE_URL: &str = "https://secure.payonlinesystem.com";

/// `MerchantId` query parameter name.
pub const MERCHANT_ID: &str = "MerchantId";

/// `OrderId` query parameter name.
pub const ORDER_ID: &str = "OrderId";

/// `Amount` query parameter name.
pub const AMOUNT: &str = "Amount";

/// `Currency` query parameter name.
pub const CURRENCY: &str = "Currency";

/// `ValidUntil` query parameter name.
pub const VALID_UNTIL: &str = "ValidUntil";

/// `OrderDescription` query parameter name.
pub const ORDER_DESCRIPTION: &str = "OrderDescription";

/// `ReturnUrl` query parameter name.
pub const RETURN_URL: &str = "ReturnUrl";

/// `FailUrl` query parameter name.
pub const FAIL_URL: &str = "FailUrl";

/// Name under which the computed signature travels. Produced by the builder
/// itself, never accepted from caller data.
pub const SECURITY_KEY: &str = "SecurityKey";

/// Literal prefixing the shared secret in the signature input. The secret is
/// part of the signed input only and is never sent as a parameter.
pub const PRIVATE_SECURITY_KEY: &str = "PrivateSecurityKey";
