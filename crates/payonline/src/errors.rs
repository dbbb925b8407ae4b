//! Errors surfaced while assembling payment page parameters.

/// Custom Result
/// A custom datatype that wraps the error variant <E> into a report, allowing
/// error_stack::Report<E> specific extendability
///
/// Effectively, equivalent to `Result<T, error_stack::Report<E>>`
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Failures while assembling the payment page parameters or URL.
#[derive(Debug, thiserror::Error)]
pub enum PaymentPageError {
    /// A mandatory field was never set on the builder, or was set to an
    /// empty value.
    #[error("Missing required field: {field_name}")]
    MissingRequiredField {
        /// Name of the field that was left unset.
        field_name: &'static str,
    },

    /// A field value could not be rendered into its wire format.
    #[error("Failed to format field: {field_name}")]
    FormattingFailed {
        /// Name of the field that failed to render.
        field_name: &'static str,
    },

    /// The signature digest could not be computed.
    #[error("Failed to compute the request signature")]
    SignatureGenerationFailed,

    /// The assembled parameters could not be encoded into a URL.
    #[error("Failed to encode the payment page url")]
    UrlEncodingFailed,
}

/// Cryptographic algorithm errors
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// The cryptographic algorithm was unable to encode the message
    #[error("Failed to encode given message")]
    EncodingFailed,
}
