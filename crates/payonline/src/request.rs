//! Builder for the hosted payment page redirect.
//!
//! The flow mirrors the processor contract: mandatory order fields first,
//! optional fields only when non-empty, caller extra data merged over them,
//! and the `SecurityKey` digest appended last.

use error_stack::{report, ResultExt};
use indexmap::IndexMap;
use masking::{PeekInterface, Secret};
use time::{macros::format_description, PrimitiveDateTime};
use url::Url;

use crate::{
    consts,
    crypto::{GenerateDigest, Md5},
    errors::{CustomResult, PaymentPageError},
    types::{Amount, Currency, Language, PaymentMethod},
};

/// Order price. The amount and currency always travel together; a half-set
/// pair is not representable.
#[derive(Clone, Copy, Debug)]
struct Price {
    amount: Amount,
    currency: Currency,
}

/// A fully configured hand-off to the hosted payment page.
///
/// Built once per checkout attempt through [`PaymentPageRequestBuilder`] and
/// then read through [`Self::parameters`] or [`Self::payment_url`]. The
/// merchant identifier and secret key are fixed at construction.
#[derive(Clone, Debug)]
pub struct PaymentPageRequest {
    merchant_id: String,
    secret_key: Secret<String>,
    language: Language,
    payment_method: PaymentMethod,
    order_id: Option<String>,
    price: Option<Price>,
    valid_until: Option<PrimitiveDateTime>,
    order_description: Option<String>,
    return_url: Option<String>,
    fail_url: Option<String>,
    data: IndexMap<String, String>,
}

impl PaymentPageRequest {
    /// Ordered query parameters for the hosted payment page.
    ///
    /// Mandatory fields come first (`MerchantId`, `OrderId`, `Amount`,
    /// `Currency`), optional fields follow only when non-empty
    /// (`ValidUntil`, `OrderDescription`, `ReturnUrl`, `FailUrl`), caller
    /// extra data is merged over them, and the computed `SecurityKey` is
    /// appended last. Extra data may overwrite any assembled field except
    /// `SecurityKey`; the signature is always computed from the values the
    /// builder itself holds, before the merge.
    pub fn parameters(&self) -> CustomResult<IndexMap<String, String>, PaymentPageError> {
        let signed = self.signed_fields()?;

        let mut parameters = IndexMap::new();
        for (name, value) in &signed {
            if let Some(value) = value.as_deref().filter(|value| !value.is_empty()) {
                parameters.insert((*name).to_string(), value.to_string());
            }
        }

        for (name, value) in [
            (consts::RETURN_URL, &self.return_url),
            (consts::FAIL_URL, &self.fail_url),
        ] {
            if let Some(value) = value.as_deref().filter(|value| !value.is_empty()) {
                parameters.insert(name.to_string(), value.to_string());
            }
        }

        // Caller data overwrites assembled fields in place and appends new
        // keys. The signature name is reserved.
        for (name, value) in &self.data {
            if name != consts::SECURITY_KEY {
                parameters.insert(name.clone(), value.clone());
            }
        }

        let signature = self.sign(&signed)?;
        parameters.insert(consts::SECURITY_KEY.to_string(), signature);

        Ok(parameters)
    }

    /// Base URL of the hosted page:
    /// `{host}/{language}/payment/{method_segment}`.
    ///
    /// The trailing slash of the bare `payment/` path is part of the
    /// contract and is never trimmed.
    pub fn base_payment_url(&self) -> String {
        format!(
            "{}/{}/payment/{}",
            consts::BASE_URL,
            self.language,
            self.payment_method.url_segment()
        )
    }

    /// Full redirect URL: the base page URL with the signed parameter set as
    /// a form-urlencoded query string, in [`Self::parameters`] order.
    pub fn payment_url(&self) -> CustomResult<Url, PaymentPageError> {
        let base_url = self.base_payment_url();
        let parameters = self.parameters()?;

        let mut url =
            Url::parse(&base_url).change_context(PaymentPageError::UrlEncodingFailed)?;
        url.query_pairs_mut().extend_pairs(&parameters);

        tracing::debug!(%base_url, "built payment page redirect url");
        Ok(url)
    }

    /// The six signed fields in signing order. Mandatory fields are
    /// validated here, so both the parameter set and the signature always
    /// see the same values.
    fn signed_fields(
        &self,
    ) -> CustomResult<[(&'static str, Option<String>); 6], PaymentPageError> {
        if self.merchant_id.is_empty() {
            return Err(report!(PaymentPageError::MissingRequiredField {
                field_name: "merchant_id",
            }));
        }

        let order_id = self
            .order_id
            .as_deref()
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                report!(PaymentPageError::MissingRequiredField {
                    field_name: "order_id",
                })
            })?;

        let price = self.price.ok_or_else(|| {
            report!(PaymentPageError::MissingRequiredField {
                field_name: "price",
            })
        })?;

        let valid_until = self
            .valid_until
            .map(|deadline| {
                deadline
                    .format(&format_description!(
                        "[year]-[month]-[day] [hour]:[minute]:[second]"
                    ))
                    .change_context(PaymentPageError::FormattingFailed {
                        field_name: "valid_until",
                    })
            })
            .transpose()?;

        Ok([
            (consts::MERCHANT_ID, Some(self.merchant_id.clone())),
            (consts::ORDER_ID, Some(order_id.to_string())),
            (consts::AMOUNT, Some(price.amount.to_string())),
            (consts::CURRENCY, Some(price.currency.to_string())),
            (consts::VALID_UNTIL, valid_until),
            (consts::ORDER_DESCRIPTION, self.order_description.clone()),
        ])
    }

    /// Computes the `SecurityKey` digest.
    ///
    /// Present non-empty signed fields are concatenated as
    /// `{Field}={value}&` in signing order, the shared secret is appended as
    /// `PrivateSecurityKey={secret}` with no trailing separator, and the
    /// result is the lowercase hex MD5 of the UTF-8 bytes. Redirect URLs and
    /// extra data never participate.
    fn sign(
        &self,
        signed: &[(&'static str, Option<String>)],
    ) -> CustomResult<String, PaymentPageError> {
        let mut input = String::new();
        for (name, value) in signed {
            if let Some(value) = value.as_deref().filter(|value| !value.is_empty()) {
                input.push_str(&format!("{name}={value}&"));
            }
        }
        input.push_str(&format!(
            "{}={}",
            consts::PRIVATE_SECURITY_KEY,
            self.secret_key.peek()
        ));

        let digest = Md5
            .generate_digest(input.as_bytes())
            .change_context(PaymentPageError::SignatureGenerationFailed)?;
        Ok(hex::encode(digest))
    }
}

/// Fluent builder for [`PaymentPageRequest`].
///
/// Setters assign state only and may be called in any order; validation of
/// mandatory fields happens when the built request is read.
#[derive(Clone, Debug)]
pub struct PaymentPageRequestBuilder {
    merchant_id: String,
    secret_key: Secret<String>,
    language: Language,
    payment_method: PaymentMethod,
    order_id: Option<String>,
    price: Option<Price>,
    valid_until: Option<PrimitiveDateTime>,
    order_description: Option<String>,
    return_url: Option<String>,
    fail_url: Option<String>,
    data: IndexMap<String, String>,
}

impl PaymentPageRequestBuilder {
    /// Creates a builder for the given merchant credentials.
    ///
    /// The secret key is used only inside the signature input and is never
    /// transmitted as a parameter.
    pub fn new(merchant_id: impl Into<String>, secret_key: Secret<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            secret_key,
            language: Language::default(),
            payment_method: PaymentMethod::default(),
            order_id: None,
            price: None,
            valid_until: None,
            order_description: None,
            return_url: None,
            fail_url: None,
            data: IndexMap::new(),
        }
    }

    /// Selects the localized page variant.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Selects the payment instrument page.
    pub fn payment_method(mut self, payment_method: PaymentMethod) -> Self {
        self.payment_method = payment_method;
        self
    }

    /// Sets the merchant-side order identifier, echoed back by the
    /// processor.
    pub fn order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    /// Sets the order price as an amount/currency pair.
    pub fn price(mut self, amount: Amount, currency: Currency) -> Self {
        self.price = Some(Price { amount, currency });
        self
    }

    /// Sets the free-text order description shown on the payment page.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.order_description = Some(description.into());
        self
    }

    /// Sets the absolute URL the customer returns to after completing the
    /// payment.
    pub fn return_url(mut self, return_url: impl Into<String>) -> Self {
        self.return_url = Some(return_url.into());
        self
    }

    /// Sets the absolute URL the customer is redirected to when the payment
    /// cannot be completed.
    pub fn fail_url(mut self, fail_url: impl Into<String>) -> Self {
        self.fail_url = Some(fail_url.into());
        self
    }

    /// Sets the UTC deadline after which the invoice can no longer be paid,
    /// rendered as `YYYY-MM-DD HH:MM:SS`.
    pub fn valid_until(mut self, valid_until: PrimitiveDateTime) -> Self {
        self.valid_until = Some(valid_until);
        self
    }

    /// Attaches an extra key/value pair forwarded to the processor verbatim.
    ///
    /// Repeated calls with the same name overwrite the previous value.
    pub fn data(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(name.into(), value.into());
        self
    }

    /// Finalizes the configuration.
    pub fn build(self) -> PaymentPageRequest {
        PaymentPageRequest {
            merchant_id: self.merchant_id,
            secret_key: self.secret_key,
            language: self.language,
            payment_method: self.payment_method,
            order_id: self.order_id,
            price: self.price,
            valid_until: self.valid_until,
            order_description: self.order_description,
            return_url: self.return_url,
            fail_url: self.fail_url,
            data: self.data,
        }
    }
}
