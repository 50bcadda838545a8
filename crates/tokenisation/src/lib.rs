#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Parsed result of a card tokenisation call.
//!
//! The payment processing service answers a tokenisation request with a flat
//! JSON object carrying the issued token and the metadata of the underlying
//! card. [`TokenisationResult`] is the deserialized form of that object.
//! Every field is independently optional: the service omits keys that do not
//! apply to the payment method, and an absent key is not an error.
//!
//! ```
//! use tokenisation::{ext_traits::ByteSliceExt, TokenisationResult};
//!
//! let body = br#"{"type":"card","token":"tok_ubfj2q76miwundwlk72vxt2i7q","last4":"4242"}"#;
//! let result: TokenisationResult = body.parse_struct("TokenisationResult").unwrap();
//!
//! assert_eq!(result.payment_method_type(), Some("card"));
//! assert_eq!(result.last4(), Some("4242"));
//! assert_eq!(result.scheme(), None);
//! ```

pub mod errors;
pub mod ext_traits;

use masking::{PeekInterface, Secret};
use serde::{Deserialize, Serialize};

/// Outcome of a tokenisation call, as reported by the payment processing
/// service.
///
/// The record is populated once by deserialization and read-only afterwards;
/// it carries no cross-field constraints and is safe to share across threads.
/// The token and the card expiry are wrapped in [`Secret`] so they stay
/// masked in `Debug` output.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct TokenisationResult {
    #[serde(rename = "type")]
    payment_method_type: Option<String>,
    token: Option<Secret<String>>,
    expires_on: Option<String>,
    expiry_month: Option<Secret<u8>>,
    expiry_year: Option<Secret<u16>>,
    scheme: Option<String>,
    last4: Option<String>,
    bin: Option<String>,
    card_type: Option<String>,
    card_category: Option<String>,
    issuer: Option<String>,
    issuer_country: Option<String>,
    product_id: Option<String>,
    product_type: Option<String>,
}

impl TokenisationResult {
    /// Payment method kind the token was issued for, e.g. `card`.
    pub fn payment_method_type(&self) -> Option<&str> {
        self.payment_method_type.as_deref()
    }

    /// Reference token issued for the card, present when issuance succeeded.
    ///
    /// Callers needing the raw value go through
    /// [`masking::PeekInterface::peek`] or
    /// [`masking::ExposeInterface::expose`] deliberately.
    pub fn token(&self) -> Option<&Secret<String>> {
        self.token.as_ref()
    }

    /// Timestamp after which the token can no longer be used.
    pub fn token_expiry(&self) -> Option<&str> {
        self.expires_on.as_deref()
    }

    /// Card expiry month, 1 through 12.
    pub fn card_expiry_month(&self) -> Option<u8> {
        self.expiry_month.as_ref().map(|month| *month.peek())
    }

    /// Four digit card expiry year.
    pub fn card_expiry_year(&self) -> Option<u16> {
        self.expiry_year.as_ref().map(|year| *year.peek())
    }

    /// Card network the tokenised card belongs to, e.g. `visa`.
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Last four digits of the card number.
    pub fn last4(&self) -> Option<&str> {
        self.last4.as_deref()
    }

    /// Bank identification number, the first six digits of the card number.
    pub fn bin(&self) -> Option<&str> {
        self.bin.as_deref()
    }

    /// Whether the card is a credit or a debit card, when the issuer reports
    /// it.
    pub fn card_type(&self) -> Option<&str> {
        self.card_type.as_deref()
    }

    /// Issuer specific card category.
    pub fn card_category(&self) -> Option<&str> {
        self.card_category.as_deref()
    }

    /// Name of the issuing bank.
    pub fn issuer(&self) -> Option<&str> {
        self.issuer.as_deref()
    }

    /// ISO country code of the issuing bank.
    pub fn issuer_country(&self) -> Option<&str> {
        self.issuer_country.as_deref()
    }

    /// Scheme specific product identifier.
    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }

    /// Scheme specific product type.
    pub fn product_type(&self) -> Option<&str> {
        self.product_type.as_deref()
    }
}
