use super::card::Card;
use super::credentials::ApiCredentials;
use super::item::ItemBag;
use super::shipping::ShippingOptions;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;

/// Whether the payer needs an existing account to check out.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum SolutionType {
    /// Guest checkout allowed.
    Sole,
    /// Account required.
    Mark,
}

impl fmt::Display for SolutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sole => "Sole",
            Self::Mark => "Mark",
        })
    }
}

/// Which page the payer lands on at the gateway.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum LandingPage {
    Billing,
    Login,
}

impl fmt::Display for LandingPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Billing => "Billing",
            Self::Login => "Login",
        })
    }
}

/// Every input to an Express Checkout authorization request.
///
/// All fields are optional at this level; `amount`, `return_url` and
/// `cancel_url` are checked when the payload is built.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizeParams {
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
    pub transaction_id: Option<String>,
    pub description: Option<String>,

    pub solution_type: Option<SolutionType>,
    pub landing_page: Option<LandingPage>,
    pub return_url: Option<String>,
    pub cancel_url: Option<String>,
    pub header_image_url: Option<String>,
    pub brand_name: Option<String>,
    /// 0: show shipping address, 1: hide it, 2: take it from the payer's account.
    pub no_shipping: Option<u8>,
    pub allow_note: Option<u8>,
    pub address_override: Option<u8>,
    pub logo_image_url: Option<String>,
    pub border_color: Option<String>,
    pub locale_code: Option<String>,
    pub customer_service_number: Option<String>,

    pub callback: Option<String>,
    pub callback_timeout: Option<i32>,
    pub shipping_options: ShippingOptions,

    pub max_amount: Option<Decimal>,
    pub tax_amount: Option<Decimal>,
    pub shipping_amount: Option<Decimal>,
    pub handling_amount: Option<Decimal>,
    pub shipping_discount: Option<Decimal>,
    pub insurance_amount: Option<Decimal>,
    pub seller_paypal_account_id: Option<String>,

    pub card: Option<Card>,
    pub items: ItemBag,
    pub credentials: ApiCredentials,
    pub test_mode: bool,
}

impl AuthorizeParams {
    /// Names of the required parameters that are absent or empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.amount.is_none() {
            missing.push("amount");
        }
        if is_blank(&self.return_url) {
            missing.push("returnUrl");
        }
        if is_blank(&self.cancel_url) {
            missing.push("cancelUrl");
        }
        missing
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}
