use crate::error::Result;
use indexmap::IndexMap;
use url::Url;

/// The gateway's reply, already decoded into name/value pairs.
pub type ReplyFields = IndexMap<String, String>;

const LIVE_CHECKOUT_ENDPOINT: &str = "https://www.paypal.com/cgi-bin/webscr";
const TEST_CHECKOUT_ENDPOINT: &str = "https://www.sandbox.paypal.com/cgi-bin/webscr";

/// Reply to a `SetExpressCheckout` authorization call.
///
/// A successful call never completes a payment: it hands back a token and
/// the payer must be redirected to approve it.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorizationResponse {
    data: ReplyFields,
    test_mode: bool,
}

impl AuthorizationResponse {
    pub fn new(data: ReplyFields, test_mode: bool) -> Self {
        Self { data, test_mode }
    }

    pub fn data(&self) -> &ReplyFields {
        &self.data
    }

    fn field(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    fn acknowledged(&self) -> bool {
        matches!(self.field("ACK"), Some("Success" | "SuccessWithWarning"))
    }

    pub fn is_successful(&self) -> bool {
        false
    }

    pub fn is_redirect(&self) -> bool {
        self.acknowledged()
    }

    pub fn token(&self) -> Option<&str> {
        self.field("TOKEN")
    }

    pub fn transaction_reference(&self) -> Option<&str> {
        self.token()
    }

    pub fn message(&self) -> Option<&str> {
        self.field("L_LONGMESSAGE0")
    }

    pub fn code(&self) -> Option<&str> {
        self.field("L_ERRORCODE0")
    }

    /// Where the payer approves the payment, once the call was acknowledged.
    pub fn redirect_url(&self) -> Result<Option<Url>> {
        let Some(token) = self.token().filter(|_| self.is_redirect()) else {
            return Ok(None);
        };
        let endpoint = if self.test_mode {
            TEST_CHECKOUT_ENDPOINT
        } else {
            LIVE_CHECKOUT_ENDPOINT
        };
        let mut url = Url::parse(endpoint)?;
        url.query_pairs_mut()
            .append_pair("cmd", "_express-checkout")
            .append_pair("useraction", "commit")
            .append_pair("token", token);
        Ok(Some(url))
    }
}
