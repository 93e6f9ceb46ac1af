use crate::domain::callback::effective_timeout;
use crate::domain::money::TwoDecimalFormatter;
use crate::domain::params::AuthorizeParams;
use crate::domain::payload::Payload;
use crate::domain::ports::{AmountFormatter, Gateway};
use crate::domain::response::{AuthorizationResponse, ReplyFields};
use crate::domain::shipping::{ShippingOption, ShippingOptions};
use crate::error::{GatewayError, Result};
use rust_decimal::Decimal;

/// Builds the `SetExpressCheckout` call that starts an authorization.
///
/// `ExpressAuthorizeRequest` owns the typed parameters of one API call and the
/// formatter used for shipping-option and line-item amounts. Building the
/// payload does not consume or change the request.
pub struct ExpressAuthorizeRequest<F: AmountFormatter = TwoDecimalFormatter> {
    params: AuthorizeParams,
    formatter: F,
}

impl ExpressAuthorizeRequest<TwoDecimalFormatter> {
    /// Creates a request over `params` with the two-decimal amount formatter.
    pub fn new(params: AuthorizeParams) -> Self {
        Self {
            params,
            formatter: TwoDecimalFormatter,
        }
    }
}

impl Default for ExpressAuthorizeRequest<TwoDecimalFormatter> {
    fn default() -> Self {
        Self::new(AuthorizeParams::default())
    }
}

impl<F: AmountFormatter> ExpressAuthorizeRequest<F> {
    /// Replaces the amount formatter, keeping the parameters.
    pub fn with_formatter<G: AmountFormatter>(self, formatter: G) -> ExpressAuthorizeRequest<G> {
        ExpressAuthorizeRequest {
            params: self.params,
            formatter,
        }
    }

    pub fn params(&self) -> &AuthorizeParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut AuthorizeParams {
        &mut self.params
    }

    pub fn set_callback(&mut self, callback: impl Into<String>) -> &mut Self {
        self.params.callback = Some(callback.into());
        self
    }

    pub fn callback(&self) -> Option<&str> {
        self.params.callback.as_deref()
    }

    pub fn set_callback_timeout(&mut self, seconds: i32) -> &mut Self {
        self.params.callback_timeout = Some(seconds);
        self
    }

    pub fn callback_timeout(&self) -> Option<i32> {
        self.params.callback_timeout
    }

    /// Records a shipping option at `index`, replacing any option already there.
    pub fn set_shipping_option(
        &mut self,
        index: u32,
        name: impl Into<String>,
        amount: Decimal,
        is_default: bool,
        label: Option<&str>,
    ) -> &mut Self {
        let mut option = ShippingOption::new(index, name, amount, is_default);
        option.label = label.map(str::to_owned);
        self.params.shipping_options.upsert(option);
        self
    }

    pub fn set_shipping_options(&mut self, options: ShippingOptions) -> &mut Self {
        self.params.shipping_options = options;
        self
    }

    pub fn shipping_options(&self) -> &ShippingOptions {
        &self.params.shipping_options
    }

    /// Builds the NVP payload for this request.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ValidationError`] naming every missing field
    /// when `amount`, `returnUrl` or `cancelUrl` is absent or empty. Nothing
    /// else is required: absent inputs are left out of the payload.
    ///
    /// Returns [`GatewayError::AmountError`] when a shipping-option or item
    /// amount cannot be formatted or the item total overflows.
    pub fn get_data(&self) -> Result<Payload> {
        let missing = self.params.missing_required();
        if !missing.is_empty() {
            tracing::debug!(?missing, "authorize request failed validation");
            return Err(GatewayError::ValidationError(missing));
        }

        let p = &self.params;
        let mut data = p.credentials.base_data();
        data.insert("METHOD", "SetExpressCheckout");
        data.insert("PAYMENTREQUEST_0_PAYMENTACTION", "Authorization");
        data.insert_opt("PAYMENTREQUEST_0_AMT", p.amount);
        data.insert_opt("PAYMENTREQUEST_0_CURRENCYCODE", p.currency.as_deref());
        data.insert_opt("PAYMENTREQUEST_0_INVNUM", p.transaction_id.as_deref());
        data.insert_opt("PAYMENTREQUEST_0_DESC", p.description.as_deref());

        // express checkout page setup
        data.insert_opt("SOLUTIONTYPE", p.solution_type);
        data.insert_opt("LANDINGPAGE", p.landing_page);
        data.insert_opt("RETURNURL", p.return_url.as_deref());
        data.insert_opt("CANCELURL", p.cancel_url.as_deref());
        data.insert_opt("HDRIMG", p.header_image_url.as_deref());
        data.insert_opt("BRANDNAME", p.brand_name.as_deref());
        data.insert_opt("NOSHIPPING", p.no_shipping);
        data.insert_opt("ALLOWNOTE", p.allow_note);
        data.insert_opt("ADDROVERRIDE", p.address_override);
        data.insert_opt("LOGOIMG", p.logo_image_url.as_deref());
        data.insert_opt("CARTBORDERCOLOR", p.border_color.as_deref());
        data.insert_opt("LOCALECODE", p.locale_code.as_deref());
        data.insert_opt("CUSTOMERSERVICENUMBER", p.customer_service_number.as_deref());

        if let Some(callback) = p.callback.as_deref().filter(|c| !c.is_empty()) {
            data.insert("CALLBACK", callback);
            data.insert("CALLBACKTIMEOUT", effective_timeout(p.callback_timeout));

            // shipping options only travel with a callback
            for option in p.shipping_options.iter() {
                option.write_fields(&mut data, &self.formatter)?;
            }
        }

        data.insert_opt("MAXAMT", p.max_amount);
        data.insert_opt("PAYMENTREQUEST_0_TAXAMT", p.tax_amount);
        data.insert_opt("PAYMENTREQUEST_0_SHIPPINGAMT", p.shipping_amount);
        data.insert_opt("PAYMENTREQUEST_0_HANDLINGAMT", p.handling_amount);
        data.insert_opt("PAYMENTREQUEST_0_SHIPDISCAMT", p.shipping_discount);
        data.insert_opt("PAYMENTREQUEST_0_INSURANCEAMT", p.insurance_amount);
        data.insert_opt(
            "PAYMENTREQUEST_0_SELLERPAYPALACCOUNTID",
            p.seller_paypal_account_id.as_deref(),
        );

        if let Some(card) = &p.card {
            card.write_ship_to(&mut data);
        }

        data.merge(p.items.item_data(&self.formatter)?);

        tracing::debug!(fields = data.len(), "built SetExpressCheckout payload");
        Ok(data)
    }

    /// Wraps the gateway's reply to this request.
    pub fn create_response(&self, reply: ReplyFields) -> AuthorizationResponse {
        AuthorizationResponse::new(reply, self.params.test_mode)
    }

    /// Builds the payload, posts it through `gateway` and wraps the reply.
    pub async fn send(&self, gateway: &dyn Gateway) -> Result<AuthorizationResponse> {
        let payload = self.get_data()?;
        tracing::info!(
            invoice = self.params.transaction_id.as_deref().unwrap_or_default(),
            "sending SetExpressCheckout"
        );
        let reply = gateway.post(&payload).await?;
        let response = self.create_response(reply);
        if !response.is_redirect() {
            tracing::warn!(
                code = response.code().unwrap_or_default(),
                message = response.message().unwrap_or_default(),
                "gateway did not acknowledge SetExpressCheckout"
            );
        }
        Ok(response)
    }
}
