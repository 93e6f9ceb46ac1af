use super::payload::Payload;
use serde::Deserialize;

/// Payer details whose address doubles as the shipping destination.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Card {
    /// Projects the address and email into the ship-to fields.
    pub fn write_ship_to(&self, payload: &mut Payload) {
        payload.insert_opt("PAYMENTREQUEST_0_SHIPTONAME", self.name.as_deref());
        payload.insert_opt("PAYMENTREQUEST_0_SHIPTOSTREET", self.address1.as_deref());
        payload.insert_opt("PAYMENTREQUEST_0_SHIPTOSTREET2", self.address2.as_deref());
        payload.insert_opt("PAYMENTREQUEST_0_SHIPTOCITY", self.city.as_deref());
        payload.insert_opt("PAYMENTREQUEST_0_SHIPTOSTATE", self.state.as_deref());
        payload.insert_opt("PAYMENTREQUEST_0_SHIPTOCOUNTRYCODE", self.country.as_deref());
        payload.insert_opt("PAYMENTREQUEST_0_SHIPTOZIP", self.postcode.as_deref());
        payload.insert_opt("PAYMENTREQUEST_0_SHIPTOPHONENUM", self.phone.as_deref());
        payload.insert_opt("EMAIL", self.email.as_deref());
    }
}
