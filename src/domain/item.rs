use super::payload::Payload;
use super::ports::AmountFormatter;
use crate::error::{GatewayError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;

/// One line item of the order.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub price: Decimal,
    /// Merchant item number, sent as `L_PAYMENTREQUEST_0_NUMBER<n>`.
    #[serde(default)]
    pub code: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

impl Item {
    pub fn new(name: impl Into<String>, quantity: u32, price: Decimal) -> Self {
        Self {
            name: name.into(),
            description: None,
            quantity,
            price,
            code: None,
        }
    }
}

/// The order's line items, serialized after everything else in the payload.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
#[serde(transparent)]
pub struct ItemBag(Vec<Item>);

impl ItemBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: Item) {
        self.0.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds the `L_PAYMENTREQUEST_0_*` line fields and the item total.
    ///
    /// The total sums `quantity * price` over the formatted prices, so it
    /// always agrees with the per-line amounts the gateway sees.
    ///
    /// # Errors
    ///
    /// Fails when a formatted price does not read back as a decimal, or when
    /// the total does not fit in a `Decimal`.
    pub fn item_data(&self, formatter: &dyn AmountFormatter) -> Result<Payload> {
        let mut data = Payload::new();
        if self.0.is_empty() {
            return Ok(data);
        }

        let mut total = Decimal::ZERO;
        let mut lines = Payload::new();
        for (n, item) in self.0.iter().enumerate() {
            let price = formatter.format(item.price)?;
            let line_total = price
                .parse::<Decimal>()?
                .checked_mul(Decimal::from(item.quantity))
                .ok_or_else(|| {
                    GatewayError::AmountError(format!(
                        "line {n} total overflows: {} x {price}",
                        item.quantity
                    ))
                })?;
            total = total.checked_add(line_total).ok_or_else(|| {
                GatewayError::AmountError(format!("item total overflows at line {n}"))
            })?;

            lines.insert(format!("L_PAYMENTREQUEST_0_NAME{n}"), &item.name);
            lines.insert_opt(
                format!("L_PAYMENTREQUEST_0_DESC{n}"),
                item.description.as_deref(),
            );
            lines.insert(format!("L_PAYMENTREQUEST_0_QTY{n}"), item.quantity);
            lines.insert(format!("L_PAYMENTREQUEST_0_AMT{n}"), price);
            lines.insert_opt(format!("L_PAYMENTREQUEST_0_NUMBER{n}"), item.code.as_deref());
        }

        data.insert("PAYMENTREQUEST_0_ITEMAMT", formatter.format(total)?);
        data.merge(lines);
        Ok(data)
    }
}

impl From<Vec<Item>> for ItemBag {
    fn from(items: Vec<Item>) -> Self {
        Self(items)
    }
}
