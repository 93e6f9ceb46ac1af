use super::payload::Payload;
use super::ports::AmountFormatter;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Deserialize;

/// A shipping choice offered to the payer while the callback is active.
///
/// `index` names the option on the wire (`L_SHIPPINGOPTIONNAME<index>`); it is
/// not the option's position in [`ShippingOptions`].
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ShippingOption {
    pub index: u32,
    pub name: String,
    pub amount: Decimal,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub label: Option<String>,
}

impl ShippingOption {
    pub fn new(index: u32, name: impl Into<String>, amount: Decimal, is_default: bool) -> Self {
        Self {
            index,
            name: name.into(),
            amount,
            is_default,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Writes this option's fields into `payload`, keyed by its index.
    pub fn write_fields(
        &self,
        payload: &mut Payload,
        formatter: &dyn AmountFormatter,
    ) -> Result<()> {
        let i = self.index;
        payload.insert(format!("L_SHIPPINGOPTIONNAME{i}"), &self.name);
        payload.insert(
            format!("L_SHIPPINGOPTIONAMOUNT{i}"),
            formatter.format(self.amount)?,
        );
        payload.insert(
            format!("L_SHIPPINGOPTIONISDEFAULT{i}"),
            if self.is_default { "1" } else { "0" },
        );
        if let Some(label) = self.label.as_deref().filter(|l| !l.is_empty()) {
            payload.insert(format!("L_SHIPPINGOPTIONLABEL{i}"), label);
        }
        Ok(())
    }
}

/// Shipping options in the order they were recorded, unique by index.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
#[serde(from = "Vec<ShippingOption>")]
pub struct ShippingOptions(Vec<ShippingOption>);

impl ShippingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `option`, replacing any option already stored at the same index.
    ///
    /// A replaced option keeps its original position.
    pub fn upsert(&mut self, option: ShippingOption) {
        match self.0.iter_mut().find(|o| o.index == option.index) {
            Some(existing) => *existing = option,
            None => self.0.push(option),
        }
    }

    pub fn get(&self, index: u32) -> Option<&ShippingOption> {
        self.0.iter().find(|o| o.index == index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShippingOption> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ShippingOption>> for ShippingOptions {
    fn from(options: Vec<ShippingOption>) -> Self {
        options.into_iter().collect()
    }
}

impl FromIterator<ShippingOption> for ShippingOptions {
    fn from_iter<T: IntoIterator<Item = ShippingOption>>(iter: T) -> Self {
        let mut options = Self::new();
        for option in iter {
            options.upsert(option);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::TwoDecimalFormatter;
    use rust_decimal_macros::dec;

    #[test]
    fn test_upsert_overwrites_in_place() {
        let mut options = ShippingOptions::new();
        options.upsert(ShippingOption::new(0, "Ground", dec!(3), true));
        options.upsert(ShippingOption::new(2, "Air", dec!(9), false));
        options.upsert(ShippingOption::new(0, "Ground Saver", dec!(2.5), true));

        let names: Vec<&str> = options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Ground Saver", "Air"]);
        assert_eq!(options.len(), 2);
        assert_eq!(options.get(0).unwrap().amount, dec!(2.5));
    }

    #[test]
    fn test_deserialize_last_write_wins() {
        let json = r#"[
            {"index": 1, "name": "Standard", "amount": "4", "isDefault": true},
            {"index": 1, "name": "Standard Plus", "amount": "5"}
        ]"#;
        let options: ShippingOptions = serde_json::from_str(json).unwrap();

        assert_eq!(options.len(), 1);
        let option = options.get(1).unwrap();
        assert_eq!(option.name, "Standard Plus");
        assert!(!option.is_default);
        assert_eq!(option.label, None);
    }

    #[test]
    fn test_write_fields_skips_empty_label() {
        let formatter = TwoDecimalFormatter::new();
        let mut payload = Payload::new();
        ShippingOption::new(4, "Pickup", dec!(0), false)
            .with_label("")
            .write_fields(&mut payload, &formatter)
            .unwrap();

        assert_eq!(payload.get("L_SHIPPINGOPTIONNAME4"), Some("Pickup"));
        assert_eq!(payload.get("L_SHIPPINGOPTIONAMOUNT4"), Some("0.00"));
        assert_eq!(payload.get("L_SHIPPINGOPTIONISDEFAULT4"), Some("0"));
        assert!(!payload.contains_key("L_SHIPPINGOPTIONLABEL4"));
    }

    #[test]
    fn test_write_fields_uses_label_text() {
        let formatter = TwoDecimalFormatter::new();
        let mut payload = Payload::new();
        ShippingOption::new(1, "Express", dec!(12.5), true)
            .with_label("2 business days")
            .write_fields(&mut payload, &formatter)
            .unwrap();

        assert_eq!(payload.get("L_SHIPPINGOPTIONLABEL1"), Some("2 business days"));
        assert_eq!(payload.get("L_SHIPPINGOPTIONISDEFAULT1"), Some("1"));
    }
}
