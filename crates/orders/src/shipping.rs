//! Shipping cost quotes.
//!
//! Costs are flat per method plus a surcharge for remote districts. A real
//! integration would ask a carrier API; this mirrors the store's fixed
//! tariff table.

use rust_decimal::Decimal;

use autoparts_core::ShippingMethod;

use crate::order::ShippingAddress;

/// Districts that carry the remote-delivery surcharge.
const REMOTE_DISTRICTS: &[&str] = &[
    "callao",
    "comas",
    "san juan de lurigancho",
    "villa el salvador",
];

/// Surcharge added for remote districts (non-pickup methods only).
const REMOTE_SURCHARGE: Decimal = Decimal::from_parts(500, 0, 0, false, 2);

/// Shipping cost calculator.
#[derive(Debug, Clone, Copy)]
pub struct ShippingQuote;

impl ShippingQuote {
    /// Flat base cost for a shipping method.
    #[must_use]
    pub const fn base_cost(method: ShippingMethod) -> Decimal {
        match method {
            ShippingMethod::Standard => Decimal::from_parts(1500, 0, 0, false, 2),
            ShippingMethod::Express => Decimal::from_parts(2500, 0, 0, false, 2),
            ShippingMethod::StorePickup => Decimal::ZERO,
        }
    }

    /// Cost for delivering to `address` with `method`.
    ///
    /// Store pickup is always free; other methods add the remote-district
    /// surcharge when the address district matches the remote list.
    #[must_use]
    pub fn cost_for(method: ShippingMethod, address: &ShippingAddress) -> Decimal {
        if method == ShippingMethod::StorePickup {
            return Decimal::ZERO;
        }

        let mut cost = Self::base_cost(method);
        let district = address.district.to_lowercase();
        if REMOTE_DISTRICTS.iter().any(|d| district.contains(d)) {
            cost += REMOTE_SURCHARGE;
        }
        cost
    }
}

/// A shipping method as presented to the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingOption {
    pub method: ShippingMethod,
    pub name: &'static str,
    pub description: &'static str,
    pub estimated_days: &'static str,
}

impl ShippingOption {
    /// The methods offered at checkout, in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [
            Self {
                method: ShippingMethod::Standard,
                name: "Standard delivery",
                description: "5-7 business days",
                estimated_days: "5-7",
            },
            Self {
                method: ShippingMethod::Express,
                name: "Express delivery",
                description: "2-3 business days",
                estimated_days: "2-3",
            },
            Self {
                method: ShippingMethod::StorePickup,
                name: "Store pickup",
                description: "No shipping cost",
                estimated_days: "0",
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(district: &str) -> ShippingAddress {
        ShippingAddress {
            recipient_name: "Juan Perez".to_string(),
            phone: "987654321".to_string(),
            street: "Av. Industrial".to_string(),
            number: "123".to_string(),
            reference: None,
            district: district.to_string(),
        }
    }

    #[test]
    fn test_base_costs() {
        assert_eq!(
            ShippingQuote::base_cost(ShippingMethod::Standard),
            Decimal::new(1500, 2)
        );
        assert_eq!(
            ShippingQuote::base_cost(ShippingMethod::Express),
            Decimal::new(2500, 2)
        );
        assert_eq!(
            ShippingQuote::base_cost(ShippingMethod::StorePickup),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_pickup_is_always_free() {
        assert_eq!(
            ShippingQuote::cost_for(ShippingMethod::StorePickup, &address("Callao")),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_remote_district_surcharge() {
        assert_eq!(
            ShippingQuote::cost_for(ShippingMethod::Standard, &address("Comas")),
            Decimal::new(2000, 2)
        );
        assert_eq!(
            ShippingQuote::cost_for(ShippingMethod::Standard, &address("Miraflores")),
            Decimal::new(1500, 2)
        );
    }

    #[test]
    fn test_district_match_is_case_insensitive() {
        assert_eq!(
            ShippingQuote::cost_for(ShippingMethod::Express, &address("SAN JUAN DE LURIGANCHO")),
            Decimal::new(3000, 2)
        );
    }

    #[test]
    fn test_all_options_listed() {
        let options = ShippingOption::all();
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].method, ShippingMethod::Standard);
    }
}
