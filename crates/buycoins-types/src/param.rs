//! Parameter coercion for the validated API methods
//!
//! API methods accept either a typed value or its loosely-typed form (a wire
//! string, a float, an integer). [`IntoParam`] turns either into the typed
//! value, reporting failures against the caller's parameter name.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::enums::{Cryptocurrency, OrderSide, OrderStatus, PriceType};
use crate::error::{ValidationError, ValidationResult};

/// Conversion into a validated parameter value
pub trait IntoParam<T> {
    /// Convert, naming `parameter` in any error
    fn into_param(self, parameter: &'static str) -> ValidationResult<T>;
}

impl<T> IntoParam<T> for &str
where
    T: FromStr<Err = ValidationError>,
{
    fn into_param(self, parameter: &'static str) -> ValidationResult<T> {
        self.parse::<T>().map_err(|e| e.with_parameter(parameter))
    }
}

impl<T> IntoParam<T> for String
where
    T: FromStr<Err = ValidationError>,
{
    fn into_param(self, parameter: &'static str) -> ValidationResult<T> {
        self.as_str().into_param(parameter)
    }
}

impl<T> IntoParam<T> for &String
where
    T: FromStr<Err = ValidationError>,
{
    fn into_param(self, parameter: &'static str) -> ValidationResult<T> {
        self.as_str().into_param(parameter)
    }
}

impl IntoParam<OrderSide> for OrderSide {
    fn into_param(self, _parameter: &'static str) -> ValidationResult<OrderSide> {
        Ok(self)
    }
}

impl IntoParam<Cryptocurrency> for Cryptocurrency {
    fn into_param(self, _parameter: &'static str) -> ValidationResult<Cryptocurrency> {
        Ok(self)
    }
}

impl IntoParam<OrderStatus> for OrderStatus {
    fn into_param(self, _parameter: &'static str) -> ValidationResult<OrderStatus> {
        Ok(self)
    }
}

impl IntoParam<PriceType> for PriceType {
    fn into_param(self, _parameter: &'static str) -> ValidationResult<PriceType> {
        Ok(self)
    }
}

/// A strictly positive coin or price amount
///
/// Sent to the API as a `BigDecimal` string, so no float rounding happens on
/// the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// Create an amount, rejecting zero and negative values
    pub fn new(value: Decimal) -> ValidationResult<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(ValidationError::invalid("amount", value))
        }
    }

    /// The underlying decimal
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .or_else(|_| Decimal::from_scientific(s.trim()))
            .map_err(|_| ValidationError::invalid("amount", s))?;
        Self::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl IntoParam<Amount> for Amount {
    fn into_param(self, _parameter: &'static str) -> ValidationResult<Amount> {
        Ok(self)
    }
}

impl IntoParam<Amount> for Decimal {
    fn into_param(self, parameter: &'static str) -> ValidationResult<Amount> {
        Amount::new(self).map_err(|e| e.with_parameter(parameter))
    }
}

impl IntoParam<Amount> for f64 {
    fn into_param(self, parameter: &'static str) -> ValidationResult<Amount> {
        Decimal::from_f64(self)
            .ok_or_else(|| ValidationError::invalid(parameter, self))?
            .into_param(parameter)
    }
}

impl IntoParam<Amount> for f32 {
    fn into_param(self, parameter: &'static str) -> ValidationResult<Amount> {
        Decimal::from_f32(self)
            .ok_or_else(|| ValidationError::invalid(parameter, self))?
            .into_param(parameter)
    }
}

impl IntoParam<Amount> for i32 {
    fn into_param(self, parameter: &'static str) -> ValidationResult<Amount> {
        Decimal::from(self).into_param(parameter)
    }
}

impl IntoParam<Amount> for i64 {
    fn into_param(self, parameter: &'static str) -> ValidationResult<Amount> {
        Decimal::from(self).into_param(parameter)
    }
}

impl IntoParam<Amount> for u32 {
    fn into_param(self, parameter: &'static str) -> ValidationResult<Amount> {
        Decimal::from(self).into_param(parameter)
    }
}

impl IntoParam<Amount> for u64 {
    fn into_param(self, parameter: &'static str) -> ValidationResult<Amount> {
        Decimal::from(self).into_param(parameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_enum_from_str_param() {
        let side: OrderSide = "sell".into_param("order_side").unwrap();
        assert_eq!(side, OrderSide::Sell);

        let err = IntoParam::<OrderSide>::into_param("short", "order_side").unwrap_err();
        assert_eq!(err.parameter(), "order_side");
        assert_eq!(err.value(), Some("short"));
    }

    #[test]
    fn test_enum_passthrough() {
        let crypto: Cryptocurrency = Cryptocurrency::Ethereum.into_param("cryptocurrency").unwrap();
        assert_eq!(crypto, Cryptocurrency::Ethereum);
    }

    #[test]
    fn test_amount_from_float() {
        let amount: Amount = 0.01_f64.into_param("amount").unwrap();
        assert_eq!(amount.value(), dec!(0.01));

        let amount: Amount = 123.4_f64.into_param("static_price").unwrap();
        assert_eq!(amount.to_string(), "123.4");
    }

    #[test]
    fn test_amount_accepts_integers() {
        let amount: Amount = 2_u32.into_param("coin_amount").unwrap();
        assert_eq!(amount.value(), dec!(2));
    }

    #[test]
    fn test_amount_rejects_non_numbers() {
        let err = IntoParam::<Amount>::into_param(f64::NAN, "amount").unwrap_err();
        assert_eq!(err.parameter(), "amount");

        let err = IntoParam::<Amount>::into_param(f64::INFINITY, "coin_amount").unwrap_err();
        assert_eq!(err.parameter(), "coin_amount");

        let err = IntoParam::<Amount>::into_param("ten", "amount").unwrap_err();
        assert_eq!(err.value(), Some("ten"));
    }

    #[test]
    fn test_amount_rejects_non_positive() {
        assert!(IntoParam::<Amount>::into_param(0.0_f64, "amount").is_err());
        assert!(IntoParam::<Amount>::into_param(-1_i64, "amount").is_err());
        assert!(IntoParam::<Amount>::into_param(dec!(-0.5), "amount").is_err());
    }

    #[test]
    fn test_amount_serializes_as_string() {
        let amount = Amount::new(dec!(0.002)).unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"0.002\"");
    }
}
