//! Types for Buycoins GraphQL requests and responses

use buycoins_types::{Amount, Cryptocurrency, OrderSide, OrderStatus, PriceType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::documents::Document;

// ============================================================================
// Request / Response Envelopes
// ============================================================================

/// Body of a GraphQL POST
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    /// Document text
    pub query: &'static str,
    /// Variables object
    pub variables: Value,
    #[serde(skip)]
    operation: &'static str,
}

impl GraphQlRequest {
    /// Build a request for a document
    pub fn new(document: &Document, variables: Map<String, Value>) -> Self {
        Self {
            query: document.text,
            variables: Value::Object(variables),
            operation: document.operation,
        }
    }

    /// Root field of the document being executed
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

/// Standard GraphQL response envelope
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    /// Result data (absent or null on failure)
    #[serde(default)]
    pub data: Option<Value>,
    /// Errors (empty if successful)
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl GraphQlResponse {
    /// Get the data, or the error messages if the API returned errors
    pub fn into_result(self) -> Result<Value, Vec<String>> {
        if self.errors.is_empty() {
            Ok(self.data.unwrap_or(Value::Null))
        } else {
            Err(self.errors.into_iter().map(|e| e.message).collect())
        }
    }
}

/// One entry of a GraphQL `errors` array
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    /// Human readable message
    pub message: String,
}

// ============================================================================
// Operation Variables
// ============================================================================
//
// One struct per document. Serialized keys must equal the document's
// declared variable names.

/// Variables for `buycoinsPrices`
#[derive(Debug, Clone, Serialize)]
pub struct PriceVariables<'a> {
    pub side: OrderSide,
    pub mode: &'a str,
    pub cryptocurrency: Cryptocurrency,
}

/// Variables for the status-filtered order and market book queries
#[derive(Debug, Clone, Serialize)]
pub struct StatusVariables {
    pub status: OrderStatus,
}

/// Variables for documents filtered by cryptocurrency only
#[derive(Debug, Clone, Serialize)]
pub struct CryptocurrencyVariables {
    pub cryptocurrency: Cryptocurrency,
}

/// Variables for `getEstimatedNetworkFee`
#[derive(Debug, Clone, Serialize)]
pub struct NetworkFeeVariables {
    pub amount: Amount,
    pub cryptocurrency: Cryptocurrency,
}

/// Variables for `createDepositAccount`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositAccountVariables<'a> {
    pub account_name: &'a str,
}

/// Variables for `postLimitOrder`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderVariables {
    pub order_side: OrderSide,
    pub coin_amount: Amount,
    pub price_type: PriceType,
    pub cryptocurrency: Cryptocurrency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_price: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_exchange_rate: Option<Amount>,
}

/// Variables for `postMarketOrder`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderVariables {
    pub order_side: OrderSide,
    pub coin_amount: Amount,
    pub cryptocurrency: Cryptocurrency,
}

/// Variables for `buy` and `sell`
///
/// These mutations take `coin_amount` in snake case.
#[derive(Debug, Clone, Serialize)]
pub struct TradeVariables<'a> {
    pub price: &'a str,
    pub coin_amount: Amount,
    pub cryptocurrency: Cryptocurrency,
}

/// Variables for `send`
#[derive(Debug, Clone, Serialize)]
pub struct SendVariables<'a> {
    pub amount: Amount,
    pub address: &'a str,
    pub cryptocurrency: Cryptocurrency,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_response_success() {
        let response: GraphQlResponse =
            serde_json::from_value(json!({"data": {"getBalances": []}})).unwrap();
        assert_eq!(response.into_result().unwrap(), json!({"getBalances": []}));
    }

    #[test]
    fn test_response_errors() {
        let response: GraphQlResponse = serde_json::from_value(json!({
            "data": null,
            "errors": [
                {"message": "Insufficient balance", "path": ["send"]},
                {"message": "Something else"}
            ]
        }))
        .unwrap();
        assert_eq!(
            response.into_result().unwrap_err(),
            vec!["Insufficient balance", "Something else"]
        );
    }

    #[test]
    fn test_response_missing_data() {
        let response: GraphQlResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.into_result().unwrap(), Value::Null);
    }

    #[test]
    fn test_limit_order_variables_skip_absent_prices() {
        let vars = LimitOrderVariables {
            order_side: OrderSide::Buy,
            coin_amount: Amount::new(dec!(0.01)).unwrap(),
            price_type: PriceType::Static,
            cryptocurrency: Cryptocurrency::Bitcoin,
            static_price: Some(Amount::new(dec!(123.4)).unwrap()),
            dynamic_exchange_rate: None,
        };

        assert_eq!(
            serde_json::to_value(&vars).unwrap(),
            json!({
                "orderSide": "buy",
                "coinAmount": "0.01",
                "priceType": "static",
                "cryptocurrency": "bitcoin",
                "staticPrice": "123.4"
            })
        );
    }

    #[test]
    fn test_request_body() {
        let mut variables = Map::new();
        variables.insert("cryptocurrency".to_string(), json!("litecoin"));

        let request = GraphQlRequest::new(&crate::documents::CREATE_ADDRESS, variables);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(request.operation(), "createAddress");
        assert_eq!(body["variables"], json!({"cryptocurrency": "litecoin"}));
        assert!(body["query"].as_str().unwrap().starts_with("mutation createAddress"));
        assert!(body.get("operation").is_none());
    }
}
