//! Fixed GraphQL documents for every Buycoins operation
//!
//! Documents are never built dynamically; only their variables change. Each
//! [`Document`] lists the variables its text declares so callers (and tests)
//! can check that exactly those keys are sent.
//!
//! Operations with an optional filter come in pairs: an unfiltered document
//! with no variables and a filtered one declaring the filter.

/// A variable declared in a document's operation header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variable {
    /// Name without the leading `$`
    pub name: &'static str,
    /// Declared non-null (`!`)
    pub required: bool,
}

const fn required(name: &'static str) -> Variable {
    Variable {
        name,
        required: true,
    }
}

const fn optional(name: &'static str) -> Variable {
    Variable {
        name,
        required: false,
    }
}

/// A GraphQL query or mutation with its declared variables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document {
    /// Root field the document selects
    pub operation: &'static str,
    /// Document text
    pub text: &'static str,
    /// Declared variables, in declaration order
    pub variables: &'static [Variable],
}

impl Document {
    /// Names of the declared variables
    pub fn variable_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.variables.iter().map(|v| v.name)
    }

    /// Names of the variables declared non-null
    pub fn required_variables(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.variables.iter().filter(|v| v.required).map(|v| v.name)
    }
}

// ============================================================================
// Queries
// ============================================================================

/// Current Buycoins price for a side, mode and cryptocurrency
pub const BUYCOINS_PRICES: Document = Document {
    operation: "buycoinsPrices",
    text: r#"query buycoinsPrices($side: OrderSide, $mode: PaymentMode, $cryptocurrency: Cryptocurrency) {
  buycoinsPrices(side: $side, mode: $mode, cryptocurrency: $cryptocurrency) {
    id
    cryptocurrency
    buyPricePerCoin
    sellPricePerCoin
    minBuy
    maxBuy
    minSell
    maxSell
    minCoinAmount
    mode
    status
  }
}"#,
    variables: &[optional("side"), optional("mode"), optional("cryptocurrency")],
};

/// All of the account's orders
pub const GET_ORDERS: Document = Document {
    operation: "getOrders",
    text: r#"query getOrders {
  getOrders {
    dynamicPriceExpiry
    orders {
      edges {
        node {
          id
          cryptocurrency
          coinAmount
          side
          status
          createdAt
          pricePerCoin
          priceType
          staticPrice
          dynamicExchangeRate
        }
      }
    }
  }
}"#,
    variables: &[],
};

/// The account's orders with a given status
pub const GET_ORDERS_BY_STATUS: Document = Document {
    operation: "getOrders",
    text: r#"query getOrders($status: GetOrdersStatus!) {
  getOrders(status: $status) {
    dynamicPriceExpiry
    orders {
      edges {
        node {
          id
          cryptocurrency
          coinAmount
          side
          status
          createdAt
          pricePerCoin
          priceType
          staticPrice
          dynamicExchangeRate
        }
      }
    }
  }
}"#,
    variables: &[required("status")],
};

/// The whole P2P market book
pub const GET_MARKET_BOOK: Document = Document {
    operation: "getMarketBook",
    text: r#"query getMarketBook {
  getMarketBook {
    dynamicPriceExpiry
    orders {
      edges {
        node {
          id
          cryptocurrency
          coinAmount
          side
          status
          createdAt
          pricePerCoin
          priceType
          staticPrice
          dynamicExchangeRate
        }
      }
    }
  }
}"#,
    variables: &[],
};

/// The market book restricted to a status
pub const GET_MARKET_BOOK_BY_STATUS: Document = Document {
    operation: "getMarketBook",
    text: r#"query getMarketBook($status: GetOrdersStatus!) {
  getMarketBook(status: $status) {
    dynamicPriceExpiry
    orders {
      edges {
        node {
          id
          cryptocurrency
          coinAmount
          side
          status
          createdAt
          pricePerCoin
          priceType
          staticPrice
          dynamicExchangeRate
        }
      }
    }
  }
}"#,
    variables: &[required("status")],
};

/// Every active price
pub const GET_PRICES: Document = Document {
    operation: "getPrices",
    text: r#"query getPrices {
  getPrices {
    id
    cryptocurrency
    buyPricePerCoin
    sellPricePerCoin
    minBuy
    maxBuy
    minSell
    maxSell
    minCoinAmount
    status
    expiresAt
  }
}"#,
    variables: &[],
};

/// Active prices for one cryptocurrency
pub const GET_PRICES_FOR: Document = Document {
    operation: "getPrices",
    text: r#"query getPrices($cryptocurrency: Cryptocurrency) {
  getPrices(cryptocurrency: $cryptocurrency) {
    id
    cryptocurrency
    buyPricePerCoin
    sellPricePerCoin
    minBuy
    maxBuy
    minSell
    maxSell
    minCoinAmount
    status
    expiresAt
  }
}"#,
    variables: &[optional("cryptocurrency")],
};

/// Fee estimate for sending an amount on-chain
pub const GET_ESTIMATED_NETWORK_FEE: Document = Document {
    operation: "getEstimatedNetworkFee",
    text: r#"query getEstimatedNetworkFee($cryptocurrency: Cryptocurrency, $amount: BigDecimal!) {
  getEstimatedNetworkFee(cryptocurrency: $cryptocurrency, amount: $amount) {
    estimatedFee
    total
  }
}"#,
    variables: &[optional("cryptocurrency"), required("amount")],
};

/// Every wallet balance
pub const GET_BALANCES: Document = Document {
    operation: "getBalances",
    text: r#"query getBalances {
  getBalances {
    id
    cryptocurrency
    confirmedBalance
  }
}"#,
    variables: &[],
};

/// The balance of one cryptocurrency
pub const GET_BALANCES_FOR: Document = Document {
    operation: "getBalances",
    text: r#"query getBalances($cryptocurrency: Cryptocurrency) {
  getBalances(cryptocurrency: $cryptocurrency) {
    id
    cryptocurrency
    confirmedBalance
  }
}"#,
    variables: &[optional("cryptocurrency")],
};

// ============================================================================
// Mutations
// ============================================================================

/// Create a virtual Naira deposit account
pub const CREATE_DEPOSIT_ACCOUNT: Document = Document {
    operation: "createDepositAccount",
    text: r#"mutation createDepositAccount($accountName: String!) {
  createDepositAccount(accountName: $accountName) {
    accountNumber
    accountName
    accountType
    bankName
    accountReference
  }
}"#,
    variables: &[required("accountName")],
};

/// Place a limit order on the P2P market
pub const POST_LIMIT_ORDER: Document = Document {
    operation: "postLimitOrder",
    text: r#"mutation postLimitOrder($orderSide: OrderSide!, $coinAmount: BigDecimal!, $cryptocurrency: Cryptocurrency, $staticPrice: BigDecimal, $priceType: PriceType!, $dynamicExchangeRate: BigDecimal) {
  postLimitOrder(orderSide: $orderSide, coinAmount: $coinAmount, cryptocurrency: $cryptocurrency, staticPrice: $staticPrice, priceType: $priceType, dynamicExchangeRate: $dynamicExchangeRate) {
    id
    cryptocurrency
    coinAmount
    side
    status
    createdAt
    pricePerCoin
    priceType
    staticPrice
    dynamicExchangeRate
  }
}"#,
    variables: &[
        required("orderSide"),
        required("coinAmount"),
        optional("cryptocurrency"),
        optional("staticPrice"),
        required("priceType"),
        optional("dynamicExchangeRate"),
    ],
};

/// Place a market order on the P2P market
pub const POST_MARKET_ORDER: Document = Document {
    operation: "postMarketOrder",
    text: r#"mutation postMarketOrder($orderSide: OrderSide!, $coinAmount: BigDecimal!, $cryptocurrency: Cryptocurrency) {
  postMarketOrder(orderSide: $orderSide, coinAmount: $coinAmount, cryptocurrency: $cryptocurrency) {
    id
    cryptocurrency
    coinAmount
    side
    status
    createdAt
    pricePerCoin
    priceType
    staticPrice
    dynamicExchangeRate
  }
}"#,
    variables: &[
        required("orderSide"),
        required("coinAmount"),
        optional("cryptocurrency"),
    ],
};

/// Buy against an active price
pub const BUY: Document = Document {
    operation: "buy",
    text: r#"mutation buy($price: ID!, $coin_amount: BigDecimal!, $cryptocurrency: Cryptocurrency) {
  buy(price: $price, coin_amount: $coin_amount, cryptocurrency: $cryptocurrency) {
    id
    cryptocurrency
    status
    totalCoinAmount
    side
  }
}"#,
    variables: &[
        required("price"),
        required("coin_amount"),
        optional("cryptocurrency"),
    ],
};

/// Sell against an active price
pub const SELL: Document = Document {
    operation: "sell",
    text: r#"mutation sell($price: ID!, $coin_amount: BigDecimal!, $cryptocurrency: Cryptocurrency) {
  sell(price: $price, coin_amount: $coin_amount, cryptocurrency: $cryptocurrency) {
    id
    cryptocurrency
    status
    totalCoinAmount
    side
  }
}"#,
    variables: &[
        required("price"),
        required("coin_amount"),
        optional("cryptocurrency"),
    ],
};

/// Send coins to an external address
pub const SEND: Document = Document {
    operation: "send",
    text: r#"mutation send($amount: BigDecimal!, $cryptocurrency: Cryptocurrency, $address: String!) {
  send(cryptocurrency: $cryptocurrency, amount: $amount, address: $address) {
    id
    address
    amount
    cryptocurrency
    fee
    status
    transaction {
      txhash
      id
    }
  }
}"#,
    variables: &[
        required("amount"),
        optional("cryptocurrency"),
        required("address"),
    ],
};

/// Create an address to receive coins
pub const CREATE_ADDRESS: Document = Document {
    operation: "createAddress",
    text: r#"mutation createAddress($cryptocurrency: Cryptocurrency) {
  createAddress(cryptocurrency: $cryptocurrency) {
    cryptocurrency
    address
  }
}"#,
    variables: &[optional("cryptocurrency")],
};

/// Every document the SDK sends
pub const ALL: &[Document] = &[
    BUYCOINS_PRICES,
    GET_ORDERS,
    GET_ORDERS_BY_STATUS,
    GET_MARKET_BOOK,
    GET_MARKET_BOOK_BY_STATUS,
    GET_PRICES,
    GET_PRICES_FOR,
    GET_ESTIMATED_NETWORK_FEE,
    GET_BALANCES,
    GET_BALANCES_FOR,
    CREATE_DEPOSIT_ACCOUNT,
    POST_LIMIT_ORDER,
    POST_MARKET_ORDER,
    BUY,
    SELL,
    SEND,
    CREATE_ADDRESS,
];
