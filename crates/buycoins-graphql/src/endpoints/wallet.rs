//! Wallet endpoints for balances, deposits and transfers

use buycoins_types::{Amount, Cryptocurrency, IntoParam};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::BuycoinsClient;
use crate::documents::{CREATE_ADDRESS, CREATE_DEPOSIT_ACCOUNT, GET_BALANCES, GET_BALANCES_FOR, SEND};
use crate::error::BuycoinsResult;
use crate::types::{CryptocurrencyVariables, DepositAccountVariables, SendVariables};

/// Wallet endpoints
pub struct WalletEndpoints<'a> {
    client: &'a BuycoinsClient,
}

impl<'a> WalletEndpoints<'a> {
    pub fn new(client: &'a BuycoinsClient) -> Self {
        Self { client }
    }

    /// Get confirmed balances
    ///
    /// # Arguments
    /// * `cryptocurrency` - Restrict to one coin, or `None` for every wallet
    #[instrument(skip(self))]
    pub async fn get_balances(&self, cryptocurrency: Option<Cryptocurrency>) -> BuycoinsResult<Value> {
        debug!("Fetching balances");

        match cryptocurrency {
            Some(cryptocurrency) => {
                self.client
                    .dispatch(&GET_BALANCES_FOR, &CryptocurrencyVariables { cryptocurrency })
                    .await
            }
            None => self.client.request(&GET_BALANCES, None).await,
        }
    }

    /// Create a virtual Naira deposit account in the given name
    #[instrument(skip(self, account_name))]
    pub async fn create_deposit_account(&self, account_name: &str) -> BuycoinsResult<Value> {
        debug!("Creating deposit account");

        self.client
            .dispatch(&CREATE_DEPOSIT_ACCOUNT, &DepositAccountVariables { account_name })
            .await
    }

    /// Send coins to an external address
    ///
    /// # Arguments
    /// * `amount` - Amount of coin to send
    /// * `address` - Destination address
    /// * `cryptocurrency` - Coin to send
    #[instrument(skip(self, amount, cryptocurrency))]
    pub async fn send(
        &self,
        amount: impl IntoParam<Amount>,
        address: &str,
        cryptocurrency: impl IntoParam<Cryptocurrency>,
    ) -> BuycoinsResult<Value> {
        let variables = SendVariables {
            amount: amount.into_param("amount")?,
            address,
            cryptocurrency: cryptocurrency.into_param("cryptocurrency")?,
        };
        debug!(amount = %variables.amount, cryptocurrency = %variables.cryptocurrency, "Sending coins");

        self.client.dispatch(&SEND, &variables).await
    }

    /// Create an address to receive coins
    #[instrument(skip(self, cryptocurrency))]
    pub async fn create_address(
        &self,
        cryptocurrency: impl IntoParam<Cryptocurrency>,
    ) -> BuycoinsResult<Value> {
        let cryptocurrency = cryptocurrency.into_param("cryptocurrency")?;
        debug!(cryptocurrency = %cryptocurrency, "Creating address");

        self.client
            .dispatch(&CREATE_ADDRESS, &CryptocurrencyVariables { cryptocurrency })
            .await
    }
}
