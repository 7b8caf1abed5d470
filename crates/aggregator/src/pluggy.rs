//! Pluggy open-banking API client.
//!
//! Flow used here:
//! 1. `POST /auth` exchanges client credentials for an API key (cached)
//! 2. `POST /connect_token` issues a token for the linking widget
//! 3. `GET /accounts?itemId=` lists the accounts of a linked item
//! 4. `GET /transactions?accountId=` returns one page of transactions
//!
//! Only the first page is requested and only one account is read.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use moka::future::Cache;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use finpulse_core::analysis::Transaction;
use finpulse_shared::AggregatorConfig;

use crate::error::AggregatorError;
use crate::types::{ConnectToken, DateRange};
use crate::AggregatorClient;

/// API keys are valid for two hours; refresh a little earlier.
const API_KEY_TTL_SECS: u64 = 110 * 60;

const API_KEY_CACHE_KEY: &str = "api_key";

const API_KEY_HEADER: &str = "X-API-KEY";

/// Largest accepted transaction amount, in either direction.
const MAX_ABS_AMOUNT: Decimal = dec!(1000000000000000);

/// Decimal places kept from wire amounts; finer digits are float noise.
const AMOUNT_SCALE: u32 = 4;

/// Account type preferred when an item has several accounts.
const BANK_ACCOUNT_TYPE: &str = "BANK";

/// Client for the Pluggy API.
#[derive(Clone)]
pub struct PluggyClient {
    http_client: Client,
    base_url: String,
    client_id: String,
    client_secret: String,
    page_size: u32,
    api_keys: Cache<&'static str, String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    api_key: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConnectTokenRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    item_id: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConnectTokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct Page<T> {
    results: Vec<T>,
}

#[derive(Deserialize)]
struct WireAccount {
    id: String,
    #[serde(rename = "type")]
    account_type: Option<String>,
}

#[derive(Deserialize)]
struct WireTransaction {
    id: Option<String>,
    description: Option<String>,
    #[serde(default)]
    amount: serde_json::Value,
    date: Option<String>,
    category: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl PluggyClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing or the HTTP client cannot be built.
    pub fn new(config: &AggregatorConfig) -> Result<Self, AggregatorError> {
        if config.client_id.trim().is_empty() || config.client_secret.trim().is_empty() {
            return Err(AggregatorError::MissingCredentials);
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let api_keys = Cache::builder()
            .max_capacity(1)
            .time_to_live(Duration::from_secs(API_KEY_TTL_SECS))
            .build();

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            page_size: config.page_size,
            api_keys,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Returns the cached API key, authenticating when there is none.
    async fn api_key(&self) -> Result<String, AggregatorError> {
        if let Some(key) = self.api_keys.get(&API_KEY_CACHE_KEY).await {
            return Ok(key);
        }

        let response = self
            .http_client
            .post(self.url("/auth"))
            .json(&AuthRequest {
                client_id: &self.client_id,
                client_secret: &self.client_secret,
            })
            .send()
            .await?;
        let auth: AuthResponse = Self::read_json(response).await?;

        self.api_keys
            .insert(API_KEY_CACHE_KEY, auth.api_key.clone())
            .await;
        debug!("Obtained aggregator API key");

        Ok(auth.api_key)
    }

    /// Sends an authenticated request and decodes the JSON body.
    ///
    /// A rejected key is dropped from the cache so the next call authenticates again.
    async fn send_authenticated<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, AggregatorError> {
        let api_key = self.api_key().await?;
        let response = request.header(API_KEY_HEADER, api_key).send().await?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            warn!(status = %response.status(), "Aggregator rejected API key");
            self.api_keys.invalidate(&API_KEY_CACHE_KEY).await;
        }

        Self::read_json(response).await
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, AggregatorError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|parsed| parsed.message)
                .unwrap_or(body);
            return Err(AggregatorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }

    /// Picks the account to analyse: the first bank account, else the first account.
    async fn select_account(&self, item_id: &str) -> Result<String, AggregatorError> {
        let page: Page<WireAccount> = self
            .send_authenticated(
                self.http_client
                    .get(self.url("/accounts"))
                    .query(&[("itemId", item_id)]),
            )
            .await?;

        let chosen = page
            .results
            .iter()
            .find(|a| a.account_type.as_deref() == Some(BANK_ACCOUNT_TYPE))
            .or_else(|| page.results.first())
            .map(|a| a.id.clone());

        chosen.ok_or_else(|| AggregatorError::NoAccounts(item_id.to_string()))
    }
}

/// Converts a wire amount to `Decimal` without passing through float arithmetic.
///
/// Amounts are rounded to [`AMOUNT_SCALE`] places and must not exceed
/// [`MAX_ABS_AMOUNT`] in magnitude.
fn parse_amount(value: &serde_json::Value) -> Result<Decimal, String> {
    let serde_json::Value::Number(number) = value else {
        return Err(format!("amount is not a number: {value}"));
    };

    let text = number.to_string();
    let amount = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| format!("amount is not representable: {text}"))?;

    if amount.abs() > MAX_ABS_AMOUNT {
        return Err(format!("amount {text} exceeds {MAX_ABS_AMOUNT}"));
    }

    Ok(amount
        .round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero)
        .normalize())
}

/// Reads the calendar date from an ISO-8601 timestamp or date.
fn parse_date(value: &str) -> Option<NaiveDate> {
    value
        .get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
}

impl TryFrom<WireTransaction> for Transaction {
    type Error = AggregatorError;

    fn try_from(wire: WireTransaction) -> Result<Self, Self::Error> {
        let amount = parse_amount(&wire.amount).map_err(|reason| {
            AggregatorError::InvalidTransactionData {
                transaction_id: wire.id.clone().unwrap_or_else(|| "unknown".to_string()),
                reason,
            }
        })?;

        Ok(Self {
            id: wire.id,
            amount,
            description: wire.description,
            date: wire.date.as_deref().and_then(parse_date),
            category: wire.category,
        })
    }
}

#[async_trait]
impl AggregatorClient for PluggyClient {
    async fn create_connect_token(
        &self,
        item_id: Option<&str>,
    ) -> Result<ConnectToken, AggregatorError> {
        let response: ConnectTokenResponse = self
            .send_authenticated(
                self.http_client
                    .post(self.url("/connect_token"))
                    .json(&ConnectTokenRequest { item_id }),
            )
            .await?;

        info!(update = item_id.is_some(), "Issued connect token");

        Ok(ConnectToken {
            access_token: response.access_token,
        })
    }

    async fn fetch_transactions(
        &self,
        item_id: &str,
        range: DateRange,
    ) -> Result<Vec<Transaction>, AggregatorError> {
        let range = DateRange::new(range.from, range.to)?;
        let account_id = self.select_account(item_id).await?;

        let from = range.from.format("%Y-%m-%d").to_string();
        let to = range.to.format("%Y-%m-%d").to_string();
        let page_size = self.page_size.to_string();

        let page: Page<WireTransaction> = self
            .send_authenticated(self.http_client.get(self.url("/transactions")).query(&[
                ("accountId", account_id.as_str()),
                ("from", from.as_str()),
                ("to", to.as_str()),
                ("pageSize", page_size.as_str()),
            ]))
            .await?;

        let transactions = page
            .results
            .into_iter()
            .map(Transaction::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            item_id = %item_id,
            account_id = %account_id,
            count = transactions.len(),
            "Fetched transactions"
        );

        Ok(transactions)
    }
}
