//! Filtered-select builder for the row API. Query-string construction is
//! pure so it can be tested on the host; only `fetch` touches the network.

use std::fmt::Display;

use gloo::net::http::Request;
use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::{http, Client};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Ascending,
    Descending,
}

pub struct QueryBuilder {
    client: Client,
    table: String,
    params: Vec<(String, String)>,
}

impl QueryBuilder {
    pub(crate) fn new(client: Client, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
            params: vec![("select".to_string(), "*".to_string())],
        }
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.params[0].1 = columns.to_string();
        self
    }

    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.params.push((column.to_string(), format!("eq.{value}")));
        self
    }

    pub fn gte(mut self, column: &str, value: impl Display) -> Self {
        self.params
            .push((column.to_string(), format!("gte.{value}")));
        self
    }

    pub fn lte(mut self, column: &str, value: impl Display) -> Self {
        self.params
            .push((column.to_string(), format!("lte.{value}")));
        self
    }

    pub fn order(mut self, column: &str, direction: OrderDirection) -> Self {
        let direction = match direction {
            OrderDirection::Ascending => "asc",
            OrderDirection::Descending => "desc",
        };
        self.params
            .push(("order".to_string(), format!("{column}.{direction}")));
        self
    }

    pub fn limit(mut self, n: u32) -> Self {
        self.params.push(("limit".to_string(), n.to_string()));
        self
    }

    /// The query string this builder will issue, without the leading `?`.
    pub fn query_string(&self) -> String {
        self.params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, Error> {
        let url = format!(
            "{}?{}",
            self.client.rest_url(&self.table),
            self.query_string()
        );
        let request = http::attach_headers(
            Request::get(&url),
            self.client.config(),
            self.client.auth_token().as_deref(),
        );
        let response = http::check(request.send().await?).await?;
        http::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    fn client() -> Client {
        Client::new(Config::new("http://localhost:54321", "test-key"))
    }

    #[test]
    fn default_query_selects_everything() {
        let query = client().from("transactions");
        assert_eq!(query.query_string(), "select=*");
    }

    #[test]
    fn filters_use_the_operator_grammar() {
        let query = client()
            .from("transactions")
            .eq("user_id", "abc")
            .gte("date", "2024-05-01")
            .lte("date", "2024-05-31");
        assert_eq!(
            query.query_string(),
            "select=*&user_id=eq.abc&date=gte.2024-05-01&date=lte.2024-05-31"
        );
    }

    #[test]
    fn order_and_limit_append_in_call_order() {
        let query = client()
            .from("debts")
            .select("id,amount")
            .order("date", OrderDirection::Descending)
            .limit(5);
        assert_eq!(
            query.query_string(),
            "select=id,amount&order=date.desc&limit=5"
        );
    }
}
