use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{Query, Transaction, TransactionFilter};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PersonFilter {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    #[sqlx(rename = "imageUri")]
    pub image_uri: Option<String>,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Person {
    /// Create a person, stamped with the current time.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_at: Utc::now(),
            ..Default::default()
        }
    }

    pub async fn get_transactions<DB>(&self, db: &DB) -> Result<Vec<Transaction>>
    where
        DB: Query<Transaction, Filter = TransactionFilter>,
    {
        let transactions = db
            .query(&TransactionFilter {
                person_id: Some(self.id.clone()),
                ..Default::default()
            })
            .await?;
        Ok(transactions)
    }
}
