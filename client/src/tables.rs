//! Typed per-table gateways. Each wraps the generic row calls with the
//! entity's table name, owner scoping and default ordering, so pages never
//! spell out column names.

use shared::{
    Budget, Category, Debt, FinancialGoal, MonthKey, NewBudget, NewCategory, NewDebt,
    NewTransaction, Profile, Transaction, UpdateBudget, UpdateCategory, UpdateProfile,
    UpdateTransaction,
};
use uuid::Uuid;

use crate::error::Error;
use crate::query::OrderDirection;
use crate::Client;

impl Client {
    pub fn transactions(&self) -> Transactions {
        Transactions {
            client: self.clone(),
        }
    }

    pub fn categories(&self) -> Categories {
        Categories {
            client: self.clone(),
        }
    }

    pub fn budgets(&self) -> Budgets {
        Budgets {
            client: self.clone(),
        }
    }

    pub fn debts(&self) -> Debts {
        Debts {
            client: self.clone(),
        }
    }

    pub fn goals(&self) -> Goals {
        Goals {
            client: self.clone(),
        }
    }

    pub fn profiles(&self) -> Profiles {
        Profiles {
            client: self.clone(),
        }
    }
}

pub struct Transactions {
    client: Client,
}

impl Transactions {
    /// All of the user's transactions, newest first.
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Transaction>, Error> {
        self.client
            .from("transactions")
            .eq("user_id", user_id)
            .order("date", OrderDirection::Descending)
            .fetch()
            .await
    }

    pub async fn create(&self, row: &NewTransaction) -> Result<Transaction, Error> {
        self.client.insert("transactions", row).await
    }

    pub async fn update(&self, id: Uuid, patch: &UpdateTransaction) -> Result<Transaction, Error> {
        self.client.update("transactions", id, patch).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), Error> {
        self.client.delete("transactions", id).await
    }
}

pub struct Categories {
    client: Client,
}

impl Categories {
    /// The user's own categories by name; built-ins live in the registry,
    /// not in storage.
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Category>, Error> {
        self.client
            .from("categories")
            .eq("user_id", user_id)
            .order("name", OrderDirection::Ascending)
            .fetch()
            .await
    }

    pub async fn create(&self, row: &NewCategory) -> Result<Category, Error> {
        self.client.insert("categories", row).await
    }

    pub async fn update(&self, id: Uuid, patch: &UpdateCategory) -> Result<Category, Error> {
        self.client.update("categories", id, patch).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), Error> {
        self.client.delete("categories", id).await
    }
}

pub struct Budgets {
    client: Client,
}

impl Budgets {
    pub async fn list(&self, user_id: Uuid, month: MonthKey) -> Result<Vec<Budget>, Error> {
        self.client
            .from("budgets")
            .eq("user_id", user_id)
            .eq("month", month)
            .fetch()
            .await
    }

    pub async fn create(&self, row: &NewBudget) -> Result<Budget, Error> {
        self.client.insert("budgets", row).await
    }

    pub async fn update(&self, id: Uuid, patch: &UpdateBudget) -> Result<Budget, Error> {
        self.client.update("budgets", id, patch).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), Error> {
        self.client.delete("budgets", id).await
    }
}

pub struct Debts {
    client: Client,
}

impl Debts {
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Debt>, Error> {
        self.client
            .from("debts")
            .eq("user_id", user_id)
            .order("date", OrderDirection::Descending)
            .fetch()
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), Error> {
        self.client.delete("debts", id).await
    }
}

pub struct Goals {
    client: Client,
}

impl Goals {
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<FinancialGoal>, Error> {
        self.client
            .from("financial_goals")
            .eq("user_id", user_id)
            .fetch()
            .await
    }
}

pub struct Profiles {
    client: Client,
}

impl Profiles {
    pub async fn get(&self, user_id: Uuid) -> Result<Option<Profile>, Error> {
        let rows: Vec<Profile> = self
            .client
            .from("profiles")
            .eq("id", user_id)
            .limit(1)
            .fetch()
            .await?;
        Ok(rows.into_iter().next())
    }

    pub async fn update(&self, user_id: Uuid, patch: &UpdateProfile) -> Result<Profile, Error> {
        self.client.update("profiles", user_id, patch).await
    }
}
