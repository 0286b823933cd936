//! Composite debt writes. Issuing or settling a debt pairs a debt-row write
//! with a mirrored transaction; the pair must succeed or fail as a unit, so
//! the second write failing triggers a compensating delete of the first.

use chrono::NaiveDate;
use serde::Serialize;
use shared::{debts, Debt, DebtStatus, NewDebt, Transaction};
use uuid::Uuid;

use crate::error::Error;
use crate::Client;

#[derive(Debug, thiserror::Error)]
pub enum SettleError {
    /// A write failed but nothing is half-applied: either the first write
    /// never landed, or the compensating delete cleaned it up.
    #[error("{0}")]
    Failed(#[from] Error),
    /// The second write failed and so did the compensation. The named debt
    /// needs manual attention; the page surfaces this verbatim.
    #[error("khoản vay nợ {debt_id} có thể không nhất quán, vui lòng kiểm tra lại: {source}")]
    Inconsistent { debt_id: Uuid, source: Error },
}

#[derive(Serialize)]
struct StatusPatch {
    status: DebtStatus,
}

impl Client {
    /// Inserts the debt row, then its issuance transaction. If the mirror
    /// insert fails the debt row is deleted again so no pending debt exists
    /// without its bookkeeping entry.
    pub async fn create_debt(&self, new_debt: &NewDebt) -> Result<Debt, SettleError> {
        let debt: Debt = self.insert("debts", new_debt).await?;
        let mirror = debts::issuance_transaction(&debt);
        match self.insert::<_, Transaction>("transactions", &mirror).await {
            Ok(_) => Ok(debt),
            Err(err) => match self.delete("debts", debt.id).await {
                Ok(()) => Err(SettleError::Failed(err)),
                Err(_) => Err(SettleError::Inconsistent {
                    debt_id: debt.id,
                    source: err,
                }),
            },
        }
    }

    /// Marks a pending debt paid. The mirrored transaction is written first:
    /// a stray extra transaction is visible and deletable, while a debt
    /// marked paid without its mirror silently corrupts the ledger. If the
    /// status update fails, the inserted mirror is deleted again.
    pub async fn mark_paid(&self, debt: &Debt, settled_on: NaiveDate) -> Result<Debt, SettleError> {
        let mirror = debts::settlement_transaction(debt, settled_on);
        let inserted: Transaction = self.insert("transactions", &mirror).await?;
        let patch = StatusPatch {
            status: DebtStatus::Paid,
        };
        match self.update::<_, Debt>("debts", debt.id, &patch).await {
            Ok(updated) => Ok(updated),
            Err(err) => match self.delete("transactions", inserted.id).await {
                Ok(()) => Err(SettleError::Failed(err)),
                Err(_) => Err(SettleError::Inconsistent {
                    debt_id: debt.id,
                    source: err,
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_patch_serializes_the_lowercase_wire_form() {
        let patch = StatusPatch {
            status: DebtStatus::Paid,
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"status":"paid"}"#
        );
    }

    #[test]
    fn inconsistent_error_names_the_debt() {
        let debt_id = Uuid::nil();
        let err = SettleError::Inconsistent {
            debt_id,
            source: Error::Network("connection reset".to_string()),
        };
        let message = err.to_string();
        assert!(message.contains(&debt_id.to_string()));
        assert!(message.contains("connection reset"));
    }
}
