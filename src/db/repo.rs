//! Baseline store: durable week/month baselines keyed by wallet.
//!
//! The engine treats this store as best-effort: load errors read as
//! not-found, upsert errors are logged and swallowed by the caller.

use chrono::NaiveDate;
use sqlx::sqlite::SqlitePool;
use sqlx::Row;

use crate::domain::WalletAddress;

/// Persisted week/month baselines for one wallet.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredBaseline {
    pub week_start_date: NaiveDate,
    pub week_start_balance: f64,
    pub month_start_date: NaiveDate,
    pub month_start_balance: f64,
}

/// Store for durable baselines.
pub struct BaselineStore {
    pool: SqlitePool,
}

impl BaselineStore {
    /// Create a store over the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        BaselineStore { pool }
    }

    /// Load the persisted baselines for `wallet`, if any.
    pub async fn load_baseline(
        &self,
        wallet: &WalletAddress,
    ) -> Result<Option<StoredBaseline>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT week_start_date, week_start_balance, month_start_date, month_start_balance
            FROM user_data
            WHERE wallet = ?
            "#,
        )
        .bind(wallet.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| StoredBaseline {
            week_start_date: row.get("week_start_date"),
            week_start_balance: row.get("week_start_balance"),
            month_start_date: row.get("month_start_date"),
            month_start_balance: row.get("month_start_balance"),
        }))
    }

    /// Record a week rollover.
    ///
    /// An existing row has only its week columns updated; a first write
    /// inserts the full row, month columns included, so no column is ever
    /// left null. Callers pass current month values for exactly that case.
    pub async fn upsert_week(
        &self,
        wallet: &WalletAddress,
        week_start_date: NaiveDate,
        week_start_balance: f64,
        month_start_date: NaiveDate,
        month_start_balance: f64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO user_data (
                wallet, week_start_date, week_start_balance,
                month_start_date, month_start_balance
            ) VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(wallet) DO UPDATE SET
                week_start_date = excluded.week_start_date,
                week_start_balance = excluded.week_start_balance
            "#,
        )
        .bind(wallet.as_str())
        .bind(week_start_date)
        .bind(week_start_balance)
        .bind(month_start_date)
        .bind(month_start_balance)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Record a month rollover. Mirror of `upsert_week`: only the month
    /// columns change on an existing row.
    pub async fn upsert_month(
        &self,
        wallet: &WalletAddress,
        week_start_date: NaiveDate,
        week_start_balance: f64,
        month_start_date: NaiveDate,
        month_start_balance: f64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO user_data (
                wallet, week_start_date, week_start_balance,
                month_start_date, month_start_balance
            ) VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(wallet) DO UPDATE SET
                month_start_date = excluded.month_start_date,
                month_start_balance = excluded.month_start_balance
            "#,
        )
        .bind(wallet.as_str())
        .bind(week_start_date)
        .bind(week_start_balance)
        .bind(month_start_date)
        .bind(month_start_balance)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
