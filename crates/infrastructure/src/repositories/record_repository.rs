use async_trait::async_trait;
use custom_dns_application::ports::{RecordStore, UpsertOutcome};
use custom_dns_domain::{
    CustomRecord, DomainError, Ipv6Parts, RecordSummary, RecordType, RecordValues,
};
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{error, instrument};

type RecordRow = (i64, i64);
type SummaryRow = (String, String, i64, i64);

const COUNT_VALUES_SQL: &str = "SELECT r.hostname, r.record_type, r.ttl,
        (SELECT COUNT(*) FROM record_a_values WHERE record_id = r.id)
      + (SELECT COUNT(*) FROM record_aaaa_values WHERE record_id = r.id)
      + (SELECT COUNT(*) FROM record_txt_values WHERE record_id = r.id)
     FROM records r
     ORDER BY r.hostname ASC, r.record_type ASC";

fn db_error(action: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        error!(error = %e, action, "Record store query failed");
        DomainError::StoreError(e.to_string())
    }
}

fn ttl_from_db(ttl: i64) -> Result<u32, DomainError> {
    u32::try_from(ttl).map_err(|_| DomainError::StoreError(format!("stored ttl out of range: {}", ttl)))
}

fn value_table(record_type: RecordType) -> &'static str {
    match record_type {
        RecordType::A => "record_a_values",
        RecordType::AAAA => "record_aaaa_values",
        RecordType::TXT => "record_txt_values",
    }
}

/// SQLite-backed record store.
///
/// A record is a row in `records` keyed by (hostname, record_type); its values
/// are rows in the per-type value table, ordered by `position`.
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn load_values(
        tx: &mut Transaction<'_, Sqlite>,
        record_id: i64,
        record_type: RecordType,
    ) -> Result<RecordValues, DomainError> {
        match record_type {
            RecordType::A => {
                let rows = sqlx::query_as::<_, (i64,)>(
                    "SELECT ip_addr FROM record_a_values WHERE record_id = ? ORDER BY position ASC",
                )
                .bind(record_id)
                .fetch_all(&mut **tx)
                .await
                .map_err(db_error("load A values"))?;

                rows.into_iter()
                    .map(|(ip,)| {
                        u32::try_from(ip).map_err(|_| {
                            DomainError::StoreError(format!("stored IPv4 out of range: {}", ip))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map(RecordValues::A)
            }
            RecordType::AAAA => {
                let rows = sqlx::query_as::<_, (i64, i64)>(
                    "SELECT ip_addr_hi, ip_addr_lo FROM record_aaaa_values
                     WHERE record_id = ? ORDER BY position ASC",
                )
                .bind(record_id)
                .fetch_all(&mut **tx)
                .await
                .map_err(db_error("load AAAA values"))?;

                Ok(RecordValues::Aaaa(
                    rows.into_iter()
                        .map(|(hi, lo)| Ipv6Parts::new(hi, lo))
                        .collect(),
                ))
            }
            RecordType::TXT => {
                let rows = sqlx::query_as::<_, (String,)>(
                    "SELECT txt FROM record_txt_values WHERE record_id = ? ORDER BY position ASC",
                )
                .bind(record_id)
                .fetch_all(&mut **tx)
                .await
                .map_err(db_error("load TXT values"))?;

                Ok(RecordValues::Txt(rows.into_iter().map(|(txt,)| txt).collect()))
            }
        }
    }

    async fn insert_values(
        tx: &mut Transaction<'_, Sqlite>,
        record_id: i64,
        values: &RecordValues,
    ) -> Result<(), DomainError> {
        match values {
            RecordValues::A(ips) => {
                for (position, ip) in ips.iter().enumerate() {
                    sqlx::query(
                        "INSERT INTO record_a_values (record_id, position, ip_addr) VALUES (?, ?, ?)",
                    )
                    .bind(record_id)
                    .bind(position as i64)
                    .bind(i64::from(*ip))
                    .execute(&mut **tx)
                    .await
                    .map_err(db_error("insert A value"))?;
                }
            }
            RecordValues::Aaaa(parts) => {
                for (position, part) in parts.iter().enumerate() {
                    sqlx::query(
                        "INSERT INTO record_aaaa_values (record_id, position, ip_addr_hi, ip_addr_lo)
                         VALUES (?, ?, ?, ?)",
                    )
                    .bind(record_id)
                    .bind(position as i64)
                    .bind(part.hi)
                    .bind(part.lo)
                    .execute(&mut **tx)
                    .await
                    .map_err(db_error("insert AAAA value"))?;
                }
            }
            RecordValues::Txt(texts) => {
                for (position, txt) in texts.iter().enumerate() {
                    sqlx::query(
                        "INSERT INTO record_txt_values (record_id, position, txt) VALUES (?, ?, ?)",
                    )
                    .bind(record_id)
                    .bind(position as i64)
                    .bind(txt)
                    .execute(&mut **tx)
                    .await
                    .map_err(db_error("insert TXT value"))?;
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    #[instrument(skip(self))]
    async fn find_by_key_and_type(
        &self,
        key: &str,
        record_type: RecordType,
    ) -> Result<Option<CustomRecord>, DomainError> {
        // Row and values are read in one transaction so a concurrent upsert
        // or delete cannot land between them.
        let mut tx = self.pool.begin().await.map_err(db_error("begin find"))?;

        let row = sqlx::query_as::<_, RecordRow>(
            "SELECT id, ttl FROM records WHERE hostname = ? AND record_type = ?",
        )
        .bind(key)
        .bind(record_type.as_str())
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_error("find record"))?;

        let Some((id, ttl)) = row else {
            return Ok(None);
        };

        let values = Self::load_values(&mut tx, id, record_type).await?;
        tx.commit().await.map_err(db_error("commit find"))?;

        Ok(Some(CustomRecord::new(key, ttl_from_db(ttl)?, values)))
    }

    #[instrument(skip(self, values))]
    async fn upsert(
        &self,
        key: &str,
        ttl: u32,
        values: RecordValues,
    ) -> Result<UpsertOutcome, DomainError> {
        let record_type = values.record_type();
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let mut tx = self.pool.begin().await.map_err(db_error("begin upsert"))?;

        let existing = sqlx::query_as::<_, (i64,)>(
            "SELECT id FROM records WHERE hostname = ? AND record_type = ?",
        )
        .bind(key)
        .bind(record_type.as_str())
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_error("find record for upsert"))?;

        let (record_id, outcome) = match existing {
            Some((id,)) => {
                sqlx::query("UPDATE records SET ttl = ?, updated_at = ? WHERE id = ?")
                    .bind(i64::from(ttl))
                    .bind(&now)
                    .bind(id)
                    .execute(&mut *tx)
                    .await
                    .map_err(db_error("update record"))?;

                sqlx::query(&format!(
                    "DELETE FROM {} WHERE record_id = ?",
                    value_table(record_type)
                ))
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(db_error("clear record values"))?;

                (id, UpsertOutcome::Updated)
            }
            None => {
                let (id,) = sqlx::query_as::<_, (i64,)>(
                    "INSERT INTO records (hostname, record_type, ttl, created_at, updated_at)
                     VALUES (?, ?, ?, ?, ?)
                     RETURNING id",
                )
                .bind(key)
                .bind(record_type.as_str())
                .bind(i64::from(ttl))
                .bind(&now)
                .bind(&now)
                .fetch_one(&mut *tx)
                .await
                .map_err(db_error("insert record"))?;

                (id, UpsertOutcome::Created)
            }
        };

        Self::insert_values(&mut tx, record_id, &values).await?;

        tx.commit().await.map_err(db_error("commit upsert"))?;

        Ok(outcome)
    }

    #[instrument(skip(self))]
    async fn delete_by_key_and_type(
        &self,
        key: &str,
        record_type: RecordType,
    ) -> Result<bool, DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("begin delete"))?;

        sqlx::query(&format!(
            "DELETE FROM {} WHERE record_id IN
             (SELECT id FROM records WHERE hostname = ? AND record_type = ?)",
            value_table(record_type)
        ))
        .bind(key)
        .bind(record_type.as_str())
        .execute(&mut *tx)
        .await
        .map_err(db_error("delete record values"))?;

        let result = sqlx::query("DELETE FROM records WHERE hostname = ? AND record_type = ?")
            .bind(key)
            .bind(record_type.as_str())
            .execute(&mut *tx)
            .await
            .map_err(db_error("delete record"))?;

        tx.commit().await.map_err(db_error("commit delete"))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<RecordSummary>, DomainError> {
        let rows = sqlx::query_as::<_, SummaryRow>(COUNT_VALUES_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list records"))?;

        rows.into_iter()
            .map(|(key, record_type, ttl, value_count)| -> Result<RecordSummary, DomainError> {
                let record_type = record_type
                    .parse::<RecordType>()
                    .map_err(DomainError::StoreError)?;
                Ok(RecordSummary {
                    key,
                    record_type,
                    ttl: ttl_from_db(ttl)?,
                    value_count: value_count.max(0) as usize,
                })
            })
            .collect()
    }
}
