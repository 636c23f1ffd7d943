use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::PgPool;

use super::{Entity, Repository};
use crate::utils::errors::{not_found_error, AppResult};

/// Tabla sobre sqlx. El SQL se deriva de [`Entity::TABLE`] y
/// [`Entity::COLUMNS`]; las filas se decodifican con el `FromRow` de la entidad.
pub struct PgRepository<T> {
    pool: PgPool,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> PgRepository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

fn insert_sql(table: &str, columns: &[&str]) -> String {
    let placeholders = (1..=columns.len())
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
        table,
        columns.join(", "),
        placeholders
    )
}

fn update_sql(table: &str, columns: &[&str]) -> String {
    let assignments = columns
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{} = ${}", column, i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {} SET {} WHERE id = ${} RETURNING *",
        table,
        assignments,
        columns.len() + 1
    )
}

fn assign_reference_sql(table: &str, column: &str) -> String {
    format!(
        "UPDATE {} SET {} = $1 WHERE id = $2 AND {} IS NULL RETURNING *",
        table, column, column
    )
}

fn release_reference_sql(table: &str, column: &str) -> String {
    format!(
        "UPDATE {} SET {} = NULL WHERE id = $1 AND {} = $2 RETURNING *",
        table, column, column
    )
}

#[async_trait]
impl<T: Entity> Repository<T> for PgRepository<T> {
    async fn find_all(&self) -> AppResult<Vec<T>> {
        let sql = format!("SELECT * FROM {} ORDER BY id", T::TABLE);
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<T>> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", T::TABLE);
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_reference(&self, field: T::Reference, parent_id: i64) -> AppResult<Vec<T>> {
        let sql = format!(
            "SELECT * FROM {} WHERE {} = $1 ORDER BY id",
            T::TABLE,
            T::reference_column(field)
        );
        let rows = sqlx::query_as::<_, T>(&sql)
            .bind(parent_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert(&self, entity: T) -> AppResult<T> {
        let sql = insert_sql(T::TABLE, T::COLUMNS);
        let row = entity
            .bind_columns(sqlx::query_as::<_, T>(&sql))
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, entity: T) -> AppResult<T> {
        let sql = update_sql(T::TABLE, T::COLUMNS);
        let row = entity
            .bind_columns(sqlx::query_as::<_, T>(&sql))
            .bind(entity.id())
            .fetch_optional(&self.pool)
            .await?;
        row.ok_or_else(|| not_found_error(T::KIND, entity.id()))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = $1", T::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn assign_reference(&self, field: T::Reference, id: i64, parent_id: i64) -> AppResult<Option<T>> {
        let sql = assign_reference_sql(T::TABLE, T::reference_column(field));
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(parent_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn release_reference(&self, field: T::Reference, id: i64, parent_id: i64) -> AppResult<Option<T>> {
        let sql = release_reference_sql(T::TABLE, T::reference_column(field));
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .bind(parent_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn clear_reference(&self, field: T::Reference, parent_id: i64) -> AppResult<u64> {
        let column = T::reference_column(field);
        let sql = format!(
            "UPDATE {} SET {} = NULL WHERE {} = $1",
            T::TABLE,
            column,
            column
        );
        let result = sqlx::query(&sql).bind(parent_id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
