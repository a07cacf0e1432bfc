use std::sync::Arc;

use async_trait::async_trait;
use dao::task::{TaskDao, TaskEntity};
use dao::DaoError;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

use crate::ResultDbErrorExt;

#[derive(FromRow)]
struct TaskDb {
    id: i64,
    name: String,
}

pub struct TaskDaoImpl {
    pub pool: Arc<SqlitePool>,
}
impl TaskDaoImpl {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskDao for TaskDaoImpl {
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Arc<[TaskEntity]>, DaoError> {
        if ids.is_empty() {
            return Ok(Arc::new([]));
        }
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(r"SELECT id, name FROM task WHERE id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        Ok(builder
            .build_query_as::<TaskDb>()
            .fetch_all(self.pool.as_ref())
            .await
            .map_db_error()?
            .iter()
            .map(|row| TaskEntity {
                id: row.id,
                name: row.name.as_str().into(),
            })
            .collect())
    }
}
