use std::sync::Arc;

use async_trait::async_trait;
use dao::worklog::{WorklogDao, WorklogEntity};
use dao::DaoError;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use time::format_description::well_known::Iso8601;
use time::PrimitiveDateTime;
use uuid::Uuid;

use crate::ResultDbErrorExt;

#[derive(FromRow)]
struct WorklogDb {
    id: i64,
    user_id: Vec<u8>,
    task_id: i64,
    project_id: i64,
    started_at: String,
    ended_at: String,
    duration_seconds: i64,
    comment: Option<String>,
}

impl TryFrom<&WorklogDb> for WorklogEntity {
    type Error = DaoError;

    fn try_from(row: &WorklogDb) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            user_id: Uuid::from_slice(&row.user_id)?,
            task_id: row.task_id,
            project_id: row.project_id,
            started_at: PrimitiveDateTime::parse(&row.started_at, &Iso8601::DATE_TIME)?,
            ended_at: PrimitiveDateTime::parse(&row.ended_at, &Iso8601::DATE_TIME)?,
            duration_seconds: row.duration_seconds,
            comment: row.comment.as_deref().map(Arc::from),
        })
    }
}

pub struct WorklogDaoImpl {
    pub pool: Arc<SqlitePool>,
}
impl WorklogDaoImpl {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorklogDao for WorklogDaoImpl {
    async fn find_for_users_in_window(
        &self,
        user_ids: &[Uuid],
        from: PrimitiveDateTime,
        to: PrimitiveDateTime,
    ) -> Result<Arc<[WorklogEntity]>, DaoError> {
        if user_ids.is_empty() {
            return Ok(Arc::new([]));
        }
        let from = from.format(&Iso8601::DATE_TIME).map_db_error()?;
        let to = to.format(&Iso8601::DATE_TIME).map_db_error()?;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            r"SELECT id, user_id, task_id, project_id, started_at, ended_at, duration_seconds, comment
            FROM worklog
            WHERE deleted IS NULL AND started_at >= ",
        );
        builder.push_bind(from);
        builder.push(" AND started_at <= ");
        builder.push_bind(to);
        builder.push(" AND user_id IN (");
        let mut ids = builder.separated(", ");
        for user_id in user_ids {
            ids.push_bind(user_id.as_bytes().to_vec());
        }
        ids.push_unseparated(")");

        builder
            .build_query_as::<WorklogDb>()
            .fetch_all(self.pool.as_ref())
            .await
            .map_db_error()?
            .iter()
            .map(WorklogEntity::try_from)
            .collect::<Result<_, _>>()
    }
}
