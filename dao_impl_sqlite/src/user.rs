use std::sync::Arc;

use async_trait::async_trait;
use dao::user::{UserDao, UserEntity, UserQueryEntity};
use dao::DaoError;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use time::macros::format_description;
use time::Date;
use uuid::Uuid;

use crate::ResultDbErrorExt;

#[derive(FromRow)]
struct UserDb {
    id: Vec<u8>,
    name: String,
    email: String,
    job_title: Option<String>,
    work_status: String,
    region_id: Option<Vec<u8>>,
    cohort_id: Option<Vec<u8>>,
    hired_at: String,
    ended_at: Option<String>,
}

impl TryFrom<&UserDb> for UserEntity {
    type Error = DaoError;

    fn try_from(row: &UserDb) -> Result<Self, Self::Error> {
        let date_format = format_description!("[year]-[month]-[day]");
        Ok(Self {
            id: Uuid::from_slice(&row.id)?,
            name: row.name.as_str().into(),
            email: row.email.as_str().into(),
            job_title: row.job_title.as_deref().map(Arc::from),
            work_status: row.work_status.as_str().into(),
            region_id: row.region_id.as_deref().map(Uuid::from_slice).transpose()?,
            cohort_id: row.cohort_id.as_deref().map(Uuid::from_slice).transpose()?,
            hired_at: Date::parse(&row.hired_at, &date_format)?,
            ended_at: row
                .ended_at
                .as_deref()
                .map(|ended_at| Date::parse(ended_at, &date_format))
                .transpose()?,
        })
    }
}

pub struct UserDaoImpl {
    pub pool: Arc<SqlitePool>,
}
impl UserDaoImpl {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDao for UserDaoImpl {
    async fn find_active(
        &self,
        query: &UserQueryEntity,
    ) -> Result<Arc<[UserEntity]>, DaoError> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            r"SELECT id, name, email, job_title, work_status, region_id, cohort_id, hired_at, ended_at
            FROM employee
            WHERE deleted IS NULL",
        );
        if let Some(work_status) = &query.work_status {
            builder.push(" AND work_status = ");
            builder.push_bind(work_status.to_string());
        }
        if let Some(region_id) = query.region_id {
            builder.push(" AND region_id = ");
            builder.push_bind(region_id.as_bytes().to_vec());
        }
        if let Some(cohort_id) = query.cohort_id {
            builder.push(" AND cohort_id = ");
            builder.push_bind(cohort_id.as_bytes().to_vec());
        }
        if let Some(search) = &query.search {
            let pattern = format!("%{}%", search.to_lowercase());
            builder.push(" AND (LOWER(name) LIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR LOWER(email) LIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
        builder.push(" ORDER BY name");

        builder
            .build_query_as::<UserDb>()
            .fetch_all(self.pool.as_ref())
            .await
            .map_db_error()?
            .iter()
            .map(UserEntity::try_from)
            .collect::<Result<_, _>>()
    }
}
