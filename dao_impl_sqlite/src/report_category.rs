use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use dao::report_category::{ReportCategoryDao, ReportCategoryEntity};
use dao::DaoError;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::ResultDbErrorExt;

#[derive(FromRow)]
struct ReportCategoryDb {
    id: Vec<u8>,
    name: String,
    category_type_value: String,
}

#[derive(FromRow)]
struct CategoryTaskDb {
    report_category_id: Vec<u8>,
    task_id: i64,
}

pub struct ReportCategoryDaoImpl {
    pub pool: Arc<SqlitePool>,
}
impl ReportCategoryDaoImpl {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportCategoryDao for ReportCategoryDaoImpl {
    async fn find_active(&self) -> Result<Arc<[ReportCategoryEntity]>, DaoError> {
        let categories = sqlx::query_as::<_, ReportCategoryDb>(
            r"SELECT id, name, category_type_value
            FROM report_category
            WHERE deleted IS NULL
            ORDER BY name",
        )
        .fetch_all(self.pool.as_ref())
        .await
        .map_db_error()?;
        let links = sqlx::query_as::<_, CategoryTaskDb>(
            r"SELECT report_category_id, task_id FROM report_category_task",
        )
        .fetch_all(self.pool.as_ref())
        .await
        .map_db_error()?;

        let mut tasks_by_category: HashMap<Uuid, Vec<i64>> = HashMap::new();
        for link in &links {
            tasks_by_category
                .entry(Uuid::from_slice(&link.report_category_id)?)
                .or_default()
                .push(link.task_id);
        }

        categories
            .iter()
            .map(|category| {
                let id = Uuid::from_slice(&category.id)?;
                Ok(ReportCategoryEntity {
                    id,
                    name: category.name.as_str().into(),
                    category_type_value: category.category_type_value.as_str().into(),
                    task_ids: tasks_by_category
                        .remove(&id)
                        .map(Arc::from)
                        .unwrap_or_default(),
                })
            })
            .collect::<Result<_, DaoError>>()
    }
}
