use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use dao::worklog::{WorklogDao, WorklogEntity};
use service::category_map::CategoryMap;
use service::permission::Authentication;
use service::worklog::{ClassifiedWorklog, WorklogBatchService, WorklogsByUser};
use service::ServiceError;
use tracing::debug;
use uuid::Uuid;

use crate::gen_service_impl;

gen_service_impl! {
    struct WorklogBatchServiceImpl: WorklogBatchService = WorklogBatchServiceDeps {
        WorklogDao: dao::worklog::WorklogDao = worklog_dao
    }
}

pub fn classify(worklog: &WorklogEntity, category_map: &CategoryMap) -> ClassifiedWorklog {
    ClassifiedWorklog {
        id: worklog.id,
        task_id: worklog.task_id,
        project_id: worklog.project_id,
        started_at: worklog.started_at,
        ended_at: worklog.ended_at,
        duration_seconds: worklog.duration_seconds,
        comment: worklog.comment.clone(),
        category: category_map.classify(worklog.task_id),
    }
}

#[async_trait]
impl<Deps: WorklogBatchServiceDeps> WorklogBatchService for WorklogBatchServiceImpl<Deps> {
    type Context = Deps::Context;

    async fn load_classified(
        &self,
        user_ids: &[Uuid],
        from: time::PrimitiveDateTime,
        to: time::PrimitiveDateTime,
        category_map: &CategoryMap,
        _context: Authentication<Self::Context>,
    ) -> Result<WorklogsByUser, ServiceError> {
        if user_ids.is_empty() {
            return Ok(WorklogsByUser::new());
        }

        let worklogs = self
            .worklog_dao
            .find_for_users_in_window(user_ids, from, to)
            .await?;
        debug!(
            "Loaded {} worklogs for {} users",
            worklogs.len(),
            user_ids.len()
        );

        let mut grouped: BTreeMap<Uuid, Vec<ClassifiedWorklog>> = BTreeMap::new();
        for worklog in worklogs.iter() {
            grouped
                .entry(worklog.user_id)
                .or_default()
                .push(classify(worklog, category_map));
        }
        Ok(grouped
            .into_iter()
            .map(|(user_id, worklogs)| (user_id, Arc::from(worklogs)))
            .collect())
    }
}
