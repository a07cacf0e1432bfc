use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use dao::report_category::ReportCategoryDao;
use service::category_map::{CategoryMap, CategoryMapService, ReportCategory};
use service::permission::Authentication;
use service::ServiceError;

use crate::gen_service_impl;

gen_service_impl! {
    struct CategoryMapServiceImpl: CategoryMapService = CategoryMapServiceDeps {
        ReportCategoryDao: dao::report_category::ReportCategoryDao = report_category_dao
    }
}

fn is_billable_type(configured_value: &str) -> bool {
    configured_value.to_lowercase().starts_with("billable")
}

fn is_non_billable_type(configured_value: &str) -> bool {
    configured_value.to_lowercase().contains("non-billable")
}

#[async_trait]
impl<Deps: CategoryMapServiceDeps> CategoryMapService for CategoryMapServiceImpl<Deps> {
    type Context = Deps::Context;

    async fn build_map(
        &self,
        _context: Authentication<Self::Context>,
    ) -> Result<CategoryMap, ServiceError> {
        let categories = self.report_category_dao.find_active().await?;

        let mut billable: HashSet<i64> = HashSet::new();
        let mut non_billable: HashSet<i64> = HashSet::new();
        let mut trace: HashMap<i64, Vec<ReportCategory>> = HashMap::new();

        for category in categories.iter() {
            let billable_type = is_billable_type(&category.category_type_value);
            let non_billable_type = is_non_billable_type(&category.category_type_value);
            for task_id in category.task_ids.iter() {
                trace
                    .entry(*task_id)
                    .or_default()
                    .push(ReportCategory::from(category));
                if billable_type {
                    billable.insert(*task_id);
                } else if non_billable_type {
                    non_billable.insert(*task_id);
                }
            }
        }
        // Precedence: a task matched by any billable rule never counts as
        // non-billable, keeping the two sets disjoint.
        non_billable.retain(|task_id| !billable.contains(task_id));

        Ok(CategoryMap {
            billable,
            non_billable,
            categories_by_task: trace
                .into_iter()
                .map(|(task_id, categories)| (task_id, Arc::from(categories)))
                .collect(),
        })
    }
}
