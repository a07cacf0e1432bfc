use std::sync::Arc;

use dao::report_category::{MockReportCategoryDao, ReportCategoryEntity};
use service::category_map::{Category, CategoryMapService};
use uuid::Uuid;

use crate::category_map::{CategoryMapServiceDeps, CategoryMapServiceImpl};
use crate::test::fixtures::NoneTypeExt;

struct MockDeps {
    report_category_dao: MockReportCategoryDao,
}
impl CategoryMapServiceDeps for MockDeps {
    type Context = ();
    type ReportCategoryDao = MockReportCategoryDao;
}
impl MockDeps {
    fn build_service(self) -> CategoryMapServiceImpl<MockDeps> {
        CategoryMapServiceImpl {
            report_category_dao: self.report_category_dao.into(),
        }
    }
}

fn category(name: &str, type_value: &str, task_ids: &[i64]) -> ReportCategoryEntity {
    ReportCategoryEntity {
        id: Uuid::new_v4(),
        name: Arc::from(name),
        category_type_value: Arc::from(type_value),
        task_ids: task_ids.into(),
    }
}

#[tokio::test]
async fn test_billable_wins_over_non_billable() {
    let mut report_category_dao = MockReportCategoryDao::new();
    report_category_dao.expect_find_active().returning(|| {
        Ok(Arc::new([
            category("Client work", "Billable work", &[1, 2]),
            category("Internal", "Non-billable work", &[2, 3]),
        ]))
    });
    let service = MockDeps {
        report_category_dao,
    }
    .build_service();

    let map = service.build_map(().auth()).await.unwrap();

    assert_eq!(map.classify(1), Category::Billable);
    // Task 2 matches both rule sets; billable wins.
    assert_eq!(map.classify(2), Category::Billable);
    assert_eq!(map.classify(3), Category::NonBillable);
    assert_eq!(map.classify(4), Category::Uncategorized);
    assert!(!map.non_billable.contains(&2));
}

#[tokio::test]
async fn test_classification_is_case_insensitive() {
    let mut report_category_dao = MockReportCategoryDao::new();
    report_category_dao.expect_find_active().returning(|| {
        Ok(Arc::new([
            category("Client work", "BILLABLE hours", &[1]),
            category("Admin", "internal Non-Billable", &[2]),
        ]))
    });
    let service = MockDeps {
        report_category_dao,
    }
    .build_service();

    let map = service.build_map(().auth()).await.unwrap();

    assert_eq!(map.classify(1), Category::Billable);
    assert_eq!(map.classify(2), Category::NonBillable);
}

#[tokio::test]
async fn test_empty_configuration_maps_everything_uncategorized() {
    let mut report_category_dao = MockReportCategoryDao::new();
    report_category_dao
        .expect_find_active()
        .returning(|| Ok(Arc::new([])));
    let service = MockDeps {
        report_category_dao,
    }
    .build_service();

    let map = service.build_map(().auth()).await.unwrap();

    assert_eq!(map.classify(1), Category::Uncategorized);
    assert!(map.billable.is_empty());
    assert!(map.non_billable.is_empty());
}

#[tokio::test]
async fn test_traceability_records_every_matching_category() {
    let mut report_category_dao = MockReportCategoryDao::new();
    report_category_dao.expect_find_active().returning(|| {
        Ok(Arc::new([
            category("Client work", "Billable work", &[7]),
            category("Review", "Non-billable work", &[7]),
        ]))
    });
    let service = MockDeps {
        report_category_dao,
    }
    .build_service();

    let map = service.build_map(().auth()).await.unwrap();

    assert_eq!(map.categories_for(7).len(), 2);
    assert!(map.categories_for(8).is_empty());
}
