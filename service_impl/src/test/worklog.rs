use std::sync::Arc;

use dao::worklog::{MockWorklogDao, WorklogEntity};
use service::category_map::Category;
use service::worklog::WorklogBatchService;
use time::macros::datetime;
use uuid::Uuid;

use crate::test::fixtures::{generate_category_map, user_id_1, user_id_2, NoneTypeExt};
use crate::worklog::{WorklogBatchServiceDeps, WorklogBatchServiceImpl};

struct MockDeps {
    worklog_dao: MockWorklogDao,
}
impl WorklogBatchServiceDeps for MockDeps {
    type Context = ();
    type WorklogDao = MockWorklogDao;
}
impl MockDeps {
    fn build_service(self) -> WorklogBatchServiceImpl<MockDeps> {
        WorklogBatchServiceImpl {
            worklog_dao: self.worklog_dao.into(),
        }
    }
}

fn entity(id: i64, user_id: Uuid, task_id: i64, duration_seconds: i64) -> WorklogEntity {
    WorklogEntity {
        id,
        user_id,
        task_id,
        project_id: 500,
        started_at: datetime!(2024-01-10 09:00:00),
        ended_at: datetime!(2024-01-10 17:00:00),
        duration_seconds,
        comment: None,
    }
}

#[tokio::test]
async fn test_empty_user_set_skips_storage() {
    // No expectation on the dao: a query would panic the mock.
    let service = MockDeps {
        worklog_dao: MockWorklogDao::new(),
    }
    .build_service();

    let result = service
        .load_classified(
            &[],
            datetime!(2024-01-10 00:00:00),
            datetime!(2024-01-10 23:59:59),
            &generate_category_map(),
            ().auth(),
        )
        .await
        .unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_single_load_groups_and_classifies_by_user() {
    let mut worklog_dao = MockWorklogDao::new();
    worklog_dao
        .expect_find_for_users_in_window()
        .times(1)
        .returning(|_, _, _| {
            Ok(Arc::new([
                entity(101, user_id_2(), 20, 1800),
                entity(100, user_id_1(), 10, 3600),
                entity(102, user_id_1(), 99, 600),
            ]))
        });
    let service = MockDeps { worklog_dao }.build_service();

    let result = service
        .load_classified(
            &[user_id_1(), user_id_2()],
            datetime!(2024-01-10 00:00:00),
            datetime!(2024-01-10 23:59:59),
            &generate_category_map(),
            ().auth(),
        )
        .await
        .unwrap();

    assert_eq!(result.len(), 2);
    let first_user = result.get(&user_id_1()).unwrap();
    assert_eq!(first_user.len(), 2);
    assert_eq!(first_user[0].category, Category::Billable);
    assert_eq!(first_user[1].category, Category::Uncategorized);
    let second_user = result.get(&user_id_2()).unwrap();
    assert_eq!(second_user.len(), 1);
    assert_eq!(second_user[0].category, Category::NonBillable);
}
