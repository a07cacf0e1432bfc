use std::sync::Arc;

use dao::user::{MockUserDao, UserEntity};
use service::user_set::{RegionScope, UserPopulationFilter, UserSetService};
use time::macros::date;
use uuid::Uuid;

use crate::test::fixtures::{region_apac, region_emea, user_id_1, NoneTypeExt};
use crate::user_set::{UserSetServiceDeps, UserSetServiceImpl};

struct MockDeps {
    user_dao: MockUserDao,
}
impl UserSetServiceDeps for MockDeps {
    type Context = ();
    type UserDao = MockUserDao;
}
impl MockDeps {
    fn build_service(self) -> UserSetServiceImpl<MockDeps> {
        UserSetServiceImpl {
            user_dao: self.user_dao.into(),
        }
    }
}

fn entity(id: Uuid, name: &str) -> UserEntity {
    UserEntity {
        id,
        name: Arc::from(name),
        email: Arc::from("ada@example.com"),
        job_title: None,
        work_status: Arc::from("full-time"),
        region_id: Some(region_apac()),
        cohort_id: None,
        hired_at: date!(2023 - 06 - 01),
        ended_at: None,
    }
}

#[tokio::test]
async fn test_unrestricted_scope_passes_requested_region_through() {
    let mut user_dao = MockUserDao::new();
    user_dao
        .expect_find_active()
        .withf(|query| query.region_id == Some(region_emea()))
        .times(1)
        .returning(|_| Ok(Arc::new([entity(user_id_1(), "Ada")])));
    let service = MockDeps { user_dao }.build_service();

    let filter = UserPopulationFilter {
        region_id: Some(region_emea()),
        ..Default::default()
    };
    let users = service
        .resolve(&filter, &RegionScope::Unrestricted, ().auth())
        .await
        .unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, user_id_1());
    assert_eq!(users[0].name.as_ref(), "Ada");
}

#[tokio::test]
async fn test_region_scope_forces_own_region() {
    let mut user_dao = MockUserDao::new();
    user_dao
        .expect_find_active()
        .withf(|query| query.region_id == Some(region_apac()))
        .times(1)
        .returning(|_| Ok(Arc::new([entity(user_id_1(), "Ada")])));
    let service = MockDeps { user_dao }.build_service();

    // No region requested: the scope's region fills in.
    let users = service
        .resolve(
            &UserPopulationFilter::default(),
            &RegionScope::Region(region_apac()),
            ().auth(),
        )
        .await
        .unwrap();

    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn test_region_scope_with_foreign_region_request_yields_nothing() {
    // No dao expectation: a storage query would panic the mock.
    let service = MockDeps {
        user_dao: MockUserDao::new(),
    }
    .build_service();

    let filter = UserPopulationFilter {
        region_id: Some(region_emea()),
        ..Default::default()
    };
    let users = service
        .resolve(&filter, &RegionScope::Region(region_apac()), ().auth())
        .await
        .unwrap();

    assert!(users.is_empty());
}

#[tokio::test]
async fn test_region_scope_with_matching_region_request_queries_that_region() {
    let mut user_dao = MockUserDao::new();
    user_dao
        .expect_find_active()
        .withf(|query| query.region_id == Some(region_apac()))
        .times(1)
        .returning(|_| Ok(Arc::new([])));
    let service = MockDeps { user_dao }.build_service();

    let filter = UserPopulationFilter {
        region_id: Some(region_apac()),
        work_status: Some(Arc::from("full-time")),
        ..Default::default()
    };
    let users = service
        .resolve(&filter, &RegionScope::Region(region_apac()), ().auth())
        .await
        .unwrap();

    assert!(users.is_empty());
}
