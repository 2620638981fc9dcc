use chrono::Utc;

use wavesight::domain::category::Category;
use wavesight::domain::trend::TrendStatus;
use wavesight::domain::validation::{NewTrendValidation, ValidationVote};
use wavesight::repository::{
    DieselRepository, RepositoryError, TrendListQuery, TrendReader, TrendWriter, ValidationReader,
    ValidationWriter,
};

mod common;

#[test]
fn create_trend_round_trips_through_sqlite() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let new_trend = common::new_trend(1, "Silent vlogging", Category::CreatorTechnique);
    let created = repo.create_trend(&new_trend).expect("should create trend");

    assert_eq!(created.title.as_str(), "Silent vlogging");
    assert_eq!(created.category, Category::CreatorTechnique);
    assert_eq!(created.status, TrendStatus::Submitted);
    assert_eq!(created.validation_count, 0);
    assert_eq!(created.approve_count, 0);
    assert_eq!(created.reject_count, 0);

    let fetched = repo
        .get_trend_by_id(created.id)
        .expect("should query trend")
        .expect("trend should exist");
    assert_eq!(fetched.title.as_str(), "Silent vlogging");
    assert_eq!(fetched.spotter_id.get(), 1);
}

#[test]
fn list_trends_filters_by_category_status_and_search() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_trend(&common::new_trend(1, "Glass skin routine", Category::VisualStyle))
        .expect("should create trend");
    repo.create_trend(&common::new_trend(1, "Sped-up remixes", Category::AudioMusic))
        .expect("should create trend");
    repo.create_trend(&common::new_trend(2, "Glass bridge pranks", Category::MemeFormat))
        .expect("should create trend");

    let (total, trends) = repo
        .list_trends(TrendListQuery::default().category(Category::AudioMusic))
        .expect("should list by category");
    assert_eq!(total, 1);
    assert_eq!(trends[0].title.as_str(), "Sped-up remixes");

    let (total, _) = repo
        .list_trends(TrendListQuery::default().status(TrendStatus::Submitted))
        .expect("should list by status");
    assert_eq!(total, 3);

    let (total, trends) = repo
        .list_trends(TrendListQuery::default().search("glass"))
        .expect("should list by search");
    assert_eq!(total, 2);
    assert!(trends.iter().all(|t| t.title.as_str().contains("Glass")));

    let spotter = trends[0].spotter_id;
    let (total, _) = repo
        .list_trends(TrendListQuery::default().spotter(spotter))
        .expect("should list by spotter");
    assert!(total >= 1);
}

#[test]
fn list_trends_paginates() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    for i in 0..5 {
        repo.create_trend(&common::new_trend(
            1,
            &format!("Trend {i}"),
            Category::MemeFormat,
        ))
        .expect("should create trend");
    }

    let (total, page) = repo
        .list_trends(TrendListQuery::default().paginate(1, 2))
        .expect("should paginate");
    assert_eq!(total, 5);
    assert_eq!(page.len(), 2);

    let (_, last_page) = repo
        .list_trends(TrendListQuery::default().paginate(3, 2))
        .expect("should paginate");
    assert_eq!(last_page.len(), 1);
}

#[test]
fn create_validation_bumps_counters_in_one_transaction() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let trend = repo
        .create_trend(&common::new_trend(1, "NPC streaming", Category::BehaviorPattern))
        .expect("should create trend");

    let updated = repo
        .create_validation(&NewTrendValidation {
            trend_id: trend.id,
            validator_id: 2.try_into().expect("valid validator id"),
            vote: ValidationVote::Verify,
            created_at: Utc::now().naive_utc(),
        })
        .expect("should record vote");
    assert_eq!(updated.validation_count, 1);
    assert_eq!(updated.approve_count, 1);
    assert_eq!(updated.reject_count, 0);

    let updated = repo
        .create_validation(&NewTrendValidation {
            trend_id: trend.id,
            validator_id: 3.try_into().expect("valid validator id"),
            vote: ValidationVote::Reject,
            created_at: Utc::now().naive_utc(),
        })
        .expect("should record vote");
    assert_eq!(updated.validation_count, 2);
    assert_eq!(updated.approve_count, 1);
    assert_eq!(updated.reject_count, 1);

    let votes = repo
        .list_validations_for_trend(trend.id)
        .expect("should list votes");
    assert_eq!(votes.len(), 2);
    assert_eq!(votes[0].vote, ValidationVote::Verify);
    assert_eq!(votes[1].vote, ValidationVote::Reject);
}

#[test]
fn duplicate_votes_surface_as_duplicate_errors() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let trend = repo
        .create_trend(&common::new_trend(1, "Corecore edits", Category::VisualStyle))
        .expect("should create trend");

    let vote = NewTrendValidation {
        trend_id: trend.id,
        validator_id: 2.try_into().expect("valid validator id"),
        vote: ValidationVote::Verify,
        created_at: Utc::now().naive_utc(),
    };
    repo.create_validation(&vote).expect("first vote lands");

    let err = repo.create_validation(&vote).unwrap_err();
    assert!(matches!(err, RepositoryError::Duplicate));

    // The failed insert must not bump any counter.
    let trend = repo
        .get_trend_by_id(trend.id)
        .expect("should query trend")
        .expect("trend should exist");
    assert_eq!(trend.validation_count, 1);
    assert_eq!(trend.approve_count, 1);
}

#[test]
fn vote_on_missing_trend_is_not_found() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let err = repo
        .create_validation(&NewTrendValidation {
            trend_id: 999.try_into().expect("valid trend id"),
            validator_id: 2.try_into().expect("valid validator id"),
            vote: ValidationVote::Verify,
            created_at: Utc::now().naive_utc(),
        })
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn set_trend_status_updates_the_row() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let trend = repo
        .create_trend(&common::new_trend(1, "Deinfluencing", Category::BehaviorPattern))
        .expect("should create trend");

    let affected = repo
        .set_trend_status(trend.id, TrendStatus::Approved)
        .expect("should update status");
    assert_eq!(affected, 1);

    let trend = repo
        .get_trend_by_id(trend.id)
        .expect("should query trend")
        .expect("trend should exist");
    assert_eq!(trend.status, TrendStatus::Approved);
}
