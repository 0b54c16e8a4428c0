//! Repository-layer tests for `MovieStore`, run against a real
//! in-memory SQLite database with the migration applied.

use migration::{Migrator, MigratorTrait};
use movieboxd::{
    models::{MovieOrder, NewMovie},
    store::{MovieStore, StoreError},
};
use sea_orm::Database;

async fn store() -> MovieStore {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    MovieStore::new(db)
}

fn titled(title: &str) -> NewMovie {
    NewMovie { title: title.to_string(), ..Default::default() }
}

#[tokio::test]
async fn duplicate_title_fails_and_leaves_the_table_unchanged() {
    let store = store().await;

    store.insert(titled("Heat")).await.unwrap();
    let err = store.insert(titled("Heat")).await.unwrap_err();
    assert!(matches!(err, StoreError::DuplicateTitle));

    let all = store.list_all(None).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn insert_then_get_round_trips_every_field() {
    let store = store().await;

    let inserted = store
        .insert(NewMovie {
            title: "Heat".to_string(),
            year: Some(1995),
            description: Some("Cat and mouse in Los Angeles.".to_string()),
            rating: Some(9.0),
            ranking: Some(1),
            review: Some("A classic.".to_string()),
            img_url: Some("https://example.com/heat.jpg".to_string()),
        })
        .await
        .unwrap();

    let fetched = store.get(inserted.id).await.unwrap();
    assert_eq!(fetched, inserted);
    assert_eq!(fetched.title, "Heat");
    assert_eq!(fetched.year, Some(1995));
    assert_eq!(fetched.description.as_deref(), Some("Cat and mouse in Los Angeles."));
    assert_eq!(fetched.rating, Some(9.0));
    assert_eq!(fetched.ranking, Some(1));
    assert_eq!(fetched.review.as_deref(), Some("A classic."));
    assert_eq!(fetched.img_url.as_deref(), Some("https://example.com/heat.jpg"));
}

#[tokio::test]
async fn update_review_touches_only_rating_and_review() {
    let store = store().await;

    let inserted = store
        .insert(NewMovie {
            title: "Heat".to_string(),
            year: Some(1995),
            description: Some("Cat and mouse in Los Angeles.".to_string()),
            img_url: Some("https://example.com/heat.jpg".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let updated = store.update_review(inserted.id, 7.5, "ok".to_string()).await.unwrap();

    assert_eq!(updated.rating, Some(7.5));
    assert_eq!(updated.review.as_deref(), Some("ok"));
    assert_eq!(updated.title, inserted.title);
    assert_eq!(updated.year, inserted.year);
    assert_eq!(updated.description, inserted.description);
    assert_eq!(updated.img_url, inserted.img_url);
}

#[tokio::test]
async fn update_review_on_missing_id_is_not_found() {
    let store = store().await;
    let err = store.update_review(999, 5.0, "gone".to_string()).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound));
}

#[tokio::test]
async fn get_on_missing_id_is_not_found() {
    let store = store().await;
    assert!(matches!(store.get(42).await.unwrap_err(), StoreError::NotFound));
}

#[tokio::test]
async fn deleting_a_missing_id_is_a_silent_noop() {
    let store = store().await;
    store.insert(titled("Heat")).await.unwrap();

    store.delete(999).await.unwrap();

    let all = store.list_all(None).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Heat");
}

#[tokio::test]
async fn delete_removes_the_record() {
    let store = store().await;
    let movie = store.insert(titled("Heat")).await.unwrap();

    store.delete(movie.id).await.unwrap();

    assert!(store.list_all(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_orders_by_rating_descending() {
    let store = store().await;

    for (title, rating) in [("First", 5.0), ("Second", 9.0), ("Third", 7.0)] {
        store
            .insert(NewMovie {
                title: title.to_string(),
                rating: Some(rating),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let ordered = store.list_all(Some(MovieOrder::RatingDesc)).await.unwrap();
    let ratings: Vec<f64> = ordered.iter().filter_map(|m| m.rating).collect();
    assert_eq!(ratings, vec![9.0, 7.0, 5.0]);
}

#[tokio::test]
async fn list_without_order_returns_insertion_order() {
    let store = store().await;

    store.insert(NewMovie { title: "B".to_string(), rating: Some(9.0), ..Default::default() })
        .await
        .unwrap();
    store.insert(NewMovie { title: "A".to_string(), rating: Some(2.0), ..Default::default() })
        .await
        .unwrap();

    let titles: Vec<String> =
        store.list_all(None).await.unwrap().into_iter().map(|m| m.title).collect();
    assert_eq!(titles, vec!["B".to_string(), "A".to_string()]);
}
