use sea_orm::sea_query::{Index, IndexOrder, PostgresQueryBuilder};
use sea_orm::*;
use tracing::info;

use crate::entity::{mood_entry, post};
use crate::store::{NewResource, Store, StoreError};

/// Default directory entries, inserted only into an empty `resources` table.
const DEFAULT_RESOURCES: &[(&str, &str, Option<&str>, Option<&str>, &str)] = &[
    (
        "988 Suicide & Crisis Lifeline",
        "Hotline",
        Some("988"),
        Some("https://988lifeline.org"),
        "Free, confidential support for people in distress, available 24/7.",
    ),
    (
        "Crisis Text Line",
        "Hotline",
        Some("Text HOME to 741741"),
        Some("https://www.crisistextline.org"),
        "Text-based crisis support with trained volunteers.",
    ),
    (
        "Find a Therapist",
        "Article",
        None,
        Some("https://www.psychologytoday.com/us/therapists"),
        "Directory for locating licensed therapists by area and specialty.",
    ),
];

/// Seed the verified resource directory if it is empty.
pub async fn seed_resources(db: &DatabaseConnection) -> Result<(), DbErr> {
    let txn = db.begin().await?;
    let store = Store::new(&txn);

    if store.count_resources().await.map_err(into_db_err)? > 0 {
        return Ok(());
    }

    for &(name, resource_type, contact_info, website_url, description) in DEFAULT_RESOURCES {
        store
            .insert_resource(NewResource {
                name: name.to_string(),
                resource_type: resource_type.to_string(),
                contact_info: contact_info.map(str::to_string),
                website_url: website_url.map(str::to_string),
                description: Some(description.to_string()),
                is_verified: true,
            })
            .await
            .map_err(into_db_err)?;
    }
    txn.commit().await?;

    info!("Seeded {} default resources", DEFAULT_RESOURCES.len());
    Ok(())
}

fn into_db_err(err: StoreError) -> DbErr {
    match err {
        StoreError::Db(e) => e,
        other => DbErr::Custom(other.to_string()),
    }
}

/// Ensure required database indexes exist.
///
/// SeaORM's schema-sync doesn't support descending or composite non-unique
/// indexes, so they are created here.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Forum listing: ORDER BY created_at DESC
    let stmt = Index::create()
        .if_not_exists()
        .name("idx_posts_created_at")
        .table(post::Entity)
        .col((post::Column::CreatedAt, IndexOrder::Desc))
        .to_string(PostgresQueryBuilder);
    ensure_index(db, "idx_posts_created_at", &stmt).await;

    // Mood history: WHERE user_id = ? ORDER BY entry_date DESC
    let stmt = Index::create()
        .if_not_exists()
        .name("idx_mood_entries_user_entry_date")
        .table(mood_entry::Entity)
        .col(mood_entry::Column::UserId)
        .col((mood_entry::Column::EntryDate, IndexOrder::Desc))
        .to_string(PostgresQueryBuilder);
    ensure_index(db, "idx_mood_entries_user_entry_date", &stmt).await;

    Ok(())
}

async fn ensure_index(db: &DatabaseConnection, name: &str, stmt: &str) {
    match db.execute_unprepared(stmt).await {
        Ok(_) => info!("Ensured index {} exists", name),
        Err(e) => tracing::warn!("Failed to create index {}: {}", name, e),
    }
}
