use crate::models::{DbCommunity, DbCommunityMember, DbCommunityWithCount};
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Creates a community with the creator joined as leader, in one
/// transaction.
pub async fn create_community(
    pool: &Pool<Postgres>,
    creator_id: Uuid,
    name: &str,
    description: Option<&str>,
    sport: Option<&str>,
    has_membership: bool,
) -> Result<DbCommunity> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let mut tx = pool.begin().await?;

    let community = sqlx::query_as::<_, DbCommunity>(
        r#"
        INSERT INTO communities (id, creator_id, name, description, sport, has_membership, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, creator_id, name, description, sport, has_membership, created_at
        "#,
    )
    .bind(id)
    .bind(creator_id)
    .bind(name)
    .bind(description)
    .bind(sport)
    .bind(has_membership)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO community_members (community_id, user_id, role, joined_at)
        VALUES ($1, $2, 'leader', $3)
        "#,
    )
    .bind(id)
    .bind(creator_id)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(community)
}

pub async fn list_communities(pool: &Pool<Postgres>) -> Result<Vec<DbCommunityWithCount>> {
    let communities = sqlx::query_as::<_, DbCommunityWithCount>(
        r#"
        SELECT c.id, c.creator_id, c.name, c.description, c.sport, c.has_membership,
               COUNT(m.user_id) AS member_count, c.created_at
        FROM communities c
        LEFT JOIN community_members m ON m.community_id = c.id
        GROUP BY c.id
        ORDER BY c.created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(communities)
}

pub async fn communities_for_user(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Vec<DbCommunityWithCount>> {
    let communities = sqlx::query_as::<_, DbCommunityWithCount>(
        r#"
        SELECT c.id, c.creator_id, c.name, c.description, c.sport, c.has_membership,
               (SELECT COUNT(*) FROM community_members m2 WHERE m2.community_id = c.id) AS member_count,
               c.created_at
        FROM communities c
        JOIN community_members m ON m.community_id = c.id
        WHERE m.user_id = $1
        ORDER BY c.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(communities)
}

pub async fn get_community_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbCommunityWithCount>> {
    let community = sqlx::query_as::<_, DbCommunityWithCount>(
        r#"
        SELECT c.id, c.creator_id, c.name, c.description, c.sport, c.has_membership,
               COUNT(m.user_id) AS member_count, c.created_at
        FROM communities c
        LEFT JOIN community_members m ON m.community_id = c.id
        WHERE c.id = $1
        GROUP BY c.id
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(community)
}

/// Adds a member; returns `None` when the user already belongs to the
/// community.
pub async fn join_community(
    pool: &Pool<Postgres>,
    community_id: Uuid,
    user_id: Uuid,
) -> Result<Option<DbCommunityMember>> {
    let result = sqlx::query_as::<_, DbCommunityMember>(
        r#"
        INSERT INTO community_members (community_id, user_id, role)
        VALUES ($1, $2, 'member')
        RETURNING community_id, user_id, role
        "#,
    )
    .bind(community_id)
    .bind(user_id)
    .fetch_one(pool)
    .await;

    match result {
        Ok(member) => Ok(Some(member)),
        Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some("23505") => Ok(None),
        Err(err) => Err(err.into()),
    }
}
