//! Repository for the `people` table.

use railab_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::person::{NewPerson, Person, UpdatePerson};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, role, email, image_url, bio, research_interests, publications, \
     linkedin, google_scholar, personal_website, is_active, sort_order, created_at, updated_at";

/// Listing order. `COLLATE "C"` keeps text comparison byte-wise.
const ORDER_BY: &str = r#"sort_order ASC, role COLLATE "C" ASC, name COLLATE "C" ASC, id ASC"#;

/// Provides CRUD operations for people.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new person, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewPerson) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO people (name, role, email, image_url, bio, research_interests,
                publications, linkedin, google_scholar, personal_website, is_active, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.email)
            .bind(&input.image_url)
            .bind(&input.bio)
            .bind(&input.research_interests)
            .bind(Json(&input.publications))
            .bind(&input.linkedin)
            .bind(&input.google_scholar)
            .bind(&input.personal_website)
            .bind(input.is_active)
            .bind(input.order)
            .fetch_one(pool)
            .await
    }

    /// Find a person by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch every person whose id is in `ids`. Unknown ids are skipped.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Person>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM people WHERE id = ANY($1)");
        sqlx::query_as::<_, Person>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List current (`is_active = true`) or alumni (`false`) people.
    pub async fn list_by_active(pool: &PgPool, is_active: bool) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people WHERE is_active = $1 ORDER BY {ORDER_BY}");
        sqlx::query_as::<_, Person>(&query)
            .bind(is_active)
            .fetch_all(pool)
            .await
    }

    /// Update a person. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePerson,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "UPDATE people SET
                name = COALESCE($2, name),
                role = COALESCE($3, role),
                email = COALESCE($4, email),
                image_url = COALESCE($5, image_url),
                bio = COALESCE($6, bio),
                research_interests = COALESCE($7, research_interests),
                publications = COALESCE($8, publications),
                linkedin = COALESCE($9, linkedin),
                google_scholar = COALESCE($10, google_scholar),
                personal_website = COALESCE($11, personal_website),
                is_active = COALESCE($12, is_active),
                sort_order = COALESCE($13, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.email)
            .bind(&input.image_url)
            .bind(&input.bio)
            .bind(&input.research_interests)
            .bind(input.publications.as_ref().map(Json))
            .bind(&input.linkedin)
            .bind(&input.google_scholar)
            .bind(&input.personal_website)
            .bind(input.is_active)
            .bind(input.order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a person by ID. Returns `true` if a row was removed.
    ///
    /// Projects referencing the person are left untouched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
