//! Repository for the `projects` table.

use railab_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::project::{NewProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, short_description, full_description, image_url, start_date, \
     end_date, status, team_members, publications, github_link, demo_link, tags, sort_order, \
     created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `team_members` is stored as given; ids are not checked against `people`.
    pub async fn create(pool: &PgPool, input: &NewProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, short_description, full_description, image_url,
                start_date, end_date, status, team_members, publications, github_link,
                demo_link, tags, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.short_description)
            .bind(&input.full_description)
            .bind(&input.image_url)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.status.as_str())
            .bind(&input.team_members)
            .bind(Json(&input.publications))
            .bind(&input.github_link)
            .bind(&input.demo_link)
            .bind(&input.tags)
            .bind(input.order)
            .fetch_one(pool)
            .await
    }

    /// Find a project by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects by manual order, then most recent start date.
    /// Projects without a start date come last within an order value.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             ORDER BY sort_order ASC, start_date DESC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                short_description = COALESCE($3, short_description),
                full_description = COALESCE($4, full_description),
                image_url = COALESCE($5, image_url),
                start_date = COALESCE($6, start_date),
                end_date = COALESCE($7, end_date),
                status = COALESCE($8, status),
                team_members = COALESCE($9, team_members),
                publications = COALESCE($10, publications),
                github_link = COALESCE($11, github_link),
                demo_link = COALESCE($12, demo_link),
                tags = COALESCE($13, tags),
                sort_order = COALESCE($14, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.short_description)
            .bind(&input.full_description)
            .bind(&input.image_url)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.status.map(|s| s.as_str()))
            .bind(&input.team_members)
            .bind(input.publications.as_ref().map(Json))
            .bind(&input.github_link)
            .bind(&input.demo_link)
            .bind(&input.tags)
            .bind(input.order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
