use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::project::errors::ProjectError;
use crate::domain::project::models::NewProject;
use crate::domain::project::models::Owner;
use crate::domain::project::models::Project;
use crate::domain::project::models::ProjectId;
use crate::domain::project::models::ProjectName;
use crate::domain::project::ports::ProjectRepository;
use crate::domain::user::models::UserId;

pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ProjectRow {
    id: Uuid,
    name: String,
    owner_type: String,
    owner_id: Uuid,
    creator_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProjectRow> for Project {
    type Error = ProjectError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        Ok(Project {
            id: ProjectId(row.id),
            name: ProjectName::new(row.name)?,
            owner: Owner::from_parts(&row.owner_type, row.owner_id)?,
            creator_id: UserId(row.creator_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn create(&self, project: NewProject) -> Result<Project, ProjectError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            INSERT INTO projects (name, owner_type, owner_id, creator_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING id, name, owner_type, owner_id, creator_id, created_at, updated_at
            "#,
        )
        .bind(project.name.as_str())
        .bind(project.owner.kind())
        .bind(project.owner.id())
        .bind(project.creator_id.0)
        .bind(project.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ProjectError::DatabaseError(e.to_string()))?;

        row.try_into()
    }

    async fn list_by_owner(&self, owner: &Owner) -> Result<Vec<Project>, ProjectError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, name, owner_type, owner_id, creator_id, created_at, updated_at
            FROM projects
            WHERE owner_type = $1 AND owner_id = $2
            ORDER BY created_at ASC
            "#,
        )
        .bind(owner.kind())
        .bind(owner.id())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProjectError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Project::try_from).collect()
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, ProjectError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, name, owner_type, owner_id, creator_id, created_at, updated_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProjectError::DatabaseError(e.to_string()))?;

        row.map(Project::try_from).transpose()
    }
}
