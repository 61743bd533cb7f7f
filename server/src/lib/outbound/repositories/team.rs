use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::team::errors::TeamError;
use crate::domain::team::models::NewTeam;
use crate::domain::team::models::Team;
use crate::domain::team::models::TeamId;
use crate::domain::team::models::TeamName;
use crate::domain::team::ports::TeamRepository;
use crate::domain::user::models::UserId;

pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Members of a team in joining order.
    async fn member_ids(&self, team_id: Uuid) -> Result<Vec<Uuid>, TeamError> {
        sqlx::query_scalar(
            r#"
            SELECT user_id
            FROM team_members
            WHERE team_id = $1
            ORDER BY joined_at ASC
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)
    }
}

#[derive(FromRow)]
struct TeamRow {
    id: Uuid,
    name: String,
    creator_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TeamRow {
    fn into_team(self, member_ids: Vec<Uuid>) -> Result<Team, TeamError> {
        Ok(Team {
            id: TeamId(self.id),
            name: TeamName::new(self.name)?,
            creator_id: UserId(self.creator_id),
            member_ids: member_ids.into_iter().map(UserId).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> TeamError {
    TeamError::DatabaseError(e.to_string())
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn create(&self, team: NewTeam) -> Result<Team, TeamError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            INSERT INTO teams (name, creator_id, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            RETURNING id, name, creator_id, created_at, updated_at
            "#,
        )
        .bind(team.name.as_str())
        .bind(team.creator_id.0)
        .bind(team.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(database_error)?;

        sqlx::query(
            r#"
            INSERT INTO team_members (team_id, user_id, joined_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(row.id)
        .bind(row.creator_id)
        .bind(row.created_at)
        .execute(&mut *tx)
        .await
        .map_err(database_error)?;

        tx.commit().await.map_err(database_error)?;

        let creator_id = row.creator_id;
        row.into_team(vec![creator_id])
    }

    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, TeamError> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, creator_id, created_at, updated_at
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let member_ids = self.member_ids(row.id).await?;
        row.into_team(member_ids).map(Some)
    }

    async fn list_by_member(&self, user_id: &UserId) -> Result<Vec<Team>, TeamError> {
        let rows = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT t.id, t.name, t.creator_id, t.created_at, t.updated_at
            FROM teams t
            JOIN team_members m ON m.team_id = t.id
            WHERE m.user_id = $1
            ORDER BY t.created_at ASC, t.id ASC
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        let mut teams = Vec::with_capacity(rows.len());
        for row in rows {
            let member_ids = self.member_ids(row.id).await?;
            teams.push(row.into_team(member_ids)?);
        }

        Ok(teams)
    }
}
