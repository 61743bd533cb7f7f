//! In-process repositories backed by `RwLock<HashMap>`.
//!
//! Used when `storage = "memory"` and by the integration tests. Contents are
//! lost on restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::project::errors::ProjectError;
use crate::domain::project::models::NewProject;
use crate::domain::project::models::Owner;
use crate::domain::project::models::Project;
use crate::domain::project::models::ProjectId;
use crate::domain::project::ports::ProjectRepository;
use crate::domain::team::errors::TeamError;
use crate::domain::team::models::NewTeam;
use crate::domain::team::models::Team;
use crate::domain::team::models::TeamId;
use crate::domain::team::ports::TeamRepository;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::errors::UserError;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }

        let user = user.with_id(UserId(Uuid::new_v4()));
        users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| &u.username == username)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryTeamRepository {
    teams: RwLock<HashMap<TeamId, Team>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn create(&self, team: NewTeam) -> Result<Team, TeamError> {
        let team = team.with_id(TeamId(Uuid::new_v4()));
        self.teams.write().await.insert(team.id, team.clone());
        Ok(team)
    }

    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, TeamError> {
        Ok(self.teams.read().await.get(id).cloned())
    }

    async fn list_by_member(&self, user_id: &UserId) -> Result<Vec<Team>, TeamError> {
        let mut teams: Vec<Team> = self
            .teams
            .read()
            .await
            .values()
            .filter(|team| team.has_member(user_id))
            .cloned()
            .collect();
        teams.sort_by_key(|team| (team.created_at, team.id.into_uuid()));
        Ok(teams)
    }
}

#[derive(Default)]
pub struct InMemoryProjectRepository {
    projects: RwLock<HashMap<Owner, Vec<Project>>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn create(&self, project: NewProject) -> Result<Project, ProjectError> {
        let project = project.with_id(ProjectId(Uuid::new_v4()));
        self.projects
            .write()
            .await
            .entry(project.owner)
            .or_default()
            .push(project.clone());
        Ok(project)
    }

    async fn list_by_owner(&self, owner: &Owner) -> Result<Vec<Project>, ProjectError> {
        Ok(self
            .projects
            .read()
            .await
            .get(owner)
            .cloned()
            .unwrap_or_default())
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, ProjectError> {
        Ok(self
            .projects
            .read()
            .await
            .values()
            .flatten()
            .find(|project| &project.id == id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::project::models::ProjectName;
    use crate::domain::team::models::TeamName;
    use crate::domain::user::models::Nickname;

    fn new_user(username: &str) -> NewUser {
        let username = Username::new(username.to_string()).unwrap();
        NewUser {
            nickname: Nickname::from(&username),
            username,
            password_hash: "$argon2id$stub".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_user_create_assigns_distinct_ids() {
        let repository = InMemoryUserRepository::new();

        let alice = repository.create(new_user("alice")).await.unwrap();
        let bob = repository.create(new_user("bob")).await.unwrap();

        assert_ne!(alice.id, bob.id);
        assert_eq!(
            repository.find_by_id(&alice.id).await.unwrap(),
            Some(alice.clone())
        );
        assert_eq!(
            repository.find_by_username(&bob.username).await.unwrap(),
            Some(bob)
        );
    }

    #[tokio::test]
    async fn test_user_duplicate_username() {
        let repository = InMemoryUserRepository::new();
        repository.create(new_user("alice")).await.unwrap();

        let result = repository.create(new_user("alice")).await;

        assert_eq!(
            result,
            Err(UserError::UsernameAlreadyExists("alice".to_string()))
        );
    }

    #[tokio::test]
    async fn test_projects_listed_per_owner_in_creation_order() {
        let repository = InMemoryProjectRepository::new();
        let creator = UserId(Uuid::new_v4());
        let team = NewTeam::new(
            TeamName::new("Compilers".to_string()).unwrap(),
            creator,
            Utc::now(),
        )
        .with_id(TeamId(Uuid::new_v4()));

        for (name, owner) in [
            ("first", Owner::User(creator)),
            ("shared", Owner::Team(team.id)),
            ("second", Owner::User(creator)),
        ] {
            repository
                .create(NewProject {
                    name: ProjectName::new(name.to_string()).unwrap(),
                    owner,
                    creator_id: creator,
                    created_at: Utc::now(),
                })
                .await
                .unwrap();
        }

        let names: Vec<String> = repository
            .list_by_owner(&Owner::User(creator))
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name.as_str().to_string())
            .collect();

        assert_eq!(names, vec!["first", "second"]);
        assert!(repository
            .list_by_owner(&Owner::User(UserId(Uuid::new_v4())))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_teams_listed_by_member() {
        let repository = InMemoryTeamRepository::new();
        let alice = UserId(Uuid::new_v4());
        let bob = UserId(Uuid::new_v4());
        let created_at = Utc::now();

        let first = repository
            .create(NewTeam::new(
                TeamName::new("Compilers".to_string()).unwrap(),
                alice,
                created_at,
            ))
            .await
            .unwrap();
        let second = repository
            .create(NewTeam::new(
                TeamName::new("Runtime".to_string()).unwrap(),
                alice,
                created_at + chrono::Duration::seconds(1),
            ))
            .await
            .unwrap();
        repository
            .create(NewTeam::new(
                TeamName::new("Tooling".to_string()).unwrap(),
                bob,
                created_at,
            ))
            .await
            .unwrap();

        assert_eq!(
            repository.list_by_member(&alice).await.unwrap(),
            vec![first, second]
        );
        assert!(repository
            .list_by_member(&UserId(Uuid::new_v4()))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_project_found_by_id_across_owners() {
        let repository = InMemoryProjectRepository::new();
        let creator = UserId(Uuid::new_v4());

        let project = repository
            .create(NewProject {
                name: ProjectName::new("frontend".to_string()).unwrap(),
                owner: Owner::Team(TeamId(Uuid::new_v4())),
                creator_id: creator,
                created_at: Utc::now(),
            })
            .await
            .unwrap();

        assert_eq!(
            repository.find_by_id(&project.id).await.unwrap(),
            Some(project)
        );
        assert_eq!(
            repository
                .find_by_id(&ProjectId(Uuid::new_v4()))
                .await
                .unwrap(),
            None
        );
    }
}
