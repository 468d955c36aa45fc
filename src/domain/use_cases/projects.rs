use tracing::warn;

use crate::{
    entities::project::{sort_by_year_desc, Project, ProjectListResponse},
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists projects, newest first when every year is a number. An
    /// unreachable store yields an empty list.
    pub async fn list_projects(&self, category: Option<&str>) -> Result<ProjectListResponse, AppError> {
        let mut projects = match self.project_repo.list_projects(category.map(str::to_string)).await {
            Ok(projects) => projects,
            Err(e) if e.is_unavailable() => {
                warn!("Listing projects without a store: {}", e);
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        if !sort_by_year_desc(&mut projects) {
            warn!("Project years are not all numeric; keeping store order");
        }

        Ok(ProjectListResponse { projects })
    }

    /// Retrieves a project by its slug
    pub async fn get_project_by_slug(&self, slug: &str) -> Result<Project, AppError> {
        let project = match self.project_repo.get_project_by_slug(slug).await {
            Ok(project) => project,
            Err(e) if e.is_unavailable() => {
                warn!("Looking up project '{}' without a store: {}", slug, e);
                None
            }
            Err(e) => return Err(e.into()),
        };

        project.ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }
}
