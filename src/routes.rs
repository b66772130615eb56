//! Routes
//!
//! In-app routing. The current route is mirrored into the URL hash
//! (`#/project/3`) so reloads and history navigation keep working.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Project(i64),
}

impl Route {
    /// Parse a path or hash. Unknown paths resolve to login.
    pub fn parse(path: &str) -> Route {
        let path = path.trim().trim_start_matches('#').trim_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["dashboard"] => Route::Dashboard,
            ["project", id] => id.parse().map(Route::Project).unwrap_or(Route::Login),
            _ => Route::Login,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Project(id) => format!("/project/{}", id),
        }
    }

    pub fn hash(&self) -> String {
        format!("#{}", self.path())
    }

    /// Requires a stored credential
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Project(_))
    }
}
