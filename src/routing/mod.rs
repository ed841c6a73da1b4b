// Navigation Shell
// Route table and navigation history

use std::fmt;

use crate::models::UserId;

/// A page the application can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Users,
    /// `/user` with no id: create a new user
    UserCreate,
    /// `/user/{id}`: edit an existing user
    UserEdit(UserId),
    Badges,
    /// Wildcard fallback, keeps the requested path for display
    NotFound(String),
}

impl Route {
    /// Resolve a path to a route
    ///
    /// The root path redirects to `/home`. Leading and trailing slashes are
    /// ignored. The id segment of `/user/{id}` is percent-decoded and kept as
    /// text.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        match segments.as_slice() {
            [] | ["home"] => Route::Home,
            ["login"] => Route::Login,
            ["users"] => Route::Users,
            ["user"] => Route::UserCreate,
            ["user", id] if !id.is_empty() => match urlencoding::decode(id) {
                Ok(id) => Route::UserEdit(UserId::from(id.into_owned())),
                Err(_) => Route::NotFound(format!("/{}", trimmed)),
            },
            ["badges"] => Route::Badges,
            _ => Route::NotFound(format!("/{}", trimmed)),
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/home".to_string(),
            Route::Login => "/login".to_string(),
            Route::Users => "/users".to_string(),
            Route::UserCreate => "/user".to_string(),
            Route::UserEdit(id) => format!("/user/{}", urlencoding::encode(&id.as_key())),
            Route::Badges => "/badges".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Top-level route that owns this one in the navigation bar
    pub fn section(&self) -> Option<NavSection> {
        match self {
            Route::Home => Some(NavSection::Home),
            Route::Users | Route::UserCreate | Route::UserEdit(_) => Some(NavSection::Users),
            Route::Badges => Some(NavSection::Badges),
            Route::Login => Some(NavSection::Login),
            Route::NotFound(_) => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Entries of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Home,
    Users,
    Badges,
    Login,
}

impl NavSection {
    pub const ALL: [NavSection; 4] = [
        NavSection::Home,
        NavSection::Users,
        NavSection::Badges,
        NavSection::Login,
    ];

    pub fn title(self) -> &'static str {
        match self {
            NavSection::Home => "Home",
            NavSection::Users => "Users",
            NavSection::Badges => "Badges",
            NavSection::Login => "Login",
        }
    }

    pub fn route(self) -> Route {
        match self {
            NavSection::Home => Route::Home,
            NavSection::Users => Route::Users,
            NavSection::Badges => Route::Badges,
            NavSection::Login => Route::Login,
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

/// Navigation history stack
#[derive(Debug, Clone)]
pub struct Navigator {
    history: Vec<Route>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self { history: vec![start] }
    }

    pub fn current(&self) -> &Route {
        // history is never empty
        &self.history[self.history.len() - 1]
    }

    /// Push a route; pushing the current route again is a no-op
    pub fn push(&mut self, route: Route) -> bool {
        if self.current() == &route {
            return false;
        }
        self.history.push(route);
        true
    }

    /// Go back one entry; the first entry is never popped
    pub fn back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            true
        } else {
            false
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_redirects_home() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
    }

    #[test]
    fn test_user_routes() {
        assert_eq!(Route::parse("/user"), Route::UserCreate);
        assert_eq!(Route::parse("/user/12"), Route::UserEdit(UserId::Number(12)));
        assert_eq!(Route::parse("/user/ab"), Route::UserEdit(UserId::Text("ab".into())));
        assert_eq!(Route::parse("/user/a%2Fb"), Route::UserEdit(UserId::Text("a/b".into())));
    }

    #[test]
    fn test_leading_zeros_survive_parse() {
        match Route::parse("/user/007") {
            Route::UserEdit(UserId::Text(id)) => assert_eq!(id, "007"),
            other => panic!("expected text id, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_escape_falls_back() {
        assert_eq!(Route::parse("/user/%FF"), Route::NotFound("/user/%FF".into()));
    }

    #[test]
    fn test_unknown_path_falls_back() {
        assert_eq!(Route::parse("/nope/deeper"), Route::NotFound("/nope/deeper".into()));
        assert_eq!(Route::parse("/user/1/extra"), Route::NotFound("/user/1/extra".into()));
    }

    #[test]
    fn test_path_parses_back_to_same_route() {
        let routes = [
            Route::Home,
            Route::Login,
            Route::Users,
            Route::UserCreate,
            Route::UserEdit(UserId::Number(3)),
            Route::UserEdit(UserId::Text("12".into())),
            Route::UserEdit(UserId::Text("007".into())),
            Route::UserEdit(UserId::Text("a/b".into())),
            Route::UserEdit(UserId::Text("a b".into())),
            Route::Badges,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route, "path {}", route.path());
        }
        assert_eq!(Route::UserEdit(UserId::Text("a/b".into())).path(), "/user/a%2Fb");
    }

    #[test]
    fn test_back_keeps_first_entry() {
        let mut nav = Navigator::default();
        assert!(nav.push(Route::Users));
        assert!(nav.push(Route::UserCreate));
        assert!(!nav.push(Route::UserCreate));

        assert!(nav.back());
        assert_eq!(nav.current(), &Route::Users);
        assert!(nav.back());
        assert!(!nav.back());
        assert_eq!(nav.current(), &Route::Home);
    }
}
