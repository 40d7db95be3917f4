//! Navigation between the three screens.
//!
//! Paths follow the web routes: `/`, `/play/:quizId` and `/finish?quizId=`.
//! Anything else redirects to home.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Play { quiz_id: String },
    Finish { quiz_id: Option<String> },
}

impl Route {
    pub fn play(quiz_id: impl Into<String>) -> Self {
        Route::Play {
            quiz_id: quiz_id.into(),
        }
    }

    pub fn finish(quiz_id: impl Into<String>) -> Self {
        Route::Finish {
            quiz_id: Some(quiz_id.into()),
        }
    }

    /// Resolve a path. Unknown paths fall back to [`Route::Home`].
    pub fn parse(path: &str) -> Self {
        let (path, query) = match path.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (path, None),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["play", quiz_id] => Route::play(*quiz_id),
            ["finish"] => Route::Finish {
                quiz_id: query.and_then(|query| query_param(query, "quizId")),
            },
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Play { quiz_id } => format!("/play/{}", quiz_id),
            Route::Finish { quiz_id: Some(id) } => format!("/finish?quizId={}", id),
            Route::Finish { quiz_id: None } => "/finish".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
        .filter(|v| !v.is_empty())
}

/// Current route plus the one it replaced.
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Route,
    previous: Option<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// The route shown before the last navigation, if any.
    pub fn previous(&self) -> Option<&Route> {
        self.previous.as_ref()
    }

    pub fn navigate(&mut self, route: Route) {
        log::debug!("navigate {} -> {}", self.current, route);
        self.previous = Some(std::mem::replace(&mut self.current, route));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/play/3"), Route::play("3"));
        assert_eq!(Route::parse("/finish?quizId=3"), Route::finish("3"));
        assert_eq!(Route::parse("/finish"), Route::Finish { quiz_id: None });
    }

    #[test]
    fn unknown_paths_redirect_home() {
        assert_eq!(Route::parse("/nowhere"), Route::Home);
        assert_eq!(Route::parse("/play"), Route::Home);
        assert_eq!(Route::parse("/play/1/extra"), Route::Home);
    }

    #[test]
    fn finish_ignores_other_query_params() {
        assert_eq!(
            Route::parse("/finish?from=play&quizId=7"),
            Route::finish("7")
        );
        assert_eq!(
            Route::parse("/finish?quizId="),
            Route::Finish { quiz_id: None }
        );
    }

    #[test]
    fn paths_match_the_web_routes() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::play("4").path(), "/play/4");
        assert_eq!(Route::finish("4").to_string(), "/finish?quizId=4");
    }

    #[test]
    fn router_keeps_only_the_previous_route() {
        let mut router = Router::new();
        assert_eq!(router.previous(), None);

        router.navigate(Route::play("1"));
        assert_eq!(router.previous(), Some(&Route::Home));

        for _ in 0..50 {
            router.navigate(Route::Home);
            router.navigate(Route::play("1"));
        }
        router.navigate(Route::parse("/finish?quizId=1"));

        assert_eq!(router.current(), &Route::finish("1"));
        assert_eq!(router.previous(), Some(&Route::play("1")));
    }
}
