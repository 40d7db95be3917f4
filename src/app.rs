use crate::router::{Route, Router};
use crate::service::QuizService;
use crate::views::{FinishView, HomeView, PlayView};

/// The view currently on screen.
pub enum Screen {
    Home(HomeView),
    Play(PlayView),
    Finish(FinishView),
}

impl Screen {
    fn open(service: &QuizService, route: &Route) -> Self {
        match route {
            Route::Home => Screen::Home(HomeView::new(service.clone())),
            Route::Play { quiz_id } => {
                let mut view = PlayView::new(service.clone(), quiz_id);
                view.init();
                Screen::Play(view)
            }
            Route::Finish { quiz_id } => {
                Screen::Finish(FinishView::new(service.clone(), quiz_id.as_deref()))
            }
        }
    }
}

pub struct App {
    service: QuizService,
    pub(crate) router: Router,
    pub(crate) screen: Screen,
    shown: Route,
    pub should_quit: bool,
}

impl App {
    /// Must be called from within a tokio runtime; opening the play screen
    /// starts its ticker.
    pub fn new(service: QuizService, start: Route) -> Self {
        let mut router = Router::new();
        router.navigate(start);
        let shown = router.current().clone();
        let screen = Screen::open(&service, &shown);

        Self {
            service,
            router,
            screen,
            shown,
            should_quit: false,
        }
    }

    pub fn service(&self) -> &QuizService {
        &self.service
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Swap in the view for the router's current route. Replacing the old
    /// view drops it, which stops a running ticker.
    pub fn sync_screen(&mut self) {
        if self.router.current() == &self.shown {
            return;
        }
        self.shown = self.router.current().clone();
        self.screen = Screen::open(&self.service, &self.shown);
    }
}
