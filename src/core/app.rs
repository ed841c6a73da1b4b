// Application State
// Main application state management and lifecycle

use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::effects::{Command, Effects, Notice, Outcome};
use super::events::{AppEvent, InputMode};
use super::AppConfig;
use crate::pages::Page;
use crate::routing::{Navigator, Route};

/// Transient message shown above the status bar
#[derive(Debug, Clone)]
pub struct Banner {
    pub notice: Notice,
    pub raised_at: Instant,
}

impl Banner {
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.raised_at) >= ttl
    }
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: AppConfig,

    /// Route history
    navigator: Navigator,

    /// Page mounted for the current route
    page: Page,

    /// Incremented on every mount, tags gateway requests
    mount_counter: u64,

    /// Gateway calls waiting to be dispatched
    pending_commands: Vec<Command>,

    /// Currently visible banner
    pub banner: Option<Banner>,

    /// Operator name recorded at login
    pub operator: Option<String>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create the application showing `start`
    pub fn new(config: AppConfig, start: Route) -> Self {
        let mut app = Self {
            config,
            navigator: Navigator::new(start.clone()),
            page: Page::for_route(&start, 0),
            mount_counter: 0,
            pending_commands: Vec::new(),
            banner: None,
            operator: None,
            should_quit: false,
        };
        app.mount_current();
        app
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn input_mode(&self) -> InputMode {
        self.page.input_mode()
    }

    /// Show `route`, replacing the mounted page
    pub fn navigate(&mut self, route: Route) {
        if self.navigator.push(route) {
            self.mount_current();
        }
    }

    /// Return to the previous route; from the first entry go home instead
    pub fn back(&mut self) {
        if self.navigator.back() {
            self.mount_current();
        } else if self.route() != &Route::Home {
            self.navigate(Route::Home);
        }
    }

    /// Drop the current page and mount a fresh one for the current route
    fn mount_current(&mut self) {
        self.mount_counter += 1;
        let route = self.navigator.current().clone();
        info!(route = %route, mount = self.mount_counter, "mounting page");

        self.page = Page::for_route(&route, self.mount_counter);
        let effects = self.page.mount();
        self.apply_effects(effects);
    }

    /// Handle an application event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::None => {}
            AppEvent::Quit => self.quit(),
            AppEvent::Back => self.back(),
            AppEvent::Navigate(section) => self.navigate(section.route()),
            event => {
                let effects = self.page.handle_event(&event);
                self.apply_effects(effects);
            }
        }
    }

    /// Apply a finished gateway call
    ///
    /// Results for a page that is no longer mounted are dropped.
    pub fn apply_outcome(&mut self, outcome: Outcome) {
        let ticket = outcome.ticket();
        if ticket.mount != self.mount_counter {
            debug!(?ticket, current = self.mount_counter, "dropping outcome for unmounted page");
            return;
        }
        let effects = self.page.apply(outcome);
        self.apply_effects(effects);
    }

    fn apply_effects(&mut self, effects: Effects) {
        let Effects {
            commands,
            navigate,
            notice,
            sign_in,
        } = effects;

        self.pending_commands.extend(commands);

        if let Some(notice) = notice {
            self.raise(notice);
        }
        if let Some(operator) = sign_in {
            self.operator = Some(operator);
        }
        if let Some(route) = navigate {
            self.navigate(route);
        }
    }

    /// Gateway calls issued since the last call
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.pending_commands)
    }

    pub fn raise(&mut self, notice: Notice) {
        self.banner = Some(Banner {
            notice,
            raised_at: Instant::now(),
        });
    }

    /// Hide the banner once its time is up
    pub fn expire_banner(&mut self, now: Instant) {
        let ttl = self.config.ui.banner_ttl();
        if self.banner.as_ref().is_some_and(|b| b.is_expired(now, ttl)) {
            self.banner = None;
        }
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::effects::NoticeLevel;
    use crate::gateway::GatewayError;
    use crate::models::{UserId, UserRecord};
    use crate::pages::ViewMode;
    use crate::routing::NavSection;

    fn app_at(route: Route) -> App {
        App::new(AppConfig::default(), route)
    }

    fn users_page(app: &App) -> &crate::pages::UsersPage {
        match app.page() {
            Page::Users(page) => page,
            other => panic!("expected users page, got {:?}", other),
        }
    }

    fn single_fetch(app: &mut App) -> crate::core::effects::Ticket {
        match app.take_commands().as_slice() {
            [Command::FetchUsers { ticket }] => *ticket,
            other => panic!("expected a single fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_home_mount_issues_nothing() {
        let mut app = app_at(Route::Home);
        assert!(app.take_commands().is_empty());
        assert_eq!(app.input_mode(), InputMode::Navigation);
    }

    #[test]
    fn test_users_route_loads_on_mount() {
        let mut app = app_at(Route::Home);
        app.handle_event(AppEvent::Navigate(NavSection::Users));

        let ticket = single_fetch(&mut app);
        app.apply_outcome(Outcome::UsersLoaded {
            ticket,
            result: Ok(vec![UserRecord::new(1u64, "Ann", "a.png")]),
        });

        assert_eq!(users_page(&app).users().len(), 1);
    }

    #[test]
    fn test_outcome_after_navigation_is_dropped() {
        let mut app = app_at(Route::Users);
        let ticket = single_fetch(&mut app);

        app.handle_event(AppEvent::Navigate(NavSection::Badges));
        app.take_commands();
        app.apply_outcome(Outcome::UsersLoaded {
            ticket,
            result: Ok(vec![UserRecord::new(1u64, "Ann", "a.png")]),
        });

        match app.page() {
            Page::Badges(page) => assert!(page.users().is_empty()),
            other => panic!("expected badges page, got {:?}", other),
        }
    }

    #[test]
    fn test_view_mode_resets_on_remount() {
        let mut app = app_at(Route::Users);
        app.handle_event(AppEvent::ShowTable);
        assert_eq!(users_page(&app).view_mode(), ViewMode::Table);

        app.handle_event(AppEvent::Create);
        assert_eq!(app.route(), &Route::UserCreate);
        app.handle_event(AppEvent::Back);

        assert_eq!(app.route(), &Route::Users);
        assert_eq!(users_page(&app).view_mode(), ViewMode::Card);
    }

    #[test]
    fn test_gateway_failure_raises_error_banner() {
        let mut app = app_at(Route::Users);
        let ticket = single_fetch(&mut app);

        app.apply_outcome(Outcome::UsersLoaded {
            ticket,
            result: Err(GatewayError::Unavailable("down".into())),
        });

        let banner = app.banner.as_ref().unwrap();
        assert_eq!(banner.notice.level, NoticeLevel::Error);
    }

    #[test]
    fn test_banner_expires_after_ttl() {
        let mut app = app_at(Route::Home);
        app.raise(Notice::info("hello"));
        let raised = app.banner.as_ref().unwrap().raised_at;

        app.expire_banner(raised);
        assert!(app.banner.is_some());

        app.expire_banner(raised + app.config.ui.banner_ttl());
        assert!(app.banner.is_none());
    }

    #[test]
    fn test_saved_user_navigates_back_to_list() {
        let mut app = app_at(Route::UserCreate);
        assert_eq!(app.input_mode(), InputMode::Text);
        for c in "Cy".chars() {
            app.handle_event(AppEvent::Input(c));
        }
        app.handle_event(AppEvent::Activate);

        let ticket = match app.take_commands().as_slice() {
            [Command::CreateUser { ticket, .. }] => *ticket,
            other => panic!("expected create, got {:?}", other),
        };
        app.apply_outcome(Outcome::UserSaved {
            ticket,
            result: Ok(UserRecord::new(9u64, "Cy", "")),
        });

        assert_eq!(app.route(), &Route::Users);
        single_fetch(&mut app);
    }

    #[test]
    fn test_escape_from_first_text_page_goes_home() {
        let mut app = app_at(Route::Login);
        assert_eq!(app.input_mode(), InputMode::Text);

        app.handle_event(AppEvent::Back);

        assert_eq!(app.route(), &Route::Home);
        assert_eq!(app.input_mode(), InputMode::Navigation);
    }

    #[test]
    fn test_back_at_home_stays_home() {
        let mut app = app_at(Route::Home);
        app.handle_event(AppEvent::Back);
        assert_eq!(app.route(), &Route::Home);
        assert!(app.take_commands().is_empty());
    }

    #[test]
    fn test_login_records_operator() {
        let mut app = app_at(Route::Login);
        for c in "ann".chars() {
            app.handle_event(AppEvent::Input(c));
        }
        app.handle_event(AppEvent::Activate);

        assert_eq!(app.operator.as_deref(), Some("ann"));
        assert_eq!(app.route(), &Route::Users);
    }

    #[test]
    fn test_open_row_routes_to_edit() {
        let mut app = app_at(Route::Users);
        let ticket = single_fetch(&mut app);
        app.apply_outcome(Outcome::UsersLoaded {
            ticket,
            result: Ok(vec![UserRecord::new(4u64, "Dee", "d.png")]),
        });

        app.handle_event(AppEvent::Activate);

        assert_eq!(app.route(), &Route::UserEdit(UserId::Number(4)));
        assert!(matches!(
            app.take_commands().as_slice(),
            [Command::FetchUser { id: UserId::Number(4), .. }]
        ));
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut app = app_at(Route::Home);
        app.handle_event(AppEvent::Quit);
        assert!(app.should_quit);
    }
}
