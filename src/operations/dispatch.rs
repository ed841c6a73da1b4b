// Dispatcher
// Runs gateway commands on the async runtime and reports their outcomes

use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::core::effects::{Command, Outcome};
use crate::gateway::UserGateway;

/// Sends commands to the gateway without blocking the UI thread
#[derive(Clone)]
pub struct Dispatcher {
    gateway: Arc<dyn UserGateway>,
    runtime: Handle,
    outcomes: UnboundedSender<Outcome>,
}

impl Dispatcher {
    /// Create a dispatcher and the receiving end for its outcomes
    pub fn new(gateway: Arc<dyn UserGateway>, runtime: Handle) -> (Self, UnboundedReceiver<Outcome>) {
        let (outcomes, rx) = mpsc::unbounded_channel();
        (
            Self {
                gateway,
                runtime,
                outcomes,
            },
            rx,
        )
    }

    /// Spawn `command`; its outcome arrives on the receiver
    pub fn dispatch(&self, command: Command) -> JoinHandle<()> {
        let gateway = Arc::clone(&self.gateway);
        let outcomes = self.outcomes.clone();

        self.runtime.spawn(async move {
            let outcome = execute(gateway.as_ref(), command).await;
            if outcomes.send(outcome).is_err() {
                debug!("outcome receiver closed");
            }
        })
    }
}

/// Run one command against the gateway
pub async fn execute(gateway: &dyn UserGateway, command: Command) -> Outcome {
    debug!(?command, "dispatching");

    match command {
        Command::FetchUsers { ticket } => Outcome::UsersLoaded {
            ticket,
            result: gateway.get_users().await,
        },
        Command::FetchUser { ticket, id } => Outcome::UserLoaded {
            ticket,
            result: gateway.get_user(&id).await,
        },
        Command::CreateUser { ticket, draft } => Outcome::UserSaved {
            ticket,
            result: gateway.create_user(&draft).await,
        },
        Command::UpdateUser { ticket, id, draft } => Outcome::UserSaved {
            ticket,
            result: gateway.update_user(&id, &draft).await,
        },
        Command::DeleteUser { ticket, id } => {
            let result = gateway.delete_user(&id).await;
            Outcome::UserDeleted { ticket, id, result }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::app::App;
    use crate::core::effects::Ticket;
    use crate::core::events::AppEvent;
    use crate::core::AppConfig;
    use crate::gateway::{GatewayOp, InMemoryGateway};
    use crate::models::{UserId, UserRecord};
    use crate::pages::Page;
    use crate::routing::Route;

    fn ann_and_bo() -> Arc<InMemoryGateway> {
        Arc::new(InMemoryGateway::with_users(vec![
            UserRecord::new(1u64, "Ann", "a.png"),
            UserRecord::new(2u64, "Bo", "b.png"),
        ]))
    }

    /// Execute every pending command in order until the app goes quiet
    async fn settle(app: &mut App, gateway: &dyn UserGateway) {
        loop {
            let commands = app.take_commands();
            if commands.is_empty() {
                break;
            }
            for command in commands {
                let outcome = execute(gateway, command).await;
                app.apply_outcome(outcome);
            }
        }
    }

    fn listed_ids(app: &App) -> Vec<UserId> {
        match app.page() {
            Page::Users(page) => page.users().iter().map(|u| u.id.clone()).collect(),
            other => panic!("expected users page, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_refetches_after_delete_completes() {
        let gateway = ann_and_bo();
        let mut app = App::new(AppConfig::default(), Route::Users);
        settle(&mut app, &*gateway).await;
        assert_eq!(listed_ids(&app), vec![UserId::Number(1), UserId::Number(2)]);

        app.handle_event(AppEvent::Delete);
        settle(&mut app, &*gateway).await;

        assert_eq!(listed_ids(&app), vec![UserId::Number(2)]);
        assert_eq!(
            gateway.calls(),
            vec![GatewayOp::GetUsers, GatewayOp::DeleteUser, GatewayOp::GetUsers]
        );
    }

    #[tokio::test]
    async fn test_failed_refetch_keeps_previous_list() {
        let gateway = ann_and_bo();
        let mut app = App::new(AppConfig::default(), Route::Users);
        settle(&mut app, &*gateway).await;

        gateway.fail_next(GatewayOp::GetUsers, 1);
        app.handle_event(AppEvent::Delete);
        settle(&mut app, &*gateway).await;

        // deleted on the service, stale on screen, failure surfaced
        assert_eq!(gateway.snapshot().len(), 1);
        assert_eq!(listed_ids(&app).len(), 2);
        assert!(app.banner.is_some());
    }

    #[tokio::test]
    async fn test_create_then_list_shows_new_user() {
        let gateway = ann_and_bo();
        let mut app = App::new(AppConfig::default(), Route::UserCreate);
        for c in "Cy".chars() {
            app.handle_event(AppEvent::Input(c));
        }
        app.handle_event(AppEvent::Activate);
        settle(&mut app, &*gateway).await;

        assert_eq!(app.route(), &Route::Users);
        assert_eq!(listed_ids(&app).last(), Some(&UserId::Number(3)));
    }

    #[tokio::test]
    async fn test_dispatch_delivers_outcome_on_channel() {
        let gateway = ann_and_bo();
        let (dispatcher, mut rx) = Dispatcher::new(gateway, Handle::current());
        let ticket = Ticket { mount: 1, seq: 0 };

        dispatcher.dispatch(Command::FetchUsers { ticket }).await.unwrap();

        match rx.recv().await {
            Some(Outcome::UsersLoaded { ticket: got, result }) => {
                assert_eq!(got, ticket);
                assert_eq!(result.unwrap().len(), 2);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}
