use crate::{config::RuntimeConfiguration, data::session::Session};
use maud::{DOCTYPE, Markup, html};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

#[derive(Clone, Debug)]
pub struct RosterState {
    session: Arc<Mutex<Session>>,
    config: RuntimeConfiguration,
}

impl RosterState {
    pub fn new(config: RuntimeConfiguration, session: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            config,
        }
    }

    pub const fn config(&self) -> &RuntimeConfiguration {
        &self.config
    }

    /// The one writer: every handler holds this for the whole event.
    pub async fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().await
    }

    #[allow(clippy::unused_self, clippy::needless_pass_by_value)] //in case self is ever needed :), and to allow direct html! usage
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="vi" {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    // swap error responses too, they carry the notice
                    meta name="htmx-config" content=r#"{"responseHandling":[{"code":"204","swap":false},{"code":".*","swap":true}]}"# {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Quản lý sinh viên" }
                }
                body class="bg-gray-900 min-h-screen flex flex-col items-center p-8 text-white" {
                    (markup)
                }
            }
        }
    }
}
