use crate::{
    error::RosterResult,
    maud_conveniences::{empty_notice, title},
    routes::students::workspace,
    state::RosterState,
};
use axum::extract::State;
use maud::{Markup, html};

pub async fn get_index_route(State(state): State<RosterState>) -> RosterResult<Markup> {
    let date_locale = state.config().date_locale_config();
    let session = state.session().await;
    let workspace = workspace(&session, "", &date_locale)?;

    Ok(state.render(html! {
        div class="w-full max-w-7xl flex flex-col space-y-4" {
            (title("Quản lý sinh viên"))
            (empty_notice())
            (workspace)
        }
    }))
}
