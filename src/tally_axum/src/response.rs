//! Conversion of form action results into HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tally_application::ActionResult;

/// Newtype around [`ActionResult`] so it can implement `IntoResponse`.
///
/// A navigation becomes `303 See Other`, which makes the browser follow up
/// with a GET on the listing. A re-render becomes `422` with the form state
/// as JSON.
#[derive(Debug)]
pub struct ActionResponse(pub ActionResult);

impl From<ActionResult> for ActionResponse {
    fn from(result: ActionResult) -> Self {
        ActionResponse(result)
    }
}

impl IntoResponse for ActionResponse {
    fn into_response(self) -> Response {
        match self.0 {
            ActionResult::Navigate(redirect) => Redirect::to(redirect.location()).into_response(),
            ActionResult::Render(state) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(state)).into_response()
            }
        }
    }
}
