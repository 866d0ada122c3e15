//! GraphQL schema for the games, authors and reviews graph.
//!
//! - [`types`] - object and input types with their relationship resolvers
//! - [`query`] - entry-point lookups
//! - [`mutation`] - game mutations

mod mutation;
mod query;
mod types;

use async_graphql::{
    EmptySubscription, Request, Response, Schema,
    parser::{
        parse_query,
        types::{DocumentOperations, OperationType},
    },
};
use tracing::debug;

use crate::state::{AppState, SessionKind};

pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// The GraphQL schema type served by the application.
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema.
pub fn create_schema() -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription).finish()
}

/// Execute `request` while holding the catalog session its operation needs.
///
/// Mutations run under the exclusive write guard, everything else under a
/// shared read guard, for the full duration of the request.
pub async fn execute(state: &AppState, request: Request) -> Response {
    let kind = operation_kind(&request);
    debug!(?kind, operation = ?request.operation_name, "executing graphql request");

    let session = state.session(kind).await;
    state.schema().execute(request.data(session)).await
}

/// Determine which session the selected operation of `request` needs.
///
/// Documents that fail to parse get a read session; the engine reports the
/// syntax error itself.
fn operation_kind(request: &Request) -> SessionKind {
    let Ok(document) = parse_query(&request.query) else {
        return SessionKind::Read;
    };

    let operation = match (&document.operations, request.operation_name.as_deref()) {
        (DocumentOperations::Single(operation), _) => Some(operation),
        (DocumentOperations::Multiple(operations), Some(name)) => operations
            .iter()
            .find(|(candidate, _)| candidate.as_str() == name)
            .map(|(_, operation)| operation),
        (DocumentOperations::Multiple(_), None) => None,
    };

    match operation.map(|operation| operation.node.ty) {
        Some(OperationType::Mutation) => SessionKind::Write,
        _ => SessionKind::Read,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::{Value, json};
    use tokio::time::timeout;

    use super::*;
    use crate::{dao::catalog::Catalog, state::SharedState};

    fn state() -> SharedState {
        AppState::new(Catalog::default())
    }

    async fn run(state: &AppState, query: &str) -> Value {
        let response = execute(state, Request::new(query)).await;
        assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
        response.data.into_json().unwrap()
    }

    #[test]
    fn operation_kind_follows_selected_operation() {
        let single = Request::new("mutation { deleteGame(id: \"1\") { id } }");
        assert_eq!(operation_kind(&single), SessionKind::Write);

        let shorthand = Request::new("{ games { id } }");
        assert_eq!(operation_kind(&shorthand), SessionKind::Read);

        let document = "query Read { games { id } } mutation Drop { deleteGame(id: \"1\") { id } }";
        let read = Request::new(document).operation_name("Read");
        assert_eq!(operation_kind(&read), SessionKind::Read);
        let write = Request::new(document).operation_name("Drop");
        assert_eq!(operation_kind(&write), SessionKind::Write);

        assert_eq!(operation_kind(&Request::new("mutation {")), SessionKind::Read);
    }

    #[tokio::test]
    async fn lookup_misses_render_null() {
        let state = state();
        let data = run(
            &state,
            r#"{ game(id: "99") { id } author(id: "99") { id } review(id: "99") { id } }"#,
        )
        .await;
        assert_eq!(data, json!({ "game": null, "author": null, "review": null }));
    }

    #[tokio::test]
    async fn review_edges_resolve_from_seed() {
        let state = state();
        let data = run(
            &state,
            r#"{ review(id: "1") { rating author_id game_id author { id name } game { id title } } }"#,
        )
        .await;
        assert_eq!(
            data,
            json!({
                "review": {
                    "rating": 9,
                    "author_id": "1",
                    "game_id": "2",
                    "author": { "id": "1", "name": "mario" },
                    "game": { "id": "2", "title": "Final Fantasy 7 Remake" }
                }
            })
        );
    }

    #[tokio::test]
    async fn cyclic_edges_resolve_on_demand() {
        let state = state();
        let data = run(
            &state,
            r#"{ game(id: "1") { title reviews { id game { reviews { id author { name } } } } } }"#,
        )
        .await;

        let reviews = data["game"]["reviews"].as_array().unwrap();
        let ids: Vec<_> = reviews.iter().map(|r| r["id"].clone()).collect();
        assert_eq!(ids, [json!("2"), json!("7")]);
        assert_eq!(
            reviews[0]["game"]["reviews"],
            json!([
                { "id": "2", "author": { "name": "yoshi" } },
                { "id": "7", "author": { "name": "peach" } }
            ])
        );
    }

    #[tokio::test]
    async fn author_reviews_are_listed() {
        let state = state();
        let data = run(&state, r#"{ author(id: "3") { name verified reviews { id rating } } }"#).await;
        assert_eq!(
            data,
            json!({
                "author": {
                    "name": "peach",
                    "verified": true,
                    "reviews": [{ "id": "3", "rating": 7 }, { "id": "7", "rating": 10 }]
                }
            })
        );
    }

    #[tokio::test]
    async fn added_game_is_visible_to_later_queries() {
        let state = state();
        let data = run(
            &state,
            r#"mutation { addGame(game: { title: "T", platform: ["PC"] }) { id title platform reviews { id } } }"#,
        )
        .await;

        let created = &data["addGame"];
        let id = created["id"].as_str().unwrap().to_string();
        assert!(!["1", "2", "3", "4", "5"].contains(&id.as_str()));
        assert_eq!(created["platform"], json!(["PC"]));
        assert_eq!(created["reviews"], json!([]));

        let data = run(&state, "{ games { id } }").await;
        let ids: Vec<_> = data["games"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|game| game["id"].as_str())
            .collect();
        assert_eq!(ids.iter().filter(|candidate| **candidate == id).count(), 1);
        assert_eq!(ids.len(), 6);
    }

    #[tokio::test]
    async fn update_game_keeps_omitted_fields() {
        let state = state();
        let data = run(
            &state,
            r#"mutation { updateGame(id: "1", edits: { title: "New Title" }) { id title platform } }"#,
        )
        .await;
        assert_eq!(
            data,
            json!({ "updateGame": { "id": "1", "title": "New Title", "platform": ["Switch"] } })
        );

        let data = run(
            &state,
            r#"mutation { updateGame(id: "99", edits: { title: "x" }) { id } }"#,
        )
        .await;
        assert_eq!(data, json!({ "updateGame": null }));
    }

    #[tokio::test]
    async fn deleted_game_leaves_dangling_reviews_null() {
        let state = state();
        let data = run(&state, r#"mutation { deleteGame(id: "2") { id } }"#).await;
        assert_eq!(
            data["deleteGame"],
            json!([{ "id": "1" }, { "id": "3" }, { "id": "4" }, { "id": "5" }])
        );

        let data = run(&state, r#"{ review(id: "1") { game { id } author { id } } }"#).await;
        assert_eq!(data, json!({ "review": { "game": null, "author": { "id": "1" } } }));
    }

    #[tokio::test]
    async fn mutation_through_read_session_fails() {
        let state = state();
        let session = state.session(SessionKind::Read).await;
        let request = Request::new(r#"mutation { deleteGame(id: "1") { id } }"#).data(session);

        let response = state.schema().execute(request).await;
        assert!(!response.errors.is_empty());
        assert_eq!(state.counts().await.games, 5);
    }

    #[tokio::test]
    async fn malformed_documents_are_reported_by_the_engine() {
        let state = state();
        let response = execute(&state, Request::new("{ games { id ")).await;
        assert!(!response.errors.is_empty());
    }

    #[tokio::test]
    async fn mutation_blocks_concurrent_queries_until_done() {
        let state = state();
        let wait = Duration::from_millis(50);

        // A mutation in flight holds the write guard.
        let writer = state.session(SessionKind::Write).await;
        let query = execute(&state, Request::new("{ games { id } }"));
        assert!(timeout(wait, query).await.is_err());

        writer
            .write(|catalog| catalog.retain_games(|game| game.id != "5"))
            .await
            .unwrap();
        drop(writer);

        let data = run(&state, "{ games { id } }").await;
        assert_eq!(data["games"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn mutation_waits_for_running_queries() {
        let state = state();
        let wait = Duration::from_millis(50);

        let reader = state.session(SessionKind::Read).await;
        let delete = r#"mutation { deleteGame(id: "1") { id } }"#;
        assert!(timeout(wait, execute(&state, Request::new(delete))).await.is_err());
        assert_eq!(reader.read(|catalog| catalog.games().len()).await, 5);
        drop(reader);

        let response = timeout(wait, execute(&state, Request::new(delete)))
            .await
            .expect("mutation after readers released");
        assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
        assert_eq!(state.counts().await.games, 4);
    }
}

