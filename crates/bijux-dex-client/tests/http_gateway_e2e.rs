// SPDX-License-Identifier: Apache-2.0

use bijux_dex_client::{
    execute, Action, Applied, BrowseController, Gateway, GatewayError, HttpGateway,
};
use bijux_dex_model::{RecordKey, TypeName};
use bijux_dex_server::{build_router, AppState, FakeUpstream, UpstreamError, UpstreamResource};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

fn fixture(name: &str) -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../fixtures/upstream")
        .join(name);
    let raw = std::fs::read_to_string(&path).expect("read fixture");
    serde_json::from_str(&raw).expect("fixture json")
}

fn record(key: &str) -> UpstreamResource {
    UpstreamResource::Record(RecordKey::parse(key).expect("key"))
}

async fn spawn_gateway(upstream: Arc<FakeUpstream>) -> HttpGateway {
    let app = build_router(AppState::new(upstream));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind gateway");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    HttpGateway::new(&format!("http://{addr}"), Some(Duration::from_secs(5))).expect("client")
}

fn catalog() -> FakeUpstream {
    FakeUpstream::new()
        .with_response(
            UpstreamResource::RecordList {
                limit: 20,
                offset: 0,
            },
            fixture("pokemon-page.json"),
        )
        .with_response(record("pikachu"), fixture("pikachu.json"))
        .with_response(UpstreamResource::TypeList, fixture("types.json"))
        .with_response(
            UpstreamResource::Type(TypeName::parse("electric").expect("type")),
            fixture("type-electric.json"),
        )
        .with_response(
            UpstreamResource::AbilityList {
                limit: 20,
                offset: 0,
            },
            fixture("abilities-page.json"),
        )
}

#[tokio::test]
async fn gateway_client_reads_every_route() {
    let gw = spawn_gateway(Arc::new(catalog())).await;

    let page = gw.list_records(20, 0).await.expect("list");
    assert_eq!(page.count, 1302);
    assert_eq!(page.results[0].name, "bulbasaur");
    assert!(page.has_next());

    let pikachu = RecordKey::parse("pikachu").expect("key");
    let by_route = gw.record(&pikachu).await.expect("record");
    let by_search = gw.search(&pikachu).await.expect("search");
    assert_eq!(by_route, by_search);
    assert_eq!(by_route.id, 25);

    let types = gw.types().await.expect("types");
    assert_eq!(types.results[2].name, "electric");

    let electric = gw
        .type_members(&TypeName::parse("electric").expect("type"))
        .await
        .expect("members");
    assert_eq!(electric.members.len(), 3);

    let abilities = gw.abilities(20, 0).await.expect("abilities");
    assert!(!abilities.results.is_empty());
}

#[tokio::test]
async fn gateway_errors_map_to_client_errors() {
    let upstream = catalog().with_failure(
        UpstreamResource::AbilityList {
            limit: 10,
            offset: 0,
        },
        UpstreamError::Status(503),
    );
    let gw = spawn_gateway(Arc::new(upstream)).await;

    let missing = RecordKey::parse("notapokemon").expect("key");
    assert_eq!(gw.search(&missing).await, Err(GatewayError::NotFound));
    assert_eq!(gw.abilities(10, 0).await, Err(GatewayError::Status(500)));

    let unreachable = HttpGateway::new("http://127.0.0.1:9", Some(Duration::from_secs(2)))
        .expect("client");
    assert!(matches!(
        unreachable.types().await,
        Err(GatewayError::Unavailable(_))
    ));
}

#[tokio::test]
async fn browse_session_over_real_gateway() {
    let gw = Arc::new(spawn_gateway(Arc::new(catalog())).await);
    let mut ctl = BrowseController::new(Arc::clone(&gw));

    ctl.dispatch(Action::ApplyTypeFilter("electric".to_string()))
        .await
        .expect("filter");
    let grid = ctl.view().as_grid().expect("grid");
    let names: Vec<&str> = grid.cards().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["pikachu"]);
    assert_eq!(ctl.state().loaded_summaries.len(), 3);

    ctl.dispatch(Action::Search("notapokemon".to_string()))
        .await
        .expect("search");
    let panel = ctl
        .view()
        .as_grid()
        .and_then(|g| g.error_panel())
        .expect("error panel");
    assert_eq!(panel.message, "Record \"notapokemon\" not found");

    ctl.dispatch(Action::Search("pikachu".to_string()))
        .await
        .expect("search");
    let detail = ctl.view().as_detail().expect("detail");
    assert_eq!(detail.height_m, "0.4");
    assert_eq!(detail.weight_kg, "6.0");
}

#[tokio::test]
async fn slow_list_is_discarded_once_a_search_supersedes_it() {
    let upstream = Arc::new(catalog().with_delay(Duration::from_millis(50)));
    upstream.insert(record("25"), fixture("pikachu.json")).await;
    let gw = Arc::new(spawn_gateway(Arc::clone(&upstream)).await);
    let mut ctl = BrowseController::new(Arc::clone(&gw));

    let list = ctl.begin(Action::LoadList).expect("begin").expect("pending");
    let search = ctl
        .begin(Action::Search("25".to_string()))
        .expect("begin")
        .expect("pending");
    let (list_done, search_done) = tokio::join!(
        execute(Arc::clone(&gw), list),
        execute(Arc::clone(&gw), search)
    );

    assert_eq!(ctl.complete(search_done), Applied::Rendered);
    assert_eq!(ctl.complete(list_done), Applied::Stale);
    assert_eq!(ctl.view().as_detail().expect("detail").id, 25);
    // one list call, three card details, one search
    assert_eq!(upstream.calls(), 5);
}
