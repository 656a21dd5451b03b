//! Catalog loading and debounced search

use std::sync::Arc;
use std::time::Duration;

use benevits::egui_app::{BenevitsViewModel, Config, Endpoint, MemorySessionStore, NetworkClient, SearchMode};
use benevits::shared::benevit::{Benevit, SearchResponse};
use benevits::shared::config::AppConfig;
use benevits::shared::error::NetworkError;
use benevits::shared::strings;
use pretty_assertions::assert_eq;

use crate::common::{coffee_and_pizza, landing, mock_config, remote_config, MockNetworkService};

const DEBOUNCE: Duration = Duration::from_millis(50);
const SETTLE: Duration = Duration::from_millis(250);

fn names(benevits: &[Benevit]) -> Vec<&str> {
    benevits.iter().map(|b| b.name.as_str()).collect()
}

#[tokio::test]
async fn test_load_counts_and_alternation() {
    let network = Arc::new(MockNetworkService::new().with_response(&Endpoint::LandingBenevits, landing(2, 4)));
    let vm = BenevitsViewModel::new(network, &mock_config(DEBOUNCE));

    vm.refresh().await;
    let state = vm.state();

    assert_eq!(state.all_benevits.len(), 6);
    assert_eq!(state.my_benevits.len(), 4);
    assert_eq!(
        names(&state.all_benevits),
        vec!["Unlocked 0", "Locked 0", "Unlocked 1", "Locked 1", "Unlocked 2", "Unlocked 3"]
    );
    for benevit in &state.all_benevits {
        assert_eq!(benevit.is_locked, benevit.name.starts_with("Locked"));
    }
}

#[tokio::test]
async fn test_failed_load_leaves_list_empty() {
    let network = Arc::new(MockNetworkService::new().with_error(NetworkError::Unauthorized));
    let vm = BenevitsViewModel::new(network, &mock_config(DEBOUNCE));

    vm.refresh().await;

    assert!(vm.all_benevits().is_empty());
    assert!(vm.my_benevits().is_empty());
    assert_eq!(vm.error_message().as_deref(), Some(strings::benevits::SESSION_EXPIRED));
    assert!(!vm.is_loading());
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_list() {
    let network = Arc::new(MockNetworkService::new().with_response(&Endpoint::LandingBenevits, landing(1, 1)));
    let vm = BenevitsViewModel::new(Arc::clone(&network), &mock_config(DEBOUNCE));
    vm.refresh().await;

    network.set_error(Some(NetworkError::NoInternetConnection));
    vm.refresh().await;

    assert_eq!(vm.all_benevits().len(), 2);
    assert_eq!(vm.error_message().as_deref(), Some(strings::benevits::NO_INTERNET));
}

#[tokio::test]
async fn test_local_filter_cafe() {
    let network = Arc::new(MockNetworkService::new().with_response(&Endpoint::LandingBenevits, coffee_and_pizza()));
    let vm = BenevitsViewModel::new(network, &mock_config(DEBOUNCE));
    vm.refresh().await;

    vm.search_benevits("Cafe");
    assert_eq!(names(&vm.displayed_benevits()), vec!["Cafe Starbucks"]);

    vm.search_benevits("cAfE");
    assert_eq!(names(&vm.displayed_benevits()), vec!["Cafe Starbucks"]);

    // Description matches too
    vm.search_benevits("pizzas");
    assert_eq!(names(&vm.displayed_benevits()), vec!["Pizza Dominos"]);
}

#[tokio::test]
async fn test_local_burst_makes_no_calls() {
    let network = Arc::new(MockNetworkService::new().with_response(&Endpoint::LandingBenevits, coffee_and_pizza()));
    let vm = BenevitsViewModel::new(Arc::clone(&network), &mock_config(DEBOUNCE));
    vm.refresh().await;
    let calls_after_load = network.call_count();

    for query in ["a", "ab", "abc"] {
        vm.search_benevits(query);
    }
    assert!(vm.is_searching());

    tokio::time::sleep(SETTLE).await;

    assert!(!vm.is_searching());
    assert_eq!(vm.search_query(), "abc");
    assert_eq!(network.call_count(), calls_after_load);
}

#[tokio::test]
async fn test_remote_burst_makes_one_call() {
    let network = Arc::new(
        MockNetworkService::new()
            .with_response(&Endpoint::LandingBenevits, landing(1, 1))
            .with_response(
                &Endpoint::search(""),
                SearchResponse {
                    benevits: vec![Benevit::new(7, "Xbox Series S")],
                },
            ),
    );
    let vm = BenevitsViewModel::new(Arc::clone(&network), &remote_config(DEBOUNCE));
    assert_eq!(vm.search_mode(), SearchMode::Remote);

    for query in ["a", "ab", "abc"] {
        vm.search_benevits(query);
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    tokio::time::sleep(SETTLE).await;

    assert_eq!(network.calls_to(&Endpoint::search("")), 1);
    assert_eq!(network.last_endpoint(), Some(Endpoint::search("abc")));
    assert_eq!(names(&vm.displayed_benevits()), vec!["Xbox Series S"]);
    assert!(!vm.is_searching());
}

#[tokio::test]
async fn test_slow_stale_search_does_not_win() {
    let network = Arc::new(
        MockNetworkService::new()
            .with_delay(Duration::from_millis(100))
            .with_response(
                &Endpoint::search(""),
                SearchResponse {
                    benevits: vec![Benevit::new(1, "Result")],
                },
            )
            .with_response(&Endpoint::LandingBenevits, landing(0, 3)),
    );
    let vm = BenevitsViewModel::new(Arc::clone(&network), &remote_config(Duration::from_millis(10)));

    // First search is in flight when the box is cleared
    vm.search_benevits("xbox");
    tokio::time::sleep(Duration::from_millis(40)).await;
    vm.search_benevits("");
    tokio::time::sleep(Duration::from_millis(300)).await;

    assert_eq!(vm.all_benevits().len(), 3);
    assert!(!vm.is_searching());
}

#[tokio::test]
async fn test_blank_query_clears_indicator() {
    let network = Arc::new(MockNetworkService::new().with_response(&Endpoint::LandingBenevits, landing(1, 1)));
    let vm = BenevitsViewModel::new(network, &mock_config(DEBOUNCE));

    vm.search_benevits("ab");
    assert!(vm.is_searching());
    vm.search_benevits("   ");
    assert!(!vm.is_searching());
}

#[tokio::test]
async fn test_overridden_mode() {
    let network = Arc::new(MockNetworkService::new());
    let vm = BenevitsViewModel::new(network, &remote_config(DEBOUNCE)).with_search_mode(SearchMode::LocalFilter);
    assert_eq!(vm.search_mode(), SearchMode::LocalFilter);
}

#[tokio::test]
async fn test_canned_catalog_through_client() {
    let config = Config::with_builder(
        AppConfig::builder()
            .use_mock_data(true)
            .mock_delay(Duration::ZERO),
    )
    .unwrap();
    let network = Arc::new(NetworkClient::new(config.clone(), Arc::new(MemorySessionStore::new())).unwrap());
    let vm = BenevitsViewModel::new(network, config.app());

    vm.load_benevits().await.unwrap();

    let state = vm.state();
    assert_eq!(state.all_benevits.len(), 15);
    assert_eq!(state.my_benevits.len(), 12);
    assert_eq!(state.all_benevits.iter().filter(|b| b.is_locked).count(), 3);

    vm.search_benevits("xbox");
    assert_eq!(vm.displayed_benevits().len(), 4);
}
