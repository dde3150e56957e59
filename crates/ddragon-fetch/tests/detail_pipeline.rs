mod common;

use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;

use ddragon_core::DdragonError;
use ddragon_fetch::{ChampionFetcher, DataDragon};

use common::*;

fn fetcher(client: &Arc<StubClient>, limit: usize) -> ChampionFetcher {
    ChampionFetcher::new(client.clone(), config().with_max_concurrent_requests(limit)).unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrency_never_exceeds_the_limit() {
    let client = StubClient::new();
    let names = seed_ten(&client);
    let f = fetcher(&client, 2);
    f.manifest().await.unwrap();
    client.set_delay(Duration::from_millis(20));

    let batch = f.load_champion_details(&names).await.unwrap();

    assert_eq!(batch.details.len(), 10);
    assert!(batch.is_complete());
    assert_eq!(client.calls_matching("/champion/"), 10);
    assert!(client.high_water_mark() <= 2, "hwm {}", client.high_water_mark());
    assert_eq!(f.available_detail_permits(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn limit_is_shared_across_concurrent_batches() {
    let client = StubClient::new();
    let names = seed_ten(&client);
    let f = fetcher(&client, 3);
    f.manifest().await.unwrap();
    client.set_delay(Duration::from_millis(20));

    let (a, b) = tokio::join!(
        f.load_champion_details(&names[..5]),
        f.load_champion_details(&names[5..])
    );

    assert_eq!(a.unwrap().details.len(), 5);
    assert_eq!(b.unwrap().details.len(), 5);
    assert!(client.high_water_mark() <= 3);
}

#[tokio::test]
async fn more_than_ten_names_is_rejected_without_io() {
    let client = StubClient::new();
    let mut names = seed_ten(&client);
    names.push("Blitzcrank".into());
    let f = fetcher(&client, 8);

    let err = f.load_champion_details(&names).await.unwrap_err();

    assert_matches!(err, DdragonError::InvalidArgument(_));
    assert_eq!(client.total_calls(), 0);
}

#[tokio::test]
async fn duplicate_spellings_count_once() {
    let client = StubClient::new();
    let mut names = seed_ten(&client);
    names.push("AHRI".into());
    names.push("ahri".into());
    let f = fetcher(&client, 8);

    let batch = f.load_champion_details(&names).await.unwrap();

    assert_eq!(batch.details.len(), 10);
    assert_eq!(client.calls(&champion_detail_url("Ahri")), 1);
}

#[tokio::test]
async fn unknown_name_fails_before_any_detail_fetch() {
    let client = StubClient::new();
    seed_ten(&client);
    let f = fetcher(&client, 8);

    let err = f
        .load_champion_details(["Ahri", "Nobody"])
        .await
        .unwrap_err();

    assert_matches!(err, DdragonError::NotFound(ref n) if n == "Nobody");
    assert_eq!(client.calls_matching("/champion/"), 0);
}

#[tokio::test]
async fn one_failure_does_not_sink_the_batch() {
    let client = StubClient::new();
    seed_ten(&client);
    client.fail(champion_detail_url("Ahri"));
    let f = fetcher(&client, 8);

    let batch = f
        .load_champion_details(["Ahri", "Annie", "Ashe"])
        .await
        .unwrap();

    assert_eq!(batch.len(), 3);
    assert!(!batch.is_complete());
    assert!(batch.details.contains_key("Annie"));
    assert!(batch.details.contains_key("Ashe"));
    assert_matches!(batch.failures.get("Ahri"), Some(DdragonError::Fetch { .. }));

    // Failures are not cached; successes are.
    f.load_champion_details(["Ahri", "Annie"]).await.unwrap();
    assert_eq!(client.calls(&champion_detail_url("Ahri")), 2);
    assert_eq!(client.calls(&champion_detail_url("Annie")), 1);
}

#[tokio::test]
async fn undecodable_detail_is_a_per_entity_decode_failure() {
    let client = StubClient::new();
    seed_ten(&client);
    client.route_raw(champion_detail_url("Bard"), "not json");
    let f = fetcher(&client, 8);

    let batch = f.load_champion_details(["Bard", "Azir"]).await.unwrap();

    assert!(batch.details.contains_key("Azir"));
    assert_matches!(batch.failures.get("Bard"), Some(DdragonError::Decode { .. }));
}

#[tokio::test]
async fn cached_details_cost_no_requests() {
    let client = StubClient::new();
    seed_ten(&client);
    let f = fetcher(&client, 8);

    f.load_champion_details(["Ahri", "Annie"]).await.unwrap();
    let before = client.total_calls();

    let again = f.load_champion_details(["annie", "AHRI"]).await.unwrap();

    assert_eq!(client.total_calls(), before);
    assert_eq!(
        again.details.keys().collect::<Vec<_>>(),
        vec!["AHRI", "annie"]
    );
    assert_eq!(again.details["AHRI"].name, "Ahri");
    assert_eq!(f.cached_detail_count(), 2);
}

#[tokio::test]
async fn detail_lookup_uses_entity_id() {
    let client = StubClient::new();
    seed_champions(&client, &[("MonkeyKing", "Wukong", "Mana")]);
    let f = fetcher(&client, 8);

    let detail = f.champion_detail("wukong").await.unwrap();

    assert_eq!(detail.entity_id, "MonkeyKing");
    assert_eq!(detail.partype, "Mana");
    assert_eq!(detail.abilities.len(), 3);
    assert_eq!(detail.abilities[0].name, "Wukong passive");
    assert_eq!(client.calls(&champion_detail_url("MonkeyKing")), 1);
}

#[tokio::test]
async fn single_detail_surfaces_its_failure() {
    let client = StubClient::new();
    seed_ten(&client);
    client.fail(champion_detail_url("Azir"));
    let f = fetcher(&client, 8);

    assert_matches!(
        f.champion_detail("Azir").await,
        Err(DdragonError::Fetch { .. })
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn timeout_cancels_and_returns_permits() {
    let client = StubClient::new();
    let names = seed_ten(&client);
    let f = fetcher(&client, 2);
    f.manifest().await.unwrap();
    client.set_delay(Duration::from_millis(500));

    let res = tokio::time::timeout(
        Duration::from_millis(50),
        f.load_champion_details(&names),
    )
    .await;
    assert!(res.is_err());

    for _ in 0..50 {
        if f.available_detail_permits() == 2 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(f.available_detail_permits(), 2);
    assert_eq!(f.cached_detail_count(), 0);
}

#[tokio::test]
async fn all_champions_merge_partype_and_report_failures() {
    let client = StubClient::new();
    seed_champions(
        &client,
        &[
            ("Ahri", "Ahri", "mana"),
            ("Zed", "Zed", "Energy"),
            ("Garen", "Garen", "None"),
        ],
    );
    client.fail(champion_detail_url("Garen"));
    let f = fetcher(&client, 2);

    let roster = f.get_all_champions().await.unwrap();

    assert_eq!(roster.data_version, "13.18.1");
    assert_eq!(roster.champions.len(), 3);
    assert_eq!(
        roster.detail_failures.keys().collect::<Vec<_>>(),
        vec!["Garen"]
    );

    let ahri = roster.get("ahri").unwrap();
    assert!(ahri.tags.contains("Resource:mana"));
    assert!(!ahri.tags.contains("Resource:Mana"));

    let zed = roster.get("Zed").unwrap();
    assert!(zed.tags.contains("Resource:Energy"));

    // Garen keeps manifest-only data.
    let garen = roster.get("Garen").unwrap();
    assert!(!garen.tags.contains("Resource:None"));
    // hp + hpperlevel
    assert_eq!(garen.stats.get("Health"), 690.0);

    // Second pass only retries the failed detail.
    f.get_all_champions().await.unwrap();
    assert_eq!(client.calls(&champion_list_url()), 1);
    assert_eq!(client.calls(&champion_detail_url("Ahri")), 1);
    assert_eq!(client.calls(&champion_detail_url("Garen")), 2);
}

#[tokio::test]
async fn all_champions_are_not_capped_at_ten() {
    let client = StubClient::new();
    let ids: Vec<String> = (0..15).map(|i| format!("Champ{i:02}")).collect();
    let entries: Vec<(&str, &str, &str)> = ids
        .iter()
        .map(|id| (id.as_str(), id.as_str(), "Mana"))
        .collect();
    seed_champions(&client, &entries);
    let f = fetcher(&client, 4);

    let roster = f.get_all_champions().await.unwrap();

    assert_eq!(roster.champions.len(), 15);
    assert!(roster.detail_failures.is_empty());
    assert_eq!(client.calls_matching("/champion/"), 15);
}

#[tokio::test]
async fn details_can_be_switched_off() {
    let client = StubClient::new();
    seed_ten(&client);
    let f = ChampionFetcher::new(client.clone(), config().with_details(false)).unwrap();

    f.get_all_champions().await.unwrap();

    assert_eq!(client.calls_matching("/champion/"), 0);
}

#[tokio::test]
async fn basic_data_overlays_already_cached_details() {
    let client = StubClient::new();
    seed_champions(&client, &[("Zed", "Zed", "Energy")]);
    let f = fetcher(&client, 2);

    f.champion_detail("Zed").await.unwrap();
    let basic = f.get_basic_champion_data().await.unwrap();

    assert!(basic["Zed"].tags.contains("Resource:Energy"));
    assert_eq!(client.calls(&champion_detail_url("Zed")), 1);
}

#[tokio::test]
async fn facade_shares_one_client() {
    let client = StubClient::new();
    seed_ten(&client);
    client.route(item_list_url(), &item_manifest());
    let dd = DataDragon::new(client.clone(), config()).unwrap();

    let batch = dd.load_champion_details(["Ahri"]).await.unwrap();
    let items = dd.get_all_items().await.unwrap();

    assert_eq!(batch.details.len(), 1);
    assert_eq!(items.len(), 3);
    assert_eq!(client.calls(&champion_list_url()), 1);
    assert_eq!(client.calls(&item_list_url()), 1);
}
