use lol_rank_sensor::{
    AppError, Config, CycleStage, RankPoller, SensorConfig,
    riot_api::{RiotClient, create_http_client},
    runner,
};
use serde_json::json;
use tempfile::tempdir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

const ACCOUNT_PATH: &str = "/riot/account/v1/accounts/by-riot-id/Tester/EUW";
const SUMMONER_PATH: &str = "/lol/summoner/v4/summoners/by-puuid/puuid-123";
const LEAGUE_PATH: &str = "/lol/league/v4/entries/by-summoner/summoner-abc";

/// Writes a config file pointing every endpoint at the mock server and loads it back.
async fn load_config_for(server: &MockServer) -> Config {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let uri = server.uri();
    let content = format!(
        r#"
api_key = "RGAPI-integration"
http_timeout_seconds = 5
account_url = "{uri}"
platform_url = "{uri}"
ddragon_url = "{uri}"

[[sensors]]
name = "Tester#EUW"
region = "euw1"
"#
    );
    tokio::fs::write(&config_path, content).await.unwrap();

    let config = Config::load_from_path(&config_path.to_string_lossy())
        .await
        .unwrap();
    config.validate().unwrap();
    config
}

async fn mount_happy_chain(server: &MockServer, entries: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/versions.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["14.20.1", "14.19.1"])))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(ACCOUNT_PATH))
        .and(header("X-Riot-Token", "RGAPI-integration"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "puuid": "puuid-123",
            "gameName": "Tester",
            "tagLine": "EUW"
        })))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(SUMMONER_PATH))
        .and(header("X-Riot-Token", "RGAPI-integration"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "summoner-abc",
            "summonerLevel": 87,
            "profileIconId": 5367
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(LEAGUE_PATH))
        .and(header("X-Riot-Token", "RGAPI-integration"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entries))
        .mount(server)
        .await;
}

/// Full chain through the public API: config file, runner, snapshot JSON
#[tokio::test]
async fn test_ranked_player_end_to_end() {
    let mock_server = MockServer::start().await;
    mount_happy_chain(
        &mock_server,
        json!([{
            "queueType": "RANKED_SOLO_5x5",
            "tier": "GOLD",
            "rank": "IV",
            "leaguePoints": 50,
            "wins": 30,
            "losses": 20
        }]),
    )
    .await;

    let config = load_config_for(&mock_server).await;
    let mut pollers = runner::build_pollers(&config).unwrap();
    let snapshots = runner::run_once(&mut pollers).await;

    assert_eq!(snapshots.len(), 1);
    let json = serde_json::to_value(&snapshots[0]).unwrap();
    assert_eq!(json["name"], "LoL Tester");
    assert_eq!(json["unique_id"], "lol_tester_euw");
    assert_eq!(json["state"], "GOLD IV");
    assert_eq!(json["available"], true);
    assert_eq!(json["attributes"]["winrate"], "60.0%");
    assert_eq!(json["attributes"]["lp"], 50);
    assert_eq!(json["attributes"]["wins"], 30);
    assert_eq!(json["attributes"]["losses"], 20);
    assert_eq!(json["attributes"]["level"], 87);
    assert_eq!(
        json["entity_picture"],
        format!("{}/cdn/14.20.1/img/profileicon/5367.png", mock_server.uri())
    );
}

/// Repeated cycles reuse the memoized account id and stay available
#[tokio::test]
async fn test_repeated_cycles_resolve_account_once() {
    let mock_server = MockServer::start().await;
    mount_happy_chain(&mock_server, json!([])).await;

    let config = load_config_for(&mock_server).await;
    let mut pollers = runner::build_pollers(&config).unwrap();

    for _ in 0..3 {
        let snapshots = runner::run_once(&mut pollers).await;
        assert!(snapshots[0].available);
        assert_eq!(snapshots[0].state.as_deref(), Some("Unranked"));
        assert!(!snapshots[0].attributes.contains_key("winrate"));
    }

    mock_server.verify().await;
}

/// A sensor configured without a tag line never becomes a poller
#[tokio::test]
async fn test_handle_without_separator_is_rejected() {
    let config = Config {
        api_key: "RGAPI-integration".to_string(),
        sensors: vec![SensorConfig {
            name: "JustAName".to_string(),
            region: "euw1".to_string(),
        }],
        ..Config::default()
    };

    assert!(matches!(
        config.validate(),
        Err(AppError::InvalidRiotId { .. })
    ));
    assert!(matches!(
        runner::build_pollers(&config),
        Err(AppError::InvalidRiotId { .. })
    ));

    let client = RiotClient::from_config(create_http_client().unwrap(), &config);
    assert!(RankPoller::from_config(client, &config.sensors[0], "14.1.1").is_err());
}

/// A rate-limited league lookup turns the sensor unavailable but keeps its last value
#[tokio::test]
async fn test_rate_limited_cycle_keeps_last_value() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/versions.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(ACCOUNT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"puuid": "puuid-123"})))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(SUMMONER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "summoner-abc",
            "summonerLevel": 87,
            "profileIconId": 5367
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(LEAGUE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "queueType": "RANKED_SOLO_5x5",
            "tier": "DIAMOND",
            "rank": "II",
            "leaguePoints": 12,
            "wins": 120,
            "losses": 100
        }])))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(LEAGUE_PATH))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let config = load_config_for(&mock_server).await;
    let mut pollers = runner::build_pollers(&config).unwrap();
    let poller = &mut pollers[0];

    assert_eq!(poller.update().await, CycleStage::RankResolved);
    let first = poller.snapshot();
    assert_eq!(first.state.as_deref(), Some("DIAMOND II"));
    assert_eq!(first.attributes["winrate"], "54.5%");
    assert!(
        first
            .entity_picture
            .as_deref()
            .is_some_and(|url| url.contains("/cdn/14.1.1/"))
    );

    assert_eq!(poller.update().await, CycleStage::Failed);
    let second = poller.snapshot();
    assert!(!second.available);
    assert_eq!(second.state, first.state);
    assert_eq!(second.attributes, first.attributes);
}
