use axum::{routing::post, Json, Router};
use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

const FALLBACK: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Debug, Deserialize)]
struct DailySample {
    day: String,
    calories: u32,
}

#[derive(Debug, Deserialize)]
struct DashboardResponse {
    total_calories: u32,
    water_intake: u32,
    water_goal: u32,
    mood_rating: u8,
    meals: Vec<Value>,
    week: Vec<DailySample>,
}

#[derive(Debug, Deserialize)]
struct FoodMatch {
    name: String,
    calories: u32,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    role: String,
    text: String,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));
static FAKE_ASSISTANT: Lazy<String> = Lazy::new(spawn_fake_assistant);

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn fake_reply(Json(body): Json<Value>) -> Result<Json<Value>, StatusCode> {
    let message = body["message"].as_str().unwrap_or_default();
    if message == "fail" {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let calories = &body["healthContext"]["calories"];
    Ok(Json(json!({
        "status": "success",
        "message": format!("echo: {message} ({calories} kcal)"),
    })))
}

/// Serves a stand-in assistant on its own runtime so it outlives any single test.
fn spawn_fake_assistant() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake assistant");
    listener.set_nonblocking(true).unwrap();
    let url = format!("http://{}/api/chat", listener.local_addr().unwrap());

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("fake assistant runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            let app = Router::new().route("/api/chat", post(fake_reply));
            axum::serve(listener, app).await.unwrap();
        });
    });

    url
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/dashboard")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_health_dashboard"))
        .env("PORT", port.to_string())
        .env("ASSISTANT_URL", FAKE_ASSISTANT.as_str())
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn dashboard(client: &Client, server: &TestServer) -> DashboardResponse {
    client
        .get(format!("{}/api/dashboard", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_add_meal_updates_total_and_last_day() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = dashboard(&client, &server).await;
    assert_eq!(before.week.len(), 7);
    assert_eq!(before.week[6].day, "Sun");

    let after: DashboardResponse = client
        .post(format!("{}/api/meals", server.base_url))
        .json(&json!({ "name": "Oatmeal", "calories": 350 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(after.total_calories, before.total_calories + 350);
    assert_eq!(after.week[6].calories, before.week[6].calories + 350);
    assert_eq!(after.week[0].calories, before.week[0].calories);
    assert_eq!(after.meals.len(), before.meals.len() + 1);

    let rejected = client
        .post(format!("{}/api/meals", server.base_url))
        .json(&json!({ "name": "", "calories": 100 }))
        .send()
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_water_and_mood_are_validated() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = dashboard(&client, &server).await;
    let after: DashboardResponse = client
        .post(format!("{}/api/water", server.base_url))
        .json(&json!({ "action": "add" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after.water_intake, (before.water_intake + 1).min(before.water_goal));

    let bad_action = client
        .post(format!("{}/api/water", server.base_url))
        .json(&json!({ "action": "drink" }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_action.status(), StatusCode::BAD_REQUEST);

    let mood: DashboardResponse = client
        .post(format!("{}/api/mood", server.base_url))
        .json(&json!({ "rating": 5 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(mood.mood_rating, 5);

    let bad_mood = client
        .post(format!("{}/api/mood", server.base_url))
        .json(&json!({ "rating": 9 }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_mood.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_food_search_scales_with_portion() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let search = |query: &'static str, portion: &'static str| {
        client
            .get(format!("{}/api/foods", server.base_url))
            .query(&[("q", query), ("portion", portion)])
            .send()
    };

    let empty: Vec<FoodMatch> = search("", "1").await.unwrap().json().await.unwrap();
    assert!(empty.is_empty());

    let none: Vec<FoodMatch> = search("pizza", "1").await.unwrap().json().await.unwrap();
    assert!(none.is_empty());

    let single: Vec<FoodMatch> = search("paneer tikka", "1").await.unwrap().json().await.unwrap();
    let double: Vec<FoodMatch> = search("paneer tikka", "2").await.unwrap().json().await.unwrap();
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].name, "Paneer Tikka");
    assert_eq!(single[0].calories, 16);
    assert_eq!(double[0].calories, 32);

    let bad_portion = search("idli", "lots").await.unwrap();
    assert_eq!(bad_portion.status(), StatusCode::BAD_REQUEST);

    let before = dashboard(&client, &server).await;
    let after: DashboardResponse = client
        .post(format!("{}/api/foods/add", server.base_url))
        .json(&json!({ "name": "Paneer Tikka", "portion": "2" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after.total_calories, before.total_calories + 32);
    assert_eq!(after.week[6].calories, before.week[6].calories);
    assert_eq!(
        after.meals.last().unwrap()["name"],
        "Paneer Tikka (2 servings)"
    );
}

#[tokio::test]
async fn http_chat_relays_reply_and_falls_back_on_failure() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let total = dashboard(&client, &server).await.total_calories;

    let reply: ChatMessage = client
        .post(format!("{}/api/chat", server.base_url))
        .json(&json!({ "message": "How am I doing?" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reply.role, "assistant");
    assert_eq!(reply.text, format!("echo: How am I doing? ({total} kcal)"));

    let failed: ChatMessage = client
        .post(format!("{}/api/chat", server.base_url))
        .json(&json!({ "message": "fail" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(failed.role, "assistant");
    assert_eq!(failed.text, FALLBACK);

    let messages: Vec<ChatMessage> = client
        .get(format!("{}/api/messages", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let tail: Vec<_> = messages
        .iter()
        .rev()
        .take(4)
        .rev()
        .map(|msg| (msg.role.as_str(), msg.text.as_str()))
        .collect();
    assert_eq!(tail[0], ("user", "How am I doing?"));
    assert_eq!(tail[1].0, "assistant");
    assert_eq!(tail[2], ("user", "fail"));
    assert_eq!(tail[3], ("assistant", FALLBACK));
    assert_eq!(messages[0].role, "assistant");

    let blank = client
        .post(format!("{}/api/chat", server.base_url))
        .json(&json!({ "message": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(blank.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_index_serves_dashboard() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let html = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("Health Dashboard"));
    assert!(!html.contains("{{"));

    let analysis: Value = client
        .get(format!("{}/api/analysis", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(analysis["overview"]["calories"]["status"].is_string());
    assert!(analysis["recommendations"].is_array());

    let stats: Value = client
        .get(format!("{}/api/stats", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let week = stats["week"].as_array().unwrap();
    assert_eq!(week.len(), 7);
    let sum: u64 = week.iter().map(|day| day["calories"].as_u64().unwrap()).sum();
    let expected = (sum as f64 / 7.0).round() as i64;
    assert_eq!(stats["stats"]["avgCalories"].as_i64().unwrap(), expected);
    let label = stats["stats"]["moodTrend"].as_str().unwrap();
    assert!(label == "Improving" || label == "Needs Attention");
}
