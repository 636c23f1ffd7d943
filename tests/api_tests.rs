use axum::extract::Request;
use axum::ServiceExt;
use car_dealership::config::EnvironmentConfig;
use car_dealership::{create_app, AppState};
use reqwest::StatusCode;
use serde_json::{json, Value};

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        Self::spawn_with(EnvironmentConfig::default()).await
    }

    async fn spawn_with(config: EnvironmentConfig) -> Self {
        let config = EnvironmentConfig {
            bcrypt_cost: 4,
            ..config
        };
        let app = create_app(AppState::in_memory(config));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
                .await
                .unwrap();
        });

        Self {
            base_url: format!("http://{}/api/v1", addr),
            client: reqwest::Client::new(),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let res = self.client.post(self.url(path)).json(&body).send().await.unwrap();
        (res.status(), res.json().await.unwrap())
    }

    async fn post_empty(&self, path: &str) -> (StatusCode, Value) {
        let res = self.client.post(self.url(path)).send().await.unwrap();
        (res.status(), res.json().await.unwrap())
    }

    async fn put(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let res = self.client.put(self.url(path)).json(&body).send().await.unwrap();
        (res.status(), res.json().await.unwrap())
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let res = self.client.get(self.url(path)).send().await.unwrap();
        (res.status(), res.json().await.unwrap())
    }

    async fn delete(&self, path: &str) -> (StatusCode, Value) {
        let res = self.client.delete(self.url(path)).send().await.unwrap();
        (res.status(), res.json().await.unwrap())
    }

    async fn create(&self, path: &str, body: Value) -> i64 {
        let (status, body) = self.post(path, body).await;
        assert_eq!(status, StatusCode::CREATED, "unexpected body: {}", body);
        body["id"].as_i64().unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn employee(username: &str) -> Value {
    json!({
        "ssn": "123-45-6789",
        "firstName": "FirstName",
        "middleInitial": "M",
        "lastName": "LastName",
        "gender": "MALE",
        "dateOfBirth": "1990-01-01",
        "phoneNumber": "123-456-7890",
        "email": "employee@company.com",
        "salary": 45000,
        "dateStarted": "2020-06-01",
        "hoursWorked": 780,
        "isActive": true,
        "role": "USER",
        "username": username,
        "password": "password123"
    })
}

fn client(sales_associate_id: Option<i64>) -> Value {
    json!({
        "ssn": 123456789,
        "firstName": "Jane",
        "lastName": "Doe",
        "gender": "FEMALE",
        "email": "jane@doe.com",
        "phoneNumber": "123-456-7890",
        "address": "1 Main St.",
        "salesAssociateId": sales_associate_id,
        "minimumPrice": 10000,
        "maximumPrice": 25000
    })
}

fn ticket() -> Value {
    json!({
        "description": "Oil change and tire rotation",
        "dateCreated": "2024-05-02"
    })
}

#[tokio::test]
async fn test_health() {
    let server = TestServer::spawn().await;
    let res = server
        .client
        .get(server.base_url.replace("/api/v1", "/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "memory");
}

#[tokio::test]
async fn test_location_crud() {
    let server = TestServer::spawn().await;

    let (status, created) = server
        .post("/locations", json!({ "name": "Location A" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Location A");
    assert_eq!(created["addressId"], Value::Null);

    let (status, fetched) = server.get(&format!("/locations/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, listed) = server.get("/locations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, edited) = server
        .put(&format!("/locations/{}", id), json!({ "name": "Location B" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(edited["id"], id);
    assert_eq!(edited["name"], "Location B");

    let (status, deleted) = server.delete(&format!("/locations/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, edited);

    let (status, body) = server.get(&format!("/locations/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(
        body["message"],
        format!("Could not find Location with id: {}", id)
    );
}

#[tokio::test]
async fn test_bad_bodies_are_rejected() {
    let server = TestServer::spawn().await;

    let res = server
        .client
        .post(server.url("/locations"))
        .header("content-type", "application/json")
        .body("null")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let mut body = employee("bad_gender");
    body["gender"] = json!("UNKNOWN");
    let (status, error) = server.post("/mechanics", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "BAD_REQUEST");

    let mut body = employee("bad_ssn");
    body["ssn"] = json!("123456789");
    let (status, error) = server.post("/mechanics", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");

    let (status, _) = server
        .post("/lots", json!({ "size": 10.0, "locationId": 404 }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_assign_ticket_to_mechanic() {
    let server = TestServer::spawn().await;
    let first = server.create("/mechanics", employee("first")).await;
    let second = server.create("/mechanics", employee("second")).await;
    let ticket = server.create("/tickets", ticket()).await;

    let (status, mechanic) = server
        .post_empty(&format!("/mechanics/{}/tickets/{}/add", first, ticket))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mechanic["id"], first);
    assert!(mechanic.get("password").is_none());

    let (_, stored) = server.get(&format!("/tickets/{}", ticket)).await;
    assert_eq!(stored["mechanicId"], first);

    let (_, tickets) = server.get(&format!("/mechanics/{}/tickets", first)).await;
    assert_eq!(tickets.as_array().unwrap().len(), 1);

    let (status, error) = server
        .post_empty(&format!("/mechanics/{}/tickets/{}/add", second, ticket))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "ALREADY_ASSIGNED");

    let (status, _) = server
        .delete(&format!("/mechanics/{}/tickets/{}/remove", first, ticket))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, stored) = server.get(&format!("/tickets/{}", ticket)).await;
    assert_eq!(stored["mechanicId"], Value::Null);

    let (status, _) = server
        .post_empty(&format!("/mechanics/{}/tickets/{}/add", second, ticket))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_ticket_comments() {
    let server = TestServer::spawn().await;
    let ticket = server.create("/tickets", ticket()).await;
    let comment = server
        .create(
            "/comments",
            json!({ "dateCreated": "2024-05-03", "content": "Waiting for parts" }),
        )
        .await;

    let (status, returned) = server
        .post_empty(&format!("/tickets/{}/comments/{}/add", ticket, comment))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(returned["id"], ticket);

    let (_, comments) = server.get(&format!("/tickets/{}/comments", ticket)).await;
    let comments = comments.as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["serviceTicketId"], ticket);

    let (status, _) = server
        .delete(&format!("/tickets/{}/comments/{}/remove", ticket, comment))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, comments) = server.get(&format!("/tickets/{}/comments", ticket)).await;
    assert!(comments.as_array().unwrap().is_empty());

    let (status, _) = server
        .post_empty(&format!("/tickets/{}/comments/{}/add", ticket + 100, comment))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_location_lots_and_delete() {
    let server = TestServer::spawn().await;
    let location = server.create("/locations", json!({ "name": "Main" })).await;
    let lot = server.create("/lots", json!({ "size": 100.15 })).await;

    let (status, _) = server
        .post_empty(&format!("/locations/{}/lots/{}/add", location, lot))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, lots) = server.get(&format!("/locations/{}/lots", location)).await;
    assert_eq!(lots[0]["id"], lot);
    assert_eq!(lots[0]["size"], 100.15);

    let (status, _) = server.delete(&format!("/locations/{}", location)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, stored) = server.get(&format!("/lots/{}", lot)).await;
    assert_eq!(stored["locationId"], Value::Null);

    let (status, _) = server.get(&format!("/locations/{}/lots", location)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_employee_subtypes_are_separate() {
    let server = TestServer::spawn().await;
    let manager = server.create("/managers", employee("boss")).await;
    let mechanic = server.create("/mechanics", employee("wrench")).await;

    let (status, _) = server.get(&format!("/mechanics/{}", manager)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, managers) = server.get("/managers").await;
    assert_eq!(managers.as_array().unwrap().len(), 1);
    assert_eq!(managers[0]["employeeType"], "MANAGER");

    let (status, _) = server
        .post_empty(&format!("/managers/{}/mechanics/{}/add", manager, mechanic))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, reports) = server.get(&format!("/managers/{}/mechanics", manager)).await;
    assert_eq!(reports[0]["id"], mechanic);
    assert_eq!(reports[0]["managerId"], manager);

    let (_, associates) = server.get(&format!("/managers/{}/associates", manager)).await;
    assert!(associates.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_edit_is_full_replacement() {
    let server = TestServer::spawn().await;
    let associate = server.create("/associates", employee("seller")).await;
    let client = server
        .create(
            "/clients",
            json!({
                "ssn": 123456789,
                "firstName": "Jane",
                "lastName": "Doe",
                "gender": "FEMALE",
                "email": "jane@doe.com",
                "phoneNumber": "123-456-7890",
                "address": "1 Main St.",
                "salesAssociateId": associate,
                "minimumPrice": 10000,
                "maximumPrice": 25000
            }),
        )
        .await;

    let (_, clients) = server.get(&format!("/associates/{}/clients", associate)).await;
    assert_eq!(clients[0]["id"], client);

    let (status, edited) = server
        .put(
            &format!("/clients/{}", client),
            json!({
                "ssn": 987654321,
                "firstName": "Janet",
                "lastName": "Doe",
                "gender": "FEMALE",
                "email": "janet@doe.com",
                "phoneNumber": "123-456-7890",
                "address": "2 Main St.",
                "minimumPrice": 5000,
                "maximumPrice": 9000
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(edited["firstName"], "Janet");
    assert_eq!(edited["salesAssociateId"], Value::Null);

    let (_, clients) = server.get(&format!("/associates/{}/clients", associate)).await;
    assert!(clients.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let server = TestServer::spawn().await;
    let (status, body) = server.get("/vehicles").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_trailing_slash_is_accepted() {
    let server = TestServer::spawn().await;
    server.create("/locations/", json!({ "name": "Main" })).await;

    let (status, listed) = server.get("/locations/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, fetched) = server.get("/locations/1/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Main");
}

#[tokio::test]
async fn test_department_mechanics() {
    let server = TestServer::spawn().await;
    let department = server.create("/departments", json!({ "name": "Service" })).await;
    let other = server.create("/departments", json!({ "name": "Body shop" })).await;
    let mechanic = server.create("/mechanics", employee("wrench")).await;
    let manager = server.create("/managers", employee("boss")).await;

    let (status, returned) = server
        .post_empty(&format!("/departments/{}/mechanics/{}/add", department, mechanic))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(returned["id"], department);

    let (_, members) = server.get(&format!("/departments/{}/mechanics", department)).await;
    assert_eq!(members[0]["id"], mechanic);
    assert_eq!(members[0]["departmentId"], department);

    let (status, error) = server
        .post_empty(&format!("/departments/{}/mechanics/{}/add", other, mechanic))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "ALREADY_ASSIGNED");

    let (status, _) = server
        .post_empty(&format!("/departments/{}/mechanics/{}/add", department, manager))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = server
        .delete(&format!("/departments/{}/mechanics/{}/remove", department, mechanic))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, members) = server.get(&format!("/departments/{}/mechanics", department)).await;
    assert!(members.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_location_departments_and_mechanics() {
    let server = TestServer::spawn().await;
    let location = server.create("/locations", json!({ "name": "Main" })).await;
    let department = server.create("/departments", json!({ "name": "Service" })).await;
    let mechanic = server.create("/mechanics", employee("wrench")).await;

    let (status, _) = server
        .post_empty(&format!("/locations/{}/departments/{}/add", location, department))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, departments) = server.get(&format!("/locations/{}/departments", location)).await;
    assert_eq!(departments[0]["id"], department);
    assert_eq!(departments[0]["locationId"], location);

    let (status, _) = server
        .post_empty(&format!("/locations/{}/mechanics/{}/add", location, mechanic))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, mechanics) = server.get(&format!("/locations/{}/mechanics", location)).await;
    assert_eq!(mechanics[0]["id"], mechanic);
    assert_eq!(mechanics[0]["workLocationId"], location);

    let (status, _) = server
        .delete(&format!("/locations/{}/departments/{}/remove", location, department))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = server
        .delete(&format!("/locations/{}/mechanics/{}/remove", location, mechanic))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, departments) = server.get(&format!("/locations/{}/departments", location)).await;
    assert!(departments.as_array().unwrap().is_empty());
    let (_, stored) = server.get(&format!("/mechanics/{}", mechanic)).await;
    assert_eq!(stored["workLocationId"], Value::Null);
}

#[tokio::test]
async fn test_associate_clients() {
    let server = TestServer::spawn().await;
    let first = server.create("/associates", employee("first")).await;
    let second = server.create("/associates", employee("second")).await;
    let buyer = server.create("/clients", client(None)).await;

    let (status, returned) = server
        .post_empty(&format!("/associates/{}/clients/{}/add", first, buyer))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(returned["id"], first);

    let (status, error) = server
        .post_empty(&format!("/associates/{}/clients/{}/add", second, buyer))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "ALREADY_ASSIGNED");

    let (status, _) = server
        .delete(&format!("/associates/{}/clients/{}/remove", first, buyer))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, clients) = server.get(&format!("/associates/{}/clients", first)).await;
    assert!(clients.as_array().unwrap().is_empty());

    let (status, _) = server
        .post_empty(&format!("/associates/{}/clients/{}/add", second, buyer))
        .await;
    assert_eq!(status, StatusCode::OK);

    let mechanic = server.create("/mechanics", employee("wrench")).await;
    let (status, _) = server.post("/clients", client(Some(mechanic))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_amounts_must_fit_the_column() {
    let server = TestServer::spawn().await;

    let mut body = employee("rich");
    body["salary"] = json!(1e10);
    let (status, error) = server.post("/mechanics", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");

    let mut body = client(None);
    body["maximumPrice"] = json!(1e10);
    let (status, error) = server.post("/clients", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_cors_policy_follows_environment() {
    let origin = "http://showroom.example";

    let server = TestServer::spawn().await;
    let res = server
        .client
        .get(server.url("/locations"))
        .header("origin", origin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["access-control-allow-origin"], origin);

    let server = TestServer::spawn_with(EnvironmentConfig {
        environment: "production".to_string(),
        ..EnvironmentConfig::default()
    })
    .await;
    let res = server
        .client
        .get(server.url("/locations"))
        .header("origin", origin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().get("access-control-allow-origin").is_none());
}
