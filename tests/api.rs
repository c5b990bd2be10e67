use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use client_registry::repository::DieselRepository;
use client_registry::routes::client::configure;
use serde_json::{Value, json};

mod common;

fn laura() -> Value {
    json!({
        "name": "Laura Cristina",
        "cpf": "88829955678",
        "income": 5000.0,
        "birthDate": "1995-06-15T07:00:00Z",
        "children": 0
    })
}

#[actix_web::test]
async fn client_lifecycle_over_sqlite() {
    let test_db = common::TestDb::new("client_lifecycle_over_sqlite.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .configure(configure::<DieselRepository>),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/clients/")
        .set_json(laura())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().expect("assigned id");
    assert_eq!(created["birthDate"], "1995-06-15T07:00:00Z");

    let mut richer = laura();
    richer["name"] = json!("Toni Morrison");
    richer["cpf"] = json!("10219344681");
    richer["income"] = json!(10000.0);
    let req = test::TestRequest::post()
        .uri("/clients/")
        .set_json(richer)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::get().uri("/clients/").to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["numberOfElements"], 2);
    assert_eq!(page["totalElements"], 2);

    let req = test::TestRequest::get()
        .uri("/clients/incomeGreaterThan/?income=5000.0")
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["numberOfElements"], 1);
    assert_eq!(page["content"][0]["name"], "Toni Morrison");

    let mut changed = laura();
    changed["children"] = json!(2);
    let req = test::TestRequest::put()
        .uri(&format!("/clients/{id}"))
        .set_json(changed.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["children"], 2);

    let req = test::TestRequest::put()
        .uri("/clients/100")
        .set_json(changed)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::delete()
        .uri(&format!("/clients/{id}"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    let req = test::TestRequest::get()
        .uri(&format!("/clients/{id}"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}
