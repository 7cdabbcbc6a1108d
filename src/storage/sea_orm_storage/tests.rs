use std::collections::BTreeMap;

use sea_orm::{ConnectOptions, Database, EntityTrait};
use serde_json::json;

use super::SeaOrmStorage;
use crate::errors::ErrorClass;
use crate::models::admissions::entities::AdmissionStatus;
use crate::models::catalog::entities::LocationStatus;
use crate::models::catalog::requests::{
    CreateAccidentRequest, CreateModelRequest, LocationRequest, SensorRequest,
};
use crate::models::export::build_trainer_document;
use crate::models::scenarios::requests::ScenarioRequest;
use crate::models::users::requests::NewUser;
use crate::storage::Storage;

async fn storage() -> SeaOrmStorage {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.unwrap();
    SeaOrmStorage::with_connection(db).await.unwrap()
}

async fn user(storage: &SeaOrmStorage, username: &str) -> i64 {
    storage
        .create_user(NewUser {
            username: username.to_string(),
            email: format!("{username}@plant.local"),
            password_hash: "hash".to_string(),
            first_name: "Ivan".to_string(),
            last_name: "Petrov".to_string(),
            patronymic: None,
            division: None,
            is_staff: false,
            is_superuser: false,
        })
        .await
        .unwrap()
        .id
}

struct Fixture {
    location_id: i64,
    sensor_id: i64,
    accident_id: i64,
}

async fn catalog(storage: &SeaOrmStorage, status: LocationStatus) -> Fixture {
    let model = storage
        .create_model(CreateModelRequest {
            sensor_type: "Thermometer".to_string(),
            specification: BTreeMap::from([("Max Temp".to_string(), "100 C".to_string())]),
        })
        .await
        .unwrap();
    let sensor = storage
        .create_sensor(SensorRequest {
            name: "TT-101".to_string(),
            kks: "10LAB10CT001".to_string(),
            model_id: model.id,
        })
        .await
        .unwrap();
    let location = storage
        .create_location(LocationRequest {
            name: "Pump hall".to_string(),
            status,
            prefab: None,
            sensor_ids: vec![sensor.id],
        })
        .await
        .unwrap();
    let accident = storage
        .create_accident_for_model(
            model.id,
            CreateAccidentRequest {
                name: "Leak".to_string(),
                mechanical_accident: true,
                change_value: BTreeMap::from([("Flow Rate".to_string(), json!("0.5"))]),
            },
        )
        .await
        .unwrap();

    Fixture {
        location_id: location.id,
        sensor_id: sensor.id,
        accident_id: accident.id,
    }
}

async fn scenario(storage: &SeaOrmStorage, fixture: &Fixture) -> i64 {
    storage
        .create_scenario(ScenarioRequest {
            name: "Pump overheat".to_string(),
            location_id: fixture.location_id,
            sensor_id: fixture.sensor_id,
            accident_ids: vec![fixture.accident_id],
        })
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn test_assign_creates_active_admissions() {
    let storage = storage().await;
    let fixture = catalog(&storage, LocationStatus::Completed).await;
    let scenario_id = scenario(&storage, &fixture).await;
    let users = [
        user(&storage, "u1").await,
        user(&storage, "u2").await,
        user(&storage, "u3").await,
    ];

    let created = storage.assign_admissions(scenario_id, &users).await.unwrap();
    assert_eq!(created.len(), 3);
    for admission in &created {
        assert_eq!(admission.status, AdmissionStatus::Active);
        assert_eq!(admission.rating, "0");
        assert_eq!(admission.is_ready, None);
    }
    assert_eq!(storage.list_admissions().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_assign_rolls_back_on_unknown_user() {
    let storage = storage().await;
    let fixture = catalog(&storage, LocationStatus::Completed).await;
    let scenario_id = scenario(&storage, &fixture).await;
    let u1 = user(&storage, "u1").await;

    let err = storage
        .assign_admissions(scenario_id, &[u1, 9999])
        .await
        .unwrap_err();
    assert_eq!(err.class(), ErrorClass::Storage);
    assert!(storage.list_admissions().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_users_without_scenario() {
    let storage = storage().await;
    let fixture = catalog(&storage, LocationStatus::Completed).await;
    let scenario_id = scenario(&storage, &fixture).await;
    let u1 = user(&storage, "u1").await;
    let u2 = user(&storage, "u2").await;

    let created = storage.assign_admissions(scenario_id, &[u1]).await.unwrap();
    // 已完成的任务同样算作已分配
    storage
        .grade_admission(created[0].id, Some("4.0".to_string()), None)
        .await
        .unwrap();

    let without: Vec<i64> = storage
        .list_users_without_scenario(scenario_id)
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(without, vec![u2]);
}

#[tokio::test]
async fn test_grade_persists_state() {
    let storage = storage().await;
    let fixture = catalog(&storage, LocationStatus::Completed).await;
    let scenario_id = scenario(&storage, &fixture).await;
    let u1 = user(&storage, "u1").await;
    let id = storage.assign_admissions(scenario_id, &[u1]).await.unwrap()[0].id;

    let graded = storage
        .grade_admission(id, Some("4.5".to_string()), Some(AdmissionStatus::Examination))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(graded.status, AdmissionStatus::Completed);
    assert!(graded.is_ready.is_some());

    let stored = storage.get_admission_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.rating, "4.5");
    assert_eq!(stored.status, AdmissionStatus::Completed);

    let reset = storage
        .grade_admission(id, Some("0".to_string()), Some(AdmissionStatus::Examination))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reset.rating, "0");
    assert_eq!(reset.is_ready, None);
    assert_eq!(reset.status, AdmissionStatus::Examination);

    assert!(storage.grade_admission(9999, None, None).await.unwrap().is_none());
}

#[tokio::test]
async fn test_status_update_keeps_grade() {
    let storage = storage().await;
    let fixture = catalog(&storage, LocationStatus::Completed).await;
    let scenario_id = scenario(&storage, &fixture).await;
    let u1 = user(&storage, "u1").await;
    let id = storage.assign_admissions(scenario_id, &[u1]).await.unwrap()[0].id;

    storage
        .grade_admission(id, Some("4.5".to_string()), None)
        .await
        .unwrap();
    let updated = storage
        .grade_admission(id, None, Some(AdmissionStatus::Examination))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.rating, "4.5");
    assert!(updated.is_ready.is_some());
    assert_eq!(updated.status, AdmissionStatus::Examination);

    let stored = storage.get_admission_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.rating, "4.5");
    assert!(stored.is_ready.is_some());
    assert_eq!(stored.status, AdmissionStatus::Examination);
    assert!((storage.average_rating_for_user(u1).await.unwrap() - 4.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_grade_invalid_rating_leaves_row() {
    let storage = storage().await;
    let fixture = catalog(&storage, LocationStatus::Completed).await;
    let scenario_id = scenario(&storage, &fixture).await;
    let u1 = user(&storage, "u1").await;
    let id = storage.assign_admissions(scenario_id, &[u1]).await.unwrap()[0].id;

    let err = storage
        .grade_admission(id, Some("3.7".to_string()), Some(AdmissionStatus::Inactive))
        .await
        .unwrap_err();
    assert_eq!(err.class(), ErrorClass::Validation);

    let stored = storage.get_admission_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.status, AdmissionStatus::Active);
    assert_eq!(stored.rating, "0");
}

#[tokio::test]
async fn test_average_rating_for_user() {
    let storage = storage().await;
    let fixture = catalog(&storage, LocationStatus::Completed).await;
    let u1 = user(&storage, "u1").await;
    assert_eq!(storage.average_rating_for_user(u1).await.unwrap(), 0.0);

    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(scenario(&storage, &fixture).await);
    }
    let created = storage.assign_scenarios_to_user(u1, &ids).await.unwrap();
    storage
        .grade_admission(created[2].id, Some("4.5".to_string()), None)
        .await
        .unwrap();

    let average = storage.average_rating_for_user(u1).await.unwrap();
    assert!((average - 1.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_list_by_user_excludes_completed() {
    let storage = storage().await;
    let fixture = catalog(&storage, LocationStatus::Completed).await;
    let u1 = user(&storage, "u1").await;
    let ids = vec![
        scenario(&storage, &fixture).await,
        scenario(&storage, &fixture).await,
    ];
    let created = storage.assign_scenarios_to_user(u1, &ids).await.unwrap();
    storage
        .grade_admission(created[0].id, Some("3.0".to_string()), None)
        .await
        .unwrap();

    assert_eq!(storage.list_admissions_by_user(u1, true).await.unwrap().len(), 2);
    let open = storage.list_admissions_by_user(u1, false).await.unwrap();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].id, created[1].id);
}

#[tokio::test]
async fn test_delete_missing_admission() {
    let storage = storage().await;
    let fixture = catalog(&storage, LocationStatus::Completed).await;
    let scenario_id = scenario(&storage, &fixture).await;
    let u1 = user(&storage, "u1").await;
    let id = storage.assign_admissions(scenario_id, &[u1]).await.unwrap()[0].id;

    assert!(!storage.delete_admission(9999).await.unwrap());
    let remaining: Vec<i64> = storage
        .list_admissions()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(remaining, vec![id]);

    assert!(storage.delete_admission(id).await.unwrap());
    assert!(storage.list_admissions().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_assigned_user_cannot_be_deleted() {
    let storage = storage().await;
    let fixture = catalog(&storage, LocationStatus::Completed).await;
    let scenario_id = scenario(&storage, &fixture).await;
    let u1 = user(&storage, "u1").await;
    let id = storage.assign_admissions(scenario_id, &[u1]).await.unwrap()[0].id;

    let result = crate::entity::users::Entity::delete_by_id(u1)
        .exec(&storage.db)
        .await;
    assert!(result.is_err());
    let result = crate::entity::scenarios::Entity::delete_by_id(scenario_id)
        .exec(&storage.db)
        .await;
    assert!(result.is_err());

    assert!(storage.get_admission_by_id(id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_active_scenarios_follow_location_status() {
    let storage = storage().await;
    let ready = catalog(&storage, LocationStatus::Completed).await;
    let developing = catalog(&storage, LocationStatus::Developing).await;
    let active_id = scenario(&storage, &ready).await;
    scenario(&storage, &developing).await;

    let active: Vec<i64> = storage
        .list_active_scenarios()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(active, vec![active_id]);
    assert_eq!(storage.list_scenarios().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_scenario_requires_accidents() {
    let storage = storage().await;
    let fixture = catalog(&storage, LocationStatus::Completed).await;

    let err = storage
        .create_scenario(ScenarioRequest {
            name: "Empty".to_string(),
            location_id: fixture.location_id,
            sensor_id: fixture.sensor_id,
            accident_ids: vec![],
        })
        .await
        .unwrap_err();
    assert_eq!(err.class(), ErrorClass::Validation);
    assert!(storage.list_scenarios().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_scenario_graph_exports_document() {
    let storage = storage().await;
    let fixture = catalog(&storage, LocationStatus::Completed).await;
    let scenario_id = scenario(&storage, &fixture).await;

    let graph = storage
        .load_scenario_graph(scenario_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(graph.model.name, "Thermometer");

    let document = serde_json::to_value(build_trainer_document(7, graph)).unwrap();
    let exported = &document["response"]["scenario"];
    assert_eq!(document["response"]["id"], 7);
    assert_eq!(exported["sensor"]["KKS"], "10LAB10CT001");
    assert_eq!(exported["sensor"]["model"]["specification"]["max_temp"], "100 C");
    assert_eq!(exported["accidents"][0]["name"], "Leak");

    assert!(storage.load_scenario_graph(9999).await.unwrap().is_none());
}
