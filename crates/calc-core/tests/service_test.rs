use std::sync::Arc;
use std::thread;

use calc_core::{
    CalculationCreate, CalculationError, CalculationService, CalculationType, CalculationUpdate,
    InMemoryCalculationStore,
};
use uuid::Uuid;

fn service() -> CalculationService<InMemoryCalculationStore> {
    CalculationService::new(InMemoryCalculationStore::new())
}

#[test]
fn create_persists_the_computed_result() {
    let service = service();
    let user_id = Uuid::new_v4();
    let read = service
        .create(&CalculationCreate::new(CalculationType::Multiplication, vec![2.0, 4.0], user_id))
        .unwrap();

    assert_eq!(read.result, 8.0);
    assert_eq!(read.user_id, user_id);
    assert_eq!(read.kind, CalculationType::Multiplication);
    assert_eq!(service.get(read.id).unwrap(), read);
}

#[test]
fn create_accepts_json_payloads() {
    let service = service();
    let payload = format!(
        r#"{{"type": "Division", "inputs": [100, 4, 5], "user_id": "{}"}}"#,
        Uuid::new_v4()
    );
    let request: CalculationCreate = serde_json::from_str(&payload).unwrap();
    let read = service.create(&request).unwrap();
    assert_eq!(read.result, 5.0);

    let json = serde_json::to_value(&read).unwrap();
    assert_eq!(json["type"], "division");
    assert_eq!(json["result"], 5.0);
}

#[test]
fn invalid_requests_surface_typed_errors() {
    let service = service();
    let user_id = Uuid::new_v4();
    let cases = [
        (CalculationType::Addition, vec![1.0], CalculationError::InsufficientInputs),
        (CalculationType::Addition, vec![], CalculationError::InsufficientInputs),
        (CalculationType::Division, vec![5.0, 1.0, 0.0], CalculationError::DivisionByZero),
    ];
    for (kind, inputs, expected) in cases {
        let err = service.create(&CalculationCreate::new(kind, inputs, user_id)).unwrap_err();
        assert_eq!(err, expected);
    }
    assert!(service.list_for_user(user_id).unwrap().is_empty());
}

#[test]
fn list_update_and_delete_round_trip() {
    let service = service();
    let user_id = Uuid::new_v4();
    let first = service
        .create(&CalculationCreate::new(CalculationType::Addition, vec![1.0, 2.0], user_id))
        .unwrap();
    let second = service
        .create(&CalculationCreate::new(CalculationType::Subtraction, vec![9.0, 3.0], user_id))
        .unwrap();
    service
        .create(&CalculationCreate::new(CalculationType::Addition, vec![5.0, 5.0], Uuid::new_v4()))
        .unwrap();

    let listed = service.list_for_user(user_id).unwrap();
    let ids: Vec<_> = listed.iter().map(|r| r.id).collect();
    assert_eq!(listed.len(), 2);
    assert!(ids.contains(&first.id) && ids.contains(&second.id));

    let err = service.update(second.id, &CalculationUpdate { inputs: vec![9.0] }).unwrap_err();
    assert_eq!(err, CalculationError::InsufficientInputs);
    assert_eq!(service.get(second.id).unwrap().result, 6.0);

    let updated = service.update(second.id, &CalculationUpdate { inputs: vec![9.0, 10.0] }).unwrap();
    assert_eq!(updated.result, -1.0);
    assert_eq!(updated.kind, CalculationType::Subtraction);

    service.delete(first.id).unwrap();
    assert_eq!(service.list_for_user(user_id).unwrap().len(), 1);
}

#[test]
fn division_update_rejects_zero_divisor() {
    let service = service();
    let read = service
        .create(&CalculationCreate::new(CalculationType::Division, vec![10.0, 2.0], Uuid::new_v4()))
        .unwrap();
    let err = service.update(read.id, &CalculationUpdate { inputs: vec![10.0, 0.0] }).unwrap_err();
    assert_eq!(err, CalculationError::DivisionByZero);
}

#[test]
fn concurrent_users_do_not_interfere() {
    let service = Arc::new(service());
    let users: Vec<Uuid> = (0..8).map(|_| Uuid::new_v4()).collect();

    let handles: Vec<_> = users
        .iter()
        .copied()
        .map(|user_id| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for i in 0..25 {
                    let inputs = vec![f64::from(i), 1.0];
                    service
                        .create(&CalculationCreate::new(CalculationType::Addition, inputs, user_id))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for user_id in users {
        let records = service.list_for_user(user_id).unwrap();
        assert_eq!(records.len(), 25);
        assert!(records.iter().all(|r| r.user_id == user_id));
    }
    assert_eq!(service.store().len(), 200);
}
