// ABOUTME: Integration tests for the class catalog CRUD operations
// ABOUTME: Covers field validation, the slots >= 0 invariant and cascade deletion of bookings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

use zenith_booking::database::{test_utils::create_test_db, ClassSpec};
use zenith_booking::errors::ErrorCode;
use zenith_booking::models::ClientEmail;

fn class_spec(name: &str, slots: i64) -> ClassSpec {
    ClassSpec {
        name: name.into(),
        datetime: "2025-07-06T08:00:00".into(),
        instructor: "Ana".into(),
        slots,
    }
}

#[tokio::test]
async fn create_assigns_fresh_ids_and_persists_fields() {
    let db = create_test_db().await.unwrap();

    let first = db.create_class(&class_spec("Yoga", 5)).await.unwrap();
    let second = db.create_class(&class_spec("Spin", 8)).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.name, "Yoga");
    assert_eq!(first.datetime, "2025-07-06T08:00:00");
    assert_eq!(first.instructor, "Ana");
    assert_eq!(first.slots, 5);
}

#[tokio::test]
async fn create_rejects_invalid_fields() {
    let db = create_test_db().await.unwrap();

    let negative = db.create_class(&class_spec("Yoga", -1)).await.unwrap_err();
    assert_eq!(negative.code, ErrorCode::InvalidInput);

    let unnamed = db.create_class(&class_spec("   ", 5)).await.unwrap_err();
    assert_eq!(unnamed.code, ErrorCode::InvalidInput);

    let bad_time = db
        .create_class(&ClassSpec {
            name: "Yoga".into(),
            datetime: "next tuesday".into(),
            instructor: "Ana".into(),
            slots: 5,
        })
        .await
        .unwrap_err();
    assert_eq!(bad_time.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn zero_slot_classes_are_allowed_but_not_available() {
    let db = create_test_db().await.unwrap();

    db.create_class(&class_spec("Full Class", 0)).await.unwrap();
    db.create_class(&class_spec("Open Class", 2)).await.unwrap();

    let all = db.list_classes().await.unwrap();
    assert_eq!(all.len(), 2);

    let available = db.list_available_classes().await.unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].name, "Open Class");
}

#[tokio::test]
async fn get_by_id_returns_none_for_unknown_class() {
    let db = create_test_db().await.unwrap();
    assert!(db.get_class_by_id(42).await.unwrap().is_none());
}

#[tokio::test]
async fn update_replaces_all_fields() {
    let db = create_test_db().await.unwrap();
    let class = db.create_class(&class_spec("Yoga", 5)).await.unwrap();

    let updated = db
        .update_class(
            class.id,
            &ClassSpec {
                name: "Evening Yoga".into(),
                datetime: "2025-07-06T18:30:00".into(),
                instructor: "Maya".into(),
                slots: 12,
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, class.id);
    assert_eq!(updated.name, "Evening Yoga");
    assert_eq!(updated.datetime, "2025-07-06T18:30:00");
    assert_eq!(updated.instructor, "Maya");
    assert_eq!(updated.slots, 12);
}

#[tokio::test]
async fn update_of_unknown_class_returns_none() {
    let db = create_test_db().await.unwrap();
    let result = db.update_class(999, &class_spec("Yoga", 5)).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() {
    let db = create_test_db().await.unwrap();
    let class = db.create_class(&class_spec("Yoga", 5)).await.unwrap();

    assert!(db.delete_class(class.id).await.unwrap());
    assert!(!db.delete_class(class.id).await.unwrap());
    assert!(db.get_class_by_id(class.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_cascades_to_bookings() {
    let db = create_test_db().await.unwrap();
    let doomed = db.create_class(&class_spec("Doomed", 5)).await.unwrap();
    let survivor = db.create_class(&class_spec("Survivor", 5)).await.unwrap();

    let email = ClientEmail::parse("ana@example.com").unwrap();
    db.book_class(doomed.id, "Ana", &email).await.unwrap();
    db.book_class(doomed.id, "Ana", &email).await.unwrap();
    db.book_class(survivor.id, "Ana", &email).await.unwrap();

    assert!(db.delete_class(doomed.id).await.unwrap());

    // No orphaned ledger entries for the deleted class
    let remaining = db.list_bookings_by_email("ana@example.com").await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].class_id, survivor.id);

    let all = db.list_all_bookings().await.unwrap();
    assert_eq!(all.len(), 1);
}
