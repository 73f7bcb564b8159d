use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use medlog::{
    model::entry::{EntryDto, EntryMessageDto, EntryPayloadDto, EntryType},
    server::{
        controller::entry::{create_entry, delete_entry, get_entry, list_entries, update_entry},
        data::entry::EntryRepository,
    },
};

use super::*;

fn payload(entry_type: &str, detail: &str) -> EntryPayloadDto {
    EntryPayloadDto {
        entry_type: Some(entry_type.to_string()),
        detail: Some(detail.to_string()),
        condition: Some("pain".to_string()),
        scale: Some(3),
        notes: None,
        date: Some("2024-03-07".to_string()),
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

mod create_entry {
    use super::*;

    /// Expect an appointment read back with the same detail and the contact's name as title
    #[tokio::test]
    async fn appointment_round_trip() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;
        let contact = test
            .resources()
            .insert_medical_contact(test.accounts[0].account.id, "Ann", "Young")
            .await?;

        let resp = into_response(
            create_entry(
                State(test.to_app_state()),
                test.session.clone(),
                Ok(Json(payload("appointment", &contact.id.to_string()))),
            )
            .await,
        );
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: EntryMessageDto = body_json(resp).await;

        let resp = into_response(
            get_entry(
                State(test.to_app_state()),
                test.session.clone(),
                Path(created.entry.id.to_string()),
            )
            .await,
        );
        assert_eq!(resp.status(), StatusCode::OK);

        let entry: EntryDto = body_json(resp).await;
        assert_eq!(entry.entry_type, EntryType::Appointment);
        assert_eq!(entry.detail, contact.id.to_string());
        assert_eq!(entry.title, "Dr. Ann Young");
        assert_eq!(entry.date, "2024/03/07");

        Ok(())
    }

    /// Expect 403 and nothing written when the contact belongs to another account
    #[tokio::test]
    async fn rejects_contact_of_other_account() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .with_account("Other", "bob", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;
        let contact = test
            .resources()
            .insert_medical_contact(test.accounts[1].account.id, "Dana", "Baker")
            .await?;

        let result = create_entry(
            State(test.to_app_state()),
            test.session.clone(),
            Ok(Json(payload("appointment", &contact.id.to_string()))),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::FORBIDDEN);
        assert!(EntryRepository::new(&test.db)
            .get_many_by_owner_id(test.accounts[0].account.id)
            .await?
            .is_empty());

        Ok(())
    }

    /// Expect 404 when the medication doesn't exist
    #[tokio::test]
    async fn rejects_missing_medication() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;

        let result = create_entry(
            State(test.to_app_state()),
            test.session.clone(),
            Ok(Json(payload("medication", "42"))),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect free text detail to be its own title
    #[tokio::test]
    async fn other_entry_uses_detail_as_title() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;

        let resp = into_response(
            create_entry(
                State(test.to_app_state()),
                test.session.clone(),
                Ok(Json(payload("other", "Headache after lunch"))),
            )
            .await,
        );

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: EntryMessageDto = body_json(resp).await;
        assert_eq!(body.entry.title, "Headache after lunch");
        assert_eq!(body.entry.notes, "");

        Ok(())
    }

    /// Expect 400 for a scale outside of 1 to 5
    #[tokio::test]
    async fn rejects_scale_out_of_range() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;

        let result = create_entry(
            State(test.to_app_state()),
            test.session.clone(),
            Ok(Json(EntryPayloadDto {
                scale: Some(6),
                ..payload("other", "Headache")
            })),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 401 and nothing written when nobody is signed in
    #[tokio::test]
    async fn rejects_anonymous_session_without_writing() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;

        let result = create_entry(
            State(test.to_app_state()),
            test.session.clone(),
            Ok(Json(payload("other", "Headache"))),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::UNAUTHORIZED);
        assert!(EntryRepository::new(&test.db)
            .get_many_by_owner_id(test.accounts[0].account.id)
            .await?
            .is_empty());

        Ok(())
    }
}

mod list_entries {
    use super::*;

    /// Expect the most recent entry first
    #[tokio::test]
    async fn lists_entries_most_recent_first() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        let home = test.accounts[0].account.id;
        sign_in(&test, &test.accounts[0]).await;
        test.resources()
            .insert_entry(home, "other", "older", 2, day(1))
            .await?;
        test.resources()
            .insert_entry(home, "other", "newer", 4, day(9))
            .await?;

        let resp = into_response(list_entries(State(test.to_app_state()), test.session.clone()).await);

        let entries: Vec<EntryDto> = body_json(resp).await;
        let details: Vec<_> = entries.into_iter().map(|e| e.detail).collect();
        assert_eq!(details, vec!["newer", "older"]);

        Ok(())
    }
}

mod update_entry {
    use super::*;

    /// Expect 404 for an unknown entry even though the body is invalid
    #[tokio::test]
    async fn reports_missing_entry_before_invalid_body() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;

        let result = update_entry(
            State(test.to_app_state()),
            test.session.clone(),
            Path("999".to_string()),
            Ok(Json(EntryPayloadDto {
                entry_type: Some("surgery".to_string()),
                scale: Some(99),
                date: Some("yesterday".to_string()),
                ..Default::default()
            })),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 403 and the entry unchanged when it belongs to another account
    #[tokio::test]
    async fn rejects_entry_of_other_account() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .with_account("Other", "bob", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;
        let entry = test
            .resources()
            .insert_entry(test.accounts[1].account.id, "other", "Headache", 2, day(1))
            .await?;

        let result = update_entry(
            State(test.to_app_state()),
            test.session.clone(),
            Path(entry.id.to_string()),
            Ok(Json(EntryPayloadDto {
                scale: Some(5),
                ..Default::default()
            })),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::FORBIDDEN);
        let stored = EntryRepository::new(&test.db).get(entry.id).await?.unwrap();
        assert_eq!(stored, entry);

        Ok(())
    }

    /// Expect changing the type alone to re-check the existing detail as a reference
    #[tokio::test]
    async fn rechecks_reference_when_type_changes() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;
        let entry = test
            .resources()
            .insert_entry(test.accounts[0].account.id, "other", "Headache", 2, day(1))
            .await?;

        let result = update_entry(
            State(test.to_app_state()),
            test.session.clone(),
            Path(entry.id.to_string()),
            Ok(Json(EntryPayloadDto {
                entry_type: Some("medication".to_string()),
                ..Default::default()
            })),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::NOT_FOUND);
        let stored = EntryRepository::new(&test.db).get(entry.id).await?.unwrap();
        assert_eq!(stored.entry_type, "other");

        Ok(())
    }

    #[tokio::test]
    async fn updates_scale() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;
        let medication = test
            .resources()
            .insert_medication(test.accounts[0].account.id, "Ibuprofen")
            .await?;
        let entry = test
            .resources()
            .insert_entry(
                test.accounts[0].account.id,
                "medication",
                &medication.id.to_string(),
                2,
                day(1),
            )
            .await?;

        let resp = into_response(
            update_entry(
                State(test.to_app_state()),
                test.session.clone(),
                Path(entry.id.to_string()),
                Ok(Json(EntryPayloadDto {
                    scale: Some(5),
                    ..Default::default()
                })),
            )
            .await,
        );

        assert_eq!(resp.status(), StatusCode::OK);
        let body: EntryMessageDto = body_json(resp).await;
        assert_eq!(body.entry.scale, 5);
        assert_eq!(body.entry.title, "Ibuprofen");

        Ok(())
    }
}

mod delete_entry {
    use super::*;

    #[tokio::test]
    async fn deletes_entry() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;
        let entry = test
            .resources()
            .insert_entry(test.accounts[0].account.id, "other", "Headache", 2, day(1))
            .await?;

        let result = delete_entry(
            State(test.to_app_state()),
            test.session.clone(),
            Path(entry.id.to_string()),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::OK);
        assert!(EntryRepository::new(&test.db).get(entry.id).await?.is_none());

        Ok(())
    }
}
