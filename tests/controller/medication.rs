use axum::{
    extract::{Path, State},
    Json,
};
use medlog::{
    model::medication::{MedicationDto, MedicationMessageDto, MedicationPayloadDto},
    server::{
        controller::medication::{
            create_medication, delete_medication, get_medication, list_medications,
            update_medication,
        },
        data::medication::MedicationRepository,
    },
};

use super::*;

mod create_medication {
    use super::*;

    #[tokio::test]
    async fn adds_medication() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;

        let resp = into_response(
            create_medication(
                State(test.to_app_state()),
                test.session.clone(),
                Ok(Json(MedicationPayloadDto {
                    name: Some("Ibuprofen".to_string()),
                    dose: Some("200mg".to_string()),
                    ..Default::default()
                })),
            )
            .await,
        );

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: MedicationMessageDto = body_json(resp).await;
        assert_eq!(body.message, "Your medication was added successfully.");
        assert_eq!(body.medication.name, "Ibuprofen");
        assert_eq!(body.medication.generic_name, "");

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

        let result = create_medication(
            State(test.to_app_state()),
            test.session.clone(),
            Ok(Json(MedicationPayloadDto {
                name: Some("Ibuprofen".to_string()),
                ..Default::default()
            })),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::UNAUTHORIZED);
        assert!(MedicationRepository::new(&test.db)
            .get_active_by_owner_id(test.accounts[0].account.id)
            .await?
            .is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn rejects_missing_name() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;

        let result = create_medication(
            State(test.to_app_state()),
            test.session.clone(),
            Ok(Json(MedicationPayloadDto::default())),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod list_medications {
    use super::*;

    /// Expect active medications sorted by name
    #[tokio::test]
    async fn lists_active_medications_by_name() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        let home = test.accounts[0].account.id;
        sign_in(&test, &test.accounts[0]).await;

        let resources = test.resources();
        resources.insert_medication(home, "Naproxen").await?;
        resources.insert_medication(home, "Acetaminophen").await?;
        let stopped = resources.insert_medication(home, "Codeine").await?;
        MedicationRepository::new(&test.db).deactivate(stopped).await?;

        let resp = into_response(list_medications(State(test.to_app_state()), test.session.clone()).await);

        let medications: Vec<MedicationDto> = body_json(resp).await;
        let names: Vec<_> = medications.into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["Acetaminophen", "Naproxen"]);

        Ok(())
    }
}

mod get_medication {
    use super::*;

    /// Expect 403 when the medication belongs to another account
    #[tokio::test]
    async fn rejects_medication_of_other_account() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .with_account("Other", "bob", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;
        let medication = test
            .resources()
            .insert_medication(test.accounts[1].account.id, "Ibuprofen")
            .await?;

        let result = get_medication(
            State(test.to_app_state()),
            test.session.clone(),
            Path(medication.id.to_string()),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::FORBIDDEN);

        Ok(())
    }
}

mod update_medication {
    use super::*;

    /// Expect blank fields to be ignored rather than written
    #[tokio::test]
    async fn ignores_blank_fields() -> Result<(), TestError> {
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

        let result = update_medication(
            State(test.to_app_state()),
            test.session.clone(),
            Path(medication.id.to_string()),
            Ok(Json(MedicationPayloadDto {
                dose: Some("400mg".to_string()),
                notes: Some("".to_string()),
                ..Default::default()
            })),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::OK);
        let stored = MedicationRepository::new(&test.db)
            .get(medication.id)
            .await?
            .unwrap();
        assert_eq!(stored.dose, "400mg");
        assert_eq!(stored.name, "Ibuprofen");

        Ok(())
    }
}

mod delete_medication {
    use super::*;

    /// Expect the second deactivation to conflict
    #[tokio::test]
    async fn deactivating_twice_conflicts() -> Result<(), TestError> {
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

        let first = delete_medication(
            State(test.to_app_state()),
            test.session.clone(),
            Path(medication.id.to_string()),
        )
        .await;
        assert_eq!(status_of(first), StatusCode::OK);

        let second = delete_medication(
            State(test.to_app_state()),
            test.session.clone(),
            Path(medication.id.to_string()),
        )
        .await;
        assert_eq!(status_of(second), StatusCode::CONFLICT);

        Ok(())
    }
}
