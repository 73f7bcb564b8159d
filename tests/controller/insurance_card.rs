use axum::{
    extract::{Path, State},
    Json,
};
use medlog::{
    model::insurance_card::{InsuranceCardDto, InsuranceCardPayloadDto},
    server::{
        controller::insurance_card::{
            create_insurance_card, delete_insurance_card, get_insurance_card,
            list_insurance_cards, update_insurance_card,
        },
        data::insurance_card::InsuranceCardRepository,
    },
};

use super::*;

mod create_insurance_card {
    use super::*;

    #[tokio::test]
    async fn creates_card() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;

        let result = create_insurance_card(
            State(test.to_app_state()),
            test.session.clone(),
            Ok(Json(InsuranceCardPayloadDto {
                subscriber_name: Some("Alice Smith".to_string()),
                purpose: Some("Dental".to_string()),
                ..Default::default()
            })),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::CREATED);
        let cards = InsuranceCardRepository::new(&test.db)
            .get_many_by_owner_id(test.accounts[0].account.id)
            .await?;
        assert_eq!(cards.len(), 1);

        Ok(())
    }

    /// Expect 400 when the purpose is missing
    #[tokio::test]
    async fn rejects_missing_purpose() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;

        let result = create_insurance_card(
            State(test.to_app_state()),
            test.session.clone(),
            Ok(Json(InsuranceCardPayloadDto {
                subscriber_name: Some("Alice Smith".to_string()),
                ..Default::default()
            })),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod list_insurance_cards {
    use super::*;

    #[tokio::test]
    async fn lists_cards_by_purpose() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        let home = test.accounts[0].account.id;
        sign_in(&test, &test.accounts[0]).await;
        test.resources().insert_insurance_card(home, "Vision").await?;
        test.resources().insert_insurance_card(home, "Dental").await?;

        let resp = into_response(
            list_insurance_cards(State(test.to_app_state()), test.session.clone()).await,
        );

        let cards: Vec<InsuranceCardDto> = body_json(resp).await;
        let purposes: Vec<_> = cards.into_iter().map(|c| c.purpose).collect();
        assert_eq!(purposes, vec!["Dental", "Vision"]);

        Ok(())
    }
}

mod update_insurance_card {
    use super::*;

    /// Expect 403 and the card unchanged when it belongs to another account
    #[tokio::test]
    async fn rejects_card_of_other_account() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .with_account("Other", "bob", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;
        let card = test
            .resources()
            .insert_insurance_card(test.accounts[1].account.id, "Dental")
            .await?;

        let result = update_insurance_card(
            State(test.to_app_state()),
            test.session.clone(),
            Path(card.id.to_string()),
            Ok(Json(InsuranceCardPayloadDto {
                member_id: Some("X-0".to_string()),
                ..Default::default()
            })),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::FORBIDDEN);
        let stored = InsuranceCardRepository::new(&test.db)
            .get(card.id)
            .await?
            .unwrap();
        assert_eq!(stored, card);

        Ok(())
    }
}

mod delete_insurance_card {
    use super::*;

    /// Expect the card to be gone afterwards
    #[tokio::test]
    async fn deletes_card_permanently() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;
        let card = test
            .resources()
            .insert_insurance_card(test.accounts[0].account.id, "Dental")
            .await?;

        let result = delete_insurance_card(
            State(test.to_app_state()),
            test.session.clone(),
            Path(card.id.to_string()),
        )
        .await;
        assert_eq!(status_of(result), StatusCode::OK);

        let result = get_insurance_card(
            State(test.to_app_state()),
            test.session.clone(),
            Path(card.id.to_string()),
        )
        .await;
        assert_eq!(status_of(result), StatusCode::NOT_FOUND);

        Ok(())
    }
}
