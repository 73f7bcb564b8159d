use axum::{extract::State, Json};
use medlog::{
    model::account::{AccountSessionDto, SessionInfoDto, SignInDto, SignUpDto, UpdateAccountDto},
    server::{
        controller::account::{
            delete_account, get_session, sign_in as sign_in_handler, sign_out, sign_up,
            update_account,
        },
        data::account::AccountRepository,
        model::session::SessionIdentity,
    },
};

use super::*;

fn sign_up_dto(name: &str, username: &str, password: &str) -> SignUpDto {
    SignUpDto {
        name: Some(name.to_string()),
        username: Some(username.to_string()),
        password: Some(password.to_string()),
    }
}

mod get_session {
    use super::*;

    /// Expect null account & username for an anonymous session
    #[tokio::test]
    async fn anonymous_session() -> Result<(), TestError> {
        let test = test_setup_with_medlog_tables!()?;

        let resp = into_response(get_session(State(test.to_app_state()), test.session.clone()).await);

        assert_eq!(resp.status(), StatusCode::OK);
        let body: SessionInfoDto = body_json(resp).await;
        assert!(body.account.is_none());
        assert!(body.username.is_none());

        Ok(())
    }
}

mod sign_up {
    use super::*;

    /// Expect sign-up to create the account and sign in, with the username's case preserved
    #[tokio::test]
    async fn signs_up_and_reports_session() -> Result<(), TestError> {
        let test = test_setup_with_medlog_tables!()?;

        let resp = into_response(
            sign_up(
                State(test.to_app_state()),
                test.session.clone(),
                Ok(Json(sign_up_dto("Smith household", "Alice", "secret1"))),
            )
            .await,
        );
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: AccountSessionDto = body_json(resp).await;

        let resp = into_response(get_session(State(test.to_app_state()), test.session.clone()).await);
        assert_eq!(resp.status(), StatusCode::OK);

        let body: SessionInfoDto = body_json(resp).await;
        let account = body.account.expect("session should carry the account");
        assert_eq!(account.id, created.account.id);
        assert_eq!(account.name, "Smith household");
        assert_eq!(account.credentials, vec!["Alice".to_string()]);
        assert_eq!(body.username.as_deref(), Some("Alice"));

        Ok(())
    }

    /// Expect 409 when the username differs from an existing one only by case
    #[tokio::test]
    async fn rejects_username_taken_in_other_case() -> Result<(), TestError> {
        let test = test_setup_with_medlog_tables!()?;

        let first = sign_up(
            State(test.to_app_state()),
            test.session.clone(),
            Ok(Json(sign_up_dto("First", "Bob", "secret1"))),
        )
        .await;
        assert_eq!(status_of(first), StatusCode::CREATED);

        SessionIdentity::clear(&test.session).await.unwrap();

        let second = sign_up(
            State(test.to_app_state()),
            test.session.clone(),
            Ok(Json(sign_up_dto("Second", "BOB", "secret2"))),
        )
        .await;
        assert_eq!(status_of(second), StatusCode::CONFLICT);

        Ok(())
    }

    /// Expect 403 when already signed in
    #[tokio::test]
    async fn rejects_signed_in_session() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;

        let result = sign_up(
            State(test.to_app_state()),
            test.session.clone(),
            Ok(Json(sign_up_dto("Other", "carol", "secret1"))),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Expect 400 when the name is blank
    #[tokio::test]
    async fn rejects_blank_name() -> Result<(), TestError> {
        let test = test_setup_with_medlog_tables!()?;

        let result = sign_up(
            State(test.to_app_state()),
            test.session.clone(),
            Ok(Json(sign_up_dto("   ", "alice", "secret1"))),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::BAD_REQUEST);
        assert!(SessionIdentity::get(&test.session).await.unwrap().is_none());

        Ok(())
    }
}

mod sign_in {
    use super::*;

    fn sign_in_dto(username: &str, password: &str) -> SignInDto {
        SignInDto {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        }
    }

    /// Expect the username to match case-insensitively
    #[tokio::test]
    async fn signs_in_ignoring_username_case() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "Alice", "secret1")
            .build()
            .await?;

        let resp = into_response(
            sign_in_handler(
                State(test.to_app_state()),
                test.session.clone(),
                Ok(Json(sign_in_dto("alice", "secret1"))),
            )
            .await,
        );

        assert_eq!(resp.status(), StatusCode::CREATED);
        let identity = SessionIdentity::get(&test.session).await.unwrap().unwrap();
        assert_eq!(identity.credential_id, test.accounts[0].credential.id);

        Ok(())
    }

    /// Expect 401 for a wrong password and no identity in the session
    #[tokio::test]
    async fn rejects_wrong_password() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;

        let result = sign_in_handler(
            State(test.to_app_state()),
            test.session.clone(),
            Ok(Json(sign_in_dto("alice", "secret2"))),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::UNAUTHORIZED);
        assert!(SessionIdentity::get(&test.session).await.unwrap().is_none());

        Ok(())
    }
}

mod sign_out {
    use super::*;

    #[tokio::test]
    async fn clears_session() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;

        let result = sign_out(test.session.clone()).await;

        assert_eq!(status_of(result), StatusCode::OK);
        assert!(SessionIdentity::get(&test.session).await.unwrap().is_none());

        Ok(())
    }

    /// Expect 401 when nobody is signed in
    #[tokio::test]
    async fn rejects_anonymous_session() -> Result<(), TestError> {
        let test = test_setup_with_medlog_tables!()?;

        let result = sign_out(test.session.clone()).await;

        assert_eq!(status_of(result), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod update_account {
    use super::*;

    #[tokio::test]
    async fn renames_account() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        let seeded = &test.accounts[0];
        sign_in(&test, seeded).await;

        let result = update_account(
            State(test.to_app_state()),
            test.session.clone(),
            Ok(Json(UpdateAccountDto {
                name: Some("Cottage".to_string()),
            })),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::OK);
        let account = AccountRepository::new(&test.db)
            .get(seeded.account.id)
            .await?
            .unwrap();
        assert_eq!(account.name, "Cottage");

        Ok(())
    }

    /// Expect 401 and the name unchanged when nobody is signed in
    #[tokio::test]
    async fn rejects_anonymous_session() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;

        let result = update_account(
            State(test.to_app_state()),
            test.session.clone(),
            Ok(Json(UpdateAccountDto {
                name: Some("Cottage".to_string()),
            })),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::UNAUTHORIZED);
        let account = AccountRepository::new(&test.db)
            .get(test.accounts[0].account.id)
            .await?
            .unwrap();
        assert_eq!(account.name, "Home");

        Ok(())
    }
}

mod delete_account {
    use super::*;

    /// Expect the account to be removed and the session cleared
    #[tokio::test]
    async fn deletes_account_and_signs_out() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        let seeded = &test.accounts[0];
        sign_in(&test, seeded).await;
        test.resources()
            .insert_medication(seeded.account.id, "Ibuprofen")
            .await?;

        let result = delete_account(State(test.to_app_state()), test.session.clone()).await;

        assert_eq!(status_of(result), StatusCode::OK);
        assert!(AccountRepository::new(&test.db)
            .get(seeded.account.id)
            .await?
            .is_none());
        assert!(SessionIdentity::get(&test.session).await.unwrap().is_none());

        Ok(())
    }
}
