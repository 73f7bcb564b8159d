use axum::{extract::State, Json};
use medlog::{
    model::account::{AccountMessageDto, AccountSessionDto, CredentialDto, DeleteCredentialDto},
    server::{
        controller::credential::{add_credential, delete_credential, update_credential},
        data::account::credential::CredentialRepository,
        model::session::SessionIdentity,
    },
};

use super::*;

fn credential_dto(username: Option<&str>, password: Option<&str>) -> CredentialDto {
    CredentialDto {
        username: username.map(str::to_string),
        password: password.map(str::to_string),
    }
}

mod add_credential {
    use super::*;

    /// Expect the new username to be listed on the account
    #[tokio::test]
    async fn adds_credential_to_account() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;

        let resp = into_response(
            add_credential(
                State(test.to_app_state()),
                test.session.clone(),
                Ok(Json(credential_dto(Some("bob"), Some("secret2")))),
            )
            .await,
        );

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: AccountMessageDto = body_json(resp).await;
        let account = body.account.unwrap();
        assert_eq!(account.credentials, vec!["alice".to_string(), "bob".to_string()]);

        Ok(())
    }

    /// Expect 409 when another credential holds the username in any case
    #[tokio::test]
    async fn rejects_taken_username() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .with_account("Other", "Bob", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;

        let result = add_credential(
            State(test.to_app_state()),
            test.session.clone(),
            Ok(Json(credential_dto(Some("bob"), Some("secret2")))),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::CONFLICT);

        Ok(())
    }

    /// Expect 401 and nothing written when nobody is signed in
    #[tokio::test]
    async fn rejects_anonymous_session() -> Result<(), TestError> {
        let test = test_setup_with_medlog_tables!()?;

        let result = add_credential(
            State(test.to_app_state()),
            test.session.clone(),
            Ok(Json(credential_dto(Some("bob"), Some("secret2")))),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::UNAUTHORIZED);
        assert!(CredentialRepository::new(&test.db)
            .find_by_username("bob")
            .await?
            .is_none());

        Ok(())
    }
}

mod update_credential {
    use super::*;

    /// Expect a case-only rename of the signed in credential to succeed
    #[tokio::test]
    async fn renames_username_case_only() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "Bob", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;

        let resp = into_response(
            update_credential(
                State(test.to_app_state()),
                test.session.clone(),
                Ok(Json(credential_dto(Some("bob"), None))),
            )
            .await,
        );

        assert_eq!(resp.status(), StatusCode::OK);
        let body: AccountSessionDto = body_json(resp).await;
        assert_eq!(body.username, "bob");

        let credential = CredentialRepository::new(&test.db)
            .get(test.accounts[0].credential.id)
            .await?
            .unwrap();
        assert_eq!(credential.username, "bob");
        assert_eq!(credential.password, "secret1");

        Ok(())
    }

    /// Expect 400 when neither username nor password is given
    #[tokio::test]
    async fn rejects_empty_update() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;

        let result = update_credential(
            State(test.to_app_state()),
            test.session.clone(),
            Ok(Json(credential_dto(None, None))),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod delete_credential {
    use super::*;

    fn delete_dto(username: &str) -> DeleteCredentialDto {
        DeleteCredentialDto {
            username: Some(username.to_string()),
        }
    }

    /// Expect deleting the signed in credential to sign out and return a null account
    #[tokio::test]
    async fn deleting_own_credential_signs_out() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;

        let resp = into_response(
            delete_credential(
                State(test.to_app_state()),
                test.session.clone(),
                Ok(Json(delete_dto("alice"))),
            )
            .await,
        );

        assert_eq!(resp.status(), StatusCode::OK);
        let body: AccountMessageDto = body_json(resp).await;
        assert!(body.account.is_none());
        assert!(SessionIdentity::get(&test.session).await.unwrap().is_none());

        Ok(())
    }

    /// Expect the session to stay signed in when another credential is deleted
    #[tokio::test]
    async fn deletes_other_credential_of_account() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        let seeded = &test.accounts[0];
        test.account()
            .insert_credential(seeded.account.id, "bob", "secret2")
            .await?;
        sign_in(&test, seeded).await;

        let resp = into_response(
            delete_credential(
                State(test.to_app_state()),
                test.session.clone(),
                Ok(Json(delete_dto("BOB"))),
            )
            .await,
        );

        assert_eq!(resp.status(), StatusCode::OK);
        let body: AccountMessageDto = body_json(resp).await;
        assert_eq!(body.account.unwrap().credentials, vec!["alice".to_string()]);
        assert!(SessionIdentity::get(&test.session).await.unwrap().is_some());

        Ok(())
    }

    /// Expect 403 and the credential kept when it belongs to another account
    #[tokio::test]
    async fn rejects_credential_of_other_account() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .with_account("Other", "bob", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;

        let result = delete_credential(
            State(test.to_app_state()),
            test.session.clone(),
            Ok(Json(delete_dto("bob"))),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::FORBIDDEN);
        assert!(CredentialRepository::new(&test.db)
            .get(test.accounts[1].credential.id)
            .await?
            .is_some());

        Ok(())
    }

    #[tokio::test]
    async fn rejects_unknown_username() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_medlog_tables()
            .with_account("Home", "alice", "secret1")
            .build()
            .await?;
        sign_in(&test, &test.accounts[0]).await;

        let result = delete_credential(
            State(test.to_app_state()),
            test.session.clone(),
            Ok(Json(delete_dto("nobody"))),
        )
        .await;

        assert_eq!(status_of(result), StatusCode::NOT_FOUND);

        Ok(())
    }
}
