//! Property tests for login validation and token issuance

use std::sync::Arc;

use proptest::prelude::*;

use authgate::backend::auth::handlers::LoginRequest;
use authgate::backend::auth::validation::is_valid_email;
use authgate::backend::auth::{AuthService, MemoryUserStore, SessionKeys};
use authgate::backend::error::BackendError;

use crate::common::{create_test_user, TEST_BCRYPT_COST};

fn service(store: &MemoryUserStore) -> AuthService {
    AuthService::new(
        Arc::new(store.clone()),
        SessionKeys::new("proptest-secret"),
        TEST_BCRYPT_COST,
    )
}

proptest! {
    #[test]
    fn prop_invalid_email_never_hits_store(
        email in "[a-z0-9 .@]{0,24}",
        password in "[a-zA-Z0-9]{1,16}",
    ) {
        prop_assume!(!is_valid_email(&email));

        let store = MemoryUserStore::new();
        let request = LoginRequest { email: Some(email.into()), password: Some(password.into()) };
        let result = tokio_test::block_on(service(&store).login(&request));

        prop_assert!(matches!(result, Err(BackendError::Validation(_))));
        prop_assert_eq!(store.lookup_count(), 0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_valid_login_token_names_user(
        local in "[a-z][a-z0-9]{0,10}",
        domain in "[a-z]{1,10}",
        password in "[a-zA-Z0-9!#]{1,20}",
    ) {
        let email = format!("{}@{}.com", local, domain);
        let store = MemoryUserStore::new();
        let service = service(&store);

        let (user_id, claims) = tokio_test::block_on(async {
            let user = create_test_user(&store, &email, &password).await.unwrap();
            let request = LoginRequest {
                email: Some(email.clone().into()),
                password: Some(password.clone().into()),
            };
            let token = service.login(&request).await.unwrap();
            (user.id, service.keys().verify(&token).unwrap())
        });

        prop_assert_eq!(claims.user.id, user_id);
    }
}
