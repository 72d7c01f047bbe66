//! User account business logic.
//!
//! Provides account lookup, credential verification for the Basic auth
//! layer, and seeding of the accounts declared in config.toml. There is no
//! self-service registration: accounts (and their starting rose balances)
//! are provisioned by configuration.

use crate::{
    config::users::UserConfig,
    entities::{User, user},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use tracing::{info, warn};

/// Role string that unlocks marketplace item management.
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// Default role for regular portal users.
pub const ROLE_STUDENT: &str = "ROLE_STUDENT";

/// Finds a user by exact username.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_user_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Option<user::Model>> {
    User::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Verifies a username/password pair and returns the matching account.
///
/// Unknown usernames and wrong passwords are indistinguishable to the caller:
/// both yield [`Error::Unauthorized`].
///
/// # Errors
/// Returns `Error::Unauthorized` on credential mismatch, or a database error.
pub async fn verify_credentials(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<user::Model> {
    let user = get_user_by_username(db, username)
        .await?
        .ok_or(Error::Unauthorized)?;

    if user.password != password {
        return Err(Error::Unauthorized);
    }

    Ok(user)
}

/// Creates a new user account, performing input validation.
///
/// # Errors
/// Returns an error if:
/// - The username is empty or whitespace-only
/// - The role is not `ROLE_ADMIN` or `ROLE_STUDENT`
/// - The starting balance is negative
/// - The database insert fails (e.g. duplicate username)
pub async fn create_user(
    db: &DatabaseConnection,
    username: String,
    password: String,
    role: String,
    roses: i64,
) -> Result<user::Model> {
    if username.trim().is_empty() {
        return Err(Error::Validation {
            message: "Username cannot be empty".to_string(),
        });
    }

    if role != ROLE_ADMIN && role != ROLE_STUDENT {
        return Err(Error::Validation {
            message: format!("Unknown role '{role}'"),
        });
    }

    if roses < 0 {
        return Err(Error::InvalidAmount { amount: roses });
    }

    let user = user::ActiveModel {
        username: Set(username.trim().to_string()),
        password: Set(password),
        role: Set(role),
        rose_balance: Set(roses),
        ..Default::default()
    };

    user.insert(db).await.map_err(Into::into)
}

/// Seeds the accounts declared in config.toml.
///
/// Entries whose username already exists are skipped, so re-running on an
/// existing database never resets a balance or password.
///
/// # Errors
/// Returns an error if a seed entry is invalid or an insert fails.
pub async fn seed_initial_users(db: &DatabaseConnection, seeds: &[UserConfig]) -> Result<()> {
    info!("Seeding initial users ({} configured).", seeds.len());

    for seed in seeds {
        if get_user_by_username(db, &seed.username).await?.is_some() {
            warn!("User '{}' already exists. Skipping.", seed.username);
            continue;
        }

        create_user(
            db,
            seed.username.clone(),
            seed.password.clone(),
            seed.role.clone(),
            seed.roses,
        )
        .await?;
        info!(
            "Seeded user '{}' with role {} and {} roses",
            seed.username, seed.role, seed.roses
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_user_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_user(
            &db,
            String::new(),
            "pw".to_string(),
            ROLE_STUDENT.to_string(),
            10,
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { message: _ }
        ));

        let result = create_user(
            &db,
            "maria".to_string(),
            "pw".to_string(),
            "ROLE_WIZARD".to_string(),
            10,
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { message: _ }
        ));

        let result = create_user(
            &db,
            "maria".to_string(),
            "pw".to_string(),
            ROLE_STUDENT.to_string(),
            -1,
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount: -1 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "maria", 10).await?;

        let duplicate = create_user(
            &db,
            "maria".to_string(),
            "other".to_string(),
            ROLE_STUDENT.to_string(),
            0,
        )
        .await;
        assert!(duplicate.is_err(), "duplicate username should fail");

        Ok(())
    }

    #[tokio::test]
    async fn test_verify_credentials() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "maria", 10).await?;

        let user = verify_credentials(&db, "maria", TEST_PASSWORD).await?;
        assert_eq!(user.username, "maria");
        assert_eq!(user.rose_balance, 10);

        let wrong_password = verify_credentials(&db, "maria", "not-it").await;
        assert!(matches!(wrong_password.unwrap_err(), Error::Unauthorized));

        let unknown_user = verify_credentials(&db, "ghost", TEST_PASSWORD).await;
        assert!(matches!(unknown_user.unwrap_err(), Error::Unauthorized));

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_skips_existing_users() -> Result<()> {
        let db = setup_test_db().await?;

        let seeds = vec![
            UserConfig {
                username: "admin".to_string(),
                password: "pw".to_string(),
                role: ROLE_ADMIN.to_string(),
                roses: 0,
            },
            UserConfig {
                username: "maria".to_string(),
                password: "pw".to_string(),
                role: ROLE_STUDENT.to_string(),
                roses: 50,
            },
        ];

        seed_initial_users(&db, &seeds).await?;
        let maria = get_user_by_username(&db, "maria").await?.unwrap();
        assert_eq!(maria.rose_balance, 50);

        // Re-seeding with a different balance must not clobber the account
        let reseeded = vec![UserConfig {
            username: "maria".to_string(),
            password: "pw".to_string(),
            role: ROLE_STUDENT.to_string(),
            roses: 999,
        }];
        seed_initial_users(&db, &reseeded).await?;

        let maria = get_user_by_username(&db, "maria").await?.unwrap();
        assert_eq!(maria.rose_balance, 50, "existing balance must be kept");

        Ok(())
    }
}
