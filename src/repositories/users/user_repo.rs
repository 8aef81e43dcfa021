//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 데이터 액세스를 담당합니다.
//!
//! ## 인덱스
//!
//! - `email_unique`: 이메일 유니크 인덱스. 동시 가입 요청이 사전 조회를 모두
//!   통과하더라도 두 번째 삽입은 중복 키 오류(11000)로 거부됩니다.
//! - `created_at_desc`: 생성일 내림차순

use mongodb::bson::{doc, oid::ObjectId, DateTime};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use thiserror::Error;

use crate::domain::entities::users::User;

const COLLECTION_NAME: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 리포지토리 실패
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 유니크 인덱스 위반
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// 사용자 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(database: &mongodb::Database) -> Self {
        Self {
            collection: database.collection::<User>(COLLECTION_NAME),
        }
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// 이메일은 저장 시 소문자로 정규화되므로 호출자도 정규화된 값을 넘겨야 합니다.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }

    /// ID로 사용자 조회
    ///
    /// ObjectId 형식이 아닌 ID는 존재하지 않는 사용자와 같게 취급하여 `Ok(None)`을 반환합니다.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, RepositoryError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            log::debug!("ObjectId 형식이 아닌 사용자 ID 조회: {}", id);
            return Ok(None);
        };

        Ok(self.collection.find_one(doc! { "_id": object_id }).await?)
    }

    /// 새 사용자를 저장하고 생성된 ID를 채워서 반환합니다.
    pub async fn insert(&self, mut user: User) -> Result<User, RepositoryError> {
        let result = self.collection.insert_one(&user).await.map_err(|e| {
            if is_duplicate_key_error(&e) {
                RepositoryError::DuplicateKey(user.email.clone())
            } else {
                RepositoryError::Database(e)
            }
        })?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// 비밀번호 해시를 교체합니다. 대상이 없으면 `false`를 반환합니다.
    pub async fn update_password_hash(
        &self,
        id: &ObjectId,
        password_hash: &str,
    ) -> Result<bool, RepositoryError> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": {
                    "password_hash": password_hash,
                    "updated_at": DateTime::now(),
                } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    pub async fn create_indexes(&self) -> Result<(), RepositoryError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, created_at_index])
            .await?;

        Ok(())
    }
}

/// MongoDB 중복 키 오류(코드 11000) 여부
pub fn is_duplicate_key_error(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
