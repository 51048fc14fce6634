use serde::Deserialize;

/// Request body for POST /user and PUT /user/{id}. The password arrives as
/// plaintext and is hashed before it touches the database.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub email: String,
    pub password: String,
}
