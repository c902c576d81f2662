/// Login form payload. The brand code scopes the account to one franchise
/// brand; it is uppercased at the input boundary.
#[derive(Clone, Debug, Default)]
pub struct Credentials {
    pub brand_code: String,
    pub email: String,
    pub password: String,
}
