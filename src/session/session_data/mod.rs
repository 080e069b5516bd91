use serde::Deserialize;

/// Raw fields of the explorer form as posted by the browser.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct SessionData {
    pub action: String,
    pub client_id: String,
    pub secret: String,
    pub jwt: String,
    pub params: String,
}

impl SessionData {
    /// Trims every field and substitutes `{}` for blank params.
    pub fn normalized(self) -> Self {
        let params = self.params.trim();
        SessionData {
            action: self.action.trim().to_string(),
            client_id: self.client_id.trim().to_string(),
            secret: self.secret.trim().to_string(),
            jwt: self.jwt.trim().to_string(),
            params: if params.is_empty() {
                "{}".to_string()
            } else {
                params.to_string()
            },
        }
    }
}
