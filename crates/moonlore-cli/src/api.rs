//! Moonlore API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// API Client for the Moonlore server
pub struct MoonloreClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityView {
    pub id: String,
    pub name: String,
    pub rarity: u8,
    pub attack_type: String,
    pub sin_affinity: Vec<String>,
    pub tier: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SinnerView {
    pub id: String,
    pub name: String,
    pub number: u8,
    pub quote: String,
    pub identities: Vec<IdentityView>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EgoView {
    pub name: String,
    pub sinner_name: String,
    pub grade: String,
    pub tier: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbnormalityView {
    pub name: String,
    pub code: String,
    pub risk_level: String,
    pub damage_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub team: Vec<IdentityView>,
    pub analysis: String,
    pub synergies: Vec<String>,
    #[serde(rename = "suggestedEGOs")]
    pub suggested_egos: Vec<EgoView>,
    pub score: u32,
}

#[derive(Debug, Deserialize)]
pub struct LoreChatResponse {
    pub answer: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub access_token: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecommendRequest<'a> {
    owned_identities: &'a [String],
    scenario: &'a str,
}

#[derive(Debug, Serialize)]
struct LoreChatRequest<'a> {
    question: &'a str,
    game: &'a str,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl MoonloreClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Exchange credentials for a session
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionResponse> {
        let url = format!("{}/api/auth/login", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .await
            .context("Failed to connect to Moonlore API")?;

        Self::parse(resp).await
    }

    /// Resolve the current account
    pub async fn user(&self, access_token: &str) -> Result<UserResponse> {
        let url = format!("{}/api/auth/user", self.base_url);
        let resp = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
            .context("Failed to connect to Moonlore API")?;

        Self::parse(resp).await
    }

    /// Invalidate the current session
    pub async fn logout(&self, access_token: &str) -> Result<()> {
        let url = format!("{}/api/auth/logout", self.base_url);
        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
            .context("Failed to connect to Moonlore API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        Ok(())
    }

    /// Request a team recommendation
    pub async fn recommend(
        &self,
        owned: &[String],
        scenario: &str,
    ) -> Result<RecommendationResponse> {
        let url = format!("{}/api/ai/recommend", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&RecommendRequest {
                owned_identities: owned,
                scenario,
            })
            .send()
            .await
            .context("Failed to connect to Moonlore API")?;

        Self::parse(resp).await
    }

    /// Ask a lore question
    pub async fn ask(&self, question: &str) -> Result<LoreChatResponse> {
        let url = format!("{}/api/ai/lore-chat", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&LoreChatRequest {
                question,
                game: "library-of-ruina",
            })
            .send()
            .await
            .context("Failed to connect to Moonlore API")?;

        Self::parse(resp).await
    }

    /// List all sinners
    pub async fn sinners(&self) -> Result<Vec<SinnerView>> {
        let url = format!("{}/api/limbus/sinners", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Moonlore API")?;

        Self::parse(resp).await
    }

    /// List identities with optional filters
    pub async fn identities(&self, filters: &[(&str, &str)]) -> Result<Vec<IdentityView>> {
        let url = format!("{}/api/limbus/identities", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(filters)
            .send()
            .await
            .context("Failed to connect to Moonlore API")?;

        Self::parse(resp).await
    }

    /// List abnormalities with optional filters
    pub async fn abnormalities(&self, filters: &[(&str, &str)]) -> Result<Vec<AbnormalityView>> {
        let url = format!("{}/api/lobcorp/abnormalities", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(filters)
            .send()
            .await
            .context("Failed to connect to Moonlore API")?;

        Self::parse(resp).await
    }

    /// List E.G.O. with optional filters
    pub async fn egos(&self, filters: &[(&str, &str)]) -> Result<Vec<EgoView>> {
        let url = format!("{}/api/limbus/egos", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(filters)
            .send()
            .await
            .context("Failed to connect to Moonlore API")?;

        Self::parse(resp).await
    }

    async fn parse<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }
}
