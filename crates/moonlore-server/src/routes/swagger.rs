//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::models::{
    AbnormalityView,
    AnalyzeTeamRequest,
    AttackTypeCounts,
    CharacterView,
    EgoView,
    EventView,
    FactionView,
    GiftBuildView,
    IdentityView,
    LoginRequest,
    LoreChatRequest,
    LoreChatResponse,
    MirrorDungeonView,
    MirrorFloorView,
    // AI models
    RecommendRequest,
    SephirahView,
    SessionResponse,
    // Limbus models
    SinnerView,
    // Auth models
    SignupRequest,
    SignupResponse,
    TeamAnalysisResponse,
    TeamPreferences,
    TeamRecommendationResponse,
    UserResponse,
    WorkPreferenceView,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // AI endpoints
        super::ai::recommend,
        super::ai::analyze_team,
        super::ai::lore_chat,
        // Limbus endpoints
        super::limbus::list_sinners,
        super::limbus::get_sinner,
        super::limbus::list_identities,
        super::limbus::list_egos,
        super::limbus::mirror_dungeon,
        // LobCorp endpoints
        super::lobcorp::list_abnormalities,
        super::lobcorp::get_abnormality,
        super::lobcorp::list_sephirahs,
        super::lobcorp::get_sephirah,
        // Ruina endpoints
        super::ruina::list_characters,
        super::ruina::get_character,
        super::ruina::list_factions,
        super::ruina::list_events,
        // Auth endpoints
        super::auth::signup,
        super::auth::login,
        super::auth::current_user,
        super::auth::logout,
    ),
    info(
        title = "Moonlore API",
        version = "0.1.0",
        description = "Project Moon fan-content backend: lore catalogs, tier data, rule-based team recommendation, and account proxy for Lobotomy Corporation / Library of Ruina / Limbus Company.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "AI", description = "Rule-based team recommendation and lore Q&A"),
        (name = "Limbus", description = "Limbus Company roster and Mirror Dungeon guide"),
        (name = "LobCorp", description = "Lobotomy Corporation abnormalities and sephirahs"),
        (name = "Ruina", description = "Library of Ruina lore database"),
        (name = "Auth", description = "Account operations proxied to the auth provider"),
    ),
    components(
        schemas(
            // AI
            RecommendRequest,
            TeamPreferences,
            TeamRecommendationResponse,
            AnalyzeTeamRequest,
            AttackTypeCounts,
            TeamAnalysisResponse,
            LoreChatRequest,
            LoreChatResponse,
            // Limbus
            SinnerView,
            IdentityView,
            EgoView,
            MirrorFloorView,
            GiftBuildView,
            MirrorDungeonView,
            // LobCorp
            AbnormalityView,
            WorkPreferenceView,
            SephirahView,
            // Ruina
            CharacterView,
            FactionView,
            EventView,
            // Auth
            SignupRequest,
            SignupResponse,
            LoginRequest,
            SessionResponse,
            UserResponse,
            // Errors
            ErrorBody,
        )
    ),
)]
pub struct ApiDoc;
