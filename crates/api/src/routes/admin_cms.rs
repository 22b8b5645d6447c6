//! Admin CMS writes.
//!
//! All handlers here sit behind the `require_admin` middleware. Singleton
//! updates are atomic upserts; collection deletes are soft except media,
//! whose rows nothing else references once removed.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::landing::{
    CreateBlockRequest, CreateFocusItemRequest, CreatePartnerRequest, CreateSectionRequest,
    CreateStatRequest, CreateTeamMemberRequest, CreateTestimonialRequest, FocusItem,
    LandingSection, LandingTestimonial, Partner, SectionBlock, SiteStat, TeamMember,
    UpdateBlockRequest, UpdateFocusItemRequest, UpdatePartnerRequest, UpdateSectionRequest,
    UpdateStatRequest, UpdateTeamMemberRequest, UpdateTestimonialRequest,
};
use domain::models::media::CreateMediaAssetRequest;
use domain::models::settings::{
    AboutSettings, ContactSettings, FooterSettings, HeroSettings, NavbarSettings, PartnerSettings,
    PresidentMessageSettings, SeoSettings, ThemeSettings, UpdateAboutSettingsRequest,
    UpdateContactSettingsRequest, UpdateFooterSettingsRequest, UpdateHeroSettingsRequest,
    UpdateNavbarSettingsRequest, UpdatePartnerSettingsRequest,
    UpdatePresidentMessageSettingsRequest, UpdateSeoSettingsRequest, UpdateThemeSettingsRequest,
};
use domain::models::{ListResponse, MediaAsset};
use persistence::repositories::{
    FocusItemRepository, MediaAssetRepository, PartnerRepository, SectionRepository,
    SettingsRepository, SiteStatRepository, TeamMemberRepository, TestimonialRepository,
};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::SessionUser;

// =============================================================================
// Singleton settings
// =============================================================================

/// PUT /api/admin/cms/hero
pub async fn update_hero(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<UpdateHeroSettingsRequest>,
) -> Result<Json<HeroSettings>, ApiError> {
    request.validate()?;
    let settings = SettingsRepository::new(state.pool.clone())
        .upsert_hero(&request, Some(user.user_id))
        .await?;
    Ok(Json(settings))
}

/// PUT /api/admin/cms/navbar
pub async fn update_navbar(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<UpdateNavbarSettingsRequest>,
) -> Result<Json<NavbarSettings>, ApiError> {
    request.validate()?;
    let settings = SettingsRepository::new(state.pool.clone())
        .upsert_navbar(&request, Some(user.user_id))
        .await?;
    Ok(Json(settings))
}

/// PUT /api/admin/cms/theme
pub async fn update_theme(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<UpdateThemeSettingsRequest>,
) -> Result<Json<ThemeSettings>, ApiError> {
    request.validate()?;
    let settings = SettingsRepository::new(state.pool.clone())
        .upsert_theme(&request, Some(user.user_id))
        .await?;
    Ok(Json(settings))
}

/// PUT /api/admin/cms/contact
pub async fn update_contact(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<UpdateContactSettingsRequest>,
) -> Result<Json<ContactSettings>, ApiError> {
    request.validate()?;
    let settings = SettingsRepository::new(state.pool.clone())
        .upsert_contact(&request, Some(user.user_id))
        .await?;
    Ok(Json(settings))
}

/// PUT /api/admin/cms/footer
pub async fn update_footer(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<UpdateFooterSettingsRequest>,
) -> Result<Json<FooterSettings>, ApiError> {
    request.validate()?;
    let settings = SettingsRepository::new(state.pool.clone())
        .upsert_footer(&request, Some(user.user_id))
        .await?;
    Ok(Json(settings))
}

/// PUT /api/admin/cms/seo
pub async fn update_seo(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<UpdateSeoSettingsRequest>,
) -> Result<Json<SeoSettings>, ApiError> {
    request.validate()?;
    let settings = SettingsRepository::new(state.pool.clone())
        .upsert_seo(&request, Some(user.user_id))
        .await?;
    Ok(Json(settings))
}

/// PUT /api/admin/cms/about
pub async fn update_about(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<UpdateAboutSettingsRequest>,
) -> Result<Json<AboutSettings>, ApiError> {
    request.validate()?;
    let settings = SettingsRepository::new(state.pool.clone())
        .upsert_about(&request, Some(user.user_id))
        .await?;
    Ok(Json(settings))
}

/// PUT /api/admin/cms/president-message
pub async fn update_president_message(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<UpdatePresidentMessageSettingsRequest>,
) -> Result<Json<PresidentMessageSettings>, ApiError> {
    request.validate()?;
    let settings = SettingsRepository::new(state.pool.clone())
        .upsert_president_message(&request, Some(user.user_id))
        .await?;
    Ok(Json(settings))
}

/// PUT /api/admin/cms/partner-settings
pub async fn update_partner_settings(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<UpdatePartnerSettingsRequest>,
) -> Result<Json<PartnerSettings>, ApiError> {
    request.validate()?;
    let settings = SettingsRepository::new(state.pool.clone())
        .upsert_partner_settings(&request, Some(user.user_id))
        .await?;
    Ok(Json(settings))
}

// =============================================================================
// Landing sections and blocks
// =============================================================================

/// POST /api/admin/cms/sections
pub async fn create_section(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<CreateSectionRequest>,
) -> Result<(StatusCode, Json<LandingSection>), ApiError> {
    request.validate()?;
    let section = SectionRepository::new(state.pool.clone())
        .create(&request, Some(user.user_id))
        .await?;
    Ok((StatusCode::CREATED, Json(section)))
}

/// PUT /api/admin/cms/sections/:id
pub async fn update_section(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateSectionRequest>,
) -> Result<Json<LandingSection>, ApiError> {
    request.validate()?;
    let section = SectionRepository::new(state.pool.clone())
        .update(id, &request, Some(user.user_id))
        .await?;
    Ok(Json(section))
}

/// DELETE /api/admin/cms/sections/:id
pub async fn delete_section(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let deleted = SectionRepository::new(state.pool.clone()).delete(id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Section not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/admin/cms/blocks
pub async fn create_block(
    State(state): State<AppState>,
    Json(request): Json<CreateBlockRequest>,
) -> Result<(StatusCode, Json<SectionBlock>), ApiError> {
    request.validate()?;

    let repo = SectionRepository::new(state.pool.clone());
    repo.find_by_id(request.section_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Section not found".to_string()))?;

    let block = repo.create_block(&request).await?;
    Ok((StatusCode::CREATED, Json(block)))
}

/// PUT /api/admin/cms/blocks/:id
pub async fn update_block(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateBlockRequest>,
) -> Result<Json<SectionBlock>, ApiError> {
    request.validate()?;
    let block = SectionRepository::new(state.pool.clone())
        .update_block(id, &request)
        .await?;
    Ok(Json(block))
}

/// DELETE /api/admin/cms/blocks/:id
pub async fn delete_block(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let deleted = SectionRepository::new(state.pool.clone())
        .delete_block(id)
        .await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Block not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Focus items
// =============================================================================

/// POST /api/admin/cms/focus-items
pub async fn create_focus_item(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<CreateFocusItemRequest>,
) -> Result<(StatusCode, Json<FocusItem>), ApiError> {
    request.validate()?;
    let item = FocusItemRepository::new(state.pool.clone())
        .create(&request, Some(user.user_id))
        .await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/admin/cms/focus-items/:id
pub async fn update_focus_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateFocusItemRequest>,
) -> Result<Json<FocusItem>, ApiError> {
    request.validate()?;
    let item = FocusItemRepository::new(state.pool.clone())
        .update(id, &request)
        .await?;
    Ok(Json(item))
}

/// DELETE /api/admin/cms/focus-items/:id
pub async fn delete_focus_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let deleted = FocusItemRepository::new(state.pool.clone())
        .delete(id)
        .await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Focus item not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Team members
// =============================================================================

/// POST /api/admin/cms/team-members
pub async fn create_team_member(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<CreateTeamMemberRequest>,
) -> Result<(StatusCode, Json<TeamMember>), ApiError> {
    request.validate()?;
    let member = TeamMemberRepository::new(state.pool.clone())
        .create(&request, Some(user.user_id))
        .await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// PUT /api/admin/cms/team-members/:id
pub async fn update_team_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateTeamMemberRequest>,
) -> Result<Json<TeamMember>, ApiError> {
    request.validate()?;
    let member = TeamMemberRepository::new(state.pool.clone())
        .update(id, &request)
        .await?;
    Ok(Json(member))
}

/// DELETE /api/admin/cms/team-members/:id
pub async fn delete_team_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let deleted = TeamMemberRepository::new(state.pool.clone())
        .delete(id)
        .await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Team member not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Testimonials
// =============================================================================

/// GET /api/admin/cms/testimonials (includes unapproved entries)
pub async fn admin_list_testimonials(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<LandingTestimonial>>, ApiError> {
    let testimonials = TestimonialRepository::new(state.pool.clone())
        .list_admin()
        .await?;
    Ok(Json(ListResponse::new(testimonials)))
}

/// POST /api/admin/cms/testimonials
pub async fn create_testimonial(
    State(state): State<AppState>,
    Json(request): Json<CreateTestimonialRequest>,
) -> Result<(StatusCode, Json<LandingTestimonial>), ApiError> {
    request.validate()?;
    let testimonial = TestimonialRepository::new(state.pool.clone())
        .create(&request)
        .await?;
    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// PUT /api/admin/cms/testimonials/:id
pub async fn update_testimonial(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateTestimonialRequest>,
) -> Result<Json<LandingTestimonial>, ApiError> {
    request.validate()?;
    let testimonial = TestimonialRepository::new(state.pool.clone())
        .update(id, &request)
        .await?;
    Ok(Json(testimonial))
}

/// DELETE /api/admin/cms/testimonials/:id
pub async fn delete_testimonial(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let deleted = TestimonialRepository::new(state.pool.clone())
        .delete(id)
        .await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Testimonial not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Site stats
// =============================================================================

/// POST /api/admin/cms/stats
pub async fn create_stat(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<CreateStatRequest>,
) -> Result<(StatusCode, Json<SiteStat>), ApiError> {
    request.validate()?;
    let stat = SiteStatRepository::new(state.pool.clone())
        .create(&request, Some(user.user_id))
        .await?;
    Ok((StatusCode::CREATED, Json(stat)))
}

/// PUT /api/admin/cms/stats/:id
pub async fn update_stat(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateStatRequest>,
) -> Result<Json<SiteStat>, ApiError> {
    request.validate()?;
    let stat = SiteStatRepository::new(state.pool.clone())
        .update(id, &request, Some(user.user_id))
        .await?;
    Ok(Json(stat))
}

/// DELETE /api/admin/cms/stats/:id
pub async fn delete_stat(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let deleted = SiteStatRepository::new(state.pool.clone()).delete(id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Stat not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Partners
// =============================================================================

/// POST /api/admin/cms/partners
pub async fn create_partner(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<CreatePartnerRequest>,
) -> Result<(StatusCode, Json<Partner>), ApiError> {
    request.validate()?;
    let partner = PartnerRepository::new(state.pool.clone())
        .create(&request, Some(user.user_id))
        .await?;
    Ok((StatusCode::CREATED, Json(partner)))
}

/// PUT /api/admin/cms/partners/:id
pub async fn update_partner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdatePartnerRequest>,
) -> Result<Json<Partner>, ApiError> {
    request.validate()?;
    let partner = PartnerRepository::new(state.pool.clone())
        .update(id, &request)
        .await?;
    Ok(Json(partner))
}

/// DELETE /api/admin/cms/partners/:id
pub async fn delete_partner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let deleted = PartnerRepository::new(state.pool.clone()).delete(id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Partner not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Media assets
// =============================================================================

/// POST /api/admin/cms/media
pub async fn create_media_asset(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<CreateMediaAssetRequest>,
) -> Result<(StatusCode, Json<MediaAsset>), ApiError> {
    request.validate()?;
    let asset = MediaAssetRepository::new(state.pool.clone())
        .create(&request, Some(user.user_id))
        .await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

/// DELETE /api/admin/cms/media/:id
pub async fn delete_media_asset(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let deleted = MediaAssetRepository::new(state.pool.clone())
        .delete(id)
        .await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Media asset not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}
