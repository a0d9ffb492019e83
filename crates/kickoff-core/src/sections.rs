use crate::choice::{apply_level_scalar, Choice, ALL_OK};
use crate::types::{ControlLevel, SectionKey};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Non-delegable sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlLevelSection {
    /// Raw catalog label as selected ("QUICK!(3 Minutes)", "8 Minutes", …).
    pub selected_level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeveloperInfo {
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectOverview {
    pub project_name: String,
    pub description: String,
    pub target_audience: String,
}

// ---------------------------------------------------------------------------
// First-tier sections — overwritten by every control level
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TechStack {
    pub programming_languages: Choice,
    pub frontend_frameworks: Choice,
    pub backend_frameworks: Choice,
}

impl TechStack {
    fn apply_level(&mut self, level: ControlLevel) {
        self.programming_languages.apply_level(level);
        self.frontend_frameworks.apply_level(level);
        self.backend_frameworks.apply_level(level);
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "programmingLanguages" => Some(&mut self.programming_languages),
            "frontendFrameworks" => Some(&mut self.frontend_frameworks),
            "backendFrameworks" => Some(&mut self.backend_frameworks),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecurityAuth {
    pub auth_providers: Choice,
    pub security_features: Choice,
}

impl SecurityAuth {
    fn apply_level(&mut self, level: ControlLevel) {
        self.auth_providers.apply_level(level);
        self.security_features.apply_level(level);
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "authProviders" => Some(&mut self.auth_providers),
            "securityFeatures" => Some(&mut self.security_features),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudInfrastructure {
    pub providers: Choice,
    pub regions: Choice,
}

impl Default for CloudInfrastructure {
    fn default() -> Self {
        Self {
            providers: Choice::picks([ALL_OK]),
            regions: Choice::picks([ALL_OK]),
        }
    }
}

impl CloudInfrastructure {
    fn apply_level(&mut self, level: ControlLevel) {
        self.providers.apply_level(level);
        self.regions.apply_level(level);
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "providers" => Some(&mut self.providers),
            "regions" => Some(&mut self.regions),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Database {
    pub engines: Choice,
    pub caching: Choice,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            engines: Choice::picks([ALL_OK]),
            caching: Choice::default(),
        }
    }
}

impl Database {
    fn apply_level(&mut self, level: ControlLevel) {
        self.engines.apply_level(level);
        self.caching.apply_level(level);
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "engines" => Some(&mut self.engines),
            "caching" => Some(&mut self.caching),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hosting {
    pub platforms: Choice,
}

impl Default for Hosting {
    fn default() -> Self {
        Self {
            platforms: Choice::picks([ALL_OK]),
        }
    }
}

impl Hosting {
    fn apply_level(&mut self, level: ControlLevel) {
        self.platforms.apply_level(level);
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "platforms" => Some(&mut self.platforms),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Payments {
    pub providers: Choice,
}

impl Payments {
    fn apply_level(&mut self, level: ControlLevel) {
        self.providers.apply_level(level);
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "providers" => Some(&mut self.providers),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AiIntegration {
    pub model_providers: Choice,
    pub features: Choice,
    /// Single-valued field; the cascade writes the sentinel here directly.
    pub primary_model: String,
}

impl AiIntegration {
    fn apply_level(&mut self, level: ControlLevel) {
        self.model_providers.apply_level(level);
        self.features.apply_level(level);
        apply_level_scalar(&mut self.primary_model, level);
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "modelProviders" => Some(&mut self.model_providers),
            "features" => Some(&mut self.features),
            _ => None,
        }
    }
}

/// Uses the array-of-field-names delegation convention: `aiDecision` holds
/// the names of the fields delegated wholesale, instead of a sentinel value
/// inside each field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfiguration {
    pub ai_decision: Vec<String>,
    pub app_type: String,
    pub platforms: Choice,
}

impl AppConfiguration {
    pub const DELEGABLE: &'static [&'static str] = &["appType", "platforms"];

    fn apply_level(&mut self, level: ControlLevel) {
        match level {
            ControlLevel::Quick | ControlLevel::Guided => {
                self.ai_decision = Self::DELEGABLE.iter().map(|f| (*f).to_string()).collect();
            }
            ControlLevel::Manual => {
                self.ai_decision.clear();
                self.app_type.clear();
                self.platforms = Choice::default();
            }
        }
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "platforms" => Some(&mut self.platforms),
            _ => None,
        }
    }

    fn toggle_ai_decision(&mut self, field: &str, on: bool) -> bool {
        toggle_name_list(&mut self.ai_decision, Self::DELEGABLE, field, on)
    }
}

/// Second section on the array-of-field-names convention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadlessCms {
    pub ai_decision: Vec<String>,
    pub systems: Choice,
    pub localization: Choice,
}

impl HeadlessCms {
    pub const DELEGABLE: &'static [&'static str] = &["systems", "localization"];

    fn apply_level(&mut self, level: ControlLevel) {
        match level {
            ControlLevel::Quick | ControlLevel::Guided => {
                self.ai_decision = Self::DELEGABLE.iter().map(|f| (*f).to_string()).collect();
            }
            ControlLevel::Manual => {
                self.ai_decision.clear();
                self.systems = Choice::default();
                self.localization = Choice::default();
            }
        }
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "systems" => Some(&mut self.systems),
            "localization" => Some(&mut self.localization),
            _ => None,
        }
    }

    fn toggle_ai_decision(&mut self, field: &str, on: bool) -> bool {
        toggle_name_list(&mut self.ai_decision, Self::DELEGABLE, field, on)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailServices {
    pub providers: Choice,
}

impl EmailServices {
    fn apply_level(&mut self, level: ControlLevel) {
        self.providers.apply_level(level);
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "providers" => Some(&mut self.providers),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialIntegrations {
    pub platforms: Choice,
}

impl SocialIntegrations {
    fn apply_level(&mut self, level: ControlLevel) {
        self.platforms.apply_level(level);
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "platforms" => Some(&mut self.platforms),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationInfo {
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapsLocation {
    pub providers: Choice,
    /// The user's own location — never delegated, never touched by the
    /// cascade.
    pub location: LocationInfo,
}

impl MapsLocation {
    fn apply_level(&mut self, level: ControlLevel) {
        self.providers.apply_level(level);
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "providers" => Some(&mut self.providers),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ecommerce {
    pub features: Choice,
}

impl Ecommerce {
    fn apply_level(&mut self, level: ControlLevel) {
        self.features.apply_level(level);
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "features" => Some(&mut self.features),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Second-tier sections — untouched by Quick, overwritten by Guided and Manual
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PackageManagement {
    pub managers: Choice,
}

impl PackageManagement {
    fn apply_level(&mut self, level: ControlLevel) {
        self.managers.apply_level(level);
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "managers" => Some(&mut self.managers),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildTooling {
    pub tools: Choice,
}

impl BuildTooling {
    fn apply_level(&mut self, level: ControlLevel) {
        self.tools.apply_level(level);
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "tools" => Some(&mut self.tools),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Containerization {
    pub tools: Choice,
}

impl Containerization {
    fn apply_level(&mut self, level: ControlLevel) {
        self.tools.apply_level(level);
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "tools" => Some(&mut self.tools),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MonorepoTooling {
    pub tools: Choice,
}

impl MonorepoTooling {
    fn apply_level(&mut self, level: ControlLevel) {
        self.tools.apply_level(level);
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "tools" => Some(&mut self.tools),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestingQuality {
    pub frameworks: Choice,
    pub code_quality: Choice,
}

impl TestingQuality {
    fn apply_level(&mut self, level: ControlLevel) {
        self.frameworks.apply_level(level);
        self.code_quality.apply_level(level);
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "frameworks" => Some(&mut self.frameworks),
            "codeQuality" => Some(&mut self.code_quality),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cicd {
    pub providers: Choice,
}

impl Cicd {
    fn apply_level(&mut self, level: ControlLevel) {
        self.providers.apply_level(level);
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "providers" => Some(&mut self.providers),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyticsMonitoring {
    pub analytics: Choice,
    pub monitoring: Choice,
}

impl AnalyticsMonitoring {
    fn apply_level(&mut self, level: ControlLevel) {
        self.analytics.apply_level(level);
        self.monitoring.apply_level(level);
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "analytics" => Some(&mut self.analytics),
            "monitoring" => Some(&mut self.monitoring),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinancialApis {
    pub providers: Choice,
}

impl FinancialApis {
    fn apply_level(&mut self, level: ControlLevel) {
        self.providers.apply_level(level);
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "providers" => Some(&mut self.providers),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorsFonts {
    pub palette: Choice,
    pub fonts: Choice,
}

impl ColorsFonts {
    fn apply_level(&mut self, level: ControlLevel) {
        self.palette.apply_level(level);
        self.fonts.apply_level(level);
    }

    fn choice_mut(&mut self, field: &str) -> Option<&mut Choice> {
        match field {
            "palette" => Some(&mut self.palette),
            "fonts" => Some(&mut self.fonts),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Sections aggregate
// ---------------------------------------------------------------------------

/// Every section of the form. Fixed struct fields make a missing section
/// unrepresentable; `#[serde(default)]` lets documents saved by older
/// schemas hydrate with defaults for fields they lack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sections {
    pub control_level: ControlLevelSection,
    pub developer_info: DeveloperInfo,
    pub project_overview: ProjectOverview,
    pub tech_stack: TechStack,
    pub security_auth: SecurityAuth,
    pub cloud_infrastructure: CloudInfrastructure,
    pub database: Database,
    pub hosting: Hosting,
    pub payments: Payments,
    pub financial_apis: FinancialApis,
    pub ai_integration: AiIntegration,
    pub app_configuration: AppConfiguration,
    #[serde(rename = "headlessCMS")]
    pub headless_cms: HeadlessCms,
    pub package_management: PackageManagement,
    pub build_tooling: BuildTooling,
    pub containerization: Containerization,
    pub monorepo_tooling: MonorepoTooling,
    pub testing_quality: TestingQuality,
    pub cicd: Cicd,
    pub analytics_monitoring: AnalyticsMonitoring,
    pub colors_fonts: ColorsFonts,
    pub email_services: EmailServices,
    pub social_integrations: SocialIntegrations,
    pub maps_location: MapsLocation,
    pub ecommerce: Ecommerce,
}

impl Sections {
    /// Bulk overwrite triggered by a control-level selection. Applied as one
    /// in-memory mutation so partial application is never observable;
    /// callers persist once afterwards.
    pub fn apply_control_level(&mut self, level: ControlLevel) {
        self.tech_stack.apply_level(level);
        self.security_auth.apply_level(level);
        self.cloud_infrastructure.apply_level(level);
        self.database.apply_level(level);
        self.hosting.apply_level(level);
        self.payments.apply_level(level);
        self.ai_integration.apply_level(level);
        self.app_configuration.apply_level(level);
        self.headless_cms.apply_level(level);
        self.email_services.apply_level(level);
        self.social_integrations.apply_level(level);
        self.maps_location.apply_level(level);
        self.ecommerce.apply_level(level);

        // Development-environment tier: Quick leaves these at their prior
        // values while Guided and Manual overwrite them. This asymmetry is
        // preserved from the shipped behavior so existing saved sessions
        // replay identically.
        if level != ControlLevel::Quick {
            self.package_management.apply_level(level);
            self.build_tooling.apply_level(level);
            self.containerization.apply_level(level);
            self.monorepo_tooling.apply_level(level);
            self.testing_quality.apply_level(level);
            self.cicd.apply_level(level);
            self.analytics_monitoring.apply_level(level);
            self.financial_apis.apply_level(level);
            self.colors_fonts.apply_level(level);
        }
    }

    /// Mutable access to a multi-select field by its wire name. `None` for
    /// sections without list fields or unknown field names.
    pub fn choice_mut(&mut self, key: SectionKey, field: &str) -> Option<&mut Choice> {
        match key {
            SectionKey::TechStack => self.tech_stack.choice_mut(field),
            SectionKey::SecurityAuth => self.security_auth.choice_mut(field),
            SectionKey::CloudInfrastructure => self.cloud_infrastructure.choice_mut(field),
            SectionKey::Database => self.database.choice_mut(field),
            SectionKey::Hosting => self.hosting.choice_mut(field),
            SectionKey::Payments => self.payments.choice_mut(field),
            SectionKey::FinancialApis => self.financial_apis.choice_mut(field),
            SectionKey::AiIntegration => self.ai_integration.choice_mut(field),
            SectionKey::AppConfiguration => self.app_configuration.choice_mut(field),
            SectionKey::HeadlessCms => self.headless_cms.choice_mut(field),
            SectionKey::PackageManagement => self.package_management.choice_mut(field),
            SectionKey::BuildTooling => self.build_tooling.choice_mut(field),
            SectionKey::Containerization => self.containerization.choice_mut(field),
            SectionKey::MonorepoTooling => self.monorepo_tooling.choice_mut(field),
            SectionKey::TestingQuality => self.testing_quality.choice_mut(field),
            SectionKey::Cicd => self.cicd.choice_mut(field),
            SectionKey::AnalyticsMonitoring => self.analytics_monitoring.choice_mut(field),
            SectionKey::ColorsFonts => self.colors_fonts.choice_mut(field),
            SectionKey::EmailServices => self.email_services.choice_mut(field),
            SectionKey::SocialIntegrations => self.social_integrations.choice_mut(field),
            SectionKey::MapsLocation => self.maps_location.choice_mut(field),
            SectionKey::Ecommerce => self.ecommerce.choice_mut(field),
            SectionKey::ControlLevel
            | SectionKey::DeveloperInfo
            | SectionKey::ProjectOverview => None,
        }
    }

    /// Delegation toggle for sections on the array-of-field-names
    /// convention. Returns `false` when the section uses per-field
    /// sentinels instead (callers fall back to `choice_mut`).
    pub fn toggle_ai_decision(&mut self, key: SectionKey, field: &str, on: bool) -> Option<bool> {
        match key {
            SectionKey::AppConfiguration => {
                Some(self.app_configuration.toggle_ai_decision(field, on))
            }
            SectionKey::HeadlessCms => Some(self.headless_cms.toggle_ai_decision(field, on)),
            _ => None,
        }
    }
}

/// Add or remove a field name in an `aiDecision` array, rejecting names
/// outside the section's delegable set. Idempotent.
fn toggle_name_list(list: &mut Vec<String>, allowed: &[&str], field: &str, on: bool) -> bool {
    if !allowed.contains(&field) {
        return false;
    }
    if on {
        if !list.iter().any(|f| f == field) {
            list.push(field.to_string());
        }
    } else {
        list.retain(|f| f != field);
    }
    true
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::AI_DECIDE;

    #[test]
    fn defaults_carry_catch_alls() {
        let s = Sections::default();
        assert_eq!(s.cloud_infrastructure.providers.selected(), [ALL_OK]);
        assert_eq!(s.hosting.platforms.selected(), [ALL_OK]);
        assert_eq!(s.database.engines.selected(), [ALL_OK]);
        assert!(s.tech_stack.programming_languages.is_empty());
    }

    #[test]
    fn quick_delegates_first_tier() {
        let mut s = Sections::default();
        s.tech_stack.programming_languages.toggle("Rust", true);
        s.apply_control_level(ControlLevel::Quick);

        assert!(s.tech_stack.programming_languages.is_delegated());
        assert!(s.tech_stack.frontend_frameworks.is_delegated());
        assert!(s.security_auth.auth_providers.is_delegated());
        assert!(s.cloud_infrastructure.providers.is_delegated());
        assert!(s.payments.providers.is_delegated());
        assert!(s.ecommerce.features.is_delegated());
        assert_eq!(s.ai_integration.primary_model, AI_DECIDE);
    }

    #[test]
    fn quick_leaves_second_tier_untouched() {
        let mut s = Sections::default();
        s.cicd.providers.toggle("GitHub Actions", true);
        s.package_management.managers.toggle("pnpm", true);
        s.apply_control_level(ControlLevel::Quick);

        assert_eq!(s.cicd.providers.selected(), ["GitHub Actions"]);
        assert_eq!(s.package_management.managers.selected(), ["pnpm"]);
        assert!(s.colors_fonts.palette.is_empty());
        assert!(s.financial_apis.providers.is_empty());
    }

    #[test]
    fn guided_also_delegates_second_tier() {
        let mut s = Sections::default();
        s.cicd.providers.toggle("GitHub Actions", true);
        s.apply_control_level(ControlLevel::Guided);

        assert!(s.tech_stack.programming_languages.is_delegated());
        assert!(s.cicd.providers.is_delegated());
        assert!(s.package_management.managers.is_delegated());
        assert!(s.build_tooling.tools.is_delegated());
        assert!(s.containerization.tools.is_delegated());
        assert!(s.monorepo_tooling.tools.is_delegated());
        assert!(s.testing_quality.frameworks.is_delegated());
        assert!(s.analytics_monitoring.monitoring.is_delegated());
        assert!(s.financial_apis.providers.is_delegated());
        assert!(s.colors_fonts.fonts.is_delegated());
    }

    #[test]
    fn manual_clears_every_delegable_field() {
        let mut s = Sections::default();
        s.apply_control_level(ControlLevel::Guided);
        s.apply_control_level(ControlLevel::Manual);

        assert!(s.tech_stack.programming_languages.is_empty());
        assert!(s.cloud_infrastructure.providers.is_empty());
        assert!(s.cicd.providers.is_empty());
        assert!(s.colors_fonts.palette.is_empty());
        assert_eq!(s.ai_integration.primary_model, "");
        assert!(s.app_configuration.ai_decision.is_empty());
        assert!(s.headless_cms.ai_decision.is_empty());
        assert!(s.headless_cms.systems.is_empty());
    }

    #[test]
    fn cascade_populates_ai_decision_arrays() {
        let mut s = Sections::default();
        s.apply_control_level(ControlLevel::Quick);
        assert_eq!(s.app_configuration.ai_decision, ["appType", "platforms"]);
        assert_eq!(s.headless_cms.ai_decision, ["systems", "localization"]);
    }

    #[test]
    fn cascade_does_not_touch_identity_sections() {
        let mut s = Sections::default();
        s.developer_info.name = "Ada".to_string();
        s.project_overview.project_name = "storefront".to_string();
        s.maps_location.location.city = "Lisbon".to_string();
        s.apply_control_level(ControlLevel::Quick);

        assert_eq!(s.developer_info.name, "Ada");
        assert_eq!(s.project_overview.project_name, "storefront");
        assert_eq!(s.maps_location.location.city, "Lisbon");
    }

    #[test]
    fn toggle_ai_decision_rejects_unknown_field() {
        let mut s = Sections::default();
        assert_eq!(
            s.toggle_ai_decision(SectionKey::AppConfiguration, "bogus", true),
            Some(false)
        );
        assert!(s
            .toggle_ai_decision(SectionKey::TechStack, "programmingLanguages", true)
            .is_none());
    }

    #[test]
    fn toggle_ai_decision_is_idempotent() {
        let mut s = Sections::default();
        s.toggle_ai_decision(SectionKey::HeadlessCms, "systems", true);
        s.toggle_ai_decision(SectionKey::HeadlessCms, "systems", true);
        assert_eq!(s.headless_cms.ai_decision, ["systems"]);
        s.toggle_ai_decision(SectionKey::HeadlessCms, "systems", false);
        assert!(s.headless_cms.ai_decision.is_empty());
    }

    #[test]
    fn wire_names_match_section_keys() {
        let value = serde_json::to_value(Sections::default()).unwrap();
        let obj = value.as_object().unwrap();
        for key in SectionKey::all() {
            assert!(
                obj.contains_key(key.as_str()),
                "missing section on the wire: {key}"
            );
        }
        assert_eq!(obj.len(), SectionKey::all().len());
    }

    #[test]
    fn choice_mut_resolves_known_fields() {
        let mut s = Sections::default();
        assert!(s
            .choice_mut(SectionKey::TechStack, "programmingLanguages")
            .is_some());
        assert!(s.choice_mut(SectionKey::TechStack, "bogus").is_none());
        assert!(s.choice_mut(SectionKey::DeveloperInfo, "name").is_none());
    }

    #[test]
    fn sections_roundtrip_through_json() {
        let mut s = Sections::default();
        s.apply_control_level(ControlLevel::Guided);
        s.developer_info.email = "ada@example.com".to_string();
        let json = serde_json::to_string(&s).unwrap();
        let back: Sections = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }

    #[test]
    fn hydration_tolerates_missing_sections() {
        // A document saved before a section existed still loads.
        let s: Sections =
            serde_json::from_value(serde_json::json!({ "techStack": {} })).unwrap();
        assert_eq!(s.hosting.platforms.selected(), [ALL_OK]);
    }
}
