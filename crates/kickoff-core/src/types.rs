use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ControlLevel
// ---------------------------------------------------------------------------

/// How much of the form the user delegates to the AI up front.
///
/// The option catalog presents levels as estimated completion times
/// ("QUICK!(3 Minutes)", "8 Minutes", "15-20 Minutes"); anything that is not
/// recognizably Quick or Guided is treated as Manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlLevel {
    Quick,
    Guided,
    Manual,
}

impl ControlLevel {
    pub fn all() -> &'static [ControlLevel] {
        &[
            ControlLevel::Quick,
            ControlLevel::Guided,
            ControlLevel::Manual,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ControlLevel::Quick => "quick",
            ControlLevel::Guided => "guided",
            ControlLevel::Manual => "manual",
        }
    }

    /// The catalog label stored in `controlLevel.selectedLevel`.
    pub fn label(self) -> &'static str {
        match self {
            ControlLevel::Quick => "QUICK!(3 Minutes)",
            ControlLevel::Guided => "8 Minutes",
            ControlLevel::Manual => "15-20 Minutes",
        }
    }

    /// Total mapping from a catalog label to a level. Unrecognized labels
    /// (including the empty string) mean the user keeps manual control.
    pub fn from_label(label: &str) -> ControlLevel {
        if label.starts_with("QUICK") || label.contains("3 Minutes") || label.contains("5 Minutes")
        {
            ControlLevel::Quick
        } else if label.contains("8 Minutes") {
            ControlLevel::Guided
        } else {
            ControlLevel::Manual
        }
    }
}

impl fmt::Display for ControlLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ControlLevel {
    type Err = crate::error::WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quick" => Ok(ControlLevel::Quick),
            "guided" => Ok(ControlLevel::Guided),
            "manual" => Ok(ControlLevel::Manual),
            _ => Err(crate::error::WizardError::UnknownLevel(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// SectionKey
// ---------------------------------------------------------------------------

/// Identifier for one of the 25 fixed form sections. Wire names are the
/// camelCase keys used in the persisted document and submission payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    ControlLevel,
    DeveloperInfo,
    ProjectOverview,
    TechStack,
    SecurityAuth,
    CloudInfrastructure,
    Database,
    Hosting,
    Payments,
    FinancialApis,
    AiIntegration,
    AppConfiguration,
    #[serde(rename = "headlessCMS")]
    HeadlessCms,
    PackageManagement,
    BuildTooling,
    Containerization,
    MonorepoTooling,
    TestingQuality,
    Cicd,
    AnalyticsMonitoring,
    ColorsFonts,
    EmailServices,
    SocialIntegrations,
    MapsLocation,
    Ecommerce,
}

impl SectionKey {
    pub fn all() -> &'static [SectionKey] {
        &[
            SectionKey::ControlLevel,
            SectionKey::DeveloperInfo,
            SectionKey::ProjectOverview,
            SectionKey::TechStack,
            SectionKey::SecurityAuth,
            SectionKey::CloudInfrastructure,
            SectionKey::Database,
            SectionKey::Hosting,
            SectionKey::Payments,
            SectionKey::FinancialApis,
            SectionKey::AiIntegration,
            SectionKey::AppConfiguration,
            SectionKey::HeadlessCms,
            SectionKey::PackageManagement,
            SectionKey::BuildTooling,
            SectionKey::Containerization,
            SectionKey::MonorepoTooling,
            SectionKey::TestingQuality,
            SectionKey::Cicd,
            SectionKey::AnalyticsMonitoring,
            SectionKey::ColorsFonts,
            SectionKey::EmailServices,
            SectionKey::SocialIntegrations,
            SectionKey::MapsLocation,
            SectionKey::Ecommerce,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::ControlLevel => "controlLevel",
            SectionKey::DeveloperInfo => "developerInfo",
            SectionKey::ProjectOverview => "projectOverview",
            SectionKey::TechStack => "techStack",
            SectionKey::SecurityAuth => "securityAuth",
            SectionKey::CloudInfrastructure => "cloudInfrastructure",
            SectionKey::Database => "database",
            SectionKey::Hosting => "hosting",
            SectionKey::Payments => "payments",
            SectionKey::FinancialApis => "financialApis",
            SectionKey::AiIntegration => "aiIntegration",
            SectionKey::AppConfiguration => "appConfiguration",
            SectionKey::HeadlessCms => "headlessCMS",
            SectionKey::PackageManagement => "packageManagement",
            SectionKey::BuildTooling => "buildTooling",
            SectionKey::Containerization => "containerization",
            SectionKey::MonorepoTooling => "monorepoTooling",
            SectionKey::TestingQuality => "testingQuality",
            SectionKey::Cicd => "cicd",
            SectionKey::AnalyticsMonitoring => "analyticsMonitoring",
            SectionKey::ColorsFonts => "colorsFonts",
            SectionKey::EmailServices => "emailServices",
            SectionKey::SocialIntegrations => "socialIntegrations",
            SectionKey::MapsLocation => "mapsLocation",
            SectionKey::Ecommerce => "ecommerce",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SectionKey {
    type Err = crate::error::WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKey::all()
            .iter()
            .find(|k| k.as_str() == s)
            .copied()
            .ok_or_else(|| crate::error::WizardError::UnknownSection(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
