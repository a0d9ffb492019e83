use crate::form::PAGE_COUNT;
use crate::types::SectionKey;

/// One wizard page: a title and the sections it edits.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub number: u32,
    pub title: &'static str,
    pub sections: &'static [SectionKey],
}

/// The fixed page catalog, in visit order.
pub const PAGES: [Page; PAGE_COUNT as usize] = [
    Page { number: 1, title: "Control Level", sections: &[SectionKey::ControlLevel] },
    Page { number: 2, title: "Project Overview", sections: &[SectionKey::ProjectOverview] },
    Page { number: 3, title: "Tech Stack", sections: &[SectionKey::TechStack] },
    Page { number: 4, title: "Security & Auth", sections: &[SectionKey::SecurityAuth] },
    Page { number: 5, title: "Cloud Infrastructure", sections: &[SectionKey::CloudInfrastructure] },
    Page { number: 6, title: "Data & Hosting", sections: &[SectionKey::Database, SectionKey::Hosting] },
    Page { number: 7, title: "Payments", sections: &[SectionKey::Payments, SectionKey::FinancialApis] },
    Page { number: 8, title: "AI Integration", sections: &[SectionKey::AiIntegration] },
    Page { number: 9, title: "App Configuration", sections: &[SectionKey::AppConfiguration] },
    Page { number: 10, title: "Headless CMS", sections: &[SectionKey::HeadlessCms] },
    Page {
        number: 11,
        title: "Development Environment",
        sections: &[
            SectionKey::PackageManagement,
            SectionKey::BuildTooling,
            SectionKey::Containerization,
            SectionKey::MonorepoTooling,
        ],
    },
    Page { number: 12, title: "Testing & Delivery", sections: &[SectionKey::TestingQuality, SectionKey::Cicd] },
    Page { number: 13, title: "Analytics & Monitoring", sections: &[SectionKey::AnalyticsMonitoring] },
    Page { number: 14, title: "Look & Feel", sections: &[SectionKey::ColorsFonts] },
    Page {
        number: 15,
        title: "Integrations",
        sections: &[
            SectionKey::EmailServices,
            SectionKey::SocialIntegrations,
            SectionKey::MapsLocation,
            SectionKey::Ecommerce,
        ],
    },
    Page { number: 16, title: "Developer Details", sections: &[SectionKey::DeveloperInfo] },
];

pub fn title(page: u32) -> Option<&'static str> {
    PAGES
        .iter()
        .find(|p| p.number == page)
        .map(|p| p.title)
}
