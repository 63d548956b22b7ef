//! Fixed sample records rendered by the pages.
//!
//! Nothing here is created or mutated at runtime.

/// Resource category shared by listings, map clusters and impact charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceCategory {
    Heat,
    Glass,
    Wood,
    Oil,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 4] = [
        ResourceCategory::Heat,
        ResourceCategory::Glass,
        ResourceCategory::Wood,
        ResourceCategory::Oil,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ResourceCategory::Heat => "heat",
            ResourceCategory::Glass => "glass",
            ResourceCategory::Wood => "wood",
            ResourceCategory::Oil => "oil",
        }
    }

    pub fn from_slug(slug: &str) -> Option<ResourceCategory> {
        Self::ALL.into_iter().find(|category| category.slug() == slug)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResourceCategory::Heat => "Waste Heat",
            ResourceCategory::Glass => "Glass Scraps",
            ResourceCategory::Wood => "Wood Residues",
            ResourceCategory::Oil => "Used Oils",
        }
    }

    /// Short label used on chart axes.
    pub fn short_label(&self) -> &'static str {
        match self {
            ResourceCategory::Heat => "Heat",
            ResourceCategory::Glass => "Glass",
            ResourceCategory::Wood => "Wood",
            ResourceCategory::Oil => "Oil",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ResourceCategory::Heat => "🔥",
            ResourceCategory::Glass => "🫙",
            ResourceCategory::Wood => "🌲",
            ResourceCategory::Oil => "💧",
        }
    }

    /// CSS colour class for map markers and legend dots.
    pub fn color(&self) -> &'static str {
        match self {
            ResourceCategory::Heat => "red",
            ResourceCategory::Glass => "blue",
            ResourceCategory::Wood => "green",
            ResourceCategory::Oil => "yellow",
        }
    }
}

// ==================== Home ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformMetric {
    ActiveResources,
    DealsMatched,
    Co2Saved,
    GreenPoints,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Growth this month, e.g. "+12%"
    PercentThisMonth(&'static str),
    ThisMonth,
    CommunityTotal,
}

#[derive(Debug, Clone)]
pub struct PlatformStat {
    pub metric: PlatformMetric,
    pub value: &'static str,
    pub trend: Trend,
    pub trend_up: bool,
}

pub static PLATFORM_STATS: [PlatformStat; 4] = [
    PlatformStat {
        metric: PlatformMetric::ActiveResources,
        value: "248",
        trend: Trend::PercentThisMonth("+12%"),
        trend_up: true,
    },
    PlatformStat {
        metric: PlatformMetric::DealsMatched,
        value: "86",
        trend: Trend::PercentThisMonth("+8%"),
        trend_up: true,
    },
    PlatformStat {
        metric: PlatformMetric::Co2Saved,
        value: "1,234t",
        trend: Trend::ThisMonth,
        trend_up: false,
    },
    PlatformStat {
        metric: PlatformMetric::GreenPoints,
        value: "45,678",
        trend: Trend::CommunityTotal,
        trend_up: false,
    },
];

// ==================== Resources ====================

#[derive(Debug, Clone)]
pub struct ResourceListing {
    pub category: ResourceCategory,
    pub quantity: &'static str,
    pub location: &'static str,
    pub company: &'static str,
    pub verified: bool,
    /// Estimated CO₂ saved per month
    pub co2_saved: &'static str,
    pub available: bool,
}

pub static RESOURCES: [ResourceListing; 4] = [
    ResourceListing {
        category: ResourceCategory::Heat,
        quantity: "500 kW continuous",
        location: "Hamburg, Germany",
        company: "ThermalTech GmbH",
        verified: true,
        co2_saved: "2.3t",
        available: true,
    },
    ResourceListing {
        category: ResourceCategory::Glass,
        quantity: "12 tons/month",
        location: "Munich, Germany",
        company: "GlassWorks Industries",
        verified: true,
        co2_saved: "1.8t",
        available: true,
    },
    ResourceListing {
        category: ResourceCategory::Wood,
        quantity: "25 tons/week",
        location: "Berlin, Germany",
        company: "Forest Products Co.",
        verified: false,
        co2_saved: "3.1t",
        available: true,
    },
    ResourceListing {
        category: ResourceCategory::Oil,
        quantity: "800 liters/month",
        location: "Frankfurt, Germany",
        company: "AutoService Plus",
        verified: true,
        co2_saved: "1.2t",
        available: true,
    },
];

pub static RESOURCE_TYPE_FILTERS: [&str; 6] = ["Waste Heat", "Glass", "Wood", "Oil", "Metal", "Plastic"];

pub static DISTANCE_FILTERS: [&str; 4] = ["< 10 km", "< 50 km", "< 100 km", "Any"];

// ==================== Matching ====================

#[derive(Debug, Clone)]
pub struct MatchProposal {
    pub id: u32,
    pub provider: &'static str,
    pub receiver: &'static str,
    pub intermediary: Option<&'static str>,
    pub resource: &'static str,
    /// Percent, 0-100
    pub compatibility: u8,
    pub distance: &'static str,
    pub co2_saved: &'static str,
    pub tags: &'static [&'static str],
    pub description: &'static str,
}

pub static MATCHES: [MatchProposal; 3] = [
    MatchProposal {
        id: 1,
        provider: "ThermalTech GmbH",
        receiver: "GreenHeat Solutions",
        intermediary: None,
        resource: "Waste Heat",
        compatibility: 95,
        distance: "3.2 km",
        co2_saved: "2.8t/month",
        tags: &["Nearby", "High Compatibility", "Verified"],
        description: "Excess heat from industrial process matches heating demand perfectly",
    },
    MatchProposal {
        id: 2,
        provider: "GlassWorks Industries",
        receiver: "BuildMat Recycling",
        intermediary: Some("TransitHub GmbH"),
        resource: "Glass Scraps",
        compatibility: 88,
        distance: "12 km",
        co2_saved: "1.9t/month",
        tags: &["Triple Match", "Compatible", "Logistics Available"],
        description: "Glass scraps can be processed through intermediary for optimal reuse",
    },
    MatchProposal {
        id: 3,
        provider: "Forest Products Co.",
        receiver: "BioPower Energy",
        intermediary: None,
        resource: "Wood Residues",
        compatibility: 92,
        distance: "8.5 km",
        co2_saved: "3.4t/month",
        tags: &["High Volume", "Regular Supply", "Verified"],
        description: "Consistent wood residue supply for biomass energy production",
    },
];

// ==================== Map ====================

#[derive(Debug, Clone)]
pub struct ClusterCompany {
    pub name: &'static str,
    pub location: &'static str,
    pub offer: &'static str,
}

#[derive(Debug, Clone)]
pub struct MapCluster {
    pub id: u32,
    pub category: ResourceCategory,
    /// Horizontal position, percent of map width
    pub x: u8,
    /// Vertical position, percent of map height
    pub y: u8,
    pub count: u32,
    pub companies: &'static [ClusterCompany],
}

pub static CLUSTERS: [MapCluster; 4] = [
    MapCluster {
        id: 1,
        category: ResourceCategory::Heat,
        x: 30,
        y: 40,
        count: 12,
        companies: &[
            ClusterCompany {
                name: "ThermalTech Algeria",
                location: "Algiers",
                offer: "500 kW continuous",
            },
            ClusterCompany {
                name: "IndustrialHeat Co.",
                location: "Algiers",
                offer: "300 kW peak",
            },
        ],
    },
    MapCluster {
        id: 2,
        category: ResourceCategory::Glass,
        x: 60,
        y: 30,
        count: 8,
        companies: &[
            ClusterCompany {
                name: "GlassWorks Industries",
                location: "Oran",
                offer: "12 tons/month",
            },
            ClusterCompany {
                name: "Crystal Processing",
                location: "Oran",
                offer: "8 tons/month",
            },
        ],
    },
    MapCluster {
        id: 3,
        category: ResourceCategory::Wood,
        x: 45,
        y: 60,
        count: 15,
        companies: &[
            ClusterCompany {
                name: "Forest Products Co.",
                location: "Constantine",
                offer: "25 tons/week",
            },
            ClusterCompany {
                name: "TimberWorks Algeria",
                location: "Constantine",
                offer: "18 tons/week",
            },
        ],
    },
    MapCluster {
        id: 4,
        category: ResourceCategory::Oil,
        x: 75,
        y: 50,
        count: 6,
        companies: &[
            ClusterCompany {
                name: "AutoService Plus",
                location: "Annaba",
                offer: "800 liters/month",
            },
            ClusterCompany {
                name: "Industrial Oils Ltd",
                location: "Annaba",
                offer: "600 liters/month",
            },
        ],
    },
];

pub fn cluster_for(category: ResourceCategory) -> Option<&'static MapCluster> {
    CLUSTERS.iter().find(|cluster| cluster.category == category)
}

// ==================== Green Points ====================

#[derive(Debug, Clone)]
pub struct ImpactSummary {
    pub total_co2: &'static str,
    pub co2_this_month: &'static str,
    pub green_points: &'static str,
    pub region_rank_percent: u8,
    pub deals_completed: u32,
    pub deals_this_month: u32,
}

pub static IMPACT: ImpactSummary = ImpactSummary {
    total_co2: "78.4t",
    co2_this_month: "12.3t",
    green_points: "2,847",
    region_rank_percent: 15,
    deals_completed: 24,
    deals_this_month: 6,
};

/// Tonnes of CO₂ saved per month.
pub static CO2_SERIES: [(&str, u32); 6] = [
    ("Jan", 45),
    ("Feb", 52),
    ("Mar", 61),
    ("Apr", 58),
    ("May", 70),
    ("Jun", 78),
];

/// Completed exchanges per category.
pub static EXCHANGE_SERIES: [(ResourceCategory, u32); 4] = [
    (ResourceCategory::Heat, 12),
    (ResourceCategory::Glass, 8),
    (ResourceCategory::Wood, 15),
    (ResourceCategory::Oil, 6),
];

#[derive(Debug, Clone)]
pub struct Badge {
    pub name: &'static str,
    pub glyph: &'static str,
    pub description: &'static str,
    pub earned: bool,
}

pub static BADGES: [Badge; 4] = [
    Badge {
        name: "Early Adopter",
        glyph: "🏅",
        description: "Joined in first month",
        earned: true,
    },
    Badge {
        name: "Green Pioneer",
        glyph: "📈",
        description: "Saved 50t CO₂",
        earned: true,
    },
    Badge {
        name: "Perfect Match",
        glyph: "✅",
        description: "10 successful deals",
        earned: true,
    },
    Badge {
        name: "Climate Hero",
        glyph: "🎯",
        description: "Saved 100t CO₂",
        earned: false,
    },
];

pub fn badges_earned() -> usize {
    BADGES.iter().filter(|badge| badge.earned).count()
}

// ==================== Ideas ====================

#[derive(Debug, Clone)]
pub struct IdeaPost {
    pub id: u32,
    pub title: &'static str,
    pub author: &'static str,
    pub company: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub votes: u32,
    pub comments: u32,
}

pub static IDEAS: [IdeaPost; 4] = [
    IdeaPost {
        id: 1,
        title: "Regional Heat Network Integration",
        author: "Maria Schmidt",
        company: "ThermalTech GmbH",
        date: "2 days ago",
        description: "Proposal to create a coordinated heat exchange network connecting 5+ \
industrial facilities in the Hamburg area.",
        tags: &["Waste Heat", "Infrastructure", "Large Scale"],
        votes: 42,
        comments: 15,
    },
    IdeaPost {
        id: 2,
        title: "Glass-to-Insulation Material Pipeline",
        author: "Thomas Weber",
        company: "GlassWorks Industries",
        date: "5 days ago",
        description: "Transform glass manufacturing waste into high-quality building insulation \
material through partnership with construction firms.",
        tags: &["Glass", "Construction", "Innovation"],
        votes: 38,
        comments: 12,
    },
    IdeaPost {
        id: 3,
        title: "Mobile Wood Chipping Service",
        author: "Anna Hoffmann",
        company: "Forest Products Co.",
        date: "1 week ago",
        description: "On-site wood residue processing service to reduce transportation costs \
and create immediate biomass fuel.",
        tags: &["Wood", "Logistics", "Service"],
        votes: 31,
        comments: 8,
    },
    IdeaPost {
        id: 4,
        title: "Used Oil Collection Consortium",
        author: "Klaus Müller",
        company: "AutoService Plus",
        date: "1 week ago",
        description: "Collaborative collection and processing system for used industrial oils \
across multiple automotive service centers.",
        tags: &["Oil", "Collaboration", "Efficiency"],
        votes: 27,
        comments: 10,
    },
];

// ==================== Services ====================

#[derive(Debug, Clone)]
pub struct ServiceListing {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    pub glyph: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub location: &'static str,
    pub description: &'static str,
    pub offerings: &'static [&'static str],
}

pub static SERVICES: [ServiceListing; 4] = [
    ServiceListing {
        id: 1,
        name: "EcoTransport Solutions",
        category: "Logistics",
        glyph: "🚚",
        rating: 4.8,
        reviews: 127,
        location: "Hamburg, Germany",
        description: "Specialized in sustainable transportation of industrial materials and \
waste streams.",
        offerings: &["Transport", "Storage", "Route Optimization"],
    },
    ServiceListing {
        id: 2,
        name: "MaterialTest Labs",
        category: "Testing",
        glyph: "🧪",
        rating: 4.9,
        reviews: 89,
        location: "Munich, Germany",
        description: "Comprehensive testing and certification services for recycled and \
reclaimed materials.",
        offerings: &["Material Testing", "Certification", "Quality Analysis"],
    },
    ServiceListing {
        id: 3,
        name: "IndustrialEquip Rental",
        category: "Equipment",
        glyph: "🔧",
        rating: 4.7,
        reviews: 156,
        location: "Berlin, Germany",
        description: "Wide range of processing and handling equipment for circular economy \
operations.",
        offerings: &["Equipment Rental", "Installation", "Maintenance"],
    },
    ServiceListing {
        id: 4,
        name: "GreenLogistics Pro",
        category: "Logistics",
        glyph: "🚚",
        rating: 4.6,
        reviews: 94,
        location: "Frankfurt, Germany",
        description: "Carbon-neutral logistics solutions for industrial resource exchange.",
        offerings: &["CO₂ Neutral Transport", "Tracking", "Documentation"],
    },
];

// ==================== Stories ====================

#[derive(Debug, Clone)]
pub struct StoryImpact {
    pub co2: &'static str,
    pub distance: &'static str,
    pub materials: &'static str,
}

#[derive(Debug, Clone)]
pub struct SuccessStory {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub impact: StoryImpact,
    pub tags: &'static [&'static str],
}

pub static STORIES: [SuccessStory; 3] = [
    SuccessStory {
        id: 1,
        title: "Hamburg Heat Exchange Network Success",
        company: "ThermalTech GmbH & Partners",
        date: "March 2024",
        location: "Hamburg, Germany",
        description: "Successfully established a regional heat exchange network connecting 6 \
industrial facilities, transforming waste heat into a valuable community resource.",
        impact: StoryImpact {
            co2: "156 tons",
            distance: "23 km",
            materials: "500 kW continuous",
        },
        tags: &["Waste Heat", "Regional", "Infrastructure"],
    },
    SuccessStory {
        id: 2,
        title: "Glass Recycling Innovation Partnership",
        company: "GlassWorks & BuildMat Recycling",
        date: "February 2024",
        location: "Munich, Germany",
        description: "Pioneering collaboration converts glass manufacturing waste into premium \
building insulation material, closing the loop in construction materials.",
        impact: StoryImpact {
            co2: "89 tons",
            distance: "12 km",
            materials: "12 tons/month",
        },
        tags: &["Glass", "Innovation", "Construction"],
    },
    SuccessStory {
        id: 3,
        title: "Wood-to-Biomass Energy Chain",
        company: "Forest Products & BioPower Energy",
        date: "January 2024",
        location: "Berlin, Germany",
        description: "Transformed wood processing residues into reliable biomass fuel supply, \
powering local community heating systems sustainably.",
        impact: StoryImpact {
            co2: "203 tons",
            distance: "8.5 km",
            materials: "25 tons/week",
        },
        tags: &["Wood", "Energy", "Biomass"],
    },
];

// ==================== Profile ====================

#[derive(Debug, Clone)]
pub struct CompanyProfile {
    pub name: &'static str,
    pub sector: &'static str,
    pub city: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub listed_resource: &'static str,
    pub listed_detail: &'static str,
    pub listed_age: &'static str,
    pub listed_views: u32,
}

pub static DEMO_COMPANY: CompanyProfile = CompanyProfile {
    name: "ThermalTech GmbH",
    sector: "Manufacturing",
    city: "Hamburg, Germany",
    email: "contact@thermaltech.de",
    phone: "+49 40 1234 5678",
    address: "Industriestraße 123, 20095 Hamburg, Germany",
    listed_resource: "Waste Heat",
    listed_detail: "500 kW continuous output",
    listed_age: "2 months ago",
    listed_views: 12,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slug_roundtrip() {
        for category in ResourceCategory::ALL {
            assert_eq!(ResourceCategory::from_slug(category.slug()), Some(category));
        }
        assert_eq!(ResourceCategory::from_slug("metal"), None);
    }

    #[test]
    fn test_every_category_has_one_cluster() {
        for category in ResourceCategory::ALL {
            let cluster = cluster_for(category).unwrap();
            assert_eq!(cluster.category, category);
            assert!(!cluster.companies.is_empty());
        }
    }

    #[test]
    fn test_cluster_positions_inside_map() {
        for cluster in &CLUSTERS {
            assert!(cluster.x <= 100 && cluster.y <= 100);
        }
    }

    #[test]
    fn test_match_scores_are_percentages() {
        assert!(MATCHES.iter().all(|m| m.compatibility <= 100));
    }

    #[test]
    fn test_only_glass_match_has_intermediary() {
        let with_intermediary: Vec<_> = MATCHES
            .iter()
            .filter(|m| m.intermediary.is_some())
            .map(|m| m.id)
            .collect();
        assert_eq!(with_intermediary, vec![2]);
    }

    #[test]
    fn test_badges_earned() {
        assert_eq!(badges_earned(), 3);
    }

    #[test]
    fn test_ratings_in_range() {
        assert!(SERVICES.iter().all(|s| (0.0..=5.0).contains(&s.rating)));
    }
}
