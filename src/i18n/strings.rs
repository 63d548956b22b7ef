//! Localized page strings.
//!
//! Strings are stored raw and unescaped; views escape them when rendering.
//! Placeholders use `{name}` and are filled with `str::replace`.

/// All localized user-facing strings for a language, one section per page.
#[derive(Debug)]
pub struct LanguageStrings {
    pub common: CommonStrings,
    pub nav: NavStrings,
    pub home: HomeStrings,
    pub resources: ResourcesStrings,
    pub matching: MatchingStrings,
    pub map: MapStrings,
    pub green_points: GreenPointsStrings,
    pub ideas: IdeasStrings,
    pub services: ServicesStrings,
    pub stories: StoriesStrings,
    pub profile: ProfileStrings,
    pub onboarding: OnboardingStrings,
    pub not_found: NotFoundStrings,
}

#[derive(Debug)]
pub struct CommonStrings {
    pub language: &'static str,
    pub apply: &'static str,
    pub view_details: &'static str,
    pub verified: &'static str,
    pub close: &'static str,
    pub notifications: &'static str,
}

#[derive(Debug)]
pub struct NavStrings {
    pub home: &'static str,
    pub map: &'static str,
    pub resources: &'static str,
    pub green_points: &'static str,
    pub ideas: &'static str,
    pub services: &'static str,
    pub stories: &'static str,
    pub profile: &'static str,
}

#[derive(Debug)]
pub struct HomeStrings {
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub browse_resources: &'static str,
    pub get_started: &'static str,
    pub overview_title: &'static str,
    pub stat_active_resources: &'static str,
    pub stat_deals_matched: &'static str,
    pub stat_co2_saved: &'static str,
    pub stat_green_points: &'static str,
    /// Placeholders: {value}
    pub trend_percent_month: &'static str,
    pub trend_this_month: &'static str,
    pub trend_community_total: &'static str,
    pub map_title: &'static str,
    pub map_text: &'static str,
    pub matching_title: &'static str,
    pub matching_text: &'static str,
    pub ideas_title: &'static str,
    pub ideas_text: &'static str,
}

#[derive(Debug)]
pub struct ResourcesStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub add_resource: &'static str,
    pub filters: &'static str,
    pub resource_type: &'static str,
    pub distance: &'static str,
    pub verification: &'static str,
    pub verified_only: &'static str,
    pub reset_filters: &'static str,
    pub search_placeholder: &'static str,
    pub quantity: &'static str,
    /// Placeholders: {value}
    pub co2_saved_month: &'static str,
    pub request_info: &'static str,
}

#[derive(Debug)]
pub struct MatchingStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Placeholders: {score}
    pub match_badge: &'static str,
    /// Placeholders: {resource}
    pub exchange: &'static str,
    pub provider: &'static str,
    pub intermediary: &'static str,
    pub receiver: &'static str,
    /// Placeholders: {distance}
    pub distance: &'static str,
    /// Placeholders: {value}
    pub co2_saved: &'static str,
    pub propose: &'static str,
}

#[derive(Debug)]
pub struct MapStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub legend: &'static str,
    /// Placeholders: {count}
    pub companies: &'static str,
    pub click_cluster: &'static str,
    pub clusters_info: &'static str,
}

#[derive(Debug)]
pub struct GreenPointsStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub total_co2: &'static str,
    /// Placeholders: {value}
    pub co2_month_note: &'static str,
    pub green_points: &'static str,
    /// Placeholders: {percent}
    pub rank_note: &'static str,
    pub completed_deals: &'static str,
    /// Placeholders: {count}
    pub deals_month_note: &'static str,
    pub badges_earned: &'static str,
    /// Placeholders: {count}
    pub badges_remaining: &'static str,
    pub chart_co2: &'static str,
    pub chart_resources: &'static str,
    pub badges_title: &'static str,
    pub earned: &'static str,
}

#[derive(Debug)]
pub struct IdeasStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub post_idea: &'static str,
    pub votes: &'static str,
    /// Placeholders: {count}
    pub comments: &'static str,
}

#[derive(Debug)]
pub struct ServicesStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Placeholders: {count}
    pub reviews: &'static str,
    pub contact: &'static str,
    pub view_profile: &'static str,
}

#[derive(Debug)]
pub struct StoriesStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub co2_saved: &'static str,
    pub distance: &'static str,
    pub materials: &'static str,
}

#[derive(Debug)]
pub struct ProfileStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tab_company: &'static str,
    pub tab_resources: &'static str,
    pub tab_settings: &'static str,
    pub company_name: &'static str,
    pub sector: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub cancel: &'static str,
    pub save: &'static str,
    pub your_resources: &'static str,
    pub add_resource: &'static str,
    /// Placeholders: {age}, {views}
    pub listed: &'static str,
    pub edit: &'static str,
    pub remove: &'static str,
    pub account_settings: &'static str,
    pub theme: &'static str,
    pub dark_mode: &'static str,
    pub light_mode: &'static str,
    pub toggle_theme: &'static str,
    pub notifications: &'static str,
    pub notifications_text: &'static str,
    pub configure_notifications: &'static str,
    pub log_out: &'static str,
    pub danger_zone: &'static str,
    pub danger_text: &'static str,
    pub deactivate: &'static str,
    pub logged_out_title: &'static str,
    pub logged_out_text: &'static str,
    pub deactivated_title: &'static str,
    pub deactivated_text: &'static str,
    pub redirecting: &'static str,
}

#[derive(Debug)]
pub struct OnboardingStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub steps: [&'static str; 4],
    pub company_heading: &'static str,
    pub company_name: &'static str,
    pub company_name_placeholder: &'static str,
    pub sector: &'static str,
    pub sector_placeholder: &'static str,
    pub email: &'static str,
    pub email_placeholder: &'static str,
    pub location_heading: &'static str,
    pub address: &'static str,
    pub address_placeholder: &'static str,
    pub city: &'static str,
    pub postal: &'static str,
    pub postal_placeholder: &'static str,
    pub map_preview: &'static str,
    pub resources_heading: &'static str,
    pub resources_text: &'static str,
    pub resources_hint: &'static str,
    pub resources_selected_one: &'static str,
    /// Placeholders: {count}
    pub resources_selected_many: &'static str,
    /// Labels in `ResourceKind::ALL` order
    pub resource_kinds: [&'static str; 6],
    pub upload_heading: &'static str,
    pub upload_text: &'static str,
    pub upload_drop: &'static str,
    pub upload_limits: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub complete: &'static str,
    pub welcome_title: &'static str,
    pub welcome_text: &'static str,
    pub browse_resources: &'static str,

    // Field errors
    pub error_company_name: &'static str,
    pub error_sector: &'static str,
    pub error_email: &'static str,
    pub error_address: &'static str,
    pub error_city: &'static str,
    pub error_postal: &'static str,
    pub error_resources: &'static str,

    // Notifications
    pub toast_missing_title: &'static str,
    pub toast_company_text: &'static str,
    pub toast_location_text: &'static str,
    pub toast_no_resources_title: &'static str,
    pub toast_no_resources_text: &'static str,
    pub toast_success_title: &'static str,
    pub toast_success_text: &'static str,
}

#[derive(Debug)]
pub struct NotFoundStrings {
    pub title: &'static str,
    pub message: &'static str,
    pub back_home: &'static str,
}

// ==================== English Strings ====================

/// English language strings (canonical)
pub static ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    common: CommonStrings {
        language: "Language",
        apply: "Apply",
        view_details: "View Details",
        verified: "Verified",
        close: "Close",
        notifications: "Notifications",
    },
    nav: NavStrings {
        home: "Home",
        map: "Map",
        resources: "Resources",
        green_points: "Green Points",
        ideas: "Ideas Lab",
        services: "Services",
        stories: "Stories",
        profile: "Profile",
    },
    home: HomeStrings {
        hero_title: "Transform Industrial Waste into Value",
        hero_subtitle: "Connect with businesses to exchange surplus materials, reduce waste, \
and build a sustainable circular economy together.",
        browse_resources: "Browse Resources",
        get_started: "Get Started",
        overview_title: "Platform Overview",
        stat_active_resources: "Active Resources",
        stat_deals_matched: "Deals Matched",
        stat_co2_saved: "CO₂ Saved",
        stat_green_points: "Green Points",
        trend_percent_month: "{value} this month",
        trend_this_month: "This month",
        trend_community_total: "Community total",
        map_title: "Explore Heat Map",
        map_text: "Discover nearby resources and potential partners on an interactive map",
        matching_title: "Smart Matching",
        matching_text: "AI-powered suggestions to find your perfect resource partner",
        ideas_title: "Ideas Lab",
        ideas_text: "Collaborate on innovative circular economy projects",
    },
    resources: ResourcesStrings {
        title: "Resource Hub",
        subtitle: "Discover available industrial resources",
        add_resource: "Add Resource",
        filters: "Filters",
        resource_type: "Resource Type",
        distance: "Distance",
        verification: "Verification",
        verified_only: "Verified Only",
        reset_filters: "Reset Filters",
        search_placeholder: "Search resources...",
        quantity: "Quantity:",
        co2_saved_month: "{value} CO₂ saved/month",
        request_info: "Request Info",
    },
    matching: MatchingStrings {
        title: "Smart Matching",
        subtitle: "AI-powered recommendations to connect your resources with the right partners",
        match_badge: "{score}% Match",
        exchange: "{resource} Exchange",
        provider: "Provider",
        intermediary: "Intermediary",
        receiver: "Receiver",
        distance: "{distance} distance",
        co2_saved: "{value} CO₂ saved",
        propose: "Propose Match",
    },
    map: MapStrings {
        title: "Resource Map",
        subtitle: "Explore industrial resource clusters across the region",
        legend: "Resource Types",
        companies: "{count} companies",
        click_cluster: "Click on a cluster to see the companies behind it",
        clusters_info: "Each cluster groups companies offering the same type of resource",
    },
    green_points: GreenPointsStrings {
        title: "Green Points Dashboard",
        subtitle: "Track your environmental impact and community achievements",
        total_co2: "Total CO₂ Saved",
        co2_month_note: "+{value} this month",
        green_points: "Green Points",
        rank_note: "Top {percent}% in region",
        completed_deals: "Completed Deals",
        deals_month_note: "{count} this month",
        badges_earned: "Badges Earned",
        badges_remaining: "{count} remaining",
        chart_co2: "CO₂ Saved Over Time",
        chart_resources: "Resources Exchanged",
        badges_title: "Achievement Badges",
        earned: "Earned",
    },
    ideas: IdeasStrings {
        title: "Circular Ideas Lab",
        subtitle: "Collaborate on innovative circular economy projects",
        post_idea: "Post New Idea",
        votes: "votes",
        comments: "{count} comments",
    },
    services: ServicesStrings {
        title: "Services Marketplace",
        subtitle: "Find logistics, testing, and equipment providers for your circular economy needs",
        reviews: "({count} reviews)",
        contact: "Contact Provider",
        view_profile: "View Profile",
    },
    stories: StoriesStrings {
        title: "Success Stories",
        subtitle: "Real impact from circular economy partnerships",
        co2_saved: "CO₂ Saved",
        distance: "Distance",
        materials: "Materials",
    },
    profile: ProfileStrings {
        title: "Company Profile",
        subtitle: "Manage your company information and settings",
        tab_company: "Company Info",
        tab_resources: "Resources",
        tab_settings: "Settings",
        company_name: "Company Name",
        sector: "Industry Sector",
        email: "Contact Email",
        phone: "Phone Number",
        address: "Address",
        cancel: "Cancel",
        save: "Save Changes",
        your_resources: "Your Resources",
        add_resource: "Add Resource",
        listed: "Listed: {age} • {views} views",
        edit: "Edit",
        remove: "Remove",
        account_settings: "Account Settings",
        theme: "Theme",
        dark_mode: "Dark mode",
        light_mode: "Light mode",
        toggle_theme: "Switch theme",
        notifications: "Email Notifications",
        notifications_text: "Receive updates about matches, messages, and platform news",
        configure_notifications: "Configure Notifications",
        log_out: "Log Out",
        danger_zone: "Danger Zone",
        danger_text: "Irreversible actions that affect your account",
        deactivate: "Deactivate Account",
        logged_out_title: "Logged out",
        logged_out_text: "You have been successfully logged out.",
        deactivated_title: "Account deactivated",
        deactivated_text: "Your account has been deactivated.",
        redirecting: "Redirecting to the home page...",
    },
    onboarding: OnboardingStrings {
        title: "Company Onboarding",
        subtitle: "Let's set up your circular economy profile",
        steps: ["Company Info", "Location", "Resources", "Verification"],
        company_heading: "Company Information",
        company_name: "Company Name",
        company_name_placeholder: "Enter company name",
        sector: "Industry Sector",
        sector_placeholder: "e.g., Manufacturing, Energy, Construction",
        email: "Contact Email",
        email_placeholder: "contact@company.com",
        location_heading: "Location Details",
        address: "Address",
        address_placeholder: "Street address",
        city: "City",
        postal: "Postal Code",
        postal_placeholder: "Postal code",
        map_preview: "Map preview will appear here",
        resources_heading: "Resource Types",
        resources_text: "Select the types of resources your company can provide or needs",
        resources_hint: "Please select at least one resource type to continue",
        resources_selected_one: "1 resource type selected",
        resources_selected_many: "{count} resource types selected",
        resource_kinds: [
            "Waste Heat",
            "Glass Scraps",
            "Wood Residues",
            "Used Oils",
            "Metal Waste",
            "Plastic Waste",
        ],
        upload_heading: "Upload Certificates",
        upload_text: "Upload relevant certifications and documentation",
        upload_drop: "Drag and drop files here or click to browse",
        upload_limits: "PDF, JPG, PNG up to 10MB",
        previous: "Previous",
        next: "Next",
        complete: "Complete",
        welcome_title: "Welcome to CircularFlow!",
        welcome_text: "Your company profile is now active. Start exploring resources and \
connecting with partners.",
        browse_resources: "Browse Resources",
        error_company_name: "Company name must be at least 2 characters",
        error_sector: "Industry sector is required",
        error_email: "Please enter a valid email address",
        error_address: "Address is required",
        error_city: "City is required",
        error_postal: "Postal code is required",
        error_resources: "Please select at least one resource type",
        toast_missing_title: "Missing Information",
        toast_company_text: "Please fill in all required fields correctly.",
        toast_location_text: "Please fill in all location details.",
        toast_no_resources_title: "No Resources Selected",
        toast_no_resources_text: "Please select at least one resource type.",
        toast_success_title: "Success!",
        toast_success_text: "Your company profile has been created.",
    },
    not_found: NotFoundStrings {
        title: "404",
        message: "Oops! Page not found",
        back_home: "Return to Home",
    },
};

// ==================== French Strings ====================

pub static FRENCH_STRINGS: LanguageStrings = LanguageStrings {
    common: CommonStrings {
        language: "Langue",
        apply: "Appliquer",
        view_details: "Voir les détails",
        verified: "Vérifié",
        close: "Fermer",
        notifications: "Notifications",
    },
    nav: NavStrings {
        home: "Accueil",
        map: "Carte",
        resources: "Ressources",
        green_points: "Points verts",
        ideas: "Labo d'idées",
        services: "Services",
        stories: "Témoignages",
        profile: "Profil",
    },
    home: HomeStrings {
        hero_title: "Transformez les déchets industriels en valeur",
        hero_subtitle: "Connectez-vous avec des entreprises pour échanger des matériaux \
excédentaires, réduire les déchets et bâtir ensemble une économie circulaire durable.",
        browse_resources: "Parcourir les ressources",
        get_started: "Commencer",
        overview_title: "Aperçu de la plateforme",
        stat_active_resources: "Ressources actives",
        stat_deals_matched: "Accords conclus",
        stat_co2_saved: "CO₂ économisé",
        stat_green_points: "Points verts",
        trend_percent_month: "{value} ce mois-ci",
        trend_this_month: "Ce mois-ci",
        trend_community_total: "Total de la communauté",
        map_title: "Explorer la carte",
        map_text: "Découvrez les ressources et partenaires potentiels à proximité sur une carte interactive",
        matching_title: "Mise en relation intelligente",
        matching_text: "Des suggestions assistées par l'IA pour trouver le partenaire idéal",
        ideas_title: "Labo d'idées",
        ideas_text: "Collaborez sur des projets innovants d'économie circulaire",
    },
    resources: ResourcesStrings {
        title: "Centre de ressources",
        subtitle: "Découvrez les ressources industrielles disponibles",
        add_resource: "Ajouter une ressource",
        filters: "Filtres",
        resource_type: "Type de ressource",
        distance: "Distance",
        verification: "Vérification",
        verified_only: "Vérifiées uniquement",
        reset_filters: "Réinitialiser les filtres",
        search_placeholder: "Rechercher des ressources...",
        quantity: "Quantité :",
        co2_saved_month: "{value} de CO₂ économisées/mois",
        request_info: "Demander des informations",
    },
    matching: MatchingStrings {
        title: "Mise en relation intelligente",
        subtitle: "Des recommandations assistées par l'IA pour relier vos ressources aux bons partenaires",
        match_badge: "Compatibilité {score} %",
        exchange: "Échange : {resource}",
        provider: "Fournisseur",
        intermediary: "Intermédiaire",
        receiver: "Receveur",
        distance: "{distance} de distance",
        co2_saved: "{value} de CO₂ économisées",
        propose: "Proposer l'échange",
    },
    map: MapStrings {
        title: "Carte des ressources",
        subtitle: "Explorez les groupes de ressources industrielles de la région",
        legend: "Types de ressources",
        companies: "{count} entreprises",
        click_cluster: "Cliquez sur un groupe pour voir les entreprises concernées",
        clusters_info: "Chaque groupe rassemble des entreprises proposant le même type de ressource",
    },
    green_points: GreenPointsStrings {
        title: "Tableau de bord des points verts",
        subtitle: "Suivez votre impact environnemental et vos réussites collectives",
        total_co2: "CO₂ total économisé",
        co2_month_note: "+{value} ce mois-ci",
        green_points: "Points verts",
        rank_note: "Top {percent} % de la région",
        completed_deals: "Accords finalisés",
        deals_month_note: "{count} ce mois-ci",
        badges_earned: "Badges obtenus",
        badges_remaining: "{count} restant(s)",
        chart_co2: "CO₂ économisé au fil du temps",
        chart_resources: "Ressources échangées",
        badges_title: "Badges de réussite",
        earned: "Obtenu",
    },
    ideas: IdeasStrings {
        title: "Labo d'idées circulaires",
        subtitle: "Collaborez sur des projets innovants d'économie circulaire",
        post_idea: "Publier une idée",
        votes: "votes",
        comments: "{count} commentaires",
    },
    services: ServicesStrings {
        title: "Place de marché des services",
        subtitle: "Trouvez des prestataires de logistique, d'analyse et d'équipement pour vos besoins circulaires",
        reviews: "({count} avis)",
        contact: "Contacter le prestataire",
        view_profile: "Voir le profil",
    },
    stories: StoriesStrings {
        title: "Témoignages de réussite",
        subtitle: "L'impact réel des partenariats d'économie circulaire",
        co2_saved: "CO₂ économisé",
        distance: "Distance",
        materials: "Matériaux",
    },
    profile: ProfileStrings {
        title: "Profil de l'entreprise",
        subtitle: "Gérez les informations et les paramètres de votre entreprise",
        tab_company: "Entreprise",
        tab_resources: "Ressources",
        tab_settings: "Paramètres",
        company_name: "Nom de l'entreprise",
        sector: "Secteur d'activité",
        email: "E-mail de contact",
        phone: "Numéro de téléphone",
        address: "Adresse",
        cancel: "Annuler",
        save: "Enregistrer",
        your_resources: "Vos ressources",
        add_resource: "Ajouter une ressource",
        listed: "Publiée : {age} • {views} vues",
        edit: "Modifier",
        remove: "Retirer",
        account_settings: "Paramètres du compte",
        theme: "Thème",
        dark_mode: "Mode sombre",
        light_mode: "Mode clair",
        toggle_theme: "Changer de thème",
        notifications: "Notifications par e-mail",
        notifications_text: "Recevez des nouvelles sur les correspondances, les messages et la plateforme",
        configure_notifications: "Configurer les notifications",
        log_out: "Se déconnecter",
        danger_zone: "Zone de danger",
        danger_text: "Actions irréversibles concernant votre compte",
        deactivate: "Désactiver le compte",
        logged_out_title: "Déconnecté",
        logged_out_text: "Vous avez été déconnecté avec succès.",
        deactivated_title: "Compte désactivé",
        deactivated_text: "Votre compte a été désactivé.",
        redirecting: "Redirection vers la page d'accueil...",
    },
    onboarding: OnboardingStrings {
        title: "Inscription de l'entreprise",
        subtitle: "Configurons votre profil d'économie circulaire",
        steps: ["Entreprise", "Localisation", "Ressources", "Vérification"],
        company_heading: "Informations sur l'entreprise",
        company_name: "Nom de l'entreprise",
        company_name_placeholder: "Saisissez le nom de l'entreprise",
        sector: "Secteur d'activité",
        sector_placeholder: "ex. : Industrie, Énergie, Construction",
        email: "E-mail de contact",
        email_placeholder: "contact@entreprise.com",
        location_heading: "Localisation",
        address: "Adresse",
        address_placeholder: "Adresse postale",
        city: "Ville",
        postal: "Code postal",
        postal_placeholder: "Code postal",
        map_preview: "L'aperçu de la carte apparaîtra ici",
        resources_heading: "Types de ressources",
        resources_text: "Sélectionnez les types de ressources que votre entreprise peut fournir ou recherche",
        resources_hint: "Veuillez sélectionner au moins un type de ressource pour continuer",
        resources_selected_one: "1 type de ressource sélectionné",
        resources_selected_many: "{count} types de ressources sélectionnés",
        resource_kinds: [
            "Chaleur fatale",
            "Débris de verre",
            "Résidus de bois",
            "Huiles usagées",
            "Déchets métalliques",
            "Déchets plastiques",
        ],
        upload_heading: "Téléverser des certificats",
        upload_text: "Téléversez les certifications et documents pertinents",
        upload_drop: "Glissez-déposez des fichiers ici ou cliquez pour parcourir",
        upload_limits: "PDF, JPG, PNG jusqu'à 10 Mo",
        previous: "Précédent",
        next: "Suivant",
        complete: "Terminer",
        welcome_title: "Bienvenue sur CircularFlow !",
        welcome_text: "Le profil de votre entreprise est maintenant actif. Explorez les \
ressources et entrez en contact avec des partenaires.",
        browse_resources: "Parcourir les ressources",
        error_company_name: "Le nom de l'entreprise doit comporter au moins 2 caractères",
        error_sector: "Le secteur d'activité est requis",
        error_email: "Veuillez saisir une adresse e-mail valide",
        error_address: "L'adresse est requise",
        error_city: "La ville est requise",
        error_postal: "Le code postal est requis",
        error_resources: "Veuillez sélectionner au moins un type de ressource",
        toast_missing_title: "Informations manquantes",
        toast_company_text: "Veuillez remplir correctement tous les champs obligatoires.",
        toast_location_text: "Veuillez renseigner toutes les informations de localisation.",
        toast_no_resources_title: "Aucune ressource sélectionnée",
        toast_no_resources_text: "Veuillez sélectionner au moins un type de ressource.",
        toast_success_title: "Succès !",
        toast_success_text: "Le profil de votre entreprise a été créé.",
    },
    not_found: NotFoundStrings {
        title: "404",
        message: "Oups ! Page introuvable",
        back_home: "Retour à l'accueil",
    },
};

// ==================== Arabic Strings ====================

pub static ARABIC_STRINGS: LanguageStrings = LanguageStrings {
    common: CommonStrings {
        language: "اللغة",
        apply: "تطبيق",
        view_details: "عرض التفاصيل",
        verified: "موثق",
        close: "إغلاق",
        notifications: "الإشعارات",
    },
    nav: NavStrings {
        home: "الرئيسية",
        map: "الخريطة",
        resources: "الموارد",
        green_points: "النقاط الخضراء",
        ideas: "مختبر الأفكار",
        services: "الخدمات",
        stories: "قصص النجاح",
        profile: "الملف الشخصي",
    },
    home: HomeStrings {
        hero_title: "حوّل النفايات الصناعية إلى قيمة",
        hero_subtitle: "تواصل مع الشركات لتبادل المواد الفائضة وتقليل النفايات وبناء اقتصاد دائري مستدام معًا.",
        browse_resources: "تصفح الموارد",
        get_started: "ابدأ الآن",
        overview_title: "نظرة عامة على المنصة",
        stat_active_resources: "الموارد النشطة",
        stat_deals_matched: "الصفقات المطابقة",
        stat_co2_saved: "ثاني أكسيد الكربون الموفَّر",
        stat_green_points: "النقاط الخضراء",
        trend_percent_month: "{value} هذا الشهر",
        trend_this_month: "هذا الشهر",
        trend_community_total: "إجمالي المجتمع",
        map_title: "استكشف الخريطة الحرارية",
        map_text: "اكتشف الموارد والشركاء المحتملين القريبين على خريطة تفاعلية",
        matching_title: "المطابقة الذكية",
        matching_text: "اقتراحات مدعومة بالذكاء الاصطناعي للعثور على الشريك المثالي",
        ideas_title: "مختبر الأفكار",
        ideas_text: "تعاون في مشاريع مبتكرة للاقتصاد الدائري",
    },
    resources: ResourcesStrings {
        title: "مركز الموارد",
        subtitle: "اكتشف الموارد الصناعية المتاحة",
        add_resource: "إضافة مورد",
        filters: "عوامل التصفية",
        resource_type: "نوع المورد",
        distance: "المسافة",
        verification: "التوثيق",
        verified_only: "الموثقة فقط",
        reset_filters: "إعادة ضبط عوامل التصفية",
        search_placeholder: "ابحث عن الموارد...",
        quantity: "الكمية:",
        co2_saved_month: "{value} من ثاني أكسيد الكربون موفَّرة شهريًا",
        request_info: "طلب معلومات",
    },
    matching: MatchingStrings {
        title: "المطابقة الذكية",
        subtitle: "توصيات مدعومة بالذكاء الاصطناعي لربط مواردك بالشركاء المناسبين",
        match_badge: "تطابق {score}%",
        exchange: "تبادل {resource}",
        provider: "المورِّد",
        intermediary: "الوسيط",
        receiver: "المستلم",
        distance: "المسافة {distance}",
        co2_saved: "{value} من ثاني أكسيد الكربون موفَّرة",
        propose: "اقترح المطابقة",
    },
    map: MapStrings {
        title: "خريطة الموارد",
        subtitle: "استكشف تجمعات الموارد الصناعية في المنطقة",
        legend: "أنواع الموارد",
        companies: "{count} شركات",
        click_cluster: "انقر على تجمع لعرض الشركات التابعة له",
        clusters_info: "يجمع كل تجمع الشركات التي تقدم النوع نفسه من الموارد",
    },
    green_points: GreenPointsStrings {
        title: "لوحة النقاط الخضراء",
        subtitle: "تابع أثرك البيئي وإنجازات المجتمع",
        total_co2: "إجمالي ثاني أكسيد الكربون الموفَّر",
        co2_month_note: "+{value} هذا الشهر",
        green_points: "النقاط الخضراء",
        rank_note: "ضمن أفضل {percent}% في المنطقة",
        completed_deals: "الصفقات المكتملة",
        deals_month_note: "{count} هذا الشهر",
        badges_earned: "الشارات المكتسبة",
        badges_remaining: "{count} متبقية",
        chart_co2: "ثاني أكسيد الكربون الموفَّر عبر الزمن",
        chart_resources: "الموارد المتبادلة",
        badges_title: "شارات الإنجاز",
        earned: "مكتسبة",
    },
    ideas: IdeasStrings {
        title: "مختبر الأفكار الدائرية",
        subtitle: "تعاون في مشاريع مبتكرة للاقتصاد الدائري",
        post_idea: "انشر فكرة جديدة",
        votes: "أصوات",
        comments: "{count} تعليقات",
    },
    services: ServicesStrings {
        title: "سوق الخدمات",
        subtitle: "اعثر على مزودي الخدمات اللوجستية والاختبار والمعدات لاحتياجات الاقتصاد الدائري",
        reviews: "({count} تقييمات)",
        contact: "تواصل مع المزوّد",
        view_profile: "عرض الملف",
    },
    stories: StoriesStrings {
        title: "قصص النجاح",
        subtitle: "أثر حقيقي من شراكات الاقتصاد الدائري",
        co2_saved: "ثاني أكسيد الكربون الموفَّر",
        distance: "المسافة",
        materials: "المواد",
    },
    profile: ProfileStrings {
        title: "ملف الشركة",
        subtitle: "أدر معلومات شركتك وإعداداتها",
        tab_company: "معلومات الشركة",
        tab_resources: "الموارد",
        tab_settings: "الإعدادات",
        company_name: "اسم الشركة",
        sector: "القطاع الصناعي",
        email: "البريد الإلكتروني للتواصل",
        phone: "رقم الهاتف",
        address: "العنوان",
        cancel: "إلغاء",
        save: "حفظ التغييرات",
        your_resources: "مواردك",
        add_resource: "إضافة مورد",
        listed: "نُشر: {age} • {views} مشاهدة",
        edit: "تعديل",
        remove: "إزالة",
        account_settings: "إعدادات الحساب",
        theme: "المظهر",
        dark_mode: "الوضع الداكن",
        light_mode: "الوضع الفاتح",
        toggle_theme: "تبديل المظهر",
        notifications: "إشعارات البريد الإلكتروني",
        notifications_text: "تلقَّ تحديثات حول المطابقات والرسائل وأخبار المنصة",
        configure_notifications: "إعداد الإشعارات",
        log_out: "تسجيل الخروج",
        danger_zone: "منطقة الخطر",
        danger_text: "إجراءات لا يمكن التراجع عنها تؤثر في حسابك",
        deactivate: "تعطيل الحساب",
        logged_out_title: "تم تسجيل الخروج",
        logged_out_text: "تم تسجيل خروجك بنجاح.",
        deactivated_title: "تم تعطيل الحساب",
        deactivated_text: "تم تعطيل حسابك.",
        redirecting: "جارٍ التحويل إلى الصفحة الرئيسية...",
    },
    onboarding: OnboardingStrings {
        title: "تسجيل الشركة",
        subtitle: "لنُعِدّ ملفك في الاقتصاد الدائري",
        steps: ["معلومات الشركة", "الموقع", "الموارد", "التحقق"],
        company_heading: "معلومات الشركة",
        company_name: "اسم الشركة",
        company_name_placeholder: "أدخل اسم الشركة",
        sector: "القطاع الصناعي",
        sector_placeholder: "مثال: التصنيع، الطاقة، البناء",
        email: "البريد الإلكتروني للتواصل",
        email_placeholder: "contact@company.com",
        location_heading: "تفاصيل الموقع",
        address: "العنوان",
        address_placeholder: "عنوان الشارع",
        city: "المدينة",
        postal: "الرمز البريدي",
        postal_placeholder: "الرمز البريدي",
        map_preview: "ستظهر معاينة الخريطة هنا",
        resources_heading: "أنواع الموارد",
        resources_text: "اختر أنواع الموارد التي يمكن لشركتك توفيرها أو تحتاجها",
        resources_hint: "يرجى اختيار نوع مورد واحد على الأقل للمتابعة",
        resources_selected_one: "تم اختيار نوع مورد واحد",
        resources_selected_many: "تم اختيار {count} أنواع من الموارد",
        resource_kinds: [
            "الحرارة المهدرة",
            "بقايا الزجاج",
            "مخلفات الخشب",
            "الزيوت المستعملة",
            "النفايات المعدنية",
            "النفايات البلاستيكية",
        ],
        upload_heading: "رفع الشهادات",
        upload_text: "ارفع الشهادات والوثائق ذات الصلة",
        upload_drop: "اسحب الملفات وأفلتها هنا أو انقر للتصفح",
        upload_limits: "PDF أو JPG أو PNG حتى 10 ميغابايت",
        previous: "السابق",
        next: "التالي",
        complete: "إنهاء",
        welcome_title: "مرحبًا بك في CircularFlow!",
        welcome_text: "ملف شركتك نشط الآن. ابدأ باستكشاف الموارد والتواصل مع الشركاء.",
        browse_resources: "تصفح الموارد",
        error_company_name: "يجب أن يتكون اسم الشركة من حرفين على الأقل",
        error_sector: "القطاع الصناعي مطلوب",
        error_email: "يرجى إدخال بريد إلكتروني صالح",
        error_address: "العنوان مطلوب",
        error_city: "المدينة مطلوبة",
        error_postal: "الرمز البريدي مطلوب",
        error_resources: "يرجى اختيار نوع مورد واحد على الأقل",
        toast_missing_title: "معلومات ناقصة",
        toast_company_text: "يرجى تعبئة جميع الحقول المطلوبة بشكل صحيح.",
        toast_location_text: "يرجى تعبئة جميع تفاصيل الموقع.",
        toast_no_resources_title: "لم يتم اختيار موارد",
        toast_no_resources_text: "يرجى اختيار نوع مورد واحد على الأقل.",
        toast_success_title: "تم بنجاح!",
        toast_success_text: "تم إنشاء ملف شركتك.",
    },
    not_found: NotFoundStrings {
        title: "404",
        message: "عذرًا! الصفحة غير موجودة",
        back_home: "العودة إلى الرئيسية",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> [&'static LanguageStrings; 3] {
        [&ENGLISH_STRINGS, &FRENCH_STRINGS, &ARABIC_STRINGS]
    }

    // ==================== Completeness Tests ====================

    #[test]
    fn test_nav_labels_not_empty() {
        for strings in all() {
            let nav = &strings.nav;
            for label in [
                nav.home,
                nav.map,
                nav.resources,
                nav.green_points,
                nav.ideas,
                nav.services,
                nav.stories,
                nav.profile,
            ] {
                assert!(!label.is_empty());
            }
        }
    }

    #[test]
    fn test_onboarding_steps_and_kinds_not_empty() {
        for strings in all() {
            assert!(strings.onboarding.steps.iter().all(|s| !s.is_empty()));
            assert!(strings.onboarding.resource_kinds.iter().all(|s| !s.is_empty()));
        }
    }

    #[test]
    fn test_dictionaries_differ() {
        assert_ne!(ENGLISH_STRINGS.home.hero_title, FRENCH_STRINGS.home.hero_title);
        assert_ne!(ENGLISH_STRINGS.home.hero_title, ARABIC_STRINGS.home.hero_title);
    }

    // ==================== Placeholder Tests ====================

    #[test]
    fn test_count_placeholders_present() {
        for strings in all() {
            assert!(strings.map.companies.contains("{count}"));
            assert!(strings.ideas.comments.contains("{count}"));
            assert!(strings.services.reviews.contains("{count}"));
            assert!(strings.green_points.badges_remaining.contains("{count}"));
            assert!(strings.onboarding.resources_selected_many.contains("{count}"));
        }
    }

    #[test]
    fn test_value_placeholders_present() {
        for strings in all() {
            assert!(strings.home.trend_percent_month.contains("{value}"));
            assert!(strings.resources.co2_saved_month.contains("{value}"));
            assert!(strings.matching.co2_saved.contains("{value}"));
            assert!(strings.matching.match_badge.contains("{score}"));
            assert!(strings.matching.exchange.contains("{resource}"));
            assert!(strings.green_points.rank_note.contains("{percent}"));
        }
    }

    #[test]
    fn test_profile_listed_placeholders() {
        for strings in all() {
            assert!(strings.profile.listed.contains("{age}"));
            assert!(strings.profile.listed.contains("{views}"));
        }
    }
}
