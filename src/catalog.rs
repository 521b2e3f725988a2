/// Fixed reference tables used to synthesise supplier candidates
/// Lookups are total: unmapped sectors fall back to generic values

const SECTOR_SPECIALTIES: &[(&str, &[&str])] = &[
    ("industrie-fabrication", &["Usinage", "Assemblage", "Soudure", "Traitement thermique", "Contrôle qualité"]),
    ("btp-construction", &["Gros œuvre", "Second œuvre", "Électricité", "Plomberie", "Étanchéité"]),
    ("informatique-numerique", &["Développement web", "Infrastructure réseau", "Cybersécurité", "Cloud computing", "IA"]),
    ("energie-environnement", &["Énergie renouvelable", "Audit énergétique", "Traitement des déchets", "Efficacité énergétique"]),
    ("transport-logistique", &["Transport routier", "Entreposage", "Supply chain", "Logistique internationale"]),
    ("sante-medico-social", &["Équipements médicaux", "Services de soins", "Pharmacie", "Dispositifs médicaux"]),
    ("commerce-distribution", &["E-commerce", "Grande distribution", "Commerce de détail", "Marketing digital"]),
    ("conseil-audit-formation", &["Conseil en management", "Audit financier", "Formation professionnelle", "RH"]),
];

const SECTOR_CERTIFICATIONS: &[(&str, &[&str])] = &[
    ("industrie-fabrication", &["ISO 9001", "ISO 14001", "IATF 16949", "CE"]),
    ("btp-construction", &["RGE", "Qualibat", "CSTB", "NF Habitat"]),
    ("informatique-numerique", &["ISO 27001", "CISSP", "PCI DSS", "GDPR"]),
    ("energie-environnement", &["RGE", "ISO 14001", "OHSAS 18001"]),
    ("transport-logistique", &["ATP", "ISO 9001", "IATA", "FIATA"]),
];

const SECTOR_LABELS: &[(&str, &str)] = &[
    ("informatique-numerique", "Informatique et numérique"),
    ("btp-construction", "BTP et construction"),
    ("energie-environnement", "Énergie et environnement"),
    ("transport-logistique", "Transport, logistique et mobilité"),
    ("sante-medico-social", "Santé et médico-social"),
    ("commerce-distribution", "Commerce et distribution"),
    ("conseil-audit-formation", "Conseil, audit et formation"),
];

const DEFAULT_SPECIALTIES: &[&str] = &["Services généraux"];
const DEFAULT_CERTIFICATIONS: &[&str] = &["ISO 9001"];

pub const COMPANY_NAMES: &[&str] = &[
    "Atelier Urbain", "Axiome Bâtiment", "NovaLogistique", "Orion Ingénierie", "Alpinfo Systèmes",
    "Meridien Travaux", "Dynamis Transport", "Voltaire Énergie", "Praxis Conseil", "Arkane Industries",
    "Phenix Logistique", "Sigma Solutions", "Atlantis Consulting", "Boreas Construction", "Zénith Technologies",
];

pub const CITIES: &[&str] = &[
    "Paris", "Lyon", "Marseille", "Toulouse", "Nice", "Nantes", "Montpellier",
    "Strasbourg", "Bordeaux", "Lille", "Rennes", "Reims", "Saint-Étienne",
    "Toulon", "Le Havre", "Grenoble", "Dijon", "Angers", "Nîmes", "Villeurbanne",
];

pub const DEPARTMENTS: &[&str] = &[
    "75 - Paris", "69 - Rhône", "13 - Bouches-du-Rhône", "31 - Haute-Garonne",
    "06 - Alpes-Maritimes", "44 - Loire-Atlantique", "33 - Gironde", "59 - Nord",
];

/// Department assigned to seeded candidates when the tender has no location
pub const DEFAULT_DEPARTMENT: &str = "75 - Paris";

pub const LOGOS: &[&str] = &[
    "/assets/logos/batihexa-logo.png",
    "/assets/logos/energaia-logo.png",
    "/assets/logos/hexatech-logo.png",
    "/assets/logos/medisante-logo.png",
    "/assets/logos/nordis-logistique-logo.png",
];

/// City facet offered on the suggestions page
pub const CITY_FACETS: &[&str] = &["Paris", "Lyon", "Marseille", "Toulouse"];

fn lookup<'a>(table: &[(&str, &'a [&'a str])], sector: &str) -> Option<&'a [&'a str]> {
    table.iter().find(|(key, _)| *key == sector).map(|(_, values)| *values)
}

/// Sectors a non-seeded candidate can be drawn from
pub fn sectors() -> impl Iterator<Item = &'static str> {
    SECTOR_SPECIALTIES.iter().map(|(sector, _)| *sector)
}

pub fn specialties_for(sector: &str) -> &'static [&'static str] {
    lookup(SECTOR_SPECIALTIES, sector).unwrap_or(DEFAULT_SPECIALTIES)
}

pub fn certifications_for(sector: &str) -> &'static [&'static str] {
    lookup(SECTOR_CERTIFICATIONS, sector).unwrap_or(DEFAULT_CERTIFICATIONS)
}

/// Display label of a sector slug.
/// Unknown slugs become "Foo Bar" from "foo-bar"; the first letter of each
/// word is upper-cased with full Unicode case mapping.
pub fn sector_label(sector: &str) -> String {
    if let Some((_, label)) = SECTOR_LABELS.iter().find(|(key, _)| *key == sector) {
        return label.to_string();
    }

    sector
        .replace('-', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
