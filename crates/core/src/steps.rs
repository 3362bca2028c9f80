//! Checklist step generation for deletion requests.
//!
//! When a user starts a deletion flow we attach an ordered checklist to
//! the request. A handful of high-traffic platforms have curated
//! sequences that walk through that platform's actual settings UI; every
//! other platform gets the generic six-step sequence. Order is a guided
//! sequence, not a set, and must be preserved.

/// One generated checklist step, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTemplate {
    /// Stable key identifying the step within its request (e.g. `"login"`).
    pub key: String,
    pub title: String,
    pub description: String,
}

impl StepTemplate {
    fn new(key: &str, title: &str, description: String) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            description,
        }
    }
}

/// Number of steps in the generic fallback sequence.
pub const GENERIC_STEP_COUNT: usize = 6;

/// Platform slugs that have a curated step sequence.
pub const CURATED_SLUGS: &[&str] = &[
    "facebook", "instagram", "google", "tiktok", "linkedin", "spotify", "netflix",
];

/// Generate the ordered checklist for a platform.
///
/// Returns the curated sequence when one exists for `slug`, otherwise the
/// generic six-step sequence. All steps start uncompleted.
pub fn generate_steps(slug: &str, platform_name: &str) -> Vec<StepTemplate> {
    match slug {
        "facebook" => facebook_steps(platform_name),
        "instagram" => instagram_steps(platform_name),
        "google" => google_steps(platform_name),
        "tiktok" => tiktok_steps(platform_name),
        "linkedin" => linkedin_steps(platform_name),
        "spotify" => spotify_steps(platform_name),
        "netflix" => netflix_steps(platform_name),
        _ => generic_steps(platform_name),
    }
}

// ---------------------------------------------------------------------------
// Generic sequence
// ---------------------------------------------------------------------------

fn backup_step(platform_name: &str) -> StepTemplate {
    StepTemplate::new(
        "backup",
        "Last ned dine data (valgfritt)",
        format!(
            "Før du sletter kontoen din, kan du laste ned en kopi av dine data fra {platform_name}."
        ),
    )
}

fn login_step(platform_name: &str) -> StepTemplate {
    StepTemplate::new(
        "login",
        "Logg inn på kontoen",
        format!("Logg inn på din {platform_name}-konto med dine innloggingsdetaljer."),
    )
}

fn generic_steps(platform_name: &str) -> Vec<StepTemplate> {
    vec![
        backup_step(platform_name),
        login_step(platform_name),
        StepTemplate::new(
            "settings",
            "Gå til kontoinnstillinger",
            "Naviger til innstillinger eller kontoinnstillinger i menyen.".to_string(),
        ),
        StepTemplate::new(
            "find-delete",
            "Finn slettealternativet",
            "Se etter 'Slett konto', 'Deaktiver konto' eller lignende alternativ.".to_string(),
        ),
        StepTemplate::new(
            "confirm",
            "Bekreft slettingen",
            "Følg instruksjonene for å bekrefte at du vil slette kontoen. \
             Du kan bli bedt om å oppgi passord."
                .to_string(),
        ),
        StepTemplate::new(
            "verify",
            "Bekreft via e-post",
            "Sjekk e-posten din for en bekreftelseslenke og klikk på den for å \
             fullføre slettingen."
                .to_string(),
        ),
    ]
}

// ---------------------------------------------------------------------------
// Curated sequences
// ---------------------------------------------------------------------------

fn facebook_steps(platform_name: &str) -> Vec<StepTemplate> {
    vec![
        backup_step(platform_name),
        login_step(platform_name),
        StepTemplate::new(
            "fb-settings",
            "Gå til Innstillinger og personvern",
            "Klikk på profilbildet ditt øverst til høyre, deretter \
             'Innstillinger og personvern' → 'Innstillinger'."
                .to_string(),
        ),
        StepTemplate::new(
            "fb-meta",
            "Åpne Meta-kontosenter",
            "Klikk på 'Kontosenter' i menyen til venstre.".to_string(),
        ),
        StepTemplate::new(
            "fb-personal",
            "Gå til Personlige opplysninger",
            "Velg 'Personlige opplysninger' i kontosenteret.".to_string(),
        ),
        StepTemplate::new(
            "fb-ownership",
            "Velg Kontoeierskap og kontroll",
            "Velg 'Kontoeierskap og kontroll' under personlige opplysninger.".to_string(),
        ),
        StepTemplate::new(
            "fb-deactivate",
            "Velg Deaktivering eller sletting",
            "Velg 'Deaktivering eller sletting' og deretter Facebook-kontoen din.".to_string(),
        ),
        StepTemplate::new(
            "fb-delete",
            "Velg Slett konto",
            "Velg 'Slett konto' i stedet for midlertidig deaktivering.".to_string(),
        ),
        StepTemplate::new(
            "fb-password",
            "Bekreft med passord",
            "Skriv inn passordet ditt for å bekrefte at det er deg.".to_string(),
        ),
        StepTemplate::new(
            "fb-confirm",
            "Bekreft permanent sletting",
            "Bekreft at du vil slette kontoen. Merk: Det tar 30 dager før kontoen \
             slettes permanent."
                .to_string(),
        ),
        StepTemplate::new(
            "fb-verify",
            "Bekreft via e-post",
            "Sjekk e-posten din for en bekreftelse fra Facebook på at slettingen er \
             satt i gang."
                .to_string(),
        ),
    ]
}

fn instagram_steps(platform_name: &str) -> Vec<StepTemplate> {
    vec![
        backup_step(platform_name),
        login_step(platform_name),
        StepTemplate::new(
            "ig-profile",
            "Gå til profilen din",
            "Trykk på profilikonet nederst til høyre.".to_string(),
        ),
        StepTemplate::new(
            "ig-settings",
            "Åpne innstillinger",
            "Trykk på hamburgermenyen (≡) øverst til høyre og velg \
             'Innstillinger og personvern'."
                .to_string(),
        ),
        StepTemplate::new(
            "ig-accounts-center",
            "Gå til Kontosenter",
            "Velg 'Kontosenter' → 'Personlige opplysninger' → 'Kontoeierskap og kontroll'."
                .to_string(),
        ),
        StepTemplate::new(
            "ig-delete",
            "Velg Slett konto",
            "Velg 'Deaktivering eller sletting' → 'Slett konto' → velg Instagram-kontoen."
                .to_string(),
        ),
        StepTemplate::new(
            "ig-confirm",
            "Bekreft slettingen",
            "Skriv inn passordet ditt og bekreft slettingen.".to_string(),
        ),
    ]
}

fn google_steps(platform_name: &str) -> Vec<StepTemplate> {
    vec![
        backup_step(platform_name),
        StepTemplate::new(
            "google-account",
            "Gå til Google-kontoen din",
            "Besøk myaccount.google.com og logg inn.".to_string(),
        ),
        StepTemplate::new(
            "google-data",
            "Gå til Data og personvern",
            "Klikk på 'Data og personvern' i menyen til venstre.".to_string(),
        ),
        StepTemplate::new(
            "google-more",
            "Finn flere alternativer",
            "Bla ned til 'Flere alternativer' og klikk på 'Slett Google-kontoen din'."
                .to_string(),
        ),
        StepTemplate::new(
            "google-verify",
            "Bekreft identiteten din",
            "Du kan bli bedt om å oppgi passordet ditt på nytt.".to_string(),
        ),
        StepTemplate::new(
            "google-review",
            "Gjennomgå hva som slettes",
            "Les gjennom informasjonen om hva som vil bli slettet (Gmail, YouTube, \
             Drive, osv.)."
                .to_string(),
        ),
        StepTemplate::new(
            "google-confirm",
            "Bekreft slettingen",
            "Kryss av i boksene for å bekrefte, og klikk 'Slett konto'.".to_string(),
        ),
    ]
}

fn tiktok_steps(platform_name: &str) -> Vec<StepTemplate> {
    vec![
        backup_step(platform_name),
        login_step(platform_name),
        StepTemplate::new(
            "tiktok-profile",
            "Gå til profilen din",
            "Trykk på 'Profil' nederst til høyre.".to_string(),
        ),
        StepTemplate::new(
            "tiktok-menu",
            "Åpne innstillingsmenyen",
            "Trykk på hamburgermenyen (≡) øverst til høyre.".to_string(),
        ),
        StepTemplate::new(
            "tiktok-settings",
            "Velg Innstillinger og personvern",
            "Velg 'Innstillinger og personvern' fra menyen.".to_string(),
        ),
        StepTemplate::new(
            "tiktok-account",
            "Gå til Konto",
            "Velg 'Konto' → 'Slett konto'.".to_string(),
        ),
        StepTemplate::new(
            "tiktok-confirm",
            "Bekreft slettingen",
            "Følg instruksjonene for å bekrefte slettingen. Kontoen deaktiveres i 30 \
             dager før permanent sletting."
                .to_string(),
        ),
    ]
}

fn linkedin_steps(platform_name: &str) -> Vec<StepTemplate> {
    vec![
        backup_step(platform_name),
        login_step(platform_name),
        StepTemplate::new(
            "linkedin-settings",
            "Gå til innstillinger",
            "Klikk på profilbildet ditt, deretter 'Innstillinger og personvern'.".to_string(),
        ),
        StepTemplate::new(
            "linkedin-account",
            "Velg Kontoadministrasjon",
            "Klikk på 'Kontoadministrasjon' i menyen.".to_string(),
        ),
        StepTemplate::new(
            "linkedin-close",
            "Velg Lukk konto",
            "Klikk på 'Lukk konto' og velg en grunn for lukkingen.".to_string(),
        ),
        StepTemplate::new(
            "linkedin-confirm",
            "Bekreft med passord",
            "Skriv inn passordet ditt og bekreft slettingen.".to_string(),
        ),
    ]
}

fn spotify_steps(platform_name: &str) -> Vec<StepTemplate> {
    vec![
        backup_step(platform_name),
        StepTemplate::new(
            "spotify-support",
            "Gå til Spotify Support",
            "Besøk support.spotify.com/contact-spotify-support/".to_string(),
        ),
        StepTemplate::new(
            "spotify-account",
            "Velg Kontohjelp",
            "Velg 'Konto' → 'Jeg vil lukke Spotify-kontoen min permanent'.".to_string(),
        ),
        StepTemplate::new(
            "spotify-login",
            "Logg inn og bekreft",
            "Logg inn på kontoen din og følg instruksjonene for å slette.".to_string(),
        ),
        StepTemplate::new(
            "spotify-cancel",
            "Avbryt eventuelle abonnementer",
            "Hvis du har Premium, må du avbryte abonnementet først.".to_string(),
        ),
    ]
}

fn netflix_steps(platform_name: &str) -> Vec<StepTemplate> {
    vec![
        backup_step(platform_name),
        login_step(platform_name),
        StepTemplate::new(
            "netflix-account",
            "Gå til Konto",
            "Klikk på profilikonet øverst til høyre og velg 'Konto'.".to_string(),
        ),
        StepTemplate::new(
            "netflix-cancel",
            "Avbryt medlemskap",
            "Klikk på 'Avbryt medlemskap' under 'Medlemskap og fakturering'.".to_string(),
        ),
        StepTemplate::new(
            "netflix-delete",
            "Slett kontoen",
            "Etter at medlemskapet er avbrutt, kan du kontakte Netflix kundeservice for \
             å slette kontoen helt."
                .to_string(),
        ),
    ]
}
