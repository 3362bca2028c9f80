//! Built-in platform catalog.
//!
//! This is the seed data the server upserts (keyed by slug) at startup.
//! Descriptions are user-facing Norwegian copy; `difficulty` and
//! `estimated_time` reflect how painful each platform's deletion flow is
//! in practice.

use crate::status::Difficulty;

/// One catalog entry, upserted into the `platforms` table at startup.
#[derive(Debug, Clone)]
pub struct PlatformSeed {
    pub slug: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    /// Rough user-facing estimate, e.g. `"10-15 minutter"`.
    pub estimated_time: &'static str,
    /// Platform's own deletion guide, when it publishes one.
    pub guide_url: Option<&'static str>,
}

pub const CATEGORY_SOCIAL: &str = "Sosiale medier";
pub const CATEGORY_STREAMING: &str = "Strømming";
pub const CATEGORY_SHOPPING: &str = "E-handel";
pub const CATEGORY_DATING: &str = "Dating";
pub const CATEGORY_GAMING: &str = "Gaming";
pub const CATEGORY_MESSAGING: &str = "Kommunikasjon";
pub const CATEGORY_OTHER: &str = "Annet";

/// The built-in catalog. Keep sorted by slug.
pub const PLATFORM_CATALOG: &[PlatformSeed] = &[
    PlatformSeed {
        slug: "airbnb",
        name: "Airbnb",
        category: CATEGORY_OTHER,
        description: "Utleieplattform for overnatting. Sletting krever at alle reservasjoner er avsluttet.",
        difficulty: Difficulty::Medium,
        estimated_time: "10-15 minutter",
        guide_url: Some("https://www.airbnb.com/help/article/240"),
    },
    PlatformSeed {
        slug: "amazon",
        name: "Amazon",
        category: CATEGORY_SHOPPING,
        description: "Netthandel. Kontosletting må gjøres via kundeservice og lukker også tilknyttede tjenester som Prime.",
        difficulty: Difficulty::Hard,
        estimated_time: "20-30 minutter",
        guide_url: Some("https://www.amazon.com/gp/help/customer/display.html?nodeId=GDK92DNLSGWTV6MP"),
    },
    PlatformSeed {
        slug: "bumble",
        name: "Bumble",
        category: CATEGORY_DATING,
        description: "Datingapp. Kontoen kan slettes direkte i appen under innstillinger.",
        difficulty: Difficulty::Easy,
        estimated_time: "5 minutter",
        guide_url: None,
    },
    PlatformSeed {
        slug: "discord",
        name: "Discord",
        category: CATEGORY_MESSAGING,
        description: "Chatteplattform. Du må forlate eller overføre eierskap av servere du eier før sletting.",
        difficulty: Difficulty::Medium,
        estimated_time: "10 minutter",
        guide_url: Some("https://support.discord.com/hc/en-us/articles/212500837"),
    },
    PlatformSeed {
        slug: "dropbox",
        name: "Dropbox",
        category: CATEGORY_OTHER,
        description: "Skylagring. Last ned filene dine før du sletter kontoen.",
        difficulty: Difficulty::Easy,
        estimated_time: "5-10 minutter",
        guide_url: Some("https://help.dropbox.com/account-access/delete-account"),
    },
    PlatformSeed {
        slug: "ebay",
        name: "eBay",
        category: CATEGORY_SHOPPING,
        description: "Auksjons- og handelsplattform. Kontoen kan ikke slettes med åpne kjøp, salg eller ubetalte gebyrer.",
        difficulty: Difficulty::Medium,
        estimated_time: "15 minutter",
        guide_url: Some("https://www.ebay.com/help/account/changing-account-settings/closing-account"),
    },
    PlatformSeed {
        slug: "facebook",
        name: "Facebook",
        category: CATEGORY_SOCIAL,
        description: "Verdens største sosiale nettverk. Sletting går via Meta-kontosenteret og har 30 dagers angrefrist.",
        difficulty: Difficulty::Medium,
        estimated_time: "15-20 minutter",
        guide_url: Some("https://www.facebook.com/help/224562897555674"),
    },
    PlatformSeed {
        slug: "google",
        name: "Google",
        category: CATEGORY_OTHER,
        description: "Sletting av Google-kontoen fjerner Gmail, Drive, YouTube-historikk og alt annet knyttet til kontoen.",
        difficulty: Difficulty::Hard,
        estimated_time: "20-30 minutter",
        guide_url: Some("https://support.google.com/accounts/answer/32046"),
    },
    PlatformSeed {
        slug: "instagram",
        name: "Instagram",
        category: CATEGORY_SOCIAL,
        description: "Bildedelingsapp eid av Meta. Sletting går via Meta-kontosenteret, med 30 dagers angrefrist.",
        difficulty: Difficulty::Medium,
        estimated_time: "10-15 minutter",
        guide_url: Some("https://help.instagram.com/139886812848894"),
    },
    PlatformSeed {
        slug: "linkedin",
        name: "LinkedIn",
        category: CATEGORY_SOCIAL,
        description: "Profesjonelt nettverk. Kontoen lukkes fra innstillingene og kan gjenåpnes innen 14 dager.",
        difficulty: Difficulty::Easy,
        estimated_time: "5-10 minutter",
        guide_url: Some("https://www.linkedin.com/help/linkedin/answer/a1342443"),
    },
    PlatformSeed {
        slug: "netflix",
        name: "Netflix",
        category: CATEGORY_STREAMING,
        description: "Strømmetjeneste. Avslutt medlemskapet først; selve kontoen slettes automatisk etter 10 måneder eller via kundeservice.",
        difficulty: Difficulty::Medium,
        estimated_time: "10 minutter",
        guide_url: Some("https://help.netflix.com/en/node/407"),
    },
    PlatformSeed {
        slug: "paypal",
        name: "PayPal",
        category: CATEGORY_OTHER,
        description: "Betalingstjeneste. Saldoen må være null og alle tvister løst før kontoen kan lukkes.",
        difficulty: Difficulty::Medium,
        estimated_time: "10-15 minutter",
        guide_url: Some("https://www.paypal.com/us/cshelp/article/how-do-i-close-my-personal-paypal-account-help166"),
    },
    PlatformSeed {
        slug: "pinterest",
        name: "Pinterest",
        category: CATEGORY_SOCIAL,
        description: "Visuell oppslagstavle. Kontoen kan slettes direkte fra innstillingene.",
        difficulty: Difficulty::Easy,
        estimated_time: "5 minutter",
        guide_url: Some("https://help.pinterest.com/en/article/deactivate-or-close-your-account"),
    },
    PlatformSeed {
        slug: "reddit",
        name: "Reddit",
        category: CATEGORY_SOCIAL,
        description: "Diskusjonsforum. Kontoen slettes fra innstillingene, men innlegg blir liggende anonymisert.",
        difficulty: Difficulty::Easy,
        estimated_time: "5 minutter",
        guide_url: Some("https://support.reddithelp.com/hc/en-us/articles/204579509"),
    },
    PlatformSeed {
        slug: "snapchat",
        name: "Snapchat",
        category: CATEGORY_SOCIAL,
        description: "Meldingsapp. Kontoen deaktiveres i 30 dager før den slettes permanent.",
        difficulty: Difficulty::Easy,
        estimated_time: "5-10 minutter",
        guide_url: Some("https://help.snapchat.com/hc/en-us/articles/7012304746644"),
    },
    PlatformSeed {
        slug: "spotify",
        name: "Spotify",
        category: CATEGORY_STREAMING,
        description: "Musikkstrømming. Premium-abonnement må avsluttes før kontoen kan lukkes via support.",
        difficulty: Difficulty::Medium,
        estimated_time: "10-15 minutter",
        guide_url: Some("https://support.spotify.com/us/article/close-account/"),
    },
    PlatformSeed {
        slug: "steam",
        name: "Steam",
        category: CATEGORY_GAMING,
        description: "Spillplattform. Sletting krever en supporthenvendelse og har 30 dagers ventetid. Kjøpte spill går tapt.",
        difficulty: Difficulty::Hard,
        estimated_time: "30+ minutter",
        guide_url: Some("https://help.steampowered.com/en/faqs/view/452A-B617-B951-BB31"),
    },
    PlatformSeed {
        slug: "telegram",
        name: "Telegram",
        category: CATEGORY_MESSAGING,
        description: "Meldingsapp. Kontoen deaktiveres via en egen nettside, ikke fra appen.",
        difficulty: Difficulty::Easy,
        estimated_time: "5 minutter",
        guide_url: Some("https://telegram.org/deactivate"),
    },
    PlatformSeed {
        slug: "tiktok",
        name: "TikTok",
        category: CATEGORY_SOCIAL,
        description: "Kortvideoapp. Kontoen deaktiveres i 30 dager før permanent sletting.",
        difficulty: Difficulty::Easy,
        estimated_time: "5-10 minutter",
        guide_url: Some("https://support.tiktok.com/en/account-and-privacy/deleting-an-account"),
    },
    PlatformSeed {
        slug: "tinder",
        name: "Tinder",
        category: CATEGORY_DATING,
        description: "Datingapp eid av Match Group. Slett kontoen i appen; å avinstallere appen er ikke nok.",
        difficulty: Difficulty::Easy,
        estimated_time: "5 minutter",
        guide_url: Some("https://www.help.tinder.com/hc/en-us/articles/115003359366"),
    },
    PlatformSeed {
        slug: "twitch",
        name: "Twitch",
        category: CATEGORY_GAMING,
        description: "Strømmeplattform for spill. Kontoen slettes via en egen nettside utenfor innstillingene.",
        difficulty: Difficulty::Easy,
        estimated_time: "5-10 minutter",
        guide_url: Some("https://www.twitch.tv/user/delete-account"),
    },
    PlatformSeed {
        slug: "twitter",
        name: "X (Twitter)",
        category: CATEGORY_SOCIAL,
        description: "Mikroblogg. Kontoen deaktiveres i 30 dager før den slettes permanent.",
        difficulty: Difficulty::Easy,
        estimated_time: "5-10 minutter",
        guide_url: Some("https://help.twitter.com/en/managing-your-account/how-to-deactivate-x-account"),
    },
    PlatformSeed {
        slug: "uber",
        name: "Uber",
        category: CATEGORY_OTHER,
        description: "Transporttjeneste. Kontoen kan slettes i appen; data beholdes i 30 dager før sletting.",
        difficulty: Difficulty::Easy,
        estimated_time: "5 minutter",
        guide_url: Some("https://help.uber.com/riders/article/delete-my-uber-account"),
    },
    PlatformSeed {
        slug: "vinted",
        name: "Vinted",
        category: CATEGORY_SHOPPING,
        description: "Bruktmarked for klær. Pågående salg må avsluttes før kontoen kan slettes.",
        difficulty: Difficulty::Medium,
        estimated_time: "10 minutter",
        guide_url: None,
    },
    PlatformSeed {
        slug: "whatsapp",
        name: "WhatsApp",
        category: CATEGORY_MESSAGING,
        description: "Meldingsapp eid av Meta. Kontoen slettes direkte i appen under innstillinger.",
        difficulty: Difficulty::Easy,
        estimated_time: "5 minutter",
        guide_url: Some("https://faq.whatsapp.com/1372032019221139"),
    },
    PlatformSeed {
        slug: "zalando",
        name: "Zalando",
        category: CATEGORY_SHOPPING,
        description: "Netthandel for mote. Kontosletting gjøres via kundeservice eller personvernskjema.",
        difficulty: Difficulty::Medium,
        estimated_time: "10-15 minutter",
        guide_url: None,
    },
];

/// Look up a catalog entry by slug.
pub fn catalog_entry(slug: &str) -> Option<&'static PlatformSeed> {
    PLATFORM_CATALOG.iter().find(|p| p.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::CURATED_SLUGS;

    #[test]
    fn test_catalog_sorted_and_unique() {
        for pair in PLATFORM_CATALOG.windows(2) {
            assert!(
                pair[0].slug < pair[1].slug,
                "catalog must stay sorted by slug"
            );
        }
    }

    #[test]
    fn test_curated_step_slugs_exist_in_catalog() {
        for slug in CURATED_SLUGS {
            assert!(
                catalog_entry(slug).is_some(),
                "curated steps for '{slug}' but no catalog entry"
            );
        }
    }

    #[test]
    fn test_entries_have_user_facing_copy() {
        for entry in PLATFORM_CATALOG {
            assert!(!entry.name.is_empty());
            assert!(!entry.description.is_empty());
            assert!(!entry.estimated_time.is_empty());
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(catalog_entry("facebook").map(|p| p.name), Some("Facebook"));
        assert!(catalog_entry("myspace").is_none());
    }
}
