//! Curated GDPR contact points for high-traffic platforms.
//!
//! Most platforms bury their privacy contact; this table carries the
//! known-good email addresses and web forms for the platforms users ask
//! about most. Unknown slugs simply have no curated contact -- that is an
//! absence, not an error.

use serde::Serialize;

/// A curated GDPR contact point for one platform.
#[derive(Debug, Clone, Serialize)]
pub struct GdprContact {
    /// Catalog slug this contact belongs to.
    pub slug: &'static str,
    /// Privacy/DPO email address, when the platform accepts email.
    pub email: Option<&'static str>,
    /// Web form for privacy requests, when one exists.
    pub url: Option<&'static str>,
    /// Free-text guidance about how the platform handles requests.
    pub notes: Option<&'static str>,
}

/// The curated contact table. Keep sorted by slug.
pub const GDPR_CONTACTS: &[GdprContact] = &[
    GdprContact {
        slug: "amazon",
        email: None,
        url: Some("https://www.amazon.com/gp/help/customer/contact-us"),
        notes: Some(
            "Kontakt Amazon kundeservice og be om å bli videresendt til personvernavdelingen.",
        ),
    },
    GdprContact {
        slug: "bumble",
        email: Some("DPO@team.bumble.com"),
        url: Some("https://bumble.com/contact"),
        notes: None,
    },
    GdprContact {
        slug: "discord",
        email: Some("privacy@discord.com"),
        url: Some("https://support.discord.com/hc/en-us/requests/new"),
        notes: None,
    },
    GdprContact {
        slug: "facebook",
        email: Some("datarequest@support.facebook.com"),
        url: Some("https://www.facebook.com/help/contact/784491318687824"),
        notes: Some("Facebook anbefaler å bruke deres online skjema for GDPR-forespørsler."),
    },
    GdprContact {
        slug: "google",
        email: None,
        url: Some("https://support.google.com/accounts/troubleshooter/6357590"),
        notes: Some(
            "Google har et dedikert verktøy for GDPR-forespørsler i kontoinnstillingene.",
        ),
    },
    GdprContact {
        slug: "instagram",
        email: None,
        url: Some("https://help.instagram.com/contact/1845713985721890"),
        notes: Some("Instagram håndteres gjennom Meta/Facebook sitt kontosenter."),
    },
    GdprContact {
        slug: "linkedin",
        email: None,
        url: Some("https://www.linkedin.com/help/linkedin/ask/TSO-DPO"),
        notes: Some("LinkedIn har et online skjema for personvernforespørsler."),
    },
    GdprContact {
        slug: "netflix",
        email: Some("privacy@netflix.com"),
        url: Some("https://help.netflix.com/en/contactus"),
        notes: None,
    },
    GdprContact {
        slug: "reddit",
        email: None,
        url: Some("https://www.reddit.com/settings/data-request"),
        notes: Some("Reddit har innebygd funksjon for dataforespørsler i kontoinnstillingene."),
    },
    GdprContact {
        slug: "snapchat",
        email: Some("privacy@snap.com"),
        url: Some("https://support.snapchat.com/en-US/i-need-help"),
        notes: None,
    },
    GdprContact {
        slug: "spotify",
        email: None,
        url: Some("https://support.spotify.com/contact-spotify-privacy/"),
        notes: Some("Bruk Spotify sitt online skjema for personvernforespørsler."),
    },
    GdprContact {
        slug: "steam",
        email: None,
        url: Some("https://help.steampowered.com/"),
        notes: Some("Steam krever kontakt via deres support-system for kontosletting."),
    },
    GdprContact {
        slug: "telegram",
        email: None,
        url: Some("https://telegram.org/deactivate"),
        notes: Some("Telegram-kontoer kan deaktiveres direkte via deres nettside."),
    },
    GdprContact {
        slug: "tiktok",
        email: Some("privacy@tiktok.com"),
        url: Some("https://www.tiktok.com/legal/report/privacy"),
        notes: None,
    },
    GdprContact {
        slug: "tinder",
        email: Some("DPO@match.com"),
        url: Some("https://www.help.tinder.com/hc/requests/new"),
        notes: Some("Tinder eies av Match Group. E-post går til deres personvernombud."),
    },
    GdprContact {
        slug: "twitch",
        email: Some("privacy@twitch.tv"),
        url: Some("https://help.twitch.tv/s/contactsupport"),
        notes: None,
    },
    GdprContact {
        slug: "twitter",
        email: Some("privacy@twitter.com"),
        url: Some("https://help.twitter.com/forms/privacy"),
        notes: Some("X/Twitter aksepterer både e-post og online skjema."),
    },
    GdprContact {
        slug: "whatsapp",
        email: None,
        url: Some("https://www.whatsapp.com/contact/"),
        notes: Some("WhatsApp-kontoer kan slettes direkte i appen under Innstillinger."),
    },
];

/// Look up the curated GDPR contact for a platform slug.
pub fn gdpr_contact(slug: &str) -> Option<&'static GdprContact> {
    GDPR_CONTACTS.iter().find(|c| c.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_slug_resolves() {
        let contact = gdpr_contact("facebook").expect("facebook has a curated contact");
        assert_eq!(contact.email, Some("datarequest@support.facebook.com"));
        assert!(contact.url.is_some());
    }

    #[test]
    fn test_unknown_slug_is_none() {
        assert!(gdpr_contact("myspace").is_none());
        assert!(gdpr_contact("").is_none());
    }

    #[test]
    fn test_every_contact_has_at_least_one_channel() {
        for contact in GDPR_CONTACTS {
            assert!(
                contact.email.is_some() || contact.url.is_some(),
                "{} has neither email nor url",
                contact.slug
            );
        }
    }

    #[test]
    fn test_table_sorted_and_unique() {
        for pair in GDPR_CONTACTS.windows(2) {
            assert!(pair[0].slug < pair[1].slug, "table must stay sorted by slug");
        }
    }
}
