//! GDPR request letter generation.
//!
//! Produces complete, ready-to-send Norwegian request letters for the four
//! statutory GDPR rights: deletion (Art. 17), data portability (Art. 20),
//! access (Art. 15), and rectification (Art. 16). Letters are plain text;
//! the only inputs are the requester identity, the platform name, and two
//! optional free-text fields. No validation happens here -- empty inputs
//! are rendered literally, since this is a presentation surface.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Which GDPR article a letter invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterType {
    /// Art. 17 -- right to erasure ("right to be forgotten").
    Deletion,
    /// Art. 20 -- right to data portability.
    Export,
    /// Art. 15 -- right of access.
    Access,
    /// Art. 16 -- right to rectification.
    Correction,
}

impl LetterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterType::Deletion => "deletion",
            LetterType::Export => "export",
            LetterType::Access => "access",
            LetterType::Correction => "correction",
        }
    }

    /// GDPR article number invoked by this letter type.
    pub fn article(&self) -> u8 {
        match self {
            LetterType::Deletion => 17,
            LetterType::Export => 20,
            LetterType::Access => 15,
            LetterType::Correction => 16,
        }
    }

    /// Parse a letter type, falling back to [`LetterType::Deletion`] for
    /// unknown or empty input. Deletion is the product's main flow, so an
    /// unrecognised request type produces the deletion template.
    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "export" => LetterType::Export,
            "access" => LetterType::Access,
            "correction" => LetterType::Correction,
            _ => LetterType::Deletion,
        }
    }
}

/// Inputs to the letter generator.
#[derive(Debug, Clone)]
pub struct LetterRequest {
    /// Requester's full name, rendered literally.
    pub requester_name: String,
    /// Requester's email address, rendered literally.
    pub requester_email: String,
    /// Display name of the platform the letter is addressed to.
    pub platform_name: String,
    /// Which statutory right to invoke.
    pub letter_type: LetterType,
    /// Username, email, or id on the platform. When `None`, the
    /// account/username line is omitted entirely -- no blank placeholder.
    pub account_identifier: Option<String>,
    /// Free-text block appended to the letter body. For correction
    /// letters this is the list of fields to correct.
    pub additional_info: Option<String>,
}

/// Norwegian month names, indexed by `month0`.
const MONTHS_NB: [&str; 12] = [
    "januar", "februar", "mars", "april", "mai", "juni", "juli", "august", "september", "oktober",
    "november", "desember",
];

/// Format a date the way Norwegian correspondence does: `28. august 2026`.
fn format_date_nb(date: NaiveDate) -> String {
    format!(
        "{}. {} {}",
        date.day(),
        MONTHS_NB[date.month0() as usize],
        date.year()
    )
}

/// Generate a letter dated today (UTC).
pub fn generate_letter(request: &LetterRequest) -> String {
    generate_letter_on(Utc::now().date_naive(), request)
}

/// Generate a letter with an explicit date. Split out from
/// [`generate_letter`] so tests are deterministic.
pub fn generate_letter_on(date: NaiveDate, request: &LetterRequest) -> String {
    match request.letter_type {
        LetterType::Deletion => deletion_letter(date, request),
        LetterType::Export => export_letter(date, request),
        LetterType::Access => access_letter(date, request),
        LetterType::Correction => correction_letter(date, request),
    }
}

/// Fixed email subject line for each letter type, naming the article.
pub fn email_subject(letter_type: LetterType) -> &'static str {
    match letter_type {
        LetterType::Deletion => "GDPR Artikkel 17 - Forespørsel om sletting av personopplysninger",
        LetterType::Export => "GDPR Artikkel 20 - Forespørsel om dataportabilitet",
        LetterType::Access => "GDPR Artikkel 15 - Forespørsel om innsyn i personopplysninger",
        LetterType::Correction => "GDPR Artikkel 16 - Forespørsel om retting av personopplysninger",
    }
}

// ---------------------------------------------------------------------------
// Shared blocks
// ---------------------------------------------------------------------------

/// The "Personlig informasjon" block. The account/username line appears
/// only when an identifier was provided.
fn personal_info_block(request: &LetterRequest) -> String {
    let mut block = format!(
        "Personlig informasjon:\n- Navn: {}\n- E-postadresse: {}",
        request.requester_name, request.requester_email
    );
    if let Some(account) = &request.account_identifier {
        block.push_str(&format!("\n- Konto/brukernavn: {account}"));
    }
    block
}

/// Optional "Tilleggsinformasjon" block, empty when no info was provided.
fn additional_info_block(request: &LetterRequest) -> String {
    match &request.additional_info {
        Some(info) => format!("Tilleggsinformasjon:\n{info}\n\n"),
        None => String::new(),
    }
}

/// Closing signature with the requester identity and letter date.
fn signature_block(date: NaiveDate, request: &LetterRequest) -> String {
    format!(
        "Med vennlig hilsen,\n\n{}\n{}\nDato: {}",
        request.requester_name,
        request.requester_email,
        format_date_nb(date)
    )
}

/// Citation footer naming the invoked article.
fn citation_footer(article: u8) -> String {
    format!(
        "---\nDenne forespørselen er sendt i henhold til:\n\
         - EU General Data Protection Regulation (GDPR) Artikkel {article}\n\
         - Norsk personopplysningslov"
    )
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

fn deletion_letter(date: NaiveDate, request: &LetterRequest) -> String {
    format!(
        "Til {platform},\n\n\
         Jeg skriver til dere i henhold til artikkel 17 i EUs personvernforordning (GDPR), \
         som gir meg rett til å få slettet mine personopplysninger (\"retten til å bli glemt\").\n\n\
         FORESPØRSEL OM SLETTING AV PERSONOPPLYSNINGER\n\n\
         {personal}\n\n\
         Jeg ber herved om at alle personopplysninger dere har lagret om meg slettes permanent \
         fra deres systemer. Dette inkluderer, men er ikke begrenset til:\n\n\
         • Kontoinformasjon og profildata\n\
         • Aktivitetslogger og brukshistorikk\n\
         • Bilder, videoer og annet innhold jeg har lastet opp\n\
         • Meldinger og kommunikasjon\n\
         • Betalingsinformasjon (med unntak av det som kreves av lovgivning)\n\
         • Alle sikkerhetskopier som inneholder mine data\n\
         • Data delt med tredjeparter på mine vegne\n\n\
         {additional}\
         I henhold til GDPR artikkel 12(3) ber jeg om at dere bekrefter slettingen innen \
         30 dager fra mottak av denne forespørselen.\n\n\
         Dersom dere ikke kan etterkomme denne forespørselen, ber jeg om en skriftlig \
         begrunnelse med referanse til relevant lovhjemmel.\n\n\
         Jeg forbeholder meg retten til å klage til Datatilsynet dersom denne forespørselen \
         ikke behandles i henhold til gjeldende lovgivning.\n\n\
         {signature}\n\n\
         {footer}",
        platform = request.platform_name,
        personal = personal_info_block(request),
        additional = additional_info_block(request),
        signature = signature_block(date, request),
        footer = citation_footer(17),
    )
}

fn export_letter(date: NaiveDate, request: &LetterRequest) -> String {
    format!(
        "Til {platform},\n\n\
         Jeg skriver til dere i henhold til artikkel 20 i EUs personvernforordning (GDPR), \
         som gir meg rett til dataportabilitet.\n\n\
         FORESPØRSEL OM EKSPORT AV PERSONOPPLYSNINGER\n\n\
         {personal}\n\n\
         Jeg ber herved om en fullstendig kopi av alle personopplysninger dere har lagret om meg. \
         Jeg ønsker at dataene leveres i et strukturert, alminnelig brukt og maskinlesbart format \
         (f.eks. JSON, CSV eller XML).\n\n\
         Dette inkluderer, men er ikke begrenset til:\n\n\
         • Kontoinformasjon og profildata\n\
         • Aktivitetslogger og brukshistorikk\n\
         • Alt innhold jeg har lastet opp eller opprettet\n\
         • Meldinger og kommunikasjon\n\
         • Preferanser og innstillinger\n\
         • Data utledet fra min bruk av tjenesten\n\n\
         {additional}\
         I henhold til GDPR artikkel 12(3) ber jeg om at dere leverer disse dataene innen \
         30 dager fra mottak av denne forespørselen.\n\n\
         {signature}\n\n\
         {footer}",
        platform = request.platform_name,
        personal = personal_info_block(request),
        additional = additional_info_block(request),
        signature = signature_block(date, request),
        footer = citation_footer(20),
    )
}

fn access_letter(date: NaiveDate, request: &LetterRequest) -> String {
    format!(
        "Til {platform},\n\n\
         Jeg skriver til dere i henhold til artikkel 15 i EUs personvernforordning (GDPR), \
         som gir meg rett til innsyn i mine personopplysninger.\n\n\
         FORESPØRSEL OM INNSYN I PERSONOPPLYSNINGER\n\n\
         {personal}\n\n\
         Jeg ber herved om følgende informasjon:\n\n\
         1. Bekreftelse på om dere behandler mine personopplysninger\n\
         2. En kopi av alle personopplysninger dere har om meg\n\
         3. Formålet med behandlingen\n\
         4. Kategoriene av personopplysninger som behandles\n\
         5. Mottakere eller kategorier av mottakere som dataene er eller vil bli utlevert til\n\
         6. Den planlagte lagringsperioden eller kriteriene for å fastsette denne\n\
         7. Informasjon om kilden til opplysningene dersom de ikke er samlet inn fra meg\n\
         8. Informasjon om automatisert beslutningstaking, inkludert profilering\n\n\
         {additional}\
         I henhold til GDPR artikkel 12(3) ber jeg om svar innen 30 dager fra mottak av \
         denne forespørselen.\n\n\
         {signature}\n\n\
         {footer}",
        platform = request.platform_name,
        personal = personal_info_block(request),
        additional = additional_info_block(request),
        signature = signature_block(date, request),
        footer = citation_footer(15),
    )
}

fn correction_letter(date: NaiveDate, request: &LetterRequest) -> String {
    // For correction letters the additional-info field is the substance of
    // the request; without it we emit a bracketed fill-in placeholder.
    let corrections = request
        .additional_info
        .clone()
        .unwrap_or_else(|| "[Beskriv hvilke opplysninger som er feil og hva de skal endres til]".to_string());

    format!(
        "Til {platform},\n\n\
         Jeg skriver til dere i henhold til artikkel 16 i EUs personvernforordning (GDPR), \
         som gir meg rett til å få rettet unøyaktige personopplysninger.\n\n\
         FORESPØRSEL OM RETTING AV PERSONOPPLYSNINGER\n\n\
         {personal}\n\n\
         Jeg ber herved om at følgende personopplysninger rettes:\n\n\
         {corrections}\n\n\
         I henhold til GDPR artikkel 12(3) ber jeg om at dere bekrefter rettingen innen \
         30 dager fra mottak av denne forespørselen.\n\n\
         {signature}\n\n\
         {footer}",
        platform = request.platform_name,
        personal = personal_info_block(request),
        corrections = corrections,
        signature = signature_block(date, request),
        footer = citation_footer(16),
    )
}
