//! Literal substring recognition of identifier and link triple lines.
//!
//! Lines are classified purely by which fixed namespace substrings they
//! contain. No RDF parsing takes place; all comparisons are case-sensitive
//! containment checks.

use super::counters::LinkKind;

/// Predicate marking a BNB identifier assignment.
pub const ID_PREDICATE: &str = "<http://www.bl.uk/schemas/bibliographic/blterms#bnb>";

/// Predicates whose lines are extracted for link classification.
///
/// These are unbracketed, so extraction casts a wider net than the
/// bracketed predicate checks in [`classify_link`]: an extracted line may
/// still classify as nothing.
pub const LINK_PREDICATES: [&str; 3] = [
    "http://www.w3.org/2004/02/skos/core#broader",
    "http://www.w3.org/2002/07/owl#sameAs",
    "http://www.loc.gov/mads/rdf/v1#isIdentifiedByAuthority",
];

const BROADER: &str = "<http://www.w3.org/2004/02/skos/core#broader>";
const SAME_AS: &str = "<http://www.w3.org/2002/07/owl#sameAs>";
const IDENTIFIED_BY_AUTHORITY: &str = "<http://www.loc.gov/mads/rdf/v1#isIdentifiedByAuthority>";

const DEWEY_CONCEPT: &str = "<http://bnb.data.bl.uk/id/concept/ddc/e2";
const DEWEY_INFO: &str = "http://dewey.info/class/";
const VIAF: &str = "<http://viaf.org/viaf/";
const ISNI: &str = "<http://isni.org/isni/";
const LCSH_SUBJECTS: &str = "<http://id.loc.gov/authorities/subjects/";
const LCSH_TOPIC: &str = "<http://bnb.data.bl.uk/id/concept/lcsh/";
const LCSH_PLACE: &str = "<http://bnb.data.bl.uk/id/concept/place/lcsh/";
const PERSON: &str = "<http://bnb.data.bl.uk/id/person/";
const ORGANIZATION: &str = "<http://bnb.data.bl.uk/id/organization/";

/// Whether the line assigns a BNB identifier.
#[must_use]
pub fn is_identifier_line(line: &str) -> bool {
    line.contains(ID_PREDICATE)
}

/// Whether the line should be extracted for link classification.
#[must_use]
pub fn is_link_line(line: &str) -> bool {
    LINK_PREDICATES.iter().any(|needle| line.contains(needle))
}

/// Classifies a link line against the ordered rules, stopping at the first
/// match.
///
/// The rules are mutually exclusive by construction: a line increments at
/// most one counter. Returns `None` when no rule applies.
#[must_use]
pub fn classify_link(line: &str) -> Option<LinkKind> {
    if (line.contains(BROADER) || line.contains(SAME_AS))
        && line.contains(DEWEY_CONCEPT)
        && line.contains(DEWEY_INFO)
    {
        Some(LinkKind::Dewey)
    } else if line.contains(SAME_AS) {
        if line.contains(VIAF) {
            if line.contains(PERSON) {
                Some(LinkKind::ViafPerson)
            } else if line.contains(ORGANIZATION) {
                Some(LinkKind::ViafOrganization)
            } else {
                None
            }
        } else if line.contains(LCSH_SUBJECTS) {
            if line.contains(LCSH_TOPIC) {
                Some(LinkKind::LcshTopic)
            } else if line.contains(LCSH_PLACE) {
                Some(LinkKind::LcshPlace)
            } else {
                None
            }
        } else {
            None
        }
    } else if line.contains(IDENTIFIED_BY_AUTHORITY) && line.contains(ISNI) {
        if line.contains(PERSON) {
            Some(LinkKind::IsniPerson)
        } else if line.contains(ORGANIZATION) {
            Some(LinkKind::IsniOrganization)
        } else {
            None
        }
    } else {
        None
    }
}
