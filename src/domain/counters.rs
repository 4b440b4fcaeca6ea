//! Aggregate counts for a category scan.

/// The external authority link categories recognised by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Links to Dewey classification concepts.
    Dewey,
    /// Links to VIAF records for people.
    ViafPerson,
    /// Links to VIAF records for organizations.
    ViafOrganization,
    /// Links to ISNI records for people.
    IsniPerson,
    /// Links to ISNI records for organizations.
    IsniOrganization,
    /// Links to LCSH subject headings for topics.
    LcshTopic,
    /// Links to LCSH subject headings for places.
    LcshPlace,
}

impl LinkKind {
    /// All link kinds, in report order.
    pub const ALL: [Self; 7] = [
        Self::Dewey,
        Self::ViafPerson,
        Self::ViafOrganization,
        Self::IsniPerson,
        Self::IsniOrganization,
        Self::LcshTopic,
        Self::LcshPlace,
    ];
}

/// The counts accumulated while scanning one category.
///
/// Created fresh per category, mutated only during that category's scan and
/// tally, and discarded once written to the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Total RDF triple lines across all scanned files.
    pub rdf_lines: u64,
    /// BNB identifier assignments.
    pub bnb_numbers: u64,
    /// Links to Dewey classification concepts.
    pub dewey: u64,
    /// Links to VIAF records for people.
    pub viaf_person: u64,
    /// Links to VIAF records for organizations.
    pub viaf_organization: u64,
    /// Links to ISNI records for people.
    pub isni_person: u64,
    /// Links to ISNI records for organizations.
    pub isni_organization: u64,
    /// Links to LCSH subject headings for topics.
    pub lcsh_topic: u64,
    /// Links to LCSH subject headings for places.
    pub lcsh_place: u64,
}

impl Counters {
    /// Increments the counter for one classified link line.
    pub const fn record(&mut self, kind: LinkKind) {
        match kind {
            LinkKind::Dewey => self.dewey += 1,
            LinkKind::ViafPerson => self.viaf_person += 1,
            LinkKind::ViafOrganization => self.viaf_organization += 1,
            LinkKind::IsniPerson => self.isni_person += 1,
            LinkKind::IsniOrganization => self.isni_organization += 1,
            LinkKind::LcshTopic => self.lcsh_topic += 1,
            LinkKind::LcshPlace => self.lcsh_place += 1,
        }
    }

    /// The count recorded for one link kind.
    #[must_use]
    pub const fn link_count(&self, kind: LinkKind) -> u64 {
        match kind {
            LinkKind::Dewey => self.dewey,
            LinkKind::ViafPerson => self.viaf_person,
            LinkKind::ViafOrganization => self.viaf_organization,
            LinkKind::IsniPerson => self.isni_person,
            LinkKind::IsniOrganization => self.isni_organization,
            LinkKind::LcshTopic => self.lcsh_topic,
            LinkKind::LcshPlace => self.lcsh_place,
        }
    }

    /// The sum of all link counters.
    #[must_use]
    pub const fn total_links(&self) -> u64 {
        self.dewey
            + self.viaf_person
            + self.viaf_organization
            + self.isni_person
            + self.isni_organization
            + self.lcsh_topic
            + self.lcsh_place
    }
}

/// Line-counting convention for file and identifier totals.
///
/// The tool this replaces counted `lines - 1` per file, relying on every
/// file ending with a trailing blank line, and compensated with `+ 1` when
/// totalling identifier matches. [`CountMode::Legacy`] reproduces those
/// numbers exactly; [`CountMode::Exact`] reports true line and match
/// counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountMode {
    /// Reproduce the historical `lines - 1` / `matches + 1` convention.
    #[default]
    Legacy,
    /// Report true line and match counts.
    Exact,
}

impl CountMode {
    /// A single file's contribution to the RDF line total, given its raw
    /// newline-delimited line count.
    #[must_use]
    pub const fn file_lines(self, raw: u64) -> u64 {
        match self {
            Self::Legacy => raw.saturating_sub(1),
            Self::Exact => raw,
        }
    }

    /// The BNB identifier total, given the raw line count of the
    /// accumulated identifier matches.
    #[must_use]
    pub const fn bnb_total(self, raw: u64) -> u64 {
        match self {
            Self::Legacy => raw.saturating_sub(1) + 1,
            Self::Exact => raw,
        }
    }
}
